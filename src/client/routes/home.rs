use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaWrench};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{NotesPanel, Page, WizardDialog},
        util::telemetry::{track, use_page_view},
    },
    model::analytics::TrackEventDto,
};

/// An error code the user looked up
#[derive(Debug, Clone, PartialEq)]
struct Lookup {
    system_name: String,
    error_code: String,
}

#[component]
pub fn Home() -> Element {
    use_page_view();

    let mut system_name = use_signal(String::new);
    let mut error_code = use_signal(String::new);
    let mut lookup = use_signal(|| None::<Lookup>);
    let mut wizard_open = use_signal(|| false);

    let on_search = move |_| {
        let system = system_name().trim().to_string();
        let code = error_code().trim().to_string();
        if system.is_empty() || code.is_empty() {
            return;
        }

        track(TrackEventDto::error_code_search(&code, &system));
        lookup.set(Some(Lookup {
            system_name: system,
            error_code: code,
        }));
    };

    let on_open_wizard = move |_| {
        track(TrackEventDto::button_click("Troubleshooting Wizard", None));
        wizard_open.set(true);
    };

    rsx!(
        Title { "Fixdesk" }
        Meta {
            name: "description",
            content: "Appliance error code lookup, service notes and troubleshooting."
        }
        Page { class: "flex flex-col gap-6",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Error code lookup" }
                    div { class: "flex flex-wrap gap-2",
                        input {
                            class: "input input-bordered flex-1",
                            placeholder: "System (e.g. Heat pump)",
                            value: "{system_name}",
                            oninput: move |e| system_name.set(e.value()),
                        }
                        input {
                            class: "input input-bordered flex-1",
                            placeholder: "Error code (e.g. E7)",
                            value: "{error_code}",
                            oninput: move |e| error_code.set(e.value()),
                        }
                        button {
                            class: "btn btn-primary flex gap-2",
                            onclick: on_search,
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                            "Look up"
                        }
                    }
                    div {
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: on_open_wizard,
                            Icon { width: 16, height: 16, icon: FaWrench }
                            "Troubleshooting Wizard"
                        }
                    }
                }
            }
            if let Some(current) = lookup() {
                NotesPanel {
                    key: "{current.system_name}:{current.error_code}",
                    system_name: current.system_name.clone(),
                    error_code: current.error_code.clone(),
                }
            }
            WizardDialog { open: wizard_open }
        }
    )
}
