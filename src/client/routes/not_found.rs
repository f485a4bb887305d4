use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, util::telemetry::use_page_view};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_page_view();

    rsx!(
        Page { class: "flex flex-col items-center gap-4",
            p { class: "text-2xl", "Page not found" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
        }
    )
}
