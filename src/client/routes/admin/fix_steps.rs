use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowsRotate, FaTrash};
use dioxus_free_icons::Icon;
use uuid::Uuid;

use crate::{
    client::{
        components::toast::use_toasts,
        util::{
            admin::{create_fix_step, delete_fix_step, get_fix_steps},
            telemetry::{report_failure, use_page_view},
        },
    },
    model::fix_step::{parse_comma_list, CreateFixStepDto, FixStepDto},
};

/// Text inputs of the create form; tags and media URLs are comma separated
#[derive(Debug, Clone, Default, PartialEq)]
struct FixStepForm {
    brand: String,
    model: String,
    error_code: String,
    title: String,
    content: String,
    tags: String,
    media_urls: String,
}

impl FixStepForm {
    fn to_dto(&self) -> CreateFixStepDto {
        CreateFixStepDto {
            brand: Some(self.brand.clone()),
            model: Some(self.model.clone()),
            error_code: Some(self.error_code.clone()),
            title: self.title.clone(),
            content: self.content.clone(),
            tags: parse_comma_list(&self.tags),
            media_urls: parse_comma_list(&self.media_urls),
        }
    }
}

#[component]
pub fn AdminFixSteps() -> Element {
    use_page_view();

    let toasts = use_toasts();
    let mut fix_steps = use_signal(Vec::<FixStepDto>::new);
    let mut form = use_signal(FixStepForm::default);
    let mut pending_delete = use_signal(|| None::<Uuid>);

    let refresh = move || {
        spawn(async move {
            match get_fix_steps().await {
                Ok(loaded) => fix_steps.set(loaded),
                Err(e) => toasts.error(report_failure("load fix steps", &e)),
            }
        });
    };

    use_hook(move || refresh());

    let on_create = move |_| {
        let fix_step = form.read().to_dto();
        if !fix_step.has_required_fields() {
            toasts.error("Title and content are required");
            return;
        }

        spawn(async move {
            match create_fix_step(&fix_step).await {
                Ok(updated) => {
                    fix_steps.set(updated);
                    form.set(FixStepForm::default());
                    toasts.success("Fix step created");
                }
                Err(e) => toasts.error(report_failure("create fix step", &e)),
            }
        });
    };

    let mut on_confirm_delete = move |fix_step_id: Uuid| {
        pending_delete.set(None);

        spawn(async move {
            match delete_fix_step(fix_step_id).await {
                Ok(updated) => {
                    fix_steps.set(updated);
                    toasts.success("Fix step deleted");
                }
                Err(e) => toasts.error(report_failure("delete fix step", &e)),
            }
        });
    };

    let current = form.read().clone();
    let count = fix_steps.read().len();

    rsx!(
        Title { "Fix Steps | Fixdesk" }
        div { class: "flex flex-col gap-6",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body gap-2",
                    h2 { class: "card-title", "New fix step" }
                    div { class: "grid grid-cols-3 gap-2",
                        input {
                            class: "input input-bordered",
                            placeholder: "Brand",
                            value: "{current.brand}",
                            oninput: move |e| form.write().brand = e.value(),
                        }
                        input {
                            class: "input input-bordered",
                            placeholder: "Model",
                            value: "{current.model}",
                            oninput: move |e| form.write().model = e.value(),
                        }
                        input {
                            class: "input input-bordered",
                            placeholder: "Error code",
                            value: "{current.error_code}",
                            oninput: move |e| form.write().error_code = e.value(),
                        }
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Title *",
                        value: "{current.title}",
                        oninput: move |e| form.write().title = e.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered min-h-32",
                        placeholder: "Content *",
                        value: "{current.content}",
                        oninput: move |e| form.write().content = e.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Tags, comma separated",
                        value: "{current.tags}",
                        oninput: move |e| form.write().tags = e.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Media URLs, comma separated",
                        value: "{current.media_urls}",
                        oninput: move |e| form.write().media_urls = e.value(),
                    }
                    div { class: "flex justify-end",
                        button { class: "btn btn-primary", onclick: on_create, "Create" }
                    }
                }
            }
            div { class: "flex justify-between items-center",
                h2 { class: "text-lg font-semibold", "Fix steps ({count})" }
                button {
                    class: "btn btn-ghost flex gap-2",
                    onclick: move |_| refresh(),
                    Icon { width: 16, height: 16, icon: FaArrowsRotate }
                    "Refresh"
                }
            }
            div { class: "flex flex-col gap-3",
                {fix_steps.read().iter().map(|fix_step| {
                    let fix_step_id = fix_step.id;
                    let device = [fix_step.brand.as_deref(), fix_step.model.as_deref(), fix_step.error_code.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(" / ");
                    let created_at = fix_step.created_at.format("%Y-%m-%d %H:%M").to_string();
                    let confirming = pending_delete() == Some(fix_step_id);

                    rsx! {
                        div {
                            key: "{fix_step_id}",
                            class: "card bg-base-100 shadow-sm",
                            div { class: "card-body gap-2",
                                div { class: "flex justify-between items-start gap-2",
                                    div {
                                        h3 { class: "font-semibold", "{fix_step.title}" }
                                        if !device.is_empty() {
                                            p { class: "text-sm opacity-70", "{device}" }
                                        }
                                    }
                                    if confirming {
                                        div { class: "flex gap-2",
                                            button {
                                                class: "btn btn-error btn-sm",
                                                onclick: move |_| on_confirm_delete(fix_step_id),
                                                "Delete"
                                            }
                                            button {
                                                class: "btn btn-ghost btn-sm",
                                                onclick: move |_| pending_delete.set(None),
                                                "Cancel"
                                            }
                                        }
                                    } else {
                                        button {
                                            class: "btn btn-ghost btn-sm",
                                            title: "Delete fix step",
                                            onclick: move |_| pending_delete.set(Some(fix_step_id)),
                                            Icon { width: 16, height: 16, icon: FaTrash }
                                        }
                                    }
                                }
                                p { class: "whitespace-pre-wrap", "{fix_step.content}" }
                                div { class: "flex flex-wrap gap-1",
                                    {fix_step.tags.iter().map(|tag| rsx! {
                                        span { key: "{tag}", class: "badge badge-outline", "{tag}" }
                                    })}
                                }
                                ul { class: "text-sm",
                                    {fix_step.media_urls.iter().map(|media_url| rsx! {
                                        li { key: "{media_url}",
                                            a { class: "link", href: "{media_url}", target: "_blank", "{media_url}" }
                                        }
                                    })}
                                }
                                p { class: "text-xs opacity-60", "{created_at}" }
                            }
                        }
                    }
                })}
            }
        }
    )
}
