//! Troubleshooting wizard dialog.
//!
//! Walks the questionnaire in [`crate::model::wizard`]. The brand and model pickers are
//! informational only and do not change the diagnosis.

use dioxus::prelude::*;

use crate::{
    client::{
        components::toast::use_toasts,
        util::{
            directory::{get_all_brands, get_brand_models},
            telemetry::{report_failure, track},
        },
    },
    model::{
        analytics::TrackEventDto,
        directory::{BrandDto, DeviceDto},
        wizard::Wizard,
    },
};

#[component]
pub fn WizardDialog(open: Signal<bool>) -> Element {
    let mut open = open;
    let mut wizard = use_signal(Wizard::new);

    let close = move |_| {
        wizard.write().reset();
        open.set(false);
    };

    if !open() {
        return rsx! {};
    }

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box max-w-2xl flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h3 { class: "text-lg font-bold", "Troubleshooting Wizard" }
                    button { class: "btn btn-sm btn-ghost", onclick: close, "✕" }
                }
                DevicePicker {}
                if wizard.read().has_diagnosis() {
                    DiagnosisView { wizard }
                } else {
                    QuestionView { wizard }
                }
            }
            div { class: "modal-backdrop", onclick: close }
        }
    }
}

#[component]
fn QuestionView(wizard: Signal<Wizard>) -> Element {
    let mut wizard = wizard;
    let state = wizard.read();
    let step_label = state.step_label();
    let step = state.current_step();
    let selected = state.current_answer().map(str::to_string);
    let next_label = if state.is_last_step() {
        "Get Diagnosis"
    } else {
        "Next"
    };

    rsx! {
        p { class: "text-sm opacity-70", "{step_label}" }
        h4 { class: "font-semibold", "{step.question}" }
        div { class: "flex flex-col gap-2",
            {step.options.iter().map(|option| {
                let value = option.value;
                let checked = selected.as_deref() == Some(value);

                rsx! {
                    label {
                        key: "{value}",
                        class: "flex items-center gap-2 cursor-pointer",
                        input {
                            r#type: "radio",
                            class: "radio",
                            name: "wizard-step",
                            checked: checked,
                            onchange: move |_| wizard.write().answer(value),
                        }
                        span { "{option.label}" }
                    }
                }
            })}
        }
        div { class: "flex justify-between",
            button {
                class: "btn",
                disabled: state.step() == 0,
                onclick: move |_| wizard.write().back(),
                "Back"
            }
            button {
                class: "btn btn-primary",
                disabled: !state.can_advance(),
                onclick: move |_| wizard.write().next(),
                "{next_label}"
            }
        }
    }
}

#[component]
fn DiagnosisView(wizard: Signal<Wizard>) -> Element {
    let mut wizard = wizard;
    let diagnosis = wizard.read().diagnosis().to_string();

    rsx! {
        h4 { class: "font-semibold", "Diagnosis" }
        pre { class: "whitespace-pre-wrap bg-base-200 rounded p-4 font-sans", "{diagnosis}" }
        div { class: "flex justify-end",
            button {
                class: "btn",
                onclick: move |_| wizard.write().reset(),
                "Start Over"
            }
        }
    }
}

/// Optional brand and model selection backed by the device directory
#[component]
fn DevicePicker() -> Element {
    let toasts = use_toasts();
    let mut brands = use_signal(Vec::<BrandDto>::new);
    let mut models = use_signal(Vec::<DeviceDto>::new);
    let mut brand = use_signal(|| None::<BrandDto>);
    let mut model = use_signal(String::new);

    use_hook(move || {
        spawn(async move {
            match get_all_brands().await {
                Ok(loaded) => brands.set(loaded),
                Err(e) => toasts.error(report_failure("load brands", &e)),
            }
        });
    });

    let on_brand = move |e: Event<FormData>| {
        let selected = brands.read().iter().find(|b| b.id == e.value()).cloned();

        model.set(String::new());
        models.set(Vec::new());
        brand.set(selected.clone());

        if let Some(selected) = selected {
            spawn(async move {
                match get_brand_models(&selected.id).await {
                    Ok(loaded) => models.set(loaded),
                    Err(e) => toasts.error(report_failure("load models", &e)),
                }
            });
        }
    };

    let on_model = move |e: Event<FormData>| {
        let model_id = e.value();
        let model_name = models
            .read()
            .iter()
            .find(|m| m.id == model_id)
            .map(|m| m.name.clone());

        if let (Some(brand), Some(model_name)) = (brand(), model_name) {
            track(TrackEventDto::device_view(&brand.name, &model_name));
        }
        model.set(model_id);
    };

    let selected_brand = brand.read().as_ref().map(|b| b.id.clone()).unwrap_or_default();

    rsx! {
        div { class: "grid grid-cols-2 gap-2",
            select {
                class: "select select-bordered",
                value: "{selected_brand}",
                onchange: on_brand,
                option { value: "", "Brand (optional)" }
                {brands.read().iter().map(|b| rsx! {
                    option { key: "{b.id}", value: "{b.id}", "{b.name}" }
                })}
            }
            select {
                class: "select select-bordered",
                value: "{model}",
                disabled: brand.read().is_none(),
                onchange: on_model,
                option { value: "", "Model (optional)" }
                {models.read().iter().map(|m| rsx! {
                    option { key: "{m.id}", value: "{m.id}", "{m.name}" }
                })}
            }
        }
    }
}
