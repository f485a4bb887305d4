use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use uuid::Uuid;

use crate::{
    client::{
        components::toast::use_toasts,
        store::user::UserState,
        util::{
            api::ApiError,
            note::{add_note, delete_note, get_notes},
            telemetry::report_failure,
        },
    },
    model::note::{NoteDto, NoteScopeDto},
};

/// The signed-in user's notes for one system and error code.
///
/// Renders nothing without a session user and reloads when the session user changes.
/// Key the component by scope so a new scope reloads the list.
#[component]
pub fn NotesPanel(system_name: String, error_code: String) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let toasts = use_toasts();

    let scope = use_signal(|| NoteScopeDto {
        system_name: system_name.clone(),
        error_code: error_code.clone(),
    });
    let mut notes = use_signal(Vec::<NoteDto>::new);
    let mut draft = use_signal(String::new);
    let mut signed_out = use_signal(|| false);

    use_effect(move || {
        let user_id = user_state.read().user_id();
        signed_out.set(false);
        notes.set(Vec::new());

        if user_id.is_none() {
            return;
        }

        spawn(async move {
            match get_notes(&scope()).await {
                Ok(loaded) => notes.set(loaded),
                Err(ApiError::NotFound) => signed_out.set(true),
                Err(e) => toasts.error(report_failure("load notes", &e)),
            }
        });
    });

    if user_state.read().user.is_none() || signed_out() {
        return rsx! {};
    }

    let on_add = move |_| {
        let note = draft();
        if note.trim().is_empty() {
            return;
        }

        spawn(async move {
            match add_note(&scope(), note).await {
                Ok(updated) => {
                    notes.set(updated);
                    draft.set(String::new());
                }
                Err(e) => toasts.error(report_failure("add note", &e)),
            }
        });
    };

    let on_delete = move |note_id: Uuid| {
        spawn(async move {
            match delete_note(&scope(), note_id).await {
                Ok(updated) => notes.set(updated),
                Err(e) => toasts.error(report_failure("delete note", &e)),
            }
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "My notes for {error_code}" }
                div { class: "flex gap-2",
                    textarea {
                        class: "textarea textarea-bordered flex-1",
                        placeholder: "Add a service note...",
                        value: "{draft}",
                        oninput: move |e| draft.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: draft.read().trim().is_empty(),
                        onclick: on_add,
                        "Add"
                    }
                }
                if notes.read().is_empty() {
                    p { class: "text-sm opacity-70", "No notes yet" }
                }
                ul { class: "flex flex-col gap-2",
                    {notes.read().iter().map(|note| {
                        let note_id = note.id;
                        let created_at = note.created_at.format("%Y-%m-%d %H:%M").to_string();

                        rsx! {
                            li {
                                key: "{note_id}",
                                class: "flex justify-between items-start gap-2 p-2 rounded bg-base-200",
                                div {
                                    p { class: "whitespace-pre-wrap", "{note.note}" }
                                    p { class: "text-xs opacity-60", "{created_at}" }
                                }
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    title: "Delete note",
                                    onclick: move |_| on_delete(note_id),
                                    Icon { width: 16, height: 16, icon: FaTrash }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
