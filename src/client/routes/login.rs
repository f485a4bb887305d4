use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{toast::use_toasts, Page},
    router::Route,
    store::user::UserState,
    util::{telemetry::report_failure, user::create_session},
};

/// Session sign-in with an access token from the auth provider
#[component]
pub fn Login() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let mut token = use_signal(String::new);

    let on_submit = move |_| {
        let access_token = token().trim().to_string();
        if access_token.is_empty() {
            return;
        }

        spawn(async move {
            match create_session(access_token).await {
                Ok(user) => {
                    user_state.set(UserState {
                        user: Some(user),
                        fetched: true,
                    });
                    token.set(String::new());
                    navigator.push(Route::Home {});
                }
                Err(e) => toasts.error(report_failure("sign in", &e)),
            }
        });
    };

    rsx!(
        Title { "Sign in | Fixdesk" }
        Page { class: "flex justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-md",
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Sign in" }
                    textarea {
                        class: "textarea textarea-bordered",
                        placeholder: "Access token",
                        value: "{token}",
                        oninput: move |e| token.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: token.read().trim().is_empty(),
                        onclick: on_submit,
                        "Sign in"
                    }
                }
            }
        }
    )
}
