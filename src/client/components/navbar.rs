use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl", "Fixdesk" }
                        p { class: "text-xs", "v{VERSION}" }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                if state.is_admin() {
                    Link {
                        to: Route::AdminFixSteps {},
                        class: "btn btn-ghost",
                        "Admin"
                    }
                }
                if state.user.is_some() {
                    a { href: "/api/auth/logout",
                        button { class: "btn btn-outline", "Logout" }
                    }
                } else if state.fetched {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary",
                        "Sign in"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
