use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::user::UserState};

/// Admin page shell: tab navigation, or an access notice for everyone else
#[component]
pub fn AdminLayout() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let state = user_state.read();

    if !state.fetched {
        return rsx! {
            Page { class: "flex justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    if !state.is_admin() {
        return rsx! {
            Page { class: "flex justify-center",
                div { class: "alert alert-warning max-w-md", "Administrator access required" }
            }
        };
    }

    rsx! {
        Page {
            div { role: "tablist", class: "tabs tabs-bordered mb-4",
                Link { to: Route::AdminFixSteps {}, class: "tab", active_class: "tab-active", "Fix Steps" }
                Link { to: Route::AdminLogs {}, class: "tab", active_class: "tab-active", "Logs" }
                Link { to: Route::AdminAnalytics {}, class: "tab", active_class: "tab-active", "Analytics" }
            }
            Outlet::<Route> {}
        }
    }
}
