use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{toast::Toasts, ToastContainer},
    router::Route,
    store::user::UserState,
    util::user::get_user,
};

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(Toasts::new);

    use_hook(move || {
        spawn(async move {
            let user = match get_user().await {
                Ok(user) => user,
                Err(e) => {
                    tracing::error!("Failed to fetch session user: {}", e);
                    None
                }
            };

            user_state.set(UserState {
                user,
                fetched: true,
            });
        });
    });

    rsx! {
        Router::<Route> {}
        ToastContainer {}
    }
}
