//! Transient notifications, dismissed by clicking them.

use dioxus::prelude::*;

/// Oldest notifications are dropped past this count
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

/// Handle to the notification list, shared through the context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(self, kind: ToastKind, message: String) {
        let (mut items, mut next_id) = (self.items, self.next_id);

        let id = *next_id.peek();
        next_id.set(id.wrapping_add(1));

        let mut items = items.write();
        items.push(Toast { id, kind, message });
        if items.len() > MAX_TOASTS {
            items.remove(0);
        }
    }

    fn dismiss(self, id: u32) {
        let mut items = self.items;
        items.write().retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "toast toast-end z-50",
            {items.into_iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "alert alert-success cursor-pointer",
                    ToastKind::Error => "alert alert-error cursor-pointer",
                };
                let id = toast.id;

                rsx! {
                    div {
                        key: "{id}",
                        class: class,
                        onclick: move |_| toasts.dismiss(id),
                        span { "{toast.message}" }
                    }
                }
            })}
        }
    }
}
