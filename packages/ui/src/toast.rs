//! Transient notifications.
//!
//! A signal-backed queue provided at the app root; any component can push a
//! toast and the [`Toaster`] overlay renders and expires them.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast and schedule its removal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = toasts.write().push(level, message);
    let mut toasts = *toasts;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        toasts.write().dismiss(id);
    });
}

/// Provides the toast queue and renders active toasts above the app.
#[component]
pub fn Toaster(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}

        div {
            class: "toast-stack",
            style: "position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 3000;",
            for toast in toasts().entries.iter() {
                div {
                    key: "{toast.id}",
                    class: "{toast.level.class()}",
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.write().dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "one");
        let b = toasts.push(ToastLevel::Error, "two");
        assert_ne!(a, b);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "one");
        let b = toasts.push(ToastLevel::Success, "two");
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].id, b);
        // Dismissing twice is harmless.
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
    }
}
