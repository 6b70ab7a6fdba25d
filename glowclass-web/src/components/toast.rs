use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
    Info,
}

impl ToastKind {
    fn accent_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

/// One transient status message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Push a toast and schedule its removal. Dismissal is automatic only.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, kind: ToastKind, title: &str, message: &str) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    toasts.write().push(Toast {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
    });
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_AFTER_MS).await;
        toasts.write().retain(|toast| toast.id != id);
    });
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_context::<Signal<Vec<Toast>>>();
    let toasts = toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let accent = toast.kind.accent_class();
    rsx! {
        div { class: "toast {accent}",
            p { class: "toast-title", "{toast.title}" }
            p { class: "toast-message", "{toast.message}" }
        }
    }
}
