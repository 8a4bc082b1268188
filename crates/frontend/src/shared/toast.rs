//! Centralized toast notifications.
//!
//! Modules report successes and failures here; toasts auto-dismiss
//! after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Toast queue provided at the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(ToastEntry { id, kind, message });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|entries| entries.retain(|t| t.id != id));
        });
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|entries| entries.retain(|t| t.id != id));
    }
}

/// Renders the toast stack. Must be mounted exactly once, at the app
/// root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast: ToastEntry| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| svc.dismiss(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
