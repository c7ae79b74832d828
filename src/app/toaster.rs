use leptos::prelude::*;

use crate::toast::{Toast, ToastKind, ToastQueue, TOAST_LIFETIME};

#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    /// Shows a toast and schedules its dismissal.
    pub fn notify(&self, kind: ToastKind, title: impl Into<String>, description: Option<String>) {
        let queue = self.0;
        let Some(id) = queue.try_update(|q| q.push(kind, title.into(), description)) else {
            return;
        };
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            TOAST_LIFETIME,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.0.try_update(|q| q.dismiss(id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(RwSignal::new(ToastQueue::default()));
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
            <For
                each=move || toasts.0.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let accent = match toast.kind {
                        ToastKind::Success => "border-green-500",
                        ToastKind::Error => "border-red-500",
                    };
                    let id = toast.id;
                    view! {
                        <li
                            role="status"
                            class=format!(
                                "relative p-4 pr-8 rounded-lg border-l-4 {accent} bg-card text-card-foreground shadow-lg",
                            )
                        >
                            <p class="font-semibold">{toast.title}</p>
                            {toast
                                .description
                                .map(|d| view! { <p class="text-sm text-muted-foreground">{d}</p> })}
                            <button
                                type="button"
                                class="absolute top-2 right-2 text-muted-foreground hover:text-foreground"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
