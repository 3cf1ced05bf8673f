use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const SUCCESS_DISMISS_MS: i32 = 3000;
const ERROR_DISMISS_MS: i32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Transient, auto-dismissing notifications. Never fatal, never blocking.
#[derive(Clone, Copy)]
pub(crate) struct ToastController {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastController {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into(), SUCCESS_DISMISS_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into(), ERROR_DISMISS_MS);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|ts| ts.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String, dismiss_after_ms: i32) {
        let id = self.next_id.get_untracked().saturating_add(1);
        self.next_id.set(id);

        self.toasts.update(|ts| {
            ts.push(Toast { id, level, message });
        });

        self.schedule_dismiss(id, dismiss_after_ms);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64, after_ms: i32) {
        let Some(win) = web_sys::window() else {
            return;
        };

        let s = *self;
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            s.dismiss(id);
        });

        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            after_ms,
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64, _after_ms: i32) {}
}

/// Renders the toast stack. Mount once at the layout root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<ToastController>();
    let toasts = toaster.toasts;

    view! {
        <div class="pointer-events-none fixed top-4 right-4 z-110 flex w-full max-w-xs flex-col gap-2">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|t| {
                        let tone = match t.level {
                            ToastLevel::Success => "border-border bg-background",
                            ToastLevel::Error => "border-destructive/40 bg-background text-destructive",
                        };
                        let id = t.id;

                        view! {
                            <div class=format!(
                                "pointer-events-auto flex items-start justify-between gap-3 rounded-lg border px-4 py-3 text-sm shadow-md {tone}",
                            )>
                                <span>{t.message}</span>
                                <button
                                    type="button"
                                    class="text-xs text-muted-foreground hover:text-foreground"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "Close"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_removes_only_matching_toast() {
        let t = ToastController::new();
        t.toasts.update(|ts| {
            ts.push(Toast {
                id: 1,
                level: ToastLevel::Success,
                message: "a".to_string(),
            });
            ts.push(Toast {
                id: 2,
                level: ToastLevel::Error,
                message: "b".to_string(),
            });
        });

        t.dismiss(1);

        let left = t.toasts.get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, 2);
    }
}
