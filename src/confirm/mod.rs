use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use std::sync::{Arc, Mutex};

/// Prompt configuration for the yes/no gate. One explicit shape; the two
/// canonical prompts are constructors and callers may override any field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ConfirmConfig {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Renders the confirm button with destructive emphasis.
    pub destructive: bool,
}

impl ConfirmConfig {
    pub fn discard_changes() -> Self {
        Self {
            title: "Unsaved Changes".to_string(),
            message: "You have unsaved changes. Discard them?".to_string(),
            confirm_label: "Discard".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: true,
        }
    }

    pub fn delete_note(note_title: &str) -> Self {
        Self {
            title: "Delete Note".to_string(),
            message: format!("Are you sure you want to delete \"{note_title}\"?"),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: true,
        }
    }
}

/// Holds the continuation for the prompt currently on screen.
///
/// The continuation runs at most once, and only on explicit confirmation;
/// cancel, backdrop click and Escape all drop it unrun.
#[derive(Clone, Default)]
pub(crate) struct PendingAction(Arc<Mutex<Option<Box<dyn FnOnce() + Send>>>>);

impl PendingAction {
    pub fn arm(&self, f: impl FnOnce() + Send + 'static) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(Box::new(f));
        }
    }

    /// Returns whether the continuation ran.
    pub fn resolve(&self, confirmed: bool) -> bool {
        let taken = self.0.lock().ok().and_then(|mut slot| slot.take());
        match taken {
            Some(f) if confirmed => {
                f();
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone)]
pub(crate) struct ConfirmController {
    pub open: RwSignal<bool>,
    pub config: RwSignal<ConfirmConfig>,
    pending: PendingAction,
}

impl ConfirmController {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            config: RwSignal::new(ConfirmConfig::discard_changes()),
            pending: PendingAction::default(),
        }
    }

    pub fn request(&self, config: ConfirmConfig, on_confirm: impl FnOnce() + Send + 'static) {
        self.pending.arm(on_confirm);
        self.config.set(config);
        self.open.set(true);
    }

    pub fn resolve(&self, confirmed: bool) {
        self.open.set(false);
        self.pending.resolve(confirmed);
    }
}

/// Modal prompt driven by the [`ConfirmController`] in context.
/// Mount once at the layout root.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirm = expect_context::<ConfirmController>();

    // Escape dismisses without confirming. The dialog lives for the whole
    // app session, so the listener handle can be left in place.
    let esc = confirm.clone();
    let _esc_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && esc.open.get_untracked() {
            ev.prevent_default();
            esc.resolve(false);
        }
    });

    let on_backdrop = confirm.clone();
    let on_cancel = confirm.clone();
    let on_confirm = confirm.clone();
    let open = confirm.open;
    let config = confirm.config;

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                class="fixed inset-0 z-60 bg-black/50"
                on:click={
                    let c = on_backdrop.clone();
                    move |_| c.resolve(false)
                }
            />
            <div class="fixed top-[50%] left-[50%] z-100 w-full max-w-sm translate-x-[-50%] translate-y-[-50%] rounded-2xl border bg-background p-6 shadow-lg">
                {
                    let on_cancel = on_cancel.clone();
                    let on_confirm = on_confirm.clone();
                    move || {
                        let cfg = config.get();
                        let confirm_variant = if cfg.destructive {
                            ButtonVariant::Destructive
                        } else {
                            ButtonVariant::Default
                        };

                        let cancel = on_cancel.clone();
                        let ok = on_confirm.clone();

                        view! {
                            <div class="flex flex-col gap-2 text-center sm:text-left">
                                <h3 class="text-lg leading-none font-semibold">{cfg.title}</h3>
                                <p class="text-muted-foreground text-sm">{cfg.message}</p>
                            </div>

                            <footer class="mt-4 flex flex-col-reverse gap-2 sm:flex-row sm:justify-end">
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    on:click=move |_| cancel.resolve(false)
                                >
                                    {cfg.cancel_label}
                                </Button>
                                <Button
                                    variant=confirm_variant
                                    size=ButtonSize::Sm
                                    on:click=move |_| ok.resolve(true)
                                >
                                    {cfg.confirm_label}
                                </Button>
                            </footer>
                        }
                    }
                }
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[test]
    fn test_confirm_runs_continuation_exactly_once() {
        let ran = Arc::new(AtomicUsize::new(0));
        let pending = PendingAction::default();

        let r = ran.clone();
        pending.arm(move || {
            r.fetch_add(1, Ordering::SeqCst);
        });

        assert!(pending.resolve(true));
        assert_eq!(ran.load(Ordering::SeqCst), 1);

        // Already consumed; a second resolve is a no-op.
        assert!(!pending.resolve(true));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dismiss_never_runs_continuation() {
        let ran = Arc::new(AtomicBool::new(false));
        let pending = PendingAction::default();

        let r = ran.clone();
        pending.arm(move || r.store(true, Ordering::SeqCst));

        assert!(!pending.resolve(false));
        assert!(!ran.load(Ordering::SeqCst));

        // The continuation was dropped on dismissal, not deferred.
        assert!(!pending.resolve(true));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_resolve_without_pending_is_noop() {
        let pending = PendingAction::default();
        assert!(!pending.resolve(true));
        assert!(!pending.resolve(false));
    }

    #[test]
    fn test_canonical_configs() {
        let discard = ConfirmConfig::discard_changes();
        assert_eq!(discard.title, "Unsaved Changes");
        assert!(discard.destructive);

        let delete = ConfirmConfig::delete_note("Groceries");
        assert_eq!(delete.title, "Delete Note");
        assert!(delete.message.contains("\"Groceries\""));
        assert_eq!(delete.confirm_label, "Delete");
    }
}
