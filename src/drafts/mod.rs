use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input, Label, Spinner, Textarea};
use crate::models::{Note, NotePayload};
use crate::state::AppContext;
use leptos::prelude::*;

pub(crate) const TITLE_MAX_CHARS: usize = 200;
pub(crate) const CONTENT_MAX_CHARS: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FieldError {
    Required,
    TooLong { max: usize },
}

impl FieldError {
    pub fn message(&self, field: &str) -> String {
        match self {
            FieldError::Required => format!("{field} is required"),
            FieldError::TooLong { max } => format!("{field} must be at most {max} characters"),
        }
    }
}

/// In-progress title/content pair plus the baseline it is compared against
/// for dirty tracking. Limits are counted in characters, not bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteDraft {
    pub title: String,
    pub content: String,
    baseline_title: String,
    baseline_content: String,
}

impl NoteDraft {
    /// `None` starts a create draft; `Some` loads an existing note's values.
    pub fn from_note(note: Option<&Note>) -> Self {
        let (title, content) = match note {
            Some(n) => (n.title.clone(), n.content.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            baseline_title: title.clone(),
            baseline_content: content.clone(),
            title,
            content,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.title != self.baseline_title || self.content != self.baseline_content
    }

    pub fn title_error(&self) -> Option<FieldError> {
        if self.title.trim().is_empty() {
            Some(FieldError::Required)
        } else if self.title.chars().count() > TITLE_MAX_CHARS {
            Some(FieldError::TooLong {
                max: TITLE_MAX_CHARS,
            })
        } else {
            None
        }
    }

    pub fn content_error(&self) -> Option<FieldError> {
        if self.content.is_empty() {
            Some(FieldError::Required)
        } else if self.content.chars().count() > CONTENT_MAX_CHARS {
            Some(FieldError::TooLong {
                max: CONTENT_MAX_CHARS,
            })
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.title_error().is_none() && self.content_error().is_none()
    }

    /// Payload for submission: title trimmed, content untouched.
    /// Emits nothing while either field fails validation.
    pub fn submit(&self) -> Option<NotePayload> {
        if !self.is_valid() {
            return None;
        }
        Some(NotePayload {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
        })
    }
}

/// Title/content editor for both create and edit mode.
///
/// Pushes dirty state into the store's unsaved-changes flag on every edit,
/// emits a validated payload through `on_save`, and resets whenever `note`
/// switches identity.
#[component]
pub fn NoteForm(
    #[prop(into)] note: Signal<Option<Note>>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<NotePayload>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let title: RwSignal<String> = RwSignal::new(String::new());
    let content: RwSignal<String> = RwSignal::new(String::new());
    let baseline: RwSignal<(String, String)> = RwSignal::new((String::new(), String::new()));
    let submitted: RwSignal<bool> = RwSignal::new(false);

    let draft = move || {
        let (baseline_title, baseline_content) = baseline.get();
        NoteDraft {
            title: title.get(),
            content: content.get(),
            baseline_title,
            baseline_content,
        }
    };

    // Reset the draft whenever a different note is loaded (or we switch
    // between create and edit); this also clears the unsaved flag.
    Effect::new(move |prev_id: Option<Option<i64>>| {
        let n = note.get();
        let id = n.as_ref().and_then(|n| n.id);

        if prev_id != Some(id) {
            let d = NoteDraft::from_note(n.as_ref());
            baseline.set((d.baseline_title.clone(), d.baseline_content.clone()));
            title.set(d.title);
            content.set(d.content);
            submitted.set(false);
            app_state.0.set_unsaved_changes(false);
        }

        id
    });

    // Report dirty state on every draft change.
    Effect::new(move |_| {
        let dirty = draft().is_dirty();
        app_state.0.set_unsaved_changes(dirty);
    });

    let title_error = move || {
        let d = draft();
        let touched = submitted.get() || d.title != baseline.get().0;
        if touched {
            d.title_error().map(|e| e.message("Title"))
        } else {
            None
        }
    };

    let content_error = move || {
        let d = draft();
        let touched = submitted.get() || d.content != baseline.get().1;
        if touched {
            d.content_error().map(|e| e.message("Content"))
        } else {
            None
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);

        if let Some(payload) = draft().submit() {
            on_save.run(payload);
        }
    };

    let on_cancel_click = move |_| {
        app_state.0.set_unsaved_changes(false);
        on_cancel.run(());
    };

    view! {
        <form class="flex h-full flex-col gap-3" on:submit=on_submit>
            <div class="flex flex-col gap-1.5">
                <Label html_for="note-title" class="text-xs">"Title"</Label>
                <Input
                    id="note-title"
                    placeholder="Note title"
                    bind_value=title
                    class="h-8 text-sm"
                />
                <Show when=move || title_error().is_some() fallback=|| ().into_view()>
                    <p class="text-xs text-destructive">{move || title_error()}</p>
                </Show>
            </div>

            <div class="flex flex-1 flex-col gap-1.5">
                <Label html_for="note-content" class="text-xs">"Content"</Label>
                <Textarea
                    id="note-content"
                    placeholder="Write your note..."
                    bind_value=content
                    class="min-h-[200px] flex-1 text-sm"
                />
                <div class="flex items-center justify-between">
                    <Show when=move || content_error().is_some() fallback=|| ().into_view()>
                        <p class="text-xs text-destructive">{move || content_error()}</p>
                    </Show>
                    <p class="ml-auto text-xs text-muted-foreground">
                        {move || format!("{}/{}", content.get().chars().count(), CONTENT_MAX_CHARS)}
                    </p>
                </div>
            </div>

            <div class="flex items-center justify-end gap-2">
                <Button
                    attr:r#type="button"
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on:click=on_cancel_click
                >
                    "Cancel"
                </Button>
                <Button size=ButtonSize::Sm attr:disabled=move || saving.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || saving.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </span>
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_whitespace_only_title_fails() {
        let d = draft("   ", "body");
        assert_eq!(d.title_error(), Some(FieldError::Required));
        assert!(d.submit().is_none());
    }

    #[test]
    fn test_title_over_limit_fails() {
        let d = draft(&"x".repeat(TITLE_MAX_CHARS + 1), "body");
        assert_eq!(
            d.title_error(),
            Some(FieldError::TooLong {
                max: TITLE_MAX_CHARS
            })
        );
        assert!(d.submit().is_none());
    }

    #[test]
    fn test_title_at_limit_passes() {
        let d = draft(&"x".repeat(TITLE_MAX_CHARS), "body");
        assert!(d.title_error().is_none());
    }

    #[test]
    fn test_content_at_limit_passes_over_fails() {
        let at = draft("t", &"y".repeat(CONTENT_MAX_CHARS));
        assert!(at.content_error().is_none());
        assert!(at.submit().is_some());

        let over = draft("t", &"y".repeat(CONTENT_MAX_CHARS + 1));
        assert_eq!(
            over.content_error(),
            Some(FieldError::TooLong {
                max: CONTENT_MAX_CHARS
            })
        );
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // Multibyte characters: 200 of them is within the title limit even
        // though the byte length is far larger.
        let d = draft(&"ä".repeat(TITLE_MAX_CHARS), "body");
        assert!(d.title_error().is_none());
    }

    #[test]
    fn test_empty_content_is_required() {
        let d = draft("t", "");
        assert_eq!(d.content_error(), Some(FieldError::Required));
    }

    #[test]
    fn test_submit_trims_title_keeps_content() {
        let d = draft("  Title  ", "  content  ");
        let p = d.submit().expect("valid draft should emit a payload");
        assert_eq!(p.title, "Title");
        assert_eq!(p.content, "  content  ");
    }

    #[test]
    fn test_dirty_tracks_against_baseline() {
        let note = Note {
            id: Some(1),
            title: "t".to_string(),
            content: "c".to_string(),
            created_at: None,
            updated_at: None,
        };

        let mut d = NoteDraft::from_note(Some(&note));
        assert!(!d.is_dirty());

        d.content = "changed".to_string();
        assert!(d.is_dirty());

        d.content = "c".to_string();
        assert!(!d.is_dirty());
    }

    #[test]
    fn test_create_draft_starts_empty_and_clean() {
        let d = NoteDraft::from_note(None);
        assert!(!d.is_dirty());
        assert_eq!(d.title_error(), Some(FieldError::Required));
    }
}
