use std::sync::{Arc, Mutex};
use wasm_bindgen::JsCast;

/// Explicit timer/cancel-on-new-input primitive: each `schedule` call
/// replaces any pending one, so only the last call within the window fires.
#[derive(Clone)]
pub(crate) struct Debouncer {
    delay_ms: i32,
    timer_id: Arc<Mutex<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            timer_id: Arc::new(Mutex::new(None)),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let Some(win) = web_sys::window() else {
            return;
        };

        if let Ok(mut slot) = self.timer_id.lock() {
            if let Some(tid) = slot.take() {
                win.clear_timeout_with_handle(tid);
            }

            let cb = wasm_bindgen::closure::Closure::once_into_js(f);
            let tid = win
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    self.delay_ms,
                )
                .unwrap_or(0);

            *slot = Some(tid);
        }
    }

    #[allow(dead_code)]
    pub fn cancel(&self) {
        if let Ok(mut slot) = self.timer_id.lock() {
            if let Some(tid) = slot.take() {
                if let Some(win) = web_sys::window() {
                    win.clear_timeout_with_handle(tid);
                }
            }
        }
    }
}

/// One-line content preview for list rows.
pub(crate) fn truncate_preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Human-readable timestamp for the detail pane; raw value when unparseable.
pub(crate) fn format_timestamp(ts: Option<&str>) -> String {
    match ts {
        Some(s) => chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| s.to_string()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_preview_short_content_untouched() {
        assert_eq!(truncate_preview("short", 50), "short");
    }

    #[test]
    fn test_truncate_preview_cuts_with_ellipsis() {
        let long = "a".repeat(60);
        let out = truncate_preview(&long, 50);
        assert_eq!(out.chars().count(), 53);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_preview_counts_chars_not_bytes() {
        let s = "é".repeat(50);
        assert_eq!(truncate_preview(&s, 50), s);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(Some("2024-03-02T09:30:00Z")),
            "2024-03-02 09:30"
        );
        assert_eq!(format_timestamp(Some("not-a-date")), "not-a-date");
        assert_eq!(format_timestamp(None), "");
    }
}
