use crate::models::Note;
use leptos::prelude::*;
use std::cmp::Ordering;
use strum::{Display, EnumString};

/// Which pane/behavior the detail area is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum EditMode {
    #[default]
    View,
    Edit,
    Create,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString)]
pub(crate) enum SortKey {
    #[default]
    #[strum(serialize = "updatedAt")]
    UpdatedAt,
    #[strum(serialize = "createdAt")]
    CreatedAt,
    #[strum(serialize = "title")]
    Title,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString)]
pub(crate) enum SortOrder {
    #[strum(serialize = "asc")]
    Asc,
    #[default]
    #[strum(serialize = "desc")]
    Desc,
}

/// Missing or unparseable timestamps sort as epoch zero.
fn timestamp_ms(ts: Option<&str>) -> i64 {
    ts.and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Case-insensitive title ordering, raw string as tie-breaker so the
/// resulting order is total and stable across recomputes.
fn title_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub(crate) fn compare_notes(a: &Note, b: &Note, key: SortKey, order: SortOrder) -> Ordering {
    let cmp = match key {
        SortKey::Title => title_cmp(&a.title, &b.title),
        SortKey::UpdatedAt => {
            timestamp_ms(a.updated_at.as_deref()).cmp(&timestamp_ms(b.updated_at.as_deref()))
        }
        SortKey::CreatedAt => {
            timestamp_ms(a.created_at.as_deref()).cmp(&timestamp_ms(b.created_at.as_deref()))
        }
    };

    match order {
        SortOrder::Asc => cmp,
        SortOrder::Desc => cmp.reverse(),
    }
}

pub(crate) fn sort_notes(mut notes: Vec<Note>, key: SortKey, order: SortOrder) -> Vec<Note> {
    notes.sort_by(|a, b| compare_notes(a, b, key, order));
    notes
}

/// Case-insensitive substring match on title or content.
/// An empty (or all-whitespace) term matches everything.
pub(crate) fn filter_notes(notes: Vec<Note>, term: &str) -> Vec<Note> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return notes;
    }

    notes
        .into_iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&term) || n.content.to_lowercase().contains(&term)
        })
        .collect()
}

/// Single authoritative UI state container.
///
/// Consumers mutate only through the named methods below; derived views are
/// pure functions of the current signal values, recomputed on every read.
#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub notes: RwSignal<Vec<Note>>,
    pub selected_note_id: RwSignal<Option<i64>>,
    pub edit_mode: RwSignal<EditMode>,
    pub is_loading: RwSignal<bool>,
    pub has_unsaved_changes: RwSignal<bool>,
    pub search_term: RwSignal<String>,
    pub sort_by: RwSignal<SortKey>,
    pub sort_order: RwSignal<SortOrder>,

    /// List-load guard: a response is applied only while its id is current,
    /// so a slow earlier load cannot overwrite a newer one.
    notes_request_id: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notes: RwSignal::new(vec![]),
            selected_note_id: RwSignal::new(None),
            edit_mode: RwSignal::new(EditMode::View),
            is_loading: RwSignal::new(false),
            has_unsaved_changes: RwSignal::new(false),
            search_term: RwSignal::new(String::new()),
            sort_by: RwSignal::new(SortKey::UpdatedAt),
            sort_order: RwSignal::new(SortOrder::Desc),
            notes_request_id: RwSignal::new(0),
        }
    }

    // --- mutations ---

    pub fn set_notes(&self, notes: Vec<Note>) {
        self.notes.set(notes);
    }

    pub fn add_note(&self, note: Note) {
        self.notes.update(|notes| notes.push(note));
    }

    /// Replaces the collection entry with a matching id. No-op when absent.
    pub fn update_note_in_list(&self, updated: Note) {
        self.notes.update(|notes| {
            for n in notes.iter_mut() {
                if n.id == updated.id {
                    *n = updated;
                    break;
                }
            }
        });
    }

    pub fn remove_note(&self, id: i64) {
        self.notes.update(|notes| notes.retain(|n| n.id != Some(id)));
    }

    pub fn select_note(&self, id: Option<i64>) {
        self.selected_note_id.set(id);
    }

    pub fn set_edit_mode(&self, mode: EditMode) {
        self.edit_mode.set(mode);
    }

    pub fn set_loading(&self, loading: bool) {
        self.is_loading.set(loading);
    }

    pub fn set_unsaved_changes(&self, dirty: bool) {
        self.has_unsaved_changes.set(dirty);
    }

    pub fn set_search_term(&self, term: String) {
        self.search_term.set(term);
    }

    pub fn set_sort_by(&self, key: SortKey) {
        self.sort_by.set(key);
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.sort_order.set(order);
    }

    // --- list-load guard ---

    pub fn begin_notes_load(&self) -> u64 {
        let id = self.notes_request_id.get_untracked().saturating_add(1);
        self.notes_request_id.set(id);
        id
    }

    pub fn is_current_notes_load(&self, id: u64) -> bool {
        self.notes_request_id.get_untracked() == id
    }

    // --- derived views ---

    /// The collection entry the selection points at, or none (including the
    /// case where the selected note was just removed).
    pub fn selected_note(&self) -> Option<Note> {
        let id = self.selected_note_id.get()?;
        self.notes.get().into_iter().find(|n| n.id == Some(id))
    }

    pub fn sorted_notes(&self) -> Vec<Note> {
        sort_notes(self.notes.get(), self.sort_by.get(), self.sort_order.get())
    }

    /// Search filter applied on top of the sorted view.
    pub fn filtered_notes(&self) -> Vec<Note> {
        filter_notes(self.sorted_notes(), &self.search_term.get())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str, content: &str) -> Note {
        Note {
            id: Some(id),
            title: title.to_string(),
            content: content.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn note_at(id: i64, title: &str, updated_at: &str) -> Note {
        Note {
            id: Some(id),
            title: title.to_string(),
            content: String::new(),
            created_at: None,
            updated_at: Some(updated_at.to_string()),
        }
    }

    #[test]
    fn test_selected_note_resolves_by_id() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "a", ""), note(2, "b", "")]);

        state.select_note(Some(2));
        assert_eq!(state.selected_note().and_then(|n| n.id), Some(2));

        state.select_note(Some(99));
        assert!(state.selected_note().is_none());

        state.select_note(None);
        assert!(state.selected_note().is_none());
    }

    #[test]
    fn test_removing_selected_note_resolves_to_none() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "a", ""), note(2, "b", "")]);
        state.select_note(Some(1));

        state.remove_note(1);
        assert!(state.selected_note().is_none());
        assert_eq!(state.notes.get_untracked().len(), 1);
    }

    #[test]
    fn test_update_note_in_list_replaces_matching_id() {
        let state = AppState::new();
        state.set_notes(vec![note(1, "old", "x"), note(2, "keep", "y")]);

        state.update_note_in_list(note(1, "new", "z"));

        let notes = state.notes.get_untracked();
        assert_eq!(notes[0].title, "new");
        assert_eq!(notes[1].title, "keep");
    }

    #[test]
    fn test_sorted_by_title_asc() {
        let sorted = sort_notes(
            vec![note(1, "B", ""), note(2, "A", "")],
            SortKey::Title,
            SortOrder::Asc,
        );
        let titles: Vec<_> = sorted.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let sorted = sort_notes(
            vec![note(1, "banana", ""), note(2, "Apple", ""), note(3, "cherry", "")],
            SortKey::Title,
            SortOrder::Asc,
        );
        let titles: Vec<_> = sorted.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sorted_by_updated_at_desc_with_missing_as_epoch() {
        let sorted = sort_notes(
            vec![
                note(1, "no-ts", ""),
                note_at(2, "old", "2024-01-01T00:00:00Z"),
                note_at(3, "new", "2024-06-01T00:00:00Z"),
            ],
            SortKey::UpdatedAt,
            SortOrder::Desc,
        );
        let ids: Vec<_> = sorted.iter().filter_map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_matches_title_or_content_case_insensitive() {
        let notes = vec![
            note(1, "Shopping list", "milk"),
            note(2, "Work", "MILK delivery schedule"),
            note(3, "Other", "nothing here"),
        ];

        let hits = filter_notes(notes, "  Milk ");
        let ids: Vec<_> = hits.iter().filter_map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filtered_with_empty_term_equals_sorted() {
        let state = AppState::new();
        state.set_notes(vec![
            note_at(1, "b", "2024-01-02T00:00:00Z"),
            note_at(2, "a", "2024-01-03T00:00:00Z"),
            note_at(3, "c", "2024-01-01T00:00:00Z"),
        ]);
        state.set_search_term(String::new());

        assert_eq!(state.filtered_notes(), state.sorted_notes());
    }

    #[test]
    fn test_sort_key_select_values_roundtrip() {
        use std::str::FromStr;
        assert_eq!(SortKey::UpdatedAt.to_string(), "updatedAt");
        assert_eq!(SortKey::from_str("title").ok(), Some(SortKey::Title));
        assert_eq!(SortOrder::from_str("asc").ok(), Some(SortOrder::Asc));
    }
}
