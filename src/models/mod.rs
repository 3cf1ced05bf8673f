use serde::{Deserialize, Serialize};

/// A note as the backend returns it.
///
/// `id` and the timestamps are server-assigned: a note without an id is
/// transient (exists only in the edit form), a note with one is persisted
/// and lives in the store collection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub title: String,
    pub content: String,

    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

/// The subset of a note sent to create/update: title + content only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NotePayload {
    pub title: String,
    pub content: String,
}
