use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Server-assigned note identifier.
///
/// Opaque and immutable once created; the remote service is the only party
/// that mints these. On the wire the service calls this field `_id`; that
/// mapping lives at the client boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: String) -> Option<Self> {
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NoteId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string()).ok_or_else(|| anyhow::anyhow!("Invalid note ID"))
    }
}

/// A persisted title/content record.
///
/// Never mutated locally; updates go through the remote service and come
/// back via a collection refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// The transient title/content buffer being composed or edited.
///
/// Exists continuously: initialized empty, overwritten wholesale when
/// entering edit mode, reset to empty after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields non-empty. This is the presentation layer's required-field
    /// predicate; nothing below that layer enforces it.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Selects which draft field a `set_draft_field` call updates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DraftField {
    Title,
    Content,
}

/// What the next submission does: create a new note, or update an existing
/// one. Exactly one value at a time, and the sole discriminator for submit
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditTarget {
    Composing,
    Editing(NoteId),
}

impl EditTarget {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&NoteId> {
        match self {
            EditTarget::Editing(id) => Some(id),
            EditTarget::Composing => None,
        }
    }
}

impl Default for EditTarget {
    fn default() -> Self {
        EditTarget::Composing
    }
}
