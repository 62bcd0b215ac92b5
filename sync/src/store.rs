use nk_core::{Draft, DraftField, EditTarget, Note, NoteId};
use serde::{Deserialize, Serialize};

/// The single holder of UI-visible state: the displayed note collection,
/// the in-progress draft, the edit target, and the last sync failure.
///
/// Operations are pure in-memory mutations; the store never issues network
/// calls. It is constructed once per session and passed explicitly to the
/// controller and the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStore {
    notes: Vec<Note>,
    draft: Draft,
    edit_target: EditTarget,
    last_error: Option<String>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrite the collection. The order is whatever the
    /// service returned; nothing here re-sorts it.
    pub fn replace_collection(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Update one draft field. No validation happens here; the
    /// required-field gate belongs to the presentation layer.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Title => self.draft.title = value.into(),
            DraftField::Content => self.draft.content = value.into(),
        }
    }

    /// Enter edit mode on `note`: the edit target and the draft change
    /// together, in one call, so no intermediate state is observable.
    pub fn begin_edit(&mut self, note: &Note) {
        self.edit_target = EditTarget::Editing(note.id.clone());
        self.draft = Draft::new(note.title.clone(), note.content.clone());
    }

    /// Reset to composing an empty draft.
    pub fn clear_draft(&mut self) {
        self.edit_target = EditTarget::Composing;
        self.draft = Draft::default();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Consume the last recorded failure, if any.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find_note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn edit_target(&self) -> &EditTarget {
        &self.edit_target
    }
}
