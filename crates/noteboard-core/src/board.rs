//! Board state container
//!
//! [`NoteBoard`] owns every piece of state the note board renders: the saved
//! notes, the draft being composed, the live search query and the note open in
//! the detail view. UI events arrive as [`Message`] values and are folded into
//! the board by [`NoteBoard::apply`]. Every transition is total.

use crate::models::{Draft, Note, NoteId};
use crate::search;

/// A user intent the board can react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Reveal the note editor
    BeginCompose,
    /// Replace the draft title
    SetDraftTitle(String),
    /// Replace the draft content
    SetDraftContent(String),
    /// Commit the draft as a new note
    SaveDraft,
    /// Close the editor and drop the draft
    DiscardDraft,
    /// Show a note in the detail view
    OpenNote(Note),
    /// Remove a note and close the detail view
    DeleteNote(NoteId),
    /// Replace the live search query
    SetSearchQuery(String),
}

/// All state behind the note board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBoard {
    notes: Vec<Note>,
    draft: Draft,
    is_composing: bool,
    search_query: String,
    selected: Option<Note>,
}

impl NoteBoard {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a message into the board.
    pub fn apply(&mut self, message: Message) {
        tracing::debug!("Applying board message: {:?}", message);
        match message {
            Message::BeginCompose => self.begin_compose(),
            Message::SetDraftTitle(text) => self.update_draft_title(text),
            Message::SetDraftContent(text) => self.update_draft_content(text),
            Message::SaveDraft => {
                self.save_draft();
            }
            Message::DiscardDraft => self.discard_draft(),
            Message::OpenNote(note) => self.open_note(note),
            Message::DeleteNote(id) => {
                self.delete_note(id);
            }
            Message::SetSearchQuery(text) => self.update_search_query(text),
        }
    }

    /// Saved notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The draft currently held by the editor
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the editor is shown
    pub const fn is_composing(&self) -> bool {
        self.is_composing
    }

    /// The live search query, exactly as typed
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The note shown in the detail view, if any
    pub const fn selected(&self) -> Option<&Note> {
        self.selected.as_ref()
    }

    /// Reveal the editor. A draft left over from an earlier session is kept.
    pub fn begin_compose(&mut self) {
        self.is_composing = true;
    }

    pub fn update_draft_title(&mut self, text: impl Into<String>) {
        self.draft.title = text.into();
    }

    pub fn update_draft_content(&mut self, text: impl Into<String>) {
        self.draft.content = text.into();
    }

    /// Commit the draft as a new note and close the editor.
    ///
    /// No validation is done: a blank draft becomes a blank note. The id is
    /// the note count before the save plus one, so after a deletion a new
    /// note can reuse the id of a live note.
    pub fn save_draft(&mut self) -> Note {
        let id = NoteId::new(self.notes.len() as u64 + 1);
        if self.notes.iter().any(|note| note.id == id) {
            tracing::warn!("Assigned note id {} is already in use", id);
        }

        let draft = std::mem::take(&mut self.draft);
        let note = Note::new(id, draft.title, draft.content);
        self.notes.push(note.clone());
        self.is_composing = false;

        tracing::info!("Saved note {} ({} notes total)", id, self.notes.len());
        note
    }

    /// Close the editor and clear the draft without saving.
    pub fn discard_draft(&mut self) {
        self.is_composing = false;
        self.draft.clear();
    }

    /// Show `note` in the detail view.
    ///
    /// The caller is responsible for passing a note that is on the board.
    pub fn open_note(&mut self, note: Note) {
        self.selected = Some(note);
    }

    /// Remove the note with `id` and close the detail view.
    ///
    /// The detail view is closed even when it showed a different note, or
    /// when no note matched. Returns whether anything was removed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.selected = None;

        let removed = self.notes.len() != before;
        if removed {
            tracing::info!("Deleted note {}", id);
        } else {
            tracing::debug!("No note with id {} to delete", id);
        }
        removed
    }

    pub fn update_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Notes matching the search query, in insertion order.
    ///
    /// Computed on every call; the iterator can be cloned to walk it again.
    pub fn visible_notes(&self) -> impl Iterator<Item = &Note> + Clone + '_ {
        search::filter_notes(&self.notes, &self.search_query)
    }
}
