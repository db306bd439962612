//! UI Components
//!
//! Building blocks of the board screen.

mod note_card;
mod note_detail;
mod note_editor;
mod note_list;
mod toolbar;

pub use note_card::NoteCard;
pub use note_detail::NoteDetail;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use toolbar::Toolbar;
