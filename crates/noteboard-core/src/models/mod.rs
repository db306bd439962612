//! Data models for NoteBoard

mod draft;
mod note;
mod settings;

pub use draft::Draft;
pub use note::{Note, NoteId};
pub use settings::{Settings, ThemeMode};
