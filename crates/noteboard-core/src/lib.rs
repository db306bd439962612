//! noteboard-core - Core library for NoteBoard
//!
//! This crate contains the note model, the board state container with its
//! message reducer, search filtering and settings loading. It has no UI
//! dependency; the desktop host renders whatever state lives here.

pub mod board;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use board::{Message, NoteBoard};
pub use error::{Error, Result};
pub use models::{Draft, Note, NoteId};
