//! Note domain module

mod markdown_note;

pub use markdown_note::{sanitize_file_name, Note, NotePath, NOTE_TYPE};
