//! Obsidian adapters

mod rest_api;

pub use rest_api::ObsidianNoteStore;
