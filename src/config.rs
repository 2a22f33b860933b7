//! Runtime settings shared by both front-ends.
use std::path::PathBuf;

pub const DEFAULT_DECK_FILE: &str = "flashcards.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// JSON file the graphical front-end loads at start and saves after each edit.
    pub deck_path: PathBuf,
    /// Directory searched for, and receiving, plain-text exports.
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            deck_path: PathBuf::from(DEFAULT_DECK_FILE),
            export_dir: PathBuf::from("."),
        }
    }
}
