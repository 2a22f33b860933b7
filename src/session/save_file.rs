//! Save-to-file wizard: pick an existing `.txt` file or create a new one,
//! choose append or overwrite, then write the plain-text export.

use super::{Result, SessionError};
use crate::export::text::{self, WriteMode};
use crate::models::Deck;
use log::{error, warn};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveStage {
    SelectFile,
    SelectMode { file: PathBuf },
    NameNewFile,
    Finished { success: bool, message: String },
}

pub struct SaveFileSession {
    export_dir: PathBuf,
    existing: Vec<PathBuf>,
    stage: SaveStage,
}

impl SaveFileSession {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        let export_dir = export_dir.into();
        let existing = text::list_text_files(&export_dir).unwrap_or_else(|e| {
            warn!("Cannot list text files in '{}': {}", export_dir.display(), e);
            Vec::new()
        });
        Self {
            export_dir,
            existing,
            stage: SaveStage::SelectFile,
        }
    }

    pub fn stage(&self) -> &SaveStage {
        &self.stage
    }

    /// Labels of the file choices: existing files, then "Create New File".
    pub fn options(&self) -> Vec<String> {
        self.existing
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .chain(std::iter::once("Create New File".to_string()))
            .collect()
    }

    /// Picks option `index` of [`options`](Self::options).
    pub fn select(&mut self, index: usize) -> Result<()> {
        if self.stage != SaveStage::SelectFile {
            return Err(SessionError::WrongStage("pick a file"));
        }
        self.stage = match self.existing.get(index) {
            Some(file) => SaveStage::SelectMode { file: file.clone() },
            None if index == self.existing.len() => SaveStage::NameNewFile,
            None => return Err(SessionError::NoSuchOption(index)),
        };
        Ok(())
    }

    pub fn choose_mode(&mut self, mode: WriteMode, deck: &Deck) -> Result<()> {
        let SaveStage::SelectMode { file } = &self.stage else {
            return Err(SessionError::WrongStage("choose append or overwrite"));
        };
        let file = file.clone();
        self.write(deck, &file, mode);
        Ok(())
    }

    /// Names the new file. New files are always written from scratch.
    pub fn submit_name(&mut self, name: &str, deck: &Deck) -> Result<()> {
        if self.stage != SaveStage::NameNewFile {
            return Err(SessionError::WrongStage("name a new file"));
        }
        let path = self.export_dir.join(text::text_file_name(name));
        self.write(deck, &path, WriteMode::Overwrite);
        Ok(())
    }

    /// Writes to a path chosen outside the wizard (e.g. a file dialog).
    pub fn save_to_path(&mut self, path: &Path, deck: &Deck) {
        self.write(deck, path, WriteMode::Overwrite);
    }

    fn write(&mut self, deck: &Deck, path: &Path, mode: WriteMode) {
        self.stage = match text::write_text_file(deck, path, mode) {
            Ok(()) => SaveStage::Finished {
                success: true,
                message: "Flashcards saved successfully!".to_string(),
            },
            Err(e) => {
                error!("Text export to '{}' failed: {}", path.display(), e);
                SaveStage::Finished {
                    success: false,
                    message: format!("Error: {e}"),
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_deck() -> Deck {
        let mut deck = Deck::default();
        deck.add("cat", "gato");
        deck
    }

    #[test]
    fn test_options_list_existing_then_new() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("old.txt"), "x").unwrap();
        let session = SaveFileSession::new(dir.path());
        assert_eq!(session.options(), vec!["old.txt", "Create New File"]);
    }

    #[test]
    fn test_append_to_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.txt");
        fs::write(&path, "keep\n").unwrap();
        let deck = create_test_deck();

        let mut session = SaveFileSession::new(dir.path());
        session.select(0).unwrap();
        assert_eq!(session.stage(), &SaveStage::SelectMode { file: path.clone() });
        session.choose_mode(WriteMode::Append, &deck).unwrap();

        assert!(matches!(session.stage(), SaveStage::Finished { success: true, .. }));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "keep\nFront: cat\nBack:  gato\n\n"
        );
    }

    #[test]
    fn test_new_file_with_blank_name() {
        let dir = TempDir::new().unwrap();
        let deck = create_test_deck();

        let mut session = SaveFileSession::new(dir.path());
        assert_eq!(session.options(), vec!["Create New File"]);
        session.select(0).unwrap();
        assert_eq!(session.stage(), &SaveStage::NameNewFile);
        session.submit_name("   ", &deck).unwrap();

        let written = fs::read_to_string(dir.path().join("flashcards.txt")).unwrap();
        assert_eq!(written, text::format_text(&deck));
    }

    #[test]
    fn test_bad_choices() {
        let dir = TempDir::new().unwrap();
        let deck = create_test_deck();
        let mut session = SaveFileSession::new(dir.path());
        assert_eq!(session.select(3), Err(SessionError::NoSuchOption(3)));
        assert!(session.choose_mode(WriteMode::Overwrite, &deck).is_err());
        assert!(session.submit_name("x", &deck).is_err());
    }

    #[test]
    fn test_write_failure_message() {
        let dir = TempDir::new().unwrap();
        let mut session = SaveFileSession::new(dir.path());
        session.save_to_path(&dir.path().join("missing").join("x.txt"), &create_test_deck());
        match session.stage() {
            SaveStage::Finished { success, message } => {
                assert!(!success);
                assert!(message.starts_with("Error: "));
            }
            other => panic!("unexpected stage {other:?}"),
        }
    }
}
