//! JSON persistence for the deck.
//! The file is a plain array of `{"front": .., "back": ..}` records in deck order.

use crate::models::{Deck, Flashcard};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// On-disk shape of one card. Display state is not persisted.
#[derive(Serialize, Deserialize)]
struct StoredCard {
    front: String,
    back: String,
}

/// Writes the whole deck to `path`, replacing any previous content.
pub fn save_deck(deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let records: Vec<StoredCard> = deck
        .flashcards
        .iter()
        .map(|card| StoredCard {
            front: card.front.clone(),
            back: card.back.clone(),
        })
        .collect();

    let json_string = serde_json::to_string(&records)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    info!("Saved {} cards to '{}'", records.len(), path.display());
    Ok(())
}

/// Reads a deck from `path`, reporting any IO or parse failure.
pub fn try_load_deck(path: impl AsRef<Path>) -> Result<Deck> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let records: Vec<StoredCard> = serde_json::from_str(&contents)?;
    Ok(Deck::new(
        records
            .into_iter()
            .map(|r| Flashcard::new(r.front, r.back))
            .collect(),
    ))
}

/// Reads a deck from `path`. A missing or unreadable file yields an empty deck.
pub fn load_deck(path: impl AsRef<Path>) -> Deck {
    let path = path.as_ref();
    match try_load_deck(path) {
        Ok(deck) => {
            info!("Loaded {} cards from '{}'", deck.len(), path.display());
            deck
        }
        Err(e) => {
            warn!("Starting with an empty deck, could not load '{}': {}", path.display(), e);
            Deck::default()
        }
    }
}

/// A change requested from the Enter/Delete screen.
pub enum DeckEdit<'a> {
    Add { front: String, back: String },
    /// Comma-separated 1-based positions, as typed.
    Remove(&'a str),
}

#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Saved(String),
    /// The edit was refused; neither the deck nor the file changed.
    Rejected(String),
    /// The deck changed in memory but could not be written.
    SaveFailed(String),
}

impl EditOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Saved(m) | Self::Rejected(m) | Self::SaveFailed(m) => m,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Applies `edit` and rewrites the deck file at `path` straight after it.
pub fn edit_and_save(deck: &mut Deck, edit: DeckEdit<'_>, path: impl AsRef<Path>) -> EditOutcome {
    let done = match edit {
        DeckEdit::Add { front, back } => {
            deck.add(front, back);
            "Flashcard added!"
        }
        DeckEdit::Remove(input) => match deck.remove_listed(input) {
            Ok(_) => "Flashcards removed!",
            Err(e) => {
                return EditOutcome::Rejected(format!(
                    "Invalid input, use comma-separated numbers. ({e})"
                ));
            }
        },
    };
    match save_deck(deck, path) {
        Ok(()) => EditOutcome::Saved(done.to_string()),
        Err(e) => {
            error!("Saving deck failed: {}", e);
            EditOutcome::SaveFailed(format!("Could not save flashcards: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_deck() -> Deck {
        let mut deck = Deck::default();
        deck.add("hello", "cześć");
        deck.add("goodbye", "do widzenia");
        deck.add("hello", "cześć");
        deck
    }

    #[test]
    fn test_save_writes_front_back_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flashcards.json");
        save_deck(&create_test_deck(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["front"], "hello");
        assert_eq!(value[1]["back"], "do widzenia");
        assert!(value[0].get("showing_front").is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flashcards.json");
        let original_deck = create_test_deck();

        save_deck(&original_deck, &path).unwrap();
        let loaded = load_deck(&path);

        assert_eq!(loaded, original_deck);
    }

    #[test]
    fn test_roundtrip_drops_display_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flashcards.json");
        let mut deck = create_test_deck();
        deck.flip(0);
        deck.rotate_colors(0.25);

        save_deck(&deck, &path).unwrap();
        let loaded = load_deck(&path);

        assert!(loaded.flashcards.iter().all(|c| c.showing_front && c.color.is_none()));
        assert_eq!(loaded.flashcards[0].front, "hello");
    }

    #[test]
    fn test_load_nonexistent_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent_file_xyz123.json");
        assert!(try_load_deck(&path).is_err());
        assert!(load_deck(&path).is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        assert!(matches!(try_load_deck(&path), Err(StorageError::Json(_))));
        assert!(load_deck(&path).is_empty());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("deck.json");
        assert!(matches!(
            save_deck(&create_test_deck(), &path),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn test_every_edit_rewrites_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flashcards.json");
        let mut deck = Deck::default();

        for front in ["A", "B", "C", "D"] {
            let outcome = edit_and_save(
                &mut deck,
                DeckEdit::Add {
                    front: front.to_string(),
                    back: front.to_lowercase(),
                },
                &path,
            );
            assert_eq!(outcome, EditOutcome::Saved("Flashcard added!".to_string()));
            assert_eq!(try_load_deck(&path).unwrap(), deck);
        }

        let outcome = edit_and_save(&mut deck, DeckEdit::Remove("2,4"), &path);
        assert!(outcome.is_saved());
        assert_eq!(outcome.message(), "Flashcards removed!");
        let on_disk = try_load_deck(&path).unwrap();
        assert_eq!(on_disk, deck);
        assert_eq!(on_disk.flashcards[1].front, "C");
    }

    #[test]
    fn test_rejected_removal_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flashcards.json");
        let mut deck = create_test_deck();
        save_deck(&deck, &path).unwrap();

        let outcome = edit_and_save(&mut deck, DeckEdit::Remove("1, x"), &path);
        assert!(matches!(outcome, EditOutcome::Rejected(_)));
        assert!(outcome.message().starts_with("Invalid input"));
        assert_eq!(deck, create_test_deck());
        assert_eq!(try_load_deck(&path).unwrap(), create_test_deck());
    }

    #[test]
    fn test_edit_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("deck.json");
        let mut deck = Deck::default();

        let outcome = edit_and_save(
            &mut deck,
            DeckEdit::Add {
                front: "cat".to_string(),
                back: "gato".to_string(),
            },
            &path,
        );
        assert!(matches!(outcome, EditOutcome::SaveFailed(_)));
        assert!(outcome.message().starts_with("Could not save flashcards:"));
        assert_eq!(deck.len(), 1);
    }
}
