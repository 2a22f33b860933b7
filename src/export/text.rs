//! Plain-text export. Write only: there is no reader for this format.

use crate::models::Deck;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_STEM: &str = "flashcards";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Overwrite,
}

/// Renders every card as a `Front:`/`Back:` block followed by a blank line.
pub fn format_text(deck: &Deck) -> String {
    deck.flashcards
        .iter()
        .map(|card| format!("Front: {}\nBack:  {}\n\n", card.front, card.back))
        .collect()
}

pub fn write_text_file(deck: &Deck, path: impl AsRef<Path>, mode: WriteMode) -> io::Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Append => options.append(true).create(true),
        WriteMode::Overwrite => options.write(true).truncate(true).create(true),
    };
    let mut file = options.open(path)?;
    file.write_all(format_text(deck).as_bytes())?;
    info!("Wrote {} cards to '{}' ({:?})", deck.len(), path.display(), mode);
    Ok(())
}

/// Lists the `.txt` files directly inside `dir`, sorted by name.
pub fn list_text_files(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

/// Turns a typed file name into `<name>.txt`. Blank input falls back to `flashcards.txt`.
pub fn text_file_name(input: &str) -> String {
    let name = input.trim();
    let name = if name.is_empty() { DEFAULT_FILE_STEM } else { name };
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{name}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_deck() -> Deck {
        let mut deck = Deck::default();
        deck.add("cat", "gato");
        deck.add("dog", "perro");
        deck
    }

    #[test]
    fn test_format_text_blocks() {
        assert_eq!(
            format_text(&create_test_deck()),
            "Front: cat\nBack:  gato\n\nFront: dog\nBack:  perro\n\n"
        );
        assert_eq!(format_text(&Deck::default()), "");
    }

    #[test]
    fn test_append_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.txt");
        let deck = create_test_deck();

        write_text_file(&deck, &path, WriteMode::Overwrite).unwrap();
        write_text_file(&deck, &path, WriteMode::Append).unwrap();
        let twice = fs::read_to_string(&path).unwrap();
        assert_eq!(twice, format_text(&deck).repeat(2));

        write_text_file(&deck, &path, WriteMode::Overwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format_text(&deck));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cards.txt");
        assert!(write_text_file(&create_test_deck(), &path, WriteMode::Append).is_err());
    }

    #[test]
    fn test_list_text_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("deck.json"), "[]").unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let names: Vec<_> = list_text_files(dir.path())
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_text_file_name() {
        assert_eq!(text_file_name(""), "flashcards.txt");
        assert_eq!(text_file_name("  spanish "), "spanish.txt");
        assert_eq!(text_file_name("notes.txt"), "notes.txt");
    }
}
