//! Whole-book JSON snapshot save/load.

use crate::book::address_book::AddressBook;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::Path;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error for snapshot file I/O and codec failures.
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot file error: {err}"),
            Self::Format(err) => write!(f, "snapshot format error: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

/// Writes the whole book to `path` as one JSON document.
pub fn save_book(path: &Path, book: &AddressBook) -> SnapshotResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    std::fs::write(path, json)?;
    info!(
        "event=snapshot_saved module=storage status=ok records={}",
        book.len()
    );
    Ok(())
}

/// Reads a book snapshot from `path`.
///
/// A missing file yields an empty book so first runs need no setup step.
///
/// # Errors
/// - `Io` for any file error other than not-found.
/// - `Format` when the file exists but is not a valid snapshot.
pub fn load_book(path: &Path) -> SnapshotResult<AddressBook> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let book: AddressBook = serde_json::from_str(&text)?;
            info!(
                "event=snapshot_loaded module=storage status=ok records={}",
                book.len()
            );
            Ok(book)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("event=snapshot_missing module=storage status=ok action=start_empty");
            Ok(AddressBook::new())
        }
        Err(err) => Err(err.into()),
    }
}
