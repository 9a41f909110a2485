//! Core domain logic for the address book assistant.
//! This crate is the single source of truth for contact invariants and the
//! upcoming-birthday computation; user-facing text and the command loop
//! live in the CLI crate.

pub mod book;
pub mod logging;
pub mod model;
pub mod storage;

pub use book::address_book::{AddOutcome, AddressBook, Congratulation};
pub use logging::{default_log_level, init_logging};
pub use model::birthday::{parse_birthday, upcoming_congratulation, UPCOMING_WINDOW_DAYS};
pub use model::record::{ContactError, ContactResult, Record};
pub use storage::snapshot::{load_book, save_book, SnapshotError, SnapshotResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
