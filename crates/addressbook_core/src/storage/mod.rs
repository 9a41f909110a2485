//! Snapshot persistence boundary.
//!
//! # Responsibility
//! - Save and restore the whole address book as one JSON document.
//! - Keep file and codec details out of the domain layers.
//!
//! # Invariants
//! - A snapshot round-trips every record field exactly: names, phone order
//!   and parsed birthdays.
//! - A missing snapshot file is not an error; it restores an empty book.

pub mod snapshot;
