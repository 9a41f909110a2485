//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical `Record` shape used by the address book.
//! - Own input validation for phone numbers and birthday strings.
//!
//! # Invariants
//! - A `Record` name is non-empty and never changes after construction.
//! - Every stored phone number passed the 10-digit format check.

pub mod birthday;
pub mod record;
