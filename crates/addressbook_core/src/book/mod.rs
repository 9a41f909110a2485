//! Address book collection layer.
//!
//! # Responsibility
//! - Own the name-keyed record collection and its use-case operations.
//! - Keep lookup/CRUD semantics separate from record-level validation.
//!
//! # Invariants
//! - At most one record per name; the map key always equals the record name.

pub mod address_book;
