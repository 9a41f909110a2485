//! Name-keyed address book and its use-case operations.
//!
//! # Responsibility
//! - Provide record CRUD plus the contact-level `add`/`change` flows.
//! - Run the upcoming-birthday scan over all stored records.
//!
//! # Invariants
//! - The map key always equals `record.name()`; `add_record` is the only
//!   insertion point and enforces this.
//! - Input format is validated before any record is created or mutated, so
//!   failed operations leave the book unchanged.
//! - Iteration order is defined: lexicographic by name.

use crate::model::birthday::upcoming_congratulation;
use crate::model::record::{validate_phone, ContactError, ContactResult, Record};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Whether `add_contact` created a new record or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

/// One upcoming-birthday hit: who, and on which date to congratulate them.
///
/// The date is already weekend-shifted when the raw candidate fell on a
/// Saturday or Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Congratulation {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl Display for Congratulation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format("%Y.%m.%d")
        )
    }
}

/// The name-keyed record collection. This whole structure is the unit of
/// snapshot persistence.
///
/// Not thread-safe; embedders must serialize access externally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Inserts `record`, replacing any existing record with the same name.
    pub fn add_record(&mut self, record: Record) {
        debug!(
            "event=record_stored module=book name_len={} phones={}",
            record.name().len(),
            record.phones().len()
        );
        self.records.insert(record.name().to_string(), record);
    }

    /// Looks up a record by name. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record for `name`.
    ///
    /// # Errors
    /// - `ContactNotFound` when no record has that name.
    pub fn delete(&mut self, name: &str) -> ContactResult<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        info!("event=record_deleted module=book status=ok");
        Ok(())
    }

    /// Adds `phone` to the contact `name`, creating the record when absent.
    ///
    /// Both inputs are validated before any state changes, so a bad phone
    /// never leaves an empty record behind.
    ///
    /// # Errors
    /// - `InvalidPhone` when `phone` is not exactly 10 digits.
    /// - `EmptyName` when `name` is empty.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<AddOutcome> {
        validate_phone(phone)?;
        match self.find_mut(name) {
            Some(record) => {
                record.add_phone(phone)?;
                info!("event=contact_updated module=book status=ok");
                Ok(AddOutcome::Updated)
            }
            None => {
                let mut record = Record::new(name)?;
                record.add_phone(phone)?;
                self.add_record(record);
                info!("event=contact_created module=book status=ok");
                Ok(AddOutcome::Created)
            }
        }
    }

    /// Replaces `old_phone` with `new_phone` on the contact `name`.
    ///
    /// # Errors
    /// - `InvalidPhone` when `new_phone` is not exactly 10 digits.
    /// - `ContactNotFound` when `name` is absent.
    /// - `PhoneNotFound` when the record has no `old_phone`.
    ///
    /// On any error the record keeps its previous phone list.
    pub fn change_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> ContactResult<()> {
        validate_phone(new_phone)?;
        let record = self
            .find_mut(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        record.find_phone(old_phone)?;
        record.edit_phone(old_phone, new_phone)?;
        info!("event=contact_changed module=book status=ok");
        Ok(())
    }

    /// Scans all records for birthdays falling within the next 7 days of
    /// `today` and returns their congratulation dates in book order.
    ///
    /// `today` is an explicit input; the core never reads the clock.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<Congratulation> {
        let hits: Vec<Congratulation> = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                upcoming_congratulation(birthday, today).map(|date| Congratulation {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
            })
            .collect();
        debug!(
            "event=birthday_scan module=book status=ok scanned={} hits={}",
            self.len(),
            hits.len()
        );
        hits
    }
}
