//! Contact record and domain errors.
//!
//! # Responsibility
//! - Hold one contact's name, phone list and optional birthday.
//! - Validate phone format at every insertion point.
//!
//! # Invariants
//! - `name` is non-empty and immutable after construction.
//! - `phones` keeps insertion order and contains no duplicate values.
//! - `birthday` is only ever set through strict `DD.MM.YYYY` parsing.

use crate::model::birthday::parse_birthday;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid phone regex"));

pub type ContactResult<T> = Result<T, ContactError>;

/// Domain error for record and address book operations.
///
/// Variants fall into two kinds: invalid input format (`EmptyName`,
/// `InvalidPhone`, `InvalidBirthday`) and missing data (`ContactNotFound`,
/// `PhoneNotFound`). Presentation layers map each variant to a user-facing
/// message; core code only constructs and propagates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    EmptyName,
    InvalidPhone(String),
    InvalidBirthday(String),
    ContactNotFound(String),
    PhoneNotFound(String),
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::InvalidPhone(number) => {
                write!(f, "invalid phone number `{number}`: expected exactly 10 digits")
            }
            Self::InvalidBirthday(text) => {
                write!(f, "invalid birthday `{text}`: expected DD.MM.YYYY")
            }
            Self::ContactNotFound(name) => write!(f, "contact not found: {name}"),
            Self::PhoneNotFound(number) => write!(f, "phone number not found: {number}"),
        }
    }
}

impl Error for ContactError {}

/// Checks the raw phone format: exactly ten ASCII digits.
pub(crate) fn validate_phone(number: &str) -> ContactResult<()> {
    if PHONE_RE.is_match(number) {
        Ok(())
    } else {
        Err(ContactError::InvalidPhone(number.to_string()))
    }
}

/// One contact: name, ordered phone numbers, optional birthday.
///
/// Records have no lifetime outside the address book; the book owns each
/// record exclusively and keys it by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    phones: Vec<String>,
    birthday: Option<NaiveDate>,
}

impl Record {
    /// Creates a record with the given name and no phones or birthday.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    /// Appends a validated phone number.
    ///
    /// Adding a number that is already present is a no-op, so the call is
    /// idempotent and the list stays duplicate-free.
    ///
    /// # Errors
    /// - `InvalidPhone` when `number` is not exactly 10 digits.
    pub fn add_phone(&mut self, number: &str) -> ContactResult<()> {
        validate_phone(number)?;
        if self.phones.iter().any(|phone| phone == number) {
            return Ok(());
        }
        self.phones.push(number.to_string());
        Ok(())
    }

    /// Removes the first phone equal to `number`.
    ///
    /// # Errors
    /// - `PhoneNotFound` when no phone matches; the list is left untouched.
    pub fn remove_phone(&mut self, number: &str) -> ContactResult<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone == number)
            .ok_or_else(|| ContactError::PhoneNotFound(number.to_string()))?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replaces the first phone equal to `old_number` with `new_number`.
    ///
    /// This operation does not re-validate `new_number`; callers that accept
    /// raw input must run the 10-digit check first, as
    /// `AddressBook::change_contact` does.
    ///
    /// # Errors
    /// - `PhoneNotFound` when `old_number` is absent.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> ContactResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old_number)
            .ok_or_else(|| ContactError::PhoneNotFound(old_number.to_string()))?;
        *slot = new_number.to_string();
        Ok(())
    }

    /// Returns the stored phone equal to `number`.
    ///
    /// # Errors
    /// - `PhoneNotFound` when no phone matches.
    pub fn find_phone(&self, number: &str) -> ContactResult<&str> {
        self.phones
            .iter()
            .find(|phone| phone.as_str() == number)
            .map(String::as_str)
            .ok_or_else(|| ContactError::PhoneNotFound(number.to_string()))
    }

    /// Parses `text` as `DD.MM.YYYY` and stores it, replacing any previous
    /// birthday.
    ///
    /// # Errors
    /// - `InvalidBirthday` when the text does not parse as a calendar date.
    pub fn set_birthday(&mut self, text: &str) -> ContactResult<()> {
        self.birthday = Some(parse_birthday(text)?);
        Ok(())
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.phones.join(", "))?;
        if let Some(birthday) = self.birthday {
            write!(f, " (birthday {})", birthday.format("%d.%m.%Y"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactError, Record};
    use chrono::NaiveDate;

    #[test]
    fn new_record_rejects_empty_name() {
        let err = Record::new("").unwrap_err();
        assert_eq!(err, ContactError::EmptyName);
    }

    #[test]
    fn add_then_find_phone_roundtrip() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.find_phone("0501234567").unwrap(), "0501234567");
    }

    #[test]
    fn add_phone_is_idempotent() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.phones(), ["0501234567"]);
    }

    #[test]
    fn add_phone_rejects_wrong_length_and_non_digits() {
        let mut record = Record::new("Alice").unwrap();
        let err = record.add_phone("123456789").unwrap_err();
        assert!(matches!(err, ContactError::InvalidPhone(_)));
        let err = record.add_phone("05012345ab").unwrap_err();
        assert!(matches!(err, ContactError::InvalidPhone(_)));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn phones_keep_insertion_order() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0971112233").unwrap();
        record.add_phone("0660009988").unwrap();
        assert_eq!(
            record.phones(),
            ["0501234567", "0971112233", "0660009988"]
        );
    }

    #[test]
    fn remove_phone_absent_fails_without_mutation() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        let err = record.remove_phone("0000000000").unwrap_err();
        assert!(matches!(err, ContactError::PhoneNotFound(_)));
        assert_eq!(record.phones(), ["0501234567"]);
    }

    #[test]
    fn edit_phone_replaces_first_match_in_place() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0971112233").unwrap();
        record.edit_phone("0501234567", "0663334455").unwrap();
        assert_eq!(record.phones(), ["0663334455", "0971112233"]);
    }

    #[test]
    fn edit_phone_absent_old_number_fails() {
        let mut record = Record::new("Alice").unwrap();
        let err = record.edit_phone("0501234567", "0663334455").unwrap_err();
        assert!(matches!(err, ContactError::PhoneNotFound(_)));
    }

    #[test]
    fn set_birthday_accepts_leap_day_and_rejects_impossible_date() {
        let mut record = Record::new("Alice").unwrap();
        record.set_birthday("29.02.2020").unwrap();
        assert_eq!(
            record.birthday(),
            Some(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap())
        );
        let err = record.set_birthday("31.02.2020").unwrap_err();
        assert!(matches!(err, ContactError::InvalidBirthday(_)));
        // Failed parse keeps the previous value.
        assert_eq!(
            record.birthday(),
            Some(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap())
        );
    }

    #[test]
    fn set_birthday_overwrites_previous_value() {
        let mut record = Record::new("Alice").unwrap();
        record.set_birthday("01.01.1990").unwrap();
        record.set_birthday("15.06.1991").unwrap();
        assert_eq!(
            record.birthday(),
            Some(NaiveDate::from_ymd_opt(1991, 6, 15).unwrap())
        );
    }
}
