//! Address book assistant REPL.
//!
//! # Responsibility
//! - Parse command lines and dispatch to `addressbook_core` operations.
//! - Map every `ContactError` variant to exactly one user-facing message;
//!   the core itself never produces display text.
//! - Load the snapshot on startup and save it on exit.

use addressbook_core::{
    default_log_level, init_logging, load_book, save_book, AddOutcome, AddressBook, ContactError,
};
use chrono::Local;
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_SNAPSHOT_FILE: &str = "addressbook.json";

fn main() {
    let snapshot_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE));

    let log_dir = std::env::temp_dir().join("addressbook-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let mut book = match load_book(&snapshot_path) {
        Ok(book) => book,
        Err(err) => {
            // A broken snapshot must not take the old file down with it on
            // exit, so bail out instead of starting empty.
            eprintln!("could not load {}: {err}", snapshot_path.display());
            std::process::exit(1);
        }
    };

    println!(
        "Welcome to the assistant (core v{})!",
        addressbook_core::core_version()
    );

    let stdin = io::stdin();
    loop {
        print!("Enter a command: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = tokens.split_first() else {
            continue;
        };

        match command.to_lowercase().as_str() {
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => println!("How can I help you?"),
            "add" => println!("{}", add_command(args, &mut book)),
            "change" => println!("{}", change_command(args, &mut book)),
            "phone" => println!("{}", phone_command(args, &book)),
            "all" => println!("{}", all_command(&book)),
            "add-birthday" => println!("{}", add_birthday_command(args, &mut book)),
            "show-birthday" => println!("{}", show_birthday_command(args, &book)),
            "birthdays" => println!("{}", birthdays_command(&book)),
            other => {
                warn!("event=unknown_command module=cli command_len={}", other.len());
                println!("Invalid command.");
            }
        }
    }

    if let Err(err) = save_book(&snapshot_path, &book) {
        eprintln!("failed to save {}: {err}", snapshot_path.display());
        std::process::exit(1);
    }
}

fn describe_error(err: &ContactError) -> String {
    match err {
        ContactError::EmptyName => "Please enter a contact name.".to_string(),
        ContactError::InvalidPhone(_) => {
            "Invalid input! Please enter a 10-digit phone number.".to_string()
        }
        ContactError::InvalidBirthday(_) => {
            "Invalid input! Please use the date format DD.MM.YYYY.".to_string()
        }
        ContactError::ContactNotFound(_) => "Contact not found.".to_string(),
        ContactError::PhoneNotFound(_) => "Phone number not found.".to_string(),
    }
}

fn add_command(args: &[&str], book: &mut AddressBook) -> String {
    let [name, phone] = args else {
        return "Please enter a name and a 10-digit phone number.".to_string();
    };
    match book.add_contact(name, phone) {
        Ok(AddOutcome::Created) => "Contact added.".to_string(),
        Ok(AddOutcome::Updated) => "Contact updated.".to_string(),
        Err(err) => describe_error(&err),
    }
}

fn change_command(args: &[&str], book: &mut AddressBook) -> String {
    let [name, old_phone, new_phone] = args else {
        return "Please enter a name, the old phone number and the new phone number.".to_string();
    };
    match book.change_contact(name, old_phone, new_phone) {
        Ok(()) => "Phone number changed.".to_string(),
        Err(err) => describe_error(&err),
    }
}

fn phone_command(args: &[&str], book: &AddressBook) -> String {
    let [name] = args else {
        return "Please enter a name.".to_string();
    };
    match book.find(name) {
        Some(record) => record.phones().join(", "),
        None => "Contact not found.".to_string(),
    }
}

fn all_command(book: &AddressBook) -> String {
    if book.is_empty() {
        return "The address book is empty.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday_command(args: &[&str], book: &mut AddressBook) -> String {
    let [name, birthday] = args else {
        return "Please enter a name and a birthday as DD.MM.YYYY.".to_string();
    };
    let Some(record) = book.find_mut(name) else {
        return "Contact not found.".to_string();
    };
    match record.set_birthday(birthday) {
        Ok(()) => "Birthday added.".to_string(),
        Err(err) => describe_error(&err),
    }
}

fn show_birthday_command(args: &[&str], book: &AddressBook) -> String {
    let [name] = args else {
        return "Please enter a name.".to_string();
    };
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => birthday.format("%d.%m.%Y").to_string(),
            None => "No birthday set.".to_string(),
        },
        None => "Contact not found.".to_string(),
    }
}

fn birthdays_command(book: &AddressBook) -> String {
    let today = Local::now().date_naive();
    let hits = book.upcoming_birthdays(today);
    if hits.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    hits.iter()
        .map(|hit| hit.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{add_birthday_command, add_command, change_command, phone_command};
    use addressbook_core::AddressBook;

    #[test]
    fn add_command_reports_created_then_updated() {
        let mut book = AddressBook::new();
        assert_eq!(add_command(&["Alice", "0501234567"], &mut book), "Contact added.");
        assert_eq!(
            add_command(&["Alice", "0971112233"], &mut book),
            "Contact updated."
        );
    }

    #[test]
    fn wrong_argument_count_is_rejected_before_acting() {
        let mut book = AddressBook::new();
        let message = add_command(&["Alice"], &mut book);
        assert!(message.starts_with("Please enter"));
        assert!(book.is_empty());
    }

    #[test]
    fn change_command_maps_invalid_phone_to_message() {
        let mut book = AddressBook::new();
        add_command(&["Alice", "0501234567"], &mut book);
        let message = change_command(&["Alice", "0501234567", "123"], &mut book);
        assert_eq!(message, "Invalid input! Please enter a 10-digit phone number.");
    }

    #[test]
    fn phone_command_lists_numbers_in_order() {
        let mut book = AddressBook::new();
        add_command(&["Alice", "0501234567"], &mut book);
        add_command(&["Alice", "0971112233"], &mut book);
        assert_eq!(
            phone_command(&["Alice"], &book),
            "0501234567, 0971112233"
        );
    }

    #[test]
    fn add_birthday_command_maps_bad_date_to_message() {
        let mut book = AddressBook::new();
        add_command(&["Alice", "0501234567"], &mut book);
        let message = add_birthday_command(&["Alice", "31.02.2020"], &mut book);
        assert_eq!(message, "Invalid input! Please use the date format DD.MM.YYYY.");
    }
}
