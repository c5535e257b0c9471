//! Interactive menu loop.
//!
//! # Responsibility
//! - Prompt for contact input and search queries.
//! - Print results and validation errors without leaving the loop.
//!
//! # Invariants
//! - Input is read line by line; end of input exits like choice `3`.
//! - Storage errors are reported, never fatal.

use contacts_core::{ContactService, NewContact, Record};
use std::io::{self, BufRead, Write};

const MENU: &str = "1. Add contact\n2. Search contacts\n3. Exit\n";

pub fn run_menu<R: BufRead, W: Write>(
    service: &mut ContactService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        output.write_all(MENU.as_bytes())?;
        let Some(choice) = prompt(input, output, "Choose an action: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                if !add_contact(service, input, output)? {
                    break;
                }
            }
            "2" => {
                let Some(query) = prompt(input, output, "Search query: ")? else {
                    break;
                };
                print_results(&service.search(&query), output)?;
            }
            "3" => break,
            _ => writeln!(output, "Invalid choice. Try again.")?,
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(())
}

/// Returns `false` when input ended mid-prompt.
fn add_contact<R: BufRead, W: Write>(
    service: &mut ContactService,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(name) = prompt(input, output, "Name: ")? else {
        return Ok(false);
    };
    let Some(phone) = prompt(input, output, "Phone: ")? else {
        return Ok(false);
    };
    let Some(birthday) = prompt(input, output, "Birthday (YYYY-MM-DD): ")? else {
        return Ok(false);
    };

    let contact = NewContact {
        name,
        phone: Some(phone),
        birthday: Some(birthday),
    };
    match service.add_contact(contact) {
        Ok(()) => writeln!(output, "Contact added and saved.")?,
        Err(err) => writeln!(output, "Error: {err}")?,
    }
    Ok(true)
}

fn print_results<W: Write>(records: &[&Record], output: &mut W) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(output, "No results found.");
    }

    writeln!(output, "Results:")?;
    for record in records {
        let mut line = record.name().value().to_string();
        if let Some(phone) = record.phone() {
            line.push_str(&format!(" | phone: {}", phone.value()));
        }
        if let Some(days) = record.days_to_birthday() {
            line.push_str(&format!(" | birthday in {days} days"));
        }
        writeln!(output, "{line}")?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    output.write_all(label.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::run_menu;
    use contacts_core::{ContactService, Directory};
    use std::io::Cursor;

    fn run(service: &mut ContactService, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(service, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_then_search_persists_contact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let mut service = ContactService::open(&path).unwrap();

        let output = run(
            &mut service,
            "1\nОлена\n0991234567\n2000-05-10\n2\nолена\n3\n",
        );

        assert!(output.contains("Contact added and saved."));
        assert!(output.contains("Олена | phone: 0991234567"));
        assert!(output.ends_with("Goodbye.\n"));
        assert_eq!(Directory::open(&path).unwrap().len(), 1);
    }

    #[test]
    fn invalid_input_reports_error_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut service = ContactService::open(dir.path().join("contacts.json")).unwrap();

        let output = run(&mut service, "1\nIvan\n+380\n\n9\n2\nzzz\n");

        assert!(output.contains("Error: non-digit phone"));
        assert!(output.contains("Invalid choice. Try again."));
        assert!(output.contains("No results found."));
        assert!(service.directory().is_empty());
    }
}
