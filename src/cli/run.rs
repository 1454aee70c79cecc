use crate::prelude::{
    AppError, ContactManager, JsonStorage,
    command::{Cli, Commands},
    prompt::confirm_action,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    execute(cli, &mut stdin.lock(), &mut stdout)
}

/// Runs one parsed command against the contact file named in `cli`.
pub fn execute<R: BufRead, W: Write>(
    cli: Cli,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    debug!(file = ?cli.file, "opening contact book");
    let mut book = ContactManager::new(Box::new(JsonStorage::new(cli.file)))?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            overwrite,
        } => {
            if overwrite && book.contains(&name) {
                book.upsert(&name, &phone, &email)?;
                writeln!(out, "Contact overwritten successfully")?;
            } else {
                book.add(&name, &phone, &email)?;
                writeln!(out, "Contact added successfully")?;
            }
            Ok(())
        }

        Commands::View { name } => {
            let contact = book.get(&name)?;
            writeln!(out, "{}", contact)?;
            Ok(())
        }

        // Listing contacts
        Commands::List { details } => {
            if book.is_empty() {
                writeln!(out, "No contact yet")?;
                return Ok(());
            }

            if details {
                for (i, c) in book.contacts().iter().enumerate() {
                    writeln!(
                        out,
                        "{:>3}. {:<20} {:15} {:<30}",
                        i + 1,
                        c.name,
                        c.phone,
                        c.email
                    )?;
                }
            } else {
                for (i, name) in book.list_names().iter().enumerate() {
                    writeln!(out, "{:>3}. {}", i + 1, name)?;
                }
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit { name, phone, email } => {
            let current = book.get(&name)?;

            let phone = phone.unwrap_or(current.phone);
            let email = email.unwrap_or(current.email);

            book.update(&name, &phone, &email)?;
            writeln!(out, "Contact updated successfully")?;
            Ok(())
        }

        // Delete Contact
        Commands::Delete { name, yes } => {
            // Fail before prompting for a name that isn't there
            book.get(&name)?;

            if !yes && !confirm_action(&format!("delete {}", name), input, out)? {
                writeln!(out, "Delete cancelled")?;
                return Ok(());
            }

            book.delete(&name)?;
            writeln!(out, "Contact deleted successfully")?;
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src, overwrite } => {
            let summary = book.import_contacts_from_csv(&src, overwrite)?;

            writeln!(
                out,
                "Successfully imported {} contacts from {:?}.",
                summary.total(),
                src
            )?;
            if summary.skipped > 0 {
                writeln!(
                    out,
                    "Skipped {} contacts whose name already exist.",
                    summary.skipped
                )?;
            }
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = book.export_contacts_to_csv(&des)?;

            writeln!(out, "Successfully exported {} contacts to {:?}.", total, path)?;
            Ok(())
        }
    }
}
