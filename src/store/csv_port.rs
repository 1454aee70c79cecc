use super::*;
use crate::domain::contact::Contact;
use csv::{Reader, Writer};
use std::path::PathBuf;
use tracing::debug;

pub const EXPORT_FILE_NAME: &str = "contacts.csv";

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Reads `name,phone,email` rows. Rows are returned as written; validation
/// is left to the caller.
pub fn read_contacts_from_csv(src: &Path) -> Result<Vec<Contact>, AppError> {
    if !src.exists() {
        return Err(AppError::NotFound(format!("CSV file {}", src.display())));
    }

    if !is_csv(src) {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(src)?;

    let mut contacts = Vec::new();
    for result in reader.deserialize() {
        let record: Contact = result?;
        contacts.push(record);
    }

    debug!(path = ?src, count = contacts.len(), "csv rows read");
    Ok(contacts)
}

/// Writes contacts with a header row. A directory destination gets
/// `contacts.csv` appended.
pub fn write_contacts_to_csv(contacts: &[Contact], des: &Path) -> Result<(PathBuf, usize), AppError> {
    let mut file_path = des.to_path_buf();

    if file_path.is_dir() {
        file_path = file_path.join(EXPORT_FILE_NAME);
    } else if !is_csv(&file_path) {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    debug!(path = ?file_path, count = counter, "csv rows written");
    Ok((file_path, counter))
}
