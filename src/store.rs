pub mod csv_port;
pub mod json;
pub mod memory;

use crate::domain::contact::Contacts;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Backend that the contact manager loads from and mirrors every mutation to.
pub trait ContactStore {
    fn load(&self) -> Result<Contacts, AppError>;

    fn save(&self, contacts: &Contacts) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
