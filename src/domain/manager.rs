use super::*;

use crate::domain::contact::{Contact, ContactDetails, Contacts, ValidationReq};
use crate::store::csv_port::{read_contacts_from_csv, write_contacts_to_csv};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Owns the in-memory contact book and mirrors every mutation to its
/// storage backend before returning.
pub struct ContactManager {
    mem: Contacts,
    storage: Box<dyn ContactStore>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub overwritten: usize,
    pub skipped: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.added + self.overwritten
    }
}

impl ContactManager {
    /// Loads the current contents of `storage`.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self {
            mem: Contacts::new(),
            storage,
        };
        manager.load()?;
        Ok(manager)
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn storage(&self) -> &dyn ContactStore {
        self.storage.as_ref()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mem.contains_key(name.trim())
    }

    /// Persists `self.mem`, putting `previous` back if the backend refuses.
    fn commit(&mut self, previous: Contacts) -> Result<(), AppError> {
        if let Err(e) = self.save() {
            warn!(error = %e, "save failed, rolling back in-memory change");
            self.mem = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Adds a new contact. A name that is already taken is refused; use
    /// [`ContactManager::upsert`] to replace it.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<Contact, AppError> {
        let contact = Contact::parse(name, phone, email)?;

        if self.mem.contains_key(&contact.name) {
            return Err(AppError::AlreadyExists(contact.name));
        }

        self.insert(contact)
    }

    /// Adds the contact or replaces the one stored under the same name.
    pub fn upsert(&mut self, name: &str, phone: &str, email: &str) -> Result<Contact, AppError> {
        let contact = Contact::parse(name, phone, email)?;
        self.insert(contact)
    }

    fn insert(&mut self, contact: Contact) -> Result<Contact, AppError> {
        let previous = self.mem.clone();
        let (name, details) = contact.clone().into_entry();
        let replaced = self.mem.insert(name, details).is_some();

        self.commit(previous)?;

        info!(name = %contact.name, replaced, "contact saved");
        Ok(contact)
    }

    pub fn get(&self, name: &str) -> Result<Contact, AppError> {
        let name = name.trim();
        self.mem
            .get(name)
            .map(|details| Contact::from_entry(name, details))
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))
    }

    /// Replaces phone and email together.
    pub fn update(&mut self, name: &str, phone: &str, email: &str) -> Result<Contact, AppError> {
        let name = name.trim();
        if !self.mem.contains_key(name) {
            return Err(AppError::NotFound(format!("Contact '{}'", name)));
        }

        let phone = phone.trim();
        let email = email.trim();
        if phone.is_empty() {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }
        if email.is_empty() {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        let previous = self.mem.clone();
        self.mem.insert(
            name.to_string(),
            ContactDetails {
                phone: phone.to_string(),
                email: email.to_string(),
            },
        );

        self.commit(previous)?;

        info!(name = %name, "contact updated");
        Ok(Contact::new(name, phone, email))
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        let name = name.trim();
        let previous = self.mem.clone();

        let removed = match self.mem.remove(name) {
            Some(details) => Contact::from_entry(name, &details),
            None => return Err(AppError::NotFound(format!("Contact '{}'", name))),
        };

        self.commit(previous)?;

        info!(name = %name, "contact deleted");
        Ok(removed)
    }

    /// Names in ascending code point order, so uppercase sorts before
    /// lowercase.
    pub fn list_names(&self) -> Vec<String> {
        self.mem.keys().cloned().collect()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.mem
            .iter()
            .map(|(name, details)| Contact::from_entry(name, details))
            .collect()
    }

    /// Imports every row of a CSV file, persisting once at the end. Nothing
    /// changes if any row fails validation.
    pub fn import_contacts_from_csv(
        &mut self,
        src: &Path,
        overwrite: bool,
    ) -> Result<ImportSummary, AppError> {
        let rows = read_contacts_from_csv(src)?;

        let previous = self.mem.clone();
        let mut summary = ImportSummary::default();

        for (line, row) in rows.iter().enumerate() {
            let contact = Contact::parse(&row.name, &row.phone, &row.email).map_err(|e| {
                // header is line 1
                AppError::Validation(format!("row {}: {}", line + 2, e))
            });
            let contact = match contact {
                Ok(contact) => contact,
                Err(e) => {
                    self.mem = previous;
                    return Err(e);
                }
            };

            let exists = self.mem.contains_key(&contact.name);
            if exists && !overwrite {
                summary.skipped += 1;
                continue;
            }

            let (name, details) = contact.into_entry();
            self.mem.insert(name, details);
            if exists {
                summary.overwritten += 1;
            } else {
                summary.added += 1;
            }
        }

        if summary.total() > 0 {
            self.commit(previous)?;
        }

        info!(
            path = ?src,
            added = summary.added,
            overwritten = summary.overwritten,
            skipped = summary.skipped,
            "contacts imported"
        );
        Ok(summary)
    }

    pub fn export_contacts_to_csv(&self, des: &Path) -> Result<(PathBuf, usize), AppError> {
        let (path, total) = write_contacts_to_csv(&self.contacts(), des)?;
        info!(path = ?path, total, "contacts exported");
        Ok((path, total))
    }
}
