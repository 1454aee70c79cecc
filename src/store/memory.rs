use super::*;
use std::cell::RefCell;

/// Keeps the "persisted" contacts in memory. Handy for exercising the
/// manager without a file on disk.
#[derive(Default)]
pub struct MemStorage {
    pub data: RefCell<Contacts>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Contacts) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }
}
