pub use crate::cli::{command, prompt, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactDetails, Contacts},
    manager::{ContactManager, ImportSummary},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStorage, MemStorage};
