use std::fmt;

use super::*;
use serde::{Deserialize, Serialize};

/// The value stored under a contact name in the JSON file.
///
/// Unknown fields are rejected so a structurally different file is reported
/// as corrupt instead of being silently rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
}

/// A contact as handed out to callers: the key joined with its details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

pub type Contacts = BTreeMap<String, ContactDetails>;

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name is required and must not be blank".to_string()
    }

    pub fn phone_req() -> String {
        "Phone is required and must not be blank".to_string()
    }

    pub fn email_req() -> String {
        "Email is required and must not be blank".to_string()
    }
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    /// Builds a contact from user input, trimming every field and rejecting
    /// blank ones in name, phone, email order.
    pub fn parse(name: &str, phone: &str, email: &str) -> Result<Self, AppError> {
        let contact = Contact::new(name.trim(), phone.trim(), email.trim());
        contact.validate()?;
        Ok(contact)
    }

    pub fn from_entry(name: &str, details: &ContactDetails) -> Self {
        Contact::new(name, &details.phone, &details.email)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }
        if self.phone.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }
        Ok(())
    }

    pub fn into_entry(self) -> (String, ContactDetails) {
        (
            self.name,
            ContactDetails {
                phone: self.phone,
                email: self.email,
            },
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}\n\
            Phone: {}\n\
            Email: {}",
            self.name, self.phone, self.email
        )
    }
}
