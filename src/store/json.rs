use super::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::debug;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        if !fs::exists(&self.path)? {
            debug!(path = ?self.path, "no contact file yet, starting empty");
            return Ok(Contacts::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Contacts::new());
        }

        let contacts: Contacts = serde_json::from_str(&data).map_err(|e| {
            AppError::StorageCorrupt(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = ?self.path, count = contacts.len(), "contacts loaded");
        Ok(contacts)
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Write next to the target and rename over it so a failed write
        // never truncates the previous file.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut file, formatter);
        contacts.serialize(&mut serializer)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;

        // The temp file is created owner-only; keep whatever mode the user
        // gave the existing file.
        if let Ok(metadata) = fs::metadata(&self.path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }

        file.persist(&self.path)?;

        debug!(path = ?self.path, count = contacts.len(), "contacts saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactDetails;
    use tempfile::tempdir;

    fn details(phone: &str, email: &str) -> ContactDetails {
        ContactDetails {
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        let mut contacts = Contacts::new();
        contacts.insert("Uche".to_string(), details("01234567890", "uche@gmail.com"));
        contacts.insert("Alex".to_string(), details("+44731484372", "alex@work.com"));

        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        Ok(())
    }

    #[test]
    fn missing_file_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("absent.json"));

        assert!(storage.load()?.is_empty());
        assert!(!storage.path.exists());
        Ok(())
    }

    #[test]
    fn empty_object_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{}")?;

        assert!(JsonStorage::new(path).load()?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_file_is_reported_as_corrupt() -> Result<(), AppError> {
        let dir = tempdir()?;
        let cases = [
            "{\"Alice\": ",
            "[]",
            r#"{"Alice": {"phone": "1"}}"#,
            r#"{"Alice": {"phone": 5, "email": "a@b.c"}}"#,
            r#"{"Alice": {"phone": "1", "email": "a@b.c", "age": 3}}"#,
        ];

        for (i, body) in cases.iter().enumerate() {
            let path = dir.path().join(format!("bad{i}.json"));
            fs::write(&path, body)?;

            let result = JsonStorage::new(path).load();
            assert!(
                matches!(result, Err(AppError::StorageCorrupt(_))),
                "{body} should be corrupt"
            );
        }
        Ok(())
    }

    #[test]
    fn saved_file_uses_name_keyed_layout() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join("contacts.json"));

        let mut contacts = Contacts::new();
        contacts.insert(
            "Alice Smith".to_string(),
            details("555-1234", "alice@example.com"),
        );
        storage.save(&contacts)?;

        let raw = fs::read_to_string(&storage.path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;

        assert_eq!(
            value,
            serde_json::json!({
                "Alice Smith": {"phone": "555-1234", "email": "alice@example.com"}
            })
        );
        assert!(raw.contains("\n    \"Alice Smith\""));
        Ok(())
    }

    #[test]
    fn save_creates_parent_and_leaves_no_temp_files() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::new(dir.path().join(".instance/contacts.json"));

        storage.save(&Contacts::new())?;
        storage.save(&Contacts::new())?;

        let entries = fs::read_dir(dir.path().join(".instance"))?.count();
        assert_eq!(entries, 1);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_file_mode() -> Result<(), AppError> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "{}")?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;

        let storage = JsonStorage::new(&path);
        let mut contacts = Contacts::new();
        contacts.insert("Ann".to_string(), details("1", "ann@x.com"));
        storage.save(&contacts)?;

        let mode = fs::metadata(&path)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(storage.load()?, contacts);
        Ok(())
    }

    #[test]
    fn failed_save_leaves_previous_content() -> Result<(), AppError> {
        let dir = tempdir()?;
        // A non-empty directory at the target path cannot be replaced by a file
        let path = dir.path().join("contacts.json");
        fs::create_dir(&path)?;
        fs::write(path.join("keep.txt"), "previous")?;

        let storage = JsonStorage::new(&path);
        let mut contacts = Contacts::new();
        contacts.insert("Ann".to_string(), details("1", "ann@x.com"));

        assert!(matches!(storage.save(&contacts), Err(AppError::Io(_))));

        assert!(path.is_dir());
        assert_eq!(fs::read_to_string(path.join("keep.txt"))?, "previous");
        // The temp file is cleaned up with the failed rename
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
