use crate::domain::handoff::PendingApplication;
use crate::domain::ports::HandoffStore;
use crate::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A handoff persisted as a JSON file, so the form and confirmation steps
/// can run as separate processes.
///
/// The file is plain JSON and trivially editable; nothing here guards
/// against tampering.
#[derive(Debug, Clone)]
pub struct JsonFileHandoffStore {
    path: PathBuf,
}

impl JsonFileHandoffStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the session file with `.tmp` appended to the full name.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl HandoffStore for JsonFileHandoffStore {
    async fn save(&self, pending: &PendingApplication) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(pending)?;
        // Write to a sibling file and rename, so readers never see half a record.
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<PendingApplication>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::otp::OtpCode;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_json_file_handoff_persists() {
        let dir = tempdir().unwrap();
        let store = JsonFileHandoffStore::new(dir.path().join("session.json"));
        assert!(store.load().await.unwrap().is_none());

        let pending = PendingApplication {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            pan: "ABCDE1234F".to_string(),
            loan_amount: "500000".to_string(),
            otp_code: Some(OtpCode::parse("4821").unwrap()),
        };
        store.save(&pending).await.unwrap();

        let reopened = JsonFileHandoffStore::new(store.path());
        assert_eq!(reopened.load().await.unwrap(), Some(pending));
    }

    #[tokio::test]
    async fn test_save_with_tmp_extension_session() {
        let dir = tempdir().unwrap();
        let store = JsonFileHandoffStore::new(dir.path().join("session.tmp"));
        assert_eq!(store.temp_path(), dir.path().join("session.tmp.tmp"));

        let pending = PendingApplication {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            ..Default::default()
        };
        store.save(&pending).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(pending));
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_clear_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let store = JsonFileHandoffStore::new(dir.path().join("absent.json"));
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileHandoffStore::new(&path);
        assert!(store.load().await.is_err());
    }
}
