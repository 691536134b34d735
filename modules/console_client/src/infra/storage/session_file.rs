//! File-backed session persistence
//!
//! One JSON document holding the current company. The stored record is a
//! separate serde type mapped to the contract model so wire and disk formats
//! can drift independently. Anything that fails to read back cleanly is
//! treated as logged-out - persisted identity is a convenience cache, not a
//! source of truth.

use crate::contract::{Company, CompanyStatus};
use crate::domain::session::SessionPersistence;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// On-disk session record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredCompany {
    id: Uuid,
    name: String,
    email: String,
    status: String,
}

impl From<&Company> for StoredCompany {
    fn from(company: &Company) -> Self {
        StoredCompany {
            id: company.id,
            name: company.name.clone(),
            email: company.email.clone(),
            status: company.status.as_str().to_string(),
        }
    }
}

impl TryFrom<StoredCompany> for Company {
    type Error = String;

    fn try_from(stored: StoredCompany) -> Result<Self, Self::Error> {
        let status = match stored.status.as_str() {
            "active" => CompanyStatus::Active,
            "inactive" => CompanyStatus::Inactive,
            "suspended" => CompanyStatus::Suspended,
            other => return Err(format!("unknown company status '{}'", other)),
        };
        Ok(Company {
            id: stored.id,
            name: stored.name,
            email: stored.email,
            status,
        })
    }
}

/// Session persistence backed by a single JSON file
pub struct FileSessionPersistence {
    path: PathBuf,
}

impl FileSessionPersistence {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionPersistence for FileSessionPersistence {
    fn load(&self) -> Option<Company> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let stored: StoredCompany = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "malformed session file: {}", e);
                return None;
            }
        };
        match Company::try_from(stored) {
            Ok(company) => Some(company),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "unreadable session record: {}", e);
                None
            }
        }
    }

    fn store(&self, company: &Company) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&StoredCompany::from(company))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn remove(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_company() -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Acme Outfitters".to_string(),
            email: "owner@acme.test".to_string(),
            status: CompanyStatus::Active,
        }
    }

    #[test]
    fn test_store_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FileSessionPersistence::new(dir.path().join("session.json"));

        let company = sample_company();
        persistence.store(&company).unwrap();

        assert_eq!(persistence.load(), Some(company));
    }

    #[test]
    fn test_missing_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FileSessionPersistence::new(dir.path().join("absent.json"));
        assert!(persistence.load().is_none());
    }

    #[test]
    fn test_corrupted_json_is_logged_out_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not valid").unwrap();

        let persistence = FileSessionPersistence::new(path);
        assert!(persistence.load().is_none());
    }

    #[test]
    fn test_unknown_status_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            format!(
                r#"{{"id": "{}", "name": "Acme", "email": "a@b.test", "status": "galactic"}}"#,
                Uuid::new_v4()
            ),
        )
        .unwrap();

        let persistence = FileSessionPersistence::new(path);
        assert!(persistence.load().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FileSessionPersistence::new(dir.path().join("session.json"));
        persistence.store(&sample_company()).unwrap();

        persistence.remove().unwrap();
        persistence.remove().unwrap();
        assert!(persistence.load().is_none());
    }
}
