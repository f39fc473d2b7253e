//! Candidate name persistence across runs

use crate::error::{Result, ResumeFitError};
use log::debug;
use std::path::PathBuf;

/// Remembers the candidate name between runs.
///
/// Absent on first use; an external prompt supplies a value which is then
/// stored. No other candidate data is persisted.
pub trait NameStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, name: &str) -> Result<()>;
}

/// File-backed store: a single plain-text file under the config directory.
pub struct FileNameStore {
    path: PathBuf,
}

impl FileNameStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        crate::config::Config::config_dir().join("candidate_name")
    }
}

impl NameStore for FileNameStore {
    fn get(&self) -> Option<String> {
        let name = std::fs::read_to_string(&self.path).ok()?;
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn set(&mut self, name: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, name).map_err(|e| {
            ResumeFitError::Persistence(format!(
                "Failed to store candidate name at {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// In-memory store for tests and one-off runs.
#[derive(Debug, Default)]
pub struct MemoryNameStore {
    name: Option<String>,
}

impl NameStore for MemoryNameStore {
    fn get(&self) -> Option<String> {
        self.name.clone()
    }

    fn set(&mut self, name: &str) -> Result<()> {
        self.name = Some(name.to_string());
        Ok(())
    }
}

/// Resolve the candidate name for the letter signature.
///
/// Precedence: explicitly supplied name, then the stored name, then the
/// prompt collaborator, then `default_name`. Anything that did not come
/// from the store is written back so the next run remembers it.
pub fn resolve_candidate_name<F>(
    store: &mut dyn NameStore,
    explicit: Option<&str>,
    prompt: F,
    default_name: &str,
) -> Result<String>
where
    F: FnOnce() -> Option<String>,
{
    if let Some(name) = explicit {
        let name = name.trim();
        if !name.is_empty() {
            store.set(name)?;
            return Ok(name.to_string());
        }
    }

    if let Some(name) = store.get() {
        debug!("Using stored candidate name");
        return Ok(name);
    }

    let name = prompt()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_name.to_string());
    store.set(&name)?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_name_wins_and_is_stored() {
        let mut store = MemoryNameStore::default();
        let name =
            resolve_candidate_name(&mut store, Some("Jane Doe"), || None, "Candidate").unwrap();
        assert_eq!(name, "Jane Doe");
        assert_eq!(store.get().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_stored_name_skips_prompt() {
        let mut store = MemoryNameStore::default();
        store.set("Stored Name").unwrap();

        let name = resolve_candidate_name(
            &mut store,
            None,
            || panic!("prompt should not run"),
            "Candidate",
        )
        .unwrap();
        assert_eq!(name, "Stored Name");
    }

    #[test]
    fn test_prompt_result_is_stored() {
        let mut store = MemoryNameStore::default();
        let name =
            resolve_candidate_name(&mut store, None, || Some("Typed Name".to_string()), "Candidate")
                .unwrap();
        assert_eq!(name, "Typed Name");
        assert_eq!(store.get().as_deref(), Some("Typed Name"));
    }

    #[test]
    fn test_falls_back_to_default_name() {
        let mut store = MemoryNameStore::default();
        let name = resolve_candidate_name(&mut store, None, || None, "Candidate").unwrap();
        assert_eq!(name, "Candidate");
        assert_eq!(store.get().as_deref(), Some("Candidate"));
    }

    #[test]
    fn test_blank_prompt_input_falls_back() {
        let mut store = MemoryNameStore::default();
        let name =
            resolve_candidate_name(&mut store, None, || Some("   ".to_string()), "Candidate")
                .unwrap();
        assert_eq!(name, "Candidate");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidate_name");

        let mut store = FileNameStore::new(path.clone());
        assert!(store.get().is_none());

        store.set("Jane Doe").unwrap();
        assert_eq!(store.get().as_deref(), Some("Jane Doe"));

        // A fresh store over the same file sees the persisted name
        let reopened = FileNameStore::new(path);
        assert_eq!(reopened.get().as_deref(), Some("Jane Doe"));
    }
}
