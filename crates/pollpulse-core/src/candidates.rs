use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One tracked candidate: a canonical handle plus the alias strings that
/// also count as a mention of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical handle, e.g. `@BernieSanders`.
    pub handle: String,
    /// Additional surface forms that count as a mention, e.g. `Bernie`.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Ordered set of tracked candidates for one analysis run.
///
/// The order is significant: reports iterate candidates in registry order,
/// and the follow/mention columns on a post table follow the same order.
/// Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    /// Build a registry from an ordered candidate list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` on an empty handle or a duplicate
    /// handle (case-insensitive).
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if candidate.handle.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "candidate handle must be non-empty".to_string(),
                ));
            }
            if !seen.insert(candidate.handle.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate candidate handle: '{}'",
                    candidate.handle
                )));
            }
        }
        Ok(Self { candidates })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Handles in registry order.
    #[must_use]
    pub fn handles(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.handle.as_str()).collect()
    }

    /// Look up a candidate by exact handle.
    #[must_use]
    pub fn get(&self, handle: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.handle == handle)
    }

    /// True if `handle` is registered.
    #[must_use]
    pub fn contains(&self, handle: &str) -> bool {
        self.get(handle).is_some()
    }
}

impl<'a> IntoIterator for &'a CandidateRegistry {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[derive(Debug, Deserialize)]
struct CandidatesFile {
    candidates: Vec<Candidate>,
}

/// Load and validate the candidate registry from a YAML file.
///
/// Expected shape:
///
/// ```yaml
/// candidates:
///   - handle: "@BernieSanders"
///     aliases: ["Bernie", "Sanders"]
/// ```
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_registry(path: &Path) -> Result<CandidateRegistry, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CandidatesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CandidatesFile = serde_yaml::from_str(&content)?;
    CandidateRegistry::new(file.candidates)
}
