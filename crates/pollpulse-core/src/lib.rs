//! Shared domain types for the pollpulse workspace: the tracked-candidate
//! registry and the search metadata carried through an analysis session.

use thiserror::Error;

pub mod candidates;
pub mod search;

pub use candidates::{load_registry, Candidate, CandidateRegistry};
pub use search::SearchMeta;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read candidates file '{path}': {source}")]
    CandidatesFileIo {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse candidates file: {0}")]
    CandidatesFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
