//! Cohort analysis over scored post tables.
//!
//! Builds a score-sorted [`PostTable`] from raw records, filters it into
//! cohorts by follow/mention predicates, computes descriptive statistics
//! with representative example posts, and renders plain-text reports.

pub mod error;
pub mod filter;
pub mod post;
pub mod report;
pub mod stats;
pub mod table;
pub mod words;

pub use error::AnalysisError;
pub use filter::{Cohort, CohortPredicate};
pub use post::{FollowFlag, Post, PostFlags, RawPost};
pub use report::{CohortKind, ReportBuilder};
pub use stats::{summarize, CohortSummary, ScoreSummary, MIN_COHORT_SIZE};
pub use table::PostTable;
pub use words::word_frequencies;
