use thiserror::Error;

/// Hard failures of table construction.
///
/// Cohort-imbalance conditions (small cohorts, empty tables, degenerate
/// score ranges) are never errors; they surface as `Option::None` from the
/// stats engine or as fixed fallback lines in reports. The only hard
/// failure is malformed input.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("post by '{author_id}' carries a follow flag for unregistered handle '{handle}'")]
    UnknownHandle { handle: String, author_id: String },
}
