use serde::{Deserialize, Serialize};

/// Parameters the post batch was fetched with.
///
/// Stored verbatim for report headers; the analysis core does not interpret
/// them, except that the query terms are excluded from word-frequency
/// output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMeta {
    /// The search query string.
    pub query: String,
    /// `"lat,lng,radius"` location filter, if the search was geocoded.
    pub geocode: Option<String>,
    /// Result-type tag from the upstream search API, e.g. `recent`.
    pub result_type: String,
}

impl SearchMeta {
    #[must_use]
    pub fn new(query: impl Into<String>, geocode: Option<String>, result_type: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            geocode,
            result_type: result_type.into(),
        }
    }

    /// Whitespace-separated terms of the query.
    #[must_use]
    pub fn query_terms(&self) -> Vec<&str> {
        self.query.split_whitespace().collect()
    }
}
