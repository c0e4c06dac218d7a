use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pollpulse_sentiment::SentimentBucket;

/// Whether a post's author follows a tracked candidate.
///
/// Resolved by the acquisition collaborator before records reach the core;
/// `Unknown` is the explicit typed outcome for a failed or skipped
/// social-graph lookup, not a swallowed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowFlag {
    Yes,
    No,
    #[default]
    Unknown,
}

impl FollowFlag {
    /// True unless the lookup outcome is `Unknown`.
    #[must_use]
    pub fn is_known(self) -> bool {
        self != FollowFlag::Unknown
    }

    #[must_use]
    pub fn is_yes(self) -> bool {
        self == FollowFlag::Yes
    }
}

/// One raw post record as delivered by the acquisition collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    /// Original post text; never mutated by the core.
    pub text: String,
    pub author_id: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub favorite_count: u64,
    pub retweet_count: u64,
    /// Per-candidate follow flags, keyed by handle. Missing handles are
    /// treated as `Unknown`.
    #[serde(default)]
    pub follows: BTreeMap<String, FollowFlag>,
}

/// A scored post row.
#[derive(Debug, Clone)]
pub struct Post {
    pub text: String,
    pub author_id: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub favorite_count: u64,
    pub retweet_count: u64,
    pub follows: BTreeMap<String, FollowFlag>,
    /// Canonical token string, cached once at construction.
    pub normalized_text: String,
    /// Compound polarity score in `[-1.0, 1.0]`.
    pub score: f64,
    /// Equal-width bin of `score` over the table's observed score range.
    pub bucket: SentimentBucket,
}

impl Post {
    /// Follow flag for `handle`; `Unknown` when the record carries none.
    #[must_use]
    pub fn follow_flag(&self, handle: &str) -> FollowFlag {
        self.follows.get(handle).copied().unwrap_or_default()
    }
}

/// Per-post cohort flag columns, derived once per table from the raw text
/// and the candidate registry.
#[derive(Debug, Clone, Default)]
pub struct PostFlags {
    /// Per-handle: raw text contains the handle or any registered alias.
    pub mentions: BTreeMap<String, bool>,
    /// Per-handle: raw text contains the handle itself (stricter).
    pub tags: BTreeMap<String, bool>,
    /// True if `mentions` holds for at least one candidate.
    pub mentions_any: bool,
}

impl PostFlags {
    #[must_use]
    pub fn mentions(&self, handle: &str) -> bool {
        self.mentions.get(handle).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn tags(&self, handle: &str) -> bool {
        self.tags.get(handle).copied().unwrap_or(false)
    }
}
