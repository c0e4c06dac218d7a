//! The score-sorted post table and its derived columns.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use pollpulse_core::{CandidateRegistry, SearchMeta};
use pollpulse_sentiment::{bucket_scores, normalize, SentimentScorer};

use crate::error::AnalysisError;
use crate::post::{Post, PostFlags, RawPost};

/// Ordered collection of scored posts for one analysis session.
///
/// Invariant: posts are sorted ascending by `score` from construction
/// onward. The table is read-only after `build`, except for the one-time
/// derivation of the cohort flag columns, which happens on first access and
/// is cached for the table's lifetime. Each session owns its own table;
/// nothing here is shared process-wide.
#[derive(Debug)]
pub struct PostTable {
    posts: Vec<Post>,
    registry: CandidateRegistry,
    meta: SearchMeta,
    baseline_mean: Option<f64>,
    flags: OnceLock<Vec<PostFlags>>,
}

impl PostTable {
    /// Build a table from raw records: normalize, score, sort ascending by
    /// score, and bin scores over the observed range.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnknownHandle`] when a record carries a
    /// follow flag for a handle absent from the registry. An empty record
    /// set is not an error; downstream reports degrade to their
    /// insufficient-data fallbacks.
    pub fn build(
        raw: Vec<RawPost>,
        registry: CandidateRegistry,
        meta: SearchMeta,
        scorer: &dyn SentimentScorer,
    ) -> Result<Self, AnalysisError> {
        for record in &raw {
            for handle in record.follows.keys() {
                if !registry.contains(handle) {
                    return Err(AnalysisError::UnknownHandle {
                        handle: handle.clone(),
                        author_id: record.author_id.clone(),
                    });
                }
            }
        }

        let mut posts: Vec<Post> = raw
            .into_iter()
            .map(|r| {
                let normalized_text = normalize(&r.text);
                let score = scorer.score(&normalized_text);
                Post {
                    text: r.text,
                    author_id: r.author_id,
                    location: r.location,
                    created_at: r.created_at,
                    favorite_count: r.favorite_count,
                    retweet_count: r.retweet_count,
                    follows: r.follows,
                    normalized_text,
                    score,
                    // Placeholder until the whole table is binned below.
                    bucket: pollpulse_sentiment::SentimentBucket::Neutral,
                }
            })
            .collect();

        posts.sort_by(|a, b| a.score.total_cmp(&b.score));

        let scores: Vec<f64> = posts.iter().map(|p| p.score).collect();
        for (post, bucket) in posts.iter_mut().zip(bucket_scores(&scores)) {
            post.bucket = bucket;
        }

        #[allow(clippy::cast_precision_loss)]
        let baseline_mean = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        };

        tracing::debug!(
            posts = posts.len(),
            candidates = registry.len(),
            query = %meta.query,
            "post table built"
        );

        Ok(Self {
            posts,
            registry,
            meta,
            baseline_mean,
            flags: OnceLock::new(),
        })
    }

    /// Posts in ascending score order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn registry(&self) -> &CandidateRegistry {
        &self.registry
    }

    #[must_use]
    pub fn meta(&self) -> &SearchMeta {
        &self.meta
    }

    /// Mean score over the whole table. `None` for an empty table: the
    /// baseline is undefined and must not be computed.
    #[must_use]
    pub fn baseline_mean(&self) -> Option<f64> {
        self.baseline_mean
    }

    /// Cohort flag columns, parallel to [`Self::posts`].
    ///
    /// Derived on first call and cached: a mention is case-sensitive
    /// substring containment of the handle or any registered alias in the
    /// raw text; a tag requires the handle itself.
    #[must_use]
    pub fn cohort_flags(&self) -> &[PostFlags] {
        self.flags.get_or_init(|| {
            tracing::debug!(posts = self.posts.len(), "deriving cohort flag columns");
            self.posts
                .iter()
                .map(|post| derive_flags(&post.text, &self.registry))
                .collect()
        })
    }
}

fn derive_flags(text: &str, registry: &CandidateRegistry) -> PostFlags {
    let mut mentions = BTreeMap::new();
    let mut tags = BTreeMap::new();

    for candidate in registry {
        let mentioned = text.contains(&candidate.handle)
            || candidate.aliases.iter().any(|a| text.contains(a.as_str()));
        mentions.insert(candidate.handle.clone(), mentioned);
        tags.insert(candidate.handle.clone(), text.contains(&candidate.handle));
    }

    let mentions_any = mentions.values().any(|&m| m);
    PostFlags {
        mentions,
        tags,
        mentions_any,
    }
}
