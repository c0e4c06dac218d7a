//! Text canonicalization and sentiment scoring for pollpulse.
//!
//! `normalize` turns raw post text into a canonical stemmed token string,
//! and `LexiconScorer` maps text to a compound polarity score in
//! `[-1.0, 1.0]` using a fixed valence lexicon with negation, intensifier,
//! and punctuation heuristics. `bucket_scores` bins a whole table's scores
//! into five ordered sentiment labels.

pub mod bins;
pub mod lexicon;
pub mod normalize;
pub mod scorer;
pub mod stem;

pub use bins::{bucket_scores, SentimentBucket};
pub use normalize::{normalize, STOPWORDS};
pub use scorer::{LexiconScorer, SentimentScorer};
pub use stem::stem;
