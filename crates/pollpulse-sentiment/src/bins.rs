//! Equal-width binning of compound scores into five sentiment labels.

use std::fmt;

/// Discrete sentiment-intensity label, ordered from most negative to most
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SentimentBucket {
    StronglyNegative,
    Negative,
    Neutral,
    Positive,
    StronglyPositive,
}

impl SentimentBucket {
    pub const ALL: [SentimentBucket; 5] = [
        SentimentBucket::StronglyNegative,
        SentimentBucket::Negative,
        SentimentBucket::Neutral,
        SentimentBucket::Positive,
        SentimentBucket::StronglyPositive,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SentimentBucket::StronglyNegative => "Strongly Negative",
            SentimentBucket::Negative => "Negative",
            SentimentBucket::Neutral => "Neutral",
            SentimentBucket::Positive => "Positive",
            SentimentBucket::StronglyPositive => "Strongly Positive",
        }
    }
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assign each score to one of five equal-width intervals over the observed
/// `[min, max]` range of `scores`.
///
/// The intervals are half-open, closed at the top, so a score equal to the
/// observed maximum lands in `StronglyPositive` and every score receives
/// exactly one label. When all scores are identical the range has zero
/// width and carries no polarity information, so every post is labeled
/// `Neutral`; no bin-width division happens on that path.
#[must_use]
pub fn bucket_scores(scores: &[f64]) -> Vec<SentimentBucket> {
    if scores.is_empty() {
        return Vec::new();
    }

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![SentimentBucket::Neutral; scores.len()];
    }

    let width = (max - min) / 5.0;
    scores
        .iter()
        .map(|&s| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = (((s - min) / width).floor() as usize).min(4);
            SentimentBucket::ALL[idx]
        })
        .collect()
}
