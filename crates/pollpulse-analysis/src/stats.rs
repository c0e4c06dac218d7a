//! Descriptive statistics and representative examples for a cohort.

use std::fmt;

use crate::filter::Cohort;
use crate::post::Post;

/// Cohorts smaller than this carry too little signal to summarize; the
/// stats engine returns `None` for them and callers render a fixed
/// fallback line. Exactly this many posts is enough.
pub const MIN_COHORT_SIZE: usize = 5;

/// Number of representative posts per direction (most positive, most
/// negative, at-the-median).
const EXAMPLE_COUNT: usize = 3;

/// Five-number-style summary of a score column: count, mean, sample
/// standard deviation, min, quartiles, max.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count  {}", self.count)?;
        writeln!(f, "mean   {:.6}", self.mean)?;
        writeln!(f, "std    {:.6}", self.std)?;
        writeln!(f, "min    {:.6}", self.min)?;
        writeln!(f, "25%    {:.6}", self.q1)?;
        writeln!(f, "50%    {:.6}", self.median)?;
        writeln!(f, "75%    {:.6}", self.q3)?;
        write!(f, "max    {:.6}", self.max)
    }
}

/// Full summary of one cohort, with representative example posts.
#[derive(Debug, Clone)]
pub struct CohortSummary<'a> {
    pub stats: ScoreSummary,
    /// Baseline (whole-table) mean minus this cohort's mean.
    pub mean_diff: f64,
    /// The highest-scored posts, ascending, at most three.
    pub most_positive: Vec<&'a Post>,
    /// The lowest-scored posts, ascending, at most three.
    pub most_negative: Vec<&'a Post>,
    /// Posts whose score equals the cohort median exactly, in table order;
    /// may be fewer than three, or none, with no padding.
    pub at_median: Vec<&'a Post>,
}

/// Interpolated percentile over ascending `sorted`, pandas-style:
/// `h = (n - 1) * p`, linear between the bracketing ranks.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    #[allow(clippy::cast_precision_loss)]
    let h = (sorted.len() - 1) as f64 * p;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = h.floor() as usize;
    let hi = lo + 1;
    if hi >= sorted.len() {
        return sorted[lo];
    }
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Summarize a cohort's scores against the whole-table baseline mean.
///
/// Returns `None` when the cohort holds fewer than [`MIN_COHORT_SIZE`]
/// posts — the expected outcome for small cohorts, not an error. The
/// cohort's ascending-score order makes the most-negative and
/// most-positive examples head and tail slices.
#[must_use]
pub fn summarize<'a>(cohort: &Cohort<'a>, baseline_mean: f64) -> Option<CohortSummary<'a>> {
    let n = cohort.len();
    if n < MIN_COHORT_SIZE {
        tracing::debug!(size = n, "cohort below minimum size, skipping summary");
        return None;
    }

    let scores = cohort.scores();
    #[allow(clippy::cast_precision_loss)]
    let mean = scores.iter().sum::<f64>() / n as f64;
    #[allow(clippy::cast_precision_loss)]
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let median = percentile(&scores, 0.5);

    let stats = ScoreSummary {
        count: n,
        mean,
        std: variance.sqrt(),
        min: scores[0],
        q1: percentile(&scores, 0.25),
        median,
        q3: percentile(&scores, 0.75),
        max: scores[n - 1],
    };

    let posts: Vec<&Post> = cohort.posts().collect();
    let most_negative = posts[..EXAMPLE_COUNT.min(n)].to_vec();
    let most_positive = posts[n - EXAMPLE_COUNT.min(n)..].to_vec();
    let at_median: Vec<&Post> = posts
        .iter()
        .filter(|p| p.score == median)
        .take(EXAMPLE_COUNT)
        .copied()
        .collect();

    Some(CohortSummary {
        stats,
        mean_diff: baseline_mean - mean,
        most_positive,
        most_negative,
        at_median,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use pollpulse_core::{CandidateRegistry, SearchMeta};

    use super::*;
    use crate::post::RawPost;
    use crate::table::PostTable;

    /// Stub scorer: one tenth per `x` token. Lets tests spell out exact
    /// scores as text that survives normalization (`"x x x"` scores 0.3).
    struct TenthPerX;

    impl pollpulse_sentiment::SentimentScorer for TenthPerX {
        fn score(&self, text: &str) -> f64 {
            #[allow(clippy::cast_precision_loss)]
            let tenths = text.split_whitespace().filter(|&t| t == "x").count() as f64;
            tenths * 0.1
        }
    }

    /// Build a table whose posts carry the given scores (in tenths).
    fn scored_table(tenths: &[usize]) -> PostTable {
        let raw = tenths
            .iter()
            .map(|&k| RawPost {
                text: vec!["x"; k].join(" "),
                author_id: "u".to_string(),
                location: String::new(),
                created_at: Utc.with_ymd_and_hms(2020, 3, 3, 0, 0, 0).unwrap(),
                favorite_count: 0,
                retweet_count: 0,
                follows: BTreeMap::new(),
            })
            .collect();
        PostTable::build(
            raw,
            CandidateRegistry::default(),
            SearchMeta::new("q", None, "recent"),
            &TenthPerX,
        )
        .unwrap()
    }

    #[test]
    fn fewer_than_five_returns_none() {
        let table = scored_table(&[1, 2, 3, 4]);
        let cohort = Cohort::whole(&table);
        assert!(summarize(&cohort, 0.0).is_none());
    }

    #[test]
    fn exactly_five_succeeds() {
        let table = scored_table(&[1, 2, 3, 4, 5]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.0).unwrap();
        assert_eq!(summary.stats.count, 5);
    }

    #[test]
    fn five_number_summary_matches_hand_computation() {
        let table = scored_table(&[1, 2, 3, 4, 5]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.3).unwrap();

        let s = &summary.stats;
        assert!((s.mean - 0.3).abs() < 1e-12);
        assert!((s.median - 0.3).abs() < 1e-12);
        assert!((s.q1 - 0.2).abs() < 1e-12);
        assert!((s.q3 - 0.4).abs() < 1e-12);
        assert!((s.min - 0.1).abs() < 1e-12);
        assert!((s.max - 0.5).abs() < 1e-12);
        // Sample std of 0.1..0.5 step 0.1.
        assert!((s.std - 0.158_113_883_008_418_97).abs() < 1e-9);
        assert!(summary.mean_diff.abs() < 1e-12);
    }

    #[test]
    fn mean_diff_is_baseline_minus_cohort_mean() {
        let table = scored_table(&[0, 0, 0, 0, 0, 5]);
        let cohort = Cohort::whole(&table);
        let baseline = table.baseline_mean().unwrap();
        let summary = summarize(&cohort, baseline).unwrap();
        assert!(summary.mean_diff.abs() < 1e-12);
    }

    #[test]
    fn examples_are_head_and_tail() {
        let table = scored_table(&[1, 2, 3, 4, 5, 6]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.0).unwrap();

        let neg: Vec<usize> = summary
            .most_negative
            .iter()
            .map(|p| (p.score * 10.0).round() as usize)
            .collect();
        let pos: Vec<usize> = summary
            .most_positive
            .iter()
            .map(|p| (p.score * 10.0).round() as usize)
            .collect();
        assert_eq!(neg, vec![1, 2, 3]);
        assert_eq!(pos, vec![4, 5, 6]);
    }

    #[test]
    fn median_examples_match_exact_scores_only() {
        // Odd count: the median is an actual element, present once.
        let table = scored_table(&[1, 2, 3, 4, 5]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.0).unwrap();
        assert_eq!(summary.at_median.len(), 1);
        assert!((summary.at_median[0].score - 0.3).abs() < 1e-12);

        // Even count: the interpolated median matches no post; no padding.
        let table = scored_table(&[1, 2, 4, 5, 7, 8]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.0).unwrap();
        assert!(summary.at_median.is_empty());
    }

    #[test]
    fn median_examples_capped_at_three() {
        let table = scored_table(&[3, 3, 3, 3, 3, 3, 3]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.0).unwrap();
        assert_eq!(summary.at_median.len(), 3);
    }

    #[test]
    fn summary_display_has_describe_shape() {
        let table = scored_table(&[1, 2, 3, 4, 5]);
        let cohort = Cohort::whole(&table);
        let summary = summarize(&cohort, 0.0).unwrap();
        let text = summary.stats.to_string();
        for field in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
            assert!(text.contains(field), "missing {field}: {text}");
        }
    }
}
