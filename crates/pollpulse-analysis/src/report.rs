//! Plain-text report rendering.
//!
//! Every report is a newline-delimited `String`, safe to split and render
//! line by line. Cohorts below the minimum size are skipped silently; when
//! an entire report would be empty it collapses to a single fixed fallback
//! line instead.

use std::fmt::Write as _;

use pollpulse_core::CandidateRegistry;

use crate::filter::{Cohort, CohortPredicate};
use crate::stats::{summarize, CohortSummary};
use crate::table::PostTable;

/// Rendered when no cohort in a report reaches the minimum size, and when
/// the registry has no candidates at all.
pub const FALLBACK_LINE: &str = "Whoops! Fewer than 5 posts meet these criteria.";

/// Which per-candidate column a single-handle report iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CohortKind {
    Follows,
    Mentions,
}

impl CohortKind {
    fn predicate(self, handle: &str) -> CohortPredicate {
        match self {
            CohortKind::Follows => CohortPredicate::Follows(handle.to_string()),
            CohortKind::Mentions => CohortPredicate::Mentions(handle.to_string()),
        }
    }

    fn title(self, handle: &str) -> String {
        match self {
            CohortKind::Follows => format!("Summary of posts from followers of {handle}."),
            CohortKind::Mentions => format!("Summary of posts mentioning {handle}."),
        }
    }
}

/// Renders analysis reports for one table.
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder<'a> {
    table: &'a PostTable,
}

impl<'a> ReportBuilder<'a> {
    #[must_use]
    pub fn new(table: &'a PostTable) -> Self {
        Self { table }
    }

    fn registry(&self) -> &CandidateRegistry {
        self.table.registry()
    }

    /// Search parameters and table size, for report headers.
    #[must_use]
    pub fn header(&self) -> String {
        let meta = self.table.meta();
        let mut out = String::new();
        let _ = writeln!(out, "Search was conducted with the following parameters.");
        let _ = writeln!(out, "Search terms: {}", meta.query);
        let _ = writeln!(
            out,
            "Geocode: {}",
            meta.geocode.as_deref().unwrap_or("none")
        );
        let _ = writeln!(out, "Result type: {}", meta.result_type);
        let _ = writeln!(out, "Posts analyzed: {}", self.table.len());
        out
    }

    /// Per-candidate sentiment summaries for the chosen column kind.
    ///
    /// Iterates candidates in registry order; candidates whose cohort is
    /// below the minimum size are skipped. If no candidate qualifies the
    /// whole report is the fallback line.
    #[must_use]
    pub fn per_candidate(&self, kind: CohortKind) -> String {
        let mut out = String::new();
        for candidate in self.registry() {
            let cohort = Cohort::select(self.table, &kind.predicate(&candidate.handle));
            if let Some(summary) = self.summarize_cohort(&cohort) {
                push_summary_block(&mut out, &kind.title(&candidate.handle), &summary);
            }
        }
        if out.is_empty() {
            out.push_str(FALLBACK_LINE);
            out.push('\n');
        }
        out
    }

    /// Sentiment summaries for every ordered pair of distinct candidates:
    /// followers of the first who mention the second. Evaluates exactly
    /// n·(n-1) pairs.
    #[must_use]
    pub fn pairwise(&self) -> String {
        let mut out = String::from("Summary of post sentiment by followers and mentions:\n");
        let header_len = out.len();

        for follows in self.registry() {
            for mentions in self.registry() {
                if follows.handle == mentions.handle {
                    continue;
                }
                let predicate = CohortPredicate::FollowsAndMentions {
                    follows: follows.handle.clone(),
                    mentions: mentions.handle.clone(),
                };
                let cohort = Cohort::select(self.table, &predicate);
                if let Some(summary) = self.summarize_cohort(&cohort) {
                    let title = format!(
                        "Summary of posts from followers of {} mentioning {}.",
                        follows.handle, mentions.handle
                    );
                    push_summary_block(&mut out, &title, &summary);
                }
            }
        }

        if out.len() == header_len {
            out.push_str(FALLBACK_LINE);
            out.push('\n');
        }
        out
    }

    /// Follow-data coverage: per candidate in registry order, how many
    /// posts carry a known follow flag and how many of those follow.
    #[must_use]
    pub fn follow_coverage(&self) -> String {
        let mut out = String::new();
        let total = self.table.len();
        let _ = writeln!(out, "Follow data coverage for {total} posts:");

        for candidate in self.registry() {
            let known = self
                .table
                .posts()
                .iter()
                .filter(|p| p.follow_flag(&candidate.handle).is_known())
                .count();
            let following = self
                .table
                .posts()
                .iter()
                .filter(|p| p.follow_flag(&candidate.handle).is_yes())
                .count();
            let _ = writeln!(
                out,
                "Of the {total} posts, {known} have follow data for {}; {following} follow them",
                candidate.handle
            );
        }
        out
    }

    /// Mention/tag overview: how many posts mention any candidate, and per
    /// candidate how many of those mention them. Percentages are guarded
    /// against empty denominators.
    #[must_use]
    pub fn mention_overview(&self) -> String {
        let flags = self.table.cohort_flags();
        let total = self.table.len();
        let any = flags.iter().filter(|f| f.mentions_any).count();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Of the {total} posts gathered, {any} ({}%) tag one of the candidates or mention them by an alias",
            percent(any, total)
        );

        for candidate in self.registry() {
            let mentioned = flags
                .iter()
                .filter(|f| f.mentions(&candidate.handle))
                .count();
            let _ = writeln!(
                out,
                "Of the {any} posts that mention any candidate, {mentioned} ({}%) mention {}",
                percent(mentioned, any),
                candidate.handle
            );
        }
        out
    }

    fn summarize_cohort(&self, cohort: &Cohort<'a>) -> Option<CohortSummary<'a>> {
        // An empty table has no baseline; every cohort is empty too, so
        // summarize never runs without one.
        let baseline = self.table.baseline_mean()?;
        summarize(cohort, baseline)
    }
}

fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0".to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = part as f64 / whole as f64 * 100.0;
    format!("{pct:.1}")
}

fn push_summary_block(out: &mut String, title: &str, summary: &CohortSummary<'_>) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", summary.stats);
    let _ = writeln!(
        out,
        "Average post is {:.6} more positive than the average post pulled.",
        summary.mean_diff
    );
    out.push('\n');

    let _ = writeln!(out, "3 most positive posts:");
    push_examples(out, summary.most_positive.iter().map(|p| p.text.as_str()));
    let _ = writeln!(out, "3 most negative posts:");
    push_examples(out, summary.most_negative.iter().map(|p| p.text.as_str()));
    let _ = writeln!(out, "3 neutral posts:");
    push_examples(out, summary.at_median.iter().map(|p| p.text.as_str()));
}

fn push_examples<'t>(out: &mut String, texts: impl Iterator<Item = &'t str>) {
    for (i, text) in texts.enumerate() {
        let _ = writeln!(out, "Post {}: {text}", i + 1);
    }
    out.push('\n');
}
