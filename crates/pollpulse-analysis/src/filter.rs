//! Cohort selection by follow/mention predicates.

use crate::post::Post;
use crate::table::PostTable;

/// A follow/mention predicate over the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CohortPredicate {
    /// Author follows `handle`.
    Follows(String),
    /// Post mentions `handle` (handle or alias containment).
    Mentions(String),
    /// Author follows one candidate AND the post mentions another; used
    /// for "followers of A who mention B" cross-tabulation.
    FollowsAndMentions { follows: String, mentions: String },
}

impl CohortPredicate {
    fn matches(&self, table: &PostTable, idx: usize) -> bool {
        let post = &table.posts()[idx];
        match self {
            CohortPredicate::Follows(handle) => post.follow_flag(handle).is_yes(),
            CohortPredicate::Mentions(handle) => table.cohort_flags()[idx].mentions(handle),
            CohortPredicate::FollowsAndMentions { follows, mentions } => {
                post.follow_flag(follows).is_yes()
                    && table.cohort_flags()[idx].mentions(mentions)
            }
        }
    }
}

/// An order-preserving subset of a table's posts.
///
/// Rows keep the table's ascending-score order, so the most negative posts
/// sit at the front and the most positive at the back. Filtering never
/// fails: predicates that match nothing yield an empty cohort.
#[derive(Debug, Clone)]
pub struct Cohort<'a> {
    table: &'a PostTable,
    indices: Vec<usize>,
}

impl<'a> Cohort<'a> {
    /// The whole table as one cohort.
    #[must_use]
    pub fn whole(table: &'a PostTable) -> Self {
        Self {
            table,
            indices: (0..table.len()).collect(),
        }
    }

    /// Select the posts of `table` matching `predicate`.
    #[must_use]
    pub fn select(table: &'a PostTable, predicate: &CohortPredicate) -> Self {
        Self::whole(table).filter(predicate)
    }

    /// Narrow this cohort by a further predicate. Filtering an already
    /// filtered cohort by the same predicate returns an equal cohort.
    #[must_use]
    pub fn filter(&self, predicate: &CohortPredicate) -> Cohort<'a> {
        Cohort {
            table: self.table,
            indices: self
                .indices
                .iter()
                .copied()
                .filter(|&i| predicate.matches(self.table, i))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Posts in ascending score order.
    pub fn posts(&self) -> impl Iterator<Item = &'a Post> + '_ {
        self.indices.iter().map(|&i| &self.table.posts()[i])
    }

    /// Scores in ascending order.
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.posts().map(|p| p.score).collect()
    }

    /// Row positions within the underlying table.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};
    use pollpulse_core::{Candidate, CandidateRegistry, SearchMeta};
    use pollpulse_sentiment::LexiconScorer;

    use super::*;
    use crate::post::{FollowFlag, RawPost};

    fn table() -> PostTable {
        let registry = CandidateRegistry::new(vec![
            Candidate {
                handle: "@A".to_string(),
                aliases: vec!["Alice".to_string()],
            },
            Candidate {
                handle: "@B".to_string(),
                aliases: vec![],
            },
        ])
        .unwrap();

        let raw = vec![
            post("great win for Alice", &[("@A", FollowFlag::Yes)]),
            post("disaster for @B", &[("@A", FollowFlag::Yes), ("@B", FollowFlag::No)]),
            post("plain words", &[("@B", FollowFlag::Unknown)]),
            post("Alice again, hope wins", &[("@B", FollowFlag::Yes)]),
        ];

        PostTable::build(
            raw,
            registry,
            SearchMeta::new("q", None, "recent"),
            &LexiconScorer,
        )
        .unwrap()
    }

    fn post(text: &str, follows: &[(&str, FollowFlag)]) -> RawPost {
        RawPost {
            text: text.to_string(),
            author_id: "u".to_string(),
            location: String::new(),
            created_at: Utc.with_ymd_and_hms(2020, 3, 3, 0, 0, 0).unwrap(),
            favorite_count: 0,
            retweet_count: 0,
            follows: follows
                .iter()
                .map(|(h, f)| ((*h).to_string(), *f))
                .collect(),
        }
    }

    #[test]
    fn follows_predicate_selects_only_yes() {
        let table = table();
        let cohort = Cohort::select(&table, &CohortPredicate::Follows("@A".to_string()));
        assert_eq!(cohort.len(), 2);
        assert!(cohort
            .posts()
            .all(|p| p.follow_flag("@A") == FollowFlag::Yes));
    }

    #[test]
    fn unknown_flag_does_not_match_follows() {
        let table = table();
        let cohort = Cohort::select(&table, &CohortPredicate::Follows("@B".to_string()));
        assert_eq!(cohort.len(), 1);
    }

    #[test]
    fn mentions_predicate_uses_aliases() {
        let table = table();
        let cohort = Cohort::select(&table, &CohortPredicate::Mentions("@A".to_string()));
        assert_eq!(cohort.len(), 2);
    }

    #[test]
    fn paired_predicate_requires_both() {
        let table = table();
        let cohort = Cohort::select(
            &table,
            &CohortPredicate::FollowsAndMentions {
                follows: "@A".to_string(),
                mentions: "@A".to_string(),
            },
        );
        assert_eq!(cohort.len(), 1);
        assert!(cohort.posts().next().unwrap().text.contains("Alice"));
    }

    #[test]
    fn no_match_yields_empty_cohort() {
        let table = table();
        let cohort = Cohort::select(&table, &CohortPredicate::Mentions("@missing".to_string()));
        assert!(cohort.is_empty());
    }

    #[test]
    fn filtered_size_never_exceeds_table_size() {
        let table = table();
        for predicate in [
            CohortPredicate::Follows("@A".to_string()),
            CohortPredicate::Mentions("@B".to_string()),
        ] {
            assert!(Cohort::select(&table, &predicate).len() <= table.len());
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = table();
        let predicate = CohortPredicate::Follows("@A".to_string());
        let once = Cohort::select(&table, &predicate);
        let twice = once.filter(&predicate);
        assert_eq!(once.indices(), twice.indices());
    }

    #[test]
    fn order_preserved() {
        let table = table();
        let cohort = Cohort::select(&table, &CohortPredicate::Follows("@A".to_string()));
        let mut sorted = cohort.indices().to_vec();
        sorted.sort_unstable();
        assert_eq!(cohort.indices(), sorted.as_slice());
    }
}
