//! End-to-end pipeline tests: raw records through normalization, scoring,
//! cohort filtering, and report rendering.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use pollpulse_analysis::{
    summarize, Cohort, CohortKind, CohortPredicate, FollowFlag, PostTable, RawPost,
    ReportBuilder,
};
use pollpulse_core::{Candidate, CandidateRegistry, SearchMeta};
use pollpulse_sentiment::{LexiconScorer, SentimentBucket};

fn registry() -> CandidateRegistry {
    CandidateRegistry::new(vec![
        Candidate {
            handle: "@BernieSanders".to_string(),
            aliases: vec!["Bernie".to_string(), "Sanders".to_string()],
        },
        Candidate {
            handle: "@JoeBiden".to_string(),
            aliases: vec!["Biden".to_string()],
        },
    ])
    .unwrap()
}

fn raw(text: &str, follows: &[(&str, FollowFlag)]) -> RawPost {
    RawPost {
        text: text.to_string(),
        author_id: "author".to_string(),
        location: "Chicago, IL".to_string(),
        created_at: Utc.with_ymd_and_hms(2020, 3, 3, 18, 30, 0).unwrap(),
        favorite_count: 2,
        retweet_count: 1,
        follows: follows
            .iter()
            .map(|(h, f)| ((*h).to_string(), *f))
            .collect(),
    }
}

fn sample_posts() -> Vec<RawPost> {
    let yes = [("@BernieSanders", FollowFlag::Yes)];
    let no = [("@BernieSanders", FollowFlag::No)];
    let unknown = [("@BernieSanders", FollowFlag::Unknown)];
    vec![
        raw("What a great night for Bernie!", &yes),
        raw("Bernie supporters love this campaign", &yes),
        raw("Hope wins, @BernieSanders is the best", &yes),
        raw("Really proud of the Sanders movement", &yes),
        raw("Another strong win for Bernie tonight", &yes),
        raw("This debate was a disaster for Biden", &yes),
        raw("@JoeBiden had a terrible week, what a failure", &no),
        raw("The worst scandal of this election", &no),
        raw("Nothing much happened at the polls today", &unknown),
        raw("Turnout numbers posted at https://example.com/results", &unknown),
    ]
}

fn build_table() -> PostTable {
    PostTable::build(
        sample_posts(),
        registry(),
        SearchMeta::new("primary election", Some("41.8,-87.6,50mi".to_string()), "recent"),
        &LexiconScorer,
    )
    .unwrap()
}

#[test]
fn table_is_sorted_and_fully_binned() {
    let table = build_table();
    assert_eq!(table.len(), 10);

    let scores: Vec<f64> = table.posts().iter().map(|p| p.score).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));

    // Binning is total and non-decreasing in score order.
    let buckets: Vec<SentimentBucket> = table.posts().iter().map(|p| p.bucket).collect();
    assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn normalization_leaves_no_noise_in_canonical_text() {
    let table = build_table();
    for post in table.posts() {
        assert!(!post.normalized_text.contains('@'));
        assert!(!post.normalized_text.contains("http"));
        for token in post.normalized_text.split_whitespace() {
            assert!(token.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}

#[test]
fn scores_stay_bounded() {
    let table = build_table();
    for post in table.posts() {
        assert!((-1.0..=1.0).contains(&post.score), "score {}", post.score);
    }
}

#[test]
fn follower_cohort_summary_beats_minimum() {
    let table = build_table();
    let cohort = Cohort::select(
        &table,
        &CohortPredicate::Follows("@BernieSanders".to_string()),
    );
    assert_eq!(cohort.len(), 6);

    let baseline = table.baseline_mean().unwrap();
    let summary = summarize(&cohort, baseline).unwrap();
    assert_eq!(summary.stats.count, 6);
    assert!((summary.mean_diff - (baseline - summary.stats.mean)).abs() < 1e-12);
    assert_eq!(summary.most_positive.len(), 3);
    assert_eq!(summary.most_negative.len(), 3);
}

#[test]
fn mention_cohorts_resolve_aliases() {
    let table = build_table();
    let bernie = Cohort::select(
        &table,
        &CohortPredicate::Mentions("@BernieSanders".to_string()),
    );
    // Five posts name Bernie by handle or alias.
    assert_eq!(bernie.len(), 5);

    let biden = Cohort::select(&table, &CohortPredicate::Mentions("@JoeBiden".to_string()));
    assert_eq!(biden.len(), 2);
}

#[test]
fn full_report_renders_all_sections() {
    let table = build_table();
    let builder = ReportBuilder::new(&table);

    let header = builder.header();
    assert!(header.contains("primary election"));
    assert!(header.contains("41.8,-87.6,50mi"));

    let follows = builder.per_candidate(CohortKind::Follows);
    assert!(follows.contains("followers of @BernieSanders"));

    let mentions = builder.per_candidate(CohortKind::Mentions);
    assert!(mentions.contains("mentioning @BernieSanders"));

    let coverage = builder.follow_coverage();
    assert!(coverage.contains("Follow data coverage for 10 posts:"));
    assert!(coverage.contains("8 have follow data for @BernieSanders; 6 follow them"));

    let overview = builder.mention_overview();
    assert!(overview.contains("mention @BernieSanders"));
}

#[test]
fn pairwise_report_counts_ordered_pairs() {
    let table = build_table();
    let report = ReportBuilder::new(&table).pairwise();
    // Two candidates: both ordered pairs evaluated; neither cohort reaches
    // five posts, so the report collapses to its fallback.
    assert!(report.contains("Summary of post sentiment by followers and mentions:"));
    assert!(report.contains("Whoops!"));
}

#[test]
fn empty_table_degrades_gracefully() {
    let table = PostTable::build(
        Vec::new(),
        registry(),
        SearchMeta::new("primary", None, "recent"),
        &LexiconScorer,
    )
    .unwrap();

    assert!(table.baseline_mean().is_none());
    let report = ReportBuilder::new(&table).per_candidate(CohortKind::Follows);
    assert!(report.contains("Whoops!"));
}
