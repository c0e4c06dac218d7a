//! Word frequencies over raw post text, for word-frequency visualization.

use std::collections::HashMap;

use pollpulse_sentiment::STOPWORDS;

use crate::table::PostTable;

/// Count word occurrences across all raw post texts.
///
/// Tokens are lowercased and trimmed of non-alphanumeric edges; the
/// normalization stopwords and the search query's own terms are excluded,
/// since they dominate any search result set without carrying signal.
/// Returns at most `max_words` entries, most frequent first, ties broken
/// alphabetically for deterministic output.
#[must_use]
pub fn word_frequencies(table: &PostTable, max_words: usize) -> Vec<(String, usize)> {
    let query_terms: Vec<String> = table
        .meta()
        .query_terms()
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in table.posts() {
        for token in post.text.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() || STOPWORDS.contains(&word.as_str()) || query_terms.contains(&word) {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);
    ranked
}
