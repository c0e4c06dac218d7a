//! Canonicalization of raw post text into a stemmed token string.

use regex::Regex;

use crate::stem::stem;

/// English stopwords dropped during normalization.
///
/// Also consumed by word-frequency output, which removes the same words
/// from raw text before counting.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// True if `word` (already lowercase) is a stopword.
#[must_use]
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// ASCII punctuation characters stripped during normalization.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Canonicalize raw post text.
///
/// Steps, in order:
/// 1. Collect `@handle`, `http(s)://...`, and bare `www....` substrings and
///    remove each by exact substring replacement. Collect-then-replace
///    avoids partial-overlap artifacts from in-place regex substitution.
/// 2. Strip ASCII punctuation.
/// 3. Split on whitespace, lowercase.
/// 4. Drop stopwords and tokens containing any non-alphabetic character.
/// 5. Stem each surviving token.
/// 6. Join stems with single spaces.
///
/// Deterministic and side-effect-free. Empty input, or input consisting
/// only of handles and links, yields an empty string. Not idempotent in
/// general: stems are not guaranteed stopword-stable.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let handle_re = Regex::new(r"@[A-Za-z0-9_]+").expect("valid handle regex");
    let link_re = Regex::new(r"https?://[^ ]+").expect("valid link regex");
    let www_re = Regex::new(r"www\.[^ ]+").expect("valid bare-domain regex");

    let mut text = raw.to_string();
    let mut noise: Vec<String> = Vec::new();
    for re in [&handle_re, &link_re, &www_re] {
        noise.extend(re.find_iter(raw).map(|m| m.as_str().to_string()));
    }
    for fragment in &noise {
        text = text.replace(fragment.as_str(), "");
    }

    let text: String = text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();

    let stems: Vec<String> = text
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| !is_stopword(w) && !w.is_empty() && w.chars().all(char::is_alphabetic))
        .map(|w| stem(&w))
        .collect();

    stems.join(" ")
}
