//! Fixed valence lexicon for political/social post sentiment.

/// Word valences. Keys are lowercase base forms chosen to be fixed points
/// of the stemmer, so they match both raw and canonicalized text.
/// Positive values in `(0.0, 2.0]`, negative in `[-2.0, 0.0)`; the scorer
/// normalizes the summed valence into `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("amaz", 1.6),
    ("best", 1.6),
    ("better", 1.0),
    ("brilliant", 1.5),
    ("champion", 1.2),
    ("excellent", 1.5),
    ("excit", 1.3),
    ("fair", 0.9),
    ("fantastic", 1.5),
    ("good", 1.1),
    ("great", 1.4),
    ("honest", 1.2),
    ("hope", 1.0),
    ("inspir", 1.3),
    ("landslide", 0.8),
    ("love", 1.6),
    ("progress", 1.0),
    ("proud", 1.2),
    ("ralli", 0.4),
    ("safe", 0.9),
    ("strong", 1.0),
    ("success", 1.3),
    ("support", 0.9),
    ("surg", 0.6),
    ("thrill", 1.3),
    ("trust", 1.0),
    ("unite", 0.9),
    ("victori", 1.4),
    ("vote", 0.3),
    ("win", 1.2),
    ("winner", 1.3),
    ("wonder", 1.2),
    // Negative signals
    ("afraid", -1.1),
    ("angri", -1.2),
    ("attack", -1.0),
    ("awful", -1.5),
    ("bad", -1.1),
    ("betray", -1.4),
    ("blame", -1.0),
    ("corrupt", -1.5),
    ("crisi", -1.1),
    ("crooked", -1.3),
    ("disaster", -1.5),
    ("disgrace", -1.4),
    ("dishonest", -1.3),
    ("fail", -1.2),
    ("failure", -1.3),
    ("fear", -1.0),
    ("fraud", -1.4),
    ("hate", -1.6),
    ("liar", -1.5),
    ("lie", -1.2),
    ("lose", -1.0),
    ("loser", -1.3),
    ("lost", -0.9),
    ("problem", -0.8),
    ("scandal", -1.2),
    ("scare", -1.0),
    ("shame", -1.2),
    ("terrible", -1.5),
    ("weak", -0.9),
    ("worri", -0.9),
    ("worst", -1.6),
    ("wrong", -1.0),
];

/// Tokens that flip and damp the valence of a nearby lexicon word.
pub(crate) const NEGATORS: &[&str] = &[
    "aint", "cannot", "cant", "dont", "isnt", "never", "no", "none", "not", "nothing", "wasnt",
    "without", "wont",
];

/// Tokens that scale the valence of the word immediately after them.
/// Positive boosts amplify, negative boosts dampen.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 0.3),
    ("barely", -0.3),
    ("completely", 0.3),
    ("extremely", 0.3),
    ("hardly", -0.4),
    ("incredibly", 0.3),
    ("really", 0.25),
    ("slightly", -0.3),
    ("somewhat", -0.2),
    ("totally", 0.3),
    ("truly", 0.25),
];

pub(crate) fn valence(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, v)| v)
}

pub(crate) fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word)
}

pub(crate) fn intensifier_boost(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, b)| b)
}
