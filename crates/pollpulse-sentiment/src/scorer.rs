//! Lexicon-and-rule compound sentiment scoring.

use crate::lexicon::{intensifier_boost, is_negator, valence};

/// Damping applied when a negator flips a valence.
const NEGATION_FACTOR: f64 = -0.74;

/// Per-exclamation-mark emphasis added to a word's valence, capped at 3.
const EXCLAMATION_BOOST: f64 = 0.292;

/// Divisor constant for normalizing the summed valence into `[-1, 1]`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// A compound-polarity scoring function.
///
/// The table pipeline treats scoring as a black box: any implementation
/// must be deterministic, side-effect-free, and bounded to `[-1.0, 1.0]`,
/// with empty input scoring exactly `0.0`.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}

/// Fixed lexicon-rule evaluator.
///
/// Sums per-word valences from the built-in lexicon, flipping and damping
/// a valence when a negator appears within the two preceding tokens,
/// scaling it after an intensifier, and adding emphasis for trailing
/// exclamation marks. The sum is normalized by
/// `x / sqrt(x^2 + alpha)` into `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    fn word_valence(tokens: &[String], i: usize, raw_token: &str) -> Option<f64> {
        let mut v = valence(&tokens[i])?;

        // Negation window: two tokens back.
        let window_start = i.saturating_sub(2);
        if tokens[window_start..i].iter().any(|t| is_negator(t)) {
            v *= NEGATION_FACTOR;
        }

        if i > 0 {
            if let Some(boost) = intensifier_boost(&tokens[i - 1]) {
                v += v.signum() * boost;
            }
        }

        let exclamations = raw_token.chars().rev().take_while(|&c| c == '!').count();
        #[allow(clippy::cast_precision_loss)]
        let emphasis = EXCLAMATION_BOOST * exclamations.min(3) as f64;
        v += v.signum() * emphasis;

        Some(v)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let raw_tokens: Vec<&str> = text.split_whitespace().collect();
        let tokens: Vec<String> = raw_tokens
            .iter()
            .map(|t| {
                t.trim_matches(|c: char| !c.is_alphabetic())
                    .to_lowercase()
            })
            .collect();

        let mut total = 0.0_f64;
        for (i, raw) in raw_tokens.iter().enumerate() {
            if let Some(v) = Self::word_valence(&tokens, i, raw) {
                total += v;
            }
        }

        if total == 0.0 {
            return 0.0;
        }
        let compound = (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);
        tracing::debug!(tokens = raw_tokens.len(), compound, "lexicon score computed");
        compound
    }
}
