//! Rule-based suffix stripping.
//!
//! A compact Porter-style stemmer covering the plural and participle
//! suffix rules (steps 1a/1b/1c of the classic algorithm). Deterministic
//! and pure; good enough to collapse the inflected forms that matter for
//! lexicon lookup (`running`/`runs`/`run`, `voted`/`votes`/`vote`).

/// True if the byte at `i` acts as a vowel under Porter rules: `aeiou`
/// always, `y` when it follows a consonant.
fn is_vowel(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => i > 0 && !is_vowel(word, i - 1),
        _ => false,
    }
}

fn has_vowel(word: &str) -> bool {
    let bytes = word.as_bytes();
    (0..bytes.len()).any(|i| is_vowel(bytes, i))
}

/// Porter "measure": the number of vowel-to-consonant transitions.
fn measure(word: &str) -> usize {
    let bytes = word.as_bytes();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..bytes.len() {
        let v = is_vowel(bytes, i);
        if prev_vowel && !v {
            m += 1;
        }
        prev_vowel = v;
    }
    m
}

/// True if `word` ends consonant-vowel-consonant where the final consonant
/// is not `w`, `x`, or `y`.
fn ends_cvc(word: &str) -> bool {
    let bytes = word.as_bytes();
    let n = bytes.len();
    if n < 3 {
        return false;
    }
    !is_vowel(bytes, n - 3)
        && is_vowel(bytes, n - 2)
        && !is_vowel(bytes, n - 1)
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
}

fn ends_double_consonant(word: &str) -> bool {
    let bytes = word.as_bytes();
    let n = bytes.len();
    n >= 2 && bytes[n - 1] == bytes[n - 2] && !is_vowel(bytes, n - 1)
}

/// Cleanup after an `ed`/`ing` suffix has been removed.
fn fixup_after_strip(stem: String) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return stem + "e";
    }
    if ends_double_consonant(&stem) && !matches!(stem.as_bytes()[stem.len() - 1], b'l' | b's' | b'z')
    {
        return stem[..stem.len() - 1].to_string();
    }
    if measure(&stem) == 1 && ends_cvc(&stem) {
        return stem + "e";
    }
    stem
}

/// Stem a single lowercase alphabetic token.
///
/// Applies the plural rules (`sses` → `ss`, `ies` → `i`, trailing `s`
/// dropped), the participle rules (`eed` → `ee` past the first measure,
/// `ed`/`ing` stripped when a vowel remains, with consonant-doubling and
/// `e`-restoring cleanup), and the final `y` → `i` rewrite.
#[must_use]
pub fn stem(word: &str) -> String {
    if word.len() <= 2 {
        return word.to_string();
    }

    // Step 1a: plurals.
    let mut w = if let Some(base) = word.strip_suffix("sses") {
        format!("{base}ss")
    } else if let Some(base) = word.strip_suffix("ies") {
        format!("{base}i")
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(base) = word.strip_suffix('s') {
        base.to_string()
    } else {
        word.to_string()
    };

    // Step 1b: past/progressive suffixes.
    if let Some(base) = w.strip_suffix("eed") {
        if measure(base) > 0 {
            w = format!("{base}ee");
        }
    } else if let Some(base) = w.strip_suffix("ed") {
        if has_vowel(base) {
            w = fixup_after_strip(base.to_string());
        }
    } else if let Some(base) = w.strip_suffix("ing") {
        if has_vowel(base) {
            w = fixup_after_strip(base.to_string());
        }
    }

    // Step 1c: terminal y.
    if let Some(base) = w.strip_suffix('y') {
        if has_vowel(base) {
            w = format!("{base}i");
        }
    }

    w
}
