//! Energy Classifier
//!
//! Derives a coarse intensity signal from transcript text alone.

use crate::domain::entities::EnergyReading;

const EXCLAIM_WEIGHT: f64 = 0.4;
const CAPS_WEIGHT: f64 = 0.15;
const WORDS_DIVISOR: f64 = 50.0;

/// Classify the energy of a finalized transcript.
///
/// - Exclamation marks, shouted words and longer utterances push the score up
/// - An empty transcript is neutral rather than low, so silence does not
///   drag the conversation's tone down
///
/// Whitespace-only text is not empty and scores `0.0`.
pub fn classify_energy(text: &str) -> EnergyReading {
    if text.is_empty() {
        return EnergyReading::NEUTRAL;
    }

    let exclaims = text.matches('!').count();
    let mut words = 0usize;
    let mut caps = 0usize;
    for token in text.split(is_word_separator).filter(|t| !t.is_empty()) {
        words += 1;
        if is_shouted(token) {
            caps += 1;
        }
    }

    let score = (exclaims as f64 * EXCLAIM_WEIGHT)
        + (caps as f64 * CAPS_WEIGHT)
        + (words as f64 / WORDS_DIVISOR);

    EnergyReading::from_score(score.min(1.0))
}

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F),
/// which also break words.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Upper-case token of more than one character. Punctuation and digits are
/// ignored, but at least one cased letter must be present.
fn is_shouted(token: &str) -> bool {
    let mut has_upper = false;
    for c in token.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper && token.chars().count() > 1
}
