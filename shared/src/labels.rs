//! Display helpers: initials and enum label humanization

use serde::{Deserialize, Serialize};

/// Shown in the avatar when there is no name
pub const FALLBACK_INITIALS: &str = "U";

/// Avatar initials: first letter of each word, uppercased, at most two
pub fn initials(name: Option<&str>) -> String {
    let letters: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if letters.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        letters
    }
}

/// Letter case applied after humanizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCase {
    #[default]
    AsIs,
    Lower,
    Upper,
    Title,
}

/// Turn a wire value like `lose_weight` into display text.
///
/// Only the first underscore becomes a space: `a_b_c` renders as `a b_c`.
pub fn humanize(value: &str, case: LabelCase) -> String {
    let spaced = value.replacen('_', " ", 1);
    match case {
        LabelCase::AsIs => spaced,
        LabelCase::Lower => spaced.to_lowercase(),
        LabelCase::Upper => spaced.to_uppercase(),
        LabelCase::Title => title_case(&spaced),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
