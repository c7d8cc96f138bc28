//! Case-style classification and boundary-aware predicates.
//!
//! Candidates written in a recognizable naming convention (camelCase,
//! PascalCase, kebab-case, snake_case) earn a fractional bonus on top of
//! their tier value, and unlock two extra tiers: a match that begins at a
//! case boundary ([`StringCase`](crate::Ranking::StringCase)) and a match
//! against the initials of the cased segments
//! ([`StringCaseAcronym`](crate::Ranking::StringCaseAcronym)).

/// The naming convention detected in a candidate string.
///
/// Classification rules, in priority order:
///
/// 1. No uppercase, no underscore, has hyphen -> `Kebab`
/// 2. No uppercase, has underscore, no hyphen -> `Snake`
/// 3. Has uppercase, no hyphen, no underscore -> `Pascal` when the first
///    character has no lowercase form, otherwise `Camel`
/// 4. Anything else -> `NoCase`
///
/// # Examples
///
/// ```
/// use casematch::CaseStyle;
///
/// assert_eq!(CaseStyle::of("camelCase"), CaseStyle::Camel);
/// assert_eq!(CaseStyle::of("PascalCase"), CaseStyle::Pascal);
/// assert_eq!(CaseStyle::of("kebab-case"), CaseStyle::Kebab);
/// assert_eq!(CaseStyle::of("snake_case"), CaseStyle::Snake);
/// assert_eq!(CaseStyle::of("plain text"), CaseStyle::NoCase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// camelCase: mixed case starting with a lowercase letter (bonus 0.8).
    Camel,
    /// PascalCase: mixed case starting with an uppercase letter (bonus 0.6).
    Pascal,
    /// kebab-case: lowercase words joined by hyphens (bonus 0.4).
    Kebab,
    /// snake_case: lowercase words joined by underscores (bonus 0.2).
    Snake,
    /// No recognizable convention (bonus 0).
    NoCase,
}

impl CaseStyle {
    /// Classify the naming convention of `text`.
    pub fn of(text: &str) -> Self {
        let has_upper = text.chars().any(char::is_uppercase);
        let has_hyphen = text.contains('-');
        let has_underscore = text.contains('_');

        match (has_upper, has_hyphen, has_underscore) {
            (false, true, false) => CaseStyle::Kebab,
            (false, false, true) => CaseStyle::Snake,
            (true, false, false) => match text.chars().next() {
                // A first character with no lowercase form (uppercase
                // letters, but also digits and symbols) reads as Pascal.
                Some(first) if !first.is_lowercase() => CaseStyle::Pascal,
                _ => CaseStyle::Camel,
            },
            _ => CaseStyle::NoCase,
        }
    }

    /// The fractional score added to a tier value for this style.
    pub const fn bonus(self) -> f64 {
        match self {
            CaseStyle::Camel => 0.8,
            CaseStyle::Pascal => 0.6,
            CaseStyle::Kebab => 0.4,
            CaseStyle::Snake => 0.2,
            CaseStyle::NoCase => 0.0,
        }
    }
}

/// Whether `sub` occurs in `text` starting exactly at a case boundary.
///
/// Only the first case-insensitive occurrence of `sub` is examined. For
/// snake and kebab styles the character immediately before the occurrence
/// must be the style's separator; for camel and Pascal the character *at*
/// the occurrence must not be lowercase.
///
/// # Examples
///
/// ```
/// use casematch::{CaseStyle, is_partial_of_case};
///
/// assert!(is_partial_of_case("helloWorld", "world", CaseStyle::Camel));
/// assert!(!is_partial_of_case("helloWorld", "oworl", CaseStyle::Camel));
/// assert!(is_partial_of_case("snake_case_value", "case", CaseStyle::Snake));
/// ```
pub fn is_partial_of_case(text: &str, sub: &str, style: CaseStyle) -> bool {
    let lower_text = text.to_lowercase();
    let lower_sub = sub.to_lowercase();
    match lower_text.find(&lower_sub) {
        Some(byte_idx) => {
            let char_idx = lower_text[..byte_idx].chars().count();
            is_partial_at(text, char_idx, style)
        }
        None => false,
    }
}

/// Boundary check for a known match position (in characters) within the
/// original-case `text`. Split out so the ranking hot path can reuse a
/// match position it has already located.
pub(crate) fn is_partial_at(text: &str, char_idx: usize, style: CaseStyle) -> bool {
    match style {
        CaseStyle::Snake => char_idx > 0 && text.chars().nth(char_idx - 1) == Some('_'),
        CaseStyle::Kebab => char_idx > 0 && text.chars().nth(char_idx - 1) == Some('-'),
        CaseStyle::Pascal | CaseStyle::Camel => text
            .chars()
            .nth(char_idx)
            .is_some_and(|c| !c.is_lowercase()),
        CaseStyle::NoCase => false,
    }
}

/// Whether `sub` spells out the initials of `text`'s cased segments.
///
/// `text` is split into segments by the style's separator (`_` for snake,
/// `-` for kebab) or before each uppercase letter for camel/Pascal. Each
/// character of `sub`, lowercased, must equal the lowercased first
/// character of the corresponding segment, in order. `sub` may cover a
/// prefix of the segments; an empty or missing segment fails the check.
///
/// # Examples
///
/// ```
/// use casematch::{CaseStyle, is_case_acronym};
///
/// assert!(is_case_acronym("super_duper_file", "sdf", CaseStyle::Snake));
/// assert!(is_case_acronym("fooBar", "fb", CaseStyle::Camel));
/// assert!(!is_case_acronym("fooBar", "fo", CaseStyle::Camel));
/// ```
pub fn is_case_acronym(text: &str, sub: &str, style: CaseStyle) -> bool {
    let segments = case_segments(text, style);
    sub.chars().enumerate().all(|(i, sub_char)| {
        segments
            .get(i)
            .and_then(|segment| segment.chars().next())
            .is_some_and(|first| first.to_lowercase().next() == sub_char.to_lowercase().next())
    })
}

/// Split `text` into its case segments for acronym matching.
fn case_segments(text: &str, style: CaseStyle) -> Vec<&str> {
    match style {
        CaseStyle::Snake => text.split('_').collect(),
        CaseStyle::Kebab => text.split('-').collect(),
        CaseStyle::Pascal | CaseStyle::Camel => {
            let mut segments = Vec::new();
            let mut start = 0;
            for (idx, c) in text.char_indices() {
                if idx > 0 && c.is_uppercase() {
                    segments.push(&text[start..idx]);
                    start = idx;
                }
            }
            segments.push(&text[start..]);
            segments
        }
        CaseStyle::NoCase => vec![text],
    }
}
