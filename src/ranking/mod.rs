//! Ranking tiers and scoring logic for string matching.
//!
//! This module implements the tiered ranking system that determines how
//! well a candidate string matches a search query, from exact
//! case-sensitive equality down to fuzzy character-by-character matching.
//! Candidates written in a recognizable naming convention additionally
//! earn a case bonus and unlock two case-aware tiers (see [`case`]).

use std::borrow::Cow;
use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub mod case;

pub use case::{CaseStyle, is_case_acronym, is_partial_of_case};

use case::is_partial_at;

/// The named quality tier of a match between a candidate and a query.
///
/// Tiers are ordered from best to worst:
///
/// | Tier                 | Value | Description                                   |
/// |----------------------|-------|-----------------------------------------------|
/// | `CaseSensitiveEqual` | 9     | Exact match before lowercasing                |
/// | `Equal`              | 8     | Case-insensitive full match                   |
/// | `StartsWith`         | 7     | Candidate starts with query                   |
/// | `WordStartsWith`     | 6     | A space-delimited word starts with query      |
/// | `StringCase`         | 5     | Query starts at a case boundary               |
/// | `StringCaseAcronym`  | 4     | Query matches the cased segments' initials    |
/// | `Contains`           | 3     | Candidate contains query as a substring       |
/// | `Acronym`            | 2     | Query found in the candidate's word acronym   |
/// | `Matches`            | 1     | Fuzzy in-order character match                |
/// | `NoMatch`            | 0     | No match found                                |
///
/// A `Ranking` is only the tier *name*; the score actually produced by
/// [`get_match_ranking`] is a [`Rank`], which combines a tier value with
/// the candidate's case bonus (or, for `Matches`, the continuous
/// closeness score). Convert with [`Ranking::with_case`] or `Rank::from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Exact match on the prepared (diacritics-folded) strings (tier 9).
    CaseSensitiveEqual,
    /// Case-insensitive full match (tier 8).
    Equal,
    /// Candidate starts with the query, case-insensitively (tier 7).
    StartsWith,
    /// A space-delimited word within the candidate starts with the query (tier 6).
    WordStartsWith,
    /// The query occurs at a camel/Pascal/kebab/snake case boundary (tier 5).
    StringCase,
    /// The query matches the initials of the candidate's cased segments (tier 4).
    StringCaseAcronym,
    /// Candidate contains the query as a substring (tier 3).
    Contains,
    /// The candidate's space/hyphen word acronym contains the query (tier 2).
    Acronym,
    /// Fuzzy in-order character match; the actual score is continuous in
    /// `(1.0, 2.0]` (tier 1).
    Matches,
    /// No match found (tier 0).
    NoMatch,
}

impl Ranking {
    /// The base score for this tier.
    pub const fn value(self) -> f64 {
        match self {
            Ranking::CaseSensitiveEqual => 9.0,
            Ranking::Equal => 8.0,
            Ranking::StartsWith => 7.0,
            Ranking::WordStartsWith => 6.0,
            Ranking::StringCase => 5.0,
            Ranking::StringCaseAcronym => 4.0,
            Ranking::Contains => 3.0,
            Ranking::Acronym => 2.0,
            Ranking::Matches => 1.0,
            Ranking::NoMatch => 0.0,
        }
    }

    /// Combine this tier with a candidate's case bonus into a [`Rank`].
    ///
    /// # Examples
    ///
    /// ```
    /// use casematch::{CaseStyle, Rank, Ranking};
    ///
    /// let rank = Ranking::Equal.with_case(CaseStyle::Pascal);
    /// assert!(rank > Ranking::Equal && rank < Ranking::CaseSensitiveEqual);
    /// assert_eq!(Ranking::Equal.with_case(CaseStyle::NoCase), Rank::from(Ranking::Equal));
    /// ```
    pub fn with_case(self, style: CaseStyle) -> Rank {
        Rank(self.value() + style.bonus())
    }
}

// Tier names compare by their base value, best first.
impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

/// A match score: a tier base value plus the candidate's case bonus, or a
/// continuous closeness score for the `Matches` tier.
///
/// The full score domain is `{9}` for case-sensitive equality, tier
/// values 2-8 plus a bonus in `[0, 0.8]`, `(1.0, 2.0]` for closeness
/// matches, and `0` for no match. Tiers are at least one apart and the
/// bonus stays below one, so a bonus never promotes a match across tiers.
///
/// `Rank` compares directly against `Ranking` tier names, which is the
/// common way to express thresholds:
///
/// ```
/// use casematch::{Ranking, get_match_ranking};
///
/// let rank = get_match_ranking("Greenland", "green", false);
/// assert!(rank >= Ranking::StartsWith);
/// assert!(rank < Ranking::Equal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rank(f64);

impl Rank {
    /// Lower bound of the rank domain; the default per-key `min_ranking`.
    pub const MIN: Rank = Rank(f64::NEG_INFINITY);

    /// Upper bound of the rank domain; the default per-key `max_ranking`.
    pub const MAX: Rank = Rank(f64::INFINITY);

    /// A rank with an arbitrary score, for custom thresholds and bounds.
    pub const fn new(value: f64) -> Self {
        Rank(value)
    }

    /// The numeric score.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<Ranking> for Rank {
    fn from(tier: Ranking) -> Self {
        Rank(tier.value())
    }
}

impl PartialEq<Ranking> for Rank {
    fn eq(&self, other: &Ranking) -> bool {
        self.0 == other.value()
    }
}

impl PartialOrd<Ranking> for Rank {
    fn partial_cmp(&self, other: &Ranking) -> Option<Ordering> {
        self.0.partial_cmp(&other.value())
    }
}

/// Compute a fuzzy closeness rank via greedy forward character matching.
///
/// For each character in `query`, scans forward through `candidate` to
/// find it at or after the position left by the previous match. If every
/// query character is found in order, the rank reflects how closely
/// together they appear: `Matches + in_order_fraction * (1 / spread)`,
/// where `spread` is the distance (in char positions) between the first
/// and last matched characters and `in_order_fraction` is the fraction of
/// query characters matched (always 1.0 on a complete walk). The result
/// falls in `(1.0, 2.0]`; a zero spread, which the tier cascade never
/// produces, returns the 2.0 upper bound.
///
/// Returns [`Ranking::NoMatch`] when any query character cannot be found
/// going forward, including for an empty query (there is no first
/// character to find).
///
/// Matching is case-sensitive; callers are expected to lowercase both
/// sides first, as the tier cascade does.
///
/// # Examples
///
/// ```
/// use casematch::{Rank, Ranking, get_closeness_ranking};
///
/// // Chars spread across the candidate: somewhere between 1 and 2.
/// let rank = get_closeness_ranking("playground", "plgnd");
/// assert!(rank > Ranking::Matches && rank < Ranking::Acronym);
///
/// // Adjacent run "abc": spread 2, score 1.5.
/// assert_eq!(get_closeness_ranking("abcdef", "abc"), Rank::new(1.5));
///
/// // Query chars not present.
/// assert_eq!(get_closeness_ranking("abc", "xyz"), Ranking::NoMatch);
/// ```
pub fn get_closeness_ranking(candidate: &str, query: &str) -> Rank {
    // `.chars()` iterates Unicode scalar values; positions are char
    // offsets, not byte offsets.
    let mut candidate_chars = candidate.chars().enumerate();

    let query_char_count = query.chars().count();
    let mut matched_count = 0usize;
    let mut first_match_index: Option<usize> = None;
    let mut last_match_index: usize = 0;

    for query_char in query.chars() {
        match candidate_chars.find(|&(_, c)| c == query_char) {
            Some((pos, _)) => {
                matched_count += 1;
                if first_match_index.is_none() {
                    first_match_index = Some(pos);
                }
                last_match_index = pos;
            }
            None => return Ranking::NoMatch.into(),
        }
    }

    let Some(first) = first_match_index else {
        // Empty query: nothing to walk.
        return Ranking::NoMatch.into();
    };

    let spread = last_match_index - first;
    if spread == 0 {
        return Rank(Ranking::Matches.value() + 1.0);
    }

    let in_order_fraction = matched_count as f64 / query_char_count as f64;
    Rank(Ranking::Matches.value() + in_order_fraction * (1.0 / spread as f64))
}

/// Extract the acronym of a string: the first character of each word,
/// where words are separated by spaces and hyphens.
///
/// Consecutive or leading separators contribute nothing. The caller is
/// responsible for lowercasing the input first.
///
/// # Examples
///
/// ```
/// use casematch::get_acronym;
///
/// assert_eq!(get_acronym("north-west airlines"), "nwa");
/// assert_eq!(get_acronym("san francisco"), "sf");
/// assert_eq!(get_acronym("single"), "s");
/// assert_eq!(get_acronym(""), "");
/// ```
pub fn get_acronym(s: &str) -> String {
    s.split([' ', '-'])
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Prepare a string for comparison by optionally stripping diacritics.
///
/// When `keep_diacritics` is `false`, applies Unicode NFD decomposition
/// and removes combining marks, so e.g. `"café"` becomes `"cafe"`. When
/// `true`, the input is returned unchanged. Idempotent: preparing an
/// already-prepared string returns it as-is.
///
/// Returns [`Cow::Borrowed`] whenever no modification is needed (ASCII
/// input, `keep_diacritics = true`, or nothing to strip); only allocates
/// when characters are actually removed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use casematch::prepare_value_for_comparison;
///
/// let stripped = prepare_value_for_comparison("caf\u{00e9}", false);
/// assert_eq!(stripped, "cafe");
/// assert!(matches!(stripped, Cow::Owned(_)));
///
/// let ascii = prepare_value_for_comparison("cafe", false);
/// assert!(matches!(ascii, Cow::Borrowed(_)));
///
/// let kept = prepare_value_for_comparison("caf\u{00e9}", true);
/// assert_eq!(kept, "caf\u{00e9}");
/// ```
pub fn prepare_value_for_comparison(s: &str, keep_diacritics: bool) -> Cow<'_, str> {
    if keep_diacritics {
        return Cow::Borrowed(s);
    }

    // ASCII strings never contain combining marks.
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    // NFD splits precomposed characters like U+00E9 into base letter plus
    // combining mark; filtering the marks strips the diacritics.
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();

    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Pre-computed query data for amortizing repeated per-item ranking calls.
///
/// Caches the prepared (diacritics-stripped) query, its lowercased form,
/// and its character count, so that [`match_sort`](crate::match_sort) can
/// avoid redundant work when ranking thousands of candidates against the
/// same query.
pub(crate) struct PreparedQuery {
    /// The query after optional diacritics stripping.
    prepared: String,
    /// Lowercased version of the prepared query.
    pub(crate) lower: String,
    /// Character count of the lowercased query.
    char_count: usize,
}

impl PreparedQuery {
    pub(crate) fn new(query: &str, keep_diacritics: bool) -> Self {
        let prepared = prepare_value_for_comparison(query, keep_diacritics).into_owned();
        let lower = prepared.to_lowercase();
        // ASCII fast path: byte length equals character count.
        let char_count = if lower.is_ascii() {
            lower.len()
        } else {
            lower.chars().count()
        };
        Self {
            prepared,
            lower,
            char_count,
        }
    }
}

/// Lowercase `s` into `buf`, reusing the buffer's allocation.
fn lowercase_into(s: &str, buf: &mut String) {
    buf.clear();
    buf.reserve(s.len());
    if s.is_ascii() {
        // ASCII bytes are single-byte UTF-8, so byte-wise lowercasing
        // avoids the Unicode case-mapping tables.
        buf.extend(s.as_bytes().iter().map(|&b| b.to_ascii_lowercase() as char));
    } else {
        for c in s.chars() {
            for lc in c.to_lowercase() {
                buf.push(lc);
            }
        }
    }
}

/// Inner hot-path ranking function using pre-prepared query data and a
/// reusable candidate buffer.
///
/// Avoids redundant query preparation, lowercasing, and allocation when
/// called repeatedly in a loop. `finder` is a substring searcher built
/// from the lowercased query, or `None` when the query is empty (memmem
/// panics on empty needles).
pub(crate) fn get_match_ranking_prepared(
    test_string: &str,
    pq: &PreparedQuery,
    keep_diacritics: bool,
    candidate_buf: &mut String,
    finder: Option<&memchr::memmem::Finder<'_>>,
) -> Rank {
    let candidate = prepare_value_for_comparison(test_string, keep_diacritics);

    // A query with more characters than the candidate cannot match.
    let candidate_char_count = if candidate.is_ascii() {
        candidate.len()
    } else {
        candidate.chars().count()
    };
    if pq.char_count > candidate_char_count {
        return Ranking::NoMatch.into();
    }

    // Exact equality on the prepared strings, before any lowercasing.
    if *candidate == *pq.prepared {
        return Ranking::CaseSensitiveEqual.into();
    }

    // The case-aware tiers need the original-case candidate, so classify
    // before lowercasing.
    let style = CaseStyle::of(&candidate);

    lowercase_into(&candidate, candidate_buf);

    // Substring scan over the lowercased candidate. Resolves the Equal,
    // StartsWith, and WordStartsWith tiers immediately; otherwise leaves
    // the first match position for the StringCase and Contains tiers.
    let first_match = match finder {
        Some(finder) => {
            let candidate_bytes = candidate_buf.as_bytes();
            let mut iter = finder.find_iter(candidate_bytes);
            match iter.next() {
                Some(0) => {
                    // Equal byte lengths at position 0 means the
                    // lowercased strings are identical.
                    return if candidate_buf.len() == pq.lower.len() {
                        Ranking::Equal.with_case(style)
                    } else {
                        Ranking::StartsWith.with_case(style)
                    };
                }
                Some(first) => {
                    // Word boundary: any occurrence preceded by a space.
                    if candidate_bytes[first - 1] == b' '
                        || iter.any(|pos| candidate_bytes[pos - 1] == b' ')
                    {
                        return Ranking::WordStartsWith.with_case(style);
                    }
                    Some(first)
                }
                None => None,
            }
        }
        None => {
            // Empty query: found at position 0 of any candidate. Both
            // strings empty was already caught by the equality check.
            return if candidate_buf.is_empty() {
                Ranking::Equal.with_case(style)
            } else {
                Ranking::StartsWith.with_case(style)
            };
        }
    };

    // Part inside a cased string: the first occurrence must start at a
    // case boundary of the original-case candidate.
    if let Some(first) = first_match {
        let char_idx = candidate_buf[..first].chars().count();
        if is_partial_at(&candidate, char_idx, style) {
            return Ranking::StringCase.with_case(style);
        }
    }

    // Acronym of the cased segments. Checked before Contains, so a cased
    // candidate can land here even when the query is no substring at all.
    if style != CaseStyle::NoCase && is_case_acronym(&candidate, &pq.lower, style) {
        return Ranking::StringCaseAcronym.with_case(style);
    }

    if first_match.is_some() {
        return Ranking::Contains.with_case(style);
    }

    // A single-character query that is not even a substring cannot match;
    // the acronym and closeness tiers are skipped entirely.
    if pq.char_count == 1 {
        return Ranking::NoMatch.into();
    }

    if get_acronym(candidate_buf).contains(pq.lower.as_str()) {
        return Ranking::Acronym.with_case(style);
    }

    get_closeness_ranking(candidate_buf, &pq.lower)
}

/// Determine how well a candidate string matches a search query.
///
/// Classifies the match into one of the tiers of [`Ranking`], checked in
/// descending order of specificity, and returns the tier value plus the
/// candidate's case bonus as a [`Rank`]. The first matching tier wins.
///
/// Both inputs are first prepared via [`prepare_value_for_comparison`].
/// The exact-equality tier compares the prepared strings; the
/// [`StringCase`](Ranking::StringCase) and
/// [`StringCaseAcronym`](Ranking::StringCaseAcronym) tiers consult the
/// original-case candidate; every other tier compares lowercased forms.
///
/// # Arguments
///
/// * `test_string` - The candidate string being evaluated
/// * `string_to_rank` - The search query
/// * `keep_diacritics` - If `true`, skip diacritics stripping
///
/// # Examples
///
/// ```
/// use casematch::{CaseStyle, Ranking, get_match_ranking};
///
/// assert_eq!(get_match_ranking("Green", "Green", false), Ranking::CaseSensitiveEqual);
/// assert_eq!(
///     get_match_ranking("Green", "green", false),
///     Ranking::Equal.with_case(CaseStyle::Pascal)
/// );
/// assert_eq!(
///     get_match_ranking("fooBar", "fb", false),
///     Ranking::StringCaseAcronym.with_case(CaseStyle::Camel)
/// );
/// assert_eq!(get_match_ranking("abc", "xyz", false), Ranking::NoMatch);
/// ```
pub fn get_match_ranking(test_string: &str, string_to_rank: &str, keep_diacritics: bool) -> Rank {
    // Thin wrapper constructing the prepared query for one-off calls.
    let pq = PreparedQuery::new(string_to_rank, keep_diacritics);
    let finder = if pq.lower.is_empty() {
        None
    } else {
        Some(memchr::memmem::Finder::new(pq.lower.as_bytes()))
    };
    let mut buf = String::new();
    get_match_ranking_prepared(test_string, &pq, keep_diacritics, &mut buf, finder.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Ranking and Rank ordering ---

    #[test]
    fn full_tier_ordering_descending() {
        assert!(Ranking::CaseSensitiveEqual > Ranking::Equal);
        assert!(Ranking::Equal > Ranking::StartsWith);
        assert!(Ranking::StartsWith > Ranking::WordStartsWith);
        assert!(Ranking::WordStartsWith > Ranking::StringCase);
        assert!(Ranking::StringCase > Ranking::StringCaseAcronym);
        assert!(Ranking::StringCaseAcronym > Ranking::Contains);
        assert!(Ranking::Contains > Ranking::Acronym);
        assert!(Ranking::Acronym > Ranking::Matches);
        assert!(Ranking::Matches > Ranking::NoMatch);
    }

    #[test]
    fn case_bonus_never_crosses_tiers() {
        // The largest bonus (Camel, 0.8) stays below the next tier up.
        for tier in [
            Ranking::Equal,
            Ranking::StartsWith,
            Ranking::WordStartsWith,
            Ranking::StringCase,
            Ranking::StringCaseAcronym,
            Ranking::Contains,
            Ranking::Acronym,
        ] {
            let boosted = tier.with_case(CaseStyle::Camel);
            assert!(boosted > tier, "bonus should raise {tier:?}");
            assert!(
                boosted.value() < tier.value() + 1.0,
                "bonus should not reach the next tier from {tier:?}"
            );
        }
    }

    #[test]
    fn rank_compares_against_tier_names() {
        let rank = Ranking::Contains.with_case(CaseStyle::Kebab);
        assert!(rank > Ranking::Contains);
        assert!(rank < Ranking::StringCaseAcronym);
        assert_eq!(Rank::from(Ranking::Contains), Ranking::Contains);
    }

    #[test]
    fn no_case_bonus_is_identity() {
        assert_eq!(
            Ranking::StartsWith.with_case(CaseStyle::NoCase),
            Rank::from(Ranking::StartsWith)
        );
    }

    #[test]
    fn rank_bounds_order_around_everything() {
        assert!(Rank::MAX > Ranking::CaseSensitiveEqual);
        assert!(Rank::MIN < Ranking::NoMatch);
    }

    // --- get_acronym ---

    #[test]
    fn acronym_hyphen_and_space() {
        assert_eq!(get_acronym("north-west airlines"), "nwa");
    }

    #[test]
    fn acronym_space_only() {
        assert_eq!(get_acronym("san francisco"), "sf");
    }

    #[test]
    fn acronym_single_word() {
        assert_eq!(get_acronym("single"), "s");
    }

    #[test]
    fn acronym_empty_string() {
        assert_eq!(get_acronym(""), "");
    }

    #[test]
    fn acronym_underscores_not_delimiters() {
        assert_eq!(get_acronym("snake_case_word"), "s");
    }

    #[test]
    fn acronym_consecutive_separators_collapse() {
        assert_eq!(get_acronym("hello  world"), "hw");
        assert_eq!(get_acronym("a--b"), "ab");
    }

    #[test]
    fn acronym_leading_and_trailing_separators() {
        assert_eq!(get_acronym(" x"), "x");
        assert_eq!(get_acronym("hello "), "h");
    }

    #[test]
    fn acronym_mixed_delimiters() {
        assert_eq!(get_acronym("one two-three four"), "ottf");
    }

    // --- prepare_value_for_comparison ---

    #[test]
    fn strips_combining_acute_accent() {
        let result = prepare_value_for_comparison("cafe\u{0301}", false);
        assert_eq!(result, "cafe");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn returns_borrowed_for_plain_ascii() {
        let result = prepare_value_for_comparison("cafe", false);
        assert_eq!(result, "cafe");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn returns_borrowed_when_keep_diacritics_is_true() {
        let input = "cafe\u{0301}";
        let result = prepare_value_for_comparison(input, true);
        assert_eq!(result, input);
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn strips_precomposed_accent() {
        // U+00E9 decomposes into 'e' + U+0301 under NFD.
        let result = prepare_value_for_comparison("caf\u{00e9}", false);
        assert_eq!(result, "cafe");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn strips_multiple_diacritics() {
        let result = prepare_value_for_comparison("\u{00fc}ber-ma\u{00f1}ana", false);
        assert_eq!(result, "uber-manana");
    }

    #[test]
    fn preparation_is_idempotent() {
        for input in ["caf\u{00e9}", "cafe\u{0301}", "plain", "\u{4e16}\u{754c}"] {
            let once = prepare_value_for_comparison(input, false).into_owned();
            let twice = prepare_value_for_comparison(&once, false).into_owned();
            assert_eq!(once, twice, "preparing twice changed {input:?}");
        }
    }

    #[test]
    fn returns_borrowed_for_non_ascii_without_diacritics() {
        // CJK has no combining marks to strip.
        let result = prepare_value_for_comparison("\u{4e16}\u{754c}", false);
        assert_eq!(result, "\u{4e16}\u{754c}");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    // --- get_closeness_ranking ---

    #[test]
    fn closeness_fuzzy_match_playground() {
        // "plgnd" found at positions 0, 1, 4, 8, 9: spread 9.
        let rank = get_closeness_ranking("playground", "plgnd");
        let expected = 1.0 + 1.0 / 9.0;
        assert!(
            (rank.value() - expected).abs() < f64::EPSILON,
            "expected {expected}, got {}",
            rank.value()
        );
    }

    #[test]
    fn closeness_no_match() {
        assert_eq!(get_closeness_ranking("abc", "xyz"), Ranking::NoMatch);
    }

    #[test]
    fn closeness_single_char_upper_bound() {
        // Single char at one position: spread 0 returns the upper bound.
        assert_eq!(get_closeness_ranking("ab", "a"), Rank::new(2.0));
    }

    #[test]
    fn closeness_single_char_not_found() {
        assert_eq!(get_closeness_ranking("ab", "z"), Ranking::NoMatch);
    }

    #[test]
    fn closeness_adjacent_chars() {
        // Positions 0, 1, 2: spread 2, score 1.5.
        assert_eq!(get_closeness_ranking("abcdef", "abc"), Rank::new(1.5));
    }

    #[test]
    fn closeness_partial_mismatch() {
        assert_eq!(get_closeness_ranking("abcdef", "az"), Ranking::NoMatch);
    }

    #[test]
    fn closeness_out_of_order_chars() {
        // 'd' is consumed scanning for the first char; "da" cannot
        // complete going forward.
        assert_eq!(get_closeness_ranking("abcd", "da"), Ranking::NoMatch);
    }

    #[test]
    fn closeness_empty_query_is_no_match() {
        assert_eq!(get_closeness_ranking("anything", ""), Ranking::NoMatch);
    }

    #[test]
    fn closeness_result_always_in_range() {
        let cases = [
            ("abcdefghijklmnop", "ap"),
            ("abcdefghijklmnop", "abop"),
            ("abcdef", "af"),
            ("ab", "ab"),
        ];
        for (candidate, query) in cases {
            let rank = get_closeness_ranking(candidate, query);
            assert!(
                rank > Ranking::Matches && rank.value() <= 2.0,
                "score {} out of range for ({candidate}, {query})",
                rank.value()
            );
        }
    }

    #[test]
    fn closeness_unicode_chars() {
        // Positions are char offsets: 'a' at 0, 'c' at 2, spread 2.
        assert_eq!(get_closeness_ranking("a\u{00e9}c", "ac"), Rank::new(1.5));
    }

    #[test]
    fn closeness_tighter_cluster_scores_higher() {
        let tight = get_closeness_ranking("xabcx", "abc");
        let loose = get_closeness_ranking("axbxc", "abc");
        assert!(tight > loose);
    }

    // --- get_match_ranking: plain tiers ---

    #[test]
    fn ranking_case_sensitive_equal() {
        assert_eq!(
            get_match_ranking("Green", "Green", false),
            Ranking::CaseSensitiveEqual
        );
    }

    #[test]
    fn ranking_case_sensitive_equal_has_no_bonus() {
        // Exact equality returns the bare tier even for cased candidates.
        assert_eq!(
            get_match_ranking("fooBar", "fooBar", false),
            Ranking::CaseSensitiveEqual
        );
    }

    #[test]
    fn ranking_equal_with_pascal_bonus() {
        assert_eq!(
            get_match_ranking("Green", "green", false),
            Ranking::Equal.with_case(CaseStyle::Pascal)
        );
    }

    #[test]
    fn ranking_equal_without_style() {
        assert_eq!(get_match_ranking("green", "GREEN", false), Ranking::Equal);
    }

    #[test]
    fn ranking_starts_with() {
        assert_eq!(
            get_match_ranking("Greenland", "green", false),
            Ranking::StartsWith.with_case(CaseStyle::Pascal)
        );
        assert_eq!(
            get_match_ranking("greenland", "green", false),
            Ranking::StartsWith
        );
    }

    #[test]
    fn ranking_word_starts_with() {
        assert_eq!(
            get_match_ranking("San Francisco", "fran", false),
            Ranking::WordStartsWith.with_case(CaseStyle::Pascal)
        );
    }

    #[test]
    fn ranking_contains() {
        assert_eq!(get_match_ranking("abcdef", "cde", false), Ranking::Contains);
    }

    #[test]
    fn ranking_acronym() {
        // "North-West Airlines" mixes uppercase and hyphens: NoCase, so
        // the match lands on the plain acronym tier with no bonus.
        assert_eq!(
            get_match_ranking("North-West Airlines", "nwa", false),
            Ranking::Acronym
        );
    }

    #[test]
    fn ranking_acronym_containment_is_enough() {
        // The acronym of "as soon as possible" is "asap"; "sap" is a
        // substring of it without being equal to it.
        assert_eq!(
            get_match_ranking("as soon as possible", "sap", false),
            Ranking::Acronym
        );
    }

    #[test]
    fn ranking_fuzzy_matches() {
        let rank = get_match_ranking("playground", "plgnd", false);
        assert!(rank > Ranking::Matches && rank < Ranking::Acronym);
    }

    #[test]
    fn ranking_no_match() {
        assert_eq!(get_match_ranking("abc", "xyz", false), Ranking::NoMatch);
    }

    // --- get_match_ranking: case-aware tiers ---

    #[test]
    fn ranking_string_case_camel() {
        assert_eq!(
            get_match_ranking("helloWorld", "world", false),
            Ranking::StringCase.with_case(CaseStyle::Camel)
        );
    }

    #[test]
    fn ranking_string_case_kebab() {
        assert_eq!(
            get_match_ranking("hello-world", "wor", false),
            Ranking::StringCase.with_case(CaseStyle::Kebab)
        );
    }

    #[test]
    fn ranking_string_case_snake() {
        assert_eq!(
            get_match_ranking("hello_world", "wor", false),
            Ranking::StringCase.with_case(CaseStyle::Snake)
        );
    }

    #[test]
    fn ranking_contains_when_not_on_case_boundary() {
        // "oworl" occurs mid-segment, so it only rates Contains (plus the
        // camel bonus).
        assert_eq!(
            get_match_ranking("helloWorld", "oworl", false),
            Ranking::Contains.with_case(CaseStyle::Camel)
        );
    }

    #[test]
    fn ranking_string_case_acronym_camel() {
        assert_eq!(
            get_match_ranking("fooBar", "fb", false),
            Ranking::StringCaseAcronym.with_case(CaseStyle::Camel)
        );
    }

    #[test]
    fn ranking_string_case_acronym_snake() {
        assert_eq!(
            get_match_ranking("super_duper_file", "sdf", false),
            Ranking::StringCaseAcronym.with_case(CaseStyle::Snake)
        );
    }

    #[test]
    fn ranking_uncased_candidate_skips_case_acronym() {
        // "foobar" has no case segments; "fb" can only match fuzzily.
        let rank = get_match_ranking("foobar", "fb", false);
        assert!(rank > Ranking::Matches && rank < Ranking::Acronym);
    }

    #[test]
    fn ranking_case_acronym_beats_plain_acronym() {
        let cased = get_match_ranking("fooBar", "fb", false);
        let plain = get_match_ranking("foo bar", "fb", false);
        assert_eq!(plain, Ranking::Acronym);
        assert!(cased > plain);
    }

    #[test]
    fn ranking_word_boundary_beats_string_case() {
        // " world" appears after a space, which outranks the camel
        // boundary the same candidate would otherwise match on.
        assert_eq!(
            get_match_ranking("say helloWorld world", "world", false),
            Ranking::WordStartsWith.with_case(CaseStyle::Camel)
        );
    }

    // --- get_match_ranking: guards and edge cases ---

    #[test]
    fn ranking_query_longer_than_candidate() {
        assert_eq!(get_match_ranking("ab", "abcdef", false), Ranking::NoMatch);
    }

    #[test]
    fn ranking_single_char_not_substring() {
        assert_eq!(get_match_ranking("abcdef", "z", false), Ranking::NoMatch);
    }

    #[test]
    fn ranking_single_char_skips_plain_acronym() {
        // "x" is no substring of "a b c"; the single-character guard
        // fires before the acronym tier is consulted.
        assert_eq!(get_match_ranking("a b c", "x", false), Ranking::NoMatch);
    }

    #[test]
    fn ranking_single_char_substring_found() {
        assert_eq!(get_match_ranking("abcdef", "a", false), Ranking::StartsWith);
    }

    #[test]
    fn ranking_single_char_equal() {
        assert_eq!(
            get_match_ranking("a", "a", false),
            Ranking::CaseSensitiveEqual
        );
    }

    #[test]
    fn ranking_empty_query() {
        assert_eq!(
            get_match_ranking("anything", "", false),
            Ranking::StartsWith
        );
        // A cased candidate still earns its bonus on the empty query.
        assert_eq!(
            get_match_ranking("Anything", "", false),
            Ranking::StartsWith.with_case(CaseStyle::Pascal)
        );
    }

    #[test]
    fn ranking_both_empty() {
        assert_eq!(
            get_match_ranking("", "", false),
            Ranking::CaseSensitiveEqual
        );
    }

    #[test]
    fn ranking_hyphen_is_not_a_word_boundary() {
        // "North-West" classifies NoCase (uppercase plus hyphen), and '-'
        // does not count as a word boundary: plain Contains.
        assert_eq!(
            get_match_ranking("North-West", "west", false),
            Ranking::Contains
        );
    }

    #[test]
    fn ranking_word_boundary_second_occurrence() {
        // First occurrence at position 1 is not space-preceded; the later
        // one at position 9 is.
        assert_eq!(
            get_match_ranking("xfoo bar foo", "foo", false),
            Ranking::WordStartsWith
        );
    }

    #[test]
    fn ranking_diacritics_stripped_to_exact_match() {
        assert_eq!(
            get_match_ranking("caf\u{00e9}", "cafe", false),
            Ranking::CaseSensitiveEqual
        );
    }

    #[test]
    fn ranking_diacritics_kept_breaks_match() {
        // With stripping disabled, 'e' never matches '\u{00e9}' anywhere
        // down the cascade.
        assert_eq!(
            get_match_ranking("caf\u{00e9}", "cafe", true),
            Ranking::NoMatch
        );
    }

    #[test]
    fn ranking_length_guard_counts_chars_not_bytes() {
        // One char (two bytes) against a two-char query.
        assert_eq!(get_match_ranking("\u{00e9}", "ab", true), Ranking::NoMatch);
    }

    #[test]
    fn ranking_cyrillic_case_insensitive() {
        // Capital el candidate found via lowercased comparison.
        let rank = get_match_ranking("\u{041b}\u{0435}\u{0434}", "\u{043b}", false);
        assert_eq!(rank, Ranking::StartsWith.with_case(CaseStyle::Pascal));
    }
}
