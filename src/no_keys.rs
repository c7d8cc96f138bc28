//! No-keys mode for ranking string-like items directly.
//!
//! When items are themselves strings (or string-like), there is no need
//! to construct [`Key`](crate::key::Key) extractors. The [`AsMatchStr`]
//! trait provides a uniform way to obtain a `&str` from any string-like
//! type, and [`rank_item`] uses it to score items directly against a
//! query.

use std::borrow::Cow;

use crate::ranking::{Rank, get_match_ranking};

/// Trait for types that can be used directly as match candidates without
/// keys.
///
/// Implementors expose their string content via
/// [`as_match_str`](AsMatchStr::as_match_str), allowing the ranking
/// engine to score them without key extraction.
///
/// # Built-in implementations
///
/// - [`String`], [`str`], `&str`, [`Cow<str>`](Cow)
/// - `serde_json::Value` with the `json` feature (string content, or
///   `""` for non-strings)
///
/// # Examples
///
/// ```
/// use casematch::AsMatchStr;
///
/// let owned = String::from("hello");
/// assert_eq!(owned.as_match_str(), "hello");
///
/// let borrowed: &str = "world";
/// assert_eq!(borrowed.as_match_str(), "world");
/// ```
pub trait AsMatchStr {
    /// Returns the string representation of this item for matching.
    fn as_match_str(&self) -> &str;
}

impl AsMatchStr for String {
    fn as_match_str(&self) -> &str {
        self.as_str()
    }
}

impl AsMatchStr for str {
    fn as_match_str(&self) -> &str {
        self
    }
}

// An explicit impl for `&str` lets `T = &str` satisfy the bound without
// the caller double-referencing.
impl AsMatchStr for &str {
    fn as_match_str(&self) -> &str {
        self
    }
}

impl AsMatchStr for Cow<'_, str> {
    fn as_match_str(&self) -> &str {
        self.as_ref()
    }
}

/// Rank a string-like item directly against a query (no-keys mode).
///
/// Convenience wrapper around
/// [`get_match_ranking`](crate::get_match_ranking) for items implementing
/// [`AsMatchStr`].
///
/// # Examples
///
/// ```
/// use casematch::{CaseStyle, Ranking, rank_item};
///
/// let item = String::from("Green");
/// assert_eq!(rank_item(&item, "Green", false), Ranking::CaseSensitiveEqual);
///
/// let item = "Greenland";
/// assert_eq!(
///     rank_item(&item, "green", false),
///     Ranking::StartsWith.with_case(CaseStyle::Pascal)
/// );
/// ```
pub fn rank_item<T: AsMatchStr>(item: &T, query: &str, keep_diacritics: bool) -> Rank {
    get_match_ranking(item.as_match_str(), query, keep_diacritics)
}
