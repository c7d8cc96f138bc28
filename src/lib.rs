#![warn(missing_docs)]

//! A fuzzy ranking and filtering library for in-memory collections.
//!
//! `casematch` scores every item in a slice against a search query using
//! a tiered ranking system (exact, prefix, word-boundary, case-aware,
//! acronym, and fuzzy closeness tiers), drops the items below a
//! threshold, and returns the survivors best-match-first. Candidates
//! written in camelCase, PascalCase, kebab-case, or snake_case earn a
//! fractional case bonus and two dedicated tiers, so `"fb"` finds
//! `"fooBar"` ahead of `"foobar"`.
//!
//! # Quick start
//!
//! ```
//! use casematch::{MatchOptions, match_sort};
//!
//! let items = ["apple", "banana", "grape"];
//! let results = match_sort(&items, "ap", MatchOptions::default());
//! // "apple" starts with the query; "grape" merely contains it.
//! assert_eq!(results, vec![&"apple", &"grape"]);
//! ```
//!
//! # Matching on struct fields
//!
//! ```
//! use casematch::{AsMatchStr, Key, MatchOptions, match_sort};
//!
//! struct City { name: String }
//!
//! impl AsMatchStr for City {
//!     fn as_match_str(&self) -> &str { &self.name }
//! }
//!
//! let cities = vec![
//!     City { name: "San Francisco".to_owned() },
//!     City { name: "Frankfurt".to_owned() },
//!     City { name: "New York".to_owned() },
//! ];
//! let opts = MatchOptions {
//!     keys: vec![Key::new(|c: &City| vec![c.name.clone()])],
//!     ..Default::default()
//! };
//! let results = match_sort(&cities, "fran", opts);
//! // A prefix match outranks a word-boundary match.
//! assert_eq!(results[0].name, "Frankfurt");
//! assert_eq!(results[1].name, "San Francisco");
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;

/// Ranking tiers, case classification, and scoring logic.
pub mod ranking;

/// Key extraction types for pulling matchable string values from items.
pub mod key;

/// No-keys mode for ranking string-like items directly.
pub mod no_keys;

/// Configuration options and the per-item ranking record.
pub mod options;

/// Comparators for ordering ranked items.
pub mod sort;

/// Dot-path extraction over `serde_json::Value` items.
#[cfg(feature = "json")]
pub mod json;

// Re-export the public API at the crate root.
pub use key::{Key, PathExtract, RankingInfo, get_highest_ranking, get_item_values};
pub use no_keys::{AsMatchStr, rank_item};
pub use options::{BaseSortFn, MatchOptions, RankedItem, SorterFn};
pub use ranking::{
    CaseStyle, Rank, Ranking, get_acronym, get_closeness_ranking, get_match_ranking,
    is_case_acronym, is_partial_of_case, prepare_value_for_comparison,
};
pub use sort::{default_base_sort, sort_ranked_values};

use ranking::PreparedQuery;

/// Rank, filter, and sort a slice of items against a search query.
///
/// Every item is scored via its keys (or its own string form when
/// `options.keys` is empty), items whose rank falls below the applicable
/// threshold are dropped, and the survivors are returned best-match-first.
/// The threshold for an item is the winning key's override when it has
/// one, otherwise [`MatchOptions::threshold`].
///
/// Ties are broken by key declaration order, then by the
/// [`base_sort`](MatchOptions::base_sort) comparator (alphabetical by
/// default); the sort is stable, so full ties keep input order. An empty
/// query matches every item at the prefix tier, which makes this a
/// sorted pass-through.
///
/// The `T: AsMatchStr` bound supplies the item's own string form for
/// no-keys mode; types ranked exclusively through keys can implement it
/// by returning any representative field.
///
/// # Examples
///
/// ```
/// use casematch::{MatchOptions, Ranking, match_sort};
///
/// let items = ["pineapple", "apple", "applesauce"];
/// let results = match_sort(&items, "apple", MatchOptions::default());
/// assert_eq!(results, vec![&"apple", &"applesauce", &"pineapple"]);
///
/// // Tighten the threshold to substring matches or better.
/// let opts = MatchOptions {
///     threshold: Ranking::Contains.into(),
///     ..Default::default()
/// };
/// let results = match_sort(&["apple", "atop"], "ap", opts);
/// assert_eq!(results, vec![&"apple"]);
/// ```
pub fn match_sort<'a, T: AsMatchStr>(
    items: &'a [T],
    query: &str,
    options: MatchOptions<T>,
) -> Vec<&'a T> {
    let MatchOptions {
        keys,
        threshold,
        keep_diacritics,
        base_sort,
        sorter,
    } = options;

    // Prepare the query once; the per-item loop reuses the lowercase
    // buffer and the substring finder.
    let pq = PreparedQuery::new(query, keep_diacritics);
    let finder = if pq.lower.is_empty() {
        None
    } else {
        Some(memchr::memmem::Finder::new(pq.lower.as_bytes()))
    };
    let mut buf = String::new();

    let mut matches: Vec<RankedItem<'a, T>> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let record = if keys.is_empty() {
            let rank = ranking::get_match_ranking_prepared(
                item.as_match_str(),
                &pq,
                keep_diacritics,
                &mut buf,
                finder.as_ref(),
            );
            RankedItem {
                item,
                index,
                rank,
                ranked_value: Cow::Borrowed(item.as_match_str()),
                key_index: None,
                key_threshold: None,
            }
        } else {
            let info = key::get_highest_ranking_prepared(
                item,
                &keys,
                &pq,
                keep_diacritics,
                &mut buf,
                finder.as_ref(),
            );
            RankedItem {
                item,
                index,
                rank: info.rank,
                ranked_value: Cow::Owned(info.ranked_value),
                key_index: Some(info.key_index),
                key_threshold: info.key_threshold,
            }
        };

        if record.rank >= record.key_threshold.unwrap_or(threshold) {
            matches.push(record);
        }
    }

    if let Some(sorter) = sorter {
        matches = sorter(matches);
    } else {
        let tiebreak: &dyn for<'r> Fn(&RankedItem<'r, T>, &RankedItem<'r, T>) -> Ordering =
            match &base_sort {
                Some(f) => f.as_ref(),
                None => &default_base_sort,
            };
        // Stable sort: full ties keep input order.
        matches.sort_by(|a, b| sort_ranked_values(a, b, tiebreak));
    }

    matches.into_iter().map(|record| record.item).collect()
}
