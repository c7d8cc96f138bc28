//! Configuration options for the match-sorting pipeline.
//!
//! [`MatchOptions`] controls global behavior (keys, threshold, diacritics
//! handling, tie-breaking) for a [`match_sort`](crate::match_sort) call.
//! [`RankedItem`] is the per-item ranking record the pipeline produces
//! before the final sort strips it back down to items.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::key::Key;
use crate::ranking::{Rank, Ranking};

/// A caller-supplied tie-breaking comparator over two ranking records.
///
/// Only consulted when both rank and key index are equal; see
/// [`sort_ranked_values`](crate::sort_ranked_values).
pub type BaseSortFn<T> =
    Box<dyn for<'a> Fn(&RankedItem<'a, T>, &RankedItem<'a, T>) -> Ordering>;

/// A caller-supplied replacement for the entire sort stage.
///
/// Receives the threshold-filtered ranking records and returns them in
/// final output order.
pub type SorterFn<T> = Box<dyn for<'a> Fn(Vec<RankedItem<'a, T>>) -> Vec<RankedItem<'a, T>>>;

/// Global options that control a [`match_sort`](crate::match_sort) call.
///
/// # Defaults
///
/// - `keys`: empty (rank items' own string form via
///   [`AsMatchStr`](crate::AsMatchStr))
/// - `threshold`: [`Ranking::Matches`] (fuzzy matches pass, `NoMatch` is
///   dropped)
/// - `keep_diacritics`: `false` (diacritics are stripped before
///   comparison)
/// - `base_sort`: `None` (alphabetical tie-breaking via
///   [`default_base_sort`](crate::default_base_sort))
/// - `sorter`: `None` (the standard three-level sort)
///
/// # Examples
///
/// ```
/// use casematch::{MatchOptions, Ranking};
///
/// let opts = MatchOptions::<&str>::default();
/// assert!(!opts.keep_diacritics);
/// assert_eq!(opts.threshold, Ranking::Matches);
///
/// // Only accept substring matches or better.
/// let opts = MatchOptions::<&str> {
///     threshold: Ranking::Contains.into(),
///     ..Default::default()
/// };
/// assert_eq!(opts.threshold, Ranking::Contains);
/// ```
pub struct MatchOptions<T> {
    /// Ordered key specifications. When empty, items are ranked by their
    /// own string form. Key order matters: earlier keys win rank ties.
    pub keys: Vec<Key<T>>,

    /// Minimum rank (inclusive) an item must reach to be included,
    /// unless the winning key carries its own threshold. A threshold at
    /// or below [`Ranking::NoMatch`] lets every item through.
    pub threshold: Rank,

    /// When `true`, diacritics are preserved during comparison. When
    /// `false` (default), they are stripped so e.g. "cafe" matches
    /// "caf\u{00e9}".
    pub keep_diacritics: bool,

    /// Final tie-breaking comparator; `None` uses alphabetical
    /// comparison of the ranked values.
    pub base_sort: Option<BaseSortFn<T>>,

    /// Full sort-stage override; `None` uses the standard three-level
    /// sort.
    pub sorter: Option<SorterFn<T>>,
}

// Manual impl: `derive` would wrongly require `T: Default`.
impl<T> Default for MatchOptions<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            threshold: Ranking::Matches.into(),
            keep_diacritics: false,
            base_sort: None,
            sorter: None,
        }
    }
}

/// The per-item ranking record produced while match-sorting.
///
/// Exposed so that custom [`base_sort`](MatchOptions::base_sort) and
/// [`sorter`](MatchOptions::sorter) functions can inspect ranks, key
/// indices, and original input positions.
#[derive(Debug, Clone)]
pub struct RankedItem<'a, T> {
    /// The item being ranked.
    pub item: &'a T,

    /// The item's position in the input slice. Not consulted by the
    /// standard sort (stability preserves input order on full ties), but
    /// available to custom sorts.
    pub index: usize,

    /// The item's best rank across its keys.
    pub rank: Rank,

    /// The extracted value that produced the best rank (the item's own
    /// string form in no-keys mode).
    pub ranked_value: Cow<'a, str>,

    /// Index of the winning value in the flattened key-values sequence,
    /// or `None` in no-keys mode. `None` orders before any `Some`.
    pub key_index: Option<usize>,

    /// Threshold override from the winning key, if any.
    pub key_threshold: Option<Rank>,
}
