//! Key extraction types and builder API.
//!
//! A [`Key<T>`] describes how to extract one or more string values from an
//! item of type `T` for ranking: either a closure, or a dot-separated
//! field path for item types implementing [`PathExtract`]. Each key also
//! carries optional per-key ranking attributes (`threshold`,
//! `min_ranking`, `max_ranking`) that override the global defaults during
//! match evaluation.
//!
//! [`RankingInfo`] captures the result of evaluating a single item against
//! a query across all of its keys.

use crate::options::MatchOptions;
use crate::ranking::{PreparedQuery, Rank, Ranking, get_match_ranking_prepared};

/// Items whose nested fields can be resolved by a dot-separated path.
///
/// Implemented for `serde_json::Value` when the `json` feature is enabled
/// (the default). Implement it for your own dynamic item types to use
/// [`Key::path`] with them.
///
/// `values_at` returns `None` when any segment along the path is absent,
/// which excludes the key from ranking for that item. A scalar value
/// resolves to a one-element vector; a multi-valued field resolves to one
/// entry per value.
pub trait PathExtract {
    /// Resolve the values at `path`, or `None` when the path is absent.
    fn values_at(&self, path: &str) -> Option<Vec<String>>;
}

/// Extract all string values from an item for a given key.
///
/// Calls the key's extractor and returns the resulting values. An empty
/// vector means the item produces no match candidates for this key.
///
/// # Examples
///
/// ```
/// use casematch::{Key, get_item_values};
///
/// let key = Key::new(|s: &String| vec![s.clone()]);
/// let values = get_item_values(&"hello".to_owned(), &key);
/// assert_eq!(values, vec!["hello"]);
/// ```
pub fn get_item_values<T>(item: &T, key: &Key<T>) -> Vec<String> {
    key.extract(item)
}

/// Evaluate all keys for a single item and return the best ranking.
///
/// Flattens all keys' extracted values into a single indexed sequence
/// preserving key order. Each value is scored, then adjusted by the
/// owning key's ranking bounds, and the best-ranked value wins. When two
/// values produce an equal rank, the one appearing earlier in the
/// flattened sequence wins (replacement requires a strictly greater
/// rank).
///
/// # Bound rules
///
/// - A rank below the key's `min_ranking` that is still at least
///   [`Ranking::Matches`] is promoted **up** to `min_ranking`. A genuine
///   [`Ranking::NoMatch`] is never promoted.
/// - Otherwise, a rank above the key's `max_ranking` is clamped **down**
///   to `max_ranking`.
///
/// # Examples
///
/// ```
/// use casematch::{Key, MatchOptions, Ranking, get_highest_ranking};
///
/// let keys = vec![Key::new(|s: &String| vec![s.clone()])];
/// let opts = MatchOptions::default();
/// let info = get_highest_ranking(&"hello".to_owned(), &keys, "hello", &opts);
/// assert_eq!(info.rank, Ranking::CaseSensitiveEqual);
/// ```
pub fn get_highest_ranking<T>(
    item: &T,
    keys: &[Key<T>],
    query: &str,
    options: &MatchOptions<T>,
) -> RankingInfo {
    let pq = PreparedQuery::new(query, options.keep_diacritics);
    let finder = if pq.lower.is_empty() {
        None
    } else {
        Some(memchr::memmem::Finder::new(pq.lower.as_bytes()))
    };
    let mut buf = String::new();
    get_highest_ranking_prepared(
        item,
        keys,
        &pq,
        options.keep_diacritics,
        &mut buf,
        finder.as_ref(),
    )
}

/// Hot-path variant of [`get_highest_ranking`] reusing prepared query
/// data and a lowercase buffer across the per-item loop.
pub(crate) fn get_highest_ranking_prepared<T>(
    item: &T,
    keys: &[Key<T>],
    pq: &PreparedQuery,
    keep_diacritics: bool,
    candidate_buf: &mut String,
    finder: Option<&memchr::memmem::Finder<'_>>,
) -> RankingInfo {
    let mut best = RankingInfo {
        rank: Ranking::NoMatch.into(),
        ranked_value: String::new(),
        key_index: 0,
        key_threshold: None,
    };

    // The index counter runs across all values from all keys, preserving
    // the order in which keys (and their values) appear.
    let mut key_index: usize = 0;

    for key in keys {
        for value in key.extract(item) {
            let mut rank =
                get_match_ranking_prepared(&value, pq, keep_diacritics, candidate_buf, finder);

            // Promote weak-but-real matches up to the key floor; NoMatch
            // stays NoMatch. A promoted rank is not re-checked against the
            // ceiling.
            if rank < key.min_ranking && rank >= Ranking::Matches {
                rank = key.min_ranking;
            } else if rank > key.max_ranking {
                rank = key.max_ranking;
            }

            // Strictly-greater replacement: the first value to reach a
            // given rank keeps the lowest index for it.
            if rank > best.rank {
                best = RankingInfo {
                    rank,
                    ranked_value: value,
                    key_index,
                    key_threshold: key.threshold,
                };
            }

            key_index += 1;
        }
    }

    best
}

/// Boxed extractor stored inside a [`Key`]: given an item, produce the
/// values to rank against the query.
type Extractor<T> = Box<dyn Fn(&T) -> Vec<String>>;

/// A single key specification for extracting matchable string values from
/// an item.
///
/// Keys are constructed via [`Key::new`], [`Key::from_fn`],
/// [`Key::from_fn_multi`], or [`Key::path`], then optionally refined with
/// the builder methods ([`threshold`](Key::threshold),
/// [`min_ranking`](Key::min_ranking), [`max_ranking`](Key::max_ranking)).
///
/// # Examples
///
/// ```
/// use casematch::{Key, Ranking};
///
/// struct User { name: String, email: String }
///
/// // Simple single-value key
/// let key = Key::new(|u: &User| vec![u.name.clone()]);
///
/// // Key with per-key ranking attributes
/// let key = Key::new(|u: &User| vec![u.email.clone()])
///     .threshold(Ranking::StartsWith)
///     .max_ranking(Ranking::Contains);
///
/// // Convenience constructor for a single borrowed value
/// let key = Key::<User>::from_fn(|u| u.name.as_str());
/// ```
pub struct Key<T> {
    extractor: Extractor<T>,

    /// Per-key threshold override. When `None`, the global threshold
    /// applies.
    pub(crate) threshold: Option<Rank>,

    /// Floor for non-`NoMatch` ranks produced by this key. Defaults to
    /// [`Rank::MIN`] (no boosting).
    pub(crate) min_ranking: Rank,

    /// Ceiling for ranks produced by this key. Defaults to [`Rank::MAX`]
    /// (no clamping).
    pub(crate) max_ranking: Rank,
}

impl<T> Key<T> {
    /// Create a key from a closure that returns zero or more owned strings.
    ///
    /// This is the most general constructor. For single-value extraction
    /// consider [`Key::from_fn`]; for multi-value borrowed extraction,
    /// [`Key::from_fn_multi`].
    pub fn new<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + 'static,
    {
        Self {
            extractor: Box::new(extractor),
            threshold: None,
            min_ranking: Rank::MIN,
            max_ranking: Rank::MAX,
        }
    }

    /// Create a key from a closure that returns a single borrowed `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use casematch::Key;
    ///
    /// struct User { name: String }
    ///
    /// let key = Key::<User>::from_fn(|u| u.name.as_str());
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> &str + 'static,
    {
        Self::new(move |item| vec![f(item).to_owned()])
    }

    /// Create a key from a closure that returns multiple borrowed `&str`
    /// values, e.g. a tags array.
    ///
    /// # Examples
    ///
    /// ```
    /// use casematch::Key;
    ///
    /// struct Article { tags: Vec<String> }
    ///
    /// let key = Key::<Article>::from_fn_multi(|a| {
    ///     a.tags.iter().map(|t| t.as_str()).collect()
    /// });
    /// ```
    pub fn from_fn_multi<F>(f: F) -> Self
    where
        F: Fn(&T) -> Vec<&str> + 'static,
    {
        Self::new(move |item| f(item).into_iter().map(str::to_owned).collect())
    }

    /// Set a per-key threshold override.
    ///
    /// When set, this key's matches must reach this rank for the item to
    /// be included when this key wins; when unset, the global
    /// [`MatchOptions::threshold`] applies.
    #[must_use]
    pub fn threshold(mut self, rank: impl Into<Rank>) -> Self {
        self.threshold = Some(rank.into());
        self
    }

    /// Set the minimum rank this key can contribute.
    ///
    /// Results at or above [`Ranking::Matches`] are promoted up to at
    /// least this rank. A `NoMatch` result is never promoted.
    ///
    /// Defaults to [`Rank::MIN`] (no boosting).
    #[must_use]
    pub fn min_ranking(mut self, rank: impl Into<Rank>) -> Self {
        self.min_ranking = rank.into();
        self
    }

    /// Set the maximum rank this key can contribute.
    ///
    /// For example, a `max_ranking` of [`Ranking::Contains`] means a
    /// match on this key never outranks a `Contains` match on another.
    ///
    /// Defaults to [`Rank::MAX`] (no clamping).
    #[must_use]
    pub fn max_ranking(mut self, rank: impl Into<Rank>) -> Self {
        self.max_ranking = rank.into();
        self
    }

    /// Extract string values from an item using this key's extractor.
    pub fn extract(&self, item: &T) -> Vec<String> {
        (self.extractor)(item)
    }

    /// The per-key threshold override, if set.
    pub fn threshold_value(&self) -> Option<Rank> {
        self.threshold
    }

    /// The minimum rank this key can contribute.
    pub fn min_ranking_value(&self) -> Rank {
        self.min_ranking
    }

    /// The maximum rank this key can contribute.
    pub fn max_ranking_value(&self) -> Rank {
        self.max_ranking
    }
}

impl<T: PathExtract> Key<T> {
    /// Create a key that resolves a dot-separated field path through
    /// [`PathExtract`].
    ///
    /// Items for which the path is absent contribute no values for this
    /// key (they are excluded from ranking on it, not an error).
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "json")] {
    /// use casematch::Key;
    /// use serde_json::{Value, json};
    ///
    /// let item = json!({"author": {"name": "Ada"}});
    /// let key = Key::<Value>::path("author.name");
    /// assert_eq!(key.extract(&item), vec!["Ada"]);
    /// # }
    /// ```
    pub fn path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(move |item: &T| item.values_at(&path).unwrap_or_default())
    }
}

/// The result of ranking a single item against a query across all keys.
///
/// Captures which key and value produced the best match, the resulting
/// rank, and the winning key's threshold override (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct RankingInfo {
    /// The rank of the best-matching key/value combination.
    pub rank: Rank,

    /// The string value that produced the best match.
    pub ranked_value: String,

    /// Index of the winning value in the flattened key-values sequence.
    pub key_index: usize,

    /// Threshold override from the winning key, or `None` if the key
    /// uses the global threshold.
    pub key_threshold: Option<Rank>,
}
