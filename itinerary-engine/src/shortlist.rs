//! Shortlist ordering and removal.
//!
//! A shortlist is the ordered list of candidates (hotels, routes,
//! offers) presented to a customer. This module reorders and prunes
//! shortlists without ever touching the caller's list: every operation
//! returns a new one.
//!
//! Candidates are opaque to the engine. Each ranking reads exactly one
//! capability (such as a price or a rating) expressed as a narrow
//! trait, so any candidate type can opt in to the rankings that make
//! sense for it.

use std::cmp::Ordering;

/// A candidate with a price.
pub trait HasPrice {
    fn price(&self) -> f64;
}

/// A candidate with a customer rating.
pub trait HasRating {
    fn rating(&self) -> f64;
}

/// A candidate with a search relevance.
pub trait HasRelevance {
    fn relevance(&self) -> f64;
}

/// Errors from shortlist operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShortlistError {
    /// Removal index outside the shortlist
    #[error("index {index} out of bounds for shortlist of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Value ranking divides rating by price, so the price must be a
    /// positive number
    #[error("cannot rank by value: price must be positive, got {price}")]
    NonPositivePrice { price: f64 },
}

/// A new shortlist holding the same candidates in `ordering` order.
///
/// The sort is stable: candidates the ordering considers equal keep
/// their relative input order. The input is untouched.
///
/// # Examples
///
/// ```
/// use itinerary_engine::shortlist::{by_rating, sorted_by, HasRating};
///
/// #[derive(Clone)]
/// struct Hotel {
///     name: &'static str,
///     rating: f64,
/// }
///
/// impl HasRating for Hotel {
///     fn rating(&self) -> f64 {
///         self.rating
///     }
/// }
///
/// let hotels = vec![
///     Hotel { name: "Grand", rating: 3.5 },
///     Hotel { name: "Royal", rating: 4.8 },
/// ];
///
/// let ranked = sorted_by(&hotels, by_rating());
/// assert_eq!(ranked[0].name, "Royal");
/// ```
pub fn sorted_by<T, F>(shortlist: &[T], ordering: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = shortlist.to_vec();
    result.sort_by(ordering);
    result
}

/// A new shortlist without the candidate at `index`.
///
/// All other candidates keep their relative order; the input is
/// untouched.
///
/// # Errors
///
/// Returns [`ShortlistError::IndexOutOfBounds`] if `index` is not a
/// position in the shortlist. An out-of-range removal is a caller bug
/// and is never clamped.
pub fn without_item_at<T: Clone>(shortlist: &[T], index: usize) -> Result<Vec<T>, ShortlistError> {
    if index >= shortlist.len() {
        return Err(ShortlistError::IndexOutOfBounds {
            index,
            len: shortlist.len(),
        });
    }

    let mut result = Vec::with_capacity(shortlist.len() - 1);
    result.extend_from_slice(&shortlist[..index]);
    result.extend_from_slice(&shortlist[index + 1..]);
    Ok(result)
}

/// Ordering by rating, highest first.
pub fn by_rating<T: HasRating>() -> impl Fn(&T, &T) -> Ordering {
    |a, b| b.rating().total_cmp(&a.rating())
}

/// Ordering by price, lowest first.
pub fn by_price_low_to_high<T: HasPrice>() -> impl Fn(&T, &T) -> Ordering {
    |a, b| a.price().total_cmp(&b.price())
}

/// Ordering by relevance, highest first.
pub fn by_relevance<T: HasRelevance>() -> impl Fn(&T, &T) -> Ordering {
    |a, b| b.relevance().total_cmp(&a.relevance())
}

/// A candidate's value for money: rating per unit of price.
///
/// # Errors
///
/// Returns [`ShortlistError::NonPositivePrice`] unless the price is a
/// positive number; the division is undefined otherwise.
pub fn value_ratio<T: HasPrice + HasRating>(candidate: &T) -> Result<f64, ShortlistError> {
    let price = candidate.price();
    // Not `price <= 0.0`: a NaN price must fail validation too
    if !(price > 0.0) {
        return Err(ShortlistError::NonPositivePrice { price });
    }
    Ok(candidate.rating() / price)
}

/// A new shortlist ordered by value for money, best first.
///
/// Every candidate's price is validated before any comparison, so a
/// single non-positive price fails the whole call rather than
/// producing a meaningless order. The sort is stable; the input is
/// untouched.
///
/// # Errors
///
/// Returns [`ShortlistError::NonPositivePrice`] if any candidate's
/// price is not a positive number.
pub fn sorted_by_value<T>(shortlist: &[T]) -> Result<Vec<T>, ShortlistError>
where
    T: Clone + HasPrice + HasRating,
{
    let mut keyed = Vec::with_capacity(shortlist.len());
    for candidate in shortlist {
        keyed.push((value_ratio(candidate)?, candidate));
    }

    // Stable sort on the precomputed ratio, best value first
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

    Ok(keyed.into_iter().map(|(_, candidate)| candidate.clone()).collect())
}
