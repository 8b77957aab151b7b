//! Generic "greater of two" functions.
//!
//! All of them are total: when neither argument is strictly greater, the
//! first argument is returned. That covers equal values as well as pairs
//! `PartialOrd` cannot order, such as `NaN` or a number against text.

use std::cmp::Ordering;

use crate::error::{Result, TemplateError};

/// Returns whichever of `a` and `b` is greater, preferring `a` on a tie.
///
/// The result borrows from the argument it selected.
///
/// ```
/// use generic_templates::maximum;
///
/// assert_eq!(*maximum(&11, &13), 13);
/// assert_eq!(*maximum(&10.56, &14.32), 14.32);
/// assert_eq!(maximum("C++", "Application"), "C++");
/// ```
pub fn maximum<'a, T: PartialOrd + ?Sized>(a: &'a T, b: &'a T) -> &'a T {
    if a > b {
        a
    } else if b > a {
        b
    } else {
        a
    }
}

/// Like [`maximum`], ordering with `compare` instead of `PartialOrd`.
pub fn maximum_by<'a, T: ?Sized, F>(a: &'a T, b: &'a T, compare: F) -> &'a T
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match compare(a, b) {
        Ordering::Less => b,
        Ordering::Equal | Ordering::Greater => a,
    }
}

/// Like [`maximum`], comparing the keys `key` derives from each argument.
pub fn maximum_by_key<'a, T: ?Sized, K, F>(a: &'a T, b: &'a T, mut key: F) -> &'a T
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let (ka, kb) = (key(a), key(b));
    if kb > ka {
        b
    } else {
        a
    }
}

/// Folds [`maximum`] over `items`, so the earliest maximal element wins.
pub fn maximum_of<'a, T, I>(items: I) -> Result<&'a T>
where
    T: PartialOrd + 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .reduce(|best, next| maximum(best, next))
        .ok_or(TemplateError::EmptyContainer)
}
