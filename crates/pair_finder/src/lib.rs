// Copyright (c) 2023 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find two positions in a sequence whose values add up to a target.

mod pair;

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::CheckedSub;

pub use pair::{Pair, PairNotFound};

/// Returned by [`find_pair_or_sentinel`] when no pair exists.
pub const NOT_FOUND: (isize, isize) = (-1, -1);

/// Scans `values` once from left to right and returns the first pair
/// `(i, j)`, `i < j`, with `values[i] + values[j] == target`.
///
/// The pair has the smallest possible `j`, and for that `j` the smallest
/// possible `i`. A single element never pairs with itself, but two equal
/// elements do when the target is twice their value.
///
/// ```
/// use pair_finder::{find_pair, Pair};
///
/// assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some(Pair { first: 0, second: 1 }));
/// assert_eq!(find_pair(&[1, 2, 3], 100), None);
/// ```
pub fn find_pair<T>(values: &[T], target: T) -> Option<Pair>
where
    T: Copy + Eq + Hash + CheckedSub,
{
    // value -> index of its first occurrence
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        // an unrepresentable complement cannot equal any element
        if let Some(complement) = target.checked_sub(&value) {
            if let Some(&first) = seen.get(&complement) {
                trace!("values at {} and {} complete the target", first, index);
                return Some(Pair::new(first, index));
            }
        }
        seen.entry(value).or_insert(index);
    }

    debug!("no pair among {} values", values.len());
    None
}

/// Same search as [`find_pair`], reporting absence as [`NOT_FOUND`].
pub fn find_pair_or_sentinel<T>(values: &[T], target: T) -> (isize, isize)
where
    T: Copy + Eq + Hash + CheckedSub,
{
    // slice lengths never exceed isize::MAX, so the casts are lossless
    find_pair(values, target).map_or(NOT_FOUND, |pair| {
        (pair.first as isize, pair.second as isize)
    })
}

/// Same search as [`find_pair`], for callers propagating absence with `?`.
pub fn require_pair<T>(values: &[T], target: T) -> Result<Pair, PairNotFound>
where
    T: Copy + Eq + Hash + CheckedSub + Display,
{
    find_pair(values, target).ok_or_else(|| PairNotFound {
        len: values.len(),
        target: target.to_string(),
    })
}
