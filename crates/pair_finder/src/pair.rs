// Copyright (c) 2023 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// Two positions in a sequence whose values add up to a target.
///
/// `first` is always strictly less than `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub(crate) fn new(first: usize, second: usize) -> Self {
        debug_assert!(first < second);
        Self { first, second }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

impl From<Pair> for [usize; 2] {
    fn from(pair: Pair) -> Self {
        [pair.first, pair.second]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no two of the {len} values sum to {target}")]
pub struct PairNotFound {
    pub len: usize,
    pub target: String,
}
