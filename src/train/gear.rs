// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gears and the pool of gears available to the search.
//!
//! # Examples
//!
//! ```
//! use change_gears::train::{Gear, GearPool};
//!
//! let pool = GearPool::from_lists(&["20, 25,30", "", "abc,40,,0"]);
//! assert_eq!(pool.len(), 4);
//! assert_eq!(pool.get(3), Some(Gear::new(40)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A change gear, identified only by its tooth count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Gear(u32);

impl Gear {
    /// Create a gear with the given number of teeth.
    ///
    /// # Panics
    ///
    /// Panics if `teeth` is zero.
    pub fn new(teeth: u32) -> Self {
        assert!(teeth > 0, "A gear must have at least one tooth");
        Self(teeth)
    }

    /// Number of teeth.
    pub const fn teeth(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default first gear list of a mini-lathe change-gear set.
pub const DEFAULT_GEAR_LIST_1: &str = "20,20,20,21,25,30,35,40,40,45,45";

/// Default second gear list of a mini-lathe change-gear set.
pub const DEFAULT_GEAR_LIST_2: &str = "48,50,50,54,55,57,60,60,65,72,80,80";

/// The gears available for building trains.
///
/// Semantically a multiset, but order is kept: the search enumerates pool
/// positions, and two equal gears at different positions are different
/// physical gears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GearPool {
    gears: Vec<Gear>,
}

impl GearPool {
    pub fn new(gears: Vec<Gear>) -> Self {
        Self { gears }
    }

    /// Build a pool from raw tooth counts, skipping zeros.
    pub fn from_teeth(teeth: &[u32]) -> Self {
        Self::new(teeth.iter().filter(|&&t| t > 0).map(|&t| Gear::new(t)).collect())
    }

    /// Parse one comma-separated gear list.
    ///
    /// Whitespace is ignored anywhere in the text. Entries that are not
    /// positive integers are dropped rather than reported.
    pub fn parse_list(text: &str) -> Vec<Gear> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        compact
            .split(',')
            .filter_map(|entry| entry.parse::<u32>().ok())
            .filter(|&teeth| teeth > 0)
            .map(Gear::new)
            .collect()
    }

    /// Concatenate several comma-separated lists, in order.
    pub fn from_lists<S: AsRef<str>>(lists: &[S]) -> Self {
        Self::new(
            lists
                .iter()
                .flat_map(|list| Self::parse_list(list.as_ref()))
                .collect(),
        )
    }

    /// Pool made of the two default gear lists.
    pub fn standard() -> Self {
        Self::from_lists(&[DEFAULT_GEAR_LIST_1, DEFAULT_GEAR_LIST_2])
    }

    pub fn len(&self) -> usize {
        self.gears.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    /// Gear at a pool position.
    pub fn get(&self, position: usize) -> Option<Gear> {
        self.gears.get(position).copied()
    }

    pub fn as_slice(&self) -> &[Gear] {
        &self.gears
    }

    pub fn iter(&self) -> impl Iterator<Item = Gear> + '_ {
        self.gears.iter().copied()
    }
}

impl From<Vec<Gear>> for GearPool {
    fn from(gears: Vec<Gear>) -> Self {
        Self::new(gears)
    }
}
