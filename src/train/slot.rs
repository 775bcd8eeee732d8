// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Slot positions in a change-gear train.
//!
//! A train is read from the spindle side: A drives, B and C share the stud
//! as a compound pair, D sits on the leadscrew. A two-gear train leaves B and
//! C empty and A meshes with D through any idler.

use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the four positions a gear can occupy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro, EnumIter,
)]
#[repr(u8)]
pub enum Slot {
    A,
    B,
    C,
    D,
}

impl Slot {
    /// Index of this slot in a `[_; SLOT_COUNT]` array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slots used by a two-gear train, in enumeration order.
    pub const TWO_GEAR: [Slot; 2] = [Slot::A, Slot::D];

    /// Slots used by a four-gear train, in enumeration order.
    pub const FOUR_GEAR: [Slot; 4] = [Slot::A, Slot::B, Slot::C, Slot::D];

    pub fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
