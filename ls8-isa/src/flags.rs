//! The FL flags register

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Flags register, layout `00000LGE`
///
/// CMP writes exactly one of L/G/E; the five high bits stay zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags(u8);

impl Flags {
    /// Less-than bit
    pub const L: u8 = 0b100;
    /// Greater-than bit
    pub const G: u8 = 0b010;
    /// Equal bit
    pub const E: u8 = 0b001;

    /// All bits clear (reset state)
    pub const CLEAR: Self = Self(0);

    /// Flags for a comparison of the first operand against the second
    #[inline]
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self(Self::L),
            Ordering::Greater => Self(Self::G),
            Ordering::Equal => Self(Self::E),
        }
    }

    #[inline]
    pub fn less(self) -> bool {
        self.0 & Self::L != 0
    }

    #[inline]
    pub fn greater(self) -> bool {
        self.0 & Self::G != 0
    }

    #[inline]
    pub fn equal(self) -> bool {
        self.0 & Self::E != 0
    }

    /// Raw register byte
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}
