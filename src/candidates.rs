//! A 9-bit candidate set for the values 1..=9, backed by a `u16`.
//!
//! Mirrors the teacher's `ValueSet`: bit `v - 1` records whether `v` is a
//! candidate. All operations are constant-time bit twiddling via `bitset-core`.

use std::iter::FromIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use arrayvec::ArrayVec;
use bitset_core::BitSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet {
    bits: u16,
}

impl CandidateSet {
    pub const fn none() -> Self {
        CandidateSet { bits: 0 }
    }

    pub const fn full() -> Self {
        CandidateSet { bits: 0b1_1111_1111 }
    }

    pub const fn from_bits(bits: u16) -> Self {
        CandidateSet { bits }
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn contains(self, value: u8) -> bool {
        debug_assert!((1..=9).contains(&value));
        self.bits.bit_test(value as usize - 1)
    }

    pub fn insert(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.bits.bit_set(value as usize - 1);
    }

    pub fn remove(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.bits.bit_reset(value as usize - 1);
    }

    pub fn is_subset_of(self, other: CandidateSet) -> bool {
        self.bits.bit_subset(&other.bits)
    }

    /// Panics if not exactly one value is present; callers check `len() == 1` first.
    pub fn single_value(self) -> u8 {
        match self.bits.trailing_zeros() {
            16 => panic!("single_value called on an empty CandidateSet"),
            idx => idx as u8 + 1,
        }
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9u8).filter(move |&v| self.contains(v))
    }

    pub fn values(self) -> ArrayVec<u8, 9> {
        self.iter().collect()
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = CandidateSet::none();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl BitOr for CandidateSet {
    type Output = CandidateSet;
    fn bitor(self, other: Self) -> Self {
        CandidateSet::from_bits(self.bits | other.bits)
    }
}

impl BitOrAssign for CandidateSet {
    fn bitor_assign(&mut self, other: Self) {
        self.bits |= other.bits;
    }
}

impl BitAnd for CandidateSet {
    type Output = CandidateSet;
    fn bitand(self, other: Self) -> Self {
        CandidateSet::from_bits(self.bits & other.bits)
    }
}

impl BitAndAssign for CandidateSet {
    fn bitand_assign(&mut self, other: Self) {
        self.bits &= other.bits;
    }
}

impl Sub for CandidateSet {
    type Output = CandidateSet;
    fn sub(self, other: Self) -> Self {
        CandidateSet::from_bits(self.bits & !other.bits)
    }
}

impl SubAssign for CandidateSet {
    fn sub_assign(&mut self, other: Self) {
        self.bits &= !other.bits;
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.values().into_iter().collect::<Vec<_>>().into_iter()
    }
}
