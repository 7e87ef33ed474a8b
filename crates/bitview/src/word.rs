//! The closed set of unsigned integers a [`crate::BitView`] can wrap.

use core::fmt::{Binary, Debug, Display, LowerHex, UpperHex};
use core::hash::Hash;

use num_traits::{CheckedShl, CheckedShr, PrimInt, Unsigned};

use crate::sealed::Sealed;

/// Unsigned primitive integers usable as the backing word of a
/// [`BitView`](crate::BitView).
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. The trait is sealed.
pub trait Word:
    PrimInt
    + Unsigned
    + CheckedShl
    + CheckedShr
    + Binary
    + LowerHex
    + UpperHex
    + Display
    + Debug
    + Default
    + Hash
    + Sealed
{
    /// Number of bits in the word.
    const BITS: u32;

    /// `self << shift`, or zero when `shift >= Self::BITS`.
    #[inline]
    fn shl_or_zero(self, shift: u32) -> Self {
        CheckedShl::checked_shl(&self, shift).unwrap_or_else(Self::zero)
    }

    /// `self >> shift`, or zero when `shift >= Self::BITS`.
    #[inline]
    fn shr_or_zero(self, shift: u32) -> Self {
        CheckedShr::checked_shr(&self, shift).unwrap_or_else(Self::zero)
    }

    /// Single-bit mask for a 1-based, MSB-first `position`.
    ///
    /// Positions outside `1..=Self::BITS` give an empty mask.
    #[inline]
    fn mask_at(position: u32) -> Self {
        match Self::BITS.checked_sub(position) {
            Some(shift) => Self::one().shl_or_zero(shift),
            None => Self::zero(),
        }
    }

    /// The bit at a 1-based, MSB-first `position` as `0` or `1`.
    ///
    /// Positions outside `1..=Self::BITS` read as `0`.
    #[inline]
    fn bit_at(self, position: u32) -> Self {
        match Self::BITS.checked_sub(position) {
            Some(shift) => self.shr_or_zero(shift) & Self::one(),
            None => Self::zero(),
        }
    }
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
    }

    #[test]
    fn test_shl_or_zero_at_width() {
        assert_eq!(1u8.shl_or_zero(7), 0b1000_0000);
        assert_eq!(1u8.shl_or_zero(8), 0);
        assert_eq!(1u64.shl_or_zero(64), 0);
        assert_eq!(1u64.shl_or_zero(u32::MAX), 0);
    }

    #[test]
    fn test_shr_or_zero_at_width() {
        assert_eq!(0x80u8.shr_or_zero(7), 1);
        assert_eq!(0xffu8.shr_or_zero(8), 0);
        assert_eq!(u32::MAX.shr_or_zero(32), 0);
    }

    #[test]
    fn test_mask_at() {
        assert_eq!(u8::mask_at(1), 0b1000_0000);
        assert_eq!(u8::mask_at(8), 0b0000_0001);
        assert_eq!(u16::mask_at(16), 1);
        assert_eq!(u64::mask_at(1), 1 << 63);
    }

    #[test]
    fn test_mask_at_out_of_range() {
        assert_eq!(u8::mask_at(0), 0);
        assert_eq!(u8::mask_at(9), 0);
        assert_eq!(u16::mask_at(17), 0);
        assert_eq!(u32::mask_at(u32::MAX), 0);
        assert_eq!(u64::mask_at(0), 0);
        assert_eq!(u64::mask_at(65), 0);
    }

    #[test]
    fn test_bit_at() {
        assert_eq!(0b1000_0001u8.bit_at(1), 1);
        assert_eq!(0b1000_0001u8.bit_at(2), 0);
        assert_eq!(0b1000_0001u8.bit_at(8), 1);
        assert_eq!(0xffu8.bit_at(0), 0);
        assert_eq!(0xffu8.bit_at(9), 0);
        assert_eq!(u64::MAX.bit_at(0), 0);
    }
}
