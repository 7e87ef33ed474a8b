//! [`BitView`]: an unsigned integer addressed bit by bit.
//!
//! Bits are addressed 1-based and MSB-first: position `1` is the most
//! significant bit, position `WIDTH` the least significant. Positions outside
//! `1..=WIDTH` never panic. Reads report them as unset and writes ignore them.

use core::fmt;

use crate::{bits::Bits, word::Word};

/// A fixed-width unsigned integer viewed as a sequence of bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BitView<T: Word> {
    value: T,
}

/// An 8-bit [`BitView`].
pub type BitView8 = BitView<u8>;
/// A 16-bit [`BitView`].
pub type BitView16 = BitView<u16>;
/// A 32-bit [`BitView`].
pub type BitView32 = BitView<u32>;
/// A 64-bit [`BitView`].
pub type BitView64 = BitView<u64>;

impl<T: Word> BitView<T> {
    /// Number of addressable bit positions.
    pub const WIDTH: u32 = T::BITS;

    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Number of addressable bit positions, same as [`Self::WIDTH`].
    pub const fn width(&self) -> u32 {
        T::BITS
    }

    /// Returns the underlying integer.
    pub fn get_value(&self) -> T {
        self.value
    }

    pub fn and(&self, other: T) -> T {
        self.value & other
    }

    pub fn and_not(&self, other: T) -> T {
        self.value & !other
    }

    pub fn or(&self, other: T) -> T {
        self.value | other
    }

    pub fn or_not(&self, other: T) -> T {
        self.value | !other
    }

    pub fn xor(&self, other: T) -> T {
        self.value ^ other
    }

    /// Reports whether the bit at `bit` is set.
    ///
    /// `bit` is 1-based, with 1 being the most significant bit and
    /// [`Self::WIDTH`] the least significant. Positions outside that range
    /// are never set.
    pub fn is_set(&self, bit: u32) -> bool {
        self.value.bit_at(bit) == T::one()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.value.count_ones()
    }

    /// Iterates over every bit as `(position, bit)`, from position 1 (MSB) to
    /// [`Self::WIDTH`] (LSB).
    ///
    /// The iterator owns a copy of the value, so later mutations of `self`
    /// are not observed by it.
    pub fn bits(&self) -> Bits<T> {
        Bits::new(self.value)
    }

    /// Sets the bit at `bit` to 1.
    ///
    /// `bit` is 1-based and MSB-first. Positions outside `1..=WIDTH` are
    /// ignored.
    pub fn set_bit(&mut self, bit: u32) {
        let mask = T::mask_at(bit);
        if mask.is_zero() {
            log::debug!("set_bit: position {} outside 1..={}, ignored", bit, T::BITS);
            return;
        }

        self.value = self.value | mask;
        log::trace!("set_bit({}): now [{}]", bit, Padded(self.value));
    }

    /// Clears the bit at `bit` to 0.
    ///
    /// `bit` is 1-based and MSB-first. Positions outside `1..=WIDTH` are
    /// ignored.
    pub fn unset_bit(&mut self, bit: u32) {
        let mask = T::mask_at(bit);
        if mask.is_zero() {
            log::debug!("unset_bit: position {} outside 1..={}, ignored", bit, T::BITS);
            return;
        }

        self.value = self.value & !mask;
        log::trace!("unset_bit({}): now [{}]", bit, Padded(self.value));
    }

    /// `self = self & other`
    pub fn and_assign(&mut self, other: T) {
        log::trace!("and_assign: got [{}]", Padded(other));
        self.value = self.value & other;
    }

    /// `self = self & !other`
    pub fn and_not_assign(&mut self, other: T) {
        log::trace!("and_not_assign: got [{}]", Padded(other));
        self.value = self.value & !other;
    }

    /// `self = self | other`
    pub fn or_assign(&mut self, other: T) {
        log::trace!("or_assign: got [{}]", Padded(other));
        self.value = self.value | other;
    }
}

impl<T: Word> From<T> for BitView<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_from_bit_view {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<BitView<$ty>> for $ty {
                fn from(view: BitView<$ty>) -> Self {
                    view.value
                }
            }
        )*
    };
}

impl_from_bit_view!(u8, u16, u32, u64);

/// Zero-padded binary rendering at the word's full width.
struct Padded<T: Word>(T);

impl<T: Word> fmt::Display for Padded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = T::BITS as usize)
    }
}

impl<T: Word> fmt::Debug for BitView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitView{}(0b{})", T::BITS, Padded(self.value))
    }
}

impl<T: Word> fmt::Display for BitView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: Word> fmt::Binary for BitView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.value, f)
    }
}

impl<T: Word> fmt::LowerHex for BitView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl<T: Word> fmt::UpperHex for BitView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}
