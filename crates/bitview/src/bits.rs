//! Iterator over the bit positions of a [`crate::BitView`].

use core::iter::FusedIterator;

use crate::word::Word;

/// Iterator over `(position, bit)` pairs of a word, MSB first.
///
/// Positions run from `1` to `T::BITS`. Each bit is yielded as `T::zero()` or
/// `T::one()`. Returned by [`BitView::bits`](crate::BitView::bits).
#[derive(Debug, Clone)]
pub struct Bits<T: Word> {
    value: T,
    /// Next position yielded from the front.
    front: u32,
    /// One past the last position still to be yielded from the back.
    back: u32,
}

impl<T: Word> Bits<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            front: 1,
            back: T::BITS + 1,
        }
    }
}

impl<T: Word> Iterator for Bits<T> {
    type Item = (u32, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let position = self.front;
        self.front += 1;

        Some((position, self.value.bit_at(position)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T: Word> DoubleEndedIterator for Bits<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;

        Some((self.back, self.value.bit_at(self.back)))
    }
}

impl<T: Word> ExactSizeIterator for Bits<T> {
    fn len(&self) -> usize {
        (self.back - self.front) as usize
    }
}

impl<T: Word> FusedIterator for Bits<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_msb_first() {
        let bits: Vec<(u32, u8)> = Bits::new(0b1010_0001u8).collect();
        assert_eq!(
            bits,
            vec![
                (1, 1),
                (2, 0),
                (3, 1),
                (4, 0),
                (5, 0),
                (6, 0),
                (7, 0),
                (8, 1)
            ]
        );
    }

    #[test]
    fn test_bits_len() {
        assert_eq!(Bits::new(0u8).len(), 8);
        assert_eq!(Bits::new(0u16).len(), 16);
        assert_eq!(Bits::new(0u32).len(), 32);
        assert_eq!(Bits::new(0u64).len(), 64);
    }

    #[test]
    fn test_bits_stop_early() {
        let mut bits = Bits::new(u16::MAX);
        assert_eq!(bits.next(), Some((1, 1)));
        assert_eq!(bits.next(), Some((2, 1)));
        assert_eq!(bits.len(), 14);
    }

    #[test]
    fn test_bits_rev() {
        let positions: Vec<u32> = Bits::new(0u8).rev().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_bits_meet_in_middle() {
        let mut bits = Bits::new(0b1000_0001u8);
        assert_eq!(bits.next_back(), Some((8, 1)));
        assert_eq!(bits.next(), Some((1, 1)));
        assert_eq!(bits.by_ref().count(), 6);
        assert_eq!(bits.next(), None);
        assert_eq!(bits.next_back(), None);
    }
}
