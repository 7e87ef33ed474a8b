//! # bitview
//!
//! Fixed-width unsigned integers viewed as sequences of bits.
//!
//! A [`BitView`] wraps a `u8`, `u16`, `u32` or `u64` and addresses its bits
//! 1-based and most-significant-bit first: position `1` is the MSB and
//! position [`BitView::WIDTH`] is the LSB. Single bits can be tested, set and
//! cleared, whole masks combined, and every position walked with
//! [`BitView::bits`].
//!
//! Positions outside `1..=WIDTH` are not errors. [`BitView::is_set`] reports
//! them as unset and [`BitView::set_bit`] / [`BitView::unset_bit`] leave the
//! value untouched. Shift amounts are checked, so this holds on every target.
//!
//! ## Example
//!
//! ```
//! use bitview::prelude::*;
//!
//! let mut flags = BitView8::new(0b0000_0001);
//! assert!(flags.is_set(8));
//!
//! flags.set_bit(1);
//! assert_eq!(flags.get_value(), 0b1000_0001);
//!
//! flags.set_bit(9); // out of range, ignored
//! assert_eq!(flags.get_value(), 0b1000_0001);
//!
//! let set: Vec<u32> = flags
//!     .bits()
//!     .filter(|&(_, bit)| bit == 1)
//!     .map(|(position, _)| position)
//!     .collect();
//! assert_eq!(set, vec![1, 8]);
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize a [`BitView`] as its raw integer.

#![cfg_attr(not(test), no_std)]

pub mod bit_view;
pub mod bits;
pub mod prelude;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod word;

mod sealed {
    pub trait Sealed {}
}

pub use bit_view::{BitView, BitView8, BitView16, BitView32, BitView64};
pub use bits::Bits;
pub use word::Word;
