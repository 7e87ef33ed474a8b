//! Re-exports of the commonly used items.

pub use crate::{BitView, BitView8, BitView16, BitView32, BitView64, Bits, Word};
