//! Optional `serde` support.
//!
//! A [`BitView`] is serialized as its raw integer and nothing else, so
//! `BitView8::new(5)` and `5u8` have the same representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BitView, word::Word};

impl<T> Serialize for BitView<T>
where
    T: Word + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get_value().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for BitView<T>
where
    T: Word + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(BitView::new)
    }
}
