//! Enables serde serialization support for [`IdSet`]
//!
//! The set travels as its range-notation string (ranged, no brackets), so
//! `{1, 2, 3, 7}` serializes to `"1-3,7"` and anything [`IdSet::decode`]
//! accepts deserializes.

use core::fmt::{self, Formatter};

use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{EncodeOptions, IdSet};

struct IdSetVisitor;

impl<'de> Visitor<'de> for IdSetVisitor {
    type Value = IdSet;
    #[inline]
    fn expecting(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("a range-notation id set string")
    }
    #[inline]
    fn visit_str<E: serde::de::Error>(self, notation: &str) -> Result<Self::Value, E> {
        IdSet::decode(notation).map_err(E::custom)
    }
}
impl<'de> Deserialize<'de> for IdSet {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(IdSetVisitor)
    }
}
impl Serialize for IdSet {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode(EncodeOptions {
            brackets: false,
            range: true,
        }))
    }
}
