//! Optional 64-bit integer
//!
//! Decodes leniently from JSON and strictly from MessagePack.

use crate::binary;
#[cfg(feature = "msgpack")]
use crate::codec::BinaryCodec;
use crate::codec::TextCodec;
use crate::element::Element;
#[cfg(feature = "msgpack")]
use crate::error::Result;
use crate::text;
use crate::Optional;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// Optional form of `i64`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Int64 {
    value: i64,
    valid: bool,
}

impl Int64 {
    /// Create a new optional from a value-flag pair
    pub const fn new(value: i64, ok: bool) -> Self {
        Self { value, valid: ok }
    }

    /// Returns true if the value is valid
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// Value-flag pair. The value is meaningless when the flag is false.
    pub fn get(&self) -> (i64, bool) {
        (self.value, self.valid)
    }

    /// Overwrite both value and flag
    pub fn set(&mut self, value: i64, ok: bool) {
        self.value = value;
        self.valid = ok;
    }

    /// `Some(value)` when valid
    pub fn into_option(self) -> Option<i64> {
        self.valid.then_some(self.value)
    }
}

impl Optional for Int64 {
    fn ok(&self) -> bool {
        self.valid
    }
}

impl From<Option<i64>> for Int64 {
    fn from(v: Option<i64>) -> Self {
        match v {
            Some(v) => Int64::new(v, true),
            None => Int64::default(),
        }
    }
}

impl Serialize for Int64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_i64(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Int64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let compact = !deserializer.is_human_readable();
        let element = Element::capture(deserializer)?;
        let value: Option<i64> = if compact {
            binary::decode(element).map_err(<D::Error as de::Error>::custom)?
        } else {
            text::decode(element)
        };
        Ok(Int64::from(value))
    }
}

impl TextCodec for Int64 {}

#[cfg(feature = "msgpack")]
impl BinaryCodec for Int64 {
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        match binary::decode_slice::<i64>(bytes) {
            Ok(value) => {
                *self = Int64::from(value);
                Ok(())
            }
            Err(e) => {
                *self = Int64::default();
                Err(e)
            }
        }
    }
}
