//! Optional string
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

/// Optional form of `String`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Str {
    value: String,
    valid: bool,
}

impl Str {
    /// Create a new optional from a value-flag pair
    pub fn new(value: impl Into<String>, ok: bool) -> Self {
        Self {
            value: value.into(),
            valid: ok,
        }
    }

    /// Returns true if the value is valid
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// Value-flag pair, borrowing the value
    pub fn get(&self) -> (&str, bool) {
        (&self.value, self.valid)
    }

    /// Overwrite both value and flag
    pub fn set(&mut self, value: impl Into<String>, ok: bool) {
        self.value = value.into();
        self.valid = ok;
    }

    /// `Some(value)` when valid
    pub fn into_option(self) -> Option<String> {
        self.valid.then_some(self.value)
    }
}

impl Optional for Str {
    fn ok(&self) -> bool {
        self.valid
    }
}

impl From<Option<String>> for Str {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(v) => Str::new(v, true),
            None => Str::default(),
        }
    }
}

impl Serialize for Str {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_str(&self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Str {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let compact = !deserializer.is_human_readable();
        let element = Element::capture(deserializer)?;
        let value: Option<String> = if compact {
            binary::decode(element).map_err(<D::Error as de::Error>::custom)?
        } else {
            text::decode(element)
        };
        Ok(Str::from(value))
    }
}

impl TextCodec for Str {}

#[cfg(feature = "msgpack")]
impl BinaryCodec for Str {
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        match binary::decode_slice::<String>(bytes) {
            Ok(value) => {
                *self = Str::from(value);
                Ok(())
            }
            Err(e) => {
                *self = Str::default();
                Err(e)
            }
        }
    }
}
