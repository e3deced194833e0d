//! Optional 32-bit integer

use crate::codec::TextCodec;
use crate::element::Element;
use crate::text;
use crate::Optional;
use serde::de::{Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// Optional form of `i32`
///
/// Has no binary hook: every deserializer gets the lenient text policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Int {
    value: i32,
    valid: bool,
}

impl Int {
    /// Create a new optional from a value-flag pair
    pub const fn new(value: i32, ok: bool) -> Self {
        Self { value, valid: ok }
    }

    /// Returns true if the value is valid
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// Value-flag pair
    pub fn get(&self) -> (i32, bool) {
        (self.value, self.valid)
    }

    /// Overwrite both value and flag
    pub fn set(&mut self, value: i32, ok: bool) {
        self.value = value;
        self.valid = ok;
    }

    /// `Some(value)` when valid
    pub fn into_option(self) -> Option<i32> {
        self.valid.then_some(self.value)
    }
}

impl Optional for Int {
    fn ok(&self) -> bool {
        self.valid
    }
}

impl From<Option<i32>> for Int {
    fn from(v: Option<i32>) -> Self {
        match v {
            Some(v) => Int::new(v, true),
            None => Int::default(),
        }
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_i32(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let element = Element::capture(deserializer)?;
        Ok(Int::from(text::decode::<i32>(element)))
    }
}

impl TextCodec for Int {}
