//! Optional 64-bit float

use crate::codec::TextCodec;
use crate::element::Element;
use crate::text;
use crate::Optional;
use serde::de::{Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// Optional form of `f64`
///
/// Any JSON number decodes, integers included. serde_json writes `null`
/// for NaN and the infinities, so those values do not survive a text round
/// trip as valid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Float64 {
    value: f64,
    valid: bool,
}

impl Float64 {
    /// Create a new optional from a value-flag pair
    pub const fn new(value: f64, ok: bool) -> Self {
        Self { value, valid: ok }
    }

    /// Returns true if the value is valid
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// Value-flag pair
    pub fn get(&self) -> (f64, bool) {
        (self.value, self.valid)
    }

    /// Overwrite both value and flag
    pub fn set(&mut self, value: f64, ok: bool) {
        self.value = value;
        self.valid = ok;
    }

    /// `Some(value)` when valid
    pub fn into_option(self) -> Option<f64> {
        self.valid.then_some(self.value)
    }
}

impl Optional for Float64 {
    fn ok(&self) -> bool {
        self.valid
    }
}

impl From<Option<f64>> for Float64 {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Float64::new(v, true),
            None => Float64::default(),
        }
    }
}

impl Serialize for Float64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_f64(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let element = Element::capture(deserializer)?;
        Ok(Float64::from(text::decode::<f64>(element)))
    }
}

impl TextCodec for Float64 {}
