//! Optional boolean
//!
//! The text hook accepts only the unquoted tokens `1`, `true`, `0` and
//! `false`. `set` takes anything implementing [`Truthy`] and stores its
//! truthiness.

use crate::codec::TextCodec;
use crate::element::Element;
use crate::text;
use crate::Optional;
use serde::de::{Deserialize, Deserializer};
use serde::{Serialize, Serializer};

/// Values `Bool::set` can coerce
///
/// Falsy: `false`, zero of any numeric width (including `-0.0`), `'\0'`,
/// the empty string and `None`. Everything else is truthy, NaN included.
pub trait Truthy {
    /// Coerced boolean
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    fn truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

/// Optional form of `bool`
///
/// Has no binary hook: every deserializer gets the lenient text policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool {
    value: bool,
    valid: bool,
}

impl Bool {
    /// Create a new optional from a value-flag pair
    pub const fn new(value: bool, ok: bool) -> Self {
        Self { value, valid: ok }
    }

    /// Returns true if the value is valid
    pub fn ok(&self) -> bool {
        self.valid
    }

    /// Value-flag pair
    pub fn get(&self) -> (bool, bool) {
        (self.value, self.valid)
    }

    /// The value as 1 or 0, with the flag unchanged
    pub fn get_int(&self) -> (i64, bool) {
        (i64::from(self.value), self.valid)
    }

    /// Store the truthiness of `value`; `ok` is stored as given.
    pub fn set<V: Truthy>(&mut self, value: V, ok: bool) {
        self.value = value.truthy();
        self.valid = ok;
    }

    /// `Some(value)` when valid
    pub fn into_option(self) -> Option<bool> {
        self.valid.then_some(self.value)
    }
}

impl Optional for Bool {
    fn ok(&self) -> bool {
        self.valid
    }
}

impl From<Option<bool>> for Bool {
    fn from(v: Option<bool>) -> Self {
        match v {
            Some(v) => Bool::new(v, true),
            None => Bool::default(),
        }
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            serializer.serialize_bool(self.value)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let element = Element::capture(deserializer)?;
        Ok(Bool::from(text::decode::<bool>(element)))
    }
}

impl TextCodec for Bool {}
