//! Single-element capture shared by both decode policies
//!
//! A hook sees exactly one field's worth of input. [`Element::capture`]
//! pulls that field out of any self-describing serde deserializer and
//! classifies it by [`Tag`]; the text and binary policies then decide what
//! the element means for a given scalar kind.
//!
//! Capture always starts with `deserialize_option`. That routes the
//! format's null (`null` in JSON, `nil` in MessagePack) to `visit_none`,
//! and it is also the one entry point serde's derive answers with
//! `visit_none` when a struct field is missing from the input.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Kind of element found in the input
///
/// Names follow the MessagePack type families, which cover every shape a
/// JSON token can take as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `null` / `nil`
    Nil,
    /// Boolean
    Bool,
    /// Integer, signed or unsigned encoding
    Int,
    /// Floating point
    Float,
    /// UTF-8 string
    Str,
    /// Raw binary. rmp-serde also hands over a `str` whose payload is not
    /// valid UTF-8 as raw bytes, so such strings carry this tag too.
    Bin,
    /// Sequence
    Array,
    /// Key/value map
    Map,
    /// MessagePack extension type
    Ext,
}

impl Tag {
    /// Lower-case name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Nil => "nil",
            Tag::Bool => "bool",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Str => "str",
            Tag::Bin => "bin",
            Tag::Array => "array",
            Tag::Map => "map",
            Tag::Ext => "ext",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One captured input element
///
/// Scalars keep their payload. Containers are drained and only their tag
/// survives, since no optional kind can be built from them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Bin,
    Array,
    Map,
    Ext,
}

impl Element {
    /// Read one element from `deserializer`.
    pub(crate) fn capture<'de, D>(deserializer: D) -> Result<Element, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(ElementVisitor)
    }

    pub(crate) fn tag(&self) -> Tag {
        match self {
            Element::Nil => Tag::Nil,
            Element::Bool(_) => Tag::Bool,
            Element::Int(_) | Element::UInt(_) => Tag::Int,
            Element::Float(_) => Tag::Float,
            Element::Str(_) => Tag::Str,
            Element::Bin => Tag::Bin,
            Element::Array => Tag::Array,
            Element::Map => Tag::Map,
            Element::Ext => Tag::Ext,
        }
    }

    pub(crate) fn is_nil(&self) -> bool {
        matches!(self, Element::Nil)
    }
}

struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = Element;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a single scalar element or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Element, E> {
        Ok(Element::Nil)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Element, E> {
        Ok(Element::Nil)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Element, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ElementVisitor)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Element, E> {
        Ok(Element::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Element, E> {
        Ok(Element::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Element, E> {
        Ok(Element::UInt(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Element, E> {
        Ok(Element::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Element, E> {
        Ok(Element::Str(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Element, E> {
        Ok(Element::Str(v))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<Element, E> {
        Ok(Element::Bin)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Element, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Element::Array)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Element, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Element::Map)
    }

    // rmp-serde hands extension types over as a newtype struct
    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Element, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Element::Ext)
    }
}

/// A scalar type an optional can hold
///
/// `from_element` is the one conversion rule per kind, shared by both
/// policies. `None` means "present but the wrong shape"; what that turns
/// into is the policy's decision.
pub(crate) trait Scalar: Sized {
    /// Optional kind name used in logs and errors
    const KIND: &'static str;

    fn from_element(element: Element) -> Option<Self>;
}

impl Scalar for i32 {
    const KIND: &'static str = "Int";

    fn from_element(element: Element) -> Option<Self> {
        match element {
            Element::Int(v) => i32::try_from(v).ok(),
            Element::UInt(v) => i32::try_from(v).ok(),
            _ => None,
        }
    }
}

impl Scalar for i64 {
    const KIND: &'static str = "Int64";

    fn from_element(element: Element) -> Option<Self> {
        match element {
            Element::Int(v) => Some(v),
            Element::UInt(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl Scalar for f64 {
    const KIND: &'static str = "Float64";

    fn from_element(element: Element) -> Option<Self> {
        match element {
            Element::Float(v) => Some(v),
            Element::Int(v) => Some(v as f64),
            Element::UInt(v) => Some(v as f64),
            _ => None,
        }
    }
}

impl Scalar for String {
    const KIND: &'static str = "String";

    fn from_element(element: Element) -> Option<Self> {
        match element {
            Element::Str(s) => Some(s),
            _ => None,
        }
    }
}

// Only the canonical tokens 1, true, 0, false. Quoted "true", 1.0, 2 and
// friends are not booleans.
impl Scalar for bool {
    const KIND: &'static str = "Bool";

    fn from_element(element: Element) -> Option<Self> {
        match element {
            Element::Bool(b) => Some(b),
            Element::Int(1) | Element::UInt(1) => Some(true),
            Element::Int(0) | Element::UInt(0) => Some(false),
            _ => None,
        }
    }
}
