//! Strict decode policy for the binary document format
//!
//! `nil` is absence and is not an error. Any other element must convert to
//! the target scalar; if it does not, decoding fails with
//! [`CodecError::TagMismatch`] naming the element's tag and the target kind.
//!
//! Only `Int64` and `Str` route compact (non human-readable) deserializers
//! through this policy.

use crate::element::{Element, Scalar};
use crate::error::{CodecError, Result};
use tracing::debug;

/// Turn a captured element into `Ok(Some(value))`, `Ok(None)` for `nil`,
/// or a tag mismatch.
pub(crate) fn decode<T: Scalar>(element: Element) -> Result<Option<T>> {
    if element.is_nil() {
        return Ok(None);
    }
    let tag = element.tag();
    match T::from_element(element) {
        Some(value) => Ok(Some(value)),
        None => {
            debug!(tag = %tag, target = T::KIND, "binary element does not fit optional");
            Err(CodecError::TagMismatch {
                tag,
                target: T::KIND,
            })
        }
    }
}

/// Decode one MessagePack-encoded element from `bytes`.
///
/// Engine failures (truncated input, unknown marker, bytes left over after
/// the element) are reported as [`CodecError::Binary`]; shape failures as
/// [`CodecError::TagMismatch`].
///
/// A `str` element holding invalid UTF-8 reaches the policy as raw bytes
/// and is reported with [`Tag::Bin`](crate::Tag::Bin).
#[cfg(feature = "msgpack")]
pub(crate) fn decode_slice<T: Scalar>(bytes: &[u8]) -> Result<Option<T>> {
    let mut rest = bytes;
    let element = {
        let mut de = rmp_serde::Deserializer::new(&mut rest);
        Element::capture(&mut de).map_err(|e| CodecError::Binary(e.to_string()))?
    };
    if !rest.is_empty() {
        return Err(CodecError::Binary(format!(
            "trailing bytes: {} left after element",
            rest.len()
        )));
    }
    decode(element)
}
