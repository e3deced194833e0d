//! Explicit single-field entry points
//!
//! Structs embedding optionals go through serde as usual. These traits are
//! for callers holding one field's encoded bytes: they run the same hooks
//! and leave the optional in the state the hook decided.

use crate::error::{CodecError, Result};
use crate::Optional;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON encode/decode of a single optional field
pub trait TextCodec: Optional + Serialize + DeserializeOwned + Default {
    /// Encode as a JSON token: the value, or `null` when invalid.
    fn marshal_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON token into `self`.
    ///
    /// Wrong-shaped tokens leave `self` invalid and return `Ok`. Only a
    /// token serde_json cannot parse at all is an error, in which case
    /// `self` is reset to invalid.
    fn unmarshal_text(&mut self, text: &str) -> Result<()> {
        match serde_json::from_str(text) {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(e) => {
                *self = Self::default();
                Err(CodecError::from(e))
            }
        }
    }
}

/// MessagePack encode/decode of a single optional field
///
/// Implemented for `Int64` and `Str` only.
#[cfg(feature = "msgpack")]
pub trait BinaryCodec: Optional + Serialize + Default {
    /// Encode as one MessagePack element: the value, or `nil` when invalid.
    fn marshal_binary(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec(self).map_err(|e| CodecError::Binary(e.to_string()))
    }

    /// Decode one MessagePack element into `self`.
    ///
    /// `nil` leaves `self` invalid and returns `Ok`. A tag mismatch leaves
    /// `self` invalid and returns [`CodecError::TagMismatch`].
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()>;
}
