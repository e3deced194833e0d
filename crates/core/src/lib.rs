//! Optional scalar values for optscalar
//!
//! Each optional is a `(value, valid)` pair. The pair is the unit the codec
//! hooks work on: a field that is absent, `null`, or (for text) of the
//! wrong shape decodes to `valid = false`; a field that decodes cleanly
//! yields `valid = true`.
//!
//! ## Kinds
//!
//! | Kind | Value | JSON hooks | MessagePack hooks |
//! |------|-------|------------|-------------------|
//! | [`Int`] | `i32` | yes | no |
//! | [`Int64`] | `i64` | yes | yes |
//! | [`Str`] | `String` | yes | yes |
//! | [`Float64`] | `f64` | yes | no |
//! | [`Bool`] | `bool` | yes | no |
//!
//! ## Decode policies
//!
//! - Text (human-readable deserializers such as serde_json): a token that
//!   does not fit the kind becomes invalid and no error is raised.
//! - Binary (compact deserializers such as rmp-serde, `Int64` and `Str`
//!   only): `nil` becomes invalid, any other misfit is a
//!   [`CodecError::TagMismatch`].
//!
//! Encoding writes the value, or the format's null when invalid. Fields are
//! never skipped.
//!
//! ## Examples
//!
//! ```
//! use optscalar_core::Int64;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Doc {
//!     a: Int64,
//!     b: Vec<Int64>,
//! }
//!
//! let doc: Doc = serde_json::from_str(r#"{"b": [1, null]}"#).unwrap();
//! assert!(!doc.a.ok());
//! assert_eq!(doc.b[0].get(), (1, true));
//! assert!(!doc.b[1].ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod binary;
mod boolean;
mod codec;
mod element;
mod error;
mod float64;
mod int;
mod int64;
mod string;
mod text;

pub use boolean::{Bool, Truthy};
#[cfg(feature = "msgpack")]
pub use codec::BinaryCodec;
pub use codec::TextCodec;
pub use element::Tag;
pub use error::{CodecError, Result};
pub use float64::Float64;
pub use int::Int;
pub use int64::Int64;
pub use string::Str;

/// A value carrying a validity flag
pub trait Optional {
    /// Returns true if the value is valid
    fn ok(&self) -> bool;
}
