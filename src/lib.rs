//! # optscalar
//!
//! Optional scalar values that remember whether they hold a value, and
//! that encode to JSON and MessagePack with `null`/`nil` standing in for
//! "no value".
//!
//! ## Quick Start
//!
//! ```
//! use optscalar::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Profile {
//!     age: Int,
//!     name: Str,
//!     score: Float64,
//! }
//!
//! // Wrong-shaped and missing fields are simply invalid
//! let p: Profile = serde_json::from_str(r#"{"age": "old", "name": "Ada"}"#).unwrap();
//! assert!(!p.age.ok());
//! assert_eq!(p.name.get(), ("Ada", true));
//! assert!(!p.score.ok());
//!
//! // Invalid fields are written as null, never dropped
//! let json = serde_json::to_string(&p).unwrap();
//! assert_eq!(json, r#"{"age":null,"name":"Ada","score":null}"#);
//! ```
//!
//! ## Formats
//!
//! - JSON: every kind. Decoding never fails because of a field's shape.
//! - MessagePack: [`Int64`] and [`Str`] decode strictly and report
//!   [`CodecError::TagMismatch`]; the others stay lenient.

#![warn(missing_docs)]

pub mod prelude;

pub use optscalar_core::{
    Bool, CodecError, Float64, Int, Int64, Optional, Result, Str, Tag, TextCodec, Truthy,
};

#[cfg(feature = "msgpack")]
pub use optscalar_core::BinaryCodec;
