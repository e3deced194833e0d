//! Convenient imports for optscalar.
//!
//! ```
//! use optscalar::prelude::*;
//!
//! let mut flag = Bool::default();
//! flag.set("yes", true);
//! assert_eq!(flag.get_int(), (1, true));
//! ```

// Optional kinds
pub use crate::{Bool, Float64, Int, Int64, Str};

// Shared interface
pub use crate::{Optional, Truthy};

// Single-field entry points
pub use crate::TextCodec;
#[cfg(feature = "msgpack")]
pub use crate::BinaryCodec;

// Error handling
pub use crate::{CodecError, Result};
