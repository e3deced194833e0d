//! Lenient decode policy for the text format
//!
//! A token that cannot become the target scalar is treated exactly like
//! `null`: the optional ends up invalid and the surrounding document keeps
//! decoding. Nothing here returns an error.

use crate::element::{Element, Scalar};
use tracing::debug;

/// Turn a captured element into `Some(value)` or absence.
pub(crate) fn decode<T: Scalar>(element: Element) -> Option<T> {
    if element.is_nil() {
        return None;
    }
    let tag = element.tag();
    let value = T::from_element(element);
    if value.is_none() {
        debug!(tag = %tag, target = T::KIND, "text token does not fit optional, treating as absent");
    }
    value
}
