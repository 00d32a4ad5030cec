//! Style objects and their conversion for native layout.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleValue`]: a number, string, flag or nested object
//! - [`StyleObject`]: a map of property names to values
//! - [`convert_style`]: rewrites a web-style object into native form
//!
//! Conversion runs every dimensional property through the
//! [`unit`](crate::unit) converter and strips what the native renderer
//! cannot express.

mod convert;
mod value;

pub use convert::{
    convert_style, dimension, font_weight, try_convert_style, AUTO_MARGIN_PROPERTIES,
    DEFAULT_FONT_WEIGHT, DIMENSIONAL_PROPERTIES, UNSUPPORTED_PROPERTIES,
};
pub use value::{StyleObject, StyleValue};
