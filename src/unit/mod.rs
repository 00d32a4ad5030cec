//! Unit conversion for single style values.
//!
//! This module turns web-style values into the plain numbers a native
//! layout engine expects:
//!
//! - [`UnitValue`]: a raw string classified into `clamp`, `rem`, `%` or plain
//! - [`to_native`]: lenient conversion that falls back to `0`
//! - [`try_to_native`]: strict conversion that reports a [`ParseError`](crate::ParseError)
//!
//! Conversion is pure. The only environmental input is the viewport width,
//! used by `vw` units inside `clamp()`.

mod classify;
mod convert;
mod number;

pub use classify::UnitValue;
pub use convert::{to_native, try_to_native, ROOT_FONT_SIZE};
pub(crate) use convert::{convert, Mode};
pub use number::{parse_leading_float, round_half_up};
