//! Responsive resolution against device-width buckets.
//!
//! This module provides:
//!
//! - [`ScreenBucket`]: small, medium, large or tablet
//! - [`Breakpoints`]: the width thresholds that pick a bucket
//! - [`Viewport`]: a device snapshot that resolves per-bucket values and
//!   scales spacing and font sizes
//! - [`ResponsiveValues`]: a value with optional per-bucket variants
//!
//! A [`Viewport`] is passed explicitly wherever a width matters. The
//! process-wide default set with [`set_viewport`] exists for hosts that
//! capture the device size once at startup.

mod breakpoints;
mod values;
mod viewport;

pub use breakpoints::{Breakpoints, ScreenBucket, BREAKPOINTS};
pub use values::{Fallback, ResponsiveValues};
pub use viewport::{set_viewport, SafeAreaInsets, Viewport};
