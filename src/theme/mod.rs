//! Theme system built on the design tokens.
//!
//! This module provides:
//!
//! - [`Theme`]: tokens plus derived component presets and style sheet
//! - [`Components`]: converted styles for headers, buttons, cards and inputs
//! - [`StyleSheet`]: named styles shared across screens
//! - [`ThemeConfig`]: YAML overrides for the color palettes

mod components;
mod sheet;
#[allow(clippy::module_inception)]
mod theme;

pub use components::{
    ButtonSizes, ButtonStyles, ButtonVariants, CardStyles, Components, HeaderStyles, InputStyles,
    MIN_TOUCH_TARGET,
};
pub use sheet::StyleSheet;
pub use theme::{Theme, ThemeConfig};
