//! Design tokens for the mobile client.
//!
//! - [`Colors`]: brand palettes, status colors, surfaces and text
//! - [`Typography`]: families, size scale, weights, line heights
//! - [`space`] and the `SPACE_*` constants: the 4px spacing scale
//! - [`Shadow`]: elevation presets
//!
//! Breakpoints live in [`responsive`](crate::responsive).

mod colors;
mod shadows;
pub mod spacing;
mod typography;

pub use colors::{
    ColorOverrides, ColorScale, Colors, SemanticColor, SemanticColors, SurfaceColors, TextColors,
};
pub use shadows::Shadow;
pub use spacing::{space, MobileChrome, SPACING_UNIT};
pub use typography::{FontFamilies, FontWeights, LetterSpacing, LineHeights, TypeScale, Typography};
