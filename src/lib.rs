//! # Aterciopelada Style - web-style values for native mobile layouts
//!
//! `aterciopelada-style` takes style definitions written the way a web
//! designer writes them (`rem`, `clamp()`, percentages, CSS keywords) and
//! turns them into the plain numbers and properties a native layout engine
//! understands. It also resolves values per screen size and ships the design
//! tokens of the La Aterciopelada mobile client.
//!
//! ## Core Concepts
//!
//! - [`unit`]: single-value conversion (`"1.5rem"` → `24`)
//! - [`StyleObject`] and [`convert_style`]: whole-object conversion, dropping
//!   properties the native renderer cannot express
//! - [`responsive`]: screen buckets, [`Viewport`](responsive::Viewport) and
//!   [`ResponsiveValues`](responsive::ResponsiveValues)
//! - [`tokens`]: colors, typography, spacing and shadows
//! - [`Theme`]: component presets and a named style sheet built from the tokens
//!
//! ## Quick Start
//!
//! ```rust
//! use aterciopelada_style::{convert_style, style_object, StyleValue};
//! use aterciopelada_style::responsive::{ResponsiveValues, Viewport};
//!
//! let viewport = Viewport::new(400.0, 860.0);
//!
//! let hero = convert_style(
//!     &style_object! {
//!         "fontSize" => "clamp(1.5rem, 6vw, 3rem)",
//!         "padding" => "1rem",
//!         "fontWeight" => "bold",
//!         "boxShadow" => "0 2px 4px #0003",
//!     },
//!     &viewport,
//! );
//!
//! assert_eq!(hero.get("fontSize"), Some(&StyleValue::Number(24.0)));
//! assert_eq!(hero.get("padding"), Some(&StyleValue::Number(16.0)));
//! assert_eq!(hero.get("fontWeight"), Some(&StyleValue::Number(700.0)));
//! assert!(!hero.contains("boxShadow"));
//!
//! let columns = ResponsiveValues::new(1).large(2).tablet(3);
//! assert_eq!(viewport.resolve(&columns), Some(&1));
//! ```
//!
//! ## Lenient and strict conversion
//!
//! The default entry points never fail: unreadable values become `0`, as a
//! native renderer would otherwise reject the whole style. The `try_`
//! variants report a [`ParseError`] instead, which is useful for checking
//! design tokens in tests.
//!
//! ## Logging
//!
//! Fallbacks and dropped properties are reported through [`tracing`] at
//! `debug`/`trace` level. The crate installs no subscriber.

mod error;
pub mod responsive;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod unit;

pub use error::{ParseError, ParseResult, ThemeError};
pub use style::{convert_style, try_convert_style, StyleObject, StyleValue};
pub use theme::{StyleSheet, Theme, ThemeConfig};
pub use tokens::ColorOverrides;
