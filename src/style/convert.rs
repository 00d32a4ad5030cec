//! Conversion of whole style objects for the native renderer.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::value::{StyleObject, StyleValue};
use crate::error::{ParseError, ParseResult};
use crate::responsive::Viewport;
use crate::unit::{self, Mode};

/// Properties whose values are lengths and go through unit conversion.
pub const DIMENSIONAL_PROPERTIES: &[&str] = &[
    "borderRadius",
    "padding",
    "paddingHorizontal",
    "paddingVertical",
    "margin",
    "marginTop",
    "marginBottom",
    "marginHorizontal",
    "fontSize",
    "lineHeight",
    "letterSpacing",
    "width",
    "height",
    "maxWidth",
    "minHeight",
    "top",
    "right",
    "left",
    "bottom",
];

/// Properties with no native equivalent. They are dropped.
pub const UNSUPPORTED_PROPERTIES: &[&str] = &[
    "gap",
    "backdropFilter",
    "transition",
    "cursor",
    "outline",
    "userSelect",
    "boxShadow",
    "display",
    "textTransform",
];

/// Margins that cannot be `auto` natively. If either is `auto`, both go.
pub const AUTO_MARGIN_PROPERTIES: &[&str] = &["marginTop", "marginHorizontal"];

/// Dimensional values left untouched as layout directives.
const LAYOUT_KEYWORDS: &[&str] = &["auto", "100%"];

/// Weight used for unrecognized `fontWeight` strings.
pub const DEFAULT_FONT_WEIGHT: f64 = 400.0;

static FONT_WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("100", 100.0),
        ("200", 200.0),
        ("300", 300.0),
        ("400", 400.0),
        ("500", 500.0),
        ("600", 600.0),
        ("700", 700.0),
        ("800", 800.0),
        ("900", 900.0),
        ("normal", 400.0),
        ("bold", 700.0),
        ("lighter", 300.0),
        ("bolder", 600.0),
    ])
});

/// Maps a CSS `font-weight` keyword or numeric string to a weight.
///
/// Unknown strings map to [`DEFAULT_FONT_WEIGHT`].
pub fn font_weight(name: &str) -> f64 {
    FONT_WEIGHTS
        .get(name)
        .copied()
        .unwrap_or(DEFAULT_FONT_WEIGHT)
}

/// Converts a style object into one the native renderer accepts.
///
/// - Dimensional properties are converted with [`unit::to_native`], except
///   the literal strings `"auto"` and `"100%"`.
/// - `position: "fixed"` becomes `"absolute"`.
/// - String `fontWeight` values become numeric weights.
/// - [`UNSUPPORTED_PROPERTIES`] are removed.
/// - `auto` vertical/horizontal margins are removed.
/// - `backgroundImage` gradients are removed.
///
/// Everything else is copied as is. The input is not modified, and
/// converting the output again changes nothing.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::{convert_style, style_object, StyleValue};
/// use aterciopelada_style::responsive::Viewport;
///
/// let converted = convert_style(
///     &style_object! { "padding" => "1rem", "position" => "fixed", "gap" => 8 },
///     &Viewport::default(),
/// );
///
/// assert_eq!(converted.get("padding"), Some(&StyleValue::Number(16.0)));
/// assert_eq!(converted.get("position"), Some(&StyleValue::from("absolute")));
/// assert!(!converted.contains("gap"));
/// ```
pub fn convert_style(style: &StyleObject, viewport: &Viewport) -> StyleObject {
    match convert_with_mode(style, viewport, Mode::Lenient) {
        Ok(converted) => converted,
        // lenient conversion has no error path
        Err(_) => StyleObject::new(),
    }
}

/// Converts a style object, failing on the first malformed dimension.
pub fn try_convert_style(style: &StyleObject, viewport: &Viewport) -> ParseResult<StyleObject> {
    convert_with_mode(style, viewport, Mode::Strict)
}

/// Converts a single dimensional value.
///
/// Numbers pass through and text goes through [`unit::to_native`]. Booleans
/// and nested objects have no length and become `0`.
pub fn dimension(value: &StyleValue, viewport: &Viewport) -> f64 {
    dimension_with_mode("", value, viewport, Mode::Lenient).unwrap_or(0.0)
}

fn convert_with_mode(
    style: &StyleObject,
    viewport: &Viewport,
    mode: Mode,
) -> ParseResult<StyleObject> {
    let mut native = style.clone();

    for &property in DIMENSIONAL_PROPERTIES {
        let Some(value) = native.get(property) else {
            continue;
        };
        if LAYOUT_KEYWORDS.iter().any(|keyword| value.is_text(keyword)) {
            continue;
        }
        let converted = dimension_with_mode(property, value, viewport, mode)?;
        native.insert(property, converted);
    }

    if native.get("position").is_some_and(|p| p.is_text("fixed")) {
        native.insert("position", "absolute");
    }

    if let Some(weight) = native.get("fontWeight").and_then(StyleValue::as_str) {
        let weight = font_weight(weight);
        native.insert("fontWeight", weight);
    }

    for &property in UNSUPPORTED_PROPERTIES {
        if native.remove(property).is_some() {
            tracing::trace!(property, "dropped unsupported style property");
        }
    }

    let auto_margin = AUTO_MARGIN_PROPERTIES
        .iter()
        .any(|property| native.get(property).is_some_and(|v| v.is_text("auto")));
    if auto_margin {
        for &property in AUTO_MARGIN_PROPERTIES {
            native.remove(property);
        }
    }

    let gradient = native
        .get("backgroundImage")
        .and_then(StyleValue::as_str)
        .is_some_and(|image| image.contains("gradient"));
    if gradient {
        native.remove("backgroundImage");
    }

    Ok(native)
}

fn dimension_with_mode(
    property: &str,
    value: &StyleValue,
    viewport: &Viewport,
    mode: Mode,
) -> ParseResult<f64> {
    match value {
        StyleValue::Number(n) => Ok(*n),
        StyleValue::Text(raw) => unit::convert(raw, viewport, mode),
        StyleValue::Bool(_) | StyleValue::Nested(_) => match mode {
            Mode::Strict => Err(ParseError::UnsupportedValue {
                property: property.to_string(),
                found: value.kind(),
            }),
            Mode::Lenient => {
                tracing::debug!(property, kind = value.kind(), "non-length dimension, using 0");
                Ok(0.0)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_object;

    fn convert(style: StyleObject) -> StyleObject {
        convert_style(&style, &Viewport::new(400.0, 800.0))
    }

    #[test]
    fn test_converts_rem_padding() {
        assert_eq!(
            convert(style_object! { "padding" => "1rem" }),
            style_object! { "padding" => 16 }
        );
    }

    #[test]
    fn test_fixed_position_becomes_absolute() {
        assert_eq!(
            convert(style_object! { "position" => "fixed" }),
            style_object! { "position" => "absolute" }
        );
        assert_eq!(
            convert(style_object! { "position" => "relative" }),
            style_object! { "position" => "relative" }
        );
    }

    #[test]
    fn test_font_weight_keywords() {
        assert_eq!(
            convert(style_object! { "fontWeight" => "bold" }),
            style_object! { "fontWeight" => 700 }
        );
        assert_eq!(font_weight("normal"), 400.0);
        assert_eq!(font_weight("lighter"), 300.0);
        assert_eq!(font_weight("bolder"), 600.0);
        assert_eq!(font_weight("600"), 600.0);
        assert_eq!(font_weight("heavy"), 400.0);
    }

    #[test]
    fn test_numeric_font_weight_untouched() {
        assert_eq!(
            convert(style_object! { "fontWeight" => 650 }),
            style_object! { "fontWeight" => 650 }
        );
    }

    #[test]
    fn test_unsupported_properties_removed() {
        assert_eq!(
            convert(style_object! { "gap" => 8, "padding" => 4 }),
            style_object! { "padding" => 4 }
        );

        let mut style = StyleObject::new();
        for &property in UNSUPPORTED_PROPERTIES {
            style.insert(property, "anything");
        }
        assert!(convert(style).is_empty());
    }

    #[test]
    fn test_auto_margins_removed() {
        assert_eq!(
            convert(style_object! { "marginTop" => "auto", "marginHorizontal" => "auto" }),
            StyleObject::new()
        );
    }

    #[test]
    fn test_single_auto_margin_removes_the_pair() {
        assert_eq!(
            convert(style_object! { "marginTop" => "auto", "marginHorizontal" => 12 }),
            StyleObject::new()
        );
        assert_eq!(
            convert(style_object! { "marginHorizontal" => "auto", "marginBottom" => 8 }),
            style_object! { "marginBottom" => 8 }
        );
    }

    #[test]
    fn test_other_auto_values_pass_through() {
        assert_eq!(
            convert(style_object! { "margin" => "auto", "width" => "100%" }),
            style_object! { "margin" => "auto", "width" => "100%" }
        );
    }

    #[test]
    fn test_gradient_background_removed() {
        assert_eq!(
            convert(style_object! { "backgroundImage" => "linear-gradient(90deg, #fff, #000)" }),
            StyleObject::new()
        );
        assert_eq!(
            convert(style_object! { "backgroundImage" => "url(hero.png)" }),
            style_object! { "backgroundImage" => "url(hero.png)" }
        );
    }

    #[test]
    fn test_passthrough_properties() {
        let style = style_object! {
            "color" => "#d63384",
            "flex" => 1,
            "flexDirection" => "row",
            "borderWidth" => "2px",
            "visible" => true,
        };
        assert_eq!(convert(style.clone()), style);
    }

    #[test]
    fn test_every_dimensional_property_converts() {
        let style: StyleObject = DIMENSIONAL_PROPERTIES
            .iter()
            .map(|&property| (property, "2rem"))
            .collect();
        let converted = convert(style);
        for &property in DIMENSIONAL_PROPERTIES {
            assert_eq!(converted.get(property), Some(&StyleValue::Number(32.0)), "{property}");
        }
    }

    #[test]
    fn test_non_length_dimension_becomes_zero() {
        assert_eq!(
            convert(style_object! { "width" => true }),
            style_object! { "width" => 0 }
        );
        assert_eq!(dimension(&StyleValue::from(StyleObject::new()), &Viewport::default()), 0.0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let style = style_object! { "padding" => "1rem", "gap" => 4 };
        let _ = convert_style(&style, &Viewport::default());
        assert_eq!(style, style_object! { "padding" => "1rem", "gap" => 4 });
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let style = style_object! {
            "padding" => "1.5rem",
            "fontSize" => "clamp(1rem, 4vw, 2rem)",
            "width" => "50%",
            "height" => "100%",
            "position" => "fixed",
            "fontWeight" => "lighter",
            "marginTop" => "auto",
            "cursor" => "pointer",
            "backgroundImage" => "radial-gradient(#fff, #000)",
            "color" => "#fff",
        };
        let once = convert(style);
        assert_eq!(convert(once.clone()), once);
    }

    #[test]
    fn test_strict_reports_bad_dimension() {
        let vp = Viewport::default();
        assert_eq!(
            try_convert_style(&style_object! { "padding" => "wide" }, &vp),
            Err(ParseError::InvalidNumber {
                value: "wide".to_string()
            })
        );
        assert_eq!(
            try_convert_style(&style_object! { "height" => false }, &vp),
            Err(ParseError::UnsupportedValue {
                property: "height".to_string(),
                found: "boolean",
            })
        );
    }

    #[test]
    fn test_strict_matches_lenient_on_valid_input() {
        let vp = Viewport::new(768.0, 1024.0);
        let style = style_object! {
            "padding" => "1rem",
            "fontSize" => "clamp(14px, 2vw, 20px)",
            "position" => "fixed",
        };
        assert_eq!(try_convert_style(&style, &vp), Ok(convert_style(&style, &vp)));
    }
}
