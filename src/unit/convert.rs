//! Conversion of single style values into native layout numbers.

use crate::error::{ParseError, ParseResult};
use crate::responsive::Viewport;

use super::classify::{mentions_clamp, UnitValue};
use super::number::{parse_leading_float, round_half_up};

/// Root font size assumed when resolving `rem` lengths.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// How malformed input is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Malformed input degrades to `0`.
    Lenient,
    /// Malformed input is reported as a [`ParseError`].
    Strict,
}

/// Converts a style string into a native layout number.
///
/// Never fails: anything that cannot be read becomes `0`.
///
/// | Input | Result |
/// |-------|--------|
/// | `clamp(a, b, c)` | `b` resolved; `vw` scales with the viewport width |
/// | `1.5rem` | `round(1.5 * 16)` |
/// | `50%` | `50`, the percentage itself |
/// | `12px`, `12` | `12`, rounded |
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::responsive::Viewport;
/// use aterciopelada_style::unit::to_native;
///
/// let viewport = Viewport::new(400.0, 800.0);
/// assert_eq!(to_native("2.5rem", &viewport), 40.0);
/// assert_eq!(to_native("clamp(10px, 5vw, 40px)", &viewport), 20.0);
/// assert_eq!(to_native("not-a-number", &viewport), 0.0);
/// ```
pub fn to_native(raw: &str, viewport: &Viewport) -> f64 {
    match convert(raw, viewport, Mode::Lenient) {
        Ok(value) => value,
        // lenient conversion has no error path
        Err(_) => 0.0,
    }
}

/// Converts a style string, reporting malformed input instead of
/// substituting `0`.
///
/// Intended for validating design tokens during development.
pub fn try_to_native(raw: &str, viewport: &Viewport) -> ParseResult<f64> {
    convert(raw, viewport, Mode::Strict)
}

impl UnitValue<'_> {
    /// Resolves an already classified value, substituting `0` for
    /// unreadable numbers.
    pub fn to_native(self, viewport: &Viewport) -> f64 {
        resolve(self, viewport, Mode::Lenient).unwrap_or(0.0)
    }
}

impl From<f64> for UnitValue<'_> {
    fn from(value: f64) -> Self {
        UnitValue::Number(value)
    }
}

pub(crate) fn convert(raw: &str, viewport: &Viewport, mode: Mode) -> ParseResult<f64> {
    let unit = UnitValue::classify(raw);

    if mode == Mode::Strict && mentions_clamp(raw) && !matches!(unit, UnitValue::Clamp { .. }) {
        return Err(ParseError::MalformedClamp {
            value: raw.trim().to_string(),
        });
    }

    resolve(unit, viewport, mode)
}

fn resolve(unit: UnitValue<'_>, viewport: &Viewport, mode: Mode) -> ParseResult<f64> {
    match unit {
        UnitValue::Number(n) => Ok(n),
        UnitValue::Clamp { preferred, .. } => {
            if preferred.contains("vw") {
                let coefficient = read_number(preferred, mode, |value| {
                    ParseError::InvalidViewportUnit { value }
                })?;
                Ok(round_half_up(coefficient * viewport.width() / 100.0))
            } else {
                convert(preferred, viewport, mode)
            }
        }
        UnitValue::Rem(value) => {
            let coefficient = read_number(value, mode, |value| ParseError::InvalidNumber { value })?;
            Ok(round_half_up(coefficient * ROOT_FONT_SIZE))
        }
        UnitValue::Percent(value) => {
            read_number(value, mode, |value| ParseError::InvalidNumber { value })
        }
        UnitValue::Plain(value) => {
            let number = read_number(value, mode, |value| ParseError::InvalidNumber { value })?;
            Ok(round_half_up(number))
        }
    }
}

fn read_number(
    value: &str,
    mode: Mode,
    error: impl FnOnce(String) -> ParseError,
) -> ParseResult<f64> {
    match parse_leading_float(value) {
        Some(number) => Ok(number),
        None => match mode {
            Mode::Strict => Err(error(value.to_string())),
            Mode::Lenient => {
                tracing::debug!(value, "unreadable style value, using 0");
                Ok(0.0)
            }
        },
    }
}
