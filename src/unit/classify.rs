//! Classification of raw style strings into unit variants.

use cssparser::{Parser, ParserInput};

/// A raw style string sorted into the conversion rule that applies to it.
///
/// Classification happens once, before any numeric work, so every rule in
/// the converter is reached through an exhaustive `match`.
///
/// Text variants borrow from the original input and still carry their unit
/// suffix; the converter reads the leading number itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitValue<'a> {
    /// A value that is already a native number.
    Number(f64),
    /// `clamp(min, preferred, max)`. Only `preferred` is used.
    Clamp {
        min: &'a str,
        preferred: &'a str,
        max: &'a str,
    },
    /// A root-relative length such as `1.5rem`.
    Rem(&'a str),
    /// A percentage such as `50%`.
    Percent(&'a str),
    /// Anything else, read as a bare float.
    Plain(&'a str),
}

impl<'a> UnitValue<'a> {
    /// Classifies a raw style string.
    ///
    /// The input is trimmed first. A `clamp(` expression that cannot be
    /// split into exactly three arguments is not a [`UnitValue::Clamp`];
    /// it falls through to the remaining rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aterciopelada_style::unit::UnitValue;
    ///
    /// assert_eq!(UnitValue::classify("2rem"), UnitValue::Rem("2rem"));
    /// assert!(matches!(
    ///     UnitValue::classify("clamp(1rem, 4vw, 2rem)"),
    ///     UnitValue::Clamp { preferred: "4vw", .. }
    /// ));
    /// ```
    pub fn classify(raw: &'a str) -> Self {
        let value = raw.trim();

        if let Some([min, preferred, max]) = split_clamp(value) {
            return UnitValue::Clamp {
                min,
                preferred,
                max,
            };
        }

        if value.contains("rem") {
            UnitValue::Rem(value)
        } else if value.contains('%') {
            UnitValue::Percent(value)
        } else {
            UnitValue::Plain(value)
        }
    }

    /// Returns the variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            UnitValue::Number(_) => "number",
            UnitValue::Clamp { .. } => "clamp",
            UnitValue::Rem(_) => "rem",
            UnitValue::Percent(_) => "percent",
            UnitValue::Plain(_) => "plain",
        }
    }
}

/// Returns true if the string mentions a clamp expression at all.
pub(crate) fn mentions_clamp(value: &str) -> bool {
    value.contains("clamp(")
}

/// Splits `clamp(a, b, c)` into its three trimmed arguments.
///
/// The expression may appear anywhere in the string. Nested functions inside
/// an argument (`calc(...)`) stay intact because the tokenizer tracks blocks.
fn split_clamp(value: &str) -> Option<[&str; 3]> {
    let start = value.find("clamp(")?;
    let expression = &value[start..];
    if !has_balanced_parens(expression) {
        return None;
    }

    let mut input = ParserInput::new(expression);
    let mut parser = Parser::new(&mut input);
    let args = clamp_arguments(&mut parser).ok()?;

    match args.as_slice() {
        [min, preferred, max] if !preferred.is_empty() => Some([*min, *preferred, *max]),
        _ => None,
    }
}

fn clamp_arguments<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Vec<&'i str>, cssparser::ParseError<'i, ()>> {
    parser.expect_function_matching("clamp")?;
    parser.parse_nested_block(|block| {
        block.parse_comma_separated(|arg| {
            let start = arg.position();
            while arg.next().is_ok() {}
            Ok(arg.slice_from(start).trim())
        })
    })
}

fn has_balanced_parens(expression: &str) -> bool {
    let mut depth: usize = 0;
    for c in expression.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}
