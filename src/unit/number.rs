//! Numeric primitives shared by the unit converter.

/// Parses the leading numeric portion of a string.
///
/// Leading whitespace is skipped, then an optional sign, digits with an
/// optional fraction, and an optional exponent are consumed. Anything after
/// that is ignored, so `"1.5rem"` reads as `1.5` and `"12px"` as `12`.
/// `Infinity` is accepted with an optional sign.
///
/// Returns `None` when no digits are found.
///
/// # Example
///
/// ```rust
/// use aterciopelada_style::unit::parse_leading_float;
///
/// assert_eq!(parse_leading_float("2.5rem"), Some(2.5));
/// assert_eq!(parse_leading_float("  -3px"), Some(-3.0));
/// assert_eq!(parse_leading_float("rem"), None);
/// ```
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        let infinite = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -infinite } else { infinite });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Rounds half-way cases toward positive infinity.
///
/// `2.5` rounds to `3` and `-2.5` rounds to `-2`, which differs from
/// [`f64::round`] for negative half-way values.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
