/// Formats a number the way the language prints it.
///
/// Integral values print without a fractional part, `-0` prints as `0`, and
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`. Magnitudes of
/// `1e21` and above, or below `1e-6`, switch to exponent notation such as
/// `1e+21` or `1.5e-7`. All other values use the shortest decimal form that
/// reads back to the same `f64`.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The printed form of `value`.
///
/// ## Example
/// ```
/// use wisam::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let Ok(exponent) = exponent.parse::<i64>() else {
        return format!("{value}");
    };

    format!("{sign}{}", place_point(&digits, exponent + 1))
}

/// Places the decimal point in the significant `digits`, where `point` is the
/// number of digits that precede it.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn place_point(digits: &str, point: i64) -> String {
    let count = digits.len() as i64;

    if count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exponent = point - 1;
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exponent_sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{exponent_sign}{}", exponent.abs())
        }
    }
}

/// Rounds to the nearest integer, with halves rounded towards positive
/// infinity.
///
/// ## Example
/// ```
/// use wisam::util::num::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.6), -3.0);
/// ```
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    if value - value.trunc() == -0.5 {
        value.ceil()
    } else {
        value.round()
    }
}

/// Converts a `usize` count to `f64`.
///
/// Counts of strings and arrays never come close to `2^53`, so the
/// conversion is exact in practice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn count_to_f64(count: usize) -> f64 {
    count as f64
}
