// ============================================================================
// Display Arithmetic
// Parsing, rounding and guarded division for double-precision entries
// ============================================================================

/// Default number of decimal places kept when a value is committed
pub const DEFAULT_ROUNDING_DIGITS: u32 = 12;

/// Parse an entry buffer (or an en-US formatted display string) into a number.
///
/// Never fails: error sentinels and anything that is not a plain decimal or
/// exponential literal yield `NaN`. Callers treat `NaN` exactly like any
/// other non-finite value.
pub fn parse_display_value(entry: &str) -> f64 {
    let cleaned: String = entry.chars().filter(|c| *c != ',').collect();

    // f64::from_str accepts "inf" and "NaN"; those are not calculator entries
    let is_literal = !cleaned.is_empty()
        && cleaned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));

    if !is_literal {
        return f64::NAN;
    }

    cleaned.parse().unwrap_or(f64::NAN)
}

/// Check whether an entry is a number the user can keep editing.
///
/// Accepts `-?digits(.digits?)?`. Error sentinels and exponential renderings
/// of committed results are not editable: the next digit starts a new entry.
pub fn is_editable_entry(entry: &str) -> bool {
    let body = entry.strip_prefix('-').unwrap_or(entry);

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.map_or(true, |frac| frac.bytes().all(|b| b.is_ascii_digit()))
}

/// Round a committed value to `digits` decimal places.
///
/// The value is biased by `f64::EPSILON` before scaling and the scaled value
/// is rounded half away from zero, which absorbs binary representation
/// residue such as `0.1 + 0.2 = 0.30000000000000004`.
///
/// Values so large that scaling overflows are returned unchanged.
pub fn round_committed(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let rounded = ((value + f64::EPSILON) * scale).round() / scale;

    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Division that maps any zero divisor to positive infinity.
///
/// The sign of the dividend and of the zero is deliberately dropped: every
/// division by zero lands on the same error sentinel.
#[inline]
pub fn guarded_divide(left: f64, right: f64) -> f64 {
    if right == 0.0 {
        f64::INFINITY
    } else {
        left / right
    }
}
