// ============================================================================
// Entry Formatting
// Mid-entry buffers to display text, without touching typed digits
// ============================================================================

use super::Locale;
use crate::domain::is_error_sentinel;
use crate::numeric::is_editable_entry;

/// Render a raw entry buffer for display.
///
/// Sentinels pass through. An editable entry has its integer digits grouped
/// while the decimal part, including a bare trailing `.`, is kept verbatim so
/// `"1234."` shows as `"1,234."`. Committed exponential entries only get
/// their decimal separator localized.
pub fn render_entry(entry: &str, locale: &Locale) -> String {
    if is_error_sentinel(entry) {
        return entry.to_string();
    }

    if !is_editable_entry(entry) {
        return locale.localize_decimal(entry);
    }

    let (sign, body) = match entry.strip_prefix('-') {
        Some(body) => ("-", body),
        None => ("", entry),
    };

    let mut out = String::with_capacity(entry.len() + 8);
    out.push_str(sign);

    match body.split_once('.') {
        Some((int_digits, frac_digits)) => {
            out.push_str(&locale.group_digits(int_digits));
            out.push(locale.decimal_separator);
            out.push_str(frac_digits);
        },
        None => out.push_str(&locale.group_digits(body)),
    }

    out
}

/// Render an entry buffer with en-US grouping.
pub fn format_entry_for_display(entry: &str) -> String {
    render_entry(entry, &Locale::EN_US)
}
