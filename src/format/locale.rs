// ============================================================================
// Locale
// Grouping and decimal glyphs used by the display projection
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator glyphs for one display locale.
///
/// Only the display projection is localized. Entry buffers always use `.` and
/// carry no grouping, which is what `Locale::RAW` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Locale {
    /// Thousands separator; `None` disables grouping
    pub group_separator: Option<char>,
    pub decimal_separator: char,
}

impl Locale {
    /// Ungrouped, `.` decimal: the entry buffer's own notation
    pub const RAW: Self = Self {
        group_separator: None,
        decimal_separator: '.',
    };

    /// 1,234.5
    pub const EN_US: Self = Self {
        group_separator: Some(','),
        decimal_separator: '.',
    };

    /// 1.234,5
    pub const DE_DE: Self = Self {
        group_separator: Some('.'),
        decimal_separator: ',',
    };

    /// 1 234,5 with a narrow no-break space
    pub const FR_FR: Self = Self {
        group_separator: Some('\u{202F}'),
        decimal_separator: ',',
    };

    pub fn new(group_separator: Option<char>, decimal_separator: char) -> Self {
        Self {
            group_separator,
            decimal_separator,
        }
    }

    /// Insert the group separator every three digits from the right.
    pub fn group_digits(&self, digits: &str) -> String {
        let Some(separator) = self.group_separator else {
            return digits.to_string();
        };

        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        grouped
    }

    /// Swap the raw `.` for this locale's decimal separator.
    pub fn localize_decimal(&self, raw: &str) -> String {
        if self.decimal_separator == '.' {
            raw.to_string()
        } else {
            raw.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// Undo grouping and decimal localization, giving back raw notation.
    pub fn delocalize(&self, display: &str) -> String {
        display
            .chars()
            .filter(|c| Some(*c) != self.group_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}
