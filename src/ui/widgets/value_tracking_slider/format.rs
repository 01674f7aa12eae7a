// SPDX-License-Identifier: MPL-2.0
//! Default label format used when no delegate describes the value.

/// Fixed-precision decimal format with a configurable separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFormat {
    /// Number of fraction digits before trimming.
    pub precision: usize,
    pub decimal_separator: char,
    /// Drop trailing fraction zeros (and a dangling separator).
    pub trim_trailing_zeros: bool,
}

impl Default for DefaultFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            decimal_separator: '.',
            trim_trailing_zeros: true,
        }
    }
}

impl DefaultFormat {
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    #[must_use]
    pub fn with_trailing_zeros(mut self, keep: bool) -> Self {
        self.trim_trailing_zeros = !keep;
        self
    }

    /// Formats `value`. Non-finite values render as `-`.
    #[must_use]
    pub fn format(&self, value: f32) -> String {
        if !value.is_finite() {
            return "-".to_string();
        }

        let mut text = format!("{:.*}", self.precision, value);

        if self.trim_trailing_zeros && text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }

        // "-0", "-0.00": rounding swallowed the magnitude
        if let Some(magnitude) = text.strip_prefix('-') {
            if magnitude.chars().all(|c| c == '0' || c == '.') {
                text.remove(0);
            }
        }

        if self.decimal_separator != '.' {
            text = text.replacen('.', &self.decimal_separator.to_string(), 1);
        }

        text
    }
}
