//! Fixed-point number rendering with custom separators.
//!
//! [`NumberFormat`] renders a [`Decimal`] with a fixed number of fractional
//! digits, grouping the integral digits by thousands. Rounding is half away
//! from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Separators and precision used to render a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat<'a> {
    /// Number of fractional digits.
    pub decimals: u32,
    /// Placed between the integral and fractional digits.
    pub decimal_separator: &'a str,
    /// Placed between each group of three integral digits.
    pub thousands_separator: &'a str,
}

/// A number rendered by [`NumberFormat::parts`], before separators are joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParts {
    /// Integral digits, grouped and signed (e.g. `"-1 234"`).
    pub integral: String,
    /// Fractional digits, empty when rendered without decimals.
    pub fraction: String,
}

impl NumberParts {
    /// Returns `true` if every fractional digit is `0` (or there are none).
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.fraction.bytes().all(|b| b == b'0')
    }
}

impl NumberFormat<'_> {
    /// Render `value` into its integral and fractional parts.
    #[must_use]
    pub fn parts(&self, value: Decimal) -> NumberParts {
        let rounded =
            value.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let precision = self.decimals as usize;
        let digits = format!("{:.precision$}", rounded.abs());
        let (int_digits, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut integral = group_thousands(int_digits, self.thousands_separator);
        if negative {
            integral.insert(0, '-');
        }

        NumberParts {
            integral,
            fraction: fraction.to_owned(),
        }
    }

    /// Render `value` as a string.
    #[must_use]
    pub fn format(&self, value: Decimal) -> String {
        self.join(&self.parts(value))
    }

    /// Join previously rendered parts with the decimal separator.
    #[must_use]
    pub fn join(&self, parts: &NumberParts) -> String {
        if parts.fraction.is_empty() {
            parts.integral.clone()
        } else {
            format!(
                "{}{}{}",
                parts.integral, self.decimal_separator, parts.fraction
            )
        }
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
