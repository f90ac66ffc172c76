//! Tax-aware price formatting.
//!
//! A [`Price`] stores a tax-free amount together with the [`RegionProfile`]
//! it is displayed in. The tax-included price and the tax amount are always
//! derived from the stored amount.
//!
//! ```
//! use pricetag_core::{DisplayOptions, Price};
//! use rust_decimal::Decimal;
//!
//! let mut price = Price::france(Decimal::from(1500), true);
//! assert_eq!(price.tax_free_price(), "1 500,00 € HT");
//! assert_eq!(price.tax_included_price(), "1 800,00 € TTC");
//! assert_eq!(price.tax_amount(), "300,00 €");
//!
//! price.configure(&DisplayOptions::new().hide_cents_when_whole(true).hide_suffix(true));
//! assert_eq!(price.tax_included_price(), "1 800 €");
//! ```

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;
use tracing::{debug, trace};

use super::display::{DisplayFlags, DisplayOptions};
use super::number::NumberFormat;
use super::region::RegionProfile;

/// Errors that can occur when building a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PriceError {
    /// The amount is NaN, infinite, or outside the decimal range.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    /// The amount fits, but its tax-included or tax value would not.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(Decimal),
}

/// A price displayed under a regional profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    profile: RegionProfile,
    /// Tax-free amount.
    amount: Decimal,
    flags: DisplayFlags,
}

/// The three formatted views of a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    /// See [`Price::tax_free_price`].
    pub tax_free: String,
    /// See [`Price::tax_included_price`].
    pub tax_included: String,
    /// See [`Price::tax_amount`].
    pub tax: String,
}

impl Price {
    /// Create a new price.
    ///
    /// When `amount_is_tax_free` is `false` the stored amount becomes
    /// `amount * tax_rate / 100`.
    ///
    /// Display flags start cleared, except that cents, currency and suffix
    /// are hidden when the profile has no decimals, no currency symbol or no
    /// suffix labels respectively.
    ///
    /// Amounts whose derived values overflow a [`Decimal`] are not rejected
    /// here; the affected values saturate at [`Decimal::MAX`] / [`Decimal::MIN`].
    /// Use [`try_new`](Self::try_new) to reject them instead.
    #[must_use]
    pub fn new(profile: RegionProfile, amount: Decimal, amount_is_tax_free: bool) -> Self {
        let stored = if amount_is_tax_free {
            amount
        } else {
            // Carried over from the legacy price component: not the inverse of
            // `amount * (1 + tax_rate)`.
            amount.saturating_mul(profile.tax_rate) / Decimal::ONE_HUNDRED
        };

        let flags = DisplayFlags {
            hide_cents: profile.decimals == 0,
            hide_cents_when_whole: false,
            hide_currency: !profile.has_currency(),
            hide_suffix: !profile.has_suffix(),
        };

        debug!(%amount, %stored, amount_is_tax_free, "Created price");

        Self {
            profile,
            amount: stored,
            flags,
        }
    }

    /// Create a new price, rejecting amounts whose derived values overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::AmountOutOfRange`] if the stored, tax-included or
    /// tax value of `amount` does not fit in a [`Decimal`].
    pub fn try_new(
        profile: RegionProfile,
        amount: Decimal,
        amount_is_tax_free: bool,
    ) -> Result<Self, PriceError> {
        let stored = if amount_is_tax_free {
            Some(amount)
        } else {
            amount
                .checked_mul(profile.tax_rate)
                .map(|v| v / Decimal::ONE_HUNDRED)
        };
        let fits = stored.is_some_and(|stored| {
            stored
                .checked_mul(Decimal::ONE + profile.tax_rate)
                .and(stored.checked_mul(profile.tax_rate))
                .is_some()
        });
        if !fits {
            return Err(PriceError::AmountOutOfRange(amount));
        }
        Ok(Self::new(profile, amount, amount_is_tax_free))
    }

    /// Create a new price from a floating-point amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::InvalidAmount`] if `amount` is not finite, does
    /// not fit in a [`Decimal`], or has derived values that do not fit.
    pub fn try_from_f64(
        profile: RegionProfile,
        amount: f64,
        amount_is_tax_free: bool,
    ) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::InvalidAmount(amount));
        }
        let value = Decimal::from_f64(amount).ok_or(PriceError::InvalidAmount(amount))?;
        Self::try_new(profile, value, amount_is_tax_free)
            .map_err(|_| PriceError::InvalidAmount(amount))
    }

    /// Create a price with the [French profile](RegionProfile::FRANCE).
    #[must_use]
    pub fn france(amount: Decimal, amount_is_tax_free: bool) -> Self {
        Self::new(RegionProfile::FRANCE, amount, amount_is_tax_free)
    }

    /// Update the display flags. Flags absent from `options` are unchanged.
    pub fn configure(&mut self, options: &DisplayOptions) -> &mut Self {
        self.flags.apply(options);
        trace!(flags = ?self.flags, "Configured price display");
        self
    }

    /// Consuming variant of [`configure`](Self::configure).
    #[must_use]
    pub fn with_options(mut self, options: &DisplayOptions) -> Self {
        self.configure(options);
        self
    }

    /// The regional profile this price is displayed in.
    #[must_use]
    pub const fn profile(&self) -> &RegionProfile {
        &self.profile
    }

    /// The current display flags.
    #[must_use]
    pub const fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// The stored tax-free amount.
    #[must_use]
    pub const fn tax_free_value(&self) -> Decimal {
        self.amount
    }

    /// `amount * (1 + tax_rate)`, unrounded. Saturates on overflow.
    #[must_use]
    pub fn tax_included_value(&self) -> Decimal {
        self.amount.saturating_mul(Decimal::ONE + self.profile.tax_rate)
    }

    /// `amount * tax_rate`, unrounded. Saturates on overflow.
    #[must_use]
    pub fn tax_value(&self) -> Decimal {
        self.amount.saturating_mul(self.profile.tax_rate)
    }

    /// The formatted tax-free price, with its suffix unless hidden.
    #[must_use]
    pub fn tax_free_price(&self) -> String {
        self.with_suffix(self.format(self.tax_free_value()), self.profile.tax_free_suffix)
    }

    /// The formatted tax-included price, with its suffix unless hidden.
    #[must_use]
    pub fn tax_included_price(&self) -> String {
        self.with_suffix(
            self.format(self.tax_included_value()),
            self.profile.tax_included_suffix,
        )
    }

    /// The formatted tax amount. Never has a suffix.
    #[must_use]
    pub fn tax_amount(&self) -> String {
        self.format(self.tax_value())
    }

    /// All three formatted views.
    #[must_use]
    pub fn summary(&self) -> PriceSummary {
        PriceSummary {
            tax_free: self.tax_free_price(),
            tax_included: self.tax_included_price(),
            tax: self.tax_amount(),
        }
    }

    fn format(&self, value: Decimal) -> String {
        let number = self.profile.number_format();

        let mut out = if !self.flags.hide_cents && self.profile.decimals > 0 {
            let parts = number.parts(value);
            if self.flags.hide_cents_when_whole && parts.is_whole() {
                parts.integral
            } else {
                number.join(&parts)
            }
        } else {
            NumberFormat {
                decimals: 0,
                ..number
            }
            .format(value)
        };

        if !self.flags.hide_currency && self.profile.has_currency() {
            out.push(' ');
            out.push_str(self.profile.currency_symbol);
        }

        out
    }

    fn with_suffix(&self, mut formatted: String, suffix: &str) -> String {
        if !self.flags.hide_suffix && !suffix.is_empty() {
            formatted.push(' ');
            formatted.push_str(suffix);
        }
        formatted
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tax_free_price())
    }
}
