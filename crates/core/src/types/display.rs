//! Display flags controlling how a [`Price`](super::Price) is rendered.

use serde::{Deserialize, Serialize};

/// Current display flags of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFlags {
    /// Render without fractional digits.
    pub hide_cents: bool,
    /// Drop the fractional digits only when they are all zero.
    pub hide_cents_when_whole: bool,
    /// Omit the currency symbol.
    pub hide_currency: bool,
    /// Omit the tax suffix label.
    pub hide_suffix: bool,
}

/// A partial update of [`DisplayFlags`].
///
/// Fields left as `None` keep their current value. Deserializing from a map
/// ignores unknown keys, so untrusted configuration can be passed through.
///
/// ```
/// use pricetag_core::{DisplayOptions, Price};
/// use rust_decimal::Decimal;
///
/// let mut price = Price::france(Decimal::from(100), true);
/// price.configure(&DisplayOptions::new().hide_suffix(true));
/// assert_eq!(price.tax_free_price(), "100,00 €");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_cents: Option<bool>,
    #[serde(alias = "hideCentsWhenEmpty", skip_serializing_if = "Option::is_none")]
    pub hide_cents_when_whole: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_currency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_suffix: Option<bool>,
}

impl DisplayOptions {
    /// An empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hide_cents: None,
            hide_cents_when_whole: None,
            hide_currency: None,
            hide_suffix: None,
        }
    }

    #[must_use]
    pub const fn hide_cents(mut self, hide: bool) -> Self {
        self.hide_cents = Some(hide);
        self
    }

    #[must_use]
    pub const fn hide_cents_when_whole(mut self, hide: bool) -> Self {
        self.hide_cents_when_whole = Some(hide);
        self
    }

    #[must_use]
    pub const fn hide_currency(mut self, hide: bool) -> Self {
        self.hide_currency = Some(hide);
        self
    }

    #[must_use]
    pub const fn hide_suffix(mut self, hide: bool) -> Self {
        self.hide_suffix = Some(hide);
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hide_cents.is_none()
            && self.hide_cents_when_whole.is_none()
            && self.hide_currency.is_none()
            && self.hide_suffix.is_none()
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            hide_cents: or(other.hide_cents, self.hide_cents),
            hide_cents_when_whole: or(other.hide_cents_when_whole, self.hide_cents_when_whole),
            hide_currency: or(other.hide_currency, self.hide_currency),
            hide_suffix: or(other.hide_suffix, self.hide_suffix),
        }
    }
}

// `Option::or` is not const.
const fn or(a: Option<bool>, b: Option<bool>) -> Option<bool> {
    match a {
        Some(_) => a,
        None => b,
    }
}

impl DisplayFlags {
    /// Apply a partial update in place.
    pub const fn apply(&mut self, options: &DisplayOptions) {
        if let Some(hide) = options.hide_cents {
            self.hide_cents = hide;
        }
        if let Some(hide) = options.hide_cents_when_whole {
            self.hide_cents_when_whole = hide;
        }
        if let Some(hide) = options.hide_currency {
            self.hide_currency = hide;
        }
        if let Some(hide) = options.hide_suffix {
            self.hide_suffix = hide;
        }
    }
}
