//! Regional price profiles.
//!
//! A [`RegionProfile`] bundles the tax rate and display constants of one
//! currency/tax regime. Supported regions are enumerated by [`Region`].

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::number::NumberFormat;
use super::price::{Price, PriceError};

/// Errors that can occur when parsing a [`Region`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The name does not match any supported region.
    #[error("unknown region: {0}")]
    Unknown(String),
}

/// Tax and formatting constants for one region.
///
/// Profiles are fixed once a [`Price`] is built from them. An empty
/// `currency_symbol` means prices never show a currency; empty suffix labels
/// mean prices never show a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionProfile {
    /// Fractional tax rate (e.g. `0.2` for 20%).
    pub tax_rate: Decimal,
    /// Number of fractional digits to render.
    pub decimals: u32,
    /// Separator between integral and fractional digits.
    pub decimal_separator: &'static str,
    /// Separator between groups of thousands.
    pub thousands_separator: &'static str,
    /// Currency symbol appended after the amount.
    pub currency_symbol: &'static str,
    /// Label appended to tax-free prices.
    pub tax_free_suffix: &'static str,
    /// Label appended to tax-included prices.
    pub tax_included_suffix: &'static str,
}

impl RegionProfile {
    /// France: 20% VAT, `1 234,56 €`, `HT` / `TTC` suffixes.
    pub const FRANCE: Self = Self {
        tax_rate: Decimal::from_parts(2, 0, 0, false, 1),
        decimals: 2,
        decimal_separator: ",",
        thousands_separator: " ",
        currency_symbol: "€",
        tax_free_suffix: "HT",
        tax_included_suffix: "TTC",
    };

    /// Number format derived from this profile's precision and separators.
    #[must_use]
    pub const fn number_format(&self) -> NumberFormat<'static> {
        NumberFormat {
            decimals: self.decimals,
            decimal_separator: self.decimal_separator,
            thousands_separator: self.thousands_separator,
        }
    }

    /// Returns `true` if the profile has a currency symbol to display.
    #[must_use]
    pub const fn has_currency(&self) -> bool {
        !self.currency_symbol.is_empty()
    }

    /// Returns `true` if at least one suffix label is set.
    #[must_use]
    pub const fn has_suffix(&self) -> bool {
        !self.tax_free_suffix.is_empty() || !self.tax_included_suffix.is_empty()
    }
}

/// Supported regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    France,
}

impl Region {
    /// Every supported region, in display order.
    pub const ALL: &'static [Self] = &[Self::France];

    /// The constants for this region.
    #[must_use]
    pub const fn profile(self) -> RegionProfile {
        match self {
            Self::France => RegionProfile::FRANCE,
        }
    }

    /// Build a price in this region.
    ///
    /// See [`Price::new`] for the meaning of `amount_is_tax_free`.
    #[must_use]
    pub fn price(self, amount: Decimal, amount_is_tax_free: bool) -> Price {
        Price::new(self.profile(), amount, amount_is_tax_free)
    }

    /// Build a price in this region, rejecting amounts that overflow.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::AmountOutOfRange`], see [`Price::try_new`].
    pub fn try_price(
        self,
        amount: Decimal,
        amount_is_tax_free: bool,
    ) -> Result<Price, PriceError> {
        Price::try_new(self.profile(), amount, amount_is_tax_free)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::France => write!(f, "france"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "france" | "fr" => Ok(Self::France),
            _ => Err(RegionError::Unknown(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_france_constants() {
        let fr = RegionProfile::FRANCE;
        assert_eq!(fr.tax_rate, Decimal::from_str("0.2").unwrap());
        assert_eq!(fr.decimals, 2);
        assert_eq!(fr.decimal_separator, ",");
        assert_eq!(fr.thousands_separator, " ");
        assert_eq!(fr.currency_symbol, "€");
        assert_eq!(fr.tax_free_suffix, "HT");
        assert_eq!(fr.tax_included_suffix, "TTC");
        assert!(fr.has_currency());
        assert!(fr.has_suffix());
    }

    #[test]
    fn test_has_suffix_with_one_label() {
        let profile = RegionProfile {
            tax_free_suffix: "",
            ..RegionProfile::FRANCE
        };
        assert!(profile.has_suffix());

        let bare = RegionProfile {
            tax_included_suffix: "",
            ..profile
        };
        assert!(!bare.has_suffix());
    }

    #[test]
    fn test_region_from_str() {
        assert_eq!(Region::from_str("france").unwrap(), Region::France);
        assert_eq!(Region::from_str("FR").unwrap(), Region::France);
        assert_eq!(
            Region::from_str("atlantis"),
            Err(RegionError::Unknown("atlantis".to_owned()))
        );
    }

    #[test]
    fn test_region_display_roundtrip() {
        for region in Region::ALL {
            assert_eq!(Region::from_str(&region.to_string()).unwrap(), *region);
        }
    }

    #[test]
    fn test_region_serde() {
        let json = serde_json::to_string(&Region::France).unwrap();
        assert_eq!(json, "\"france\"");
        let parsed: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Region::France);
    }

    #[test]
    fn test_region_price_uses_profile() {
        let price = Region::France.price(Decimal::from(100), true);
        assert_eq!(price.profile(), &RegionProfile::FRANCE);
    }

    #[test]
    fn test_region_try_price() {
        assert!(Region::France.try_price(Decimal::from(100), true).is_ok());
        assert!(matches!(
            Region::France.try_price(Decimal::MAX, true),
            Err(PriceError::AmountOutOfRange(_))
        ));
    }
}
