//! Integration tests for Pricetag.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pricetag-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `france_pricing` - Formatting under the French profile
//! - `custom_profiles` - Profiles without decimals, currency or suffixes
//! - `display_config` - Display configuration loaded from JSON

use std::str::FromStr;

use pricetag_core::RegionProfile;
use rust_decimal::Decimal;

/// Parse a decimal literal.
///
/// # Panics
///
/// Panics if `s` is not a valid decimal.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A profile without decimals or suffix labels.
#[must_use]
pub const fn yen_like() -> RegionProfile {
    RegionProfile {
        tax_rate: Decimal::from_parts(1, 0, 0, false, 1),
        decimals: 0,
        decimal_separator: ".",
        thousands_separator: ",",
        currency_symbol: "¥",
        tax_free_suffix: "",
        tax_included_suffix: "",
    }
}

/// A profile with no currency symbol.
#[must_use]
pub const fn symbol_free() -> RegionProfile {
    RegionProfile {
        currency_symbol: "",
        ..RegionProfile::FRANCE
    }
}
