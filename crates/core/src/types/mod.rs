//! Core types for Pricetag.
//!
//! This module provides the price formatting engine and its regional
//! configuration.

pub mod display;
pub mod number;
pub mod price;
pub mod region;

pub use display::{DisplayFlags, DisplayOptions};
pub use number::{NumberFormat, NumberParts};
pub use price::{Price, PriceError, PriceSummary};
pub use region::{Region, RegionError, RegionProfile};
