//! Pricetag Core - Regional price formatting.
//!
//! This crate renders a monetary amount under a region's tax and display
//! rules:
//! - tax-free, tax-included and tax-only views of one stored amount
//! - decimal and thousands separators, currency symbol, tax suffix labels
//! - display flags for hiding cents, currency and suffixes
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no global state. A
//! [`Price`] is a plain value built from a [`RegionProfile`]; adding a region
//! means adding a profile constant and a [`Region`] variant.
//!
//! # Modules
//!
//! - [`types`] - Prices, regional profiles, display flags and number formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
