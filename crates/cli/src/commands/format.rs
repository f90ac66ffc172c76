//! Price formatting command.
//!
//! # Usage
//!
//! ```bash
//! # Tax-free price with suffix
//! pricetag format 100
//!
//! # Every view, cents dropped when zero
//! pricetag format 1500 --view all --hide-cents-when-whole
//!
//! # Machine-readable output
//! pricetag format 19.99 --json
//! ```

use clap::{Args, ValueEnum};
use pricetag_core::{DisplayOptions, Price, PriceError, Region};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::config::CliConfig;

/// Errors that can occur while formatting a price.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The amount cannot be priced in the selected region.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// JSON output could not be produced.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which formatted view to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    /// Tax-free price (e.g. `100,00 € HT`)
    #[default]
    TaxFree,
    /// Tax-included price (e.g. `120,00 € TTC`)
    TaxIncluded,
    /// Tax amount (e.g. `20,00 €`)
    Tax,
    /// All three views
    All,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Amount to format
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Region whose tax and display rules apply
    #[arg(short, long)]
    pub region: Option<Region>,

    /// The amount includes tax and must be reduced to its tax-free base
    #[arg(long)]
    pub tax_included: bool,

    /// View to print
    #[arg(short, long, value_enum, default_value_t = View::TaxFree)]
    pub view: View,

    /// Render without cents
    #[arg(long, conflicts_with = "show_cents")]
    pub hide_cents: bool,

    /// Render cents even if the environment hides them
    #[arg(long)]
    pub show_cents: bool,

    /// Drop cents only when they are zero
    #[arg(long)]
    pub hide_cents_when_whole: bool,

    /// Omit the currency symbol
    #[arg(long)]
    pub hide_currency: bool,

    /// Omit the tax suffix
    #[arg(long)]
    pub hide_suffix: bool,

    /// Print all views as JSON
    #[arg(long)]
    pub json: bool,
}

impl FormatArgs {
    /// Display options requested on the command line. Flags not given stay unset.
    #[must_use]
    pub const fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            hide_cents: if self.hide_cents {
                Some(true)
            } else if self.show_cents {
                Some(false)
            } else {
                None
            },
            hide_cents_when_whole: flag(self.hide_cents_when_whole),
            hide_currency: flag(self.hide_currency),
            hide_suffix: flag(self.hide_suffix),
        }
    }
}

const fn flag(set: bool) -> Option<bool> {
    if set { Some(true) } else { None }
}

/// Build the price described by `args` on top of `config`.
///
/// # Errors
///
/// Returns an error if the amount's tax-included or tax value overflows.
pub fn build_price(args: &FormatArgs, config: &CliConfig) -> Result<Price, PriceError> {
    let region = args.region.unwrap_or(config.region);
    let options = config.display.merge(args.display_options());
    debug!(%region, ?options, "Formatting price");

    Ok(region
        .try_price(args.amount, !args.tax_included)?
        .with_options(&options))
}

/// Render the requested output as lines of text.
///
/// # Errors
///
/// Returns an error if the amount is out of range or JSON serialization fails.
pub fn render(args: &FormatArgs, config: &CliConfig) -> Result<Vec<String>, FormatError> {
    let price = build_price(args, config)?;

    if args.json {
        return Ok(vec![serde_json::to_string_pretty(&price.summary())?]);
    }

    Ok(match args.view {
        View::TaxFree => vec![price.tax_free_price()],
        View::TaxIncluded => vec![price.tax_included_price()],
        View::Tax => vec![price.tax_amount()],
        View::All => vec![
            price.tax_free_price(),
            price.tax_included_price(),
            price.tax_amount(),
        ],
    })
}

/// Run the format command, writing to stdout.
///
/// # Errors
///
/// Returns an error if the amount is out of range or JSON serialization fails.
#[allow(clippy::print_stdout)]
pub fn run(args: &FormatArgs, config: &CliConfig) -> Result<(), FormatError> {
    for line in render(args, config)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: FormatArgs,
    }

    fn parse(argv: &[&str]) -> FormatArgs {
        let mut full = vec!["pricetag"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_render_default_view() {
        let lines = render(&parse(&["100"]), &CliConfig::default()).unwrap();
        assert_eq!(lines, vec!["100,00 € HT"]);
    }

    #[test]
    fn test_render_all_views() {
        let args = parse(&["1500", "--view", "all", "--hide-cents-when-whole"]);
        let lines = render(&args, &CliConfig::default()).unwrap();
        assert_eq!(lines, vec!["1 500 € HT", "1 800 € TTC", "300 €"]);
    }

    #[test]
    fn test_render_json() {
        let args = parse(&["100", "--json", "--hide-suffix"]);
        let lines = render(&args, &CliConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["taxFree"], "100,00 €");
        assert_eq!(value["taxIncluded"], "120,00 €");
        assert_eq!(value["tax"], "20,00 €");
    }

    #[test]
    fn test_negative_amount() {
        let args = parse(&["-12.5", "--view", "tax"]);
        let lines = render(&args, &CliConfig::default()).unwrap();
        assert_eq!(lines, vec!["-2,50 €"]);
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = CliConfig {
            region: Region::France,
            display: DisplayOptions::new().hide_cents(true).hide_currency(true),
        };
        let price = build_price(&parse(&["10.4", "--show-cents"]), &config).unwrap();
        assert_eq!(price.tax_free_price(), "10,40 HT");
    }

    #[test]
    fn test_config_applies_without_flags() {
        let config = CliConfig {
            region: Region::France,
            display: DisplayOptions::new().hide_suffix(true),
        };
        let lines = render(&parse(&["7"]), &config).unwrap();
        assert_eq!(lines, vec!["7,00 €"]);
    }

    #[test]
    fn test_tax_included_flag() {
        let price =
            build_price(&parse(&["100", "--tax-included"]), &CliConfig::default()).unwrap();
        assert_eq!(price.tax_free_value(), Decimal::new(2, 1));
    }

    #[test]
    fn test_overflowing_amount_is_an_error() {
        let args = parse(&["70000000000000000000000000000", "--view", "tax-included"]);
        let err = render(&args, &CliConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            FormatError::Price(PriceError::AmountOutOfRange(_))
        ));
        assert_eq!(
            err.to_string(),
            "amount out of range: 70000000000000000000000000000"
        );
    }

    #[test]
    fn test_largest_amounts_render() {
        let args = parse(&["-60000000000000000000000000000", "--view", "all"]);
        let lines = render(&args, &CliConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec![
                "-60 000 000 000 000 000 000 000 000 000,00 € HT",
                "-72 000 000 000 000 000 000 000 000 000,00 € TTC",
                "-12 000 000 000 000 000 000 000 000 000,00 €",
            ]
        );
    }

    #[test]
    fn test_hide_and_show_cents_conflict() {
        let result = TestCli::try_parse_from(["pricetag", "1", "--hide-cents", "--show-cents"]);
        assert!(result.is_err());
    }
}
