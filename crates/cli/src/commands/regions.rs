//! Lists supported regions and their constants.

use pricetag_core::{Region, RegionProfile};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RegionEntry {
    region: Region,
    #[serde(flatten)]
    profile: RegionProfile,
}

/// Render the region list.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(json: bool) -> Result<Vec<String>, serde_json::Error> {
    if json {
        let entries: Vec<RegionEntry> = Region::ALL
            .iter()
            .map(|&region| RegionEntry {
                region,
                profile: region.profile(),
            })
            .collect();
        return Ok(vec![serde_json::to_string_pretty(&entries)?]);
    }

    Ok(Region::ALL
        .iter()
        .map(|region| {
            let p = region.profile();
            format!(
                "{region}: tax rate {}, {} decimals, decimal separator {:?}, thousands separator {:?}, currency {:?}, suffixes {:?}/{:?}",
                p.tax_rate,
                p.decimals,
                p.decimal_separator,
                p.thousands_separator,
                p.currency_symbol,
                p.tax_free_suffix,
                p.tax_included_suffix,
            )
        })
        .collect())
}

/// Run the regions command, writing to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::print_stdout)]
pub fn run(json: bool) -> Result<(), serde_json::Error> {
    for line in render(json)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let lines = render(false).unwrap();
        assert_eq!(lines.len(), Region::ALL.len());
        assert!(lines[0].starts_with("france: tax rate 0.2, 2 decimals"));
        assert!(lines[0].contains("\"HT\"/\"TTC\""));
    }

    #[test]
    fn test_render_json() {
        let lines = render(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value[0]["region"], "france");
        assert_eq!(value[0]["tax_rate"], "0.2");
        assert_eq!(value[0]["currency_symbol"], "€");
    }
}
