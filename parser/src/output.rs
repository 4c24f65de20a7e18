//! Output formatting for parsed inventories.

use format1_core::Inventory;

use crate::error::Result;
use crate::report::{ReportOptions, render_report_with};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// The human-readable ownership report.
    #[default]
    Text,
    Json,
    Yaml,
}

/// Formats an inventory in the requested output format.
///
/// `options` only affects [`OutputFormat::Text`].
pub fn format_inventory(
    inventory: &Inventory,
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_report_with(inventory, options)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(inventory)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(inventory)?),
    }
}
