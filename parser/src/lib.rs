//! FORMAT-1 inventory parsing and reporting.
//!
//! This crate reads the line-oriented FORMAT-1 layout (a `Version` and
//! `Comment` line followed by `People`, `Computer` and `Computer-People`
//! sections) into a [`format1_core::Inventory`] and renders the ownership
//! report.
//!
//! # Main entry points
//!
//! - [`parse_inventory`] — parse text into an inventory.
//! - [`parse_inventory_with_diagnostics`] — same, plus a record of every line
//!   that was dropped.
//! - [`parse_file`] — read a file and parse it.
//! - [`report::render_report`] — render the text report.
//! - [`strict_check`] — opt-in validation of declared counts, relation
//!   targets and dropped lines.
//!
//! Parsing is lenient: lines that do not fit their section are skipped and
//! never turned into errors unless [`strict_check`] is called.
//!
//! # Example
//!
//! ```
//! use format1_parser::{parse_inventory, report::render_report};
//!
//! let text = "\
//! Version 1.0
//! People 1
//! 1 Alice
//! Computer 1
//! 1 \"Intel i7\" 16GB 512GB 0
//! Computer-People 1
//! 1 1
//! ";
//!
//! let inventory = parse_inventory(text);
//! let report = render_report(&inventory);
//! assert!(report.contains("- Person(name='Alice', tag='1')"));
//! assert!(report.contains(
//!     "  - Computer(tag='1', CPU='Intel i7', RAM='16GB', HDD='512GB', SSD='0')"
//! ));
//! assert!(report.contains("Unowned computers:\n  (none)\n"));
//! ```

pub mod error;
pub mod output;
pub mod parser;
pub mod report;

use std::fs;
use std::path::Path;

use format1_core::{Inventory, validate_inventory};
use tracing::{debug, warn};

pub use error::{Format1Error, Result};
pub use parser::{InventoryParser, ParseDiagnostics, ParseRun};

/// Parses FORMAT-1 text into an inventory.
pub fn parse_inventory(text: &str) -> Inventory {
    parse_inventory_with_diagnostics(text).inventory
}

/// Parses FORMAT-1 text, keeping the diagnostics of dropped lines.
///
/// # Examples
///
/// ```
/// use format1_parser::parse_inventory_with_diagnostics;
///
/// let run = parse_inventory_with_diagnostics("Computer 1\nX 1 2 3\n");
/// assert_eq!(run.inventory.computers().count(), 0);
/// assert_eq!(run.diagnostics.skipped_lines.len(), 1);
/// ```
pub fn parse_inventory_with_diagnostics(text: &str) -> ParseRun {
    InventoryParser::new().parse(text)
}

/// Reads and parses a FORMAT-1 file.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Errors
///
/// Returns [`Format1Error::Read`] if the file cannot be read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseRun> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Format1Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    Ok(parse_inventory_with_diagnostics(&String::from_utf8_lossy(&bytes)))
}

/// Checks a parse run for anything the lenient parser let through.
///
/// Collects declared-count mismatches, relations to undeclared computers or
/// people, and every dropped line.
///
/// # Errors
///
/// Returns [`Format1Error::Strict`] listing every problem found.
pub fn strict_check(run: &ParseRun) -> Result<()> {
    let mut problems: Vec<String> = validate_inventory(&run.inventory)
        .iter()
        .map(ToString::to_string)
        .collect();
    problems.extend(run.diagnostics.skipped_lines.iter().map(|line| line.describe()));

    if problems.is_empty() {
        return Ok(());
    }
    for problem in &problems {
        warn!("{problem}");
    }
    Err(Format1Error::Strict(problems))
}
