//! Line classifier and section state machine for FORMAT-1 files.
//!
//! A FORMAT-1 file is read strictly line by line. Each line is first checked
//! against the header keywords, which either set file metadata (`Version`,
//! `Comment`) or switch the current [`Section`] (`People`, `Computer`,
//! `Computer-People`). Every other line is handed to the record handler
//! registered for the current section; before the first section header there
//! is no handler and the line is dropped.
//!
//! Blank lines are ignored in every state, ahead of all other rules.
//!
//! The primary entry point is [`InventoryParser::new`] followed by
//! [`InventoryParser::parse`], but most consumers should use the higher-level
//! [`parse_inventory`](crate::parse_inventory) function instead.

mod diagnostics;
mod normalize;
mod records;

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use format1_core::{Inventory, Section};

pub use diagnostics::{ParseDiagnostics, SkipReason, SkippedLine};
pub use normalize::{parse_size, trim, unquote};
pub use records::{parse_computer, parse_person, parse_relation};

/// Handler that turns one data line into a record. Returns `false` when the
/// line was not recognized.
type RecordHandler = fn(&str, &mut Inventory) -> bool;

/// Section -> record handler dispatch table. [`Section::None`] has no entry.
const HANDLERS: &[(Section, RecordHandler)] = &[
    (Section::People, records::apply_person),
    (Section::Computer, records::apply_computer),
    (Section::Relations, records::apply_relation),
];

fn handler_for(section: Section) -> Option<RecordHandler> {
    HANDLERS
        .iter()
        .find(|(candidate, _)| *candidate == section)
        .map(|(_, handler)| *handler)
}

/// Header keyword at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    Version,
    Comment,
    Section(Section),
}

static PATTERNS: LazyLock<HeaderPatterns> = LazyLock::new(HeaderPatterns::new);

struct HeaderPatterns {
    header: Regex,
}

impl HeaderPatterns {
    fn new() -> Self {
        Self {
            // Keywords are case-sensitive and must start the line. A bare keyword
            // with nothing after it is not a header.
            header: Regex::new(r"^(Version|Comment|People|Computer-People|Computer)\s+(.*)$")
                .expect("static regex must compile"),
        }
    }
}

/// Classifies a header line, returning the header and its trailing text.
fn classify_header(line: &str) -> Option<(Header, &str)> {
    let caps = PATTERNS.header.captures(line)?;
    let header = match caps.get(1)?.as_str() {
        "Version" => Header::Version,
        "Comment" => Header::Comment,
        "People" => Header::Section(Section::People),
        "Computer" => Header::Section(Section::Computer),
        "Computer-People" => Header::Section(Section::Relations),
        _ => return None,
    };
    let rest = caps.get(2).map_or("", |m| m.as_str());
    Some((header, rest))
}

/// Output of a parse run.
#[derive(Debug, Clone, Default)]
pub struct ParseRun {
    pub inventory: Inventory,
    pub diagnostics: ParseDiagnostics,
}

/// Single-pass parser for FORMAT-1 text.
#[derive(Debug, Default)]
pub struct InventoryParser {
    section: Section,
    line_number: usize,
    inventory: Inventory,
    diagnostics: ParseDiagnostics,
}

impl InventoryParser {
    /// Creates a parser in the initial [`Section::None`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current section.
    pub fn section(&self) -> Section {
        self.section
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }

    /// Feeds every line of `text` and returns the finished run.
    pub fn parse(mut self, text: &str) -> ParseRun {
        for line in text.lines() {
            self.feed_line(line);
        }
        self.finish()
    }

    /// Processes one input line.
    pub fn feed_line(&mut self, line: &str) {
        self.line_number += 1;
        self.diagnostics.total_lines += 1;

        if line.trim().is_empty() {
            self.diagnostics.blank_lines += 1;
            return;
        }

        if let Some((header, rest)) = classify_header(line) {
            self.diagnostics.header_lines += 1;
            self.apply_header(header, rest);
            return;
        }

        let Some(handler) = handler_for(self.section) else {
            debug!(line = self.line_number, "dropping line outside any section");
            self.skip(line, SkipReason::NoSection);
            return;
        };

        if handler(line, &mut self.inventory) {
            self.diagnostics.recognized_lines += 1;
        } else {
            debug!(
                line = self.line_number,
                section = %self.section,
                "dropping unrecognized record"
            );
            self.skip(line, SkipReason::Unrecognized);
        }
    }

    /// Consumes the parser once input is exhausted.
    pub fn finish(self) -> ParseRun {
        debug!(
            persons = self.inventory.persons().count(),
            computers = self.inventory.computers().count(),
            relations = self.inventory.relations().len(),
            skipped = self.diagnostics.skipped_lines.len(),
            "parse finished"
        );
        ParseRun {
            inventory: self.inventory,
            diagnostics: self.diagnostics,
        }
    }

    fn apply_header(&mut self, header: Header, rest: &str) {
        match header {
            Header::Version => self.inventory.set_version(trim(rest)),
            Header::Comment => self.inventory.set_comment(trim(rest)),
            Header::Section(section) => {
                let declared = rest.split_whitespace().next().map(str::to_string);
                debug!(
                    line = self.line_number,
                    from = %self.section,
                    to = %section,
                    declared = declared.as_deref().unwrap_or(""),
                    "entering section"
                );
                self.section = section;
                self.inventory.begin_section(section, declared);
            }
        }
    }

    fn skip(&mut self, line: &str, reason: SkipReason) {
        self.diagnostics.skipped_lines.push(SkippedLine {
            line_number: self.line_number,
            section: self.section,
            reason,
            text: line.to_string(),
        });
    }
}
