//! Diagnostics for lines the parser read but did not turn into records.

use format1_core::Section;
use serde::Serialize;

/// Why a non-blank line produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The line came before any section header.
    NoSection,
    /// The line did not match the record shape of its section.
    Unrecognized,
}

/// A dropped input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// One-based line number.
    pub line_number: usize,
    pub section: Section,
    pub reason: SkipReason,
    pub text: String,
}

impl SkippedLine {
    pub fn describe(&self) -> String {
        match self.reason {
            SkipReason::NoSection => format!(
                "line {}: outside any section: {:?}",
                self.line_number, self.text
            ),
            SkipReason::Unrecognized => format!(
                "line {}: unrecognized {} record: {:?}",
                self.line_number, self.section, self.text
            ),
        }
    }
}

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseDiagnostics {
    pub total_lines: usize,
    pub blank_lines: usize,
    pub header_lines: usize,
    pub recognized_lines: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

impl ParseDiagnostics {
    /// Share of data lines (not blank, not headers) that became records.
    pub fn coverage(&self) -> f64 {
        let relevant = self.recognized_lines + self.skipped_lines.len();
        if relevant == 0 {
            return 1.0;
        }
        self.recognized_lines as f64 / relevant as f64
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let outside = self
            .skipped_lines
            .iter()
            .filter(|line| line.reason == SkipReason::NoSection)
            .count();
        if outside > 0 {
            warnings.push(format!("Ignored {outside} line(s) before the first section header"));
        }

        let unrecognized = self.skipped_lines.len() - outside;
        if unrecognized > 0 {
            warnings.push(format!("Skipped {unrecognized} unrecognized record line(s)"));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_counts_only_data_lines() {
        let diagnostics = ParseDiagnostics {
            total_lines: 10,
            blank_lines: 3,
            header_lines: 3,
            recognized_lines: 3,
            skipped_lines: vec![SkippedLine {
                line_number: 9,
                section: Section::Computer,
                reason: SkipReason::Unrecognized,
                text: "X 1 2 3".to_string(),
            }],
        };
        assert!((diagnostics.coverage() - 0.75).abs() < f64::EPSILON);
        assert_eq!(
            diagnostics.warnings(),
            vec!["Skipped 1 unrecognized record line(s)".to_string()]
        );
    }

    #[test]
    fn test_empty_diagnostics_have_no_warnings() {
        let diagnostics = ParseDiagnostics::default();
        assert_eq!(diagnostics.coverage(), 1.0);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_describe_names_section() {
        let line = SkippedLine {
            line_number: 4,
            section: Section::Relations,
            reason: SkipReason::Unrecognized,
            text: "7".to_string(),
        };
        assert_eq!(
            line.describe(),
            "line 4: unrecognized Computer-People record: \"7\""
        );
    }
}
