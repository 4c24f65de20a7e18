//! Plain-text ownership report.
//!
//! The report lists each person with the computers they own, followed by the
//! computers no relation ever targeted. Computers always appear in
//! declaration order.

use std::fmt::Write as _;

use format1_core::{Computer, Inventory, NO_NAME_PLACEHOLDER};
use serde::{Deserialize, Serialize};

/// How the "People and their computers" section walks people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PersonOrder {
    /// Visit tags `1..=N`, where `N` is the number of people parsed after the
    /// latest `People` header, and look each tag up by identifier.
    #[default]
    Indexed,
    /// Visit people in the order they were declared, whatever their ids.
    Declared,
}

/// Rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub person_order: PersonOrder,
}

/// Renders the report with default options.
pub fn render_report(inventory: &Inventory) -> String {
    render_report_with(inventory, &ReportOptions::default())
}

/// Renders the report.
///
/// # Examples
///
/// ```
/// use format1_core::Inventory;
/// use format1_parser::report::{render_report_with, ReportOptions};
///
/// let out = render_report_with(&Inventory::new(), &ReportOptions::default());
/// assert!(out.contains("  (no people found)\n"));
/// assert!(out.ends_with("Unowned computers:\n  (none)\n\n"));
/// ```
pub fn render_report_with(inventory: &Inventory, options: &ReportOptions) -> String {
    let mut out = String::new();

    out.push_str("Report from FORMAT-1 file:\n");
    if let Some(version) = inventory.metadata.version.as_deref().filter(|v| !v.is_empty()) {
        let _ = writeln!(out, "Version: {version}");
    }
    if let Some(comment) = inventory.metadata.comment.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "Comment: {comment}");
    }
    out.push('\n');

    out.push_str("People and their computers:\n");
    let people = person_rows(inventory, options.person_order);
    if people.is_empty() {
        out.push_str("  (no people found)\n\n");
    }
    for (tag, name) in people {
        let _ = writeln!(out, "- Person(name='{name}', tag='{tag}')");
        let mut owns_any = false;
        for computer in inventory.computers_owned_by(&tag) {
            owns_any = true;
            let _ = writeln!(out, "  - {}", computer_line(computer));
        }
        if !owns_any {
            out.push_str("  (no computers)\n");
        }
        out.push('\n');
    }

    out.push_str("Unowned computers:\n");
    let mut any_unowned = false;
    for computer in inventory.unowned_computers() {
        any_unowned = true;
        let _ = writeln!(out, "- {}", computer_line(computer));
    }
    if !any_unowned {
        out.push_str("  (none)\n");
    }
    out.push('\n');

    out
}

/// Returns `(tag, display name)` pairs for the people section.
fn person_rows(inventory: &Inventory, order: PersonOrder) -> Vec<(String, String)> {
    match order {
        PersonOrder::Indexed => (1..=inventory.person_count())
            .map(|index| {
                let tag = index.to_string();
                let name = inventory
                    .person(&tag)
                    .map_or(NO_NAME_PLACEHOLDER, |person| person.display_name())
                    .to_string();
                (tag, name)
            })
            .collect(),
        PersonOrder::Declared => inventory
            .persons()
            .map(|person| (person.id.clone(), person.display_name().to_string()))
            .collect(),
    }
}

fn computer_line(computer: &Computer) -> String {
    format!(
        "Computer(tag='{}', CPU='{}', RAM='{}', HDD='{}', SSD='{}')",
        computer.id, computer.cpu, computer.ram, computer.hdd, computer.ssd
    )
}
