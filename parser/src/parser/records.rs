//! Record parsers for the `People`, `Computer` and `Computer-People` sections.
//!
//! Each parser turns one data line into one record, or returns `None` when
//! the line does not have the expected shape. Unrecognized lines are the
//! caller's concern; nothing here fails.

use regex::Regex;
use std::sync::LazyLock;

use format1_core::{Computer, Inventory, Person, Relation};

use super::normalize::{parse_size, split_first_token, trim, unquote};

static PATTERNS: LazyLock<RecordPatterns> = LazyLock::new(RecordPatterns::new);

struct RecordPatterns {
    computer_line: Regex,
    quoted_cpu: Regex,
}

impl RecordPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            // 12 "Intel Core i7" 16GB 1TB 256GB
            computer_line: Regex::new(r"^\s*([0-9]+)\s+(.*)$").expect("static regex must compile"),
            // "Intel Core i7" 16GB ...
            quoted_cpu: Regex::new(r#"^"([^"]*)"\s+(.+)$"#).expect("static regex must compile"),
        }
    }
}

/// Parses a person line: `<id> <name>`, where the name may be quoted or empty.
pub fn parse_person(line: &str) -> Option<Person> {
    let (id, rest) = split_first_token(line)?;
    Some(Person::new(id, unquote(trim(rest))))
}

/// Parses a computer line: `<digits> <cpu> [ram] [hdd] [ssd]`.
///
/// The CPU may be double-quoted to carry spaces. Missing sizes stay empty.
pub fn parse_computer(line: &str) -> Option<Computer> {
    let caps = PATTERNS.computer_line.captures(line)?;
    let id = caps.get(1).map_or("", |m| m.as_str());
    let payload = trim(caps.get(2).map_or("", |m| m.as_str()));

    let (cpu, remainder) = match PATTERNS.quoted_cpu.captures(payload) {
        Some(quoted) => (
            quoted.get(1).map_or("", |m| m.as_str()),
            quoted.get(2).map_or("", |m| m.as_str()),
        ),
        None => split_first_token(payload).unwrap_or(("", "")),
    };

    let mut sizes = trim(remainder).split_whitespace().map(parse_size);
    let ram = sizes.next().unwrap_or_default();
    let hdd = sizes.next().unwrap_or_default();
    let ssd = sizes.next().unwrap_or_default();

    Some(Computer::new(id, cpu).with_sizes(ram, hdd, ssd))
}

/// Parses a relation line: `<computer id> <person id>`.
pub fn parse_relation(line: &str) -> Option<Relation> {
    let mut tokens = line.split_whitespace();
    let computer = tokens.next()?;
    let person = tokens.next()?;
    Some(Relation::new(computer, person))
}

pub(super) fn apply_person(line: &str, inventory: &mut Inventory) -> bool {
    let Some(person) = parse_person(line) else {
        return false;
    };
    inventory.add_person(person);
    true
}

pub(super) fn apply_computer(line: &str, inventory: &mut Inventory) -> bool {
    let Some(computer) = parse_computer(line) else {
        return false;
    };
    inventory.add_computer(computer);
    true
}

pub(super) fn apply_relation(line: &str, inventory: &mut Inventory) -> bool {
    let Some(relation) = parse_relation(line) else {
        return false;
    };
    inventory.add_relation(relation);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_with_quoted_name() {
        let person = parse_person("3   \"Mary Ann\"  ").unwrap();
        assert_eq!(person.id, "3");
        assert_eq!(person.name, "Mary Ann");
    }

    #[test]
    fn test_person_without_name_keeps_empty_name() {
        let person = parse_person("4").unwrap();
        assert_eq!(person.id, "4");
        assert_eq!(person.name, "");
        assert_eq!(person.display_name(), "(no name)");
    }

    #[test]
    fn test_person_id_need_not_be_numeric() {
        let person = parse_person("emp-7 Bob Stone").unwrap();
        assert_eq!(person.id, "emp-7");
        assert_eq!(person.name, "Bob Stone");
    }

    #[test]
    fn test_computer_with_quoted_cpu() {
        let computer = parse_computer("1 \"Intel i7\" 16GB 512GB 0").unwrap();
        assert_eq!(
            computer,
            Computer::new("1", "Intel i7").with_sizes("16GB", "512GB", "0")
        );
    }

    #[test]
    fn test_computer_with_bare_cpu_and_missing_sizes() {
        let computer = parse_computer("  22 Ryzen 8 gb").unwrap();
        assert_eq!(computer.id, "22");
        assert_eq!(computer.cpu, "Ryzen");
        assert_eq!(computer.ram, "8");
        assert_eq!(computer.hdd, "gb");
        assert_eq!(computer.ssd, "");
    }

    #[test]
    fn test_computer_extra_tokens_are_ignored() {
        let computer = parse_computer("5 ARM 1GB 2GB 3GB 4GB").unwrap();
        assert_eq!(computer.ssd, "3GB");
    }

    #[test]
    fn test_computer_quoted_cpu_needs_trailing_fields() {
        // Without fields after the quotes the first token is taken verbatim.
        let computer = parse_computer("6 \"Intel i7\"").unwrap();
        assert_eq!(computer.cpu, "\"Intel");
        assert_eq!(computer.ram, "i7\"");
    }

    #[test]
    fn test_computer_rejects_non_numeric_id() {
        assert!(parse_computer("X 1 2 3").is_none());
        assert!(parse_computer("12").is_none());
    }

    #[test]
    fn test_relation_needs_two_tokens() {
        assert_eq!(parse_relation("1 2"), Some(Relation::new("1", "2")));
        assert_eq!(parse_relation(" 3\t4 extra"), Some(Relation::new("3", "4")));
        assert!(parse_relation("5").is_none());
    }

    #[test]
    fn test_apply_computer_does_not_count_skipped_lines() {
        let mut inventory = Inventory::new();
        assert!(!apply_computer("X 1 2 3", &mut inventory));
        assert_eq!(inventory.counts.computers.actual, 0);
        assert!(apply_computer("1 cpu", &mut inventory));
        assert_eq!(inventory.counts.computers.actual, 1);
    }
}
