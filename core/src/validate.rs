//! Strict-mode inventory validation.
//!
//! Parsing is lenient: declared counts are informational and relations may
//! name identifiers that were never declared. These checks surface such
//! irregularities for callers that opt into strict handling. They never
//! alter the inventory.
//!
//! # Examples
//!
//! ```
//! use format1_core::*;
//!
//! let mut inventory = Inventory::new();
//! inventory.begin_section(Section::People, Some("1".into()));
//! inventory.add_person(Person::new("1", "Alice"));
//! assert!(validate_inventory(&inventory).is_empty());
//!
//! inventory.add_relation(Relation::new("3", "1"));
//! let errors = validate_inventory(&inventory);
//! assert!(errors.iter().any(|e| matches!(e, ValidationError::DanglingComputer(_))));
//! ```

use thiserror::Error;

use crate::{Inventory, Section};

/// Inventory validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The header's declared count differs from the records parsed after it.
    #[error("{section} section declares {declared} record(s) but {actual} were parsed")]
    CountMismatch {
        section: Section,
        declared: usize,
        actual: usize,
    },
    /// The header's count field is missing or not a number.
    #[error("{section} section has an invalid declared count: {token:?}")]
    InvalidDeclaredCount { section: Section, token: String },
    /// A relation names a computer that was never declared.
    #[error("relation references undeclared computer: {0}")]
    DanglingComputer(String),
    /// A relation names a person that was never declared.
    #[error("computer {computer} is owned by undeclared person: {person}")]
    DanglingPerson { computer: String, person: String },
}

/// Validates declared section counts and relation targets.
///
/// Sections whose header never appeared are not checked.
pub fn validate_inventory(inventory: &Inventory) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for section in [Section::People, Section::Computer, Section::Relations] {
        let Some(count) = inventory.counts.get(section) else {
            continue;
        };
        if !count.seen {
            continue;
        }
        let token = count.declared.clone().unwrap_or_default();
        match token.parse::<usize>() {
            Ok(declared) if declared != count.actual => {
                errors.push(ValidationError::CountMismatch {
                    section,
                    declared,
                    actual: count.actual,
                });
            }
            Ok(_) => {}
            Err(_) => errors.push(ValidationError::InvalidDeclaredCount { section, token }),
        }
    }

    for relation in inventory.relations() {
        if inventory.computer(&relation.computer).is_none() {
            errors.push(ValidationError::DanglingComputer(relation.computer.clone()));
        }
        if inventory.person(&relation.person).is_none() {
            errors.push(ValidationError::DanglingPerson {
                computer: relation.computer.clone(),
                person: relation.person.clone(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::{Computer, Person, Relation};

    use super::*;

    #[test]
    fn test_validate_reports_count_mismatch() {
        let mut inventory = Inventory::new();
        inventory.begin_section(Section::Computer, Some("3".to_string()));
        inventory.add_computer(Computer::new("1", "Intel"));

        let errors = validate_inventory(&inventory);
        assert_eq!(
            errors,
            vec![ValidationError::CountMismatch {
                section: Section::Computer,
                declared: 3,
                actual: 1,
            }]
        );
    }

    #[test]
    fn test_validate_reports_invalid_declared_count() {
        let mut inventory = Inventory::new();
        inventory.begin_section(Section::Relations, Some("many".to_string()));

        let errors = validate_inventory(&inventory);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidDeclaredCount {
                section: Section::Relations,
                token: "many".to_string(),
            }]
        );
    }

    #[test]
    fn test_validate_reports_dangling_person() {
        let mut inventory = Inventory::new();
        inventory.begin_section(Section::Computer, Some("1".to_string()));
        inventory.add_computer(Computer::new("1", "Intel"));
        inventory.begin_section(Section::Relations, Some("1".to_string()));
        inventory.add_relation(Relation::new("1", "7"));

        let errors = validate_inventory(&inventory);
        assert_eq!(
            errors,
            vec![ValidationError::DanglingPerson {
                computer: "1".to_string(),
                person: "7".to_string(),
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "computer 1 is owned by undeclared person: 7"
        );
    }

    #[test]
    fn test_validate_accepts_consistent_inventory() {
        let mut inventory = Inventory::new();
        inventory.begin_section(Section::People, Some("1".to_string()));
        inventory.add_person(Person::new("1", "Alice"));
        inventory.begin_section(Section::Computer, Some("1".to_string()));
        inventory.add_computer(Computer::new("1", "Intel"));
        inventory.begin_section(Section::Relations, Some("1".to_string()));
        inventory.add_relation(Relation::new("1", "1"));

        assert!(validate_inventory(&inventory).is_empty());
    }
}
