//! Core inventory types for FORMAT-1 files.
//!
//! This crate defines the model that a FORMAT-1 parser fills in and a report
//! renderer reads back:
//!
//! - [`Inventory`] — the per-run parse context holding everything below.
//! - [`FileMetadata`] — optional `Version` and `Comment` values.
//! - [`Person`] — an identifier and a possibly empty display name.
//! - [`Computer`] — CPU, RAM/HDD/SSD sizes and an optional owner.
//! - [`Relation`] — a computer → person ownership record.
//!
//! Strict checks ([`validate_inventory`]) report declared-count mismatches
//! and relations that point at undeclared ids. Nothing in this crate rejects
//! input on its own.
//!
//! # Example
//!
//! ```
//! use format1_core::*;
//!
//! let mut inventory = Inventory::new();
//! inventory.set_version("1.0");
//! inventory.add_person(Person::new("1", "Alice"));
//! inventory.add_computer(Computer::new("1", "Intel i7").with_sizes("16GB", "512GB", "0"));
//! inventory.add_relation(Relation::new("1", "1"));
//!
//! assert_eq!(inventory.metadata.version.as_deref(), Some("1.0"));
//! assert!(inventory.computer("1").unwrap().is_owned_by("1"));
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{ValidationError, validate_inventory};
