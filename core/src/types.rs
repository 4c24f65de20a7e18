//! Inventory type definitions for FORMAT-1 files.
//!
//! This module defines the in-memory model built while a FORMAT-1 file is
//! read: file metadata, people, computers and the ownership relations that
//! link them. Lookup tables are kept separate from the declaration-order id
//! lists so that reports can replay entities in the order they were first
//! seen.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder rendered for a person declared without a name.
pub const NO_NAME_PLACEHOLDER: &str = "(no name)";

/// Section of a FORMAT-1 file that governs how data lines are parsed.
///
/// # Examples
///
/// ```
/// use format1_core::Section;
///
/// assert_eq!(Section::default(), Section::None);
/// assert_eq!(Section::Relations.header(), Some("Computer-People"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Section {
    /// Before any section header has been seen.
    #[default]
    None,
    /// Lines after a `People <n>` header.
    People,
    /// Lines after a `Computer <n>` header.
    Computer,
    /// Lines after a `Computer-People <n>` header.
    Relations,
}

impl Section {
    /// Header keyword that opens this section, if any.
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Section::None => None,
            Section::People => Some("People"),
            Section::Computer => Some("Computer"),
            Section::Relations => Some("Computer-People"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header().unwrap_or("(none)"))
    }
}

/// File-level metadata from `Version` and `Comment` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A person record from the `People` section.
///
/// # Examples
///
/// ```
/// use format1_core::Person;
///
/// assert_eq!(Person::new("1", "Alice").display_name(), "Alice");
/// assert_eq!(Person::new("2", "").display_name(), "(no name)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Identifier token (first field of the line).
    pub id: String,
    /// Display name, possibly empty.
    pub name: String,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the name, or [`NO_NAME_PLACEHOLDER`] when it is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            NO_NAME_PLACEHOLDER
        } else {
            &self.name
        }
    }
}

/// A computer record from the `Computer` section.
///
/// Size fields hold normalized size strings and are empty when the line
/// omitted them. The owner is only ever assigned by relation records.
///
/// # Examples
///
/// ```
/// use format1_core::Computer;
///
/// let pc = Computer::new("7", "Intel i7").with_sizes("16GB", "512GB", "");
/// assert_eq!(pc.ram, "16GB");
/// assert!(pc.ssd.is_empty());
/// assert!(pc.owner.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    pub id: String,
    pub cpu: String,
    pub ram: String,
    pub hdd: String,
    pub ssd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Computer {
    /// Creates a computer with empty sizes and no owner.
    pub fn new(id: impl Into<String>, cpu: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cpu: cpu.into(),
            ram: String::new(),
            hdd: String::new(),
            ssd: String::new(),
            owner: None,
        }
    }

    /// Sets RAM, HDD and SSD sizes.
    pub fn with_sizes(
        mut self,
        ram: impl Into<String>,
        hdd: impl Into<String>,
        ssd: impl Into<String>,
    ) -> Self {
        self.ram = ram.into();
        self.hdd = hdd.into();
        self.ssd = ssd.into();
        self
    }

    /// Returns `true` when the owner token equals `person_id`.
    pub fn is_owned_by(&self, person_id: &str) -> bool {
        self.owner.as_deref() == Some(person_id)
    }
}

/// An ownership relation from the `Computer-People` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Computer identifier (first field).
    pub computer: String,
    /// Person identifier (second field).
    pub person: String,
}

impl Relation {
    pub fn new(computer: impl Into<String>, person: impl Into<String>) -> Self {
        Self {
            computer: computer.into(),
            person: person.into(),
        }
    }
}

/// Declared and actual record counts for one section.
///
/// The declared token is informational: it is recorded from the header's
/// second field and only compared against `actual` by strict validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<String>,
    pub actual: usize,
    /// Whether a header for this section was seen at all.
    pub seen: bool,
}

impl SectionCount {
    fn reset(&mut self, declared: Option<String>) {
        self.declared = declared;
        self.actual = 0;
        self.seen = true;
    }
}

/// Per-section counters, reset whenever the section header reappears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCounts {
    pub people: SectionCount,
    pub computers: SectionCount,
    pub relations: SectionCount,
}

impl SectionCounts {
    pub fn get(&self, section: Section) -> Option<&SectionCount> {
        match section {
            Section::None => None,
            Section::People => Some(&self.people),
            Section::Computer => Some(&self.computers),
            Section::Relations => Some(&self.relations),
        }
    }

    fn get_mut(&mut self, section: Section) -> Option<&mut SectionCount> {
        match section {
            Section::None => None,
            Section::People => Some(&mut self.people),
            Section::Computer => Some(&mut self.computers),
            Section::Relations => Some(&mut self.relations),
        }
    }
}

/// Everything read from one FORMAT-1 file.
///
/// An `Inventory` is the parse context for a single run: it is created
/// empty, filled line by line, and then handed to the renderer. People and
/// computers are stored in declaration order; a repeated identifier replaces
/// the earlier record in place.
///
/// # Examples
///
/// ```
/// use format1_core::{Computer, Inventory, Person, Relation, Section};
///
/// let mut inventory = Inventory::default();
/// inventory.begin_section(Section::People, Some("1".into()));
/// inventory.add_person(Person::new("1", "Alice"));
/// inventory.begin_section(Section::Computer, Some("2".into()));
/// inventory.add_computer(Computer::new("1", "Intel"));
/// inventory.add_computer(Computer::new("2", "AMD"));
/// inventory.add_relation(Relation::new("1", "1"));
///
/// assert_eq!(inventory.computers_owned_by("1").count(), 1);
/// let unowned: Vec<_> = inventory.unowned_computers().map(|c| c.id.as_str()).collect();
/// assert_eq!(unowned, vec!["2"]);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    pub metadata: FileMetadata,
    persons: Vec<Person>,
    computers: Vec<Computer>,
    relations: Vec<Relation>,
    /// Computer id -> owner id for every relation seen, including dangling ones.
    owners: BTreeMap<String, String>,
    pub counts: SectionCounts,
    #[serde(skip)]
    person_index: HashMap<String, usize>,
    #[serde(skip)]
    computer_index: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the counter for `section` and records its declared count.
    pub fn begin_section(&mut self, section: Section, declared: Option<String>) {
        if let Some(count) = self.counts.get_mut(section) {
            count.reset(declared);
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.metadata.version = Some(version.into());
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.metadata.comment = Some(comment.into());
    }

    /// Stores a person and bumps the `People` counter.
    pub fn add_person(&mut self, person: Person) {
        match self.person_index.get(&person.id) {
            Some(&idx) => self.persons[idx] = person,
            None => {
                self.person_index
                    .insert(person.id.clone(), self.persons.len());
                self.persons.push(person);
            }
        }
        self.counts.people.actual += 1;
    }

    /// Stores a computer and bumps the `Computer` counter.
    ///
    /// A relation that named this computer before it was declared still
    /// applies: the owner is taken from the relation table.
    pub fn add_computer(&mut self, mut computer: Computer) {
        computer.owner = self.owners.get(&computer.id).cloned();
        match self.computer_index.get(&computer.id) {
            Some(&idx) => self.computers[idx] = computer,
            None => {
                self.computer_index
                    .insert(computer.id.clone(), self.computers.len());
                self.computers.push(computer);
            }
        }
        self.counts.computers.actual += 1;
    }

    /// Applies an ownership relation and bumps the `Computer-People` counter.
    ///
    /// Neither identifier is checked; a relation to an unknown computer is
    /// kept so the id still counts as owned.
    pub fn add_relation(&mut self, relation: Relation) {
        if let Some(&idx) = self.computer_index.get(&relation.computer) {
            self.computers[idx].owner = Some(relation.person.clone());
        }
        self.owners
            .insert(relation.computer.clone(), relation.person.clone());
        self.relations.push(relation);
        self.counts.relations.actual += 1;
    }

    /// People in declaration order.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.person_index.get(id).map(|&idx| &self.persons[idx])
    }

    /// Number of people parsed since the latest `People` header.
    pub fn person_count(&self) -> usize {
        self.counts.people.actual
    }

    /// Computers in declaration order.
    pub fn computers(&self) -> impl Iterator<Item = &Computer> {
        self.computers.iter()
    }

    pub fn computer(&self, id: &str) -> Option<&Computer> {
        self.computer_index.get(id).map(|&idx| &self.computers[idx])
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns `true` when any relation targeted `computer_id`.
    pub fn is_owned(&self, computer_id: &str) -> bool {
        self.owners.contains_key(computer_id)
    }

    /// Computers whose owner equals `person_id`, in declaration order.
    pub fn computers_owned_by<'a>(
        &'a self,
        person_id: &'a str,
    ) -> impl Iterator<Item = &'a Computer> + 'a {
        self.computers.iter().filter(move |c| c.is_owned_by(person_id))
    }

    /// Computers never targeted by a relation, in declaration order.
    pub fn unowned_computers(&self) -> impl Iterator<Item = &Computer> {
        self.computers.iter().filter(|c| !self.is_owned(&c.id))
    }
}
