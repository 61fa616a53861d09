//! Passenger records and the categorical example model derived from them.
//!
//! `PassengerRow` mirrors one CSV line. `PassengerRow::extract_example` maps
//! its raw fields into the small enumerations the tree engine works on, and
//! `PassengerSet` handles shuffling and splitting rows into disjoint sets.
use std::collections::BTreeSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

pub type PassengerId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Survived,
    Died,
}

impl Label {
    /// Both labels in declaration order. Label ties resolve to the first entry.
    pub const ALL: [Label; 2] = [Label::Survived, Label::Died];

    /// Map the 0/1 survived flag of the raw data onto a label.
    pub fn from_flag(flag: u8) -> Self {
        if flag == 1 {
            Label::Survived
        } else {
            Label::Died
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Survived => "survived",
            Label::Died => "died",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Survived => write!(f, "Survived"),
            Label::Died => write!(f, "Died"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Child,
    Adult,
    Elder,
}

impl AgeBracket {
    /// Passengers younger than this are children.
    pub const ADULT_FROM: f64 = 18.0;
    /// Passengers this old or older are elders.
    pub const ELDER_FROM: f64 = 60.0;

    pub fn from_age(age: Option<f64>) -> Self {
        match age {
            Some(age) if age < Self::ADULT_FROM => AgeBracket::Child,
            Some(age) if age >= Self::ELDER_FROM => AgeBracket::Elder,
            // Missing ages count as adults
            _ => AgeBracket::Adult,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Child => "child",
            AgeBracket::Adult => "adult",
            AgeBracket::Elder => "elder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketClass {
    First,
    Second,
    Third,
}

impl TicketClass {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => TicketClass::First,
            2 => TicketClass::Second,
            _ => TicketClass::Third,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketClass::First => "first",
            TicketClass::Second => "second",
            TicketClass::Third => "third",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilySizeBracket {
    Single,
    Small,
    Large,
}

impl FamilySizeBracket {
    /// Relatives aboard from which a family counts as large.
    pub const LARGE_FROM: u32 = 4;

    pub fn from_relatives(relatives: u32) -> Self {
        match relatives {
            0 => FamilySizeBracket::Single,
            n if n < Self::LARGE_FROM => FamilySizeBracket::Small,
            _ => FamilySizeBracket::Large,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FamilySizeBracket::Single => "single",
            FamilySizeBracket::Small => "small",
            FamilySizeBracket::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HasCabin {
    Yes,
    No,
}

impl HasCabin {
    pub fn from_code(cabin: &str) -> Self {
        if cabin.trim().is_empty() {
            HasCabin::No
        } else {
            HasCabin::Yes
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HasCabin::Yes => "yes",
            HasCabin::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbarkPort {
    Queenstown,
    Southampton,
    Cherbourg,
}

impl EmbarkPort {
    /// "Q" and "C" name their ports; anything else, including a blank, is Southampton.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "Q" | "q" => EmbarkPort::Queenstown,
            "C" | "c" => EmbarkPort::Cherbourg,
            _ => EmbarkPort::Southampton,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmbarkPort::Queenstown => "queenstown",
            EmbarkPort::Southampton => "southampton",
            EmbarkPort::Cherbourg => "cherbourg",
        }
    }
}

/// Categorical view of a passenger. Every attribute is always present;
/// missing raw values are defaulted during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Example {
    pub gender: Gender,
    pub age: AgeBracket,
    pub ticket_class: TicketClass,
    pub family_size: FamilySizeBracket,
    pub cabin: HasCabin,
    pub embarked: EmbarkPort,
}

/// An example paired with its observed outcome; the unit consumed by induction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingExample {
    pub example: Example,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(example: Example, label: Label) -> Self {
        Self { example, label }
    }
}

/// One raw passenger record as it appears in the input CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerRow {
    #[serde(rename = "PassengerId")]
    pub passenger_id: PassengerId,
    #[serde(rename = "Survived")]
    pub survived: u8,
    #[serde(rename = "Pclass")]
    pub ticket_class: u8,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Sex")]
    pub gender: String,
    #[serde(rename = "Age", default)]
    pub age: Option<f64>,
    #[serde(rename = "SibSp", default)]
    pub siblings_spouses: u32,
    #[serde(rename = "Parch", default)]
    pub parents_children: u32,
    #[serde(rename = "Ticket", default)]
    pub ticket: String,
    #[serde(rename = "Fare", default)]
    pub fare: Option<f64>,
    #[serde(rename = "Cabin", default)]
    pub cabin: String,
    #[serde(rename = "Embarked", default)]
    pub embarked: String,
    #[serde(rename = "Destination", default)]
    pub destination: String,
}

impl PassengerRow {
    pub fn gender(&self) -> Gender {
        if self.gender.trim().eq_ignore_ascii_case("female") {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn extract_example(&self) -> Example {
        Example {
            gender: self.gender(),
            age: AgeBracket::from_age(self.age),
            ticket_class: TicketClass::from_code(self.ticket_class),
            family_size: FamilySizeBracket::from_relatives(
                self.siblings_spouses + self.parents_children,
            ),
            cabin: HasCabin::from_code(&self.cabin),
            embarked: EmbarkPort::from_code(&self.embarked),
        }
    }

    pub fn label(&self) -> Label {
        Label::from_flag(self.survived)
    }

    pub fn training_example(&self) -> TrainingExample {
        TrainingExample::new(self.extract_example(), self.label())
    }
}

/// An ordered collection of passenger rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerSet {
    rows: Vec<PassengerRow>,
}

impl PassengerSet {
    pub fn new(rows: Vec<PassengerRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PassengerRow] {
        &self.rows
    }

    /// Reject sets in which a `PassengerId` occurs more than once, since
    /// predictions and outcomes are matched up by id.
    pub fn ensure_unique_ids(&self) -> Result<(), ClassifierError> {
        let mut seen = BTreeSet::new();
        match self.rows.iter().find(|row| !seen.insert(row.passenger_id)) {
            Some(row) => Err(ClassifierError::DuplicatePassengerId(row.passenger_id)),
            None => Ok(()),
        }
    }

    /// Shuffle the rows, reproducibly when a seed is given.
    pub fn shuffled(mut self, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => self.rows.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => self.rows.shuffle(&mut thread_rng()),
        }
        self
    }

    /// Split off the first `fraction` of the rows (rounded down).
    ///
    /// Returns `(head, tail)`; the two sets are disjoint and together hold
    /// every row in the original order.
    pub fn split(&self, fraction: f64) -> (PassengerSet, PassengerSet) {
        let n_head = ((self.rows.len() as f64 * fraction) as usize).min(self.rows.len());
        let (head, tail) = self.rows.split_at(n_head);
        (PassengerSet::new(head.to_vec()), PassengerSet::new(tail.to_vec()))
    }

    pub fn training_examples(&self) -> Vec<TrainingExample> {
        self.rows.iter().map(PassengerRow::training_example).collect()
    }

    pub fn log_input_data_summary(&self) {
        let survived = self
            .rows
            .iter()
            .filter(|row| row.label() == Label::Survived)
            .count();
        log::info!(
            "{} passengers: {} survived, {} died",
            self.rows.len(),
            survived,
            self.rows.len() - survived
        );
    }
}
