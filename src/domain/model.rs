use serde::{Deserialize, Serialize};
use std::fmt;

/// The two record kinds the register knows about. The set is closed: the
/// report writer and the listing renderer both match exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Animal,
    Plant,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Plant => "Plant",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub age: u32,
    pub species: String,
    pub food_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    pub age: u32,
    pub leaf_type: String,
    pub flower_color: String,
}

/// A living record: one of the two concrete variants.
///
/// Name and age invariants (non-empty, positive) are enforced at the input
/// boundary (`FormInput`), not here; `set_name`/`set_age` are deliberately
/// unchecked setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LivingRecord {
    Animal(Animal),
    Plant(Plant),
}

impl LivingRecord {
    pub fn animal(
        name: impl Into<String>,
        age: u32,
        species: impl Into<String>,
        food_type: impl Into<String>,
    ) -> Self {
        Self::Animal(Animal {
            name: name.into(),
            age,
            species: species.into(),
            food_type: food_type.into(),
        })
    }

    pub fn plant(
        name: impl Into<String>,
        age: u32,
        leaf_type: impl Into<String>,
        flower_color: impl Into<String>,
    ) -> Self {
        Self::Plant(Plant {
            name: name.into(),
            age,
            leaf_type: leaf_type.into(),
            flower_color: flower_color.into(),
        })
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Animal(_) => RecordKind::Animal,
            Self::Plant(_) => RecordKind::Plant,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Animal(a) => &a.name,
            Self::Plant(p) => &p.name,
        }
    }

    pub fn age(&self) -> u32 {
        match self {
            Self::Animal(a) => a.age,
            Self::Plant(p) => p.age,
        }
    }

    /// Unchecked setter: an empty name is not rejected here.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self {
            Self::Animal(a) => a.name = name,
            Self::Plant(p) => p.name = name,
        }
    }

    /// Unchecked setter: a zero age is not rejected here.
    pub fn set_age(&mut self, age: u32) {
        match self {
            Self::Animal(a) => a.age = age,
            Self::Plant(p) => p.age = age,
        }
    }

    /// How the record feeds itself, dispatched by variant.
    pub fn describe_feeding(&self) -> String {
        match self {
            Self::Animal(a) => {
                format!("{}, this animal follows a {} diet.", a.name, a.food_type)
            }
            Self::Plant(p) => format!(
                "{}, this plant produces its energy through light and water.",
                p.name
            ),
        }
    }
}

impl fmt::Display for LivingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, age: {}", self.name(), self.age())
    }
}
