use crate::domain::model::{LivingRecord, RecordKind};
use crate::utils::error::{Result, VivariumError};
use crate::utils::validation::parse_positive_age;
use std::collections::HashMap;

pub const FIELD_NAME: &str = "name";
pub const FIELD_AGE: &str = "age";
pub const FIELD_SPECIES: &str = "species";
pub const FIELD_FOOD: &str = "food";
pub const FIELD_LEAF_TYPE: &str = "leaf_type";
pub const FIELD_FLOWER_COLOR: &str = "flower_color";

const ANIMAL_FIELDS: [&str; 4] = [FIELD_NAME, FIELD_AGE, FIELD_SPECIES, FIELD_FOOD];
const PLANT_FIELDS: [&str; 4] = [FIELD_NAME, FIELD_AGE, FIELD_LEAF_TYPE, FIELD_FLOWER_COLOR];

/// Raw form input for one record: the selected variant plus string fields
/// keyed by field name. This is the validation boundary: everything past
/// `into_record` holds the name/age invariants.
#[derive(Debug, Clone)]
pub struct FormInput {
    kind: RecordKind,
    fields: HashMap<String, String>,
}

impl FormInput {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: HashMap::new(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn with_field(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn required_fields(kind: RecordKind) -> &'static [&'static str] {
        match kind {
            RecordKind::Animal => &ANIMAL_FIELDS,
            RecordKind::Plant => &PLANT_FIELDS,
        }
    }

    /// Trimmed value of a required field; blank (after trimming) is an error.
    fn required(&self, field: &str) -> Result<&str> {
        let value = self.fields.get(field).map(String::as_str).unwrap_or("");
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(VivariumError::validation(field, "field is required"));
        }
        Ok(trimmed)
    }

    /// Validates every field and constructs the record. All required fields
    /// are checked for presence first, then the age is parsed; a
    /// non-positive age halts construction like any other validation error.
    pub fn into_record(self) -> Result<LivingRecord> {
        for field in Self::required_fields(self.kind) {
            self.required(field)?;
        }

        let name = self.required(FIELD_NAME)?.to_string();
        let age = parse_positive_age(FIELD_AGE, self.required(FIELD_AGE)?)?;

        let record = match self.kind {
            RecordKind::Animal => LivingRecord::animal(
                name,
                age,
                self.required(FIELD_SPECIES)?,
                self.required(FIELD_FOOD)?,
            ),
            RecordKind::Plant => LivingRecord::plant(
                name,
                age,
                self.required(FIELD_LEAF_TYPE)?,
                self.required(FIELD_FLOWER_COLOR)?,
            ),
        };

        Ok(record)
    }
}
