use crate::domain::model::LivingRecord;
use crate::utils::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Records must be strictly older than this to appear in the report.
pub const QUALIFYING_AGE: u32 = 10;

fn sorted_by_name(records: &[LivingRecord]) -> Vec<&LivingRecord> {
    let mut sorted: Vec<&LivingRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.name().to_lowercase());
    sorted
}

/// Formats the report for the qualifying records, sorted case-insensitively
/// by name. Pure function of the collection; the blank line after each block
/// doubles as the record separator.
pub fn format_report(records: &[LivingRecord]) -> String {
    let mut out = String::new();

    for record in sorted_by_name(records) {
        if record.age() <= QUALIFYING_AGE {
            continue;
        }
        match record {
            LivingRecord::Animal(a) => {
                let _ = write!(
                    out,
                    "(Animal) ->\nName: {}\nAge: {}\nSpecies: {}\nFood: {}\n\n",
                    a.name, a.age, a.species, a.food_type
                );
            }
            LivingRecord::Plant(p) => {
                let _ = write!(
                    out,
                    "(Plant) ->\nName: {}\nAge: {}\nLeaf type: {}\nFlower color: {}\n\n",
                    p.name, p.age, p.leaf_type, p.flower_color
                );
            }
        }
    }

    out
}

/// Writes the report to `path`, fully replacing any previous content.
pub fn write_report(records: &[LivingRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let report = format_report(records);
    fs::write(path, report.as_bytes())?;
    tracing::debug!(
        "Wrote report for {} of {} records to {}",
        records.iter().filter(|r| r.age() > QUALIFYING_AGE).count(),
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LivingRecord> {
        vec![
            LivingRecord::animal("Lion", 15, "Mammal", "Carnivore"),
            LivingRecord::animal("Parrot", 10, "Bird", "Herbivore"),
            LivingRecord::plant("Lotus", 8, "Broad", "Silver"),
            LivingRecord::plant("Aloe", 15, "Spiny", "Yellow"),
        ]
    }

    #[test]
    fn test_age_boundary_excludes_ten_includes_eleven() {
        let records = vec![
            LivingRecord::animal("Edge", 10, "Bird", "Herbivore"),
            LivingRecord::animal("Past", 11, "Bird", "Herbivore"),
        ];
        let report = format_report(&records);
        assert!(!report.contains("Edge"));
        assert!(report.contains("Past"));
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let records = vec![
            LivingRecord::animal("Zoe", 20, "Mammal", "Omnivore"),
            LivingRecord::animal("amy", 20, "Mammal", "Herbivore"),
        ];
        let report = format_report(&records);
        let amy = report.find("Name: amy").unwrap();
        let zoe = report.find("Name: Zoe").unwrap();
        assert!(amy < zoe);
    }

    #[test]
    fn test_variant_block_format() {
        let report = format_report(&sample());
        assert!(report.contains(
            "(Animal) ->\nName: Lion\nAge: 15\nSpecies: Mammal\nFood: Carnivore\n\n"
        ));
        assert!(report.contains(
            "(Plant) ->\nName: Aloe\nAge: 15\nLeaf type: Spiny\nFlower color: Yellow\n\n"
        ));
        // Parrot (age 10) and Lotus (age 8) do not qualify.
        assert!(!report.contains("Parrot"));
        assert!(!report.contains("Lotus"));
    }

    #[test]
    fn test_empty_collection_yields_empty_report() {
        assert_eq!(format_report(&[]), "");
    }
}
