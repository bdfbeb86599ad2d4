use crate::utils::error::{Result, VivariumError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VivariumError::validation(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(VivariumError::validation(field_name, "path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(VivariumError::validation(
            field_name,
            "path contains null bytes",
        ));
    }

    Ok(())
}

/// Parses a raw age field into a positive integer. The trimmed value must
/// parse as an integer and be strictly greater than zero.
pub fn parse_positive_age(field_name: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        VivariumError::validation(field_name, format!("'{trimmed}' is not an integer"))
    })?;

    if value <= 0 {
        return Err(VivariumError::validation(
            field_name,
            "age must be greater than 0",
        ));
    }

    u32::try_from(value)
        .map_err(|_| VivariumError::validation(field_name, "age is out of range"))
}
