use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub register: RegisterSection,
    pub report: ReportSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSection {
    pub name: String,
    pub demo: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn demo(&self) -> bool {
        self.register.demo.unwrap_or(false)
    }
}

impl ConfigProvider for FileConfig {
    fn report_path(&self) -> &str {
        &self.report.path
    }

    fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("register.name", &self.register.name)?;
        validate_path("report.path", &self.report.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[register]
name = "backyard"
demo = true

[report]
path = "./records/living_records.txt"

[logging]
verbose = true
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.register.name, "backyard");
        assert!(config.demo());
        assert_eq!(config.report_path(), "./records/living_records.txt");
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_default_off() {
        let toml_content = r#"
[register]
name = "backyard"

[report]
path = "living_records.txt"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(!config.demo());
        assert!(!config.verbose());
    }

    #[test]
    fn test_config_validation_rejects_blank_name() {
        let toml_content = r#"
[register]
name = ""

[report]
path = "living_records.txt"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[register]
name = "file-test"

[report]
path = "out.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.register.name, "file-test");
    }
}
