//! Inspector configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::{InspectError, Severity};

/// Name of the configuration file looked up next to the inputs.
pub const CONFIG_FILE_NAME: &str = ".treelint.json";

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Configuration for the inspector and its hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Per-inspection settings keyed by inspection id.
    #[serde(default)]
    pub inspections: BTreeMap<String, InspectionOption>,

    /// Glob patterns of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Round limit for `--fix`.
    #[serde(default = "default_max_fix_iterations")]
    pub max_fix_iterations: usize,

    /// Directory of the configuration file. Exclude patterns are relative
    /// to it.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_max_fix_iterations() -> usize {
    3
}

/// Setting for a single inspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum InspectionOption {
    /// Enabled or disabled at the default severity.
    Enabled(bool),
    /// `"error"`, `"warning"`, `"info"` or `"off"`.
    Severity(String),
}

impl InspectionOption {
    /// Returns whether the inspection runs.
    pub fn is_enabled(&self) -> bool {
        match self {
            InspectionOption::Enabled(enabled) => *enabled,
            InspectionOption::Severity(s) => s != "off",
        }
    }

    /// Returns the configured severity override, if any.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            InspectionOption::Enabled(_) => None,
            InspectionOption::Severity(s) => Severity::from_name(s),
        }
    }
}

impl InspectorConfig {
    /// Creates a configuration with every built-in inspection at defaults.
    pub fn new() -> Self {
        Self {
            inspections: BTreeMap::new(),
            exclude: Vec::new(),
            max_fix_iterations: default_max_fix_iterations(),
            base_dir: None,
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InspectError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| InspectError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        config.base_dir = Some(parent.to_path_buf());

        Ok(config)
    }

    /// Parses configuration from a JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, InspectError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| InspectError::config(format!("Invalid JSON: {}", e)))?;

        let schema = CONFIG_SCHEMA
            .get_or_init(|| {
                let schema_json: serde_json::Value = serde_json::from_str(SCHEMA_JSON)
                    .map_err(|e| format!("Invalid embedded config schema: {}", e))?;
                Validator::new(&schema_json)
                    .map_err(|e| format!("Invalid config schema compilation: {}", e))
            })
            .as_ref()
            .map_err(|e| InspectError::config(e.clone()))?;

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(InspectError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| InspectError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for [`CONFIG_FILE_NAME`] in `dir` and its ancestors.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        dir.as_ref()
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_new() {
        let config = InspectorConfig::new();
        assert!(config.inspections.is_empty());
        assert!(config.exclude.is_empty());
        assert_eq!(config.max_fix_iterations, 3);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "$schema": "https://example.invalid/treelint.json",
            "inspections": {
                "angular-animation-trigger-assignment": "warning",
                "drools-empty-enum": false
            },
            "exclude": ["dist/**"],
            "max_fix_iterations": 5
        }"#;

        let config = InspectorConfig::from_json(json).unwrap();
        assert_eq!(config.inspections.len(), 2);
        assert_eq!(config.exclude, vec!["dist/**".to_string()]);
        assert_eq!(config.max_fix_iterations, 5);
        assert_eq!(
            config.inspections["angular-animation-trigger-assignment"].severity(),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_inspection_option_enabled() {
        assert!(InspectionOption::Enabled(true).is_enabled());
        assert!(!InspectionOption::Enabled(false).is_enabled());
        assert!(!InspectionOption::Severity("off".to_string()).is_enabled());
        assert!(InspectionOption::Severity("info".to_string()).is_enabled());
        assert_eq!(InspectionOption::Enabled(true).severity(), None);
    }

    #[test]
    fn test_from_file_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "exclude": ["vendor/**"] }"#).unwrap();

        let config = InspectorConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
        assert_eq!(config.max_fix_iterations, 3);

        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(InspectorConfig::discover(&nested), Some(path));
    }

    #[rstest]
    #[case::unknown_property(r#"{ "inspection": {} }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "exclude": "dist" }"#, "Config validation failed")]
    #[case::invalid_severity(
        r#"{ "inspections": { "drools-empty-enum": "fatal" } }"#,
        "Config validation failed"
    )]
    #[case::zero_iterations(r#"{ "max_fix_iterations": 0 }"#, "Config validation failed")]
    #[case::invalid_json(r#"{ "exclude": [ }"#, "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let err = InspectorConfig::from_json(json).unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }
}
