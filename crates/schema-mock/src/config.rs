//! Project-level configuration loaded from YAML.
//!
//! Keeps per-project knobs (projected attributes, schema pointer, output
//! format) next to the schema documents instead of repeating CLI flags.
//!
//! # File format
//!
//! ```yaml
//! # schema-mock.yaml
//!
//! # Attributes copied into every entry produced by `paths`.
//! attributes:
//!   - type
//!   - description
//!   - required
//!
//! # JSON Pointer of the schema to use inside a larger document.
//! pointer: /components/schemas/Order
//!
//! # Output format: json (default) or yaml.
//! output: yaml
//!
//! # Pretty-print JSON output (default true).
//! pretty: false
//! ```

use std::path::Path;

use serde::Deserialize;

/// Attributes projected by default when flattening.
pub const DEFAULT_ATTRIBUTES: &[&str] = &["type", "description"];

/// Project-level `schema-mock` config.
///
/// Loaded from a YAML file via [`ProjectConfig::load`]. CLI flags override
/// the values found here.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Attribute names projected into each flattened path entry.
    pub attributes: Vec<String>,

    /// JSON Pointer selecting the schema inside the loaded document.
    pub pointer: Option<String>,

    /// Serialization format of generated artifacts.
    pub output: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Serialization format for generated artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON (pretty-printed unless disabled).
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            attributes: DEFAULT_ATTRIBUTES.iter().map(ToString::to_string).collect(),
            pointer: None,
            output: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl ProjectConfig {
    /// Load config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_defaults() {
        let config: ProjectConfig = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(config.attributes, vec!["type", "description"]);
        assert!(config.pointer.is_none());
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.pretty);
    }

    #[test]
    fn deserialize_full() {
        let yaml = r"
attributes:
  - type
  - required
pointer: /components/schemas/Order
output: yaml
pretty: false
";
        let config: ProjectConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.attributes, vec!["type", "required"]);
        assert_eq!(
            config.pointer.as_deref(),
            Some("/components/schemas/Order")
        );
        assert_eq!(config.output, OutputFormat::Yaml);
        assert!(!config.pretty);
    }

    #[test]
    fn unknown_output_format_errors() {
        let result: Result<ProjectConfig, _> = serde_yaml_ng::from_str("output: xml\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = std::env::temp_dir().join("schema-mock-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test-config.yaml");
        std::fs::write(&path, "pointer: /definitions/Pet\n").unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.pointer.as_deref(), Some("/definitions/Pet"));
        // Defaults still apply
        assert_eq!(config.attributes, vec!["type", "description"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let result = ProjectConfig::load(Path::new("/nonexistent/config.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_invalid_yaml_returns_error() {
        let dir = std::env::temp_dir().join("schema-mock-config-test-invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        std::fs::write(&path, "attributes: [[[invalid").unwrap();

        let result = ProjectConfig::load(&path);
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
