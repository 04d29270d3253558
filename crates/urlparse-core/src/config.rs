//! Declarative configuration for the urlparse transform.
//!
//! The schema is strict: unknown keys are rejected, `fields` must be present and
//! non-empty, and every entry needs a non-empty `from`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error raised while loading or validating a configuration. Never recovered.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse urlparse configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to unpack urlparse configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no configuration found at {}", .path.display())]
    MissingConfig { path: PathBuf },
    #[error("could not locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("`fields` must list at least one mapping")]
    NoFields,
    #[error("fields[{index}]: `from` must not be empty")]
    EmptyFrom { index: usize },
}

/// One `from` -> `to` pair. An absent or empty `to` means "overwrite `from`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMapping {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl FieldMapping {
    pub fn new(from: impl Into<String>, to: Option<&str>) -> Self {
        Self {
            from: from.into(),
            to: to.map(str::to_string),
        }
    }
}

fn default_fail_on_error() -> bool {
    true
}

/// Raw transform configuration, as written in `config.toml` or handed over by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlParseConfig {
    /// Mappings applied in order; later mappings win when `to` paths collide.
    pub fields: Vec<FieldMapping>,
    /// Treat an absent `from` field as a no-op instead of a failure.
    #[serde(default)]
    pub ignore_missing: bool,
    /// All-or-nothing per event: on any failure restore the event and report.
    #[serde(default = "default_fail_on_error")]
    pub fail_on_error: bool,
}

impl UrlParseConfig {
    /// Config with the default flags (`ignore_missing = false`, `fail_on_error = true`).
    pub fn new(fields: Vec<FieldMapping>) -> Self {
        Self {
            fields,
            ignore_missing: false,
            fail_on_error: default_fail_on_error(),
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let cfg: UrlParseConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let cfg: UrlParseConfig = serde_json::from_value(value)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks what serde cannot express: non-empty `fields` and `from` values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        if let Some(index) = self.fields.iter().position(|f| f.from.is_empty()) {
            return Err(ConfigError::EmptyFrom { index });
        }
        Ok(())
    }
}

/// Default config location: `~/.config/urlparse/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlparse")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load and validate a TOML configuration file.
pub fn load_from(path: &Path) -> Result<UrlParseConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = UrlParseConfig::from_toml_str(&data)?;
    tracing::debug!(path = %path.display(), mappings = cfg.fields.len(), "loaded config");
    Ok(cfg)
}

/// Load the configuration from [`config_path`].
pub fn load_default() -> Result<UrlParseConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        return Err(ConfigError::MissingConfig { path });
    }
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_for_flags() {
        let cfg = UrlParseConfig::from_toml_str(
            r#"
            [[fields]]
            from = "url.original"
        "#,
        )
        .unwrap();
        assert!(!cfg.ignore_missing);
        assert!(cfg.fail_on_error);
        assert_eq!(cfg.fields, vec![FieldMapping::new("url.original", None)]);
    }

    #[test]
    fn toml_custom_values() {
        let toml = r#"
            ignore_missing = true
            fail_on_error = false

            [[fields]]
            from = "request"
            to = "request_parsed"

            [[fields]]
            from = "referrer"
        "#;
        let cfg = UrlParseConfig::from_toml_str(toml).unwrap();
        assert!(cfg.ignore_missing);
        assert!(!cfg.fail_on_error);
        assert_eq!(cfg.fields.len(), 2);
        assert_eq!(cfg.fields[0].to.as_deref(), Some("request_parsed"));
        assert!(cfg.fields[1].to.is_none());
    }

    #[test]
    fn missing_fields_rejected() {
        let err = UrlParseConfig::from_toml_str("ignore_missing = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "{err}");
    }

    #[test]
    fn empty_fields_rejected() {
        let err = UrlParseConfig::from_toml_str("fields = []").unwrap_err();
        assert!(matches!(err, ConfigError::NoFields));
    }

    #[test]
    fn entry_without_from_rejected() {
        let err = UrlParseConfig::from_json_value(json!({ "fields": [{ "to": "x" }] })).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("from"), "{err}");
    }

    #[test]
    fn empty_from_rejected() {
        let err = UrlParseConfig::from_json_value(json!({
            "fields": [{ "from": "a" }, { "from": "" }]
        }))
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFrom { index: 1 }));
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let err = UrlParseConfig::from_json_value(json!({
            "fields": [{ "from": "a" }],
            "target": "b"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("target"), "{err}");
    }

    #[test]
    fn unknown_entry_key_rejected() {
        let toml = r#"
            [[fields]]
            from = "a"
            into = "b"
        "#;
        assert!(UrlParseConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn load_from_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
