use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wikiref_model::EntityType;

use crate::error::{RefError, Result};
use crate::traits::EntityReferenceValueProvider;

/// Default values for reference components that a string reference omits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Wiki used when a reference names no wiki.
    pub default_wiki: String,
    /// Space used when a reference names no space.
    pub default_space: String,
    /// Page used when a reference names no page.
    pub default_page: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            default_wiki: "xwiki".into(),
            default_space: "Main".into(),
            default_page: "WebHome".into(),
        }
    }
}

impl ReferenceConfig {
    /// Parse a TOML document. Keys that are absent keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RefError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading reference configuration");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| RefError::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        for entity_type in [EntityType::Wiki, EntityType::Space, EntityType::Document] {
            if self.value(entity_type).is_some_and(str::is_empty) {
                return Err(RefError::Config(format!(
                    "default {entity_type} name must not be empty"
                )));
            }
        }
        Ok(())
    }

    fn value(&self, entity_type: EntityType) -> Option<&str> {
        match entity_type {
            EntityType::Wiki => Some(&self.default_wiki),
            EntityType::Space => Some(&self.default_space),
            EntityType::Document => Some(&self.default_page),
            EntityType::Object => None,
        }
    }
}

impl EntityReferenceValueProvider for ReferenceConfig {
    fn default_value(&self, entity_type: EntityType) -> Option<String> {
        self.value(entity_type).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ReferenceConfig::default();
        assert_eq!(c.default_wiki, "xwiki");
        assert_eq!(c.default_space, "Main");
        assert_eq!(c.default_page, "WebHome");
    }

    #[test]
    fn provides_defaults_by_entity_type() {
        let c = ReferenceConfig::default();
        assert_eq!(c.default_value(EntityType::Wiki).as_deref(), Some("xwiki"));
        assert_eq!(c.default_value(EntityType::Space).as_deref(), Some("Main"));
        assert_eq!(
            c.default_value(EntityType::Document).as_deref(),
            Some("WebHome")
        );
        assert_eq!(c.default_value(EntityType::Object), None);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let c = ReferenceConfig::from_toml_str(r#"default_wiki = "dev""#).unwrap();
        assert_eq!(c.default_wiki, "dev");
        assert_eq!(c.default_space, "Main");
        assert_eq!(c.default_page, "WebHome");
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            ReferenceConfig::from_toml_str("").unwrap(),
            ReferenceConfig::default()
        );
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = ReferenceConfig::from_toml_str("default_wiki = ").unwrap_err();
        assert!(matches!(err, RefError::Config(_)), "got: {err}");
    }

    #[test]
    fn empty_default_is_rejected() {
        let err = ReferenceConfig::from_toml_str(r#"default_space = """#).unwrap_err();
        assert!(err.to_string().contains("space"), "got: {err}");
    }

    #[test]
    fn toml_roundtrip() {
        let c = ReferenceConfig {
            default_wiki: "w".into(),
            default_space: "S".into(),
            default_page: "P".into(),
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(ReferenceConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_wiki = \"files\"").unwrap();
        writeln!(file, "default_page = \"Home\"").unwrap();

        let c = ReferenceConfig::load(file.path()).unwrap();
        assert_eq!(c.default_wiki, "files");
        assert_eq!(c.default_space, "Main");
        assert_eq!(c.default_page, "Home");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RefError::Io(_)));
    }
}
