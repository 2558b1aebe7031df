//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `BINTREE_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RenderOptions, TraversalOrder};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Which traversal(s) to print when none is given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderSelection {
    Pre,
    In,
    Post,
    Level,
    All,
}

impl OrderSelection {
    pub fn orders(self) -> Vec<TraversalOrder> {
        match self {
            OrderSelection::Pre => vec![TraversalOrder::Preorder],
            OrderSelection::In => vec![TraversalOrder::Inorder],
            OrderSelection::Post => vec![TraversalOrder::Postorder],
            OrderSelection::Level => vec![TraversalOrder::LevelOrder],
            OrderSelection::All => TraversalOrder::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TraversalSettings {
    pub default_order: OrderSelection,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            default_order: OrderSelection::All,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    /// Printed between elements of a traversal
    pub separator: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            separator: " ".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub traversal: TraversalSettings,
    pub render: RenderOptions,
    pub output: OutputSettings,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file layered over the global one; it must exist
    pub fn load(local: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("traversal.default_order", "all")?
            .set_default("render.empty_label", defaults.render.empty_label)?
            .set_default("render.missing_child", defaults.render.missing_child)?
            .set_default("render.show_missing", defaults.render.show_missing)?
            .set_default("output.separator", defaults.output.separator)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(SettingsError::NotFound(local_path.to_path_buf()));
            }
            builder = builder.add_source(File::from(local_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("BINTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bintree/bintree.toml
#   Local:  file given with --config
#   Env:    BINTREE_* environment variables, e.g. BINTREE_RENDER__SHOW_MISSING=false

[traversal]
# Order(s) printed by `bintree traverse` without --order: pre, in, post, level, all
# default_order = "all"

[render]
# Shown when the tree has no root
# empty_label = "Empty tree"

# Placeholder for the absent side of a node with a single child
# missing_child = "·"
# show_missing = true

[output]
# Printed between traversal elements
# separator = " "
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file() -> NamedTempFile {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings.render, RenderOptions::default());
        assert_eq!(settings.traversal.default_order, OrderSelection::All);
    }

    #[test]
    fn given_local_file_when_loading_then_overrides_defaults() {
        let mut file = toml_file();
        writeln!(
            file,
            "[traversal]\ndefault_order = \"level\"\n\n[render]\nshow_missing = false\n"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).expect("load local");
        assert_eq!(settings.traversal.default_order, OrderSelection::Level);
        assert!(!settings.render.show_missing);
        assert_eq!(settings.render.empty_label, "Empty tree");
    }

    #[test]
    fn given_missing_local_file_when_loading_then_not_found() {
        let err = Settings::load(Some(Path::new("/nonexistent/bintree.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::NotFound(_)));
    }

    #[test]
    fn given_invalid_order_when_loading_then_invalid() {
        let mut file = toml_file();
        writeln!(file, "[traversal]\ndefault_order = \"sideways\"").unwrap();
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_settings_when_serialized_then_has_sections() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("[traversal]"));
        assert!(toml.contains("default_order = \"all\""));
    }

    #[test]
    fn given_selection_when_expanding_then_all_covers_four_orders() {
        assert_eq!(OrderSelection::All.orders().len(), 4);
        assert_eq!(OrderSelection::In.orders(), vec![TraversalOrder::Inorder]);
    }
}
