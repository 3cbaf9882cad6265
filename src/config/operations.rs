//! Config loading, layer merging, and path expansion.

use super::model::Config;
use super::paths::ConfigPaths;
use crate::error::{KrappError, Result};
use std::io::ErrorKind;
use std::path::Path;

impl Config {
    /// A layer with every field unset.
    pub fn empty() -> Self {
        Self {
            base_dir: String::new(),
            daily_note_dir: String::new(),
            inbox_dir: String::new(),
            editor: String::new(),
            editor_option: String::new(),
            with_always_open_editor: false,
            daily_template: Default::default(),
            inbox_template: Default::default(),
        }
    }

    /// Parse one layer from YAML. Omitted fields stay unset.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_layer(yaml)
            .map_err(|e| KrappError::Config(format!("failed to parse config YAML: {}", e)))
    }

    /// Load one layer from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            KrappError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        parse_layer(&content).map_err(|e| {
            KrappError::Config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| KrappError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Overlay `layer` on `base`.
    ///
    /// Each field the layer sets to a non-zero value (non-empty string,
    /// `true`, non-empty template) replaces the base's; every other field is
    /// inherited. Templates are replaced whole, not merged key by key.
    ///
    /// The overlay is total over the typed record, so there is no failure
    /// case that would fall back to `base`.
    pub fn merge(base: &Config, layer: &Config) -> Config {
        fn pick(layer: &str, base: &str) -> String {
            let chosen = if layer.is_empty() { base } else { layer };
            chosen.to_string()
        }

        Config {
            base_dir: pick(&layer.base_dir, &base.base_dir),
            daily_note_dir: pick(&layer.daily_note_dir, &base.daily_note_dir),
            inbox_dir: pick(&layer.inbox_dir, &base.inbox_dir),
            editor: pick(&layer.editor, &base.editor),
            editor_option: pick(&layer.editor_option, &base.editor_option),
            with_always_open_editor: layer.with_always_open_editor
                || base.with_always_open_editor,
            daily_template: if layer.daily_template.is_empty() {
                base.daily_template.clone()
            } else {
                layer.daily_template.clone()
            },
            inbox_template: if layer.inbox_template.is_empty() {
                base.inbox_template.clone()
            } else {
                layer.inbox_template.clone()
            },
        }
    }

    /// Expand a leading `~` in the path fields to `home`.
    pub fn expand_home(&mut self, home: &Path) {
        for field in [
            &mut self.base_dir,
            &mut self.daily_note_dir,
            &mut self.inbox_dir,
        ] {
            let expanded = expand_home_path(field, home);
            *field = expanded;
        }
    }

    /// Resolve the effective configuration from all layers.
    ///
    /// Fails only when the global layer cannot be created, read, or decoded.
    /// A missing local file is skipped; a local file that cannot be read or
    /// decoded is skipped with a warning.
    pub fn load_layered(paths: &ConfigPaths) -> Result<Self> {
        paths.ensure_global()?;

        let global = Self::load(&paths.global)?;
        let mut merged = Self::merge(&Self::default(), &global);

        match std::fs::read_to_string(&paths.local) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(local) => merged = Self::merge(&merged, &local),
                Err(e) => log::warn!(
                    "ignoring local config '{}': {}",
                    paths.local.display(),
                    e
                ),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no local config at '{}'", paths.local.display());
            }
            Err(e) => log::warn!(
                "ignoring unreadable local config '{}': {}",
                paths.local.display(),
                e
            ),
        }

        merged.expand_home(&paths.home);
        Ok(merged)
    }
}

fn parse_layer(yaml: &str) -> std::result::Result<Config, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Config::empty());
    }
    serde_yaml::from_str(yaml)
}

/// Expand `~` or a `~/` prefix to `home`; other paths are returned as-is.
pub(crate) fn expand_home_path(path: &str, home: &Path) -> String {
    if path == "~" {
        return home.to_string_lossy().into_owned();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest).to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}
