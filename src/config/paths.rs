//! Config file locations, first-run creation, and legacy migration.

use super::model::Config;
use crate::error::{KrappError, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Directory name under the XDG config home.
pub const CONFIG_DIR_NAME: &str = "krapp";

/// Global config file name.
pub const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".krapp_config.yaml";

/// Pre-XDG global config file, relative to the home directory.
pub const LEGACY_CONFIG_FILE: &str = ".krapp_config.yaml";

/// Resolved locations of every config layer.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User-global config file.
    pub global: PathBuf,
    /// Project-local config file.
    pub local: PathBuf,
    /// Legacy home-dot config file, migrated to `global` once.
    pub legacy: PathBuf,
    /// Home directory used for `~` expansion.
    pub home: PathBuf,
}

impl ConfigPaths {
    /// Resolve paths from `$XDG_CONFIG_HOME` and `$HOME`.
    ///
    /// The global file is `$XDG_CONFIG_HOME/krapp/config.yaml`, falling back
    /// to `$HOME/.config/krapp/config.yaml` when the variable is unset or
    /// empty.
    pub fn from_env() -> Result<Self> {
        let home = env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| KrappError::Config("HOME is not set".to_string()))?;

        let config_home = env::var_os("XDG_CONFIG_HOME")
            .filter(|x| !x.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".config"));

        Ok(Self::new(config_home, &home))
    }

    /// Build the layout under an explicit config home and home directory.
    pub fn new(config_home: PathBuf, home: &std::path::Path) -> Self {
        Self {
            global: config_home.join(CONFIG_DIR_NAME).join(GLOBAL_CONFIG_FILE),
            local: PathBuf::from(LOCAL_CONFIG_FILE),
            legacy: home.join(LEGACY_CONFIG_FILE),
            home: home.to_path_buf(),
        }
    }

    /// Make sure the global config file exists.
    ///
    /// A legacy config is migrated when the global file is absent; otherwise
    /// a file with the compiled-in defaults is written.
    pub fn ensure_global(&self) -> Result<()> {
        if self.global.exists() {
            if self.legacy.exists() {
                log::warn!(
                    "legacy config '{}' ignored because '{}' exists",
                    self.legacy.display(),
                    self.global.display()
                );
            }
            return Ok(());
        }

        if self.legacy.exists() {
            return self.migrate_legacy();
        }

        log::info!("creating default config at '{}'", self.global.display());
        let yaml = Config::default().to_yaml()?;
        self.write_global(&yaml)
    }

    /// Copy the legacy config to the global path, then remove it.
    ///
    /// The legacy file must decode; failing to delete it afterwards is only
    /// a warning.
    fn migrate_legacy(&self) -> Result<()> {
        let content = fs::read_to_string(&self.legacy).map_err(|e| {
            KrappError::Config(format!(
                "failed to read legacy config '{}': {}",
                self.legacy.display(),
                e
            ))
        })?;
        Config::from_yaml(&content)?;

        self.write_global(&content)?;
        log::warn!(
            "migrated legacy config '{}' to '{}'",
            self.legacy.display(),
            self.global.display()
        );

        if let Err(e) = fs::remove_file(&self.legacy) {
            log::warn!(
                "failed to remove legacy config '{}': {}",
                self.legacy.display(),
                e
            );
        }
        Ok(())
    }

    fn write_global(&self, yaml: &str) -> Result<()> {
        crate::fs::atomic_write(&self.global, yaml.as_bytes()).map_err(|e| {
            KrappError::Config(format!(
                "failed to write config file '{}': {}",
                self.global.display(),
                e
            ))
        })
    }
}
