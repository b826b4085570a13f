//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the stylesheet path
pub const STYLESHEET_ENV: &str = "EDITOR_DECOR_STYLESHEET";

/// Environment variable overriding the decoration asset directory
pub const ASSETS_ENV: &str = "EDITOR_DECOR_ASSETS";

const APP_DIR: &str = "editor-decor";

/// Get the default workbench stylesheet of a standard VS Code install
/// - macOS: /Applications/Visual Studio Code.app/Contents/Resources/app/out/vs/workbench/
/// - Linux: /usr/share/code/resources/app/out/vs/workbench/
/// - Windows: %LOCALAPPDATA%/Programs/Microsoft VS Code/resources/app/out/vs/workbench/
pub fn default_stylesheet_path() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        Ok(PathBuf::from("/Applications/Visual Studio Code.app")
            .join("Contents")
            .join("Resources")
            .join("app")
            .join("out")
            .join("vs")
            .join("workbench")
            .join("workbench.desktop.main.css"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        Ok(PathBuf::from("/usr/share/code")
            .join("resources")
            .join("app")
            .join("out")
            .join("vs")
            .join("workbench")
            .join("workbench.desktop.main.css"))
    }

    #[cfg(target_os = "windows")]
    {
        let local = dirs::data_local_dir().context("Could not determine LocalAppData directory")?;
        Ok(local
            .join("Programs")
            .join("Microsoft VS Code")
            .join("resources")
            .join("app")
            .join("out")
            .join("vs")
            .join("workbench")
            .join("workbench.desktop.main.css"))
    }
}

/// Sentinel written next to the stylesheet once a decoration is installed
pub fn cache_marker_path(stylesheet: &Path) -> PathBuf {
    let mut name: OsString = stylesheet.as_os_str().to_owned();
    name.push(".copy");
    PathBuf::from(name)
}

/// Get the editor-decor configuration directory
/// - macOS: ~/Library/Application Support/editor-decor/
/// - Linux: ~/.config/editor-decor/
/// - Windows: %APPDATA%/editor-decor/
pub fn config_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join(APP_DIR))
}

/// Get the default decoration asset directory (<data dir>/editor-decor/decorations/)
pub fn default_assets_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join(APP_DIR).join("decorations"))
}

/// Location of the persisted welcome state
pub fn welcome_state_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("state.json"))
}

/// User settings, read from `config.json` in [`config_dir`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Workbench stylesheet to patch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,

    /// Directory holding decoration manifests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Settings {
    /// Path of `config.json` in [`config_dir`]
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.json"))
    }

    /// Load settings from `path`, then apply env overrides
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut settings = Self::read(path)?;
        settings.apply_env(|key| std::env::var_os(key));
        Ok(settings)
    }

    /// Defaults with only env overrides applied, ignoring any config file
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env(|key| std::env::var_os(key));
        settings
    }

    /// Read settings from a file; a missing file yields defaults
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(value) = lookup(STYLESHEET_ENV).filter(|v| !v.is_empty()) {
            self.stylesheet = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup(ASSETS_ENV).filter(|v| !v.is_empty()) {
            self.assets_dir = Some(PathBuf::from(value));
        }
    }

    /// Stylesheet path, falling back to the platform default
    pub fn stylesheet_path(&self) -> Result<PathBuf> {
        match &self.stylesheet {
            Some(path) => Ok(path.clone()),
            None => default_stylesheet_path(),
        }
    }

    /// Asset directory, falling back to the platform default
    pub fn assets_path(&self) -> Result<PathBuf> {
        match &self.assets_dir {
            Some(path) => Ok(path.clone()),
            None => default_assets_dir(),
        }
    }
}
