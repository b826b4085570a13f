//! One-time welcome message
//!
//! Whether the user has been greeted is kept in a small JSON state file so the
//! message shows up exactly once per machine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted greeting state
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeState {
    pub greeted: bool,
    /// Unix timestamp of the first greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeted_at: Option<i64>,
}

impl WelcomeState {
    /// Read state from a file; a missing file means never greeted
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))
    }

    /// Write state, creating the parent directory if needed
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))
    }

    /// Human-readable time of the first greeting
    pub fn greeted_at_display(&self) -> Option<String> {
        self.greeted_at
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Return the welcome text the first time this is called for `state_path`
pub fn attempt_to_greet<P: AsRef<Path>>(state_path: P) -> Result<Option<String>> {
    let state_path = state_path.as_ref();
    let state = WelcomeState::load(state_path)?;
    if state.greeted {
        return Ok(None);
    }

    WelcomeState {
        greeted: true,
        greeted_at: Some(chrono::Utc::now().timestamp()),
    }
    .save(state_path)?;

    Ok(Some(welcome_message()))
}

/// Overview of what the tool does and the caveat that comes with it
pub fn welcome_message() -> String {
    [
        "Welcome to editor-decor!",
        "",
        "Decorate your editor with a wallpaper and put a sticker in the corner.",
        "  editor-decor wallpaper <name>   set a background wallpaper",
        "  editor-decor sticker <name>     add a corner sticker",
        "  editor-decor hide-watermark     hide the empty-editor watermark",
        "  editor-decor list               show available decorations",
        "",
        "Important: decorations are installed by patching the editor's own",
        "workbench stylesheet. The editor may report its installation as",
        "corrupt afterwards. Run `editor-decor remove` before uninstalling",
        "if you want the decorations gone.",
        "",
        "Restart the editor after installing or removing a decoration.",
    ]
    .join("\n")
}
