//! Decoration resolution
//!
//! A decoration is resolved into a [`DecorationDescriptor`] before any CSS is
//! built. The resolver is a collaborator behind [`DecorationUpdater`]; the
//! crate ships a local-directory implementation.
//!
//! Asset directory layout:
//!
//! ```text
//! <assets_dir>/<name>/decoration.json
//! <assets_dir>/<name>/sticker.png      (any paths the manifest names)
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Manifest file name inside each decoration directory
pub const MANIFEST_FILE: &str = "decoration.json";

/// Resolved asset URLs and display parameters for one decoration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationDescriptor {
    pub sticker_url: String,
    pub background_url: String,
    pub wallpaper_url: String,
    /// CSS `background-position` keyword, e.g. `center` or `right`
    pub anchoring: String,
}

/// The user's choice of decoration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
}

impl Selection {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether the name is a single plain directory name
    fn is_plain_name(&self) -> bool {
        let mut components = Path::new(&self.name).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) && !self.name.contains(['/', '\\'])
    }
}

/// Why a decoration could not be resolved
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("network unavailable: {0}")]
    Network(String),

    #[error("decoration not found: {0}")]
    NotFound(String),

    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl UpdateError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Resolves a selection into concrete asset URLs
pub trait DecorationUpdater {
    fn resolve(&self, selection: &Selection) -> Result<DecorationDescriptor, UpdateError>;
}

/// On-disk manifest, asset references relative to its directory
#[derive(Debug, Deserialize)]
struct Manifest {
    sticker: String,
    background: String,
    wallpaper: String,
    #[serde(default = "default_anchoring")]
    anchoring: String,
}

fn default_anchoring() -> String {
    "center".to_string()
}

/// Resolves decorations from a directory of manifests
#[derive(Debug, Clone)]
pub struct LocalAssetUpdater {
    assets_dir: PathBuf,
}

impl LocalAssetUpdater {
    pub fn new<P: AsRef<Path>>(assets_dir: P) -> Self {
        Self {
            assets_dir: assets_dir.as_ref().to_path_buf(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Names of all decorations that have a manifest, sorted
    pub fn decorations(&self) -> Result<Vec<String>> {
        if !self.assets_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in walkdir::WalkDir::new(&self.assets_dir)
            .min_depth(2)
            .max_depth(2)
        {
            let entry = entry
                .with_context(|| format!("Failed to read: {}", self.assets_dir.display()))?;
            if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE {
                if let Some(name) = entry
                    .path()
                    .parent()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                {
                    names.push(name);
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

impl DecorationUpdater for LocalAssetUpdater {
    fn resolve(&self, selection: &Selection) -> Result<DecorationDescriptor, UpdateError> {
        if !selection.is_plain_name() {
            return Err(UpdateError::NotFound(selection.name.clone()));
        }

        let decoration_dir = self.assets_dir.join(&selection.name);
        let manifest_path = decoration_dir.join(MANIFEST_FILE);

        if !manifest_path.is_file() {
            return Err(UpdateError::NotFound(selection.name.clone()));
        }

        let content = fs::read_to_string(&manifest_path)?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|e| UpdateError::InvalidManifest {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        let asset_url = |reference: &str| {
            resolve_asset(&decoration_dir, reference).ok_or_else(|| {
                UpdateError::InvalidManifest {
                    path: manifest_path.clone(),
                    reason: format!("unusable asset reference: {}", reference),
                }
            })
        };

        Ok(DecorationDescriptor {
            sticker_url: asset_url(&manifest.sticker)?,
            background_url: asset_url(&manifest.background)?,
            wallpaper_url: asset_url(&manifest.wallpaper)?,
            anchoring: manifest.anchoring,
        })
    }
}

/// Turn a manifest asset reference into a URL
///
/// Absolute URLs pass through untouched; anything else is a path relative to
/// the decoration directory and becomes a `file://` URL.
fn resolve_asset(decoration_dir: &Path, reference: &str) -> Option<String> {
    if reference.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(reference) {
        if matches!(url.scheme(), "http" | "https" | "file" | "data") {
            return Some(reference.to_string());
        }
    }

    let path = decoration_dir.join(reference);
    let path = path.canonicalize().unwrap_or(path);
    Url::from_file_path(&path).ok().map(|u| u.to_string())
}
