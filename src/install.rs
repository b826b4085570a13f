//! Installing and removing decorations
//!
//! Every operation reads the stylesheet fresh, runs the pure marker-block
//! functions over it, and writes the whole result back in one call. There is
//! no locking: two overlapping runs race and the last write wins.
//!
//! Errors never escape this module. They are logged and folded into an
//! [`InstallStatus`].

use anyhow::{Context, Result};
use log::{error, info, warn};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::config;
use crate::decoration::{DecorationDescriptor, DecorationUpdater, Selection, UpdateError};
use crate::stylesheet::{build_block, compose, present_markers, scrub_all, scrub_marker, Marker};

/// Outcome of an install or remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Installed,
    NotInstalled,
    Failure,
    NetworkFailure,
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::NotInstalled => write!(f, "not installed"),
            Self::Failure => write!(f, "failure"),
            Self::NetworkFailure => write!(f, "network failure"),
        }
    }
}

/// The stylesheet being patched and its cache marker file
#[derive(Debug, Clone)]
pub struct StylesheetTarget {
    pub stylesheet: PathBuf,
    pub cache_marker: PathBuf,
}

impl StylesheetTarget {
    /// Target with the cache marker in its usual place next to the stylesheet
    pub fn new<P: AsRef<Path>>(stylesheet: P) -> Self {
        let stylesheet = stylesheet.as_ref().to_path_buf();
        let cache_marker = config::cache_marker_path(&stylesheet);
        Self {
            stylesheet,
            cache_marker,
        }
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.stylesheet)
            .with_context(|| format!("Failed to read: {}", self.stylesheet.display()))
    }

    fn write(&self, css: &str) -> Result<()> {
        fs::write(&self.stylesheet, css)
            .with_context(|| format!("Failed to write: {}", self.stylesheet.display()))
    }
}

/// Why an install did not complete
enum InstallError {
    Resolve(UpdateError),
    Io(anyhow::Error),
}

impl From<anyhow::Error> for InstallError {
    fn from(e: anyhow::Error) -> Self {
        Self::Io(e)
    }
}

/// Sequences resolution, scrubbing and writing for one stylesheet
pub struct Installer<U> {
    target: StylesheetTarget,
    updater: U,
}

impl<U: DecorationUpdater> Installer<U> {
    pub fn new(target: StylesheetTarget, updater: U) -> Self {
        Self { target, updater }
    }

    pub fn target(&self) -> &StylesheetTarget {
        &self.target
    }

    /// Whether the stylesheet can be opened for writing
    ///
    /// Opens without create or truncate, so the file is left untouched. A
    /// missing file counts as not writable.
    pub fn can_write_target(&self) -> bool {
        OpenOptions::new()
            .write(true)
            .open(&self.target.stylesheet)
            .is_ok()
    }

    /// Install the block for `marker`, replacing any earlier copy of it
    pub fn install(&self, marker: Marker, selection: &Selection) -> InstallStatus {
        if !self.can_write_target() {
            error!(
                "Cannot write to {}, skipping {} install",
                self.target.stylesheet.display(),
                marker
            );
            return InstallStatus::Failure;
        }

        match self.try_install(marker, selection) {
            Ok(()) => {
                info!("Installed {} into {}", marker, self.target.stylesheet.display());
                InstallStatus::Installed
            }
            Err(InstallError::Resolve(e)) if e.is_network() => {
                error!("Unable to install {}: {}", marker, e);
                InstallStatus::NetworkFailure
            }
            Err(InstallError::Resolve(e)) => {
                error!("Unable to install {}: {}", marker, e);
                InstallStatus::Failure
            }
            Err(InstallError::Io(e)) => {
                error!("Unable to install {}: {:#}", marker, e);
                InstallStatus::Failure
            }
        }
    }

    /// Install the hide-watermark block; needs no decoration
    pub fn hide_watermark(&self) -> InstallStatus {
        self.install(Marker::HideWatermark, &Selection::new(""))
    }

    fn try_install(&self, marker: Marker, selection: &Selection) -> Result<(), InstallError> {
        let descriptor = if marker.needs_assets() {
            self.updater
                .resolve(selection)
                .map_err(InstallError::Resolve)?
        } else {
            DecorationDescriptor::default()
        };

        let current = self.target.read()?;
        let patched = compose(
            &scrub_marker(&current, marker),
            &build_block(marker, &descriptor),
        );
        self.target.write(&patched)?;

        // The patch is already on disk; a missing marker only affects what
        // `remove` reports later.
        let marker_path = &self.target.cache_marker;
        if !marker_path.exists() {
            if let Err(e) = fs::write(marker_path, &current) {
                warn!(
                    "Installed {} but could not write {}: {}",
                    marker,
                    marker_path.display(),
                    e
                );
            }
        }

        Ok(())
    }

    /// Remove every managed block
    ///
    /// Reports `Installed` when the cache marker showed a decoration was
    /// active, `NotInstalled` otherwise. The stylesheet is scrubbed either way.
    pub fn remove(&self) -> InstallStatus {
        if !self.can_write_target() {
            error!(
                "Cannot write to {}, skipping removal",
                self.target.stylesheet.display()
            );
            return InstallStatus::Failure;
        }

        match self.try_remove() {
            Ok(status) => {
                info!(
                    "Scrubbed {} ({})",
                    self.target.stylesheet.display(),
                    status
                );
                status
            }
            Err(e) => {
                error!("Unable to remove decorations: {:#}", e);
                InstallStatus::Failure
            }
        }
    }

    fn try_remove(&self) -> Result<InstallStatus> {
        let marker_path = &self.target.cache_marker;
        let status = if marker_path.exists() {
            fs::remove_file(marker_path)
                .with_context(|| format!("Failed to delete: {}", marker_path.display()))?;
            InstallStatus::Installed
        } else {
            InstallStatus::NotInstalled
        };

        let current = self.target.read()?;
        self.target.write(&scrub_all(&current))?;
        Ok(status)
    }

    /// Managed blocks currently in the stylesheet, in file order
    pub fn installed_markers(&self) -> Result<Vec<Marker>> {
        Ok(present_markers(&self.target.read()?))
    }
}
