//! Shared utilities for commands

use anyhow::Result;
use owo_colors::OwoColorize;

use editor_decor::config::Settings;
use editor_decor::decoration::LocalAssetUpdater;
use editor_decor::install::{InstallStatus, Installer, StylesheetTarget};

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Build an installer for the configured stylesheet and asset directory
pub fn installer(settings: &Settings) -> Result<Installer<LocalAssetUpdater>> {
    let target = StylesheetTarget::new(settings.stylesheet_path()?);
    let updater = LocalAssetUpdater::new(settings.assets_path()?);
    Ok(Installer::new(target, updater))
}

/// User-facing notification for the outcome of `what`
pub fn notification(what: &str, status: InstallStatus) -> String {
    match status {
        InstallStatus::Installed => format!(
            "{} {}. Restart the editor to see the change.",
            "Done:".green(),
            what
        ),
        InstallStatus::NotInstalled => {
            format!("{} nothing was installed for {}.", "Note:".yellow(), what)
        }
        InstallStatus::NetworkFailure => format!(
            "{} could not fetch assets for {}. Check your network connection and try again.",
            "Failed:".red(),
            what
        ),
        InstallStatus::Failure => format!(
            "{} unable to apply {}. The editor stylesheet may not be writable; \
             try again with elevated permissions or set --stylesheet. \
             Run with RUST_LOG=debug for details.",
            "Failed:".red(),
            what
        ),
    }
}
