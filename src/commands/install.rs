//! Install commands - sticker, wallpaper and hide-watermark

use anyhow::Result;

use super::utils;
use editor_decor::config::Settings;
use editor_decor::decoration::Selection;
use editor_decor::install::InstallStatus;
use editor_decor::stylesheet::Marker;

/// Execute an install command and print the outcome
pub fn execute(settings: &Settings, marker: Marker, name: Option<&str>) -> Result<InstallStatus> {
    let installer = utils::installer(settings)?;

    let status = match (marker, name) {
        (Marker::HideWatermark, _) => installer.hide_watermark(),
        (_, Some(name)) => installer.install(marker, &Selection::new(name)),
        (_, None) => anyhow::bail!("A decoration name is required to install a {}", marker),
    };

    let what = match name {
        Some(name) if marker.needs_assets() => format!("{} '{}'", marker, name),
        _ => marker.to_string(),
    };
    println!("{}", utils::notification(&what, status));

    Ok(status)
}
