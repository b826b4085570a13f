//! Status command - Show which decorations are in the stylesheet

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::fs;

use super::utils;
use editor_decor::config::Settings;
use editor_decor::stylesheet::Marker;

/// Render a table of managed blocks for the configured stylesheet
pub fn execute(settings: &Settings) -> Result<String> {
    let installer = utils::installer(settings)?;
    let target = installer.target();

    let installed = installer
        .installed_markers()
        .context("Failed to inspect stylesheet")?;
    let size = fs::metadata(&target.stylesheet)
        .map(|m| m.len())
        .unwrap_or(0);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Block"), Cell::new("Marker"), Cell::new("Installed")]);

    for marker in Marker::ALL {
        let present = if installed.contains(&marker) { "yes" } else { "no" };
        table.add_row(vec![
            Cell::new(marker.to_string()),
            Cell::new(marker.token()),
            Cell::new(present),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\nStylesheet: {} ({})",
        target.stylesheet.display(),
        utils::format_size(size)
    ));
    output.push_str(&format!(
        "\nCache marker: {}",
        if target.cache_marker.exists() {
            "present"
        } else {
            "absent"
        }
    ));
    output.push_str(&format!(
        "\nWritable: {}",
        if installer.can_write_target() { "yes" } else { "no" }
    ));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_status_table() {
        let tmp = TempDir::new().unwrap();
        let stylesheet = tmp.path().join("main.css");
        fs::write(&stylesheet, "body{}\n/* Background Image */\nw{}").unwrap();
        let settings = Settings {
            stylesheet: Some(stylesheet),
            assets_dir: None,
        };

        let output = execute(&settings).unwrap();

        assert!(output.contains("/* Background Image */"));
        assert!(output.contains("Cache marker: absent"));
        assert!(output.contains("Writable: yes"));
        let wallpaper_row = output.lines().find(|l| l.contains("wallpaper")).unwrap();
        assert!(wallpaper_row.contains("yes"));
        let sticker_row = output.lines().find(|l| l.contains("sticker")).unwrap();
        assert!(sticker_row.contains("no"));
    }

    #[test]
    fn test_status_missing_stylesheet() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings {
            stylesheet: Some(tmp.path().join("missing.css")),
            assets_dir: None,
        };
        assert!(execute(&settings).is_err());
    }
}
