//! List command - Show decorations available in the asset directory

use anyhow::Result;

use editor_decor::config::Settings;
use editor_decor::decoration::LocalAssetUpdater;

/// List decoration names, one per line
pub fn execute(settings: &Settings) -> Result<String> {
    let updater = LocalAssetUpdater::new(settings.assets_path()?);
    let names = updater.decorations()?;

    if names.is_empty() {
        return Ok(format!(
            "No decorations found in {}",
            updater.assets_dir().display()
        ));
    }

    let mut output = names.join("\n");
    output.push_str(&format!("\n\n{} decorations found", names.len()));
    Ok(output)
}
