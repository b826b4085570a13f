//! editor-decor: CLI for decorating a code editor with stickers and wallpapers
//!
//! Decorations are applied by patching the editor's workbench stylesheet.
//! Restart the editor after each change.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;
use std::path::{Path, PathBuf};

use editor_decor::config::Settings;
use editor_decor::stylesheet::Marker;

mod commands;

#[derive(Parser)]
#[command(name = "editor-decor")]
#[command(about = "Stickers and wallpapers for your code editor", long_about = None)]
#[command(version)]
struct Cli {
    /// Workbench stylesheet to patch (overrides config and EDITOR_DECOR_STYLESHEET)
    #[arg(long, global = true)]
    stylesheet: Option<PathBuf>,

    /// Decoration asset directory (overrides config and EDITOR_DECOR_ASSETS)
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Put a sticker in the corner of the editor
    Sticker {
        /// Decoration name (see `list`)
        name: String,
    },

    /// Set the editor background wallpaper
    Wallpaper {
        /// Decoration name (see `list`)
        name: String,
    },

    /// Hide the watermark shown when no editor is open
    HideWatermark,

    /// Remove every installed sticker, wallpaper and watermark tweak
    Remove,

    /// Show which decorations are currently installed
    Status,

    /// List decorations available in the asset directory
    List,

    /// Show the welcome message again
    Welcome,
}

impl Commands {
    fn needs_stylesheet(&self) -> bool {
        !matches!(self, Self::List | Self::Welcome)
    }

    fn needs_assets(&self) -> bool {
        matches!(self, Self::Sticker { .. } | Self::Wallpaper { .. } | Self::List)
    }
}

/// Resolve settings: flags > env > config file > platform defaults
///
/// An unreadable config file is only fatal when the flags leave something
/// this command needs unset.
fn load_settings(cli: &Cli, config_path: &Path) -> Result<Settings> {
    let flags_suffice = (cli.stylesheet.is_some() || !cli.command.needs_stylesheet())
        && (cli.assets.is_some() || !cli.command.needs_assets());

    let mut settings = match Settings::load_from(config_path) {
        Ok(settings) => settings,
        Err(e) if flags_suffice => {
            warn!("Ignoring config file: {:#}", e);
            Settings::from_env()
        }
        Err(e) => return Err(e),
    };

    if let Some(stylesheet) = &cli.stylesheet {
        settings.stylesheet = Some(stylesheet.clone());
    }
    if let Some(assets) = &cli.assets {
        settings.assets_dir = Some(assets.clone());
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let settings = load_settings(&cli, &Settings::default_path()?)?;

    if !matches!(cli.command, Commands::Welcome) {
        commands::welcome::greet_once();
    }

    match cli.command {
        Commands::Sticker { name } => {
            commands::install::execute(&settings, Marker::Sticker, Some(&name))?;
        }

        Commands::Wallpaper { name } => {
            commands::install::execute(&settings, Marker::Wallpaper, Some(&name))?;
        }

        Commands::HideWatermark => {
            commands::install::execute(&settings, Marker::HideWatermark, None)?;
        }

        Commands::Remove => {
            commands::remove::execute(&settings)?;
        }

        Commands::Status => {
            println!("{}", commands::status::execute(&settings)?);
        }

        Commands::List => {
            println!("{}", commands::list::execute(&settings)?);
        }

        Commands::Welcome => {
            commands::welcome::execute()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn broken_config(tmp: &TempDir) -> PathBuf {
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        path
    }

    #[test]
    fn test_flags_override_broken_config() {
        let tmp = TempDir::new().unwrap();
        let config = broken_config(&tmp);
        let cli = Cli::parse_from(["editor-decor", "--stylesheet", "/opt/main.css", "remove"]);

        let settings = load_settings(&cli, &config).unwrap();
        assert_eq!(settings.stylesheet, Some(PathBuf::from("/opt/main.css")));
    }

    #[test]
    fn test_broken_config_fatal_without_flags() {
        let tmp = TempDir::new().unwrap();
        let config = broken_config(&tmp);

        let cli = Cli::parse_from(["editor-decor", "remove"]);
        assert!(load_settings(&cli, &config).is_err());

        let cli = Cli::parse_from(["editor-decor", "--stylesheet", "/opt/main.css", "sticker", "rem"]);
        assert!(load_settings(&cli, &config).is_err());
    }

    #[test]
    fn test_welcome_ignores_broken_config() {
        let tmp = TempDir::new().unwrap();
        let config = broken_config(&tmp);
        let cli = Cli::parse_from(["editor-decor", "welcome"]);
        assert!(load_settings(&cli, &config).is_ok());
    }

    #[test]
    fn test_flags_win_over_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("config.json");
        fs::write(&config, r#"{"stylesheet": "/from/file.css", "assets_dir": "/from/file"}"#).unwrap();
        let cli = Cli::parse_from(["editor-decor", "--assets", "/from/flag", "list"]);

        let settings = load_settings(&cli, &config).unwrap();
        assert_eq!(settings.assets_dir, Some(PathBuf::from("/from/flag")));
    }
}
