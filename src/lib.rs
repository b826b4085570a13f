//! editor-decor library
//!
//! Installs stickers and wallpapers into a code editor by patching marker
//! delimited blocks into its workbench stylesheet, and removes them again
//! without disturbing anything else in the file.

pub mod config;
pub mod decoration;
pub mod install;
pub mod stylesheet;
pub mod welcome;
