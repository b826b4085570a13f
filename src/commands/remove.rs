//! Remove command - Strip every managed block from the stylesheet

use anyhow::Result;

use super::utils;
use editor_decor::config::Settings;
use editor_decor::install::InstallStatus;

/// Execute the remove command and print the outcome
pub fn execute(settings: &Settings) -> Result<InstallStatus> {
    let status = utils::installer(settings)?.remove();
    println!("{}", utils::notification("decoration removal", status));
    Ok(status)
}
