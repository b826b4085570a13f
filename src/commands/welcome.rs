//! Welcome command - Show the welcome message

use anyhow::Result;
use log::warn;
use owo_colors::OwoColorize;

use editor_decor::config;
use editor_decor::welcome::{self, WelcomeState};

/// Print the welcome message if this user has never seen it
///
/// Failing to read or persist the state is not worth aborting a command for.
pub fn greet_once() {
    let greeting = config::welcome_state_path().and_then(welcome::attempt_to_greet);
    match greeting {
        Ok(Some(message)) => println!("{}\n", message.cyan()),
        Ok(None) => {}
        Err(e) => warn!("Could not check welcome state: {:#}", e),
    }
}

/// Print the welcome message unconditionally
pub fn execute() -> Result<()> {
    println!("{}", welcome::welcome_message());

    let state = WelcomeState::load(config::welcome_state_path()?)?;
    if let Some(when) = state.greeted_at_display() {
        println!("\nFirst greeted: {}", when.dimmed());
    }
    Ok(())
}
