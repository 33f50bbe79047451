use clap::{Parser, Subcommand};
use log::error;

use blockstego_core::{KdfParams, StegoError};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// PBKDF2 iterations for the key derivation, hiding and unveiling must agree
    #[arg(
        long = "kdf-iterations",
        global = true,
        default_value_t = KdfParams::default().iterations()
    )]
    pub kdf_iterations: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

/// Asks on the terminal, `confirm` makes the user type it twice
pub fn ask_for_password(confirm: bool) -> CliResult<String> {
    let prompt = dialoguer::Password::new().with_prompt("Password");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    prompt.interact().map_err(|e| {
        error!("Cannot read password: {e}");
        StegoError::MissingPassword
    })
}
