use clap::Parser;

use blockstego_core::{CodecOptions, StegoError};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_kdf_iterations(args.kdf_iterations);

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(),
    }
}
