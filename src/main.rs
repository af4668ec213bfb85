use clap::Parser;
use color_eyre::Result;

use footnote_tip::cli::{Cli, run};
use footnote_tip::config::{load_config, load_config_from_path};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();

    let config_result = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }

    let output = run(&cli.command, &config_result.config)?;
    print!("{}", output);

    Ok(())
}
