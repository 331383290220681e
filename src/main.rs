use clap::Parser;
use pagegen::cli::commands::{cmd_check, cmd_generate};
use pagegen::cli::config::{Cli, Commands, load_config};
use pagegen::error::GenError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GenError> {
    let config = load_config(cli.config.as_deref())?;
    let defaults = &config.generate;

    // Resolve settings: CLI > config file > defaults
    match cli.command {
        Commands::Generate {
            templates,
            out,
            flavour,
            strategy,
            prefix,
            packages,
        } => cmd_generate(
            templates.as_deref().unwrap_or(&defaults.templates),
            out.as_deref().unwrap_or(&defaults.out),
            flavour.as_deref().unwrap_or(&defaults.flavour),
            strategy.as_deref().unwrap_or(&defaults.strategy),
            prefix.as_deref().unwrap_or(&defaults.prefix),
            packages.as_deref().unwrap_or(&defaults.packages),
            cli.verbose,
        ),
        Commands::Check { templates, prefix } => cmd_check(
            templates.as_deref().unwrap_or(&defaults.templates),
            prefix.as_deref().unwrap_or(&defaults.prefix),
            cli.verbose,
        ),
    }
}
