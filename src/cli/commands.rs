use std::path::Path;

use crate::cli::config::build_generation_config;
use crate::error::GenError;
use crate::{check_all, generate_all};

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    templates_dir: &str,
    output_dir: &str,
    flavour: &str,
    strategy: &str,
    prefix: &str,
    packages: &str,
    verbose: u8,
) -> Result<(), GenError> {
    let config = build_generation_config(flavour, strategy, prefix, packages)?;

    if verbose > 0 {
        eprintln!(
            "Scanning {} for '{}*' templates ({} / {})...",
            templates_dir,
            config.prefix,
            config.flavour.token(),
            config.strategy.token()
        );
    }

    let written = generate_all(
        &config,
        Path::new(templates_dir),
        Path::new(output_dir),
        verbose,
    )?;

    println!(
        "Generated {} page object{} in {}/",
        written.len(),
        if written.len() == 1 { "" } else { "s" },
        output_dir
    );
    Ok(())
}

// ============================================================================
// check subcommand
// ============================================================================

/// Discover and parse every template, reporting what would be generated.
/// Writes nothing.
pub fn cmd_check(templates_dir: &str, prefix: &str, verbose: u8) -> Result<(), GenError> {
    if verbose > 0 {
        eprintln!("Scanning {} for '{}*' templates...", templates_dir, prefix);
    }

    let parsed = check_all(Path::new(templates_dir), prefix, verbose)?;

    for (file, template) in &parsed {
        println!(
            "  {} ({} element{}) <- {}",
            template.class_name,
            template.elements.len(),
            if template.elements.len() == 1 { "" } else { "s" },
            file.path.display()
        );
    }

    println!(
        "Checked {} template file{}: all valid",
        parsed.len(),
        if parsed.len() == 1 { "" } else { "s" }
    );
    Ok(())
}
