use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::class_builder::ClassBuilder;
use crate::builder::factory::select;
use crate::cli::config::GenerationConfig;
use crate::emit::java::{Provenance, derived_package, emit, template_fingerprint, write_source_file};
use crate::error::GenError;
use crate::template::discovery::{TemplateFile, discover_templates};
use crate::template::parser::parser_for;
use crate::template::template_model::PageObjectTemplate;

pub mod builder;
pub mod cli;
pub mod emit;
pub mod error;
pub mod template;

// ============================================================================
// Generation pipeline
// ============================================================================

/// Run the full pipeline: discover every template under `templates_dir`,
/// parse each into its canonical form, assemble a class descriptor through
/// the builder selected for the configured flavour and strategy, and write
/// one source file per template under `output_dir`.
///
/// Fail-fast: the first error aborts the run. Artifacts written before the
/// failing template are not rolled back. Returns the paths written.
pub fn generate_all(
    config: &GenerationConfig,
    templates_dir: &Path,
    output_dir: &Path,
    verbose: u8,
) -> Result<Vec<PathBuf>, GenError> {
    let files = discover_templates(templates_dir, &config.prefix)?;

    let mut seen_classes = HashSet::new();
    let mut written = Vec::with_capacity(files.len());

    for file in &files {
        let (source, template) = parse_template(file)?;

        if verbose > 0 {
            eprintln!("  Parsed: {} ({})", file.path.display(), template.class_name);
        }

        if !seen_classes.insert(template.class_name.clone()) {
            return Err(GenError::DuplicateClass {
                class_name: template.class_name,
                path: file.path.clone(),
            });
        }

        let mut builder: Box<dyn ClassBuilder> =
            select(config.flavour, config.strategy, &template.class_name)?;
        builder
            .add_fields(&template.elements)
            .add_constructor()
            .add_getters();
        let descriptor = builder.build();

        let package = derived_package(&config.packages, &template.packages);
        let provenance = Provenance {
            source_file: file_name_of(&file.path),
            fingerprint: template_fingerprint(&source),
        };

        let artifact = emit(&descriptor, &package, &provenance);
        let full_path = write_source_file(output_dir, &artifact)?;

        if verbose > 0 {
            eprintln!("  Wrote: {}", full_path.display());
        }
        written.push(full_path);
    }

    Ok(written)
}

/// Discover and parse every template without building or emitting
/// anything. Enforces the same run-level class-name uniqueness as
/// `generate_all`, so a clean check means a clean generation.
pub fn check_all(
    templates_dir: &Path,
    prefix: &str,
    verbose: u8,
) -> Result<Vec<(TemplateFile, PageObjectTemplate)>, GenError> {
    let files = discover_templates(templates_dir, prefix)?;

    let mut seen_classes = HashSet::new();
    let mut parsed = Vec::with_capacity(files.len());

    for file in files {
        let (_, template) = parse_template(&file)?;

        if verbose > 0 {
            eprintln!("  Parsed: {} ({})", file.path.display(), template.class_name);
        }

        if !seen_classes.insert(template.class_name.clone()) {
            return Err(GenError::DuplicateClass {
                class_name: template.class_name,
                path: file.path.clone(),
            });
        }

        parsed.push((file, template));
    }

    Ok(parsed)
}

// ============================================================================
// Helpers
// ============================================================================

/// Read one discovered file and run it through the parser its format maps
/// to. Returns the raw source too, for provenance fingerprinting.
fn parse_template(file: &TemplateFile) -> Result<(String, PageObjectTemplate), GenError> {
    let source = fs::read_to_string(&file.path).map_err(|e| GenError::Io {
        context: format!("reading template file {}", file.path.display()),
        source: e,
    })?;

    let template = parser_for(file.format).parse(&source, &file.path)?;
    Ok((source, template))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
