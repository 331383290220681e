use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::builder::factory::{Flavour, Strategy};
use crate::error::GenError;

/// File-name prefix that marks a file as a page-object template.
pub const DEFAULT_PREFIX: &str = "POGE_";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "pagegen",
    version,
    about = "Generates page-object source classes from declarative templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: pagegen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover templates, generate one source class per template
    Generate {
        /// Directory to scan for template files
        #[arg(long)]
        templates: Option<String>,

        /// Output directory for generated sources
        #[arg(short, long)]
        out: Option<String>,

        /// Target automation library: selenium
        #[arg(long)]
        flavour: Option<String>,

        /// Code-shape convention: page-factory
        #[arg(long)]
        strategy: Option<String>,

        /// Template file-name prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Base package prepended to each template's declared package
        #[arg(long)]
        packages: Option<String>,
    },

    /// Discover and parse templates without generating anything
    Check {
        /// Directory to scan for template files
        #[arg(long)]
        templates: Option<String>,

        /// Template file-name prefix
        #[arg(long)]
        prefix: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `pagegen.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_templates_dir")]
    pub templates: String,

    #[serde(default = "default_output_dir")]
    pub out: String,

    #[serde(default = "default_flavour")]
    pub flavour: String,

    #[serde(default = "default_strategy")]
    pub strategy: String,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub packages: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            templates: default_templates_dir(),
            out: default_output_dir(),
            flavour: default_flavour(),
            strategy: default_strategy(),
            prefix: default_prefix(),
            packages: String::new(),
        }
    }
}

// Serde default helpers
fn default_templates_dir() -> String { "templates".to_string() }
fn default_output_dir() -> String { "generated".to_string() }
fn default_flavour() -> String { "selenium".to_string() }
fn default_strategy() -> String { "page-factory".to_string() }
fn default_prefix() -> String { DEFAULT_PREFIX.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load the config file. An explicitly passed path must exist and parse;
/// without one, at most one of `pagegen.yaml` / `pagegen.yml` may be
/// present in the working directory — two is ambiguous and fatal, before
/// any discovery runs. No file at all means defaults.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, GenError> {
    let config_path = match path {
        Some(explicit) => explicit.to_string(),
        None => match resolve_default_config_file()? {
            Some(found) => found,
            None => return Ok(AppConfig::default()),
        },
    };

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        GenError::Configuration(format!("cannot read config file '{}': {}", config_path, e))
    })?;

    serde_yaml::from_str(&content).map_err(|e| {
        GenError::Configuration(format!("malformed config file '{}': {}", config_path, e))
    })
}

fn resolve_default_config_file() -> Result<Option<String>, GenError> {
    let candidates = ["pagegen.yaml", "pagegen.yml"];
    let present: Vec<&str> = candidates
        .into_iter()
        .filter(|c| std::path::Path::new(c).is_file())
        .collect();

    match present.as_slice() {
        [] => Ok(None),
        [one] => Ok(Some(one.to_string())),
        many => Err(GenError::Configuration(format!(
            "more than one configuration file found: {}",
            many.join(", ")
        ))),
    }
}

// ============================================================================
// Generation Configuration
// ============================================================================

/// Per-run configuration, resolved once before any discovery and passed
/// immutably to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub flavour: Flavour,
    pub strategy: Strategy,
    pub prefix: String,
    pub packages: String,
}

/// Build a GenerationConfig from resolved CLI/config tokens. Unknown
/// tokens are configuration errors; known-but-unregistered pairs are left
/// for the builder factory to reject.
pub fn build_generation_config(
    flavour: &str,
    strategy: &str,
    prefix: &str,
    packages: &str,
) -> Result<GenerationConfig, GenError> {
    let flavour = Flavour::from_token(flavour)
        .ok_or_else(|| GenError::Configuration(format!("unknown flavour '{}'", flavour)))?;
    let strategy = Strategy::from_token(strategy)
        .ok_or_else(|| GenError::Configuration(format!("unknown strategy '{}'", strategy)))?;

    Ok(GenerationConfig {
        flavour,
        strategy,
        prefix: prefix.to_string(),
        packages: packages.to_string(),
    })
}
