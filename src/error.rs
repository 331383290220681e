use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::builder::factory::{Flavour, Strategy};

#[derive(Debug)]
pub enum GenError {
    /// Configuration is ambiguous or invalid (multiple config files,
    /// malformed config content, unknown flavour/strategy token)
    Configuration(String),

    /// Discovery found no template files under the configured directory
    NoTemplatesFound { dir: PathBuf, prefix: String },

    /// A discovered file's extension maps to no known parser
    UnsupportedFormat { path: PathBuf },

    /// Template content is malformed or violates the schema
    Parse { path: PathBuf, message: String },

    /// Two templates in one run declare the same class name
    DuplicateClass { class_name: String, path: PathBuf },

    /// No builder is registered for the configured flavour/strategy pair
    UnsupportedCombination { flavour: Flavour, strategy: Strategy },

    /// Writing a generated source file failed
    Emission { path: PathBuf, source: io::Error },

    /// Filesystem access failed outside of emission
    Io { context: String, source: io::Error },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Configuration(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            GenError::NoTemplatesFound { dir, prefix } => {
                write!(
                    f,
                    "No template files matching '{}*' were found under {}",
                    prefix,
                    dir.display()
                )
            }
            GenError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "No parser is registered for the extension of {}",
                    path.display()
                )
            }
            GenError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            GenError::DuplicateClass { class_name, path } => {
                write!(
                    f,
                    "Class '{}' is declared by more than one template (second declaration in {})",
                    class_name,
                    path.display()
                )
            }
            GenError::UnsupportedCombination { flavour, strategy } => {
                write!(
                    f,
                    "No builder is registered for flavour '{}' with strategy '{}'",
                    flavour.token(),
                    strategy.token()
                )
            }
            GenError::Emission { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            GenError::Io { context, source } => {
                write!(f, "I/O error while {}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Emission { source, .. } => Some(source),
            GenError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
