use std::collections::HashSet;
use std::path::Path;

use crate::error::GenError;
use crate::template::template_model::PageObjectTemplate;

// ============================================================================
// Supported formats
// ============================================================================

/// The two interchangeable serializations of the template schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Yaml,
    Json,
}

impl TemplateFormat {
    /// Map a file extension to its format. Returns `None` for anything
    /// outside the supported set.
    pub fn from_extension(ext: &str) -> Option<TemplateFormat> {
        match ext {
            "yaml" | "yml" => Some(TemplateFormat::Yaml),
            "json" => Some(TemplateFormat::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Parser contract
// ============================================================================

/// Parses one raw template file into its canonical form. Parsing is
/// all-or-nothing: no partial template is ever returned.
pub trait TemplateParser {
    fn parse(&self, source: &str, path: &Path) -> Result<PageObjectTemplate, GenError>;
}

/// Select the parser implementation for a format.
pub fn parser_for(format: TemplateFormat) -> Box<dyn TemplateParser> {
    match format {
        TemplateFormat::Yaml => Box::new(YamlParser),
        TemplateFormat::Json => Box::new(JsonParser),
    }
}

// ============================================================================
// Concrete parsers
// ============================================================================

pub struct YamlParser;

impl TemplateParser for YamlParser {
    fn parse(&self, source: &str, path: &Path) -> Result<PageObjectTemplate, GenError> {
        let template: PageObjectTemplate =
            serde_yaml::from_str(source).map_err(|e| GenError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        validate_template(&template, path)?;
        Ok(template)
    }
}

pub struct JsonParser;

impl TemplateParser for JsonParser {
    fn parse(&self, source: &str, path: &Path) -> Result<PageObjectTemplate, GenError> {
        let template: PageObjectTemplate =
            serde_json::from_str(source).map_err(|e| GenError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        validate_template(&template, path)?;
        Ok(template)
    }
}

// ============================================================================
// Structural validation (shared by both formats)
// ============================================================================

/// Schema rules that serde cannot express: identifier validity and
/// element-name uniqueness. Duplicate element names are rejected here
/// rather than resolved silently.
fn validate_template(template: &PageObjectTemplate, path: &Path) -> Result<(), GenError> {
    if !is_valid_identifier(&template.class_name) {
        return Err(parse_error(
            path,
            format!("className '{}' is not a valid identifier", template.class_name),
        ));
    }

    let mut seen = HashSet::new();
    for element in &template.elements {
        if !is_valid_identifier(&element.name) {
            return Err(parse_error(
                path,
                format!("element name '{}' is not a valid identifier", element.name),
            ));
        }
        if !seen.insert(element.name.as_str()) {
            return Err(parse_error(
                path,
                format!("duplicate element name '{}'", element.name),
            ));
        }
    }

    Ok(())
}

fn parse_error(path: &Path, message: String) -> GenError {
    GenError::Parse {
        path: path.to_path_buf(),
        message,
    }
}

/// Non-empty, starts with a letter or underscore, continues with letters,
/// digits or underscores.
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
