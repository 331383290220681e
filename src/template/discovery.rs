use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::template::parser::TemplateFormat;

/// A template file located by discovery, tagged with the format its
/// extension maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub format: TemplateFormat,
}

// ============================================================================
// Template discovery
// ============================================================================

/// Walk `dir` recursively and collect every file whose name starts with
/// `prefix` and carries one of the supported extensions. Results are
/// sorted by path so runs are deterministic. An empty result is an error,
/// never an empty run.
pub fn discover_templates(dir: &Path, prefix: &str) -> Result<Vec<TemplateFile>, GenError> {
    let mut matches = Vec::new();
    collect_matching(dir, prefix, &mut matches)?;
    matches.sort();

    if matches.is_empty() {
        return Err(GenError::NoTemplatesFound {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        });
    }

    matches
        .into_iter()
        .map(|path| {
            // Discovery only selects supported extensions, so a missing
            // mapping here means the match rules and the parser registry
            // have drifted apart.
            let format = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(TemplateFormat::from_extension)
                .ok_or_else(|| GenError::UnsupportedFormat { path: path.clone() })?;
            Ok(TemplateFile { path, format })
        })
        .collect()
}

fn collect_matching(dir: &Path, prefix: &str, out: &mut Vec<PathBuf>) -> Result<(), GenError> {
    let entries = fs::read_dir(dir).map_err(|e| GenError::Io {
        context: format!("reading template directory {}", dir.display()),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| GenError::Io {
            context: format!("reading template directory {}", dir.display()),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_matching(&path, prefix, out)?;
        } else if matches_template_pattern(&path, prefix) {
            out.push(path);
        }
    }

    Ok(())
}

/// File name must start with the configured prefix and end in one of the
/// supported extensions; everything else is ignored.
fn matches_template_pattern(path: &Path, prefix: &str) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };

    if !name.starts_with(prefix) {
        return false;
    }

    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| TemplateFormat::from_extension(ext).is_some())
}
