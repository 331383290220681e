use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::class_model::{ClassDescriptor, MethodKind, SourceFile};
use crate::error::GenError;

/// Where a generated file came from, recorded in its header comment so a
/// stale artifact can be traced back to its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// File name of the source template
    pub source_file: String,

    /// Content fingerprint of the source template
    pub fingerprint: String,
}

/// Fingerprint of a template's raw content, for provenance headers.
pub fn template_fingerprint(source: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Package and path derivation
// ============================================================================

/// Join the generator's base package with the template's declared package,
/// skipping empty segments.
pub fn derived_package(base: &str, template_packages: &str) -> String {
    let segments: Vec<&str> = [base, template_packages]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    segments.join(".")
}

/// Map a package and class name to a path relative to the output root:
/// `a.b` x `LoginPage` becomes `a/b/LoginPage.java`.
pub fn target_path(package: &str, class_name: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.java", class_name));
    path
}

// ============================================================================
// Source rendering
// ============================================================================

/// Render a class descriptor into a Java source artifact. The renderer is
/// descriptor-driven only: imports, field types, annotations and method
/// bodies all come from the descriptor, never from flavour knowledge.
pub fn emit(descriptor: &ClassDescriptor, package: &str, provenance: &Provenance) -> SourceFile {
    SourceFile {
        relative_path: target_path(package, &descriptor.class_name),
        contents: render(descriptor, package, provenance),
    }
}

pub fn render(descriptor: &ClassDescriptor, package: &str, provenance: &Provenance) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "// Generated by pagegen from {} (sha1 {}). Do not edit.\n",
        provenance.source_file, provenance.fingerprint
    ));

    if !package.is_empty() {
        out.push_str(&format!("package {};\n", package));
    }
    out.push('\n');

    for import in &descriptor.imports {
        out.push_str(&format!("import {};\n", import));
    }
    if !descriptor.imports.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("public class {} {{\n", descriptor.class_name));

    for field in &descriptor.fields {
        out.push_str(&format!(
            "\n    @{}({} = \"{}\")\n",
            field.annotation.annotation_type,
            field.annotation.member,
            escape_java_string(&field.annotation.value)
        ));
        out.push_str(&format!("    private {} {};\n", field.field_type, field.name));
    }

    for method in &descriptor.methods {
        let parameters: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.param_type, p.name))
            .collect();

        let signature = match method.kind {
            MethodKind::Constructor => {
                format!("public {}({})", method.name, parameters.join(", "))
            }
            MethodKind::Accessor => format!(
                "public {} {}({})",
                method.return_type.as_deref().unwrap_or("void"),
                method.name,
                parameters.join(", ")
            ),
        };

        out.push_str(&format!("\n    {} {{\n", signature));
        for line in method.body.lines() {
            out.push_str(&format!("        {}\n", line));
        }
        out.push_str("    }\n");
    }

    out.push_str("}\n");
    out
}

fn escape_java_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

// ============================================================================
// Artifact writing
// ============================================================================

/// Write a rendered artifact under `output_dir`, creating package
/// directories as needed. Returns the full path written.
pub fn write_source_file(output_dir: &Path, file: &SourceFile) -> Result<PathBuf, GenError> {
    let full_path = output_dir.join(&file.relative_path);

    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenError::Emission {
            path: full_path.clone(),
            source: e,
        })?;
    }

    fs::write(&full_path, &file.contents).map_err(|e| GenError::Emission {
        path: full_path.clone(),
        source: e,
    })?;

    Ok(full_path)
}
