//! Path rewriting from the template tree to the branded output tree.
//!
//! Directory names in the output tree carry the brand prefix because
//! Terraform resource type names are brand-qualified; the single exception
//! is the registry-mandated `provider` directory, which keeps its literal
//! name at any depth.

use std::path::{Path, PathBuf};

use crate::constants::{PROVIDER_DIR, TEMPLATE_SUFFIX};

/// Decorates one directory segment with the brand prefix.
///
/// The literal `provider` segment passes through unchanged.
pub fn decorate_segment(segment: &str, prefix: &str) -> String {
    if segment == PROVIDER_DIR {
        segment.to_string()
    } else {
        format!("{}_{}", prefix, segment)
    }
}

/// Maps a directory path relative to the template root onto the output tree
/// by decorating every segment.
pub fn rewrite_dir_path(relative: &Path, prefix: &str) -> PathBuf {
    relative
        .iter()
        .map(|segment| decorate_segment(&segment.to_string_lossy(), prefix))
        .collect()
}

/// Maps a template file path relative to the template root onto the output
/// tree. Directory segments are decorated; the file name itself is never
/// decorated and only loses a trailing `.tmpl`, a no-op for files without
/// the suffix.
pub fn rewrite_file_path(relative: &Path, prefix: &str) -> PathBuf {
    let name = match relative.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => String::new(),
    };
    let rendered_name = name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&name);

    let mut target = match relative.parent() {
        Some(parent) => rewrite_dir_path(parent, prefix),
        None => PathBuf::new(),
    };
    target.push(rendered_name);
    target
}
