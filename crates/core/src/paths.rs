//! Canonical path construction for assembled job environments
//!
//! Single source of truth for the on-disk layout
//! `{workingDir}/genie/{kind}/{id}[/{category}]/{fileName}`. All writers
//! must construct paths through these functions. The layout is bit-relevant
//! for downstream job-launch scripts, so paths are assembled by plain
//! concatenation with the fixed delimiter and no normalization is applied.

use std::path::PathBuf;

use crate::constants::{FILE_PATH_DELIMITER, GENIE_DIR};
use crate::error::EnvironmentError;
use crate::resource::{FileCategory, ResourceKind};
use crate::Result;

/// Final component of `path`: the portion after the last delimiter, or the
/// whole string when no delimiter occurs.
pub fn file_name(path: &str) -> &str {
    match path.rfind(FILE_PATH_DELIMITER) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// `{workingDir}/genie/{kindSegment}/{id}`
pub fn resource_instance_dir(
    working_dir: &str,
    id: &str,
    kind: ResourceKind,
) -> Result<PathBuf> {
    instance_dir(working_dir, id, kind).map(PathBuf::from)
}

/// `{workingDir}/genie/{kindSegment}/{id}/config`
pub fn resource_config_dir(working_dir: &str, id: &str, kind: ResourceKind) -> Result<PathBuf> {
    category_dir(working_dir, id, kind, FileCategory::Config)
}

/// `{workingDir}/genie/{kindSegment}/{id}/dependencies`
pub fn resource_dependencies_dir(
    working_dir: &str,
    id: &str,
    kind: ResourceKind,
) -> Result<PathBuf> {
    category_dir(working_dir, id, kind, FileCategory::Dependency)
}

/// Local path a resource file is staged to inside the job working directory.
///
/// `file_category` selects the optional sub-segment (none for setup files)
/// and the file keeps the final component of its source path, so the mapping
/// is deterministic and distinct file names never collide under the same
/// id, kind and category.
///
/// # Errors
/// Returns `EnvironmentError::Validation` if any of the string arguments is
/// blank.
pub fn resolve_local_file_path(
    base_dir: &str,
    id: &str,
    source_file_path: &str,
    file_category: FileCategory,
    resource_kind: ResourceKind,
) -> Result<PathBuf> {
    ensure_not_blank(source_file_path, "source file path")?;

    let mut local = instance_dir(base_dir, id, resource_kind)?;
    if let Some(segment) = file_category.path_segment() {
        local.push(FILE_PATH_DELIMITER);
        local.push_str(segment);
    }
    local.push(FILE_PATH_DELIMITER);
    local.push_str(file_name(source_file_path));

    Ok(PathBuf::from(local))
}

fn instance_dir(working_dir: &str, id: &str, kind: ResourceKind) -> Result<String> {
    ensure_not_blank(working_dir, "working directory")?;
    ensure_not_blank(id, "resource id")?;

    Ok(format!(
        "{working_dir}{d}{GENIE_DIR}{d}{segment}{d}{id}",
        d = FILE_PATH_DELIMITER,
        segment = kind.path_segment(),
    ))
}

fn category_dir(
    working_dir: &str,
    id: &str,
    kind: ResourceKind,
    category: FileCategory,
) -> Result<PathBuf> {
    let mut dir = instance_dir(working_dir, id, kind)?;
    // Config and Dependency always carry a segment; Setup has no directory
    // of its own and never reaches this helper.
    if let Some(segment) = category.path_segment() {
        dir.push(FILE_PATH_DELIMITER);
        dir.push_str(segment);
    }
    Ok(PathBuf::from(dir))
}

fn ensure_not_blank(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EnvironmentError::Validation(format!("{what} cannot be blank")));
    }
    Ok(())
}
