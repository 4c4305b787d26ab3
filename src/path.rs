use crate::error::Result;
use crate::options::SanitizeOptions;
use crate::sanitizer::Sanitizer;
use log::debug;
use std::path::{Component, Path, PathBuf};

/// Sanitize the final segment of `path`, leaving its directory untouched.
///
/// The path is made absolute first, so a relative path comes back rooted
/// at the current working directory.
pub fn sanitize_path(path: impl AsRef<Path>, options: &SanitizeOptions) -> Result<PathBuf> {
    let sanitizer = Sanitizer::new(options)?;
    sanitize_path_with(&sanitizer, path.as_ref())
}

pub(crate) fn sanitize_path_with(sanitizer: &Sanitizer, path: &Path) -> Result<PathBuf> {
    let absolute = resolve_absolute(path)?;

    let Some(name) = absolute.file_name() else {
        debug!("No final segment in {}, nothing to sanitize", absolute.display());
        return Ok(absolute);
    };

    let sanitized = sanitizer.sanitize(&name.to_string_lossy());
    let dir = absolute.parent().map(Path::to_path_buf).unwrap_or_default();

    if sanitized.is_empty() {
        return Ok(dir);
    }
    Ok(dir.join(sanitized))
}

/// Absolute form of `path` with `.` and `..` folded away lexically.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root leaves the root in place.
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    Ok(cleaned)
}
