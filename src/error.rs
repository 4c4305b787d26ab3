use thiserror::Error;

/// Longest replacement prefix shown in error messages, in code points.
const PREVIEW_CHARS: usize = 32;

/// Errors surfaced by the sanitizer and the path adapter.
#[derive(Debug, Error)]
pub enum FilenamifyError {
    #[error("invalid replacement {}: {reason}", preview(.replacement))]
    InvalidReplacement { replacement: String, reason: String },

    #[error("failed to resolve path: {0}")]
    PathResolution(#[from] std::io::Error),
}

impl FilenamifyError {
    pub fn invalid_replacement(replacement: &str, reason: impl Into<String>) -> Self {
        Self::InvalidReplacement {
            replacement: replacement.to_string(),
            reason: reason.into(),
        }
    }
}

fn preview(replacement: &str) -> String {
    let total = replacement.chars().count();
    if total <= PREVIEW_CHARS {
        return format!("{replacement:?}");
    }
    let head: String = replacement.chars().take(PREVIEW_CHARS).collect();
    format!("{head:?}... ({total} chars)")
}

pub type Result<T> = std::result::Result<T, FilenamifyError>;
