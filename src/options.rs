use serde::{Deserialize, Serialize};

/// Text substituted for disallowed characters when no replacement is configured.
pub const DEFAULT_REPLACEMENT: &str = "!";

/// Maximum filename length, in code points, when none is configured.
pub const MAX_FILENAME_LENGTH: usize = 100;

/// Caller-facing sanitizer configuration.
///
/// Every field is optional and falls back to its default when unset.
/// An explicit empty replacement is kept as-is and means "delete".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    /// Zero is treated the same as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl SanitizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Layer `overrides` on top of `self`: fields set in `overrides` win.
    pub fn merge(self, overrides: SanitizeOptions) -> Self {
        Self {
            replacement: overrides.replacement.or(self.replacement),
            max_length: overrides.max_length.or(self.max_length),
        }
    }

    pub fn replacement(&self) -> &str {
        self.replacement.as_deref().unwrap_or(DEFAULT_REPLACEMENT)
    }

    pub fn max_length(&self) -> usize {
        match self.max_length {
            Some(n) if n > 0 => n,
            _ => MAX_FILENAME_LENGTH,
        }
    }
}
