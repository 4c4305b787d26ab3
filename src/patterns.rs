//! Replacement-dependent patterns and the process-wide cache that holds them.
//!
//! Collapsing repeats and trimming the edges both depend on the literal
//! replacement text, so their patterns are compiled on first use of a given
//! replacement and shared afterwards. Entries are inserted once and never
//! evicted or changed.

use crate::error::{FilenamifyError, Result};
use log::{debug, warn};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Compiled patterns for one literal replacement string.
#[derive(Debug)]
pub struct ReplacementPatterns {
    replacement: String,
    repeated: Regex,
    outer: Regex,
}

impl ReplacementPatterns {
    pub fn compile(replacement: &str) -> Result<Self> {
        let escaped = regex::escape(replacement);
        let repeated = Regex::new(&format!("(?:{escaped}){{2,}}"))
            .map_err(|e| FilenamifyError::invalid_replacement(replacement, e.to_string()))?;
        let outer = Regex::new(&format!("^{escaped}|{escaped}$"))
            .map_err(|e| FilenamifyError::invalid_replacement(replacement, e.to_string()))?;
        Ok(Self {
            replacement: replacement.to_string(),
            repeated,
            outer,
        })
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Collapse every run of two or more consecutive replacements into one.
    pub fn collapse_repeated<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.repeated
            .replace_all(input, NoExpand(self.replacement.as_str()))
    }

    /// Strip one replacement anchored at the start and one anchored at the end.
    pub fn strip_outer<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.outer.replace_all(input, NoExpand(""))
    }
}

/// Concurrent insert-once map from replacement text to its patterns.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<HashMap<String, Arc<ReplacementPatterns>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, replacement: &str) -> Result<Arc<ReplacementPatterns>> {
        {
            let entries = self.entries.read().unwrap_or_else(|e| {
                warn!("Pattern cache lock poisoned, recovering");
                PoisonError::into_inner(e)
            });
            if let Some(patterns) = entries.get(replacement) {
                return Ok(Arc::clone(patterns));
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| {
            warn!("Pattern cache lock poisoned, recovering");
            PoisonError::into_inner(e)
        });
        // Another writer may have won the race between the two locks.
        if let Some(patterns) = entries.get(replacement) {
            return Ok(Arc::clone(patterns));
        }
        let patterns = Arc::new(ReplacementPatterns::compile(replacement)?);
        debug!("Compiled patterns for replacement {replacement:?}");
        entries.insert(replacement.to_string(), Arc::clone(&patterns));
        Ok(patterns)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL_CACHE: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

/// Patterns for `replacement` from the process-wide cache.
pub fn patterns_for(replacement: &str) -> Result<Arc<ReplacementPatterns>> {
    GLOBAL_CACHE.get(replacement)
}
