//! The filename sanitization pipeline.

use crate::error::{FilenamifyError, Result};
use crate::options::SanitizeOptions;
use crate::patterns::{ReplacementPatterns, patterns_for};
use crate::rules;
use log::{debug, trace};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One text-to-text step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReservedChars,
    ControlChars,
    LeadingDots,
    CollapseRepeats,
    StripOuter,
    DeviceNames,
    Truncate,
}

/// Stages in the order they run. Later stages see earlier output, so a
/// replacement that reintroduces a matched character is substituted again.
pub const PIPELINE: [Stage; 7] = [
    Stage::ReservedChars,
    Stage::ControlChars,
    Stage::LeadingDots,
    Stage::CollapseRepeats,
    Stage::StripOuter,
    Stage::DeviceNames,
    Stage::Truncate,
];

/// A validated, reusable sanitizer.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    replacement: String,
    max_length: usize,
    // None for an empty replacement: there is nothing to collapse or strip.
    patterns: Option<Arc<ReplacementPatterns>>,
}

impl Sanitizer {
    pub fn new(options: &SanitizeOptions) -> Result<Self> {
        let replacement = options.replacement();

        if rules::contains_reserved_char(replacement) && rules::contains_control_char(replacement)
        {
            return Err(FilenamifyError::invalid_replacement(
                replacement,
                "replacement string cannot contain reserved filename characters",
            ));
        }

        let patterns = if replacement.is_empty() {
            None
        } else {
            Some(patterns_for(replacement)?)
        };

        debug!(
            "Sanitizer ready: replacement={replacement:?}, max_length={}",
            options.max_length()
        );

        Ok(Self {
            replacement: replacement.to_string(),
            max_length: options.max_length(),
            patterns,
        })
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn sanitize(&self, input: &str) -> String {
        PIPELINE.iter().fold(input.to_string(), |text, &stage| {
            let next = self.apply(stage, text);
            trace!("{stage:?} -> {next:?}");
            next
        })
    }

    /// Run a single stage on `text`.
    pub fn apply(&self, stage: Stage, text: String) -> String {
        match stage {
            Stage::ReservedChars => {
                rules::replace_reserved_chars(&text, &self.replacement).into_owned()
            }
            Stage::ControlChars => {
                rules::replace_control_chars(&text, &self.replacement).into_owned()
            }
            Stage::LeadingDots => {
                rules::replace_leading_dots(&text, &self.replacement).into_owned()
            }
            Stage::CollapseRepeats => match &self.patterns {
                Some(patterns) => patterns.collapse_repeated(&text).into_owned(),
                None => text,
            },
            Stage::StripOuter => match &self.patterns {
                Some(patterns) if text.chars().count() > 1 => {
                    patterns.strip_outer(&text).into_owned()
                }
                _ => text,
            },
            Stage::DeviceNames => {
                if rules::is_reserved_device_name(&text) {
                    text + &self.replacement
                } else {
                    text
                }
            }
            Stage::Truncate => truncate_chars(text, self.max_length),
        }
    }

    /// Sanitize the final segment of `path`, keeping its directory.
    pub fn sanitize_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        crate::path::sanitize_path_with(self, path.as_ref())
    }
}

fn truncate_chars(mut text: String, max_length: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_length) {
        text.truncate(idx);
    }
    text
}

/// Sanitize `input` into a safe filename.
pub fn sanitize(input: &str, options: &SanitizeOptions) -> Result<String> {
    Ok(Sanitizer::new(options)?.sanitize(input))
}
