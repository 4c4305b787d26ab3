//! Turn arbitrary strings into filenames that are safe on common filesystems.
//!
//! ```
//! use filenamify::{SanitizeOptions, sanitize};
//!
//! assert_eq!(sanitize("foo/bar", &SanitizeOptions::default()).unwrap(), "foo!bar");
//! let options = SanitizeOptions::new().with_replacement("_").with_max_length(5);
//! assert_eq!(sanitize("<con>sole", &options).unwrap(), "con_s");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod panic_handler;
pub mod path;
pub mod patterns;
pub mod rules;
pub mod sanitizer;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{FilenamifyError, Result};
pub use options::{DEFAULT_REPLACEMENT, MAX_FILENAME_LENGTH, SanitizeOptions};
pub use path::sanitize_path;
pub use sanitizer::{PIPELINE, Sanitizer, Stage, sanitize};
