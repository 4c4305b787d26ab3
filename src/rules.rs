//! Fixed character classes shared by every sanitizer instance.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

// Invalid characters for Windows: < > : " / \ | ? *
// plus ASCII control characters (0-31)
static RESERVED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).expect("Failed to compile reserved chars regex")
});

// C0 and C1 control ranges
static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x1F\x{80}-\x{9F}]").expect("Failed to compile control chars regex")
});

static LEADING_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.+").expect("Failed to compile leading dots regex"));

static RESERVED_DEVICE_NAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(con|prn|aux|nul|com[0-9]|lpt[0-9])$")
        .expect("Failed to compile reserved device names regex")
});

pub fn replace_reserved_chars<'a>(input: &'a str, replacement: &str) -> Cow<'a, str> {
    RESERVED_CHARS.replace_all(input, NoExpand(replacement))
}

pub fn replace_control_chars<'a>(input: &'a str, replacement: &str) -> Cow<'a, str> {
    CONTROL_CHARS.replace_all(input, NoExpand(replacement))
}

/// Replace a leading run of dots, as a whole, with a single `replacement`.
pub fn replace_leading_dots<'a>(input: &'a str, replacement: &str) -> Cow<'a, str> {
    LEADING_DOTS.replace(input, NoExpand(replacement))
}

pub fn contains_reserved_char(text: &str) -> bool {
    RESERVED_CHARS.is_match(text)
}

pub fn contains_control_char(text: &str) -> bool {
    CONTROL_CHARS.is_match(text)
}

/// True when the whole of `name` is a legacy device name such as `CON` or `lpt1`.
pub fn is_reserved_device_name(name: &str) -> bool {
    RESERVED_DEVICE_NAMES.is_match(name)
}
