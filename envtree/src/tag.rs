//! Annotation string grammar.
//!
//! A field annotation has one of these shapes:
//!
//! - `"KEY"`: look up `KEY`, no default
//! - `"KEY,default=VALUE"`: look up `KEY`, fall back to `VALUE`
//! - `"KEY,VALUE"`: same as above without the marker
//! - `"-"` (or an empty string): skip the field
//!
//! `VALUE` may itself contain commas; everything after the first comma is
//! rejoined into the default.

const SKIP: &str = "-";
const DEFAULT_MARKER: &str = "default=";

/// Parsed form of a field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDirective {
    /// Lookup key relative to the current prefix. Empty means "derive from
    /// the field name" unless the directive is a skip.
    pub key: String,
    /// Value used when the source resolves to an empty string.
    pub default: String,
}

impl TagDirective {
    /// Directive for a field without annotation.
    pub fn derived(field_name: &str) -> Self {
        Self {
            key: crate::key::field_key(field_name),
            default: String::new(),
        }
    }

    /// True when both key and default are empty, i.e. the field is not
    /// bound to any key.
    pub fn is_skip(&self) -> bool {
        self.key.is_empty() && self.default.is_empty()
    }
}

/// Parse a raw annotation string into its key and default value.
pub fn parse_tag(raw: &str) -> TagDirective {
    let raw = raw.trim();
    if raw.is_empty() || raw == SKIP {
        return TagDirective::default();
    }

    let Some((key, rest)) = raw.split_once(',') else {
        return TagDirective {
            key: raw.to_string(),
            default: String::new(),
        };
    };

    // Only the segment right after the key carries the marker; the rest are
    // pieces of a comma-containing default.
    let (first, tail) = match rest.split_once(',') {
        Some((first, tail)) => (first, Some(tail)),
        None => (rest, None),
    };
    let mut default = first.replace(DEFAULT_MARKER, "");
    if let Some(tail) = tail {
        default.push(',');
        default.push_str(tail);
    }

    TagDirective {
        key: key.trim().to_string(),
        default,
    }
}
