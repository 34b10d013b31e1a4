//! Error types for struct population

use std::fmt;

/// Boxed error returned by custom parsers and named-type converters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while populating a struct from a value source.
///
/// The first error aborts the walk. Fields assigned before the failure keep
/// their new values, so a struct that failed to parse should be discarded.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A resolved string could not be coerced into the target type.
    ///
    /// Covers integers, floats, booleans and malformed `key:value` pairs.
    #[error("Failed to parse '{value}' for '{key}' as {type_name}: {message}")]
    BadFormat {
        /// Variable name the value was looked up under
        key: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Offending input
        value: String,
        /// Reason reported by the parser
        message: String,
    },

    /// A named-type converter (duration, URL, JSON) rejected the input.
    #[error("Failed to parse '{value}' for '{key}' as {type_name}: {source}")]
    ParseFailure {
        /// Variable name the value was looked up under
        key: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Offending input
        value: String,
        /// Underlying format error
        source: BoxError,
    },

    /// No known time layout matched the input.
    #[error("No time layout matched '{value}' for '{key}': {}", TimeAttempts(.attempts))]
    TimeFormatExhausted {
        /// Variable name the value was looked up under
        key: String,
        /// Offending input
        value: String,
        /// Every layout that was tried, with its parse error
        attempts: Vec<(&'static str, chrono::ParseError)>,
    },

    /// Failed to read a secret file named by a `{KEY}_FILE` variable.
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the `{KEY}_FILE` variable (e.g. "API_KEY_FILE")
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A variable is set but its value is not valid Unicode.
    #[error("Environment variable '{name}' is not valid unicode")]
    NotUnicode {
        /// Name of the offending variable
        name: String,
    },

    /// Error raised by a [`ParseEnv`](crate::ParseEnv) implementation.
    #[error(transparent)]
    Custom(BoxError),
}

impl EnvError {
    /// Create a format error for target type `T`.
    pub fn bad_format<T: ?Sized>(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl fmt::Display,
    ) -> Self {
        Self::BadFormat {
            key: key.into(),
            type_name: std::any::type_name::<T>().to_string(),
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Create a named-type conversion error for target type `T`.
    pub fn parse_failure<T: ?Sized>(
        key: impl Into<String>,
        value: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::ParseFailure {
            key: key.into(),
            type_name: std::any::type_name::<T>().to_string(),
            value: value.into(),
            source: source.into(),
        }
    }

    /// Report `lookup` instead of the dotted `composed` key.
    pub(crate) fn with_lookup_key(mut self, composed: &str, lookup: &str) -> Self {
        match &mut self {
            Self::BadFormat { key, .. }
            | Self::ParseFailure { key, .. }
            | Self::TimeFormatExhausted { key, .. }
                if *key == composed =>
            {
                *key = lookup.to_string();
            }
            _ => {}
        }
        self
    }

    /// Wrap an arbitrary error, typically from a custom parser.
    pub fn custom(err: impl Into<BoxError>) -> Self {
        Self::Custom(err.into())
    }
}

struct TimeAttempts<'a>(&'a [(&'static str, chrono::ParseError)]);

impl fmt::Display for TimeAttempts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (layout, err)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{layout}: {err}")?;
        }
        Ok(())
    }
}
