//! Single-key accessors.
//!
//! Unlike the struct walker these never fail: a missing or unparsable value
//! yields `T::default()`.

use crate::key::prefixed;
use crate::source::ValueSource;
use crate::value::EnvValue;
use crate::walker::Parser;

/// Read one key from the process environment.
///
/// Returns `T::default()` when the variable is unset, empty or cannot be
/// parsed.
pub fn get<T: EnvValue + Default>(key: &str) -> T {
    Getter::new().get(key)
}

/// Read one key, returning `default` when the result equals
/// `T::default()`.
pub fn get_or<T: EnvValue + Default + PartialEq>(key: &str, default: T) -> T {
    Getter::new().get_or(key, default)
}

/// Accessor bound to a key provider and a value source.
///
/// ```rust
/// # use envtree::Getter;
/// # std::env::set_var("MYAPP_WORKERS", "4");
/// let env = Getter::with_prefix("MYAPP");
/// let workers: usize = env.get("WORKERS");
/// assert_eq!(workers, 4);
/// assert_eq!(env.get_or("THREADS", 8usize), 8);
/// ```
#[derive(Debug)]
pub struct Getter {
    parser: Parser,
}

impl Getter {
    /// Process environment, keys used verbatim.
    pub fn new() -> Self {
        Self::from_parser(Parser::builder().key_fn(|key: &str| key.to_string()).build())
    }

    /// Process environment, keys looked up as `{prefix}_{name}`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::from_parser(Parser::builder().key_fn(prefixed(prefix)).build())
    }

    /// Arbitrary source, keys used verbatim.
    pub fn with_source(source: impl ValueSource + 'static) -> Self {
        Self::from_parser(
            Parser::builder()
                .key_fn(|key: &str| key.to_string())
                .source(source)
                .build(),
        )
    }

    /// Reuse the key transform and source of an existing parser.
    pub fn from_parser(parser: Parser) -> Self {
        Self { parser }
    }

    pub fn get<T: EnvValue + Default>(&self, name: &str) -> T {
        let raw = match self.parser.resolve(name, "") {
            Ok(raw) if !raw.is_empty() => raw,
            Ok(_) => return T::default(),
            Err(e) => {
                tracing::debug!(key = name, error = %e, "lookup failed, using zero value");
                return T::default();
            }
        };

        T::parse_new(&self.parser, &raw, "", name).unwrap_or_else(|e| {
            tracing::debug!(key = name, error = %e, "parse failed, using zero value");
            T::default()
        })
    }

    pub fn get_or<T: EnvValue + Default + PartialEq>(&self, name: &str, default: T) -> T {
        let value = self.get(name);
        if value == T::default() {
            default
        } else {
            value
        }
    }
}

impl Default for Getter {
    fn default() -> Self {
        Self::new()
    }
}
