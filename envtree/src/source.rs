//! Value sources

use crate::error::EnvError;
use std::collections::HashMap;
use std::env::{self, VarError};
use std::fs;

/// Resolves a lookup key to the string the walker should coerce.
///
/// Implementations return `default` when the key is absent or resolves to an
/// empty string. The walker calls this synchronously; sources that block on
/// I/O must handle their own timeouts.
pub trait ValueSource: Send + Sync {
    /// Resolve `key`, falling back to `default`.
    fn get(&self, key: &str, default: &str) -> Result<String, EnvError>;
}

impl<F> ValueSource for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn get(&self, key: &str, default: &str) -> Result<String, EnvError> {
        Ok(self(key, default))
    }
}

/// Reads process environment variables.
///
/// With [`EnvSource::with_file_fallback`], a missing `KEY` is looked up as a
/// file path in `KEY_FILE` (Kubernetes/Docker secrets).
///
/// **Loading priority:**
/// 1. Direct env var (`API_KEY`)
/// 2. File path from env var (`API_KEY_FILE`), contents trimmed
/// 3. The default
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource {
    file_fallback: bool,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the `{KEY}_FILE` fallback.
    pub fn with_file_fallback(mut self) -> Self {
        self.file_fallback = true;
        self
    }

    fn read_file(&self, key: &str) -> Result<Option<String>, EnvError> {
        if !self.file_fallback {
            return Ok(None);
        }

        let file_var_name = format!("{}_FILE", key);
        let Some(file_path) = read_var(&file_var_name)? else {
            return Ok(None);
        };

        tracing::debug!(name = %file_var_name, path = %file_path, "reading secret file");
        fs::read_to_string(&file_path)
            .map(|s| Some(s.trim().to_string()))
            .map_err(|e| EnvError::FileRead {
                name: file_var_name,
                path: file_path,
                source: e,
            })
    }
}

/// Read a variable, treating unset and empty alike.
fn read_var(name: &str) -> Result<Option<String>, EnvError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(Some(value)),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
            name: name.to_string(),
        }),
    }
}

impl ValueSource for EnvSource {
    fn get(&self, key: &str, default: &str) -> Result<String, EnvError> {
        if let Some(value) = read_var(key)? {
            return Ok(value);
        }

        match self.read_file(key)? {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Ok(default.to_string()),
        }
    }
}

/// Fixed key/value pairs, useful for tests and hard-coded configuration.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl ValueSource for MapSource {
    fn get(&self, key: &str, default: &str) -> Result<String, EnvError> {
        Ok(match self.values.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => default.to_string(),
        })
    }
}
