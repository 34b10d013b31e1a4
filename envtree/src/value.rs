//! Per-type value dispatch.
//!
//! Every type that can sit in a configuration struct implements
//! [`EnvValue`]: it declares its [`TargetKind`] and knows how to write a
//! coerced string into itself.

use crate::coerce;
use crate::error::EnvError;
use crate::walker::Parser;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// Closed set of shapes a configuration field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Text,
    SignedInt,
    UnsignedInt,
    Float,
    Bool,
    NamedTime,
    NamedDuration,
    NamedUrl,
    NamedJson,
    Map,
    Sequence,
    Structure,
    /// Cannot carry configuration; fields of this kind are ignored.
    Unsupported,
}

/// A value the walker can populate from a string.
///
/// `prefix` and `key` locate the value: for a struct field `key` is the
/// composed key and `prefix` its parent's; for sequence elements and map
/// entries `prefix` is the container's key and `key` is empty.
pub trait EnvValue: Sized {
    const KIND: TargetKind;

    /// Build a fresh value from `raw`.
    fn parse_new(parser: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError>;

    /// Write `raw` into an existing slot. Replaces the value unless the type
    /// merges into what is already there (structures, sequences).
    fn parse_value(
        &mut self,
        parser: &Parser,
        raw: &str,
        prefix: &str,
        key: &str,
    ) -> Result<(), EnvError> {
        *self = Self::parse_new(parser, raw, prefix, key)?;
        Ok(())
    }
}

/// Key to report in errors: the composed key, or the container's key for
/// elements that have none of their own.
pub(crate) fn error_key<'a>(prefix: &'a str, key: &'a str) -> &'a str {
    if key.is_empty() {
        prefix
    } else {
        key
    }
}

impl EnvValue for String {
    const KIND: TargetKind = TargetKind::Text;

    fn parse_new(_: &Parser, raw: &str, _: &str, _: &str) -> Result<Self, EnvError> {
        Ok(raw.to_string())
    }
}

macro_rules! impl_number {
    ($kind:ident => $($ty:ty),*) => {$(
        impl EnvValue for $ty {
            const KIND: TargetKind = TargetKind::$kind;

            fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
                coerce::parse_number(error_key(prefix, key), raw)
            }
        }
    )*};
}

impl_number!(SignedInt => i8, i16, i32, i64, i128, isize);
impl_number!(UnsignedInt => u8, u16, u32, u64, u128, usize);
impl_number!(Float => f32, f64);

impl EnvValue for bool {
    const KIND: TargetKind = TargetKind::Bool;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        coerce::parse_bool(error_key(prefix, key), raw)
    }
}

impl EnvValue for DateTime<FixedOffset> {
    const KIND: TargetKind = TargetKind::NamedTime;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        coerce::parse_time(error_key(prefix, key), raw)
    }
}

impl EnvValue for DateTime<Utc> {
    const KIND: TargetKind = TargetKind::NamedTime;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        Ok(coerce::parse_time(error_key(prefix, key), raw)?.with_timezone(&Utc))
    }
}

impl EnvValue for NaiveDateTime {
    const KIND: TargetKind = TargetKind::NamedTime;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        Ok(coerce::parse_time(error_key(prefix, key), raw)?.naive_utc())
    }
}

impl EnvValue for Duration {
    const KIND: TargetKind = TargetKind::NamedDuration;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        coerce::parse_duration(error_key(prefix, key), raw)
    }
}

impl EnvValue for url::Url {
    const KIND: TargetKind = TargetKind::NamedUrl;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        coerce::parse_url(error_key(prefix, key), raw)
    }
}

/// A value stored as JSON, e.g. `TAGS=["a","b"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: DeserializeOwned> EnvValue for Json<T> {
    const KIND: TargetKind = TargetKind::NamedJson;

    fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        serde_json::from_str(raw)
            .map(Json)
            .map_err(|e| EnvError::parse_failure::<T>(error_key(prefix, key), raw, e))
    }
}

/// A `None` slot is allocated on first write, so a structure behind an
/// `Option` is always walked.
impl<T: EnvValue> EnvValue for Option<T> {
    const KIND: TargetKind = T::KIND;

    fn parse_new(parser: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        T::parse_new(parser, raw, prefix, key).map(Some)
    }

    fn parse_value(
        &mut self,
        parser: &Parser,
        raw: &str,
        prefix: &str,
        key: &str,
    ) -> Result<(), EnvError> {
        match self {
            Some(value) => value.parse_value(parser, raw, prefix, key),
            None => {
                *self = Self::parse_new(parser, raw, prefix, key)?;
                Ok(())
            }
        }
    }
}

impl<T: EnvValue> EnvValue for Vec<T> {
    const KIND: TargetKind = TargetKind::Sequence;

    fn parse_new(parser: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        let mut seq = Vec::new();
        seq.parse_value(parser, raw, prefix, key)?;
        Ok(seq)
    }

    /// Resizes to the number of parts; surviving elements are parsed in
    /// place.
    fn parse_value(
        &mut self,
        parser: &Parser,
        raw: &str,
        prefix: &str,
        key: &str,
    ) -> Result<(), EnvError> {
        // elements have no key of their own; the sequence key becomes their
        // prefix
        let owner = error_key(prefix, key);
        let parts = coerce::split_list(raw);
        self.truncate(parts.len());
        for (i, part) in parts.into_iter().enumerate() {
            let part = part.trim();
            match self.get_mut(i) {
                Some(slot) => slot.parse_value(parser, part, owner, "")?,
                None => self.push(T::parse_new(parser, part, owner, "")?),
            }
        }
        Ok(())
    }
}

/// Feed each `key:value` pair of a map literal to `insert`.
fn parse_pairs<K, V>(
    parser: &Parser,
    raw: &str,
    key: &str,
    mut insert: impl FnMut(K, V),
) -> Result<(), EnvError>
where
    K: EnvValue,
    V: EnvValue,
{
    for token in coerce::split_pairs(raw) {
        let Some((k, v)) = token.split_once(':') else {
            return Err(EnvError::bad_format::<(K, V)>(
                key,
                token,
                "expected a key:value pair",
            ));
        };

        let map_key = K::parse_new(parser, k.trim(), key, "")?;
        let map_value = V::parse_new(parser, v.trim(), key, "")?;
        insert(map_key, map_value);
    }
    Ok(())
}

impl<K, V, S> EnvValue for HashMap<K, V, S>
where
    K: EnvValue + Eq + Hash,
    V: EnvValue,
    S: BuildHasher + Default,
{
    const KIND: TargetKind = TargetKind::Map;

    fn parse_new(parser: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        let mut map = HashMap::with_hasher(S::default());
        parse_pairs(parser, raw, error_key(prefix, key), |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

impl<K, V> EnvValue for BTreeMap<K, V>
where
    K: EnvValue + Ord,
    V: EnvValue,
{
    const KIND: TargetKind = TargetKind::Map;

    fn parse_new(parser: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
        let mut map = BTreeMap::new();
        parse_pairs(parser, raw, error_key(prefix, key), |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

// Function pointers cannot carry configuration: fields are left untouched,
// and a fresh one cannot be made from a string.
macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> EnvValue for fn($($arg),*) -> R {
            const KIND: TargetKind = TargetKind::Unsupported;

            fn parse_new(_: &Parser, raw: &str, prefix: &str, key: &str) -> Result<Self, EnvError> {
                Err(EnvError::bad_format::<Self>(
                    error_key(prefix, key),
                    raw,
                    "function values cannot be configured",
                ))
            }

            fn parse_value(&mut self, _: &Parser, _: &str, _: &str, _: &str) -> Result<(), EnvError> {
                Ok(())
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
