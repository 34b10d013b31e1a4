//! Struct walker

use crate::error::EnvError;
use crate::key::{compose_key, default_key_transform, field_key, KeyFn};
use crate::source::{EnvSource, ValueSource};
use crate::tag::{parse_tag, TagDirective};
use crate::value::{EnvValue, TargetKind};
use std::fmt;

/// Static description of a struct field, emitted by `#[derive(EnvStruct)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier as declared.
    pub name: &'static str,
    /// Raw `#[env("...")]` annotation, if any.
    pub tag: Option<&'static str>,
}

impl FieldDescriptor {
    /// Resolve the annotation into a lookup key and default.
    ///
    /// Without an annotation the key is derived from the field name; an
    /// annotation with a default but no key (`",default=5"`) does the same.
    pub fn directive(&self) -> TagDirective {
        match self.tag {
            None => TagDirective::derived(self.name),
            Some(tag) => {
                let mut directive = parse_tag(tag);
                if directive.key.is_empty() && !directive.default.is_empty() {
                    directive.key = field_key(self.name);
                }
                directive
            }
        }
    }
}

/// A struct whose fields the walker can visit.
///
/// Normally implemented with `#[derive(EnvStruct)]`.
pub trait EnvStruct: EnvValue + Default {
    /// Root prefix used by [`EnvStruct::from_env`].
    const PREFIX: &'static str = "";

    /// Visit every field in declaration order, stopping at the first error.
    fn parse_fields(&mut self, parser: &Parser, prefix: &str) -> Result<(), EnvError>;

    /// Load from the process environment with the default parser.
    ///
    /// # Errors
    ///
    /// - A value cannot be coerced into its field's type
    /// - A custom [`ParseEnv`] implementation fails
    fn from_env() -> Result<Self, EnvError> {
        Self::from_parser(&Parser::default())
    }

    /// Load with an explicit parser, starting from `Self::default()`.
    fn from_parser(parser: &Parser) -> Result<Self, EnvError> {
        let mut value = Self::default();
        parser.parse_struct(&mut value, Self::PREFIX)?;
        Ok(value)
    }
}

/// Lets a type take over parsing of its own subtree.
///
/// Opt in with `#[env(custom)]` next to `#[derive(EnvStruct)]`. The walker
/// then hands over the composed key of the field as `prefix` and returns the
/// result unchanged.
pub trait ParseEnv {
    fn parse_env(&mut self, prefix: &str) -> Result<(), EnvError>;
}

/// Populates structs from a [`ValueSource`].
///
/// Holds the two pluggable pieces: the key transform applied to every
/// composed key, and the source that resolves it.
pub struct Parser {
    key_fn: Box<KeyFn>,
    source: Box<dyn ValueSource>,
}

impl Parser {
    /// Parser over the process environment with `.` → `_` key transform.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    /// Apply the key transform to a composed key.
    pub fn build_key(&self, key: &str) -> String {
        (self.key_fn)(key)
    }

    /// Resolve a composed key through the transform and the source.
    pub fn resolve(&self, key: &str, default: &str) -> Result<String, EnvError> {
        let lookup = self.build_key(key);
        let value = self.source.get(&lookup, default)?;
        tracing::trace!(key = %lookup, found = !value.is_empty(), "resolved key");
        Ok(value)
    }

    /// Populate `dest` from the source, with `prefix` as the root key.
    ///
    /// Stops at the first failing field. Fields set before the failure keep
    /// their values.
    pub fn parse_struct<T: EnvStruct>(&self, dest: &mut T, prefix: &str) -> Result<(), EnvError> {
        tracing::debug!(prefix, type_name = std::any::type_name::<T>(), "parsing struct");
        dest.parse_fields(self, prefix)
    }

    /// Like [`Parser::parse_struct`], allocating `T::default()` first when
    /// `dest` is `None`.
    pub fn parse_into<'a, T: EnvStruct>(
        &self,
        dest: &'a mut Option<T>,
        prefix: &str,
    ) -> Result<&'a mut T, EnvError> {
        let target = dest.get_or_insert_with(T::default);
        self.parse_struct(target, prefix)?;
        Ok(target)
    }

    /// Resolve and assign one field. Called by derived
    /// [`EnvStruct::parse_fields`] implementations.
    ///
    /// Empty values leave the field untouched, except for structures, which
    /// are always walked since their own fields may resolve.
    pub fn parse_field<V: EnvValue>(
        &self,
        target: &mut V,
        field: &FieldDescriptor,
        prefix: &str,
    ) -> Result<(), EnvError> {
        if V::KIND == TargetKind::Unsupported {
            return Ok(());
        }

        let directive = field.directive();
        if directive.is_skip() {
            tracing::trace!(field = field.name, "field skipped by annotation");
            return Ok(());
        }

        let key = compose_key(prefix, &directive.key);
        let raw = self.resolve(&key, &directive.default)?;
        if raw.is_empty() && V::KIND != TargetKind::Structure {
            return Ok(());
        }

        target
            .parse_value(self, &raw, prefix, &key)
            .map_err(|e| e.with_lookup_key(&key, &self.build_key(&key)))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

/// Builder for [`Parser`]. Unset parts fall back to
/// [`default_key_transform`] and [`EnvSource`].
#[derive(Default)]
pub struct ParserBuilder {
    key_fn: Option<Box<KeyFn>>,
    source: Option<Box<dyn ValueSource>>,
}

impl ParserBuilder {
    /// Transform applied to every composed key before lookup.
    pub fn key_fn(mut self, key_fn: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.key_fn = Some(Box::new(key_fn));
        self
    }

    /// Backing store for lookups.
    pub fn source(mut self, source: impl ValueSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn build(self) -> Parser {
        Parser {
            key_fn: self.key_fn.unwrap_or_else(|| Box::new(default_key_transform)),
            source: self.source.unwrap_or_else(|| Box::new(EnvSource::new())),
        }
    }
}
