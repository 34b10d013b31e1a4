//! Populate nested configuration structs from environment variables
//!
//! `envtree` walks a struct field by field, builds a namespaced key for each
//! one (`APP.SERVER.PORT` → `APP_SERVER_PORT`), looks it up in a value source
//! and coerces the string into the field's type. Defaults live next to the
//! key in a compact annotation string.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvStruct)]` plus `#[env("KEY,default=...")]`
//! - **Nested structs**: keys compose across any depth
//! - **Collections**: `Vec<T>` from `a,b,c`, maps from `k1:v1,k2:v2`
//! - **Named types**: `chrono` time instants, `Duration`, `url::Url`, `Json<T>`
//! - **Self-parsing types**: opt out of the walk with [`ParseEnv`]
//! - **Pluggable sources**: environment, `{KEY}_FILE` secrets, maps, closures
//!
//! # Example
//!
//! ```rust
//! use envtree::EnvStruct;
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, EnvStruct)]
//! struct Server {
//!     #[env("HOST,default=127.0.0.1")]
//!     pub host: String,
//!     #[env("PORT,default=8080")]
//!     pub port: u16,
//!     #[env("TIMEOUT,default=10s")]
//!     pub timeout: Duration,
//! }
//!
//! #[derive(Debug, Default, EnvStruct)]
//! #[env(prefix = "DOCAPP")]
//! struct Config {
//!     #[env("SERVER")]
//!     pub server: Server,
//!     #[env("TAGS,default=api,web")]
//!     pub tags: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), envtree::EnvError> {
//! std::env::set_var("DOCAPP_SERVER_PORT", "3000");
//! let config = Config::from_env()?;
//! assert_eq!(config.server.host, "127.0.0.1");
//! assert_eq!(config.server.port, 3000);
//! assert_eq!(config.server.timeout, Duration::from_secs(10));
//! assert_eq!(config.tags, ["api", "web"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Annotations
//!
//! ## `#[env("KEY,default=VALUE")]`
//!
//! Look up `KEY` under the current prefix; use `VALUE` when the source
//! resolves to an empty string. `VALUE` may contain commas
//! (`"MAP,default=a:1,b:2"`). The `default=` marker is optional
//! (`"PORT,8080"`). Without an annotation the key is the uppercased field
//! name, with `_` at camel-case boundaries.
//!
//! ## `#[env("-")]` / `#[env(skip)]`
//!
//! Leave the field alone. With `skip` the field's type does not need to be
//! parseable at all.
//!
//! ## `#[env(prefix = "APP")]`
//!
//! Root prefix used by [`EnvStruct::from_env`].
//!
//! ## `#[env(custom)]`
//!
//! Hand the subtree to the type's [`ParseEnv`] implementation, which receives
//! the composed key as its prefix.
//!
//! ```rust
//! use envtree::{EnvError, EnvStruct, ParseEnv};
//!
//! #[derive(Debug, Default, EnvStruct)]
//! #[env(custom)]
//! struct Credentials {
//!     user: String,
//! }
//!
//! impl ParseEnv for Credentials {
//!     fn parse_env(&mut self, prefix: &str) -> Result<(), EnvError> {
//!         self.user = std::env::var(format!("{}_USER", prefix.replace('.', "_")))
//!             .unwrap_or_else(|_| "anonymous".to_string());
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Debug, Default, EnvStruct)]
//! struct Config {
//!     #[env("CREDS")]
//!     creds: Credentials,
//! }
//!
//! # fn main() -> Result<(), EnvError> {
//! let config = Config::from_env()?;
//! assert_eq!(config.creds.user, "anonymous");
//! # Ok(())
//! # }
//! ```
//!
//! # Value parsing
//!
//! | Type | Input |
//! |------|-------|
//! | `String` | taken as is |
//! | integers, floats | base-10 `FromStr` for the exact width |
//! | `bool` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `Vec<T>` | split on the first of `,` `;` `-` space that occurs |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `k:v` pairs, split on the first colon |
//! | `DateTime<FixedOffset>`, `DateTime<Utc>`, `NaiveDateTime` | date, time, RFC 3339, RFC 2822 and more |
//! | `Duration` | `10s`, `1h 30m`, `250ms`, `1.5s` |
//! | `url::Url` | absolute URL; relative references such as `/api/v1` are rejected |
//! | `Json<T>` | JSON document |
//!
//! A present value that fails to parse is an error; the default only covers
//! empty values.

mod accessor;
mod coerce;
mod error;
mod key;
mod source;
mod tag;
mod value;
mod walker;

pub use accessor::{get, get_or, Getter};
pub use coerce::{split_list, split_pairs, SEPARATORS};
pub use envtree_derive::EnvStruct;
pub use error::{BoxError, EnvError};
pub use key::{compose_key, default_key_transform, field_key, prefixed, KeyFn};
pub use source::{EnvSource, MapSource, ValueSource};
pub use tag::{parse_tag, TagDirective};
pub use value::{EnvValue, Json, TargetKind};
pub use walker::{EnvStruct, FieldDescriptor, ParseEnv, Parser, ParserBuilder};
