//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from structs
//! and their fields during macro expansion.

use syn::parse::ParseStream;
use syn::{Attribute, Field, Ident, LitStr};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Root prefix for `EnvStruct::from_env`.
    pub prefix: String,

    /// Defer parsing of this type to its `ParseEnv` implementation.
    pub custom: bool,
}

impl StructAttrs {
    /// Extract `#[env(prefix = "...", custom)]` from a struct.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.prefix = value.value();
                    return Ok(());
                }

                // custom
                if meta.path.is_ident("custom") {
                    parsed.custom = true;
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed field-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw annotation string, e.g. `"PORT,default=8080"`.
    ///
    /// If `None`, the key is derived from the field name at runtime.
    pub tag: Option<String>,

    /// Leave the field out of the walk entirely.
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract `#[env("...")]` or `#[env(skip)]` from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_args_with(|input: ParseStream| {
                // "KEY,default=VALUE"
                if input.peek(LitStr) {
                    let tag: LitStr = input.parse()?;
                    if attrs.tag.is_some() {
                        return Err(syn::Error::new(tag.span(), "duplicate env annotation"));
                    }
                    attrs.tag = Some(tag.value());
                    return Ok(());
                }

                // skip
                let ident: Ident = input.parse()?;
                if ident == "skip" {
                    attrs.skip = true;
                    return Ok(());
                }

                Err(syn::Error::new(
                    ident.span(),
                    "unsupported env attribute, expected a string or `skip`",
                ))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, DeriveInput};

    #[test]
    fn test_parse_tag_attribute() {
        let field: Field = parse_quote! {
            #[env("PORT,default=8080")]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("PORT,default=8080".to_string()));
        assert!(!attrs.skip);
    }

    #[test]
    fn test_parse_skip() {
        let field: Field = parse_quote! {
            #[env(skip)]
            pub callback: fn()
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip);
        assert_eq!(attrs.tag, None);
    }

    #[test]
    fn test_no_attribute() {
        let field: Field = parse_quote! {
            pub name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, None);
        assert!(!attrs.skip);
    }

    #[test]
    fn test_other_attributes_ignored() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            #[env("X")]
            pub x: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("X".to_string()));
    }

    #[test]
    fn test_unknown_field_attribute() {
        let field: Field = parse_quote! {
            #[env(from_file)]
            pub x: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_duplicate_tag() {
        let field: Field = parse_quote! {
            #[env("A")]
            #[env("B")]
            pub x: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_struct_attrs() {
        let input: DeriveInput = parse_quote! {
            #[env(prefix = "APP", custom)]
            struct Config {}
        };

        let attrs = StructAttrs::from_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.prefix, "APP");
        assert!(attrs.custom);
    }

    #[test]
    fn test_struct_attrs_default() {
        let input: DeriveInput = parse_quote! {
            struct Config {}
        };

        let attrs = StructAttrs::from_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.prefix, "");
        assert!(!attrs.custom);
    }

    #[test]
    fn test_unknown_struct_attribute() {
        let input: DeriveInput = parse_quote! {
            #[env(rename_all = "lower")]
            struct Config {}
        };

        assert!(StructAttrs::from_attrs(&input.attrs).is_err());
    }
}
