//! Derive macro implementation for envtree

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `EnvStruct` derive macro
///
/// Implements `envtree::EnvStruct` and `envtree::EnvValue` so the struct can
/// be walked at the root or nested inside another struct. The struct must
/// also implement `Default`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "APP")]`: Root prefix used by `from_env()`
/// - `#[env(custom)]`: Defer to the type's `ParseEnv` implementation
///
/// **Field-level**:
/// - `#[env("KEY")]`: Lookup key relative to the parent prefix
/// - `#[env("KEY,default=VALUE")]`: Key with a default for empty values
/// - `#[env("-")]`: Skip the field at runtime
/// - `#[env(skip)]`: Leave the field out of the generated code
///
/// # Example
///
/// See the `envtree` crate documentation for usage examples.
#[proc_macro_derive(EnvStruct, attributes(env))]
pub fn derive_env_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Parse struct-level attributes (prefix, custom)
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;
    let prefix = &struct_attrs.prefix;

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvStruct only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvStruct only supports structs",
            ));
        }
    };

    let parse_fields_body = if struct_attrs.custom {
        quote! {
            ::envtree::ParseEnv::parse_env(self, prefix)
        }
    } else {
        // Visit each field in declaration order
        let mut visits = Vec::with_capacity(fields.len());
        for field in fields {
            let attrs = FieldAttrs::from_field(field)?;
            if attrs.skip {
                continue;
            }

            let Some(field_ident) = field.ident.as_ref() else {
                continue;
            };
            let field_name = field_ident.to_string();
            let tag = match &attrs.tag {
                Some(tag) => quote! { ::std::option::Option::Some(#tag) },
                None => quote! { ::std::option::Option::None },
            };

            visits.push(quote! {
                parser.parse_field(
                    &mut self.#field_ident,
                    &::envtree::FieldDescriptor {
                        name: #field_name,
                        tag: #tag,
                    },
                    prefix,
                )?;
            });
        }

        quote! {
            #(#visits)*
            ::std::result::Result::Ok(())
        }
    };

    Ok(quote! {
        impl #impl_generics ::envtree::EnvStruct for #struct_name #ty_generics #where_clause {
            const PREFIX: &'static str = #prefix;

            #[allow(unused_variables)]
            fn parse_fields(
                &mut self,
                parser: &::envtree::Parser,
                prefix: &str,
            ) -> ::std::result::Result<(), ::envtree::EnvError> {
                #parse_fields_body
            }
        }

        impl #impl_generics ::envtree::EnvValue for #struct_name #ty_generics #where_clause {
            const KIND: ::envtree::TargetKind = ::envtree::TargetKind::Structure;

            fn parse_new(
                parser: &::envtree::Parser,
                raw: &str,
                prefix: &str,
                key: &str,
            ) -> ::std::result::Result<Self, ::envtree::EnvError> {
                let mut value = <Self as ::std::default::Default>::default();
                ::envtree::EnvValue::parse_value(&mut value, parser, raw, prefix, key)?;
                ::std::result::Result::Ok(value)
            }

            fn parse_value(
                &mut self,
                parser: &::envtree::Parser,
                _raw: &str,
                _prefix: &str,
                key: &str,
            ) -> ::std::result::Result<(), ::envtree::EnvError> {
                parser.parse_struct(self, key)
            }
        }
    })
}
