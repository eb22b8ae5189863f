// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This crate provides procedural macros for Nomina.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, LitStr,
    Variant,
};

/// A derive macro that implements the `nomina_core::NamedEnum` trait.
///
/// The enum must be unit-only, and any written discriminant must equal the
/// variant's position so that names can be indexed by value. The first
/// variant is the fallback returned for unrecognized names.
///
/// # Attributes
///
/// * `#[named(prefix = "WrapMode")]` on the enum: canonical names become
///   `prefix + variant`.
/// * `#[named(canonical = "...")]` on a variant: overrides its canonical name.
/// * `#[named(alias = "...")]` on a variant (repeatable): extra accepted input
///   names, after the default alias (the variant identifier).
/// * `#[named(hidden)]` on a variant: removes it from the reverse index.
///
/// Besides the trait, the macro emits `Display` (canonical name), a strict
/// `FromStr`, and a catalog entry.
#[proc_macro_derive(NamedEnum, attributes(named))]
pub fn derive_named_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_named_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct VariantNames {
    ident: Ident,
    canonical: String,
    aliases: Vec<String>,
}

fn expand_named_enum(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "NamedEnum cannot be derived for generic enums",
        ));
    }

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "NamedEnum can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "NamedEnum requires at least one variant to act as the fallback",
        ));
    }

    let prefix = parse_prefix(&input.attrs)?;

    let mut variants = Vec::with_capacity(data.variants.len());
    for (position, variant) in data.variants.iter().enumerate() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "NamedEnum variants cannot carry data",
            ));
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            check_discriminant(discriminant, position)?;
        }
        variants.push(parse_variant(variant, &prefix)?);
    }

    check_unique_names(&variants)?;

    let type_name = name.to_string();
    let count = variants.len();
    let fallback = &variants[0].ident;
    let idents: Vec<&Ident> = variants.iter().map(|v| &v.ident).collect();
    let positions = 0..count;
    let canonical: Vec<&str> = variants.iter().map(|v| v.canonical.as_str()).collect();

    let (alias_names, alias_targets): (Vec<&str>, Vec<&Ident>) = variants
        .iter()
        .flat_map(|v| v.aliases.iter().map(move |a| (a.as_str(), &v.ident)))
        .unzip();
    let alias_count = alias_names.len();

    Ok(quote! {
        const _: () = {
            static NAMES: [&str; #count] = [#(#canonical),*];
            static ALIASES: [(&str, #name); #alias_count] = [#((#alias_names, #name::#alias_targets)),*];
            static DESCRIPTOR: ::nomina_core::EnumDescriptor<#name> =
                ::nomina_core::EnumDescriptor::new(#type_name, &NAMES, &ALIASES);

            impl ::nomina_core::NamedEnum for #name {
                const COUNT: usize = #count;
                const FALLBACK: Self = #name::#fallback;

                fn descriptor() -> &'static ::nomina_core::EnumDescriptor<Self> {
                    &DESCRIPTOR
                }

                fn index(self) -> usize {
                    self as usize
                }

                fn from_index(index: usize) -> ::core::option::Option<Self> {
                    match index {
                        #(#positions => ::core::option::Option::Some(#name::#idents),)*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl ::core::fmt::Display for #name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(<Self as ::nomina_core::NamedEnum>::name(*self))
                }
            }

            impl ::core::str::FromStr for #name {
                type Err = ::nomina_core::NameError;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    <Self as ::nomina_core::NamedEnum>::try_from_name(s)
                }
            }
        };

        ::nomina_core::inventory::submit! {
            ::nomina_core::catalog::CatalogEntry::of::<#name>(#type_name)
        }
    })
}

fn parse_prefix(attrs: &[Attribute]) -> syn::Result<String> {
    let mut prefix = String::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("named")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                let value: LitStr = meta.value()?.parse()?;
                prefix = value.value();
                Ok(())
            } else {
                Err(meta.error("unsupported enum attribute, expected `prefix = \"...\"`"))
            }
        })?;
    }
    Ok(prefix)
}

fn parse_variant(variant: &Variant, prefix: &str) -> syn::Result<VariantNames> {
    let ident = variant.ident.clone();
    let mut canonical = None;
    let mut extra_aliases = Vec::new();
    let mut hidden = false;

    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("named")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("canonical") {
                let value: LitStr = meta.value()?.parse()?;
                canonical = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("alias") {
                let value: LitStr = meta.value()?.parse()?;
                extra_aliases.push(value.value());
                Ok(())
            } else if meta.path.is_ident("hidden") {
                hidden = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported variant attribute, expected `canonical`, `alias` or `hidden`",
                ))
            }
        })?;
    }

    if hidden && !extra_aliases.is_empty() {
        return Err(syn::Error::new_spanned(
            variant,
            "a hidden variant cannot declare aliases",
        ));
    }

    let aliases = if hidden {
        Vec::new()
    } else {
        std::iter::once(ident.to_string())
            .chain(extra_aliases)
            .collect()
    };

    Ok(VariantNames {
        canonical: canonical.unwrap_or_else(|| format!("{prefix}{ident}")),
        aliases,
        ident,
    })
}

fn check_discriminant(discriminant: &Expr, position: usize) -> syn::Result<()> {
    match discriminant {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) if int.base10_parse::<usize>().ok() == Some(position) => Ok(()),
        other => Err(syn::Error::new_spanned(
            other,
            format!("discriminant must be the literal `{position}`: names are indexed by value"),
        )),
    }
}

fn check_unique_names(variants: &[VariantNames]) -> syn::Result<()> {
    let mut canonical = HashSet::new();
    let mut aliases = HashSet::new();
    for variant in variants {
        if !canonical.insert(variant.canonical.as_str()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate canonical name `{}`", variant.canonical),
            ));
        }
        for alias in &variant.aliases {
            if !aliases.insert(alias.as_str()) {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    format!("duplicate alias `{alias}`"),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expect_error(input: DeriveInput) -> String {
        match expand_named_enum(&input) {
            Ok(tokens) => panic!("expected a derive error, got `{tokens}`"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_expands_tables_for_valid_enum() {
        let input: DeriveInput = parse_quote! {
            #[named(prefix = "WrapMode")]
            enum WrapMode {
                None = 0,
                Repeat = 1,
                #[named(alias = "MirrorRepeat")]
                MirroredRepeat = 2,
            }
        };
        let tokens = expand_named_enum(&input).unwrap().to_string();
        assert!(tokens.contains("\"WrapModeRepeat\""));
        assert!(tokens.contains("\"MirrorRepeat\""));
        assert!(tokens.contains("inventory :: submit"));
    }

    #[test]
    fn test_rejects_generic_enum() {
        let message = expect_error(parse_quote! {
            enum Slot<T> { Empty, Full(T) }
        });
        assert_eq!(message, "NamedEnum cannot be derived for generic enums");
    }

    #[test]
    fn test_rejects_non_enum_and_empty_enum() {
        let message = expect_error(parse_quote! {
            struct Mode { bits: u8 }
        });
        assert_eq!(message, "NamedEnum can only be derived for enums");

        let message = expect_error(parse_quote! {
            enum Never {}
        });
        assert_eq!(
            message,
            "NamedEnum requires at least one variant to act as the fallback"
        );
    }

    #[test]
    fn test_rejects_data_variants() {
        let message = expect_error(parse_quote! {
            enum Event { None, Key(u32) }
        });
        assert_eq!(message, "NamedEnum variants cannot carry data");

        let message = expect_error(parse_quote! {
            enum Event { None, Move { x: f32 } }
        });
        assert_eq!(message, "NamedEnum variants cannot carry data");
    }

    #[test]
    fn test_rejects_non_contiguous_discriminants() {
        let message = expect_error(parse_quote! {
            enum Format { None = 0, UInt16 = 2 }
        });
        assert_eq!(
            message,
            "discriminant must be the literal `1`: names are indexed by value"
        );

        let message = expect_error(parse_quote! {
            enum Format { None = 1 }
        });
        assert!(message.starts_with("discriminant must be the literal `0`"));

        let message = expect_error(parse_quote! {
            enum Format { None = 0, UInt16 = 0 + 1 }
        });
        assert!(message.starts_with("discriminant must be the literal `1`"));
    }

    #[test]
    fn test_rejects_duplicate_canonical_name() {
        let message = expect_error(parse_quote! {
            #[named(prefix = "Touch")]
            enum Touch {
                Down,
                #[named(canonical = "TouchDown")]
                Press,
            }
        });
        assert_eq!(message, "duplicate canonical name `TouchDown`");
    }

    #[test]
    fn test_rejects_duplicate_alias() {
        let message = expect_error(parse_quote! {
            enum Button {
                Back,
                #[named(alias = "Back")]
                Select,
            }
        });
        assert_eq!(message, "duplicate alias `Back`");
    }

    #[test]
    fn test_rejects_hidden_variant_with_alias() {
        let message = expect_error(parse_quote! {
            enum Blend {
                Zero,
                #[named(hidden, alias = "Spare")]
                Reserved,
            }
        });
        assert_eq!(message, "a hidden variant cannot declare aliases");
    }

    #[test]
    fn test_rejects_unknown_attribute_keys() {
        let message = expect_error(parse_quote! {
            #[named(rename = "Mode")]
            enum Mode { A }
        });
        assert_eq!(
            message,
            "unsupported enum attribute, expected `prefix = \"...\"`"
        );

        let message = expect_error(parse_quote! {
            enum Mode {
                #[named(skip)]
                A,
            }
        });
        assert_eq!(
            message,
            "unsupported variant attribute, expected `canonical`, `alias` or `hidden`"
        );
    }
}
