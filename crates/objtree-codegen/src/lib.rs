// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `#[derive(Inspect)]` for the objtree dumper.
//!
//! Generates an `objtree::inspect::Inspect` implementation:
//!
//! - **Structs with named fields** become `Structured` values whose members
//!   mirror the fields in declaration order, `pub` fields reported public
//!   and the rest private.
//! - **Unit enums** become `Enum` values whose text is the variant name.
//!
//! Attributes (under the `inspect` namespace):
//!
//! - `#[inspect(skip)]` on a field leaves it out of the dump entirely.
//! - `#[inspect(display)]` on a type reports the type's `Display` output as
//!   its custom string conversion; combined with the dump configuration's
//!   `use_display_override` this makes the type terminal.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DataStruct, DeriveInput, Fields};

/// `#[derive(Inspect)]`: implements `objtree::inspect::Inspect` for named-
/// field structs, unit structs, and unit enums.
///
/// Example:
/// ```ignore
/// use objtree::Inspect;
///
/// #[derive(Inspect)]
/// struct Sensor {
///     pub id: u32,
///     pub label: String,
///     #[inspect(skip)]
///     cached_hash: u64,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    match &input.data {
        Data::Struct(data) => expand_struct(input, data),
        Data::Enum(data) => expand_enum(input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Inspect cannot be derived for unions",
        )),
    }
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<proc_macro2::TokenStream> {
    let fields = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Inspect requires named fields (tuple structs are not supported)",
            ));
        }
    };

    let mut member_visits = Vec::new();
    for field in fields {
        if has_skip_attr(&field.attrs)? {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "field must have a name"));
        };
        let name = ident.to_string();
        let visibility = match &field.vis {
            syn::Visibility::Public(_) => quote!(objtree::inspect::Visibility::Public),
            _ => quote!(objtree::inspect::Visibility::Private),
        };
        member_visits.push(quote! {
            visit(objtree::inspect::Member {
                name: #name,
                visibility: #visibility,
                value: ::core::result::Result::Ok(&self.#ident),
            });
        });
    }

    let display_method = display_override_method(input)?;
    let name = &input.ident;
    let generics = bounded_generics(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics objtree::inspect::Inspect for #name #ty_generics #where_clause {
            fn kind(&self) -> objtree::inspect::Kind {
                objtree::inspect::Kind::Structured
            }

            fn members(&self, visit: &mut dyn ::core::ops::FnMut(objtree::inspect::Member<'_>)) {
                #(#member_visits)*
                let _ = visit;
            }

            #display_method
        }
    })
}

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<proc_macro2::TokenStream> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Inspect cannot be derived for empty enums",
        ));
    }

    let mut arms = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Inspect supports only unit enum variants",
            ));
        }
        let ident = &variant.ident;
        let text = ident.to_string();
        arms.push(quote!(Self::#ident => #text,));
    }

    let display_method = display_override_method(input)?;
    let name = &input.ident;
    let generics = bounded_generics(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics objtree::inspect::Inspect for #name #ty_generics #where_clause {
            fn kind(&self) -> objtree::inspect::Kind {
                objtree::inspect::Kind::Enum
            }

            fn value_text(&self) -> ::std::string::String {
                let variant: &str = match self {
                    #(#arms)*
                };
                variant.to_string()
            }

            #display_method
        }
    })
}

/// Clone the input generics with an `Inspect` bound added to every type
/// parameter, so generic containers dump their contents.
fn bounded_generics(input: &DeriveInput) -> syn::Generics {
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(objtree::inspect::Inspect));
    }
    generics
}

/// The `display_override` method body for `#[inspect(display)]`, or empty.
fn display_override_method(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !has_display_attr(&input.attrs)? {
        return Ok(proc_macro2::TokenStream::new());
    }
    Ok(quote! {
        fn display_override(&self) -> ::core::option::Option<::std::string::String> {
            ::core::option::Option::Some(::std::string::ToString::to_string(self))
        }
    })
}

fn has_skip_attr(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    inspect_attr_flag(attrs, "skip")
}

fn has_display_attr(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    inspect_attr_flag(attrs, "display")
}

/// Look for `#[inspect(flag)]`; unknown flags are rejected so typos fail
/// loudly at compile time.
fn inspect_attr_flag(attrs: &[syn::Attribute], flag: &str) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") || meta.path.is_ident("display") {
                if meta.path.is_ident(flag) {
                    found = true;
                }
                Ok(())
            } else {
                Err(meta.error("unknown inspect attribute; expected `skip` or `display`"))
            }
        })?;
    }
    Ok(found)
}
