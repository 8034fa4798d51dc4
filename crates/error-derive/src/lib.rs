//! `#[derive(Error)]` for error enums.
//!
//! Every variant needs a `#[msg = "..."]` attribute which is used for its
//! [Display](std::fmt::Display) implementation.
//!
//! * Unit variants display the message as-is
//! * Tuple variants must have exactly one field. They get a `From` implementation
//!   for that field's type and report the field as their `source()`
//! * Struct variants can refer to their fields inside the message, like
//!   `#[msg = "invalid curve in line {line}"]`

use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = match syn::parse(input) {
        Ok(item) => item,
        Err(error) => return error.into_compile_error().into(),
    };

    match expand(&item) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.into_compile_error().into(),
    }
}

fn expand(item: &syn::ItemEnum) -> syn::Result<proc_macro2::TokenStream> {
    let name = &item.ident;
    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;
        let message = message_for(variant)?;

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays
                    .push(quote!(Self::#ident => ::std::fmt::Display::fmt(&(#message), f)));
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    return Err(syn::Error::new(
                        unnamed_fields.span(),
                        "tuple variants need exactly one field",
                    ));
                }

                let ty = &unnamed_fields.unnamed[0].ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl From<#ty> for #name {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays
                    .push(quote!(Self::#ident(_) => ::std::fmt::Display::fmt(&(#message), f)));
                variant_sources.push(quote!(Self::#ident(ref value) => Some(value)));
            },
            syn::Fields::Named(named_fields) => {
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(format_string),
                    ..
                }) = message
                else {
                    return Err(syn::Error::new(
                        message.span(),
                        "struct variants need a string literal as their message",
                    ));
                };

                // The message may use any subset of the fields
                let fields = named_fields.named.iter().map(|field| &field.ident);
                variant_displays.push(quote!(
                    #[allow(unused_variables)]
                    Self::#ident { #(#fields),* } => ::std::write!(f, #format_string)
                ));
            },
        }
    }

    Ok(quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    _ => None,
                }
            }
        }
    ))
}

/// Find the value of the `#[msg = ...]` attribute
fn message_for(variant: &syn::Variant) -> syn::Result<&syn::Expr> {
    variant
        .attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                Some(&name_value.value)
            },
            _ => None,
        })
        .next()
        .ok_or_else(|| {
            syn::Error::new(
                variant.ident.span(),
                format!("missing #[msg = \"...\"] on variant {}", variant.ident),
            )
        })
}
