use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, LitStr, Meta, parse_macro_input};

/// Derives `traa_panel::traits::Schema`, producing one `SlotDef` per named
/// field in declaration order.
///
/// Field attributes:
/// - `#[meta(expr)]` widget metadata, anything convertible into `ExtendedMetadata`
/// - `#[schema(key = "name")]` overrides the slot key (defaults to the field name)
///
/// Doc comments on a field become the slot tooltip.
#[proc_macro_derive(Schema, attributes(meta, schema))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_schema_impl(input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

struct SlotField {
    key: String,
    ty: syn::Type,
    meta: Option<Expr>,
    tooltip: String,
}

fn derive_schema_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Schema can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Schema can only be derived for structs",
            ));
        }
    };

    let slots = fields
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

            Ok(SlotField {
                key: key_override(&field.attrs)?.unwrap_or_else(|| ident.to_string()),
                ty: field.ty.clone(),
                meta: meta_attr(&field.attrs)?,
                tooltip: doc_string(&field.attrs),
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let entries = slots.iter().map(|slot| {
        let SlotField {
            key,
            ty,
            meta,
            tooltip,
        } = slot;

        let extended = match meta {
            Some(expr) => quote! { ::traa_panel::ExtendedMetadata::from(#expr) },
            None => quote! { <#ty as ::traa_panel::AsValueType>::default_metadata() },
        };

        quote! {
            {
                let mut slot = ::traa_panel::SlotDef::with_metadata(
                    <#ty as ::traa_panel::AsValueType>::VALUE_TYPE,
                    #key,
                    #extended,
                );
                slot.set_tooltip(#tooltip);
                slot
            }
        }
    });

    Ok(quote! {
        impl ::traa_panel::traits::Schema for #name {
            fn slots() -> ::std::vec::Vec<::traa_panel::SlotDef> {
                ::std::vec![ #( #entries ),* ]
            }
        }
    }
    .into())
}

fn key_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut key = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("schema")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitStr = meta.value()?.parse()?;
                key = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported schema attribute, expected `key`"))
            }
        })?;
    }
    Ok(key)
}

fn meta_attr(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("meta")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[meta] attribute"));
        }
        found = Some(attr.parse_args::<Expr>()?);
    }
    Ok(found)
}

fn doc_string(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) if nv.path.is_ident("doc") => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
