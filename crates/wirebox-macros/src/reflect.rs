use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Path, Result, Type};

use crate::attrs::{ContainerArgs, FieldArgs};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Marker {
    In,
    Out,
}

pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic types",
        ));
    }

    let args = ContainerArgs::from_attrs(&input.attrs)?;
    let krate = args
        .krate
        .clone()
        .unwrap_or_else(|| syn::parse_quote!(::wirebox_domain));
    let name = &input.ident;

    let marker = find_marker(&input.data)?;

    if args.error {
        if marker.is_some() {
            return Err(syn::Error::new(
                Span::call_site(),
                "an error signal cannot be an aggregate",
            ));
        }
        return Ok(quote! {
            impl #krate::reflect::Reflect for #name {
                fn type_info() -> #krate::reflect::TypeInfo {
                    #krate::reflect::TypeInfo::error_signal::<Self>()
                }
            }

            impl #krate::reflect::ErrorSignal for #name {}
        });
    }

    let Some((marker, fields)) = marker else {
        reject_stray_wire_attrs(&input.data)?;
        return Ok(quote! {
            impl #krate::reflect::Reflect for #name {}
        });
    };

    let role = match marker {
        Marker::In => quote!(#krate::reflect::AggregateRole::Input),
        Marker::Out => quote!(#krate::reflect::AggregateRole::Output),
    };
    let field_defs = field_defs(&krate, fields)?;

    Ok(quote! {
        impl #krate::reflect::Reflect for #name {
            fn type_info() -> #krate::reflect::TypeInfo {
                #krate::reflect::TypeInfo::aggregate::<Self>(
                    #role,
                    || ::std::vec![#(#field_defs),*],
                )
            }
        }
    })
}

/// Locate the `In`/`Out` marker, returning the named fields of an aggregate
fn find_marker(data: &Data) -> Result<Option<(Marker, &syn::FieldsNamed)>> {
    let Data::Struct(data) = data else {
        return Ok(None);
    };

    let mut found: Option<(Marker, &Field)> = None;
    for field in data.fields.iter() {
        let Some(marker) = marker_of(&field.ty) else {
            continue;
        };
        if let Some((previous, _)) = found {
            let message = if previous == marker {
                "aggregate declares its marker twice"
            } else {
                "a struct cannot be both an input and an output aggregate"
            };
            return Err(syn::Error::new_spanned(&field.ty, message));
        }
        found = Some((marker, field));
    }

    match (found, &data.fields) {
        (None, _) => Ok(None),
        (Some((marker, _)), Fields::Named(named)) => Ok(Some((marker, named))),
        (Some((_, field)), _) => Err(syn::Error::new_spanned(
            &field.ty,
            "aggregates must use named fields",
        )),
    }
}

fn marker_of(ty: &Type) -> Option<Marker> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if !segment.arguments.is_none() {
        return None;
    }
    if segment.ident == "In" {
        Some(Marker::In)
    } else if segment.ident == "Out" {
        Some(Marker::Out)
    } else {
        None
    }
}

/// Every named field is emitted regardless of visibility; `#[wire(skip)]`
/// is the only way to leave one out.
fn field_defs(krate: &Path, fields: &syn::FieldsNamed) -> Result<Vec<TokenStream>> {
    let mut defs = Vec::new();
    for field in &fields.named {
        if marker_of(&field.ty).is_some() {
            continue;
        }
        let args = FieldArgs::from_attrs(&field.attrs)?;
        if args.skip {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };
        let field_name = ident.unraw().to_string();
        let ty = &field.ty;
        let tags = args.tags.iter().map(|(tag, value)| quote!((#tag, #value)));
        defs.push(quote! {
            #krate::reflect::FieldDef::of::<#ty>(#field_name).tagged(&[#(#tags),*])
        });
    }
    Ok(defs)
}

fn reject_stray_wire_attrs(data: &Data) -> Result<()> {
    let fields: Box<dyn Iterator<Item = &Field>> = match data {
        Data::Struct(data) => Box::new(data.fields.iter()),
        Data::Enum(data) => Box::new(data.variants.iter().flat_map(|v| v.fields.iter())),
        Data::Union(data) => Box::new(data.fields.named.iter()),
    };
    for field in fields {
        if FieldArgs::from_attrs(&field.attrs)?.present {
            return Err(syn::Error::new_spanned(
                field,
                "`wire` attributes only apply to fields of `In`/`Out` aggregates",
            ));
        }
    }
    Ok(())
}
