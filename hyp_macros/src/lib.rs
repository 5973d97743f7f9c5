//! Procedural macros for components of `hyp_ecs` entities.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Index, Meta, NestedMeta, Result, Type};

/// Derives `hyp_ecs::Component` for the struct.
///
/// Name of the component is the fully qualified path of the struct
/// followed by the location of the derive, so types with the same name
/// declared in different function bodies of one module stay distinct.
///
/// With `#[component(transparent)]` the struct must have exactly one field.
/// Then the struct also implements `Deref`, `DerefMut` and `From`
/// for the wrapped type, so it can be used as a distinct named wrapper.
///
#[proc_macro_derive(Component, attributes(component))]
pub fn component_macro_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);
    expand(&ast)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

fn expand(ast: &DeriveInput) -> Result<TokenStream2> {
    let name = &ast.ident;
    if !ast.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &ast.generics,
            "generic components are not supported: their instantiations would share one name",
        ));
    }
    let fields = match &ast.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            let transparent = transparent(ast)?;
            if transparent {
                return Err(Error::new_spanned(
                    data.enum_token,
                    "`transparent` is applicable only for struct",
                ));
            }
            return Ok(component_impl(name));
        }
        Data::Union(data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "macro applicable only for struct or enum",
            ))
        }
    };

    let mut gen = component_impl(name);
    if transparent(ast)? {
        gen.extend(transparent_impl(name, fields)?);
    }
    Ok(gen)
}

fn component_impl(name: &syn::Ident) -> TokenStream2 {
    quote! {
        impl ::hyp_ecs::Component for #name {
            const NAME: &'static str = ::core::concat!(
                ::core::module_path!(),
                "::",
                ::core::stringify!(#name),
                " @ ",
                ::core::file!(),
                ":",
                ::core::line!(),
                ":",
                ::core::column!(),
            );
        }
    }
}

fn transparent_impl(name: &syn::Ident, fields: &Fields) -> Result<TokenStream2> {
    let mut iter = fields.iter();
    let field = match (iter.next(), iter.next()) {
        (Some(field), None) => field,
        _ => {
            return Err(Error::new_spanned(
                fields,
                "`transparent` component must have exactly one field",
            ))
        }
    };
    let ty: &Type = &field.ty;
    let (member, construct) = match &field.ident {
        Some(ident) => (quote! { #ident }, quote! { Self { #ident: value } }),
        None => {
            let index = Index::from(0);
            (quote! { #index }, quote! { Self(value) })
        }
    };

    Ok(quote! {
        impl ::core::ops::Deref for #name {
            type Target = #ty;

            fn deref(&self) -> &Self::Target {
                &self.#member
            }
        }

        impl ::core::ops::DerefMut for #name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#member
            }
        }

        impl ::core::convert::From<#ty> for #name {
            fn from(value: #ty) -> Self {
                #construct
            }
        }
    })
}

/// Looks for `#[component(transparent)]` among attributes of the item.
fn transparent(ast: &DeriveInput) -> Result<bool> {
    let mut transparent = false;
    for attr in ast.attrs.iter().filter(|attr| attr.path.is_ident("component")) {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            meta => {
                return Err(Error::new_spanned(
                    meta,
                    "expected `#[component(...)]` attribute",
                ))
            }
        };
        for nested in list.nested.iter() {
            match nested {
                NestedMeta::Meta(Meta::Path(path)) if path.is_ident("transparent") => {
                    if transparent {
                        return Err(Error::new_spanned(path, "duplicate `transparent` option"));
                    }
                    transparent = true;
                }
                other => return Err(Error::new_spanned(other, "unknown `component` option")),
            }
        }
    }
    Ok(transparent)
}
