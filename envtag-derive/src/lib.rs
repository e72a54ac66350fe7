//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `Unmarshal` derive macro
///
/// Implements `envtag::Unmarshal` by walking the fields in declaration
/// order. For each field:
///
/// 1. If the field is `pub` and its type implements `Unmarshal`, its own
///    fields are populated first.
/// 2. If the field carries `#[env("...")]`, its value is resolved from the
///    snapshot and coerced. A tagged field that is not `pub` fails with
///    `UnexportedField`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to looked-up keys
///
/// **Field-level**:
/// - `#[env("KEY[,KEY2,...][,default=LITERAL]")]`: Tag string
///
/// # Example
///
/// See the `envtag` crate documentation for usage examples.
#[proc_macro_derive(Unmarshal, attributes(env))]
pub fn derive_unmarshal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let StructAttrs { prefix } = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Unmarshal only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Unmarshal only supports structs",
            ));
        }
    };

    let mut steps = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let name = field_name.to_string();
        let exported = matches!(field.vis, Visibility::Public(_));

        let attrs = FieldAttrs::from_field(field)?;

        // Unexported records are not descended into
        if exported {
            steps.push(quote! {
                if let Some(__descend) = (&::envtag::de::Detect::<#field_type>::new()).nested() {
                    __descend(&mut self.#field_name, __env)?;
                }
            });
        }

        let Some(tag) = attrs.tag else {
            continue;
        };

        if !exported {
            steps.push(quote! {
                return Err(::envtag::Error::unexported(#name));
            });
            continue;
        }

        steps.push(quote! {
            ::envtag::de::assign(
                __env,
                ::envtag::de::FieldSpec {
                    name: #name,
                    tag: #tag,
                    prefix: #prefix,
                },
                &mut self.#field_name,
                (&::envtag::de::Detect::<#field_type>::new()).setter(),
            )?;
        });
    }

    Ok(quote! {
        impl #impl_generics ::envtag::Unmarshal for #struct_name #ty_generics #where_clause {
            #[allow(unreachable_code, unused_imports)]
            fn unmarshal_fields(
                &mut self,
                __env: &mut ::envtag::Snapshot,
            ) -> ::core::result::Result<(), ::envtag::Error> {
                use ::envtag::de::{Flat as _, Leaf as _, Nested as _, Unsupported as _};

                #(#steps)*
                Ok(())
            }
        }
    })
}
