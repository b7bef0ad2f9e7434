use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Derives `Debug` for an effect-request type, skipping callback fields.
///
/// Request enums carry `returns` continuations (`Arc<dyn Fn(..) -> Msg>`)
/// that neither implement `Debug` nor belong in logs; this derive prints
/// every other field and drops those. Supports enums and named-field
/// structs.
#[proc_macro_derive(Request)]
pub fn derive_request(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Enum(data) => {
            let arms = data.variants.iter().map(|variant| enum_arm(name, variant));
            quote! {
                match self {
                    #( #arms, )*
                }
            }
        }
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => {
                let shown = visible_idents(&fields.named);
                quote! {
                    let mut dbg = f.debug_struct(stringify!(#name));
                    #( dbg.field(stringify!(#shown), &self.#shown); )*
                    dbg.finish()
                }
            }
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Request derive supports enums and named-field structs",
                )
                .to_compile_error()
                .into()
            }
        },
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "Request derive does not support unions")
                .to_compile_error()
                .into()
        }
    };

    quote! {
        impl #impl_generics ::std::fmt::Debug for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #body
            }
        }
    }
    .into()
}

fn enum_arm(name: &Ident, variant: &syn::Variant) -> proc_macro2::TokenStream {
    let v_ident = &variant.ident;
    match &variant.fields {
        Fields::Unit => quote! {
            #name::#v_ident => f.write_str(concat!(stringify!(#name), "::", stringify!(#v_ident)))
        },
        Fields::Named(fields) => {
            let shown = visible_idents(&fields.named);
            quote! {
                #name::#v_ident { #( #shown, )* .. } => {
                    #[allow(unused_mut)]
                    let mut dbg = f.debug_struct(stringify!(#v_ident));
                    #( dbg.field(stringify!(#shown), #shown); )*
                    dbg.finish()
                }
            }
        }
        Fields::Unnamed(fields) => {
            let bindings: Vec<Ident> = (0..fields.unnamed.len())
                .map(|i| format_ident!("field{}", i))
                .collect();
            quote! {
                #name::#v_ident( #( #bindings ),* ) => {
                    #[allow(unused_mut)]
                    let mut dbg = f.debug_tuple(stringify!(#v_ident));
                    #( dbg.field(#bindings); )*
                    dbg.finish()
                }
            }
        }
    }
}

fn visible_idents(fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>) -> Vec<&Ident> {
    fields
        .iter()
        .filter(|field| !redacted(field))
        .filter_map(|field| field.ident.as_ref())
        .collect()
}

fn redacted(field: &syn::Field) -> bool {
    field
        .ident
        .as_ref()
        .map(|ident| ident == "returns")
        .unwrap_or(false)
}
