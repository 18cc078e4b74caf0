mod field;

use darling::{FromDeriveInput, ast::Data};
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{DeriveInput, Field, Generics, Ident, LitStr, parse_macro_input};

use crate::field::{EnvAttribute, FieldRepr};

#[proc_macro_derive(Bind, attributes(env))]
pub fn derive_bind(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_derive(input: DeriveInput) -> darling::Result<TokenStream> {
    let receiver = BindReceiver::from_derive_input(&input)?;

    let mut accumulator = darling::Error::accumulator();

    if !receiver.generics.params.is_empty() {
        accumulator.push(
            darling::Error::custom("Bind derive does not support generic structs")
                .with_span(&receiver.ident),
        );
    }

    let Data::Struct(fields) = receiver.data else {
        unreachable!("darling only accepts named structs");
    };

    let fields = fields
        .fields
        .iter()
        .filter_map(|field| accumulator.handle(FieldRepr::parse(field).map_err(Into::into)))
        .collect();

    accumulator.finish()?;

    let bind_struct = BindStruct {
        ident: receiver.ident,
        fields,
    };

    Ok(bind_struct.to_token_stream())
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct BindReceiver {
    ident: Ident,
    generics: Generics,
    data: Data<(), Field>,
}

struct BindStruct {
    ident: Ident,
    fields: Vec<FieldRepr>,
}

impl ToTokens for BindStruct {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let struct_name = &self.ident;
        let private_path = quote!(__envsnatch::__private);

        // Every bound field gets a plain accessor fn so the schema can hold a
        // fn pointer into the struct.
        let (accessors, calls): (Vec<_>, Vec<_>) = self
            .fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| {
                let tag = match &field.env_attr {
                    EnvAttribute::Tag(tag) => tag.clone(),
                    EnvAttribute::None => LitStr::new("", field.ident.span()),
                    EnvAttribute::Skip => return None,
                };
                let ident = &field.ident;
                let ty = &field.ty;
                let accessor = format_ident!("__envsnatch_field_{}", index);

                let accessor_fn = quote! {
                    fn #accessor(destination: &mut #struct_name) -> &mut #ty {
                        &mut destination.#ident
                    }
                };
                let call = quote! { .field(#tag, #accessor) };

                Some((accessor_fn, call))
            })
            .unzip();

        let derive = quote! {
            const _: () = {
                extern crate envsnatch as __envsnatch;

                impl #private_path::Bind for #struct_name {
                    fn schema() -> #private_path::Schema<Self> {
                        #(#accessors)*

                        #private_path::Schema::<Self>::new()
                            #(#calls)*
                    }
                }
            };
        };

        tokens.extend(derive);
    }
}
