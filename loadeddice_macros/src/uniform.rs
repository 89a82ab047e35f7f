use quote::quote;
use syn::DeriveInput;

use crate::unit_variants;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;
    let data_enum = unit_variants(input, "UniformEnum")?;
    let variants = data_enum.variants.iter().map(|v| {
        let ident = &v.ident;
        quote! { Self::#ident }
    });

    Ok(quote! {
        impl ::loadeddice::UniformEnum for #enum_ident {
            const VARIANTS: &'static [Self] = &[
                #(#variants),*
            ];
        }
    })
}
