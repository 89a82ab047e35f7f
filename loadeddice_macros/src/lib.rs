use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, Fields, parse_macro_input, spanned::Spanned};

mod uniform;

/// Variant attribute: #[weight(<integer expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_weighted(&input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Uniform over every variant; no attributes.
#[proc_macro_derive(UniformEnum)]
pub fn derive_uniform_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match uniform::expand(&input) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// The enum's variants, provided every one of them is fieldless.
pub(crate) fn unit_variants<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a DataEnum> {
    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            format!("{derive} can only be derived for enums"),
        ));
    };
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                format!("{derive} only supports fieldless variants"),
            ));
        }
    }
    Ok(data_enum)
}

fn expand_weighted(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;
    let data_enum = unit_variants(input, "WeightedEnum")?;

    let mut entries = Vec::new();
    let mut variants = Vec::new();

    for variant in &data_enum.variants {
        let weight = weight_attr(&variant.attrs)?.ok_or_else(|| {
            syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
        })?;
        let ident = &variant.ident;
        entries.push(quote! { (Self::#ident, #weight) });
        variants.push(quote! { Self::#ident });
    }

    Ok(quote! {
        impl ::loadeddice::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, i64)] = &[
                #(#entries),*
            ];
            const VARIANTS: &'static [Self] = &[
                #(#variants),*
            ];
        }
    })
}

/// Finds `#[weight(<expr>)]`; rejects other shapes of the attribute.
fn weight_attr(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut found = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("weight") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[weight(<expr>)]"));
        };
        if found.is_some() {
            return Err(syn::Error::new(list.span(), "duplicate #[weight(...)]"));
        }
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        found = Some(expr);
    }
    Ok(found)
}
