use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments,
    PathSegment, Token, Type, Variant,
};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Field>,
    has_context: bool,
    /// `true` when the variant holds exactly `source` + `context`.
    is_wrapper: bool,
    cfg: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "ghub_error requires named fields for source/context handling",
            ));
        };

        let mut has_context = false;
        for field in &fields.named {
            if field.ident.as_ref().is_some_and(|ident| ident == "context") {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            }
        }

        let source = fields.named.iter().find(|field| {
            field.ident.as_ref().is_some_and(|ident| ident == "source")
                || field.attrs.iter().any(|attr| attr.path().is_ident("source"))
        });

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "ghub_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            is_wrapper: fields.named.len() == 2,
            cfg: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    expand_enum(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand_enum(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "ghub_error can only be applied to enums"));
    };

    let name = &input.ident;
    let vis = &input.vis;
    let ext = format_ident!("{name}Ext");
    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let present = derived_traits(&input.attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote!(Debug));
    }
    if !present.contains("Error") {
        derives.push(quote!(::thiserror::Error));
    }
    let derive_attr = (!derives.is_empty()).then(|| quote!(#[derive(#(#derives),*)]));

    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let (ident, cfg) = (v.ident, &v.cfg);
        quote! { #(#cfg)* #name::#ident { context, .. } => *context = Some(message.into()), }
    });

    let source_impls = variants
        .iter()
        .filter(|v| v.ident != "Internal" && v.is_wrapper)
        .filter_map(|v| source_impl(name, &ext, v));

    let internal_impls = variants.iter().find(|v| v.ident == "Internal").map(|v| {
        let cfg = &v.cfg;
        quote! {
            #(#cfg)*
            impl ::core::convert::From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            impl ::core::convert::From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    });

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        /// Attaches a human-readable context message to a failed [`Result`].
        #vis trait #ext<T> {
            fn context(
                self,
                message: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            fn context(self, message: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut error| {
                    #[allow(unreachable_patterns)]
                    match &mut error {
                        #(#context_arms)*
                        _ => {},
                    }
                    error
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &::core::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    })
}

fn source_impl(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    let field = v.source?;
    let field_ident = field.ident.as_ref()?;
    let ty = &field.ty;
    let (ident, cfg) = (v.ident, &v.cfg);

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl ::core::convert::From<#ty> for #name {
            #[inline]
            fn from(#field_ident: #ty) -> Self {
                Self::#ident { #field_ident, context: None }
            }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                message: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name> {
                self.map_err(|#field_ident| #name::#ident {
                    #field_ident,
                    context: Some(message.into()),
                })
            }
        }
    })
}

fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn angle_args(segment: &PathSegment) -> Option<&Punctuated<GenericArgument, Token![,]>> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(&args.args),
        _ => None,
    }
}

fn is_context_type(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|s| s.ident == "Option") else {
        return false;
    };
    let Some(GenericArgument::Type(inner)) = angle_args(option).and_then(|args| args.first())
    else {
        return false;
    };
    let Some(cow) = last_segment(inner).filter(|s| s.ident == "Cow") else {
        return false;
    };
    let Some(args) = angle_args(cow) else {
        return false;
    };

    let mut args = args.iter();
    matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static")
        && matches!(
            args.next(),
            Some(GenericArgument::Type(s)) if last_segment(s).is_some_and(|s| s.ident == "str")
        )
}
