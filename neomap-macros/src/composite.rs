
use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit};

fn get_shape_name(ast: &DeriveInput) -> String {
    for attr in &ast.attrs {
        if attr.path().is_ident("neomap") {
            let mut name = None;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let expr: Expr = value.parse()?;
                    if let Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) = expr {
                        name = Some(s.value());
                    }
                }
                Ok(())
            });
            if let Some(n) = name {
                return n;
            }
        }
    }
    ast.ident.to_string()
}

fn is_skipped(f: &syn::Field) -> bool {
    let mut skip = false;
    for attr in &f.attrs {
        if attr.path().is_ident("neomap") {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                }
                Ok(())
            });
        }
    }
    skip
}

pub fn expand(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;
    let shape_name = get_shape_name(&ast);

    let fields = match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            _ => {
                return syn::Error::new_spanned(&ast, "Composite only supports structs with named fields")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&ast, "Composite only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let mut specs = Vec::new();
    let mut arms = Vec::new();

    for f in fields {
        let Some(ident) = f.ident.as_ref() else { continue };
        // Property names are the field names as written, minus any `r#`.
        let key = ident.unraw().to_string();
        let ty = &f.ty;

        if is_skipped(f) {
            specs.push(quote! {
                neomap_core::shape::FieldSpec::skipped(#key, neomap_core::shape::Kind::Any)
            });
            continue;
        }

        specs.push(quote! {
            neomap_core::shape::FieldSpec::new(
                #key,
                <#ty as neomap_core::traits::FieldValue>::KIND,
            )
        });
        arms.push(quote! {
            #key => <#ty as neomap_core::traits::FieldValue>::set(&mut self.#ident, #key, value)
        });
    }

    let expanded = quote! {
        impl neomap_core::traits::Composite for #name {
            const NAME: &'static str = #shape_name;

            const FIELDS: &'static [neomap_core::shape::FieldSpec] = &[
                #(#specs,)*
            ];

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                field: &str,
                value: neomap_core::shape::Primitive,
            ) -> Result<(), neomap_core::error::MapError> {
                match field {
                    #(#arms,)*
                    other => Err(neomap_core::error::MapError::Mapping(format!(
                        "{} has no settable field '{}'", #shape_name, other,
                    ))),
                }
            }
        }

        impl neomap_core::shape::HasShape for #name {
            fn shape() -> neomap_core::shape::Shape {
                neomap_core::shape::Shape::composite::<Self>()
            }
        }

        impl neomap_core::traits::FromConverted for #name {
            fn from_converted(
                index: usize,
                converted: neomap_core::convert::Converted,
            ) -> Result<Self, neomap_core::error::MapError> {
                neomap_core::convert::downcast_composite::<Self>(index, converted)
            }
        }
    };

    expanded.into()
}
