
//! Procedural macros for neomap.
//!
//! This crate is not meant to be used directly — use the [`neomap`] facade
//! crate which re-exports all macros.

extern crate proc_macro;

use proc_macro::TokenStream;

mod composite;

/// Derive [`Composite`](neomap_core::traits::Composite) for a struct.
///
/// Generates the static field table the populator walks, a setter that
/// dispatches on the field name, plus [`HasShape`](neomap_core::shape::HasShape)
/// and [`FromConverted`](neomap_core::traits::FromConverted) so the struct
/// can be used directly as a slot type.
///
/// Each field is populated from the property with exactly the same name
/// (case-sensitive). The struct must also implement `Default`, which
/// provides the zero values of fields with no property.
///
/// # Attributes
///
/// **Struct-level:**
/// - `#[neomap(name = "...")]` — shape name used in error messages. Defaults to the struct name.
///
/// **Field-level:**
/// - `#[neomap(skip)]` — the field is not settable: never populated, never validated.
///
/// # Example
///
/// ```rust,ignore
/// use neomap::prelude::*;
///
/// #[derive(Debug, Default, Composite)]
/// #[allow(non_snake_case)]
/// struct Category {
///     ID: String,
///     Name: String,
///     #[neomap(skip)]
///     cached_rank: Option<u32>,
/// }
/// ```
#[proc_macro_derive(Composite, attributes(neomap))]
pub fn composite(input: TokenStream) -> TokenStream {
    composite::expand(input)
}
