//! Composite population: a property mapping into a fresh struct instance.

use crate::coerce::coerce;
use crate::error::MapError;
use crate::traits::Composite;
use crate::value::PropertyMap;

/// Allocate a zeroed `T` and fill every settable field from `props`.
///
/// Properties are matched by exact, case-sensitive field name. A field
/// with no property, or with a `null` property, keeps its zero value.
/// A field is checked for a supported kind only when a property is
/// present for it, so an unused `f64` field never blocks population.
/// The first failing field aborts the whole population.
pub fn populate<T: Composite>(props: &PropertyMap) -> Result<T, MapError> {
    let mut out = T::default();
    for field in T::FIELDS.iter().filter(|f| f.settable) {
        let prop = match props.get(field.name) {
            Some(p) if !p.is_null() => p,
            _ => continue,
        };
        if !field.kind.is_primitive() {
            return Err(MapError::unsupported_field_kind(T::NAME, field.name, field.kind));
        }
        let value = coerce(prop, field.kind, field.name)?;
        out.assign(field.name, value)?;
    }
    log::trace!("populated {} from {} properties", T::NAME, props.len());
    Ok(out)
}
