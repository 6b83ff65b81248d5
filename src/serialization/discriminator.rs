//! `@odata.type` based type resolution for polymorphic models.

use super::{Parsable, ParseNode};
use crate::Result;

/// Wire name of the discriminator property.
pub const ODATA_TYPE: &str = "@odata.type";

/// Builds an empty model.
pub type Constructor = fn() -> Box<dyn Parsable>;

/// Pick the concrete type for `node` from its discriminator.
///
/// Absent or null discriminators and unknown type names fall back to the
/// base type; a discriminator that is not a string is an error.
pub fn resolve_discriminator(
    node: &dyn ParseNode,
    mappings: &[(&str, Constructor)],
    fallback: Constructor,
) -> Result<Box<dyn Parsable>> {
    let Some(child) = node.child_node(ODATA_TYPE) else {
        return Ok(fallback());
    };
    let Some(type_name) = child.string_value()? else {
        return Ok(fallback());
    };
    match mappings.iter().find(|(name, _)| *name == type_name) {
        Some((_, construct)) => Ok(construct()),
        None => {
            tracing::debug!(discriminator = %type_name, "unmapped discriminator, using base type");
            Ok(fallback())
        }
    }
}
