//! Champion data model.

mod champion;
mod kind;
mod scalar;

pub use champion::{Champion, ChampionSnapshot, TagSet};
pub use kind::{AttributeKind, AttributeShape, ScalarField, TagKind, UnknownAttributeKind};
pub use scalar::{json_text, normalize_json, normalize_scalar, NotAScalar};
