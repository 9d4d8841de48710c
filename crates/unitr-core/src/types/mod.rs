//! Value types: dimensions, unit pieces and dimensioned values

mod arg;
mod dimension;
pub(crate) mod json;
pub mod piece;
mod value;

pub use arg::UnitArg;
pub(crate) use arg::Operand;
pub use dimension::{BaseDimension, DimensionVector, BASE_DIMENSION_COUNT};
pub use json::UnitJson;
pub use piece::UnitPiece;
pub use value::UnitValue;
