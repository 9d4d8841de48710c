//! Error type shared by every fallible operation in the crate

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, UnitError>;

/// Everything that can go wrong while building or combining unit values.
///
/// All errors are terminal for the operation that raised them; nothing here is
/// transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Units do not match: {left} vs {right}")]
    DimensionMismatch { left: String, right: String },

    #[error("Cannot {operation} a unit without a value")]
    MissingValue { operation: &'static str },

    #[error("Invalid conversion target: {0}")]
    InvalidConversionTarget(String),

    #[error("Unit \"{0}\" not found")]
    UnknownUnit(String),

    #[error("Prefix \"{prefix}\" is not allowed for unit \"{unit}\"")]
    UnknownPrefix { unit: String, prefix: String },

    #[error("Unknown unit system: {0}")]
    UnknownSystem(String),

    #[error("Cannot clone value: no clone hook configured for a non-primitive numeric type")]
    UnsupportedClone,

    #[error("Malformed arguments: {0}")]
    MalformedArguments(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Arithmetic error: {operation} has no result")]
    Arithmetic { operation: &'static str },

    #[error("Literal {0} cannot be represented by the numeric type")]
    UnrepresentableLiteral(f64),

    #[error("Invalid unit JSON: {0}")]
    InvalidJson(String),
}
