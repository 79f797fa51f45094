use thiserror::Error;

use crate::edit::Field;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Value {value} for {field} is outside [{min}, {max}]")]
    OutOfRange {
        field: Field,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("Value for {0} is not a finite number")]
    NonFinite(Field),

    #[error("Value error on {field}: {source}")]
    Value {
        field: Field,
        #[source]
        source: crate::value::ValueError,
    },

    #[error("Preset version {found} is not compatible with {expected}")]
    IncompatiblePreset {
        found: semver::Version,
        expected: semver::Version,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
