use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Type mismatch: wanted {wanted}, found {found}")]
    TypeMismatch { wanted: ValueType, found: ValueType },
}

macro_rules! define_value_enum {
    ( $( $variant:ident : $ty:ty ),* $(,)? ) => {
        /// A single bound input value, as edited by a widget.
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(untagged)]
        pub enum Value {
            $( $variant($ty), )*
        }

        #[derive(Debug, PartialEq)]
        pub enum ValueMut<'a> {
            $( $variant(&'a mut $ty), )*
        }

        /// Defines the type of a given slot.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum ValueType {
            $( $variant, )*
        }

        impl Value {
            pub fn as_mut(&mut self) -> ValueMut<'_> {
                match self {
                    $( Value::$variant(v) => ValueMut::$variant(v), )*
                }
            }

            pub fn discriminant(&self) -> ValueType {
                match self {
                    $( Value::$variant(_) => ValueType::$variant, )*
                }
            }
        }

        impl ValueType {
            /// Returns the default value for this type
            pub fn default_value(&self) -> Value {
                match self {
                    $( ValueType::$variant => Value::$variant(<$ty>::default()), )*
                }
            }
        }

        $( define_value_enum!(@impl_traits $variant, $ty); )*
    };

    (@impl_traits $variant:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }

        impl AsValueType for $ty {
            const VALUE_TYPE: ValueType = ValueType::$variant;
        }

        impl TryFrom<Value> for $ty {
            type Error = ValueError;
            fn try_from(v: Value) -> Result<Self, Self::Error> {
                let Value::$variant(v) = v else {
                    return Err(ValueError::TypeMismatch {
                        wanted: ValueType::$variant,
                        found: v.discriminant(),
                    });
                };
                Ok(v)
            }
        }
    };
}

/// Maps a Rust field type onto the slot type it is edited as.
pub trait AsValueType {
    const VALUE_TYPE: ValueType;

    /// Metadata used when a field carries no explicit `#[meta(..)]`.
    fn default_metadata() -> crate::ExtendedMetadata {
        match Self::VALUE_TYPE {
            ValueType::Bool => crate::Boolean::default().into(),
            ValueType::F32 => crate::ExtendedMetadata::None,
        }
    }
}

define_value_enum! {
    F32: f32,
    Bool: bool,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::F32(v) => write!(f, "{:.3}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueType::F32 => write!(f, "f32"),
            ValueType::Bool => write!(f, "bool"),
        }
    }
}
