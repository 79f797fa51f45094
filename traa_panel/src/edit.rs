use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::settings::TraaSettings;
use crate::traits::Schema;
use crate::{SlotDef, Value};

static SLOTS: LazyLock<Vec<SlotDef>> = LazyLock::new(TraaSettings::slots);

/// The closed set of keys the panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Blend,
    QualityScale,
    Dilation,
}

impl Field {
    /// Declaration order, which is also widget order.
    pub const ALL: [Field; 3] = [Field::Blend, Field::QualityScale, Field::Dilation];

    pub const fn key(self) -> &'static str {
        match self {
            Field::Blend => "blend",
            Field::QualityScale => "qualityScale",
            Field::Dilation => "dilation",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| Error::UnknownField(key.to_owned()))
    }

    /// Widget configuration for this field.
    pub fn slot(self) -> &'static SlotDef {
        &SLOTS[self as usize]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

/// A single typed change to one bound input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum Edit {
    Blend(f32),
    QualityScale(f32),
    Dilation(bool),
}

impl Edit {
    pub fn field(&self) -> Field {
        match self {
            Edit::Blend(_) => Field::Blend,
            Edit::QualityScale(_) => Field::QualityScale,
            Edit::Dilation(_) => Field::Dilation,
        }
    }

    pub fn value(&self) -> Value {
        match *self {
            Edit::Blend(v) | Edit::QualityScale(v) => Value::F32(v),
            Edit::Dilation(v) => Value::Bool(v),
        }
    }

    /// Pair a dynamically typed value with its field, checking the type.
    pub fn from_value(field: Field, value: Value) -> Result<Self> {
        let type_err = |source| Error::Value { field, source };
        Ok(match field {
            Field::Blend => Edit::Blend(value.try_into().map_err(type_err)?),
            Field::QualityScale => Edit::QualityScale(value.try_into().map_err(type_err)?),
            Field::Dilation => Edit::Dilation(value.try_into().map_err(type_err)?),
        })
    }

    /// Run the value through the field's widget constraint.
    pub fn constrained(self) -> Self {
        match self {
            Edit::Blend(v) => Edit::Blend(constrain_f32(Field::Blend, v)),
            Edit::QualityScale(v) => Edit::QualityScale(constrain_f32(Field::QualityScale, v)),
            Edit::Dilation(_) => self,
        }
    }
}

fn constrain_f32(field: Field, v: f32) -> f32 {
    match field.slot().constrain(Value::F32(v)) {
        Value::F32(v) => v,
        Value::Bool(_) => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;

    #[test]
    fn slot_order_matches_fields() {
        for field in Field::ALL {
            assert_eq!(field.slot().name, field.key());
        }
    }

    #[test]
    fn keys_round_trip() {
        assert_eq!(Field::from_key("qualityScale").unwrap(), Field::QualityScale);
        assert_eq!("dilation".parse::<Field>().unwrap(), Field::Dilation);
        assert!(matches!(
            Field::from_key("quality_scale"),
            Err(Error::UnknownField(key)) if key == "quality_scale"
        ));
    }

    #[test]
    fn from_value_checks_type() {
        assert_eq!(
            Edit::from_value(Field::Dilation, Value::Bool(true)).unwrap(),
            Edit::Dilation(true)
        );

        let err = Edit::from_value(Field::Blend, Value::Bool(true)).unwrap_err();
        let Error::Value { field, source } = err else {
            panic!("expected a value error, got {err:?}");
        };
        assert_eq!(field, Field::Blend);
        assert_eq!(
            source,
            crate::ValueError::TypeMismatch {
                wanted: ValueType::F32,
                found: ValueType::Bool,
            }
        );
    }

    #[test]
    fn constrained_uses_slot_ranges() {
        assert_eq!(Edit::Blend(1.5).constrained(), Edit::Blend(1.0));
        assert_eq!(Edit::QualityScale(0.0).constrained(), Edit::QualityScale(0.01));
        assert_eq!(Edit::QualityScale(0.6).constrained(), Edit::QualityScale(0.625));
        assert_eq!(Edit::Dilation(false).constrained(), Edit::Dilation(false));
    }
}
