use std::borrow::Cow;

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{Value, ValueType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonMetadata {
    // Descriptive helpful piece of text shown on hover.
    pub tooltip: String,
}

/// Slider configuration for a float slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl Default for FloatRange {
    fn default() -> Self {
        Self {
            min: f32::MIN,
            max: f32::MAX,
            step: 1.0,
            default: 0.0,
        }
    }
}

impl FloatRange {
    /// Snap `value` onto the step grid (anchored at zero) and clamp it into
    /// `[min, max]`. Non-finite input resolves to the default.
    pub fn constrain(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.default;
        }

        let snapped = if self.step > 0.0 {
            let value = f64::from(value);
            let step = f64::from(self.step);
            let per_unit = (1.0 / step).round();

            // Decimal steps (0.1, 0.001, ...) divide so results land on the
            // nearest float to the decimal rather than a multiple of a rounded step.
            if per_unit >= 1.0 && (1.0 / step - per_unit).abs() < 1e-4 {
                ((value * per_unit).round() / per_unit) as f32
            } else {
                ((value / step).round() * step) as f32
            }
        } else {
            value
        };

        snapped.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boolean {
    pub default: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, From, Serialize, Deserialize)]
pub enum ExtendedMetadata {
    #[default]
    None,
    #[from]
    FloatRange(FloatRange),
    #[from]
    Boolean(Boolean),
}

/// Describes one bound input: its key, type and widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDef {
    pub value_type: ValueType,
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub extended: ExtendedMetadata,
    #[serde(default)]
    pub common: CommonMetadata,
}

impl SlotDef {
    pub const fn new(value_type: ValueType, name: &'static str) -> Self {
        Self {
            value_type,
            name: Cow::Borrowed(name),
            extended: ExtendedMetadata::None,
            common: CommonMetadata {
                tooltip: String::new(),
            },
        }
    }

    pub fn with_metadata(
        value_type: ValueType,
        name: &'static str,
        extended: ExtendedMetadata,
    ) -> Self {
        Self {
            extended,
            ..Self::new(value_type, name)
        }
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.common.tooltip = tooltip.into();
        self
    }

    /// The value a freshly created widget shows when nothing overrides it.
    pub fn default_value(&self) -> Value {
        match self.extended {
            ExtendedMetadata::FloatRange(range) => Value::F32(range.default),
            ExtendedMetadata::Boolean(b) => Value::Bool(b.default),
            ExtendedMetadata::None => self.value_type.default_value(),
        }
    }

    /// Apply the slot's widget constraint to `value`. Values of the wrong
    /// type are passed through untouched; the caller checks types.
    pub fn constrain(&self, value: Value) -> Value {
        match (value, &self.extended) {
            (Value::F32(v), ExtendedMetadata::FloatRange(range)) => Value::F32(range.constrain(v)),
            (value, _) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quality() -> FloatRange {
        FloatRange {
            min: 0.01,
            max: 1.0,
            step: 0.125,
            default: 1.0,
        }
    }

    #[test]
    fn constrain_snaps_to_step() {
        let range = quality();
        assert_eq!(range.constrain(0.3), 0.25);
        assert_eq!(range.constrain(0.44), 0.5);
        assert_eq!(range.constrain(1.0), 1.0);
    }

    #[test]
    fn constrain_lands_on_decimal_steps() {
        let blend = FloatRange {
            min: 0.0,
            max: 1.0,
            step: 0.001,
            default: 0.8,
        };
        assert_eq!(blend.constrain(0.75), 0.75);
        assert_eq!(blend.constrain(0.1), 0.1);
        assert_eq!(blend.constrain(0.12345), 0.123);
    }

    #[test]
    fn constrain_clamps_into_range() {
        let range = quality();
        assert_eq!(range.constrain(0.0), 0.01);
        assert_eq!(range.constrain(-3.0), 0.01);
        assert_eq!(range.constrain(7.5), 1.0);
    }

    #[test]
    fn constrain_rejects_non_finite() {
        let range = quality();
        assert_eq!(range.constrain(f32::NAN), 1.0);
        assert_eq!(range.constrain(f32::INFINITY), 1.0);
    }

    #[test]
    fn slot_default_comes_from_metadata() {
        let slot = SlotDef::with_metadata(ValueType::Bool, "dilation", Boolean { default: true }.into());
        assert_eq!(slot.default_value(), Value::Bool(true));

        let bare = SlotDef::new(ValueType::F32, "bare");
        assert_eq!(bare.default_value(), Value::F32(0.0));
    }
}
