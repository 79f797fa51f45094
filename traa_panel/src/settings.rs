use serde::{Deserialize, Serialize};

use crate::edit::{Edit, Field};
use crate::error::{Error, Result};
use crate::{Boolean, ExtendedMetadata, FloatRange, Schema, Value};

/// Default options of the temporal resolve effect.
pub const DEFAULT_TRAA_SETTINGS: TraaSettings = TraaSettings {
    blend: 0.8,
    quality_scale: 1.0,
    dilation: true,
};

/// Fully resolved effect settings, one field per bound input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Schema)]
#[serde(rename_all = "camelCase")]
pub struct TraaSettings {
    /// Weight of the accumulated history against the current frame.
    #[meta(FloatRange { min: 0.0, max: 1.0, step: 0.001, default: DEFAULT_TRAA_SETTINGS.blend })]
    pub blend: f32,

    /// Fraction of the output resolution the effect renders at.
    #[schema(key = "qualityScale")]
    #[meta(FloatRange { min: 0.01, max: 1.0, step: 0.125, default: DEFAULT_TRAA_SETTINGS.quality_scale })]
    pub quality_scale: f32,

    /// Sample velocity from the closest neighbouring depth.
    #[meta(Boolean { default: DEFAULT_TRAA_SETTINGS.dilation })]
    pub dilation: bool,
}

impl Default for TraaSettings {
    fn default() -> Self {
        DEFAULT_TRAA_SETTINGS
    }
}

impl TraaSettings {
    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::Blend => Value::F32(self.blend),
            Field::QualityScale => Value::F32(self.quality_scale),
            Field::Dilation => Value::Bool(self.dilation),
        }
    }

    /// The edit that would set `field` to its current value here.
    pub fn edit_for(&self, field: Field) -> Edit {
        match field {
            Field::Blend => Edit::Blend(self.blend),
            Field::QualityScale => Edit::QualityScale(self.quality_scale),
            Field::Dilation => Edit::Dilation(self.dilation),
        }
    }

    /// Store an edit verbatim. Returns true if the value changed.
    pub fn apply(&mut self, edit: Edit) -> bool {
        let before = *self;
        match edit {
            Edit::Blend(v) => self.blend = v,
            Edit::QualityScale(v) => self.quality_scale = v,
            Edit::Dilation(v) => self.dilation = v,
        }
        before != *self
    }

    /// Overlay `overrides` on top of these settings.
    pub fn merge(&self, overrides: &PartialTraaSettings) -> TraaSettings {
        TraaSettings {
            blend: overrides.blend.unwrap_or(self.blend),
            quality_scale: overrides.quality_scale.unwrap_or(self.quality_scale),
            dilation: overrides.dilation.unwrap_or(self.dilation),
        }
    }

    /// Check every float field is finite and inside its slider range.
    pub fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            let (Value::F32(value), ExtendedMetadata::FloatRange(range)) =
                (self.get(field), field.slot().extended)
            else {
                continue;
            };

            if !value.is_finite() {
                return Err(Error::NonFinite(field));
            }

            if !range.contains(value) {
                return Err(Error::OutOfRange {
                    field,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

/// Caller supplied overrides; absent fields keep the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTraaSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dilation: Option<bool>,
}

impl PartialTraaSettings {
    pub fn blend(mut self, blend: f32) -> Self {
        self.blend = Some(blend);
        self
    }

    pub fn quality_scale(mut self, quality_scale: f32) -> Self {
        self.quality_scale = Some(quality_scale);
        self
    }

    pub fn dilation(mut self, dilation: bool) -> Self {
        self.dilation = Some(dilation);
        self
    }
}

impl From<TraaSettings> for PartialTraaSettings {
    fn from(s: TraaSettings) -> Self {
        Self {
            blend: Some(s.blend),
            quality_scale: Some(s.quality_scale),
            dilation: Some(s.dilation),
        }
    }
}

/// Resolve the effective settings: every present override wins, every
/// absent one falls back to [`DEFAULT_TRAA_SETTINGS`].
pub fn merge(overrides: Option<&PartialTraaSettings>) -> TraaSettings {
    match overrides {
        Some(overrides) => DEFAULT_TRAA_SETTINGS.merge(overrides),
        None => DEFAULT_TRAA_SETTINGS,
    }
}
