use crate::SlotDef;
use crate::edit::Edit;

/// Describes the bound inputs of a settings struct.
///
/// You probably won't have to implement this by hand. Instead use the
/// derive macro, which reads `#[meta(..)]`, `#[schema(key = ..)]` and doc
/// comments off each field.
pub trait Schema {
    fn slots() -> Vec<SlotDef>;
}

/// The effect side of the binding: one setter per editable parameter.
///
/// Implementors only provide the setters; [`TemporalResolve::apply`] routes
/// an [`Edit`] to exactly one of them.
pub trait TemporalResolve {
    fn set_blend(&mut self, blend: f32);

    fn set_quality_scale(&mut self, quality_scale: f32);

    fn set_dilation(&mut self, dilation: bool);

    fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Blend(v) => self.set_blend(v),
            Edit::QualityScale(v) => self.set_quality_scale(v),
            Edit::Dilation(v) => self.set_dilation(v),
        }
    }
}
