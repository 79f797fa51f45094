use egui::{Pos2, Vec2};
use traa_panel::{TemporalResolve, TraaSettings};

/// Stand-in for the real temporal resolve pass. It keeps the tunables the
/// panel writes and resolves a single tracked point the way the pass
/// resolves pixels: history blended toward the current sample.
#[derive(Debug, Clone)]
pub struct PreviewEffect {
    pub blend: f32,
    pub quality_scale: f32,
    pub dilation: bool,
    history: Option<Pos2>,
}

impl PreviewEffect {
    pub fn new(settings: &TraaSettings) -> Self {
        Self {
            blend: settings.blend,
            quality_scale: settings.quality_scale,
            dilation: settings.dilation,
            history: None,
        }
    }

    /// Accumulate `current` into the history and return the resolved sample.
    pub fn resolve(&mut self, current: Pos2) -> Pos2 {
        let history = self.history.unwrap_or(current);
        let resolved = history.lerp(current, 1.0 - self.blend);
        self.history = Some(resolved);
        resolved
    }

    /// Size of the internal render target for an output of `output` pixels.
    pub fn render_size(&self, output: Vec2) -> Vec2 {
        (output * self.quality_scale).round().max(Vec2::splat(1.0))
    }

    pub fn clear_history(&mut self) {
        self.history = None;
    }
}

impl TemporalResolve for PreviewEffect {
    fn set_blend(&mut self, blend: f32) {
        log::trace!("effect.blend <- {blend}");
        self.blend = blend;
    }

    fn set_quality_scale(&mut self, quality_scale: f32) {
        log::trace!("effect.qualityScale <- {quality_scale}");
        self.quality_scale = quality_scale;
        // History is stored at the old resolution
        self.clear_history();
    }

    fn set_dilation(&mut self, dilation: bool) {
        log::trace!("effect.dilation <- {dilation}");
        self.dilation = dilation;
    }
}

#[cfg(test)]
mod tests {
    use traa_panel::{DEFAULT_TRAA_SETTINGS, Edit};

    use super::*;

    #[test]
    fn zero_blend_follows_current_sample() {
        let mut effect = PreviewEffect::new(&DEFAULT_TRAA_SETTINGS);
        effect.apply(Edit::Blend(0.0));

        effect.resolve(Pos2::new(0.0, 0.0));
        assert_eq!(effect.resolve(Pos2::new(10.0, 4.0)), Pos2::new(10.0, 4.0));
    }

    #[test]
    fn full_blend_keeps_history() {
        let mut effect = PreviewEffect::new(&DEFAULT_TRAA_SETTINGS);
        effect.apply(Edit::Blend(1.0));

        effect.resolve(Pos2::new(2.0, 2.0));
        assert_eq!(effect.resolve(Pos2::new(10.0, 4.0)), Pos2::new(2.0, 2.0));
    }

    #[test]
    fn quality_scale_shrinks_render_target() {
        let mut effect = PreviewEffect::new(&DEFAULT_TRAA_SETTINGS);
        assert_eq!(effect.render_size(Vec2::new(1920.0, 1080.0)), Vec2::new(1920.0, 1080.0));

        effect.apply(Edit::QualityScale(0.5));
        assert_eq!(effect.render_size(Vec2::new(1920.0, 1080.0)), Vec2::new(960.0, 540.0));

        effect.apply(Edit::QualityScale(0.01));
        assert_eq!(effect.render_size(Vec2::new(40.0, 20.0)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn changing_scale_drops_history() {
        let mut effect = PreviewEffect::new(&DEFAULT_TRAA_SETTINGS);
        effect.resolve(Pos2::new(2.0, 2.0));

        effect.apply(Edit::QualityScale(0.5));
        assert_eq!(effect.resolve(Pos2::new(9.0, 9.0)), Pos2::new(9.0, 9.0));
    }
}
