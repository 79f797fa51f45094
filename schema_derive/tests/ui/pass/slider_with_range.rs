use traa_panel::{ExtendedMetadata, FloatRange, Schema};

#[derive(Schema)]
struct BlurSettings {
    #[meta(FloatRange { min: 0.0, max: 100.0, ..Default::default() })]
    radius: f32,

    // No meta attribute - falls back to the type's default metadata
    strength: f32,
}

fn main() {
    let slots = BlurSettings::slots();
    assert_eq!(slots.len(), 2);
    assert!(matches!(slots[0].extended, ExtendedMetadata::FloatRange(FloatRange { max: 100.0, .. })));
    assert_eq!(slots[1].extended, ExtendedMetadata::None);
    let _ = BlurSettings { radius: 1.0, strength: 0.5 };
}
