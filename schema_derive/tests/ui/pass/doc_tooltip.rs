use traa_panel::{ExtendedMetadata, Schema, ValueType};

#[derive(Schema)]
struct Documented {
    /// Mixes the two inputs.
    /// Zero keeps the first one.
    mix: f32,

    /// Bypass the node.
    bypass: bool,
}

fn main() {
    let slots = Documented::slots();
    assert_eq!(slots[0].common.tooltip, "Mixes the two inputs. Zero keeps the first one.");
    assert_eq!(slots[1].value_type, ValueType::Bool);
    assert!(matches!(slots[1].extended, ExtendedMetadata::Boolean(_)));
    let _ = Documented { mix: 0.0, bypass: false };
}
