use traa_panel::{Boolean, Schema};

#[derive(Schema)]
struct Toggles {
    #[schema(key = "motionBlur")]
    #[meta(Boolean { default: true })]
    motion_blur: bool,
}

fn main() {
    let slots = Toggles::slots();
    assert_eq!(slots[0].name, "motionBlur");
    let _ = Toggles { motion_blur: false };
}
