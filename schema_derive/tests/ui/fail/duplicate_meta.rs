#![allow(dead_code)]
use traa_panel::Schema;

#[derive(Schema)]
struct Doubled {
    #[meta(traa_panel::Boolean { default: true })]
    #[meta(traa_panel::Boolean { default: false })]
    enabled: bool,
}

fn main() {}
