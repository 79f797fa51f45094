#![allow(dead_code)]
use traa_panel::Schema;

#[derive(Schema)]
struct Renamed {
    #[schema(rename = "other")]
    amount: f32,
}

fn main() {}
