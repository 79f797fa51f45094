#![allow(dead_code)]
use traa_panel::Schema;

#[derive(Schema)]
struct Pair(f32, bool);

fn main() {}
