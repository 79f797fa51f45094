#![allow(dead_code)]
use traa_panel::Schema;

#[derive(Schema)]
enum Mode { Fast, Slow }

fn main() {}
