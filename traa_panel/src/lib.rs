// The derive macro names this crate by path; make that path resolve here too.
extern crate self as traa_panel;

mod edit;
mod panel;
mod registry;
mod settings;
mod value;

pub mod consts;
pub mod error;
pub mod history;
pub mod preset;
pub mod traits;

pub use edit::*;
pub use panel::*;
pub use registry::*;
pub use settings::*;
pub use value::*;

pub use traa_schema_derive::Schema;
pub use traits::{Schema, TemporalResolve};
