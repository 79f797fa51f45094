mod parameter_panel;
mod preview;

pub use parameter_panel::show_parameter_panel;
pub use preview::show_preview;
