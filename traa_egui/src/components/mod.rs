pub mod menu_bar;
pub mod panels;
#[cfg(feature = "native")]
pub mod preset_picker;
pub mod value;
