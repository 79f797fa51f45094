/// Title of the single folder holding the bound inputs.
pub const FOLDER_TITLE: &str = "Temporal Resolve";

/// Fixed panel width in logical pixels.
pub const PANEL_WIDTH: f32 = 380.0;

/// Number of undo steps kept.
pub const HISTORY_DEPTH: usize = 100;

/// Version written into exported presets. Imports accept the same major.
pub const PRESET_VERSION: semver::Version = semver::Version::new(1, 0, 0);
