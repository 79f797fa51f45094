use egui::Color32;

/// Window placement
pub mod layout {
    /// Gap between the parameter window and the viewport edge
    pub const MARGIN: f32 = 8.0;
    /// Horizontal gap between an input label and its widget
    pub const LABEL_SPACING: f32 = 12.0;
}

/// Preview palette
pub mod colors {
    use super::Color32;

    pub const GRID: Color32 = Color32::from_rgb(45, 45, 52);
    pub const CURRENT: Color32 = Color32::from_rgb(200, 80, 120);
    pub const RESOLVED: Color32 = Color32::from_rgb(66, 135, 245);
    pub const TRAIL: Color32 = Color32::from_rgb(120, 120, 140);
    pub const DILATION: Color32 = Color32::from_rgb(230, 175, 80);
    pub const TEXT: Color32 = Color32::from_rgb(200, 200, 200);
}

pub const PRESET_EXTENSION: &str = "json";
