use std::path::PathBuf;

use anyhow::Result;
use traa_panel::ParameterPanel;
use traa_panel::preset::Preset;

use crate::consts::PRESET_EXTENSION;

/// Ask for a destination and write the panel's current values there.
/// Returns `None` if the dialog was cancelled.
pub fn pick_and_export(panel: &ParameterPanel) -> Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("TRAA preset", &[PRESET_EXTENSION])
        .set_file_name("traa_preset.json")
        .save_file()
    else {
        return Ok(None);
    };

    Preset::new(panel.settings()).save(&path)?;
    log::info!("exported preset to {path:?}");
    Ok(Some(path))
}

/// Ask for a preset file and apply it to the panel.
/// Returns `None` if the dialog was cancelled.
pub fn pick_and_import(panel: &mut ParameterPanel) -> Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("TRAA preset", &[PRESET_EXTENSION])
        .pick_file()
    else {
        return Ok(None);
    };

    let preset = Preset::load(&path)?;
    panel.apply_preset(&preset)?;
    Ok(Some(path))
}
