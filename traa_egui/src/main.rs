mod app;
mod components;
mod consts;
mod effect;
mod keybinds;
mod logging;

use traa_panel::preset::Preset;

fn main() -> eframe::Result {
    if logging::init(log::LevelFilter::Info).is_err() {
        eprintln!("Logging failed to start.");
    }

    // An optional preset path seeds the panel instead of the defaults
    let settings = match std::env::args().nth(1).map(Preset::load).transpose() {
        Ok(preset) => preset.map(|p| p.settings),
        Err(e) => {
            log::error!("Ignoring preset: {e}");
            None
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TRAA tuning")
            .with_inner_size([1280.0, 720.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "traa_egui",
        options,
        Box::new(|cc| Ok(Box::new(app::TraaDemoApp::init(cc, settings)?))),
    )
}
