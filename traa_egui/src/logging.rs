use anyhow::Result;
use log::{LevelFilter, Log};

/// Renderer and windowing crates that flood the log at info level.
#[cfg(feature = "native")]
const QUIET_MODULES: &[&str] = &["naga", "wgpu", "wgpu_core", "wgpu_hal", "egui_wgpu", "eframe", "winit"];

/// Hands every record to both the terminal and the log window.
pub struct Tee<A, B>(pub A, pub B);

impl<A: Log, B: Log> Log for Tee<A, B> {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.0.enabled(metadata) || self.1.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        self.0.log(record);
        self.1.log(record);
    }

    fn flush(&self) {
        self.0.flush();
        self.1.flush();
    }
}

/// Panel edits and effect writes go to stderr and to the Logs window.
/// `RUST_LOG` still overrides the terminal side, e.g. `RUST_LOG=traa_panel=debug`.
#[cfg(feature = "native")]
pub fn init(level: LevelFilter) -> Result<()> {
    let mut terminal = env_logger::Builder::new();
    terminal.filter_level(level);
    for module in QUIET_MODULES {
        terminal.filter_module(module, LevelFilter::Warn);
    }
    terminal.parse_default_env().format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "{:<5} {}: {}", record.level(), record.target(), record.args())
    });

    let terminal = terminal.build();
    let window = egui_logger::Builder::default().max_level(level).build();

    log::set_max_level(terminal.filter().max(level));
    log::set_boxed_logger(Box::new(Tee(terminal, window)))?;

    Ok(())
}

#[cfg(not(feature = "native"))]
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_max_level(level);
    log::set_boxed_logger(Box::new(egui_logger::Builder::default().max_level(level).build()))?;

    Ok(())
}
