use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::Result;
use egui_notify::Toasts;
use traa_panel::history::{Event, Message};
use traa_panel::{PanelDescriptor, ParameterPanel, PartialTraaSettings, TemporalResolve};

use crate::components::{
    menu_bar::MenuBar,
    panels::{show_parameter_panel, show_preview},
};
use crate::effect::PreviewEffect;

pub struct ViewState {
    pub show_panel: bool,
    pub show_logs: bool,
    pub notifications: Toasts,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            show_panel: true,
            show_logs: false,
            notifications: Toasts::default(),
        }
    }
}

pub struct TraaDemoApp {
    pub panel: ParameterPanel,
    /// The effect being tuned
    pub effect: PreviewEffect,
    /// What should be on screen
    pub view_state: ViewState,
    /// Message receiver from the panel
    message_rx: Receiver<Message>,
}

impl TraaDemoApp {
    pub fn init(cc: &eframe::CreationContext<'_>, settings: Option<PartialTraaSettings>) -> Result<Self> {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        let panel = ParameterPanel::new(PanelDescriptor {
            settings,
            on_change: Some(Box::new(move |msg| {
                let _ = tx.send(msg);
            })),
        })?;

        let effect = PreviewEffect::new(panel.settings());

        Ok(Self {
            panel,
            effect,
            view_state: Default::default(),
            message_rx: rx,
        })
    }

    /// Forward panel changes onto the effect.
    fn process_messages(&mut self) {
        while let Ok(msg) = self.message_rx.try_recv() {
            match msg {
                Message::Change { edit, .. } => self.effect.apply(edit),
                Message::Event(event) => {
                    log::debug!("Panel event: {:?}", event);
                    match event {
                        Event::Reset => {
                            self.view_state.notifications.info("Restored defaults");
                        }
                        Event::PresetImported => {
                            self.view_state.notifications.success("Preset applied");
                        }
                        Event::FolderToggled { .. } | Event::Undo | Event::Redo => {}
                    }
                }
            }
        }
    }

    #[cfg(feature = "native")]
    fn export_preset(&mut self) {
        match crate::components::preset_picker::pick_and_export(&self.panel) {
            Ok(Some(path)) => {
                self.view_state
                    .notifications
                    .success(format!("Saved {}", path.display()));
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to export preset: {e:#}");
                self.view_state.notifications.error(format!("Export failed: {e}"));
            }
        }
    }

    #[cfg(feature = "native")]
    fn import_preset(&mut self) {
        if let Err(e) = crate::components::preset_picker::pick_and_import(&mut self.panel) {
            log::error!("Failed to import preset: {e:#}");
            self.view_state.notifications.error(format!("Import failed: {e}"));
        }
    }

    #[cfg(not(feature = "native"))]
    fn export_preset(&mut self) {
        match self.panel.export_preset() {
            Ok(json) => log::info!("preset:\n{json}"),
            Err(e) => {
                self.view_state.notifications.error(format!("Export failed: {e}"));
            }
        }
    }

    #[cfg(not(feature = "native"))]
    fn import_preset(&mut self) {
        self.view_state
            .notifications
            .warning("Preset import needs native file dialogs");
    }
}

impl eframe::App for TraaDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keypress(ctx);

        let (menu_response, actions) = MenuBar::show(
            ctx,
            &mut self.view_state,
            self.panel.can_undo(),
            self.panel.can_redo(),
        );

        if actions.undo {
            self.panel.undo();
        }
        if actions.redo {
            self.panel.redo();
        }
        if actions.reset {
            self.panel.reset();
        }
        if actions.export_preset {
            self.export_preset();
        }
        if actions.import_preset {
            self.import_preset();
        }

        egui::Window::new("Log")
            .open(&mut self.view_state.show_logs)
            .show(ctx, |ui| {
                egui_logger::logger_ui().show(ui);
            });

        show_parameter_panel(
            ctx,
            &mut self.panel,
            &mut self.view_state.show_panel,
            menu_response.response.rect.height(),
        );

        // Apply this frame's edits before the effect renders
        self.process_messages();

        show_preview(ctx, &mut self.effect);

        self.view_state.notifications.show(ctx);
    }
}
