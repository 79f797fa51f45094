use crate::app::ViewState;

#[derive(Default)]
pub struct MenuBarActions {
    pub export_preset: bool,
    pub import_preset: bool,
    pub undo: bool,
    pub redo: bool,
    pub reset: bool,
}

pub struct MenuBar;

impl MenuBar {
    pub fn show(
        ctx: &egui::Context,
        view_state: &mut ViewState,
        can_undo: bool,
        can_redo: bool,
    ) -> (egui::InnerResponse<()>, MenuBarActions) {
        let mut actions = MenuBarActions::default();

        let response = egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export Preset...").clicked() {
                        actions.export_preset = true;
                        ui.close();
                    }

                    if ui.button("Import Preset...").clicked() {
                        actions.import_preset = true;
                        ui.close();
                    }

                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                        actions.undo = true;
                        ui.close();
                    }

                    if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                        actions.redo = true;
                        ui.close();
                    }

                    if ui.button("Reset to Defaults").clicked() {
                        actions.reset = true;
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut view_state.show_panel, "TRAA Panel");
                    ui.checkbox(&mut view_state.show_logs, "Logs");
                });
            });
        });

        (response, actions)
    }
}
