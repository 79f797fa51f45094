use egui::{RichText, Ui};
use egui_phosphor::regular::{ARROW_ARC_LEFT, ARROW_ARC_RIGHT, ARROW_COUNTER_CLOCKWISE};
use traa_panel::{Edit, Field, ParameterPanel};

use crate::components::value::value_editor;
use crate::consts::layout;

/// Floating window holding the "Temporal Resolve" folder.
pub fn show_parameter_panel(
    ctx: &egui::Context,
    panel: &mut ParameterPanel,
    open: &mut bool,
    top_panel_height: f32,
) {
    let style = *panel.style();
    let margin = layout::MARGIN;

    egui::Window::new("TRAA")
        .id(egui::Id::new("traa_parameter_panel"))
        .open(open)
        .resizable(false)
        .default_width(style.width)
        .anchor(
            egui::Align2::RIGHT_TOP,
            [-margin, margin + top_panel_height],
        )
        .show(ctx, |ui| {
            ui.set_min_width(style.width);
            ui.set_max_width(style.width);
            ui.style_mut().interaction.selectable_labels = style.selectable_text;

            toolbar(ui, panel);
            ui.separator();

            let title = panel.folder().title;
            let expanded = panel.folder().expanded;
            let response = egui::CollapsingHeader::new(RichText::new(title).strong())
                .id_salt("temporal_resolve")
                .open(Some(expanded))
                .show(ui, |ui| inputs(ui, panel));

            if response.header_response.clicked() {
                panel.set_expanded(!expanded);
            }
        });
}

fn toolbar(ui: &mut Ui, panel: &mut ParameterPanel) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(panel.can_undo(), egui::Button::new(ARROW_ARC_LEFT))
            .on_hover_text("Undo")
            .clicked()
        {
            panel.undo();
        }

        if ui
            .add_enabled(panel.can_redo(), egui::Button::new(ARROW_ARC_RIGHT))
            .on_hover_text("Redo")
            .clicked()
        {
            panel.redo();
        }

        if ui
            .button(ARROW_COUNTER_CLOCKWISE)
            .on_hover_text("Reset to defaults")
            .clicked()
        {
            panel.reset();
        }
    });
}

fn inputs(ui: &mut Ui, panel: &mut ParameterPanel) {
    egui::Grid::new("temporal_resolve_inputs")
        .num_columns(2)
        .spacing([layout::LABEL_SPACING, 6.0])
        .show(ui, |ui| {
            for field in Field::ALL {
                let slot = panel.slot(field);
                let label = ui
                    .add(egui::Label::new(slot.name.as_ref()).sense(egui::Sense::click()))
                    .on_hover_text("Double-click to restore the default");
                if label.double_clicked() {
                    if let Err(e) = panel.reset_field(field) {
                        log::error!("could not restore {field}: {e}");
                    }
                }

                let mut value = panel.value(field);
                let response = value_editor(ui, slot, value.as_mut());

                if response.changed() || response.drag_stopped() {
                    // Intermediate drag values coalesce into one undo step
                    let last = !response.dragged();
                    match Edit::from_value(field, value) {
                        Ok(edit) => {
                            panel.edit(edit, last);
                        }
                        Err(e) => log::error!("widget produced an invalid edit: {e}"),
                    }
                }

                ui.end_row();
            }
        });
}
