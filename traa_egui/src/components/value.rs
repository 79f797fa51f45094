use egui::{Response, Ui};
use traa_panel::{ExtendedMetadata, SlotDef, ValueMut};

/// Display a widget for editing a Value based on its type and metadata
pub fn value_editor(ui: &mut Ui, slot: &SlotDef, value: ValueMut) -> Response {
    let response = match (value, &slot.extended) {
        // Step snapping happens in the panel, anchored at zero rather than at `min`
        (ValueMut::F32(val), ExtendedMetadata::FloatRange(range)) => ui.add(
            egui::Slider::new(val, range.min..=range.max)
                .clamping(egui::SliderClamping::Always)
                .max_decimals(decimals(range.step)),
        ),
        (ValueMut::F32(val), _) => ui.add(egui::DragValue::new(val).speed(0.1)),

        (ValueMut::Bool(val), _) => ui.checkbox(val, ""),
    };

    if slot.common.tooltip.is_empty() {
        response
    } else {
        response.on_hover_text(&slot.common.tooltip)
    }
}

fn decimals(step: f32) -> usize {
    let mut decimals = 0;
    let mut scaled = step as f64;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-6 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
