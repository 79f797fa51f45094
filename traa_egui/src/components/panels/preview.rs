use egui::{Align2, FontId, Rect, Stroke, Vec2};

use crate::consts::colors;
use crate::effect::PreviewEffect;

/// Central view: a point orbiting the viewport, resolved through the
/// preview effect, drawn over a grid at the effect's render resolution.
pub fn show_preview(ctx: &egui::Context, effect: &mut PreviewEffect) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);
        let time = ui.input(|i| i.time) as f32;

        draw_grid(&painter, rect, effect.render_size(rect.size()));

        let radius = rect.size().min_elem() * 0.3;
        let current = rect.center() + Vec2::angled(time * 1.7) * radius;
        let resolved = effect.resolve(current);

        painter.circle_filled(current, 4.0, colors::CURRENT);
        painter.line_segment([current, resolved], Stroke::new(1.0, colors::TRAIL));
        painter.circle_filled(resolved, 10.0, colors::RESOLVED);
        if effect.dilation {
            painter.circle_stroke(resolved, 16.0, Stroke::new(1.5, colors::DILATION));
        }

        let size = effect.render_size(rect.size());
        painter.text(
            rect.left_top() + Vec2::splat(12.0),
            Align2::LEFT_TOP,
            format!(
                "blend {:.3}\nrender {}x{} ({:.3})\ndilation {}",
                effect.blend, size.x, size.y, effect.quality_scale, effect.dilation
            ),
            FontId::monospace(14.0),
            colors::TEXT,
        );

        ctx.request_repaint();
    });
}

/// One cell per block of render-target texels.
fn draw_grid(painter: &egui::Painter, rect: Rect, render_size: Vec2) {
    const TEXELS_PER_CELL: f32 = 16.0;

    let cells = (render_size / TEXELS_PER_CELL).ceil().max(Vec2::splat(1.0));
    let cell = rect.size() / cells;
    let stroke = Stroke::new(1.0, colors::GRID);
    if cell.x < 1.0 || cell.y < 1.0 {
        return;
    }

    let mut x = rect.left();
    while x <= rect.right() {
        painter.vline(x, rect.y_range(), stroke);
        x += cell.x;
    }

    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.hline(rect.x_range(), y, stroke);
        y += cell.y;
    }

    painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Inside);
}
