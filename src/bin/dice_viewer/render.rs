use dice_shapes::app::AppState;
use dice_shapes::view::{color_for, grid_offset, project, Rgb};
use macroquad::prelude::*;

const INSTRUCTIONS: [&str; 5] = [
    "Press number keys to select a shape",
    "Up/Down arrows to resize selected shape",
    "Press 'S' to save all shapes",
    "Press 'O' to export as OBJ",
    "ESC to quit",
];

const LABEL_SIZE: f32 = 36.0;
const TEXT_SIZE: f32 = 24.0;

fn to_color((r, g, b): Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}

#[allow(clippy::cast_precision_loss)]
fn to_screen((x, y): (i32, i32)) -> (f32, f32) {
    (x as f32, y as f32)
}

/// Draws all shapes, labels, instructions and the status line.
pub fn draw_frame(state: &AppState) {
    clear_background(BLACK);

    let view = &state.view;
    for (index, (id, shape, scale)) in state.store.iter().enumerate() {
        let draw_scale = scale * view.draw_scale;
        let offset = grid_offset(index, view.width, view.height);
        let color = to_color(color_for(index));

        for edge in &shape.edges {
            let (Some(a), Some(b)) = (shape.points.get(edge.low()), shape.points.get(edge.high()))
            else {
                continue;
            };
            let (x0, y0) = to_screen(project(a, draw_scale, offset));
            let (x1, y1) = to_screen(project(b, draw_scale, offset));
            draw_line(x0, y0, x1, y1, 1.0, color);
        }

        let label_color = if state.selected == Some(id) { YELLOW } else { WHITE };
        let (lx, ly) = to_screen((offset.0 - 20, offset.1 - 20));
        // draw_text positions the baseline, not the top edge.
        draw_text(&id.to_string(), lx, ly + LABEL_SIZE * 0.75, LABEL_SIZE, label_color);
    }

    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = 10.0 + i as f32 * 30.0;
        draw_text(line, 10.0, y + TEXT_SIZE * 0.75, TEXT_SIZE, WHITE);
    }

    if let Some(status) = &state.status {
        #[allow(clippy::cast_precision_loss)]
        let y = view.height as f32 - 12.0;
        draw_text(status, 10.0, y, TEXT_SIZE, GRAY);
    }
}
