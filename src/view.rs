use crate::math::Point3;

/// Viewer window and interaction parameters.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// Window width in pixels.
    pub width: i32,
    /// Window height in pixels.
    pub height: i32,
    /// Factor applied per Up/Down key press.
    pub scale_step: f64,
    /// Pixels per model unit at a shape scale of 1.0.
    pub draw_scale: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale_step: 1.1,
            draw_scale: 2.0,
        }
    }
}

/// An RGB color.
pub type Rgb = (u8, u8, u8);

/// Edge colors, cycled by draw index.
pub const PALETTE: [Rgb; 5] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
];

/// Orthographic projection onto the XY plane. `z` is ignored.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn project(point: &Point3, scale: f64, offset: (i32, i32)) -> (i32, i32) {
    (
        (point.x * scale + f64::from(offset.0)) as i32,
        (point.y * scale + f64::from(offset.1)) as i32,
    )
}

/// Screen-space origin of the `index`-th shape in a three-column grid.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn grid_offset(index: usize, width: i32, height: i32) -> (i32, i32) {
    let col = (index % 3) as i32 + 1;
    let row = (index / 3) as i32 + 1;
    (col * width / 4, row * height / 4)
}

/// Edge color for the `index`-th shape.
#[must_use]
pub fn color_for(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}
