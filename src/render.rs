//! Draw-command generation - which squares to paint, where, what color.
//!
//! The renderer is backend-free: it turns (grid, ants, viewport, canvas
//! size) into a list of [`DrawRect`]s and leaves the actual painting to
//! whichever frontend consumes them. Colors are plain `(r, g, b)` triples;
//! the GUI converts them to its own color type at the boundary.

use crate::ant::Ant;
use crate::grid::Grid;
use crate::viewport::Viewport;

/// RGB color triple.
pub type Color = (u8, u8, u8);

/// Color of a cell that reads `true` ("on").
pub const CELL_ON: Color = (255, 255, 255);
/// Color of a materialized cell that reads `false` ("off").
pub const CELL_OFF: Color = (0, 0, 0);
/// Color the frontend clears the canvas to before painting.
pub const BACKGROUND: Color = (0, 0, 0);

/// Fixed ant palette, assigned by list index mod 6. Purely cosmetic.
pub const ANT_COLORS: [Color; 6] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
    (0, 255, 255),
];

/// One filled square to paint: top-left corner in pixels, edge length,
/// fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Color,
}

/// Display color for the ant at a given list index.
#[inline]
pub fn ant_color(index: usize) -> Color {
    ANT_COLORS[index % ANT_COLORS.len()]
}

/// Produces the squares to paint for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Emit draw commands for everything visible on a canvas of the given
    /// pixel size: materialized grid cells first, then ants on top.
    ///
    /// Entries outside the viewport's visible window are culled. Window
    /// bounds are inclusive, so cells straddling the canvas edge are still
    /// painted.
    pub fn draw(
        &self,
        grid: &Grid,
        ants: &[Ant],
        viewport: &Viewport,
        canvas: (f64, f64),
    ) -> Vec<DrawRect> {
        let (width, height) = canvas;
        let (start_x, start_y, end_x, end_y) = viewport.visible_window(width, height);
        let size = viewport.cell_size();

        let mut rects = Vec::new();

        for ((x, y), on) in grid.iter() {
            if x >= start_x && x <= end_x && y >= start_y && y <= end_y {
                let (px, py) = viewport.grid_to_screen(x, y);
                rects.push(DrawRect {
                    x: px,
                    y: py,
                    size,
                    color: if on { CELL_ON } else { CELL_OFF },
                });
            }
        }

        for (index, ant) in ants.iter().enumerate() {
            if ant.x >= start_x && ant.x <= end_x && ant.y >= start_y && ant.y <= end_y {
                let (px, py) = viewport.grid_to_screen(ant.x, ant.y);
                rects.push(DrawRect {
                    x: px,
                    y: py,
                    size,
                    color: ant_color(index),
                });
            }
        }

        rects
    }
}
