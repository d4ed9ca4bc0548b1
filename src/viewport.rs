//! Screen/grid coordinate transform - zoom, pan, visible window.

use crate::config::ViewportConfig;

/// Mapping between screen pixels and grid cells.
///
/// The transform is `screen = grid × cell_size + offset`, where
/// `cell_size = base_cell_size × zoom`. Offsets are real-valued pixel
/// positions of the grid origin and are unbounded; zoom is confined to
/// `[min_zoom, max_zoom]`. All math is `f64` so integer grid coordinates
/// stay exact over the whole practical simulation horizon.
#[derive(Clone, Debug)]
pub struct Viewport {
    zoom: f64,
    cell_size: f64,
    offset_x: f64,
    offset_y: f64,
    config: ViewportConfig,
}

impl Viewport {
    /// Create a viewport at zoom 1 with the grid origin at screen (0, 0).
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            zoom: 1.0,
            cell_size: config.base_cell_size,
            offset_x: 0.0,
            offset_y: 0.0,
            config,
        }
    }

    /// Restore zoom 1 and zero offsets.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.cell_size = self.config.base_cell_size;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Current zoom level.
    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Cell edge length in pixels at the current zoom.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Pixel position of the grid origin `(offset_x, offset_y)`.
    #[inline]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Grid cell containing the screen point `(px, py)`.
    #[inline]
    pub fn screen_to_grid(&self, px: f64, py: f64) -> (i64, i64) {
        let gx = ((px - self.offset_x) / self.cell_size).floor() as i64;
        let gy = ((py - self.offset_y) / self.cell_size).floor() as i64;
        (gx, gy)
    }

    /// Screen position of the top-left corner of the cell `(gx, gy)`.
    #[inline]
    pub fn grid_to_screen(&self, gx: i64, gy: i64) -> (f64, f64) {
        (
            gx as f64 * self.cell_size + self.offset_x,
            gy as f64 * self.cell_size + self.offset_y,
        )
    }

    /// Zoom by `factor` keeping the grid point under `(px, py)` fixed on
    /// screen.
    ///
    /// A factor that would push the zoom level outside
    /// `[min_zoom, max_zoom]` is rejected outright - the call is a no-op,
    /// not a clamp to the boundary.
    pub fn zoom_at(&mut self, px: f64, py: f64, factor: f64) {
        let new_zoom = self.zoom * factor;
        if new_zoom < self.config.min_zoom || new_zoom > self.config.max_zoom {
            return;
        }

        // Anchor point in grid space, unfloored so the fixup is exact.
        let gx = (px - self.offset_x) / self.cell_size;
        let gy = (py - self.offset_y) / self.cell_size;

        self.zoom = new_zoom;
        self.cell_size = self.config.base_cell_size * new_zoom;

        self.offset_x = px - gx * self.cell_size;
        self.offset_y = py - gy * self.cell_size;
    }

    /// Shift the view by a pixel delta. Unconditional and unbounded.
    #[inline]
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Grid-coordinate window `(start_x, start_y, end_x, end_y)` covering a
    /// canvas of the given pixel size. Bounds are inclusive for culling.
    pub fn visible_window(&self, width: f64, height: f64) -> (i64, i64, i64, i64) {
        let start_x = (-self.offset_x / self.cell_size).floor() as i64;
        let start_y = (-self.offset_y / self.cell_size).floor() as i64;
        let end_x = ((width - self.offset_x) / self.cell_size).ceil() as i64;
        let end_y = ((height - self.offset_y) / self.cell_size).ceil() as i64;
        (start_x, start_y, end_x, end_y)
    }

    /// Grid cell at the center of a canvas of the given pixel size.
    ///
    /// This is where new ants spawn.
    pub fn center_cell(&self, width: f64, height: f64) -> (i64, i64) {
        self.screen_to_grid(width / 2.0, height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_screen_to_grid_floors_toward_negative() {
        let vp = Viewport::default();
        // base cell size 4: pixel 0..4 is cell 0, -4..0 is cell -1.
        assert_eq!(vp.screen_to_grid(0.0, 0.0), (0, 0));
        assert_eq!(vp.screen_to_grid(3.9, 3.9), (0, 0));
        assert_eq!(vp.screen_to_grid(4.0, 7.9), (1, 1));
        assert_eq!(vp.screen_to_grid(-0.1, -4.0), (-1, -1));
    }

    #[test]
    fn test_pan_shifts_the_mapping() {
        let mut vp = Viewport::default();
        vp.pan(8.0, -4.0);
        assert_eq!(vp.offset(), (8.0, -4.0));
        assert_eq!(vp.screen_to_grid(8.0, 0.0), (0, 1));

        // Panning is unbounded.
        vp.pan(-1e9, 1e9);
        assert_eq!(vp.offset(), (8.0 - 1e9, -4.0 + 1e9));
    }

    #[test]
    fn test_zoom_at_keeps_anchor_fixed() {
        let mut vp = Viewport::default();
        vp.pan(37.0, -12.5);

        let (px, py) = (200.0, 150.0);
        let before_x = (px - vp.offset().0) / vp.cell_size();
        let before_y = (py - vp.offset().1) / vp.cell_size();

        vp.zoom_at(px, py, 1.1);

        let after_x = (px - vp.offset().0) / vp.cell_size();
        let after_y = (py - vp.offset().1) / vp.cell_size();
        assert!((before_x - after_x).abs() < EPS);
        assert!((before_y - after_y).abs() < EPS);
        assert!((vp.zoom() - 1.1).abs() < EPS);
        assert!((vp.cell_size() - 4.4).abs() < EPS);
    }

    #[test]
    fn test_zoom_out_of_range_is_a_noop() {
        let mut vp = Viewport::default();
        vp.pan(5.0, 5.0);
        let before_offset = vp.offset();

        // 1.0 × 6.0 exceeds max_zoom 5.0: rejected, not clamped.
        vp.zoom_at(100.0, 100.0, 6.0);
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.offset(), before_offset);

        // 1.0 × 0.4 undershoots min_zoom 0.5.
        vp.zoom_at(100.0, 100.0, 0.4);
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.offset(), before_offset);
    }

    #[test]
    fn test_repeated_wheel_zoom_stops_at_the_limit() {
        let mut vp = Viewport::default();
        for _ in 0..100 {
            vp.zoom_at(0.0, 0.0, 1.1);
        }
        assert!(vp.zoom() <= vp.config.max_zoom);
        // One more rejected step leaves the state untouched.
        let zoom = vp.zoom();
        vp.zoom_at(0.0, 0.0, 1.1);
        assert_eq!(vp.zoom(), zoom);
    }

    #[test]
    fn test_visible_window_covers_the_canvas() {
        let vp = Viewport::default();
        let (sx, sy, ex, ey) = vp.visible_window(800.0, 600.0);
        assert_eq!((sx, sy), (0, 0));
        assert_eq!((ex, ey), (200, 150));
    }

    #[test]
    fn test_visible_window_after_pan() {
        let mut vp = Viewport::default();
        vp.pan(-40.0, 10.0);
        let (sx, sy, ex, ey) = vp.visible_window(800.0, 600.0);
        assert_eq!((sx, sy), (10, -3));
        assert_eq!((ex, ey), (210, 148));
    }

    #[test]
    fn test_center_cell() {
        let vp = Viewport::default();
        assert_eq!(vp.center_cell(800.0, 600.0), (100, 75));

        let mut panned = Viewport::default();
        panned.pan(400.0, 300.0);
        assert_eq!(panned.center_cell(800.0, 600.0), (0, 0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut vp = Viewport::default();
        vp.pan(123.0, -456.0);
        vp.zoom_at(50.0, 50.0, 1.1);

        vp.reset();
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.cell_size(), 4.0);
        assert_eq!(vp.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_grid_to_screen_inverts_screen_to_grid() {
        let mut vp = Viewport::default();
        vp.pan(13.0, -7.0);
        vp.zoom_at(60.0, 40.0, 0.9);

        let (px, py) = vp.grid_to_screen(-25, 42);
        assert_eq!(vp.screen_to_grid(px + EPS, py + EPS), (-25, 42));
    }
}
