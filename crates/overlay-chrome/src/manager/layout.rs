//! Window arrangement: cascade, tile, center

use crate::math::Size;
use crate::window::WindowId;
use super::WindowManager;

/// Grid dimensions `(columns, rows)` for tiling `count` windows.
///
/// Columns are the ceiling of the square root, rows whatever is needed to
/// fit the rest, so `columns * rows >= count`.
pub fn tile_grid(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut columns = (count as f64).sqrt().ceil() as usize;
    // Guard against float rounding below the true root
    while columns * columns < count {
        columns += 1;
    }
    let rows = count.div_ceil(columns);
    (columns, rows)
}

/// Cell size for a `columns x rows` grid over `viewport`, never below `floor`
pub fn tile_cell(viewport: Size, columns: usize, rows: usize, floor: Size) -> Size {
    let columns = columns.max(1) as i32;
    let rows = rows.max(1) as i32;
    Size::new(
        (viewport.width / columns).max(floor.width),
        (viewport.height / rows).max(floor.height),
    )
}

impl WindowManager {
    /// Visible window ids in creation order
    fn visible_ids(&self) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = self
            .windows
            .values()
            .filter(|w| w.is_visible())
            .map(|w| w.id())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Stagger visible windows diagonally from the cascade origin, keeping
    /// each one inside the viewport where its size allows
    pub fn cascade_windows(&mut self) {
        let origin = self.config.cascade_origin;
        let stagger = self.config.cascade_stagger;
        let viewport = self.config.viewport;

        for (index, id) in self.visible_ids().into_iter().enumerate() {
            let Some(size) = self.windows.get(&id).map(|w| w.size()) else { continue };
            let offset = stagger.saturating_mul(index as i32);
            let max_x = (viewport.width - size.width).max(0);
            let max_y = (viewport.height - size.height).max(0);
            let x = origin.x.saturating_add(offset).clamp(0, max_x);
            let y = origin.y.saturating_add(offset).clamp(0, max_y);
            self.move_window(id, x, y);
        }
        log::debug!("cascaded windows");
    }

    /// Arrange visible windows in a row-major grid covering the viewport
    pub fn tile_windows(&mut self) {
        let ids = self.visible_ids();
        let (columns, rows) = tile_grid(ids.len());
        if columns == 0 {
            return;
        }
        let cell = tile_cell(self.config.viewport, columns, rows, self.config.tile_min_cell);

        for (index, id) in ids.into_iter().enumerate() {
            let column = (index % columns) as i32;
            let row = (index / columns) as i32;
            self.resize_window(id, cell.width, cell.height);
            self.move_window(id, column * cell.width, row * cell.height);
        }
        log::debug!("tiled windows in a {columns}x{rows} grid");
    }

    /// Center a window in the viewport. Returns false if the id is unknown.
    pub fn center_window(&mut self, id: WindowId) -> bool {
        let Some(size) = self.windows.get(&id).map(|w| w.size()) else { return false };
        let viewport = self.config.viewport;
        let x = ((viewport.width - size.width) / 2).max(0);
        let y = ((viewport.height - size.height) / 2).max(0);
        self.move_window(id, x, y)
    }
}
