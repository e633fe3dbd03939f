// Canvas sizing: logical grid from container size, backing store from DPR.
use crate::model::GridDimensions;

pub const MIN_COLUMNS: i32 = 22;
pub const MIN_ROWS: i32 = 14;
pub const MIN_CELL: f64 = 16.0;
pub const MAX_CELL: f64 = 28.0;
/// Device pixel ratios above this are not worth the fill cost.
pub const MAX_DPR: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Container size in CSS pixels.
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
        }
    }
}

impl Surface {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_DPR)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr,
        }
    }

    pub fn grid(&self) -> GridDimensions {
        let cell = (self.width.min(self.height) / 28.0)
            .floor()
            .clamp(MIN_CELL, MAX_CELL);
        GridDimensions {
            columns: ((self.width / cell).floor() as i32).max(MIN_COLUMNS),
            rows: ((self.height / cell).floor() as i32).max(MIN_ROWS),
            cell_size: cell,
        }
    }

    /// Physical pixel size of the canvas backing buffer.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_viewport() {
        let s = Surface::new(1440.0, 900.0, 1.0);
        let g = s.grid();
        // 900 / 28 = 32.1 -> clamped to 28
        assert_eq!(g.cell_size, 28.0);
        assert_eq!(g.columns, 51);
        assert_eq!(g.rows, 32);
    }

    #[test]
    fn small_viewport_keeps_minimum_grid() {
        let g = Surface::new(320.0, 200.0, 3.0).grid();
        assert_eq!(g.cell_size, 16.0);
        assert_eq!(g.columns, 22);
        assert_eq!(g.rows, 14);
    }

    #[test]
    fn cell_size_tracks_short_side() {
        let g = Surface::new(1000.0, 560.0, 1.0).grid();
        assert_eq!(g.cell_size, 20.0);
        assert_eq!(g.columns, 50);
        assert_eq!(g.rows, 28);
    }

    #[test]
    fn backing_store_is_capped_at_2x() {
        assert_eq!(Surface::new(401.5, 300.0, 3.0).backing_size(), (803, 600));
        assert_eq!(Surface::new(401.5, 300.0, 1.5).backing_size(), (602, 450));
        let unknown = Surface::new(100.0, 50.0, 0.0);
        assert_eq!(unknown.dpr, 1.0);
        assert_eq!(unknown.backing_size(), (100, 50));
    }
}
