//! Physical placement of the logical grid.
//!
//! Every row always holds `columns` cells. A `matrix` places them on a uniform grid; a
//! `tree` widens the horizontal gap row by row (apex at row 0, base at the last row) and
//! centers each row on the base row, so cell centers trace a triangular silhouette.

use kurbo::{Point, Rect};

use crate::foundation::core::{CellPos, Frame};

/// How aggressively a tree narrows toward its apex.
pub const TREE_TAPER_FACTOR: f64 = 1.3;

/// Physical arrangement of the lights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Rectangular grid with uniform spacing.
    Matrix,
    /// Tapered rows, narrowest at the top.
    #[default]
    Tree,
}

/// Horizontal metrics of one row, recomputed on every layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowMetrics {
    /// Space between adjacent cells of the row.
    pub gap: f64,
    /// Distance from the left edge of the first cell to the right edge of the last.
    pub physical_width: f64,
    /// Horizontal shift of the row relative to the base row's left edge.
    pub x_offset: f64,
}

/// Metrics for row `row_index` of a `total_rows`-row layout.
///
/// In `matrix` mode all rows use `base_gap` and are left-aligned. In `tree` mode the gap
/// is `pixel_size * row_index * TREE_TAPER_FACTOR / columns` and rows are centered on the
/// last (widest) row, whose `x_offset` is zero.
pub fn row_metrics(
    row_index: usize,
    total_rows: usize,
    columns: usize,
    pixel_size: f64,
    base_gap: f64,
    mode: LayoutMode,
) -> RowMetrics {
    match mode {
        LayoutMode::Matrix => RowMetrics {
            gap: base_gap,
            physical_width: row_width(columns, pixel_size, base_gap),
            x_offset: 0.0,
        },
        LayoutMode::Tree => {
            let gap = tree_gap(row_index, columns, pixel_size);
            let physical_width = row_width(columns, pixel_size, gap);
            let base_row = total_rows.saturating_sub(1);
            let base_width = row_width(columns, pixel_size, tree_gap(base_row, columns, pixel_size));
            RowMetrics {
                gap,
                physical_width,
                x_offset: -physical_width / 2.0 + base_width / 2.0,
            }
        }
    }
}

fn tree_gap(row_index: usize, columns: usize, pixel_size: f64) -> f64 {
    pixel_size * row_index as f64 * TREE_TAPER_FACTOR / columns.max(1) as f64
}

fn row_width(columns: usize, pixel_size: f64, gap: f64) -> f64 {
    if columns == 0 {
        return 0.0;
    }
    columns as f64 * (pixel_size + gap) - gap
}

/// Cell size, spacing and arrangement used to place the grid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutParams {
    /// Diameter of one light.
    pub pixel_size: f64,
    /// Matrix gap between cells, and vertical margin below every row.
    pub base_gap: f64,
    pub mode: LayoutMode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            pixel_size: 10.0,
            base_gap: 1.0,
            mode: LayoutMode::Tree,
        }
    }
}

/// Layout of a [`Frame`] under fixed [`LayoutParams`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryLayout {
    frame: Frame,
    params: LayoutParams,
}

impl GeometryLayout {
    pub fn new(frame: Frame, params: LayoutParams) -> Self {
        Self { frame, params }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn params(&self) -> LayoutParams {
        self.params
    }

    /// Metrics of row `row_index`.
    pub fn row(&self, row_index: usize) -> RowMetrics {
        row_metrics(
            row_index,
            self.frame.height(),
            self.frame.width(),
            self.params.pixel_size,
            self.params.base_gap,
            self.params.mode,
        )
    }

    /// Metrics of every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = RowMetrics> + '_ {
        (0..self.frame.height()).map(|r| self.row(r))
    }

    /// Vertical distance between the tops of consecutive rows.
    pub fn row_pitch(&self) -> f64 {
        self.params.pixel_size + self.params.base_gap
    }

    /// Square occupied by `cell`, or `None` outside the frame.
    pub fn cell_rect(&self, cell: CellPos) -> Option<Rect> {
        if !self.frame.contains(cell) {
            return None;
        }
        let m = self.row(cell.row);
        let x0 = m.x_offset + cell.col as f64 * (self.params.pixel_size + m.gap);
        let y0 = cell.row as f64 * self.row_pitch();
        Some(Rect::new(
            x0,
            y0,
            x0 + self.params.pixel_size,
            y0 + self.params.pixel_size,
        ))
    }

    /// Smallest rectangle containing every cell.
    pub fn bounds(&self) -> Rect {
        let (x0, x1) = self.rows().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), m| {
            (lo.min(m.x_offset), hi.max(m.x_offset + m.physical_width))
        });
        if !x0.is_finite() || !x1.is_finite() {
            return Rect::ZERO;
        }
        let height = self.frame.height() as f64 * self.row_pitch() - self.params.base_gap;
        Rect::new(x0, 0.0, x1, height.max(0.0))
    }

    /// Column under horizontal position `x` in row `row_index`.
    ///
    /// Positions inside the row's extent resolve to the column whose pitch interval
    /// contains them (gaps belong to the cell on their left); positions outside the
    /// extent resolve to `None`.
    pub fn hit_test_row(&self, row_index: usize, x: f64) -> Option<usize> {
        if row_index >= self.frame.height() || self.frame.columns == 0 {
            return None;
        }
        let m = self.row(row_index);
        let local = x - m.x_offset;
        if !local.is_finite() || local < 0.0 || local > m.physical_width {
            return None;
        }
        let pitch = self.params.pixel_size + m.gap;
        if pitch <= 0.0 {
            return None;
        }
        let col = (local / pitch).floor() as usize;
        Some(col.min(self.frame.width() - 1))
    }

    /// Cell under physical point `p`, or `None` when it falls outside every row.
    pub fn hit_test(&self, p: Point) -> Option<CellPos> {
        let pitch = self.row_pitch();
        if !p.y.is_finite() || p.y < 0.0 || pitch <= 0.0 {
            return None;
        }
        // The margin below the last row belongs to no row.
        let bottom = self.frame.height() as f64 * pitch - self.params.base_gap;
        if p.y > bottom {
            return None;
        }
        let row = (p.y / pitch).floor() as usize;
        let col = self.hit_test_row(row, p.x)?;
        Some(CellPos::new(row, col))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
