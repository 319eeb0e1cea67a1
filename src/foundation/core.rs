use crate::foundation::error::{LightgridError, LightgridResult};

/// Declared output geometry: the logical grid driven onto the lights.
///
/// `rows` is configured independently of the pixel buffer; a buffer may hold
/// fewer or more pixels than `columns * rows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Logical grid width.
    pub columns: u32,
    /// Logical grid height.
    pub rows: u32,
}

impl Frame {
    /// Build a frame, rejecting empty dimensions.
    pub fn new(columns: u32, rows: u32) -> LightgridResult<Self> {
        let frame = Self { columns, rows };
        frame.validate()?;
        Ok(frame)
    }

    /// Check `columns >= 1` and `rows >= 1`.
    pub fn validate(&self) -> LightgridResult<()> {
        if self.columns == 0 {
            return Err(LightgridError::validation("frame columns must be >= 1"));
        }
        if self.rows == 0 {
            return Err(LightgridError::validation("frame rows must be >= 1"));
        }
        Ok(())
    }

    /// Number of cells in the logical grid.
    pub fn cells(&self) -> usize {
        self.width() * self.height()
    }

    /// Columns as `usize`, for index arithmetic.
    pub fn width(&self) -> usize {
        self.columns as usize
    }

    /// Rows as `usize`, for index arithmetic.
    pub fn height(&self) -> usize {
        self.rows as usize
    }

    /// `true` when `(row, col)` addresses a cell of this frame.
    pub fn contains(&self, cell: CellPos) -> bool {
        cell.row < self.height() && cell.col < self.width()
    }

    /// Row-major display index of `cell`, if it lies inside the frame.
    pub fn index_of(&self, cell: CellPos) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row * self.width() + cell.col)
    }
}

/// A logical `(row, column)` cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CellPos {
    /// Row index, `0` is the top (tree apex).
    pub row: usize,
    /// Column index, `0` is the left edge.
    pub col: usize,
}

impl CellPos {
    /// Build a cell address.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// User-controlled translation of the displayed content, in cells.
///
/// Positive `dx` moves content right, positive `dy` moves content down.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Offset {
    /// Horizontal shift in columns.
    pub dx: i32,
    /// Vertical shift in rows.
    pub dy: i32,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    /// Build an offset.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// `true` when neither axis is shifted.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Offset for a vertical slider position that starts content centered in the frame.
    ///
    /// `content_rows` is the number of rows the image actually fills (see
    /// [`crate::PixelBuffer::content_rows`]). A slider value of zero places the content
    /// in the middle of `frame_rows`; halves round towards positive infinity.
    pub fn centered(dx: i32, slider_dy: i32, frame_rows: u32, content_rows: u32) -> Self {
        let centered = f64::from(slider_dy) + f64::from(frame_rows) / 2.0
            - f64::from(content_rows) / 2.0;
        Self {
            dx,
            dy: (centered + 0.5).floor() as i32,
        }
    }

    /// Offset for slider positions `(dx, slider_dy)` over content centered in `frame`.
    ///
    /// The slider values are clamped with [`Offset::clamp_to`] before centering; the
    /// resulting `dy` is not clamped again, so short content can reach either edge.
    pub fn from_centered_slider(dx: i32, slider_dy: i32, frame: Frame, content_rows: u32) -> Self {
        let slider = Self::new(dx, slider_dy).clamp_to(frame);
        Self::centered(slider.dx, slider.dy, frame.rows, content_rows)
    }

    /// Clamp to the range a positioning control can produce for `frame`:
    /// `[-columns, columns]` horizontally, `[-rows/2, rows/2]` vertically.
    pub fn clamp_to(self, frame: Frame) -> Self {
        let max_dx = i32::try_from(frame.columns).unwrap_or(i32::MAX);
        let max_dy = i32::try_from(frame.rows / 2).unwrap_or(i32::MAX);
        Self {
            dx: self.dx.clamp(-max_dx, max_dx),
            dy: self.dy.clamp(-max_dy, max_dy),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
