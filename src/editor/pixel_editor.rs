use kurbo::Point;

use crate::{
    foundation::{
        color::Color,
        core::{CellPos, Frame, Offset},
        error::EditRejected,
    },
    layout::geometry::GeometryLayout,
    pixels::channels::PixelBuffer,
    transform::shift::{apply_shift, unshift_index},
};

/// Edit session over one pixel buffer laid out on a frame.
///
/// The editor owns the buffer and nothing else: offsets and layout are passed to
/// every call. Rendering borrows immutably, editing mutably, so a write can never
/// overlap a read of the same editor.
#[derive(Clone, Debug)]
pub struct PixelEditor {
    buffer: PixelBuffer,
    frame: Frame,
}

impl PixelEditor {
    pub fn new(buffer: PixelBuffer, frame: Frame) -> Self {
        Self { buffer, frame }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// The displayed `columns x rows` grid under `offset`, row-major.
    ///
    /// Cells past the end of the buffer and cells uncovered by the offset are
    /// [`Color::TRANSPARENT`].
    pub fn render(&self, offset: Offset) -> Vec<Color> {
        let unshifted: Vec<Color> = (0..self.frame.cells())
            .map(|i| self.buffer.get(i))
            .collect();
        apply_shift(&unshifted, self.frame.width(), offset.dx, offset.dy)
    }

    /// [`PixelEditor::render`] split into rows.
    pub fn render_rows(&self, offset: Offset) -> Vec<Vec<Color>> {
        self.render(offset)
            .chunks(self.frame.width().max(1))
            .map(<[Color]>::to_vec)
            .collect()
    }

    /// Color currently displayed at `cell`; transparent outside the frame.
    pub fn sample(&self, cell: CellPos, offset: Offset) -> Color {
        self.resolve(cell, offset)
            .map(|i| self.buffer.get(i))
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Eyedropper: the displayed color at `cell`, or `None` when nothing is lit there.
    pub fn pick(&self, cell: CellPos, offset: Offset) -> Option<Color> {
        let c = self.sample(cell, offset);
        (!c.is_transparent()).then_some(c)
    }

    /// Buffer pixel index behind displayed `cell`.
    pub fn resolve(&self, cell: CellPos, offset: Offset) -> Result<usize, EditRejected> {
        let display = self.frame.index_of(cell).ok_or(EditRejected::OutOfFrame)?;
        let index = unshift_index(
            display,
            self.frame.width(),
            self.frame.height(),
            offset.dx,
            offset.dy,
        )
        .ok_or(EditRejected::PaddedArea)?;
        if index >= self.buffer.pixel_count() {
            return Err(EditRejected::OutsideBuffer);
        }
        Ok(index)
    }

    /// Write `color` to the buffer pixel displayed at `cell`.
    ///
    /// Components the buffer layout cannot hold are dropped. On rejection the buffer is
    /// left untouched. Repeating the same edit is a no-op.
    pub fn edit(&mut self, cell: CellPos, color: Color, offset: Offset) -> Result<(), EditRejected> {
        let index = self.resolve(cell, offset)?;
        if !self.buffer.set(index, color) {
            return Err(EditRejected::OutsideBuffer);
        }
        Ok(())
    }

    /// Edit the cell under physical point `p`.
    ///
    /// `Ok(None)` when the point misses every row of `layout`.
    pub fn edit_at_point(
        &mut self,
        layout: &GeometryLayout,
        p: Point,
        color: Color,
        offset: Offset,
    ) -> Result<Option<CellPos>, EditRejected> {
        let Some(cell) = layout.hit_test(p) else {
            return Ok(None);
        };
        self.edit(cell, color, offset)?;
        Ok(Some(cell))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/pixel_editor.rs"]
mod tests;
