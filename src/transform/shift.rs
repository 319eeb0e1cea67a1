//! Offset shifts over a row-major grid of colors.
//!
//! The forward direction ([`apply_shift`], [`shift_index`]) moves content by `(dx, dy)`
//! cells; [`unshift_index`] maps a displayed cell back to the buffer cell it shows.
//! Content shifted past an edge is discarded (no wrap-around); cells uncovered by the
//! shift are [`Color::TRANSPARENT`].

use crate::foundation::color::Color;

/// Shift a `width`-wide grid by `dx` columns and `dy` rows.
///
/// Positive `dy` moves content down, positive `dx` moves it right. Horizontal shifts
/// never cross row boundaries. `dx` is clamped to `[-width, width]`; any `|dy|` at or
/// beyond the grid height produces an all-transparent grid. The output has the same
/// length as `colors`.
pub fn apply_shift(colors: &[Color], width: usize, dx: i32, dy: i32) -> Vec<Color> {
    if width == 0 || (dx == 0 && dy == 0) {
        return colors.to_vec();
    }

    let len = colors.len();
    (0..len)
        .map(|display| {
            source_of(display, width, len, dx, dy)
                .map(|src| colors[src])
                .unwrap_or(Color::TRANSPARENT)
        })
        .collect()
}

/// Display index at which buffer cell `buffer_index` appears after shifting.
///
/// `None` when the cell is pushed outside the `width x height` grid.
pub fn shift_index(
    buffer_index: usize,
    width: usize,
    height: usize,
    dx: i32,
    dy: i32,
) -> Option<usize> {
    let cells = width.checked_mul(height)?;
    if buffer_index >= cells {
        return None;
    }
    let row = to_i64(buffer_index / width)?;
    let col = to_i64(buffer_index % width)?;

    let shifted_row = row.checked_add(i64::from(dy))?;
    let shifted_col = col.checked_add(clamp_dx(dx, width))?;
    cell_index(shifted_row, shifted_col, width, height)
}

/// Buffer index shown at `display_index` under offset `(dx, dy)`.
///
/// Undoes the vertical shift first, then the horizontal shift within the resulting row.
/// `None` means the displayed cell is padding introduced by the shift.
pub fn unshift_index(
    display_index: usize,
    width: usize,
    height: usize,
    dx: i32,
    dy: i32,
) -> Option<usize> {
    let cells = width.checked_mul(height)?;
    source_of(display_index, width, cells, dx, dy)
}

fn source_of(display: usize, width: usize, len: usize, dx: i32, dy: i32) -> Option<usize> {
    if width == 0 || display >= len {
        return None;
    }

    // Vertical: the flat array moves by whole rows.
    let w = to_i64(width)?;
    let unshifted = to_i64(display)?.checked_sub(i64::from(dy).checked_mul(w)?)?;
    if unshifted < 0 || unshifted >= to_i64(len)? {
        return None;
    }

    // Horizontal: stays within the row.
    let row = unshifted / w;
    let col = (unshifted % w).checked_sub(clamp_dx(dx, width))?;
    if col < 0 || col >= w {
        return None;
    }

    let src = usize::try_from(row * w + col).ok()?;
    (src < len).then_some(src)
}

fn cell_index(row: i64, col: i64, width: usize, height: usize) -> Option<usize> {
    let row = usize::try_from(row).ok()?;
    let col = usize::try_from(col).ok()?;
    (row < height && col < width).then(|| row * width + col)
}

fn clamp_dx(dx: i32, width: usize) -> i64 {
    let w = to_i64(width).unwrap_or(i64::MAX);
    i64::from(dx).clamp(-w, w)
}

fn to_i64(v: usize) -> Option<i64> {
    i64::try_from(v).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/shift.rs"]
mod tests;
