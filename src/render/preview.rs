use kurbo::Vec2;

use crate::{
    foundation::{
        color::Color,
        core::CellPos,
        error::{LightgridError, LightgridResult},
    },
    layout::geometry::GeometryLayout,
};

/// Space around the outermost lights, in preview pixels.
pub const PREVIEW_PADDING: f64 = 10.0;

const MAX_PREVIEW_DIM: f64 = 16384.0;

/// Draw `grid` (row-major, one color per frame cell) as round lights placed by `layout`.
///
/// Transparent cells are left unlit so the background shows through.
pub fn render_preview(
    grid: &[Color],
    layout: &GeometryLayout,
    background: Color,
) -> LightgridResult<image::RgbaImage> {
    let frame = layout.frame();
    if grid.len() != frame.cells() {
        return Err(LightgridError::validation(format!(
            "preview grid has {} cells, frame {}x{} needs {}",
            grid.len(),
            frame.columns,
            frame.rows,
            frame.cells()
        )));
    }

    let bounds = layout.bounds();
    let w = (bounds.width() + 2.0 * PREVIEW_PADDING).ceil();
    let h = (bounds.height() + 2.0 * PREVIEW_PADDING).ceil();
    if !(w.is_finite() && h.is_finite()) || w > MAX_PREVIEW_DIM || h > MAX_PREVIEW_DIM {
        return Err(LightgridError::validation(format!(
            "preview of {w}x{h} pixels is too large"
        )));
    }

    let mut img = image::RgbaImage::from_pixel(
        w as u32,
        h as u32,
        image::Rgba(background.to_array()),
    );
    let origin = Vec2::new(
        PREVIEW_PADDING - bounds.x0,
        PREVIEW_PADDING - bounds.y0,
    );
    let radius = layout.params().pixel_size / 2.0;

    for (i, color) in grid.iter().enumerate() {
        if color.is_transparent() {
            continue;
        }
        let cell = CellPos::new(i / frame.width(), i % frame.width());
        let Some(rect) = layout.cell_rect(cell) else {
            continue;
        };
        let center = rect.center() + origin;

        let x_lo = (center.x - radius).floor().max(0.0) as u32;
        let y_lo = (center.y - radius).floor().max(0.0) as u32;
        let x_hi = ((center.x + radius).ceil() as u32).min(img.width());
        let y_hi = ((center.y + radius).ceil() as u32).min(img.height());
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                let dx = f64::from(x) + 0.5 - center.x;
                let dy = f64::from(y) + 0.5 - center.y;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let px = img.get_pixel_mut(x, y);
                px.0 = over_straight(px.0, *color);
            }
        }
    }

    Ok(img)
}

/// Source-over for straight-alpha RGBA8; color channels are renormalized by the output alpha.
fn over_straight(dst: [u8; 4], src: Color) -> [u8; 4] {
    let sa = u32::from(src.a);
    match sa {
        0 => return dst,
        255 => return src.to_array(),
        _ => {}
    }
    let dst_weight = u32::from(mul_div255(u16::from(dst[3]), (255 - sa) as u16));
    let out_a = sa + dst_weight;
    let s = src.to_array();
    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = u32::from(s[i]) * sa + u32::from(dst[i]) * dst_weight;
        out[i] = ((c + out_a / 2) / out_a).min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
