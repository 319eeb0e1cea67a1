use std::{io::Cursor, path::Path};

use anyhow::Context;
use image::{ColorType, DynamicImage, ImageFormat, imageops::FilterType};

use crate::{
    foundation::{
        core::Frame,
        error::{LightgridError, LightgridResult},
    },
    pixels::channels::{ChannelSource, Channels, PixelBuffer},
};

/// Crop rectangle in percent of the source image dimensions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropArea {
    /// The whole image.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    /// Parse `x,y,width,height` (percent values).
    pub fn parse(s: &str) -> LightgridResult<Self> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| LightgridError::validation(format!("crop '{s}' must be x,y,w,h numbers")))?;
        let [x, y, width, height] = parts[..] else {
            return Err(LightgridError::validation(format!(
                "crop '{s}' must have exactly four values"
            )));
        };
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

/// Decoded pixels together with their dimensions.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub buffer: PixelBuffer,
}

/// Decode encoded image bytes.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> LightgridResult<DynamicImage> {
    let img = image::load_from_memory(bytes).context("decode image from memory")?;
    tracing::debug!(width = img.width(), height = img.height(), "decoded image");
    Ok(img)
}

/// Extract the part of `img` described by `area`; edges are rounded to whole pixels.
pub fn crop_percent(img: &DynamicImage, area: CropArea) -> LightgridResult<DynamicImage> {
    let (w, h) = (f64::from(img.width()), f64::from(img.height()));
    let left = (area.x / 100.0 * w).round();
    let top = (area.y / 100.0 * h).round();
    let cw = (area.width / 100.0 * w).round();
    let ch = (area.height / 100.0 * h).round();

    let valid = [left, top, cw, ch].iter().all(|v| v.is_finite() && *v >= 0.0)
        && cw >= 1.0
        && ch >= 1.0
        && left + cw <= w
        && top + ch <= h;
    if !valid {
        return Err(LightgridError::codec(format!(
            "crop {area:?} does not fit a {}x{} image",
            img.width(),
            img.height()
        )));
    }

    Ok(img.crop_imm(left as u32, top as u32, cw as u32, ch as u32))
}

/// Nearest-neighbour resize that covers `frame` completely, then center-crop to it.
pub fn fit_to_frame(img: &DynamicImage, frame: Frame) -> DynamicImage {
    img.resize_to_fill(frame.columns, frame.rows, FilterType::Nearest)
}

/// Take the raw samples of `img`, keeping gray, RGB and RGBA layouts as they are.
pub fn to_pixel_buffer(img: &DynamicImage) -> PixelBuffer {
    let (data, declared) = match img.color() {
        ColorType::L8 => (img.as_bytes().to_vec(), 1),
        ColorType::Rgb8 => (img.as_bytes().to_vec(), 3),
        ColorType::Rgba8 => (img.as_bytes().to_vec(), 4),
        _ => (img.to_rgba8().into_raw(), 4),
    };
    let buffer = PixelBuffer::with_declared_channels(data, declared);
    if buffer.source() != ChannelSource::Declared {
        tracing::warn!(
            declared,
            inferred = buffer.channels().count(),
            "declared channel count rejected"
        );
    }
    tracing::debug!(
        channels = buffer.channels().count(),
        pixels = buffer.pixel_count(),
        "pixel buffer ready"
    );
    buffer
}

/// Decode, optionally crop, fit to `frame` and expand to RGBA.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn prepare_frame_image(
    bytes: &[u8],
    frame: Frame,
    crop: Option<CropArea>,
) -> LightgridResult<DecodedImage> {
    frame.validate()?;
    let mut img = decode_image(bytes)?;
    if let Some(area) = crop {
        img = crop_percent(&img, area)?;
    }
    let fitted = DynamicImage::ImageRgba8(fit_to_frame(&img, frame).to_rgba8());
    Ok(DecodedImage {
        width: fitted.width(),
        height: fitted.height(),
        buffer: to_pixel_buffer(&fitted),
    })
}

/// Load an already-fitted image file as a pixel buffer.
#[tracing::instrument]
pub fn load_pixel_buffer(path: &Path) -> LightgridResult<DecodedImage> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(DecodedImage {
        width: img.width(),
        height: img.height(),
        buffer: to_pixel_buffer(&img),
    })
}

/// Encode `buffer` as PNG, `columns` pixels per row.
///
/// Only whole rows are written; a trailing partial row is dropped.
pub fn encode_png(buffer: &PixelBuffer, columns: u32) -> LightgridResult<Vec<u8>> {
    let width = columns as usize;
    let rows = buffer.pixel_count().checked_div(width).unwrap_or(0);
    if rows == 0 {
        return Err(LightgridError::codec(format!(
            "buffer of {} pixels holds no complete {columns}-pixel row",
            buffer.pixel_count()
        )));
    }
    let height = u32::try_from(rows).context("image height overflows u32")?;

    let color = match buffer.channels() {
        Channels::Gray => ColorType::L8,
        Channels::Rgb => ColorType::Rgb8,
        Channels::Rgba => ColorType::Rgba8,
    };
    let len = rows * width * buffer.channels().count();

    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &buffer.as_bytes()[..len],
        columns,
        height,
        color,
        ImageFormat::Png,
    )
    .context("encode png")?;
    tracing::debug!(columns, rows, bytes = out.get_ref().len(), "encoded png");
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/image_io.rs"]
mod tests;
