use crate::foundation::{color::Color, core::Frame};

/// Number of byte samples per pixel in a flat buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channels {
    /// Single intensity sample.
    Gray,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Inference order: RGBA, then RGB, then grayscale.
    const PREFERENCE: [Self; 3] = [Self::Rgba, Self::Rgb, Self::Gray];

    /// Samples per pixel.
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Map a declared sample count to a supported layout.
    pub fn from_count(n: usize) -> Option<Self> {
        Self::PREFERENCE.into_iter().find(|c| c.count() == n)
    }
}

/// How a [`PixelBuffer`] arrived at its channel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelSource {
    /// The producer's declared count was supported and divides the length.
    Declared,
    /// Inferred from the buffer length (4 or 3 divides it evenly).
    Inferred,
    /// Neither 4 nor 3 divides the length; treated as single-channel intensity.
    Fallback,
}

/// Pick the channel layout for a flat buffer.
///
/// Tries 4, then 3, then 1; the first count that divides the length evenly wins.
pub fn infer_channels(buffer: &[u8]) -> (Channels, ChannelSource) {
    for c in Channels::PREFERENCE {
        if buffer.len().is_multiple_of(c.count()) {
            let source = match c {
                Channels::Gray => ChannelSource::Fallback,
                _ => ChannelSource::Inferred,
            };
            return (c, source);
        }
    }
    (Channels::Gray, ChannelSource::Fallback)
}

/// Read pixel `index` as a [`Color`].
///
/// Grayscale replicates its sample into r, g, b; grayscale and RGB read alpha as 255.
/// Indices whose samples are not all present read as [`Color::TRANSPARENT`].
pub fn read_pixel(buffer: &[u8], channels: Channels, index: usize) -> Color {
    let Some(px) = pixel_range(buffer.len(), channels, index).map(|r| &buffer[r]) else {
        return Color::TRANSPARENT;
    };
    match channels {
        Channels::Gray => Color::gray(px[0]),
        Channels::Rgb => Color::rgb(px[0], px[1], px[2]),
        Channels::Rgba => Color::rgba(px[0], px[1], px[2], px[3]),
    }
}

/// Write `color` into pixel `index`, storing only the components the layout carries.
///
/// Grayscale stores `color.r`; RGB drops alpha. Returns `false` (and writes nothing)
/// when the pixel lies past the end of the buffer.
pub fn write_pixel(buffer: &mut [u8], channels: Channels, index: usize, color: Color) -> bool {
    let Some(range) = pixel_range(buffer.len(), channels, index) else {
        return false;
    };
    let rgba = color.to_array();
    buffer[range].copy_from_slice(&rgba[..channels.count()]);
    true
}

fn pixel_range(len: usize, channels: Channels, index: usize) -> Option<std::ops::Range<usize>> {
    let start = index.checked_mul(channels.count())?;
    let end = start.checked_add(channels.count())?;
    (end <= len).then_some(start..end)
}

/// Owned, row-major pixel data tagged with its channel layout.
///
/// The layout is decided once, when the buffer is built, and never re-inferred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    channels: Channels,
    source: ChannelSource,
}

impl PixelBuffer {
    /// Wrap raw samples, inferring the channel layout from the length.
    pub fn from_raw(data: Vec<u8>) -> Self {
        let (channels, source) = infer_channels(&data);
        Self {
            data,
            channels,
            source,
        }
    }

    /// Wrap raw samples produced with a declared channel count.
    ///
    /// The declaration is trusted only when it is 1, 3 or 4 and divides the length;
    /// otherwise the layout is inferred as in [`PixelBuffer::from_raw`].
    pub fn with_declared_channels(data: Vec<u8>, declared: usize) -> Self {
        match Channels::from_count(declared) {
            Some(channels) if data.len().is_multiple_of(channels.count()) => Self {
                data,
                channels,
                source: ChannelSource::Declared,
            },
            _ => Self::from_raw(data),
        }
    }

    /// Buffer of `pixels` copies of `color`, stored in the given layout.
    pub fn filled(pixels: usize, channels: Channels, color: Color) -> Self {
        let mut data = vec![0u8; pixels * channels.count()];
        for px in data.chunks_exact_mut(channels.count()) {
            px.copy_from_slice(&color.to_array()[..channels.count()]);
        }
        Self {
            data,
            channels,
            source: ChannelSource::Declared,
        }
    }

    /// Channel layout decided at construction.
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// How the channel layout was decided.
    pub fn source(&self) -> ChannelSource {
        self.source
    }

    /// Number of whole pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.channels.count()
    }

    /// Raw samples, `channels` per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Color of pixel `index`; transparent past the end.
    pub fn get(&self, index: usize) -> Color {
        read_pixel(&self.data, self.channels, index)
    }

    /// Store `color` at pixel `index`. Returns `false` past the end.
    pub fn set(&mut self, index: usize, color: Color) -> bool {
        write_pixel(&mut self.data, self.channels, index, color)
    }

    /// Rows of `frame` the buffer actually fills when laid out `frame.columns` wide.
    pub fn content_rows(&self, frame: Frame) -> u32 {
        let full_rows = self.pixel_count() / frame.width().max(1);
        u32::try_from(full_rows).unwrap_or(u32::MAX).min(frame.rows)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/channels.rs"]
mod tests;
