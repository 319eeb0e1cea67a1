//! lightgrid turns a decoded picture into the pixel grid that drives a physical set of
//! addressable lights, arranged either as a rectangular matrix or as a tapered tree.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: an image is decoded, cropped and fitted to the [`Frame`] by the
//!    [`prepare_frame_image`] codec adapter, producing a [`PixelBuffer`] whose channel
//!    layout is decided once.
//! 2. **Render**: [`PixelEditor::render`] reads the buffer through [`apply_shift`] to get
//!    the displayed `columns x rows` grid for the current [`Offset`].
//! 3. **Place**: [`GeometryLayout`] positions every row (gap, width, centering) and turns
//!    physical clicks back into cells.
//! 4. **Edit**: [`PixelEditor::edit`] maps a displayed cell back through [`unshift_index`]
//!    and writes into the buffer; padding cells are rejected with [`EditRejected`].
//! 5. **Export**: [`export_frame`] writes the buffer as PNG and builds the
//!    [`TextDescriptor`] clipboard record carrying the offsets.
//!
//! The engine (steps 2-4 and the descriptor) is synchronous, pure apart from
//! [`PixelEditor::edit`], and does no IO or logging. Decoding, file output and settings
//! live in the outer layers.
#![forbid(unsafe_code)]

mod codec;
mod config;
mod editor;
mod export;
mod foundation;
mod layout;
mod pixels;
mod render;
mod transform;

pub use codec::image_io::{
    CropArea, DecodedImage, crop_percent, decode_image, encode_png, fit_to_frame,
    load_pixel_buffer, prepare_frame_image, to_pixel_buffer,
};
pub use config::settings::{Dimensions, Settings};
pub use editor::pixel_editor::PixelEditor;
pub use export::artifacts::{ExportArtifacts, export_frame, write_unique};
pub use export::descriptor::{TextDescriptor, serialize_descriptor};
pub use foundation::color::{Color, EDIT_PALETTE, palette_color, parse_color};
pub use foundation::core::{CellPos, Frame, Offset};
pub use foundation::error::{EditRejected, LightgridError, LightgridResult};
pub use layout::geometry::{
    GeometryLayout, LayoutMode, LayoutParams, RowMetrics, TREE_TAPER_FACTOR, row_metrics,
};
pub use pixels::channels::{
    ChannelSource, Channels, PixelBuffer, infer_channels, read_pixel, write_pixel,
};
pub use render::preview::{PREVIEW_PADDING, render_preview};
pub use transform::shift::{apply_shift, shift_index, unshift_index};

pub use kurbo::{Point, Rect};
