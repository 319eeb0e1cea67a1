use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    codec::image_io::encode_png,
    editor::pixel_editor::PixelEditor,
    export::descriptor::{TextDescriptor, serialize_descriptor},
    foundation::{core::Offset, error::LightgridResult},
};

/// Files and clipboard text produced by one export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifacts {
    /// Where the PNG was written.
    pub image_path: PathBuf,
    /// Paste record referencing `image_path`.
    pub descriptor: TextDescriptor,
}

/// Write `bytes` to `dir/file_name`, never overwriting.
///
/// Creates `dir` if needed. When the name is taken, `-1`, `-2`, ... is appended to the
/// file stem until a free name is found.
pub fn write_unique(dir: &Path, file_name: &str, bytes: &[u8]) -> LightgridResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let requested = Path::new(file_name);
    let stem = requested
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let ext = requested
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    let mut path = dir.join(file_name);
    let mut index = 1u32;
    while path.exists() {
        let candidate = match &ext {
            Some(ext) => format!("{stem}-{index}.{ext}"),
            None => format!("{stem}-{index}"),
        };
        path = dir.join(candidate);
        index += 1;
    }

    std::fs::write(&path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    Ok(path)
}

/// Encode the editor's buffer to `dir/file_name` and build the matching paste record.
///
/// The image holds the unshifted buffer; `offset` travels in the descriptor.
pub fn export_frame(
    editor: &PixelEditor,
    offset: Offset,
    dir: &Path,
    file_name: &str,
) -> LightgridResult<ExportArtifacts> {
    let png = encode_png(editor.buffer(), editor.frame().columns)?;
    let image_path = write_unique(dir, file_name, &png)?;
    let descriptor = serialize_descriptor(&image_path.to_string_lossy(), offset);
    Ok(ExportArtifacts {
        image_path,
        descriptor,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/artifacts.rs"]
mod tests;
