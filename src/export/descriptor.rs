//! Clipboard record understood by xLights' effect paste.
//!
//! The layout is consumed by an external application, so every field, separator and
//! the constant palette block must stay byte-for-byte stable.

use std::fmt;

use crate::foundation::core::Offset;

const HEADER: [&str; 6] = ["CopyFormat1", "0", "1", "0", "0", "NO_PASTE_BY_CELL"];

const EFFECT_NAME: &str = "Pictures";

const PALETTE: &str = "C_BUTTON_Palette1=#FFFFFF,C_BUTTON_Palette2=#FF0000,\
C_BUTTON_Palette3=#00FF00,C_BUTTON_Palette4=#0000FF,C_BUTTON_Palette5=#FFFF00,\
C_BUTTON_Palette6=#000000,C_BUTTON_Palette7=#00FFFF,C_BUTTON_Palette8=#FF00FF,\
C_CHECKBOX_Palette1=1,C_CHECKBOX_Palette2=0,C_CHECKBOX_Palette3=0,C_CHECKBOX_Palette4=0,\
C_CHECKBOX_Palette5=0,C_CHECKBOX_Palette6=0,C_CHECKBOX_Palette7=0,C_CHECKBOX_Palette8=0";

// start ms, end ms, selected, locked, layer
const TIMING: [&str; 5] = ["0", "1000", "0", "0", "0"];

/// Two-line, tab-separated effect record pointing at an exported image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextDescriptor(String);

impl TextDescriptor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TextDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the descriptor for an image exported to `file_path` and shown at `offset`.
///
/// Output depends only on the arguments.
pub fn serialize_descriptor(file_path: &str, offset: Offset) -> TextDescriptor {
    let settings = [
        "E_CHECKBOX_Pictures_PixelOffsets=1".to_string(),
        "E_CHECKBOX_Pictures_Shimmer=0".to_string(),
        "E_CHECKBOX_Pictures_TransparentBlack=0".to_string(),
        "E_CHOICE_Pictures_Direction=none".to_string(),
        "E_CHOICE_Scaling=No Scaling".to_string(),
        format!("E_FILEPICKER_Pictures_Filename={}", sanitize_field(file_path)),
        format!("E_SLIDER_PicturesXC={}", offset.dx),
        format!("E_SLIDER_PicturesYC={}", offset.dy),
        "E_SLIDER_Pictures_StartScale=100".to_string(),
        "E_SLIDER_Pictures_EndScale=100".to_string(),
        "E_TEXTCTRL_Pictures_FrameRateAdj=1.0".to_string(),
        "E_TEXTCTRL_Pictures_Speed=1.0".to_string(),
    ]
    .join(",");

    let mut body = vec![EFFECT_NAME, settings.as_str(), PALETTE];
    body.extend(TIMING);

    TextDescriptor(format!("{}\n{}", HEADER.join("\t"), body.join("\t")))
}

/// Tabs and line breaks would split the record; replace them with spaces.
fn sanitize_field(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/export/descriptor.rs"]
mod tests;
