use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;

use crate::{
    foundation::{
        core::Frame,
        error::{LightgridError, LightgridResult},
    },
    layout::geometry::{GeometryLayout, LayoutMode, LayoutParams},
};

/// Persistent application settings, stored as JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Export directory; empty until the user picks one.
    #[serde(default)]
    pub directory: String,
    /// Output grid size.
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Physical arrangement of the lights.
    #[serde(default)]
    pub element_type: LayoutMode,
    /// Diameter of one light in the preview.
    #[serde(default = "default_pixel_size")]
    pub pixel_size: f64,
    /// Spacing between lights in the preview.
    #[serde(default = "default_gap")]
    pub gap: f64,
}

/// Grid size: `width` columns by `height` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 16,
            height: 50,
        }
    }
}

fn default_pixel_size() -> f64 {
    10.0
}

fn default_gap() -> f64 {
    1.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory: String::new(),
            dimensions: Dimensions::default(),
            element_type: LayoutMode::default(),
            pixel_size: default_pixel_size(),
            gap: default_gap(),
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> LightgridResult<Self> {
        let f = File::open(path).with_context(|| format!("open settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| LightgridError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json_str(s: &str) -> LightgridResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .map_err(|e| LightgridError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> LightgridResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LightgridError::serde(e.to_string()))
    }

    pub fn validate(&self) -> LightgridResult<()> {
        self.frame()?;
        if !self.pixel_size.is_finite() || self.pixel_size <= 0.0 {
            return Err(LightgridError::validation("pixel_size must be > 0"));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(LightgridError::validation("gap must be >= 0"));
        }
        Ok(())
    }

    pub fn frame(&self) -> LightgridResult<Frame> {
        Frame::new(self.dimensions.width, self.dimensions.height)
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            pixel_size: self.pixel_size,
            base_gap: self.gap,
            mode: self.element_type,
        }
    }

    pub fn layout(&self) -> LightgridResult<GeometryLayout> {
        Ok(GeometryLayout::new(self.frame()?, self.layout_params()))
    }

    /// `true` once an export directory is set and the settings are valid.
    pub fn is_export_ready(&self) -> bool {
        !self.directory.trim().is_empty() && self.validate().is_ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
