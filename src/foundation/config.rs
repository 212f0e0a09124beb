use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    color::Rgb,
    error::{ChiasmError, ChiasmResult},
};

/// Runtime settings, loadable from JSON. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the verse API (no trailing path segment).
    pub api_base_url: String,
    /// Edition code for the source-script text.
    pub source_edition: String,
    /// Edition code for the translation.
    pub translation_edition: String,
    /// Canvas width in CSS pixels.
    pub width: u32,
    /// Canvas height in CSS pixels.
    pub height: u32,
    /// Device-pixel ratio used when rasterizing for PNG/PDF output.
    pub raster_scale: f32,
    /// HTTP timeout per request.
    pub timeout_secs: u64,
    /// Page background.
    pub background: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.alquran.cloud/v1".to_string(),
            source_edition: "quran-uthmani".to_string(),
            translation_edition: "en.sahih".to_string(),
            width: 960,
            height: 720,
            raster_scale: 2.0,
            timeout_secs: 30,
            background: Rgb::WHITE,
        }
    }
}

impl Config {
    const MAX_DIM: u32 = 8192;

    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> ChiasmResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Config = serde_json::from_str(&raw)
            .map_err(|e| ChiasmError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings that cannot produce a drawable canvas.
    pub fn validate(&self) -> ChiasmResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChiasmError::validation("canvas width/height must be > 0"));
        }
        if self.width > Self::MAX_DIM || self.height > Self::MAX_DIM {
            return Err(ChiasmError::validation(format!(
                "canvas too large: {}x{} (max {max}x{max})",
                self.width,
                self.height,
                max = Self::MAX_DIM
            )));
        }
        if !self.raster_scale.is_finite() || self.raster_scale <= 0.0 || self.raster_scale > 8.0 {
            return Err(ChiasmError::validation("raster_scale must be in (0, 8]"));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ChiasmError::validation("api_base_url must not be empty"));
        }
        if self.source_edition.trim().is_empty() || self.translation_edition.trim().is_empty() {
            return Err(ChiasmError::validation("edition codes must not be empty"));
        }
        Ok(())
    }

    /// Canvas size handed to the layout transforms.
    pub fn layout_opts(&self) -> crate::layout::LayoutOpts {
        crate::layout::LayoutOpts {
            width: f64::from(self.width),
            height: f64::from(self.height),
        }
    }

    /// Rasterization settings for PNG and PDF output.
    pub fn raster_opts(&self) -> crate::render::RasterOpts {
        crate::render::RasterOpts {
            scale: self.raster_scale,
            background: self.background,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
