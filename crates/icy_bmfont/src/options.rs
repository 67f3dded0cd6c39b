//! Export options shared by all output formats.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::Result;

/// On-disk pixel encodings for embedded glyph bitmaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum PixelFormat {
    /// Single 8 bit coverage value
    #[default]
    Gray8,
    Rgb,
    Rgba,
    Argb,
    Bgr,
    Abgr,
    Bgra,
    /// 16 bit 5:6:5, little endian
    Rgb565,
}

impl PixelFormat {
    pub const ALL: &'static [PixelFormat] = &[
        PixelFormat::Gray8,
        PixelFormat::Rgb,
        PixelFormat::Rgba,
        PixelFormat::Argb,
        PixelFormat::Bgr,
        PixelFormat::Abgr,
        PixelFormat::Bgra,
        PixelFormat::Rgb565,
    ];

    /// Bytes per encoded pixel.
    pub fn bpp(&self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::Rgba | PixelFormat::Argb | PixelFormat::Abgr | PixelFormat::Bgra => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::Gray8 => "GRAY8",
            PixelFormat::Rgb => "RGB",
            PixelFormat::Rgba => "RGBA",
            PixelFormat::Argb => "ARGB",
            PixelFormat::Bgr => "BGR",
            PixelFormat::Abgr => "ABGR",
            PixelFormat::Bgra => "BGRA",
            PixelFormat::Rgb565 => "RGB565",
        }
    }

    /// Looks up a format by name, case insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`PixelFormat::from_name`] but unknown names fall back to GRAY8.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("Unsupported pixel format '{name}', falling back to GRAY8");
            PixelFormat::Gray8
        })
    }
}

impl From<String> for PixelFormat {
    fn from(name: String) -> Self {
        Self::from_name_or_default(&name)
    }
}

impl From<PixelFormat> for &'static str {
    fn from(format: PixelFormat) -> Self {
        format.name()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options consumed by the pixel embedding (C source) output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub pixel_format: PixelFormat,

    /// Run the 3x3 reconstruction filter over trimmed glyphs.
    pub blur: bool,

    /// Emit a separate texture table instead of inline size/data per glyph.
    pub include_textures: bool,

    /// 16 bit numeric fields, keeps code points above 0xFFFF.
    pub extended: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pixel_format: PixelFormat::Gray8,
            blur: true,
            include_textures: false,
            extended: false,
        }
    }
}

impl ExportOptions {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
