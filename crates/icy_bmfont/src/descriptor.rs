//! Format independent view of a packed bitmap font.
//!
//! A [`FontDescriptor`] is built once per export from the live project and is
//! treated as read only by every emitter. Field names follow the BMFont
//! vocabulary (`lineHeight`, `xadvance`, `chnl` ...) so the JSON form reads like
//! the descriptor files it produces.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// The `info` block: how the font was rasterized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontInfo {
    pub face: String,
    /// Font size in pixels, negative values mean "match char height".
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
    pub charset: String,
    pub unicode: bool,
    /// Font height stretch in percent.
    pub stretch_h: i32,
    pub smooth: bool,
    /// Supersampling level, 1 means no supersampling.
    pub aa: i32,
    /// up, right, down, left
    pub padding: [i32; 4],
    /// horizontal, vertical
    pub spacing: [i32; 2],
    pub outline: Option<i32>,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            face: String::new(),
            size: 0,
            bold: false,
            italic: false,
            charset: String::new(),
            unicode: true,
            stretch_h: 100,
            smooth: true,
            aa: 1,
            padding: [0; 4],
            spacing: [0; 2],
            outline: None,
        }
    }
}

/// The `common` block: metrics shared by all glyphs and the page layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontCommon {
    pub line_height: i32,
    pub base: i32,
    pub scale_w: u32,
    pub scale_h: u32,
    pub pages: u32,
    pub packed: bool,
    pub alpha_chnl: Option<u8>,
    pub red_chnl: Option<u8>,
    pub green_chnl: Option<u8>,
    pub blue_chnl: Option<u8>,
    /// Fixed point bits used for `xadvance` and kerning amounts (0-7).
    pub x_fp_bits: Option<u8>,
}

impl FontCommon {
    /// Number of fractional bits to apply, `None` when fixed point output is off.
    pub fn fractional_bits(&self) -> Option<u32> {
        match self.x_fp_bits {
            Some(bits) if bits > 0 => Some(u32::from(bits.min(7))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontPage {
    pub id: u32,
    pub file: String,
}

/// Placement of a single glyph inside an atlas page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphPlacement {
    /// Code point or custom id.
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub xoffset: f32,
    pub yoffset: f32,
    pub xadvance: f32,
    pub page: u32,
    pub chnl: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KerningPair {
    pub first: u32,
    pub second: u32,
    pub amount: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub info: FontInfo,
    pub common: FontCommon,
    pub pages: Vec<FontPage>,
    pub chars: Vec<GlyphPlacement>,
    pub kernings: Vec<KerningPair>,
}

impl FontDescriptor {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Page count used for output: the larger of the declared count and the page list.
    pub fn page_count(&self) -> usize {
        (self.common.pages as usize).max(self.pages.len())
    }

    /// Renames the page list to the image names the packager will produce.
    pub fn set_page_files(&mut self, base_name: &str) {
        let count = self.page_count();
        self.pages = (0..count)
            .map(|id| FontPage {
                id: id as u32,
                file: page_file_name(base_name, id, count),
            })
            .collect();
        self.common.pages = count as u32;
    }
}

/// `<base>.png` for single page fonts, `<base>_<index>.png` otherwise.
pub fn page_file_name(base_name: &str, index: usize, page_count: usize) -> String {
    if page_count > 1 {
        format!("{base_name}_{index}.png")
    } else {
        format!("{base_name}.png")
    }
}
