//! Glyph bitmap extraction for pixel embedding outputs.
//!
//! For each glyph placement the cell is sampled from its atlas page, trimmed
//! to the visible content, optionally smoothed, encoded into the requested
//! pixel format and paired with its clamped metrics and kerning list.

mod clamp;
pub use clamp::*;

mod dedup;
pub use dedup::*;

mod encode;
pub use encode::*;

mod filter;
pub use filter::*;

mod trim;
pub use trim::*;

use std::collections::{HashMap, HashSet};

use crate::{AtlasPage, ExportOptions, FontDescriptor, GlyphPlacement, PixelFormat};

/// A kerning pair as stored in the embedded table: the second glyph and the
/// clamped adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KerningEntry {
    pub code_point: u32,
    pub amount: i32,
}

/// Export ready glyph: trimmed size, clamped metrics and encoded pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphRecord {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub advance: u32,
    pub page: u32,
    pub data: Vec<u8>,
    pub kerning: Vec<KerningEntry>,
}

impl GlyphRecord {
    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    /// Same size and byte identical pixels.
    pub fn same_bitmap(&self, other: &GlyphRecord) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

/// Ordered glyph records of one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    pub glyphs: Vec<GlyphRecord>,
    /// Font baseline clamped to `[0, 65535]`.
    pub baseline: u32,
}

impl GlyphTable {
    /// Builds the glyph table in ascending id order.
    ///
    /// Never fails: glyphs without a usable page or without atlas space become
    /// zero sized records that only carry metrics and kerning.
    pub fn build(font: &FontDescriptor, pages: &[AtlasPage], options: &ExportOptions) -> Self {
        let domain = NumericDomain::new(options.extended);

        let mut chars: Vec<&GlyphPlacement> = font.chars.iter().filter(|ch| domain.accepts_code_point(ch.id)).collect();
        if chars.len() != font.chars.len() {
            log::warn!(
                "Dropped {} glyph(s) with code points above {:#X}, enable extended mode to keep them",
                font.chars.len() - chars.len(),
                MAX_NORMAL_CODE_POINT
            );
        }
        chars.sort_by_key(|ch| ch.id);

        let kerning = collect_kerning(font, &chars, domain);

        let glyphs = chars
            .iter()
            .map(|ch| {
                let mut record = extract_glyph(ch, pages, options.pixel_format, options.blur, domain);
                record.kerning = kerning.get(&ch.id).cloned().unwrap_or_default();
                record
            })
            .collect();

        Self {
            glyphs,
            baseline: clamp_rounded(font.common.base as f64, 0, u16::MAX as i64) as u32,
        }
    }
}

/// Groups kerning pairs by their first glyph, keeping input order.
fn collect_kerning(font: &FontDescriptor, chars: &[&GlyphPlacement], domain: NumericDomain) -> HashMap<u32, Vec<KerningEntry>> {
    let valid_ids: HashSet<u32> = chars.iter().map(|ch| ch.id).collect();
    let mut result: HashMap<u32, Vec<KerningEntry>> = HashMap::new();
    let mut dropped = 0;

    for pair in &font.kernings {
        if !domain.accepts_code_point(pair.first) || !domain.accepts_code_point(pair.second) || !valid_ids.contains(&pair.first) {
            dropped += 1;
            continue;
        }
        result.entry(pair.first).or_default().push(KerningEntry {
            code_point: pair.second,
            amount: domain.clamp_signed(pair.amount as f64),
        });
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} kerning pair(s) referencing filtered glyphs");
    }
    result
}

fn extract_glyph(ch: &GlyphPlacement, pages: &[AtlasPage], format: PixelFormat, blur: bool, domain: NumericDomain) -> GlyphRecord {
    let x_offset = domain.clamp_signed(ch.xoffset as f64);
    let y_offset = domain.clamp_signed(ch.yoffset as f64);
    let advance = domain.clamp_unsigned(ch.xadvance as f64);

    let empty = GlyphRecord {
        id: ch.id,
        x_offset,
        y_offset,
        advance,
        page: ch.page,
        ..Default::default()
    };

    if ch.width == 0 || ch.height == 0 {
        return empty;
    }

    let Some(page) = pages.get(ch.page as usize) else {
        log::warn!("Glyph {} references missing page {}", ch.id, ch.page);
        return empty;
    };
    if !page.is_valid() {
        log::warn!("Glyph {} references page {} with a truncated pixel buffer", ch.id, ch.page);
        return empty;
    }

    let cell = page.sample_cell(ch.x, ch.y, ch.width, ch.height);
    if cell.width == 0 || cell.height == 0 {
        return empty;
    }
    let bounds = trim_box(trim_source(&cell, format), cell.width, cell.height);

    let plane = |source: &[u8]| {
        if blur {
            reconstruct(source, cell.width, cell.height, bounds)
        } else {
            crop(source, cell.width, bounds)
        }
    };

    let data = if format == PixelFormat::Gray8 {
        plane(&cell.gray)
    } else {
        let (red, green, blue, alpha) = (plane(&cell.red), plane(&cell.green), plane(&cell.blue), plane(&cell.alpha));
        encode_planes(
            format,
            &ColorPlanes {
                red: &red,
                green: &green,
                blue: &blue,
                alpha: &alpha,
            },
        )
    };

    GlyphRecord {
        width: domain.clamp_unsigned(bounds.width as f64),
        height: domain.clamp_unsigned(bounds.height as f64),
        x_offset: domain.clamp_signed((x_offset as i64 + bounds.min_x as i64) as f64),
        y_offset: domain.clamp_signed((y_offset as i64 + bounds.min_y as i64) as f64),
        data,
        ..empty
    }
}
