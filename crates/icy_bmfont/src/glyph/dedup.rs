//! Shared storage for identical glyph bitmaps and kerning lists.
//!
//! Both passes walk the glyph table in order and compare against the unique
//! entries seen so far. The first occurrence is canonical and later duplicates
//! reuse its offset, so the result depends only on table order.

use super::{GlyphRecord, KerningEntry};

/// Concatenated unique bitmaps plus one offset per glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitmapStore {
    pub data: Vec<u8>,
    /// Byte offset into `data`, indexed like the glyph table.
    pub offsets: Vec<usize>,
    /// Glyph table indices of the canonical records, in storage order.
    pub unique: Vec<usize>,
}

impl BitmapStore {
    pub fn build(glyphs: &[GlyphRecord]) -> Self {
        let mut store = BitmapStore {
            offsets: vec![0; glyphs.len()],
            ..Default::default()
        };

        for (i, glyph) in glyphs.iter().enumerate() {
            let canonical = store.unique.iter().copied().find(|&u| glyphs[u].same_bitmap(glyph));
            match canonical {
                Some(u) => store.offsets[i] = store.offsets[u],
                None => {
                    store.offsets[i] = store.data.len();
                    store.data.extend_from_slice(&glyph.data);
                    store.unique.push(i);
                }
            }
        }

        store
    }
}

/// Concatenated unique kerning lists plus one offset per glyph.
///
/// Glyphs without kerning pairs keep offset 0, the pair count comes from the
/// glyph record itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KerningStore {
    pub pairs: Vec<KerningEntry>,
    pub offsets: Vec<usize>,
    pub unique: Vec<usize>,
}

impl KerningStore {
    pub fn build(glyphs: &[GlyphRecord]) -> Self {
        let mut store = KerningStore {
            offsets: vec![0; glyphs.len()],
            ..Default::default()
        };

        for (i, glyph) in glyphs.iter().enumerate() {
            if glyph.kerning.is_empty() {
                continue;
            }
            let canonical = store.unique.iter().copied().find(|&u| glyphs[u].kerning == glyph.kerning);
            match canonical {
                Some(u) => store.offsets[i] = store.offsets[u],
                None => {
                    store.offsets[i] = store.pairs.len();
                    store.pairs.extend_from_slice(&glyph.kerning);
                    store.unique.push(i);
                }
            }
        }

        store
    }
}
