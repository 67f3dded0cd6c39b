use crate::{CellChannels, PixelFormat};

/// Tight bounds of the visible content inside a glyph cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimBox {
    /// Left edge relative to the cell origin.
    pub min_x: usize,
    /// Top edge relative to the cell origin.
    pub min_y: usize,
    pub width: usize,
    pub height: usize,
}

impl TrimBox {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Plane the trim is computed on: gray coverage for GRAY8, alpha for all color formats.
pub fn trim_source(cell: &CellChannels, format: PixelFormat) -> &[u8] {
    if format == PixelFormat::Gray8 { &cell.gray } else { &cell.alpha }
}

/// Minimal rectangle covering all strictly positive samples.
///
/// An empty plane collapses to a 0x0 box at the cell origin.
pub fn trim_box(source: &[u8], width: usize, height: usize) -> TrimBox {
    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut has_pixel = false;

    for y in 0..height {
        for x in 0..width {
            if source.get(y * width + x).copied().unwrap_or(0) == 0 {
                continue;
            }
            has_pixel = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x + 1);
            max_y = max_y.max(y + 1);
        }
    }

    if !has_pixel {
        return TrimBox::default();
    }

    TrimBox {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Copies the trimmed rectangle out of a cell plane.
pub fn crop(source: &[u8], cell_width: usize, bounds: TrimBox) -> Vec<u8> {
    let mut out = Vec::with_capacity(bounds.width * bounds.height);
    for y in 0..bounds.height {
        let start = (bounds.min_y + y) * cell_width + bounds.min_x;
        out.extend_from_slice(&source[start..start + bounds.width]);
    }
    out
}
