//! Rasterized atlas pages and per-cell pixel sampling.

use std::io::{BufRead, Seek, Write};

use crate::{ExportError, Result};

/// One rasterized atlas page, RGBA with 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasPage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl AtlasPage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { width, height, pixels }
    }

    /// True when the pixel buffer covers the declared size.
    pub fn is_valid(&self) -> bool {
        self.pixels.len() >= self.width as usize * self.height as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels.get(idx..idx + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if let Some(dst) = self.pixels.get_mut(idx..idx + 4) {
            dst.copy_from_slice(&rgba);
        }
    }

    /// Samples the channel planes of a glyph cell.
    ///
    /// The cell is clipped to the page, so the planes never outgrow the page
    /// no matter what size the placement declares. Everything cut off would
    /// sample as zero.
    pub fn sample_cell(&self, x: u32, y: u32, width: u32, height: u32) -> CellChannels {
        let width = width.min(self.width.saturating_sub(x));
        let height = height.min(self.height.saturating_sub(y));
        let mut cell = CellChannels::new(width as usize, height as usize);
        for yy in 0..height {
            for xx in 0..width {
                let (Some(sx), Some(sy)) = (x.checked_add(xx), y.checked_add(yy)) else {
                    continue;
                };
                let Some([r, g, b, a]) = self.pixel(sx, sy) else {
                    continue;
                };
                let idx = yy as usize * width as usize + xx as usize;
                cell.gray[idx] = grayscale_from_rgba(r, g, b, a);
                cell.alpha[idx] = a;
                cell.red[idx] = premultiply(r, a);
                cell.green[idx] = premultiply(g, a);
                cell.blue[idx] = premultiply(b, a);
            }
        }
        cell
    }

    /// Decodes a PNG image into an RGBA page.
    pub fn from_png<R: BufRead + Seek>(reader: R) -> Result<Self> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;
        let Some(size) = reader.output_buffer_size() else {
            return Err(ExportError::generic("PNG image too large"));
        };
        let mut buf = vec![0; size];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.buffer_size());

        let pixels = match info.color_type {
            png::ColorType::Rgba => buf,
            png::ColorType::Rgb => buf.chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 255]).collect(),
            png::ColorType::GrayscaleAlpha => buf.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0], p[1]]).collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
            png::ColorType::Indexed => {
                return Err(ExportError::generic("indexed PNG was not expanded"));
            }
        };
        Ok(Self::from_rgba(info.width, info.height, pixels))
    }

    /// Encodes the page as an RGBA PNG.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }
}

/// Parallel channel planes for one glyph cell, row major.
///
/// Red, green and blue are premultiplied by alpha, gray is the alpha weighted
/// channel average.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellChannels {
    pub width: usize,
    pub height: usize,
    pub gray: Vec<u8>,
    pub alpha: Vec<u8>,
    pub red: Vec<u8>,
    pub green: Vec<u8>,
    pub blue: Vec<u8>,
}

impl CellChannels {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            gray: vec![0; len],
            alpha: vec![0; len],
            red: vec![0; len],
            green: vec![0; len],
            blue: vec![0; len],
        }
    }
}

/// round(value * alpha / 255), half up
#[inline]
fn scale_by_alpha(value: u32, a: u8) -> u8 {
    ((2 * value * a as u32 + 255) / 510).min(255) as u8
}

#[inline]
pub(crate) fn premultiply(channel: u8, a: u8) -> u8 {
    scale_by_alpha(channel as u32, a)
}

#[inline]
pub(crate) fn grayscale_from_rgba(r: u8, g: u8, b: u8, a: u8) -> u8 {
    let avg = (r as u32 + g as u32 + b as u32) / 3;
    scale_by_alpha(avg, a)
}
