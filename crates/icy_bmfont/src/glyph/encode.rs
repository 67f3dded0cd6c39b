use crate::PixelFormat;

/// Appends one pixel in the given format.
///
/// GRAY8 is not handled here since its value is the trim plane itself; it
/// falls back to the red channel.
pub fn encode_pixel(format: PixelFormat, r: u8, g: u8, b: u8, a: u8, out: &mut Vec<u8>) {
    match format {
        PixelFormat::Gray8 => out.push(r),
        PixelFormat::Rgb => out.extend_from_slice(&[r, g, b]),
        PixelFormat::Bgr => out.extend_from_slice(&[b, g, r]),
        PixelFormat::Rgba => out.extend_from_slice(&[r, g, b, a]),
        PixelFormat::Argb => out.extend_from_slice(&[a, r, g, b]),
        PixelFormat::Bgra => out.extend_from_slice(&[b, g, r, a]),
        PixelFormat::Abgr => out.extend_from_slice(&[a, b, g, r]),
        PixelFormat::Rgb565 => out.extend_from_slice(&rgb565(r, g, b).to_le_bytes()),
    }
}

#[inline]
pub fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Channel planes of a trimmed glyph, all of the same size.
pub struct ColorPlanes<'a> {
    pub red: &'a [u8],
    pub green: &'a [u8],
    pub blue: &'a [u8],
    pub alpha: &'a [u8],
}

/// Encodes trimmed planes row major into `format`.
pub fn encode_planes(format: PixelFormat, planes: &ColorPlanes<'_>) -> Vec<u8> {
    let len = planes.alpha.len();
    let mut out = Vec::with_capacity(len * format.bpp());
    for i in 0..len {
        encode_pixel(format, planes.red[i], planes.green[i], planes.blue[i], planes.alpha[i], &mut out);
    }
    out
}
