use icy_bmfont::{AtlasPage, ExportBundle, ExportOptions, ExportRequest, FontDescriptor, FormatConfig, GlyphPlacement, KerningPair, export_font};

mod c_output;
mod descriptors;
mod robustness;

/// Page with a filled `w`x`h` block at (`x`, `y`).
pub fn page_with_block(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32, rgba: [u8; 4]) -> AtlasPage {
    let mut page = AtlasPage::new(width, height);
    for yy in y..y + h {
        for xx in x..x + w {
            page.set_pixel(xx, yy, rgba);
        }
    }
    page
}

pub fn glyph(id: u32, x: u32, y: u32, width: u32, height: u32) -> GlyphPlacement {
    GlyphPlacement {
        id,
        x,
        y,
        width,
        height,
        xadvance: width as f32 + 1.0,
        ..Default::default()
    }
}

/// Three glyph font: 'A' and 'B' share the same 2x2 block, 'C' is a 1x1 dot.
pub fn demo_font() -> (FontDescriptor, Vec<AtlasPage>) {
    let mut page = page_with_block(16, 8, 0, 0, 2, 2, [255, 255, 255, 255]);
    for yy in 0..2 {
        for xx in 4..6 {
            page.set_pixel(xx, yy, [255, 255, 255, 255]);
        }
    }
    page.set_pixel(8, 0, [255, 255, 255, 255]);

    let mut font = FontDescriptor::default();
    font.info.face = "Demo".to_string();
    font.info.size = 8;
    font.common.line_height = 8;
    font.common.base = 6;
    font.common.scale_w = 16;
    font.common.scale_h = 8;
    font.common.pages = 1;
    font.chars = vec![glyph(65, 0, 0, 2, 2), glyph(66, 4, 0, 2, 2), glyph(67, 8, 0, 1, 1)];
    font.kernings = vec![
        KerningPair {
            first: 65,
            second: 66,
            amount: -1.0,
        },
        KerningPair {
            first: 66,
            second: 65,
            amount: -1.0,
        },
    ];
    (font, vec![page])
}

pub fn export(ext: &str, file_name: &str, options: ExportOptions, font: &FontDescriptor, pages: &[AtlasPage]) -> ExportBundle {
    let mut request = ExportRequest::new(FormatConfig::lookup(ext).unwrap(), file_name);
    request.options = options;
    export_font(&request, font, pages).unwrap()
}

pub fn text_file<'a>(bundle: &'a ExportBundle, name: &str) -> &'a str {
    bundle
        .files
        .iter()
        .find(|f| f.name == name)
        .and_then(|f| f.content.as_text())
        .unwrap_or_else(|| panic!("{name} not in bundle"))
}
