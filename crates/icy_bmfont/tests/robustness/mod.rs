//! A single malformed glyph or page never fails a whole export.

use icy_bmfont::{AtlasPage, ExportOptions, FontDescriptor, GlyphPlacement, OutputFormat, PixelFormat};

use crate::{demo_font, export, glyph, text_file};

fn malformed_font() -> (FontDescriptor, Vec<AtlasPage>) {
    let (mut font, mut pages) = demo_font();
    font.chars.push(GlyphPlacement {
        id: 68,
        xoffset: f32::NAN,
        yoffset: f32::INFINITY,
        xadvance: -5.0,
        ..glyph(68, 14, 6, 50, 50)
    });
    font.chars.push(GlyphPlacement {
        page: 42,
        ..glyph(69, 0, 0, 2, 2)
    });
    font.chars.push(GlyphPlacement {
        page: 1,
        ..glyph(70, 0, 0, 2, 2)
    });
    font.chars.push(glyph(71, u32::MAX, u32::MAX, 3, 3));
    // declared cell far larger than the page
    font.chars.push(glyph(72, 0, 0, 200_000, 200_000));
    font.kernings.push(icy_bmfont::KerningPair {
        first: 99,
        second: 65,
        amount: 1e9,
    });
    font.kernings.push(icy_bmfont::KerningPair {
        first: 68,
        second: 65,
        amount: f32::NAN,
    });
    // second page is declared larger than its pixel buffer
    pages.push(AtlasPage::from_rgba(64, 64, vec![255; 16]));
    (font, pages)
}

#[test]
fn test_all_formats_survive_malformed_glyphs() {
    let (font, pages) = malformed_font();
    for config in icy_bmfont::FormatConfig::all() {
        for format in PixelFormat::ALL {
            let options = ExportOptions {
                pixel_format: *format,
                include_textures: true,
                ..Default::default()
            };
            let bundle = export(config.ext, "broken", options, &font, &pages);
            assert!(!bundle.files.is_empty());
            if config.format != OutputFormat::C {
                break;
            }
        }
    }
}

#[test]
fn test_malformed_glyph_values_are_clamped() {
    let (font, pages) = malformed_font();
    let options = ExportOptions {
        blur: false,
        ..Default::default()
    };
    let bundle = export("c", "broken", options, &font, &pages);
    let source = text_file(&bundle, "broken.c");

    // NaN offset becomes 0, infinity clamps to the 8 bit range, negative advance to 0
    assert!(source.contains("\t{ 68, 0, 127, 0, 1, "));
    // missing and truncated pages give empty glyphs
    assert!(source.contains("\t{ 69, 0, 0, 3, 0, 0, 0, 0, "));
    assert!(source.contains("\t{ 70, 0, 0, 3, 0, 0, 0, 0, "));
    // cells outside of the page sample as transparent
    assert!(source.contains("\t{ 71, 0, 0, 4, 0, 0, 0, 0, "));
    // oversized cell trims to the page content: blocks at x 0..2, 4..6 and 8, rows 0..2
    assert!(source.contains("\t{ 72, 0, 0, 255, 0, 0, 9, 2, "));
    // kerning for an unknown first glyph is dropped, a NaN amount becomes 0
    assert!(!source.contains("{ 65, 127 }"));
    assert!(source.contains("\t{ 65, 0 }"));
}

#[test]
fn test_unknown_pixel_format_falls_back() {
    let options = ExportOptions::from_toml_str("pixel_format = \"YUV420\"\nblur = false\n").unwrap();
    assert_eq!(options.pixel_format, PixelFormat::Gray8);
    assert!(!options.blur);

    let (font, pages) = demo_font();
    let bundle = export("c", "demo", options, &font, &pages);
    assert!(text_file(&bundle, "demo.c").contains("const font_t demo_font = {\n\t6,\n\t3,\n\t1,\n"));
}
