use icy_bmfont::{BitmapStore, ExportOptions, GlyphTable, KerningStore, PixelFormat};

use crate::{demo_font, export, glyph, page_with_block, text_file};

fn no_blur() -> ExportOptions {
    ExportOptions {
        blur: false,
        ..Default::default()
    }
}

#[test]
fn test_deterministic_output() {
    let (font, pages) = demo_font();
    let first = export("c", "demo", ExportOptions::default(), &font, &pages);
    let second = export("c", "demo", ExportOptions::default(), &font, &pages);
    assert_eq!(first, second);

    // glyphs are emitted by id, so input order does not change the result
    let mut shuffled = font.clone();
    shuffled.chars.reverse();
    let third = export("c", "demo", ExportOptions::default(), &shuffled, &pages);
    assert_eq!(first, third);
}

#[test]
fn test_dedup_counts() {
    let (font, pages) = demo_font();
    let table = GlyphTable::build(&font, &pages, &no_blur());
    let store = BitmapStore::build(&table.glyphs);

    // 'A' and 'B' are identical 2x2 blocks
    assert_eq!(store.unique.len(), 2);
    assert_eq!(store.data.len(), 4 + 1);
    assert_eq!(store.offsets, vec![0, 0, 4]);

    let expected: usize = store.unique.iter().map(|&i| table.glyphs[i].data_size()).sum();
    assert_eq!(store.data.len(), expected);
    for (glyph, &offset) in table.glyphs.iter().zip(&store.offsets) {
        assert_eq!(&store.data[offset..offset + glyph.data_size()], glyph.data.as_slice());
    }

    let source = text_file(&export("c", "demo", no_blur(), &font, &pages), "demo.c").to_string();
    assert!(source.contains("static const uint8_t demo_data[5] = {"));
    assert!(source.contains("\t{ 65, 0, 0, 3, 1, 0, 2, 2, &demo_data[0] },\n\t{ 66, 0, 0, 3, 1, 1, 2, 2, &demo_data[0] },"));
}

#[test]
fn test_shared_kerning_lists() {
    let (mut font, pages) = demo_font();
    font.kernings[1].second = 66;
    let table = GlyphTable::build(&font, &pages, &no_blur());
    let store = KerningStore::build(&table.glyphs);
    assert_eq!(store.pairs.len(), 1);
    assert_eq!(store.offsets, vec![0, 0, 0]);

    let source = text_file(&export("c", "demo", no_blur(), &font, &pages), "demo.c").to_string();
    assert!(source.contains("static const kern_t demo_kern[1] = {\n\t{ 66, -1 }\n};"));
}

#[test]
fn test_extended_mode_filter() {
    let (mut font, pages) = demo_font();
    let mut wide = glyph(70000, 0, 0, 2, 2);
    wide.xoffset = -200.0;
    wide.xadvance = 300.0;
    font.chars.push(wide);

    let normal = export("c", "demo", no_blur(), &font, &pages);
    let source = text_file(&normal, "demo.c");
    assert!(!source.contains("70000"));
    assert!(source.contains("demo_glyph[3]"));
    assert!(text_file(&normal, "bmfont.h").contains("uint16_t cp;"));

    let options = ExportOptions {
        extended: true,
        ..no_blur()
    };
    let extended = export("c", "demo", options, &font, &pages);
    let source = text_file(&extended, "demo.c");
    assert!(source.contains("demo_glyph[4]"));
    assert!(source.contains("\t{ 70000, -200, 0, 300, 0, 0, 2, 2, &demo_data[0] }"));
    assert!(text_file(&extended, "bmfont.h").contains("uint32_t cp;"));
}

#[test]
fn test_trim_offsets() {
    let page = page_with_block(10, 10, 3, 4, 1, 1, [255, 255, 255, 255]);
    let mut placement = glyph(65, 0, 0, 10, 10);
    placement.xoffset = 2.0;
    placement.yoffset = 1.0;
    let font = icy_bmfont::FontDescriptor {
        chars: vec![placement],
        ..Default::default()
    };
    let table = GlyphTable::build(&font, &[page], &no_blur());
    let glyph = &table.glyphs[0];
    assert_eq!((glyph.width, glyph.height), (1, 1));
    assert_eq!((glyph.x_offset, glyph.y_offset), (5, 5));
}

#[test]
fn test_blur_isolated_pixel() {
    let page = page_with_block(5, 5, 2, 2, 1, 1, [255, 255, 255, 255]);
    let font = icy_bmfont::FontDescriptor {
        chars: vec![glyph(65, 1, 1, 3, 3)],
        ..Default::default()
    };
    let table = GlyphTable::build(&font, &[page], &ExportOptions::default());
    let glyph = &table.glyphs[0];
    // trimmed to the lit pixel, blur keeps the center weight only: (4 * 255 + 8) >> 4
    assert_eq!((glyph.width, glyph.height), (1, 1));
    assert_eq!(glyph.data, vec![64u8]);
}

#[test]
fn test_pixel_format_bytes() {
    let page = page_with_block(1, 1, 0, 0, 1, 1, [255, 0, 0, 255]);
    let font = icy_bmfont::FontDescriptor {
        chars: vec![glyph(65, 0, 0, 1, 1)],
        ..Default::default()
    };
    let options = ExportOptions {
        pixel_format: PixelFormat::Rgb565,
        ..no_blur()
    };
    let bundle = export("c", "red", options, &font, &[page]);
    let source = text_file(&bundle, "red.c");
    assert!(source.contains("static const uint8_t red_data[2] = {\n\t0x00, 0xF8\n};"));
    assert!(source.contains("\t0,\n\t1,\n\t2,\n"));
}

#[test]
fn test_empty_glyph_pass_through() {
    let (mut font, _) = demo_font();
    let mut space = glyph(32, 0, 0, 0, 0);
    space.xadvance = 4.0;
    space.xoffset = -1.0;
    space.page = 9;
    font.chars.push(space);
    // no pages at all: the empty glyph must not need one
    let table = GlyphTable::build(&font, &[], &no_blur());
    let space = &table.glyphs[0];
    assert_eq!(space.id, 32);
    assert_eq!((space.width, space.height), (0, 0));
    assert_eq!((space.x_offset, space.advance), (-1, 4));
    assert!(space.data.is_empty());
}

#[test]
fn test_identifier_from_file_name() {
    let (font, pages) = demo_font();
    let bundle = export("c", "8-bit font", ExportOptions::default(), &font, &pages);
    let source = text_file(&bundle, "8-bit font.c");
    assert!(source.starts_with("#include \"8-bit font.h\"\n"));
    assert!(source.contains("const font_t _8_bit_font_font = {"));
    assert!(text_file(&bundle, "8-bit font.h").contains("#define _8_BIT_FONT_FONT_NAME \"8-bit font\""));
}
