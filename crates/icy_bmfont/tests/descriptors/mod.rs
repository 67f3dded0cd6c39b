use icy_bmfont::{ExportOptions, FileContent, FontDescriptor, OutputFormat, PixelFormat, package};
use pretty_assertions::assert_eq;

use crate::{demo_font, export, text_file};

#[test]
fn test_text_descriptor() {
    let (font, pages) = demo_font();
    let bundle = export("fnt", "demo", ExportOptions::default(), &font, &pages);
    assert!(bundle.include_pages);
    assert_eq!(
        text_file(&bundle, "demo.fnt"),
        "info face=\"Demo\" size=8 bold=0 italic=0 charset=\"\" unicode=1 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=0,0\n\
         common lineHeight=8 base=6 scaleW=16 scaleH=8 pages=1 packed=0\n\
         page id=0 file=\"demo.png\"\n\
         chars count=3\n\
         char id=65 x=0 y=0 width=2 height=2 xoffset=0 yoffset=0 xadvance=3 page=0 chnl=0\n\
         char id=66 x=4 y=0 width=2 height=2 xoffset=0 yoffset=0 xadvance=3 page=0 chnl=0\n\
         char id=67 x=8 y=0 width=1 height=1 xoffset=0 yoffset=0 xadvance=2 page=0 chnl=0\n\
         kernings count=2\n\
         kerning first=65 second=66 amount=-1\n\
         kerning first=66 second=65 amount=-1\n"
    );
}

#[test]
fn test_txt_and_fnt_share_content() {
    let (font, pages) = demo_font();
    let fnt = export("fnt", "demo", ExportOptions::default(), &font, &pages);
    let txt = export("txt", "demo", ExportOptions::default(), &font, &pages);
    assert_eq!(txt.files[0].name, "demo.txt");
    assert_eq!(fnt.files[0].content, txt.files[0].content);
}

#[test]
fn test_descriptor_formats_ignore_options() {
    let (font, pages) = demo_font();
    let options = ExportOptions {
        pixel_format: PixelFormat::Rgb565,
        blur: false,
        include_textures: true,
        extended: true,
    };
    for format in [OutputFormat::Text, OutputFormat::Xml, OutputFormat::Binary] {
        let ext = format.default_extension();
        let plain = export(ext, "demo", ExportOptions::default(), &font, &pages);
        let tuned = export(ext, "demo", options.clone(), &font, &pages);
        assert_eq!(plain, tuned, "{format}");
    }
}

#[test]
fn test_fixed_point_metrics() {
    let (mut font, pages) = demo_font();
    font.common.x_fp_bits = Some(4);
    font.chars[0].xadvance = 2.5;
    font.kernings[0].amount = -0.5;

    let bundle = export("xml", "demo", ExportOptions::default(), &font, &pages);
    let xml = text_file(&bundle, "demo.xml");
    assert!(xml.contains(" packed=\"0\" xFpBits=\"4\"/>"));
    assert!(xml.contains("<char id=\"65\" x=\"0\" y=\"0\" width=\"2\" height=\"2\" xoffset=\"0\" yoffset=\"0\" xadvance=\"40\""));
    assert!(xml.contains("<kerning first=\"65\" second=\"66\" amount=\"-8\"/>"));
}

#[test]
fn test_multi_page_names() {
    let (mut font, mut pages) = demo_font();
    font.common.pages = 2;
    pages.push(pages[0].clone());

    let bundle = export("xml", "atlas", ExportOptions::default(), &font, &pages);
    let xml = text_file(&bundle, "atlas.xml");
    assert!(xml.contains("<page id=\"0\" file=\"atlas_0.png\"/>\n    <page id=\"1\" file=\"atlas_1.png\"/>"));

    let files = package::page_files(&bundle, &pages).unwrap();
    let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["atlas_0.png", "atlas_1.png"]);
}

#[test]
fn test_page_names_with_missing_page_image() {
    let (mut font, pages) = demo_font();
    font.common.pages = 2;

    let bundle = export("fnt", "atlas", ExportOptions::default(), &font, &pages);
    let text = text_file(&bundle, "atlas.fnt");
    assert!(text.contains("page id=0 file=\"atlas_0.png\"\npage id=1 file=\"atlas_1.png\"\n"));

    // every packaged image must be one the descriptor references
    let files = package::page_files(&bundle, &pages).unwrap();
    let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["atlas_0.png"]);
}

#[test]
fn test_binary_descriptor() {
    let (font, pages) = demo_font();
    let bundle = export("bin", "demo", ExportOptions::default(), &font, &pages);
    let FileContent::Binary(data) = &bundle.files[0].content else {
        panic!("binary output expected");
    };
    assert_eq!(&data[0..4], b"BMF\x03");

    // walk the blocks and collect (type, size)
    let mut blocks = Vec::new();
    let mut pos = 4;
    while pos < data.len() {
        let size = u32::from_le_bytes([data[pos + 1], data[pos + 2], data[pos + 3], data[pos + 4]]) as usize;
        blocks.push((data[pos], size));
        pos += 5 + size;
    }
    assert_eq!(pos, data.len());
    assert_eq!(blocks, vec![(1, 14 + 5), (2, 15), (3, 9), (4, 3 * 20), (5, 2 * 10)]);
}

#[test]
fn test_json_descriptor_export() {
    let json = r#"{
        "info": { "face": "Json", "size": 12 },
        "common": { "lineHeight": 14, "base": 11, "scaleW": 32, "scaleH": 32, "pages": 1 },
        "chars": [ { "id": 33, "x": 0, "y": 0, "width": 0, "height": 0, "xoffset": 0, "yoffset": 0, "xadvance": 4.4 } ]
    }"#;
    let font = FontDescriptor::from_json(json).unwrap();
    let bundle = export("txt", "json", ExportOptions::default(), &font, &[]);
    let text = text_file(&bundle, "json.txt");
    assert!(text.starts_with("info face=\"Json\" size=12 "));
    assert!(text.contains("char id=33 x=0 y=0 width=0 height=0 xoffset=0 yoffset=0 xadvance=4 page=0 chnl=0\n"));
    assert!(!text.contains("kernings"));
}
