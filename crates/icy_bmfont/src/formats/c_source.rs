//! C source output with embedded glyph bitmaps.
//!
//! Produces `<file>.c`, `<file>.h` and the reference header `bmfont.h`. The
//! reference header only documents the struct layouts the tables expect, the
//! consumer is free to compile against its own declarations.

use crate::{BitmapStore, GlyphRecord, GlyphTable, KerningStore};

use super::{ExportContext, ExportFile, ExportFiles, PixelEmitter};

/// Name of the struct reference header.
pub const REFERENCE_HEADER: &str = "bmfont.h";

/// Texture origins are fixed point values: x is shifted by 15 bits, y by 17
/// bits and divided by 3.
pub const TEXTURE_ORIGIN_X_SHIFT: u32 = 15;
pub const TEXTURE_ORIGIN_Y_SHIFT: u32 = 17;
pub const TEXTURE_ORIGIN_Y_DIVISOR: i32 = 3;

const BYTES_PER_LINE: usize = 16;

pub struct CSourceEmitter;

impl PixelEmitter for CSourceEmitter {
    fn emit_files(&self, ctx: &ExportContext<'_>) -> ExportFiles {
        let options = ctx.options;
        let name = safe_identifier(ctx.file_name);

        let table = GlyphTable::build(ctx.font, ctx.pages, options);
        let bitmaps = BitmapStore::build(&table.glyphs);
        let kerning = KerningStore::build(&table.glyphs);

        log::debug!(
            "C export '{}': {} glyphs, {} unique bitmaps ({} bytes), {} kerning pairs",
            name,
            table.glyphs.len(),
            bitmaps.unique.len(),
            bitmaps.data.len(),
            kerning.pairs.len()
        );

        let source = CSource {
            name: &name,
            table: &table,
            bitmaps: &bitmaps,
            kerning: &kerning,
            bpp: options.pixel_format.bpp(),
            include_textures: options.include_textures,
        };

        let mut files = vec![
            ExportFile::text(format!("{}.c", ctx.file_name), source.source_file(ctx.file_name)),
            ExportFile::text(format!("{}.h", ctx.file_name), header_file(&name, ctx.file_name)),
        ];
        if ctx.file_name.to_lowercase() != "bmfont" {
            files.push(ExportFile::text(
                REFERENCE_HEADER,
                reference_header(options.include_textures, options.extended),
            ));
        }

        ExportFiles { files, include_pages: false }
    }
}

/// C identifier for a file name: every character outside `[A-Za-z0-9_]`
/// becomes `_`, a leading digit gets a `_` prefix, empty names become `font`.
pub fn safe_identifier(name: &str) -> String {
    let cleaned: String = name.chars().map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' }).collect();
    if cleaned.is_empty() {
        return "font".to_string();
    }
    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{cleaned}")
    } else {
        cleaned
    }
}

/// Array initializer body, 16 bytes per tab indented line.
pub fn bytes_to_c_array(data: &[u8]) -> String {
    data.chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("\t{}", bytes.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Fixed point texture origin `(x, y)` of a glyph.
pub fn texture_origin(glyph: &GlyphRecord, baseline: u32) -> (i32, i32) {
    let x = (glyph.width as i32).wrapping_sub(glyph.x_offset).wrapping_shl(TEXTURE_ORIGIN_X_SHIFT);
    let y = (baseline as i32).wrapping_sub(glyph.y_offset).wrapping_shl(TEXTURE_ORIGIN_Y_SHIFT) / TEXTURE_ORIGIN_Y_DIVISOR;
    (x, y)
}

struct CSource<'a> {
    name: &'a str,
    table: &'a GlyphTable,
    bitmaps: &'a BitmapStore,
    kerning: &'a KerningStore,
    bpp: usize,
    include_textures: bool,
}

impl CSource<'_> {
    fn source_file(&self, file_name: &str) -> String {
        let name = self.name;
        let glyphs = &self.table.glyphs;
        let mut lines = vec![
            format!("#include \"{file_name}.h\""),
            String::new(),
            format!("static const uint8_t {name}_data[{}] = {{", self.bitmaps.data.len()),
            bytes_to_c_array(&self.bitmaps.data),
            "};".to_string(),
            String::new(),
        ];

        if self.include_textures {
            let rows: Vec<String> = glyphs
                .iter()
                .zip(&self.bitmaps.offsets)
                .map(|(glyph, offset)| {
                    let (origin_x, origin_y) = texture_origin(glyph, self.table.baseline);
                    format!(
                        "\t{{ {}, {}, {origin_x}, {origin_y}, (uint8_t *)&{name}_data[{offset}] }}",
                        glyph.width, glyph.height
                    )
                })
                .collect();
            lines.push(format!("static const texture_t {name}_texture[{}] = {{", glyphs.len()));
            lines.push(rows.join(",\n"));
            lines.push("};".to_string());
            lines.push(String::new());
        }

        let kern_rows: Vec<String> = self
            .kerning
            .pairs
            .iter()
            .map(|pair| format!("\t{{ {}, {} }}", pair.code_point, pair.amount))
            .collect();
        lines.push(format!("static const kern_t {name}_kern[{}] = {{", self.kerning.pairs.len()));
        lines.push(kern_rows.join(",\n"));
        lines.push("};".to_string());
        lines.push(String::new());

        let glyph_rows: Vec<String> = glyphs.iter().enumerate().map(|(i, glyph)| self.glyph_row(i, glyph)).collect();
        lines.push(format!("static const glyph_t {name}_glyph[{}] = {{", glyphs.len()));
        lines.push(glyph_rows.join(",\n"));
        lines.push("};".to_string());
        lines.push(String::new());

        lines.push(format!("const font_t {name}_font = {{"));
        lines.push(format!("\t{},", self.table.baseline));
        lines.push(format!("\t{},", glyphs.len()));
        lines.push(format!("\t{},", self.bpp));
        if self.include_textures {
            lines.push(format!("\t{name}_texture,"));
        }
        lines.push(format!("\t{name}_kern,"));
        lines.push(format!("\t{name}_glyph,"));
        lines.push("};".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    fn glyph_row(&self, index: usize, glyph: &GlyphRecord) -> String {
        let kern_count = glyph.kerning.len();
        let kern_offset = if kern_count > 0 { self.kerning.offsets[index] } else { 0 };
        let head = format!("\t{{ {}, {}, {}, {}, {kern_count}, {kern_offset}", glyph.id, glyph.x_offset, glyph.y_offset, glyph.advance);
        if self.include_textures {
            format!("{head} }}")
        } else {
            format!(
                "{head}, {}, {}, &{}_data[{}] }}",
                glyph.width, glyph.height, self.name, self.bitmaps.offsets[index]
            )
        }
    }
}

fn header_file(name: &str, file_name: &str) -> String {
    [
        "#pragma once".to_string(),
        "#include \"bmfont.h\"".to_string(),
        String::new(),
        format!("#define {}_FONT_NAME \"{file_name}\"", name.to_uppercase()),
        String::new(),
        format!("extern const font_t {name}_font;"),
        String::new(),
    ]
    .join("\n")
}

/// Struct declarations matching the emitted tables.
pub fn reference_header(include_textures: bool, extended: bool) -> String {
    let (cp, offset, small) = if extended { (32, 16, 16) } else { (16, 8, 8) };

    let mut lines = vec![
        "// Reference-only struct definitions. Provide your own real declarations.".to_string(),
        String::new(),
        "// Glyph descriptor".to_string(),
        "typedef struct {".to_string(),
        format!("\tuint{cp}_t cp;         // code-point"),
        format!("\tint{offset}_t x, y;         // draw offset"),
        format!("\tuint{small}_t advance;     // advance"),
        format!("\tuint{small}_t kern_n;      // kerning pairs"),
        "\tuint16_t kern_idx;   // kerning data index".to_string(),
    ];
    if !include_textures {
        lines.push(format!("\tuint{small}_t w, h;        // size"));
        lines.push("\tconst uint8_t *data; // data pointer".to_string());
    }
    lines.extend([
        "} glyph_t;".to_string(),
        String::new(),
        "typedef struct {".to_string(),
        format!("\tuint{cp}_t cp; // code-point"),
        format!("\tint{offset}_t k;    // kerning"),
        "} kern_t;".to_string(),
        String::new(),
    ]);
    if include_textures {
        lines.extend(
            [
                "// Texture descriptor",
                "typedef struct {",
                "\tuint16_t w; // width",
                "\tuint16_t h; // height",
                "\tint32_t x;  // origo x Q16.16",
                "\tint32_t y;  // origo y Q16.16",
                "\tuint8_t *data;",
                "} texture_t;",
                "",
            ]
            .map(String::from),
        );
    }
    lines.extend(["typedef struct {", "\tuint16_t baseline;", "\tuint16_t glyph_count;", "\tuint16_t bpp;"].map(String::from));
    if include_textures {
        lines.push("\tconst texture_t *texture;".to_string());
    }
    lines.extend(["\tconst kern_t *kern;", "\tconst glyph_t *glyph;", "} font_t;", ""].map(String::from));
    lines.join("\n")
}
