//! BMFont binary descriptor, version 3.
//!
//! All values are little endian. After the `BMF` magic and the version byte the
//! file is a sequence of blocks, each starting with a type byte and the block
//! size (excluding those 5 bytes).

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::{ExportOptions, FontCommon, FontDescriptor, FontInfo, Result};

use super::{DescriptorEmitter, FileContent, fixed_point, metric};

pub const BINARY_MAGIC: &[u8; 3] = b"BMF";
pub const BINARY_VERSION: u8 = 3;

const BLOCK_INFO: u8 = 1;
const BLOCK_COMMON: u8 = 2;
const BLOCK_PAGES: u8 = 3;
const BLOCK_CHARS: u8 = 4;
const BLOCK_KERNING: u8 = 5;

pub const CHAR_RECORD_SIZE: usize = 20;
pub const KERNING_RECORD_SIZE: usize = 10;

// info bit field
const INFO_SMOOTH: u8 = 0x80;
const INFO_UNICODE: u8 = 0x40;
const INFO_ITALIC: u8 = 0x20;
const INFO_BOLD: u8 = 0x10;

// common bit field
const COMMON_PACKED: u8 = 0x01;

pub struct BinaryEmitter;

impl DescriptorEmitter for BinaryEmitter {
    fn emit(&self, font: &FontDescriptor, _options: &ExportOptions) -> Result<FileContent> {
        let mut data = Vec::new();
        write_binary(font, &mut data)?;
        Ok(FileContent::Binary(data))
    }
}

pub fn write_binary<W: Write>(font: &FontDescriptor, writer: &mut W) -> io::Result<()> {
    writer.write_all(BINARY_MAGIC)?;
    writer.write_u8(BINARY_VERSION)?;

    write_block(writer, BLOCK_INFO, &info_block(&font.info)?)?;
    write_block(writer, BLOCK_COMMON, &common_block(&font.common)?)?;

    let mut pages = Vec::new();
    for page in &font.pages {
        write_cstr(&mut pages, &page.file)?;
    }
    write_block(writer, BLOCK_PAGES, &pages)?;

    let bits = font.common.fractional_bits();
    let mut chars = Vec::with_capacity(font.chars.len() * CHAR_RECORD_SIZE);
    for ch in &font.chars {
        chars.write_u32::<LittleEndian>(ch.id)?;
        chars.write_u16::<LittleEndian>(saturate_u16(ch.x as i64))?;
        chars.write_u16::<LittleEndian>(saturate_u16(ch.y as i64))?;
        chars.write_u16::<LittleEndian>(saturate_u16(ch.width as i64))?;
        chars.write_u16::<LittleEndian>(saturate_u16(ch.height as i64))?;
        chars.write_i16::<LittleEndian>(saturate_i16(metric(ch.xoffset)))?;
        chars.write_i16::<LittleEndian>(saturate_i16(metric(ch.yoffset)))?;
        chars.write_i16::<LittleEndian>(saturate_i16(fixed_point(ch.xadvance, bits)))?;
        chars.write_u8(saturate_u8(ch.page as i64))?;
        chars.write_u8(ch.chnl)?;
    }
    write_block(writer, BLOCK_CHARS, &chars)?;

    if !font.kernings.is_empty() {
        let mut kernings = Vec::with_capacity(font.kernings.len() * KERNING_RECORD_SIZE);
        for pair in &font.kernings {
            kernings.write_u32::<LittleEndian>(pair.first)?;
            kernings.write_u32::<LittleEndian>(pair.second)?;
            kernings.write_i16::<LittleEndian>(saturate_i16(fixed_point(pair.amount, bits)))?;
        }
        write_block(writer, BLOCK_KERNING, &kernings)?;
    }
    Ok(())
}

fn info_block(info: &FontInfo) -> io::Result<Vec<u8>> {
    let mut block = Vec::new();
    block.write_i16::<LittleEndian>(saturate_i16(info.size as i64))?;

    let mut bits = 0;
    if info.smooth {
        bits |= INFO_SMOOTH;
    }
    if info.unicode {
        bits |= INFO_UNICODE;
    }
    if info.italic {
        bits |= INFO_ITALIC;
    }
    if info.bold {
        bits |= INFO_BOLD;
    }
    block.write_u8(bits)?;
    block.write_u8(charset_id(&info.charset))?;
    block.write_u16::<LittleEndian>(saturate_u16(info.stretch_h as i64))?;
    block.write_u8(saturate_u8(info.aa as i64))?;
    for padding in info.padding {
        block.write_u8(saturate_u8(padding as i64))?;
    }
    for spacing in info.spacing {
        block.write_u8(saturate_u8(spacing as i64))?;
    }
    block.write_u8(saturate_u8(info.outline.unwrap_or(0) as i64))?;
    write_cstr(&mut block, &info.face)?;
    Ok(block)
}

fn common_block(common: &FontCommon) -> io::Result<Vec<u8>> {
    let mut block = Vec::new();
    block.write_u16::<LittleEndian>(saturate_u16(common.line_height as i64))?;
    block.write_u16::<LittleEndian>(saturate_u16(common.base as i64))?;
    block.write_u16::<LittleEndian>(saturate_u16(common.scale_w as i64))?;
    block.write_u16::<LittleEndian>(saturate_u16(common.scale_h as i64))?;
    block.write_u16::<LittleEndian>(saturate_u16(common.pages as i64))?;
    block.write_u8(if common.packed { COMMON_PACKED } else { 0 })?;
    for channel in [common.alpha_chnl, common.red_chnl, common.green_chnl, common.blue_chnl] {
        block.write_u8(channel.unwrap_or(0))?;
    }
    Ok(block)
}

fn write_block<W: Write>(writer: &mut W, block_type: u8, content: &[u8]) -> io::Result<()> {
    writer.write_u8(block_type)?;
    writer.write_u32::<LittleEndian>(content.len() as u32)?;
    writer.write_all(content)
}

fn write_cstr(out: &mut Vec<u8>, text: &str) -> io::Result<()> {
    // names may not contain the terminator
    out.extend(text.bytes().filter(|&b| b != 0));
    out.write_u8(0)
}

/// Windows charset id for a BMFont charset name, numeric strings are taken as is.
pub fn charset_id(charset: &str) -> u8 {
    let charset = charset.trim();
    if let Ok(id) = charset.parse::<u8>() {
        return id;
    }
    match charset.to_ascii_uppercase().as_str() {
        "ANSI" => 0,
        "DEFAULT" => 1,
        "SYMBOL" => 2,
        "MAC" => 77,
        "SHIFTJIS" => 128,
        "HANGUL" => 129,
        "JOHAB" => 130,
        "GB2312" => 134,
        "CHINESEBIG5" => 136,
        "GREEK" => 161,
        "TURKISH" => 162,
        "VIETNAMESE" => 163,
        "HEBREW" => 177,
        "ARABIC" => 178,
        "BALTIC" => 186,
        "RUSSIAN" => 204,
        "THAI" => 222,
        "EASTEUROPE" => 238,
        "OEM" => 255,
        _ => 0,
    }
}

fn saturate_u8(value: i64) -> u8 {
    value.clamp(0, u8::MAX as i64) as u8
}

fn saturate_u16(value: i64) -> u16 {
    value.clamp(0, u16::MAX as i64) as u16
}

fn saturate_i16(value: i64) -> i16 {
    value.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}
