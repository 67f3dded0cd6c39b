//! BMFont text descriptor.
//!
//! ```text
//! info face="Demo" size=16 bold=0 italic=0 charset="" unicode=1 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1
//! common lineHeight=18 base=14 scaleW=64 scaleH=64 pages=1 packed=0
//! page id=0 file="demo.png"
//! chars count=1
//! char id=65 x=1 y=2 width=3 height=4 xoffset=0 yoffset=2 xadvance=5 page=0 chnl=15
//! kernings count=1
//! kerning first=65 second=86 amount=-1
//! ```

use crate::{ExportOptions, FontDescriptor, Result};

use super::{
    AttrValue, Attributes, DescriptorEmitter, FileContent, char_attributes, common_attributes, info_attributes, kerning_attributes, page_attributes,
};

pub struct TextEmitter;

impl DescriptorEmitter for TextEmitter {
    fn emit(&self, font: &FontDescriptor, _options: &ExportOptions) -> Result<FileContent> {
        Ok(FileContent::Text(to_text(font)))
    }
}

pub fn to_text(font: &FontDescriptor) -> String {
    let bits = font.common.fractional_bits();
    let mut lines = vec![line("info", &info_attributes(&font.info)), line("common", &common_attributes(&font.common))];

    for page in &font.pages {
        lines.push(line("page", &page_attributes(page)));
    }

    lines.push(format!("chars count={}", font.chars.len()));
    for ch in &font.chars {
        lines.push(line("char", &char_attributes(ch, bits)));
    }

    if !font.kernings.is_empty() {
        lines.push(format!("kernings count={}", font.kernings.len()));
        for pair in &font.kernings {
            lines.push(line("kerning", &kerning_attributes(pair, bits)));
        }
    }

    let mut result = lines.join("\n");
    result.push('\n');
    result
}

fn line(tag: &str, attrs: &Attributes) -> String {
    let mut result = tag.to_string();
    for (key, value) in attrs {
        result.push(' ');
        result.push_str(key);
        result.push('=');
        match value {
            AttrValue::Int(v) => result.push_str(&v.to_string()),
            // the text format has no escaping, quotes would end the value
            AttrValue::Str(s) => {
                if s.contains('"') {
                    log::warn!("{tag} {key} value {s:?} contains '\"', written with ' instead");
                }
                result.push_str(&format!("\"{}\"", s.replace('"', "'")));
            }
            AttrValue::List(list) => result.push_str(&list.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")),
        }
    }
    result
}
