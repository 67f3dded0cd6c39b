use crate::{ExportOptions, FontDescriptor, Result};

use super::{
    AttrValue, Attributes, DescriptorEmitter, FileContent, char_attributes, common_attributes, info_attributes, kerning_attributes, page_attributes,
};

/// BMFont XML descriptor.
pub struct XmlEmitter;

impl DescriptorEmitter for XmlEmitter {
    fn emit(&self, font: &FontDescriptor, _options: &ExportOptions) -> Result<FileContent> {
        Ok(FileContent::Text(to_xml(font)))
    }
}

pub fn to_xml(font: &FontDescriptor) -> String {
    let bits = font.common.fractional_bits();
    let mut lines = vec![
        "<?xml version=\"1.0\"?>".to_string(),
        "<font>".to_string(),
        element(1, "info", &info_attributes(&font.info)),
        element(1, "common", &common_attributes(&font.common)),
        "  <pages>".to_string(),
    ];
    for page in &font.pages {
        lines.push(element(2, "page", &page_attributes(page)));
    }
    lines.push("  </pages>".to_string());

    lines.push(format!("  <chars count=\"{}\">", font.chars.len()));
    for ch in &font.chars {
        lines.push(element(2, "char", &char_attributes(ch, bits)));
    }
    lines.push("  </chars>".to_string());

    if !font.kernings.is_empty() {
        lines.push(format!("  <kernings count=\"{}\">", font.kernings.len()));
        for pair in &font.kernings {
            lines.push(element(2, "kerning", &kerning_attributes(pair, bits)));
        }
        lines.push("  </kernings>".to_string());
    }
    lines.push("</font>".to_string());

    let mut result = lines.join("\n");
    result.push('\n');
    result
}

fn element(depth: usize, tag: &str, attrs: &Attributes) -> String {
    let mut result = format!("{}<{tag}", "  ".repeat(depth));
    for (key, value) in attrs {
        let value = match value {
            AttrValue::Int(v) => v.to_string(),
            AttrValue::Str(s) => escape(s),
            AttrValue::List(list) => list.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(","),
        };
        result.push_str(&format!(" {key}=\"{value}\""));
    }
    result.push_str("/>");
    result
}

fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
