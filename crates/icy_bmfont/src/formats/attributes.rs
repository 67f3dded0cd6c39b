//! Key/value view of the BMFont blocks, shared by the text and XML writers.

use crate::{FontCommon, FontInfo, FontPage, GlyphPlacement, KerningPair, round_half_up};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Int(i64),
    Str(String),
    /// Comma separated list (`padding`, `spacing`)
    List(Vec<i64>),
}

pub type Attributes = Vec<(&'static str, AttrValue)>;

fn int(value: impl Into<i64>) -> AttrValue {
    AttrValue::Int(value.into())
}

fn flag(value: bool) -> AttrValue {
    AttrValue::Int(value as i64)
}

/// Rounds a float metric to the integer written into descriptor files.
pub fn metric(value: f32) -> i64 {
    round_half_up(value as f64) as i64
}

/// `value * 2^bits`, rounded. Without fractional bits this is [`metric`].
pub fn fixed_point(value: f32, fractional_bits: Option<u32>) -> i64 {
    match fractional_bits {
        Some(bits) => round_half_up(value as f64 * (1u32 << bits) as f64) as i64,
        None => metric(value),
    }
}

pub fn info_attributes(info: &FontInfo) -> Attributes {
    let mut attrs = vec![
        ("face", AttrValue::Str(info.face.clone())),
        ("size", int(info.size)),
        ("bold", flag(info.bold)),
        ("italic", flag(info.italic)),
        ("charset", AttrValue::Str(info.charset.clone())),
        ("unicode", flag(info.unicode)),
        ("stretchH", int(info.stretch_h)),
        ("smooth", flag(info.smooth)),
        ("aa", int(info.aa)),
        ("padding", AttrValue::List(info.padding.iter().map(|&p| p as i64).collect())),
        ("spacing", AttrValue::List(info.spacing.iter().map(|&s| s as i64).collect())),
    ];
    if let Some(outline) = info.outline {
        attrs.push(("outline", int(outline)));
    }
    attrs
}

pub fn common_attributes(common: &FontCommon) -> Attributes {
    let mut attrs = vec![
        ("lineHeight", int(common.line_height)),
        ("base", int(common.base)),
        ("scaleW", int(common.scale_w)),
        ("scaleH", int(common.scale_h)),
        ("pages", int(common.pages)),
        ("packed", flag(common.packed)),
    ];
    let channels = [
        ("alphaChnl", common.alpha_chnl),
        ("redChnl", common.red_chnl),
        ("greenChnl", common.green_chnl),
        ("blueChnl", common.blue_chnl),
    ];
    for (key, value) in channels {
        if let Some(value) = value {
            attrs.push((key, int(value)));
        }
    }
    if let Some(bits) = common.fractional_bits() {
        attrs.push(("xFpBits", int(bits)));
    }
    attrs
}

pub fn page_attributes(page: &FontPage) -> Attributes {
    vec![("id", int(page.id)), ("file", AttrValue::Str(page.file.clone()))]
}

pub fn char_attributes(ch: &GlyphPlacement, fractional_bits: Option<u32>) -> Attributes {
    vec![
        ("id", int(ch.id)),
        ("x", int(ch.x)),
        ("y", int(ch.y)),
        ("width", int(ch.width)),
        ("height", int(ch.height)),
        ("xoffset", AttrValue::Int(metric(ch.xoffset))),
        ("yoffset", AttrValue::Int(metric(ch.yoffset))),
        ("xadvance", AttrValue::Int(fixed_point(ch.xadvance, fractional_bits))),
        ("page", int(ch.page)),
        ("chnl", int(ch.chnl)),
    ]
}

pub fn kerning_attributes(pair: &KerningPair, fractional_bits: Option<u32>) -> Attributes {
    vec![
        ("first", int(pair.first)),
        ("second", int(pair.second)),
        ("amount", AttrValue::Int(fixed_point(pair.amount, fractional_bits))),
    ]
}
