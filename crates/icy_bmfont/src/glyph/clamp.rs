//! Fixed width integer domains for embedded glyph tables.
//!
//! Every numeric field that ends up in a fixed width slot goes through one of
//! the clamps below. Clamping is lossy and silent: out of range values are cut
//! to the domain bounds instead of failing the export.

/// Largest code point kept in normal (non extended) mode.
pub const MAX_NORMAL_CODE_POINT: u32 = 0xFFFF;

/// 8 bit (normal) or 16 bit (extended) integer domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericDomain {
    #[default]
    Normal,
    Extended,
}

impl NumericDomain {
    pub fn new(extended: bool) -> Self {
        if extended { NumericDomain::Extended } else { NumericDomain::Normal }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, NumericDomain::Extended)
    }

    /// Bounds for offsets and kerning amounts.
    pub fn signed_range(&self) -> (i32, i32) {
        match self {
            NumericDomain::Normal => (i8::MIN as i32, i8::MAX as i32),
            NumericDomain::Extended => (i16::MIN as i32, i16::MAX as i32),
        }
    }

    /// Upper bound for advances and dimensions.
    pub fn unsigned_max(&self) -> u32 {
        match self {
            NumericDomain::Normal => u8::MAX as u32,
            NumericDomain::Extended => u16::MAX as u32,
        }
    }

    /// Rounds and clamps into the signed domain.
    pub fn clamp_signed(&self, value: f64) -> i32 {
        let (min, max) = self.signed_range();
        clamp_rounded(value, min as i64, max as i64) as i32
    }

    /// Rounds and clamps into the unsigned domain.
    pub fn clamp_unsigned(&self, value: f64) -> u32 {
        clamp_rounded(value, 0, self.unsigned_max() as i64) as u32
    }

    /// Whether a code point survives the range filter.
    pub fn accepts_code_point(&self, id: u32) -> bool {
        self.is_extended() || id <= MAX_NORMAL_CODE_POINT
    }
}

/// Rounds to the nearest integer, halves go up.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds `value` and clamps it to `[min, max]`. NaN ends up at zero (or the
/// nearest bound if zero is outside).
pub fn clamp_rounded(value: f64, min: i64, max: i64) -> i64 {
    let rounded = round_half_up(value);
    let clamped = if rounded.is_nan() { 0 } else { rounded as i64 };
    if clamped < min || clamped > max {
        log::trace!("clamping {value} to [{min}, {max}]");
    }
    clamped.clamp(min, max)
}
