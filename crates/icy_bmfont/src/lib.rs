#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]
//! Export engine for packed bitmap font atlases.
//!
//! Turns a [`FontDescriptor`] and its rasterized [`AtlasPage`]s into BMFont
//! text, XML or binary descriptors, or into C sources with embedded,
//! deduplicated glyph bitmaps.

mod error;
pub use error::*;

mod descriptor;
pub use descriptor::*;

mod options;
pub use options::*;

mod page;
pub use page::*;

mod glyph;
pub use glyph::*;

pub mod formats;
pub use formats::*;

mod export;
pub use export::*;

pub mod package;
