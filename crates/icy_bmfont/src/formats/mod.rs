//! Output format registry.
//!
//! Descriptor formats (text, xml, binary) only serialize the
//! [`FontDescriptor`]; the page images are packaged next to them. The C source
//! format embeds the glyph bitmaps and therefore also needs the page pixels.

mod attributes;
pub use attributes::*;

mod binary;
pub use binary::*;

mod c_source;
pub use c_source::*;

mod text;
pub use text::*;

mod xml;
pub use xml::*;

use std::{fmt, path::Path};

use crate::{AtlasPage, ExportError, ExportOptions, FontDescriptor, Result};

/// Content of an emitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(data) => data,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }
}

/// A file produced by an emitter, named relative to the export root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub content: FileContent,
}

impl ExportFile {
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: FileContent::Text(text.into()),
        }
    }
}

/// Files of one export plus whether page images belong next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFiles {
    pub files: Vec<ExportFile>,
    pub include_pages: bool,
}

/// Everything an emitter may need for one export call.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    pub font: &'a FontDescriptor,
    pub pages: &'a [AtlasPage],
    /// Requested output base name, without extension.
    pub file_name: &'a str,
    pub options: &'a ExportOptions,
}

/// Serializes a descriptor into a single file.
pub trait DescriptorEmitter {
    fn emit(&self, font: &FontDescriptor, options: &ExportOptions) -> Result<FileContent>;
}

/// Emitters that need the rasterized pages and may produce several files.
pub trait PixelEmitter {
    fn emit_files(&self, ctx: &ExportContext<'_>) -> ExportFiles;
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// BMFont text descriptor (.fnt, .txt)
    Text,
    /// BMFont XML descriptor (.xml)
    Xml,
    /// BMFont binary descriptor, version 3 (.bin)
    Binary,
    /// C source and header with embedded glyph bitmaps (.c)
    C,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[OutputFormat::Text, OutputFormat::Xml, OutputFormat::Binary, OutputFormat::C];

    /// Short type tag, also the prefix of [`FormatConfig::id`].
    pub fn type_name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Xml => "xml",
            OutputFormat::Binary => "binary",
            OutputFormat::C => "C",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            OutputFormat::Text => &["fnt", "txt"],
            OutputFormat::Xml => &["xml"],
            OutputFormat::Binary => &["bin"],
            OutputFormat::C => &["c"],
        }
    }

    pub fn default_extension(&self) -> &'static str {
        self.extensions()[0]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "BMFont Text",
            OutputFormat::Xml => "BMFont XML",
            OutputFormat::Binary => "BMFont Binary",
            OutputFormat::C => "C Source",
        }
    }

    /// Whether page images are packaged next to the output.
    pub fn include_pages(&self) -> bool {
        !matches!(self, OutputFormat::C)
    }

    pub fn supports_pixel_format(&self) -> bool {
        matches!(self, OutputFormat::C)
    }

    pub fn supports_blur(&self) -> bool {
        matches!(self, OutputFormat::C)
    }

    pub fn supports_textures(&self) -> bool {
        matches!(self, OutputFormat::C)
    }

    pub fn supports_extended(&self) -> bool {
        matches!(self, OutputFormat::C)
    }

    /// True if any [`ExportOptions`] field affects this format.
    pub fn uses_options(&self) -> bool {
        self.supports_pixel_format() || self.supports_blur() || self.supports_textures() || self.supports_extended()
    }

    /// Detect the format from a file extension, with or without leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        FormatConfig::from_extension(ext).map(|config| config.format)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
    }

    /// Runs the emitter of this format.
    ///
    /// `extension` names the descriptor file of single file formats.
    pub fn export(&self, ctx: &ExportContext<'_>, extension: &str) -> Result<ExportFiles> {
        let emitter: &dyn DescriptorEmitter = match self {
            OutputFormat::Text => &TextEmitter,
            OutputFormat::Xml => &XmlEmitter,
            OutputFormat::Binary => &BinaryEmitter,
            OutputFormat::C => return Ok(CSourceEmitter.emit_files(ctx)),
        };
        let content = emitter.emit(ctx.font, ctx.options)?;
        Ok(ExportFiles {
            files: vec![ExportFile {
                name: format!("{}.{}", ctx.file_name, extension),
                content,
            }],
            include_pages: self.include_pages(),
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One selectable (format, extension) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Type tag followed by the extension, e.g. `textfnt` or `Cc`.
    pub id: String,
    pub ext: &'static str,
    pub format: OutputFormat,
}

impl FormatConfig {
    pub fn new(format: OutputFormat, ext: &'static str) -> Self {
        Self {
            id: format!("{}{}", format.type_name(), ext),
            ext,
            format,
        }
    }

    /// All entries in registry order.
    pub fn all() -> Vec<FormatConfig> {
        OutputFormat::ALL
            .iter()
            .flat_map(|format| format.extensions().iter().map(move |ext| FormatConfig::new(*format, *ext)))
            .collect()
    }

    /// First entry using `ext`, case insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::all().into_iter().find(|config| config.ext == ext)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|config| config.id == id)
    }

    /// Accepts an extension or an id.
    pub fn lookup(name: &str) -> Result<Self> {
        Self::from_extension(name)
            .or_else(|| Self::from_id(name))
            .ok_or_else(|| ExportError::UnknownFormat { name: name.to_string() })
    }
}
