//! Entry point tying descriptor preparation, format selection and emitters
//! together.

use crate::{AtlasPage, ExportContext, ExportFile, ExportOptions, FontDescriptor, FormatConfig, Result};

/// Parameters of one export call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub format: FormatConfig,
    /// Face name written into the descriptor, empty keeps the current one.
    pub font_name: String,
    /// Base name of every produced file.
    pub file_name: String,
    pub options: ExportOptions,
}

impl ExportRequest {
    pub fn new(format: FormatConfig, file_name: impl Into<String>) -> Self {
        Self {
            format,
            font_name: String::new(),
            file_name: file_name.into(),
            options: ExportOptions::default(),
        }
    }
}

/// Result of an export, ready for packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub base_name: String,
    pub files: Vec<ExportFile>,
    /// Page images must be written next to `files`.
    pub include_pages: bool,
    /// Number of pages the descriptor references, decides the page file names.
    pub page_count: usize,
}

/// Runs one export.
///
/// `font` is not modified, the face and page names are applied to a copy.
pub fn export_font(request: &ExportRequest, font: &FontDescriptor, pages: &[AtlasPage]) -> Result<ExportBundle> {
    let mut font = font.clone();
    if !request.font_name.is_empty() {
        font.info.face.clone_from(&request.font_name);
    }
    font.set_page_files(&request.file_name);

    let format = request.format.format;
    let default_options = ExportOptions::default();
    let options = if format.uses_options() { &request.options } else { &default_options };

    let ctx = ExportContext {
        font: &font,
        pages,
        file_name: &request.file_name,
        options,
    };
    let result = format.export(&ctx, request.format.ext)?;

    log::debug!(
        "Exported '{}' as {} ({} file(s), pages included: {})",
        request.file_name,
        request.format.id,
        result.files.len(),
        result.include_pages
    );

    Ok(ExportBundle {
        base_name: request.file_name.clone(),
        files: result.files,
        include_pages: result.include_pages,
        page_count: font.page_count(),
    })
}
