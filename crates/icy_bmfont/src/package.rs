//! Writes an [`ExportBundle`] to disk, either as one zip archive or as loose
//! files. Page images are PNG encoded on the way out when the bundle asks for
//! them.

use std::{
    fs,
    io::{Seek, Write},
    path::{Path, PathBuf},
};

use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{AtlasPage, ExportBundle, ExportError, Result, page_file_name};

/// Encoded page images of a bundle, empty when the format embeds the pixels.
///
/// Pages are named after the page count the descriptor references, so the
/// file names always match the descriptor. Missing pages are skipped, pages
/// beyond that count are not packaged.
pub fn page_files(bundle: &ExportBundle, pages: &[AtlasPage]) -> Result<Vec<(String, Vec<u8>)>> {
    if !bundle.include_pages {
        return Ok(Vec::new());
    }
    if pages.len() > bundle.page_count {
        log::warn!("Descriptor references {} page(s), ignoring {} extra page image(s)", bundle.page_count, pages.len() - bundle.page_count);
    }
    let mut result = Vec::with_capacity(bundle.page_count);
    for i in 0..bundle.page_count {
        let Some(page) = pages.get(i) else {
            log::warn!("No image for page {i}, {} is not written", page_file_name(&bundle.base_name, i, bundle.page_count));
            continue;
        };
        if !page.is_valid() {
            return Err(ExportError::invalid_page(
                i,
                format!("{}x{} page needs {} bytes, got {}", page.width, page.height, page.width as usize * page.height as usize * 4, page.pixels.len()),
            ));
        }
        let mut data = Vec::new();
        page.write_png(&mut data)?;
        result.push((page_file_name(&bundle.base_name, i, bundle.page_count), data));
    }
    Ok(result)
}

/// Writes the bundle into a zip archive and returns the underlying writer.
pub fn write_zip<W: Write + Seek>(bundle: &ExportBundle, pages: &[AtlasPage], writer: W) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in &bundle.files {
        zip.start_file(file.name.as_str(), options)?;
        zip.write_all(file.content.as_bytes())?;
    }
    for (name, data) in page_files(bundle, pages)? {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&data)?;
    }
    Ok(zip.finish()?)
}

/// Writes `<dir>/<base_name>.zip` and returns its path.
pub fn save_zip(bundle: &ExportBundle, pages: &[AtlasPage], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.zip", bundle.base_name));
    let file = fs::File::create(&path)?;
    write_zip(bundle, pages, file)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Writes every file of the bundle into `dir` and returns the written paths.
pub fn write_dir(bundle: &ExportBundle, pages: &[AtlasPage], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for file in &bundle.files {
        let path = dir.join(&file.name);
        fs::write(&path, file.content.as_bytes())?;
        written.push(path);
    }
    for (name, data) in page_files(bundle, pages)? {
        let path = dir.join(name);
        fs::write(&path, data)?;
        written.push(path);
    }
    log::info!("Wrote {} file(s) to {}", written.len(), dir.display());
    Ok(written)
}
