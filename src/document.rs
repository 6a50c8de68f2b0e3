use std::fs;
use std::path::{Path, PathBuf};

use lopdf::Document;
use serde::Serialize;

use crate::error::{PdfReadError, Result};
use crate::file_manager::render_text;
use crate::metadata::{read_info, DocInfo};

/// Extracted text of one page. `number` is 1-based and follows document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageText {
    #[serde(rename = "Page")]
    pub number: u32,
    #[serde(rename = "Text")]
    pub text: String,
}

/// Everything read from one PDF file
#[derive(Debug, Clone)]
pub struct PdfText {
    pub path: PathBuf,
    pub info: DocInfo,
    pub pages: Vec<PageText>,
}

/// Reads the file and hands its bytes to lopdf. Any failure to read the path is `FileAccess`.
pub fn load_pdf(filepath: &Path) -> Result<Document> {
    let bytes = fs::read(filepath).map_err(|source| PdfReadError::FileAccess {
        path: filepath.to_path_buf(),
        source,
    })?;
    Document::load_mem(&bytes).map_err(PdfReadError::Load)
}

/// Extracts the text of every page, in page order
pub fn extract_pages(document: &Document) -> Result<Vec<PageText>> {
    let pages = document.get_pages();
    let mut extracted = Vec::with_capacity(pages.len());

    // get_pages is keyed by page number, so iteration is already in document order
    for (index, page_nr) in pages.keys().enumerate() {
        let number = index as u32 + 1;
        let text = document
            .extract_text(&[*page_nr])
            .map_err(|source| PdfReadError::Extract { page: number, source })?;
        log::debug!("Page {number}: {} chars", text.len());
        extracted.push(PageText { number, text });
    }
    Ok(extracted)
}

/// Reads the pages of one PDF, keeping the distinct error kinds. `info` is left empty.
pub fn try_read_pdf(filepath: &Path) -> Result<PdfText> {
    read_document(filepath, false)
}

/// Like [`try_read_pdf`], also reading Title and Author from the Info dictionary
pub fn try_read_pdf_with_info(filepath: &Path) -> Result<PdfText> {
    read_document(filepath, true)
}

fn read_document(filepath: &Path, with_info: bool) -> Result<PdfText> {
    log::info!("Loading PDF {}", filepath.display());
    let loaded = load_pdf(filepath).and_then(|document| {
        log::info!("PDF has {} pages", document.get_pages().len());
        let info = if with_info {
            read_info(&document)
        } else {
            DocInfo::default()
        };
        let pages = extract_pages(&document)?;
        Ok(PdfText {
            path: filepath.to_path_buf(),
            info,
            pages,
        })
    });

    if let Err(e) = &loaded {
        log::error!("{}: {e}", filepath.display());
    }
    loaded
}

/// Returns the page-marked text of a PDF, or an `Error reading PDF:` message. Never fails.
pub fn read_pdf(filepath: &Path) -> String {
    text_or_error(&try_read_pdf(filepath))
}

pub fn text_or_error(result: &Result<PdfText>) -> String {
    match result {
        Ok(pdf) => render_text(&pdf.pages),
        Err(e) => error_message(e),
    }
}

pub fn error_message(err: &PdfReadError) -> String {
    format!("Error reading PDF: {err}")
}

/// Lists the PDF files under `path`. A file path is returned as is.
pub fn collect_pdfs(path: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if path.is_dir() {
        read_pdf_dir(path, recursive, &mut found);
    } else {
        found.push(path.to_path_buf());
    }
    found
}

fn read_pdf_dir(dir: &Path, recursive: bool, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping directory {}: {e}", dir.display());
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|ent| ent.path()))
        .collect();
    paths.sort_by(|a, b| {
        natord::compare(&a.to_string_lossy(), &b.to_string_lossy())
    });

    for ent_path in paths {
        if ent_path.is_dir() {
            if recursive {
                read_pdf_dir(&ent_path, recursive, found);
            }
        } else if is_pdf(&ent_path) {
            found.push(ent_path);
        }
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
