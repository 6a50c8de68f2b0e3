//! Page-by-page text extraction from PDF files, on top of `lopdf`.

pub mod arg_parser;
pub mod document;
pub mod error;
pub mod file_manager;
pub mod metadata;

#[cfg(test)]
mod test_pdf;

pub use document::{
    collect_pdfs, read_pdf, try_read_pdf, try_read_pdf_with_info, PageText, PdfText,
};
pub use error::PdfReadError;
