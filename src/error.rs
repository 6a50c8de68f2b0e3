use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfReadError {
    #[error("cannot open {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load document: {0}")]
    Load(#[source] lopdf::Error),

    #[error("failed to extract text from page {page}: {source}")]
    Extract {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    #[error("no PDF files found in {}", path.display())]
    NoPdfFiles { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, PdfReadError>;
