use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::arg_parser::Format;
use crate::document::{
    collect_pdfs, error_message, text_or_error, try_read_pdf, try_read_pdf_with_info, PageText,
    PdfText,
};
use crate::error::PdfReadError;

/// One document rendered for output. `ok` is false when reading it failed.
#[derive(Debug)]
pub struct Rendered {
    pub content: String,
    pub ok: bool,
}

/// Joins page texts as `\n--- Page N ---\n<text>\n` blocks
pub fn render_text(pages: &[PageText]) -> String {
    let mut text = String::new();
    for page in pages {
        text += &format!("\n--- Page {} ---\n{}\n", page.number, page.text);
    }
    text
}

pub fn render_json(pdf: &PdfText) -> Value {
    json!({
        "PDF Name": split_name(&pdf.path),
        "Title": pdf.info.title,
        "Authors": pdf.info.authors,
        "Page Count": pdf.pages.len(),
        "Pages": pdf.pages,
    })
}

pub fn render_json_error(path: &Path, err: &PdfReadError) -> Value {
    json!({
        "PDF Name": split_name(path),
        "Error": error_message(err),
    })
}

/// Reads one PDF and renders it in `format`. Text gets a `=== <name> ===` line when `with_header` is set.
pub fn render_target(path: &Path, format: Format, with_header: bool) -> Rendered {
    match format {
        Format::Json => {
            let result = try_read_pdf_with_info(path);
            let value = match &result {
                Ok(pdf) => render_json(pdf),
                Err(e) => render_json_error(path, e),
            };
            Rendered {
                content: pretty(&value),
                ok: result.is_ok(),
            }
        }
        Format::Text => {
            let result = try_read_pdf(path);
            let body = text_or_error(&result);
            let content = if with_header {
                format!("=== {} ===\n{body}", split_name(path))
            } else {
                body
            };
            Rendered {
                content,
                ok: result.is_ok(),
            }
        }
    }
}

/// Writes every PDF found at `path` to `output` and returns how many failed.
/// A directory without PDF files is written as an error and counts as one failure.
pub fn write_targets(
    path: &Path,
    format: Format,
    recursive: bool,
    output: &mut Output,
) -> io::Result<usize> {
    let targets = collect_pdfs(path, recursive);
    if targets.is_empty() {
        let err = PdfReadError::NoPdfFiles {
            path: path.to_path_buf(),
        };
        log::error!("{err}");
        let content = match format {
            Format::Json => pretty(&render_json_error(path, &err)),
            Format::Text => error_message(&err),
        };
        output.write_entry(&content)?;
        return Ok(1);
    }

    let with_header = path.is_dir();
    let mut failures = 0;
    for target in &targets {
        let rendered = render_target(target, format, with_header);
        if !rendered.ok {
            failures += 1;
        }
        output.write_entry(&rendered.content)?;
    }
    log::info!("Read {} of {} PDF files", targets.len() - failures, targets.len());
    Ok(failures)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| json!({ "Error": e.to_string() }).to_string())
}

/// Last component of a path, accepting both slash styles
pub fn split_name(filepath: &Path) -> String {
    let normalized = filepath.to_string_lossy().replace('\\', "/");
    normalized
        .split('/')
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Where rendered documents go: stdout, or a file created once per run
pub enum Output {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Output {
    pub fn open(filepath: Option<&Path>) -> io::Result<Self> {
        match filepath {
            Some(path) => {
                let file = File::create(path)?;
                Ok(Output::File(BufWriter::new(file)))
            }
            None => Ok(Output::Stdout(io::stdout())),
        }
    }

    /// Writes `content` followed by a newline
    pub fn write_entry(&mut self, content: &str) -> io::Result<()> {
        match self {
            Output::Stdout(out) => {
                let mut lock = out.lock();
                writeln!(lock, "{content}")
            }
            Output::File(writer) => writeln!(writer, "{content}"),
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.lock().flush(),
            Output::File(mut writer) => writer.flush(),
        }
    }
}
