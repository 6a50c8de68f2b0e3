use encoding_rs::{UTF_16BE, WINDOWS_1252};
use lopdf::{Dictionary, Document, Object};
use regex::Regex;
use std::sync::OnceLock;

static AUTHOR_SEPARATOR: OnceLock<Regex> = OnceLock::new();

/// Title and authors read from the trailer's Info dictionary
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocInfo {
    pub title: Option<String>,
    pub authors: Vec<String>,
}

/// Decodes a PDF text string. UTF-16BE when it starts with a BOM, Windows-1252 otherwise.
pub fn decode_bytes(bytes: &[u8]) -> Option<String> {
    let decoded = match bytes {
        [0xFE, 0xFF, rest @ ..] => UTF_16BE.decode_without_bom_handling(rest).0,
        _ => WINDOWS_1252.decode(bytes).0,
    };
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Collects the Title and Author from the document's Info dictionary.
pub fn read_info(document: &Document) -> DocInfo {
    let Some(dict) = info_dictionary(document) else {
        log::debug!("No Info dictionary in trailer");
        return DocInfo::default();
    };

    let title = dict
        .get(b"Title")
        .and_then(|v| v.as_str())
        .ok()
        .and_then(decode_bytes);

    let authors = dict
        .get(b"Author")
        .and_then(|v| v.as_str())
        .ok()
        .and_then(decode_bytes)
        .map(|s| split_authors(&s))
        .unwrap_or_default();

    DocInfo { title, authors }
}

fn info_dictionary(document: &Document) -> Option<&Dictionary> {
    match document.trailer.get(b"Info").ok()? {
        Object::Reference(id) => document.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Split the author string into individual names
pub fn split_authors(input: &str) -> Vec<String> {
    // Comma, semicolon, "and" (whole word) or ampersand
    let re = AUTHOR_SEPARATOR.get_or_init(|| {
        Regex::new(r",|;|\band\b|&").expect("author separator pattern is valid")
    });
    re.split(input)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
