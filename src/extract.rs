use std::fs;
use std::path::{Path, PathBuf};

use lopdf::Document;
use thiserror::Error;

/// Failures surfaced by a single extraction run.
///
/// Every variant aborts the run immediately; there is no retry, fallback, or
/// partial-output path.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to open document {path}: {reason}")]
    DocumentAccess { path: PathBuf, reason: String },
    #[error("failed to extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },
    #[error("failed to write output {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extract the text of every page of the PDF at `source` and write it to
/// `dest`, truncating any existing file there.
///
/// Page texts are concatenated in page order with a newline after every page
/// (the last included). Returns the number of characters written, newlines
/// counted.
pub fn extract(source: &Path, dest: &Path) -> Result<usize, ExtractError> {
    let doc = Document::load(source).map_err(|e| ExtractError::DocumentAccess {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut page_texts = Vec::new();
    for (page_num, _) in doc.get_pages() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractError::PageText {
                page: page_num,
                reason: e.to_string(),
            })?;
        page_texts.push(text);
    }

    let text = concat_pages(page_texts);

    fs::write(dest, &text).map_err(|source| ExtractError::DestinationWrite {
        path: dest.to_path_buf(),
        source,
    })?;

    Ok(text.chars().count())
}

/// Join page texts in order, appending a newline after each one.
///
/// An empty page text still contributes its newline; pages are never skipped.
fn concat_pages(pages: impl IntoIterator<Item = String>) -> String {
    let mut out = String::new();
    for page in pages {
        out.push_str(&page);
        out.push('\n');
    }
    out
}
