//! Text extraction: turns a resume file into one flat string.
//!
//! Decoding is best-effort: a PDF or DOCX that fails to decode logs a warning
//! and yields empty text. Only an unreadable file is reported as an error;
//! the parser decides what an empty result means.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::{debug, warn};

use crate::parser::ParseError;

/// Declared document format, taken from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Unsupported,
}

impl DocumentFormat {
    /// Detect format from extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::Txt,
            _ => Self::Unsupported,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unsupported)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}

/// A document that has been opened and read into memory, not yet decoded.
///
/// The file handle lives only inside [`RawDocument::open`]; decoding works on
/// the owned bytes.
#[derive(Debug)]
pub struct RawDocument {
    pub path: PathBuf,
    pub format: DocumentFormat,
    bytes: Vec<u8>,
}

impl RawDocument {
    /// Read the file at `path`. Fails only when the file cannot be opened or read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref().to_path_buf();
        let format = DocumentFormat::from_path(&path);
        let bytes = std::fs::read(&path).map_err(|source| ParseError::UnreadableFile {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), %format, size = bytes.len(), "Read resume document");
        Ok(Self {
            path,
            format,
            bytes,
        })
    }

    /// Decode the document into plain text, consuming it.
    pub fn into_text(self) -> String {
        match self.format {
            DocumentFormat::Pdf => pdf_text(&self.path, &self.bytes),
            DocumentFormat::Docx => docx_text(&self.path, &self.bytes),
            DocumentFormat::Txt => match String::from_utf8(self.bytes) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %self.path.display(), "Error reading TXT: {e}");
                    String::new()
                }
            },
            DocumentFormat::Unsupported => {
                warn!(path = %self.path.display(), "Unsupported resume format, no text extracted");
                String::new()
            }
        }
    }
}

/// Open and decode `path` in one step.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String, ParseError> {
    Ok(RawDocument::open(path)?.into_text())
}

/// Concatenate per-page text in page order.
///
/// Each page is decoded on its own; a page that errors or panics logs a
/// warning and contributes "" while the remaining pages are still read.
fn pdf_text(path: &Path, bytes: &[u8]) -> String {
    let mut doc = match pdf_extract::Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), "Error reading PDF: {e}");
            return String::new();
        }
    };
    if doc.is_encrypted() {
        if let Err(e) = doc.decrypt("") {
            warn!(path = %path.display(), "Error reading PDF: encrypted document ({e})");
            return String::new();
        }
    }

    let pages = doc.get_pages();
    let mut text = String::new();
    for &page_num in pages.keys() {
        text.push_str(&pdf_page_text(path, &doc, page_num));
    }
    debug!(path = %path.display(), pages = pages.len(), "Decoded PDF");
    text
}

fn pdf_page_text(path: &Path, doc: &pdf_extract::Document, page_num: u32) -> String {
    let mut page = String::new();
    // pdf-extract panics on some malformed pages; treat that like a decode error.
    let decoded = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut output = pdf_extract::PlainTextOutput::new(&mut page);
        pdf_extract::output_doc_page(doc, &mut output, page_num)
    }));

    match decoded {
        Ok(Ok(())) => page,
        Ok(Err(e)) => {
            warn!(path = %path.display(), page = page_num, "Error reading PDF page: {e}");
            String::new()
        }
        Err(_) => {
            warn!(path = %path.display(), page = page_num, "Error reading PDF page: decoder panicked");
            String::new()
        }
    }
}

/// Paragraph text in document order, each paragraph followed by a newline.
fn docx_text(path: &Path, bytes: &[u8]) -> String {
    let docx = match docx_rs::read_docx(bytes) {
        Ok(docx) => docx,
        Err(e) => {
            warn!(path = %path.display(), "Error reading DOCX: {e}");
            return String::new();
        }
    };

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            push_paragraph_text(&mut text, &p.children);
            text.push('\n');
        }
    }
    text
}

fn push_paragraph_text(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_text(out, &link.children),
            _ => {}
        }
    }
}
