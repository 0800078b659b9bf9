//! Placeholder tokens found in uploaded PDF policy templates.
//!
//! Text extraction itself happens in the browser (pdf.js); this module only
//! sees the extracted text runs and classifies them.

pub mod mapping;
pub mod scanner;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use mapping::PlaceholderMap;
pub use scanner::{scan_document, scan_run};

/// Token grammar a placeholder was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    /// `(12)`
    Numbered,
    /// `{{farmer_name}}`
    Handlebars,
    /// `[crop_type]`
    Brackets,
}

impl PlaceholderKind {
    pub fn code(&self) -> &'static str {
        match self {
            PlaceholderKind::Numbered => "numbered",
            PlaceholderKind::Handlebars => "handlebars",
            PlaceholderKind::Brackets => "brackets",
        }
    }
}

/// Position in page coordinate space, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One text run as reported by the PDF renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub position: Rect,
}

/// Extraction result for one page. `Err` holds the renderer's message.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    /// 1-based
    pub page: u32,
    pub runs: Result<Vec<TextRun>, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub id: String,
    /// Literal as it appears in the document, e.g. `{{farmer_name}}`.
    pub original: String,
    pub extracted_key: String,
    #[serde(rename = "type")]
    pub kind: PlaceholderKind,
    pub page: u32,
    pub position: Rect,
    /// Characters preceding the match across all scanned runs.
    pub char_offset: usize,
    pub mapped: bool,
    pub tag_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageError {
    pub page: u32,
    pub message: String,
}

/// Placeholders from every readable page plus the pages that failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub page_count: u32,
    pub placeholders: Vec<Placeholder>,
    pub page_errors: Vec<PageError>,
}

impl ScanReport {
    pub fn is_partial(&self) -> bool {
        !self.page_errors.is_empty()
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScanError {
    #[error("no PDF file was supplied")]
    NoFile,
    #[error("failed to read PDF: {0}")]
    Unparseable(String),
}
