//! Turning dropped or picked files into syllabus items.
//!
//! No text extraction happens yet: any PDF yields the bundled sample
//! syllabus. The `Ingestor` trait is the seam where a real extractor plugs in.

use std::path::Path;

use chrono::NaiveDate;
use log::debug;

use crate::error::{SyllabusError, SyllabusResult};
use crate::item::{ItemKind, SyllabusItem};

pub const PDF_MIME: &str = "application/pdf";

/// A file handed over by a drop or a file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    pub fn new(name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        IncomingFile {
            name: name.to_string(),
            mime: mime.to_string(),
            bytes,
        }
    }

    /// Read a file from disk, inferring its MIME type from the extension.
    pub fn from_path(path: &Path) -> SyllabusResult<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(IncomingFile::new(&name, mime_for_path(path), bytes))
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }
}

/// Best-effort MIME type for a path, based on its extension only.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

/// The first PDF among dropped files; the rest are ignored.
pub fn first_pdf(files: &[IncomingFile]) -> Option<&IncomingFile> {
    files.iter().find(|f| f.is_pdf())
}

pub trait Ingestor {
    fn ingest(&self, file: &IncomingFile) -> SyllabusResult<Vec<SyllabusItem>>;
}

/// Accepts any PDF and returns the sample syllabus regardless of content.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleIngestor;

impl Ingestor for SampleIngestor {
    fn ingest(&self, file: &IncomingFile) -> SyllabusResult<Vec<SyllabusItem>> {
        if !file.is_pdf() {
            return Err(SyllabusError::UnsupportedMediaType(file.mime.clone()));
        }

        debug!(
            "Substituting sample syllabus for '{}' ({} bytes)",
            file.name,
            file.bytes.len()
        );
        Ok(sample_items())
    }
}

/// Three items from a first-year Constitutional Law course, September 2025.
pub fn sample_items() -> Vec<SyllabusItem> {
    let sept = |day| NaiveDate::from_ymd_opt(2025, 9, day).unwrap_or_default();

    vec![
        SyllabusItem::new(
            "1",
            "Constitutional Law Reading Ch. 1-3",
            ItemKind::Reading,
            sept(5),
        )
        .with_description("Introduction to Constitutional Principles"),
        SyllabusItem::new("2", "Case Brief Assignment", ItemKind::Assignment, sept(8))
            .with_description("Marbury v. Madison case analysis"),
        SyllabusItem::new("3", "Midterm Exam", ItemKind::Exam, sept(12))
            .with_description("Covers chapters 1-5"),
    ]
}
