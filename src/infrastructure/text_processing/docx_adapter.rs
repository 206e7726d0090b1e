use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

/// Extracts paragraph text from the main document part of a DOCX archive.
///
/// Paragraphs come out in document order, joined by newline; empty
/// paragraphs contribute empty lines. Tables and embedded objects are not
/// extracted.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(data: &[u8]) -> Result<String, FileLoaderError> {
        let cursor = Cursor::new(data);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX archive: {e}"))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("missing main document part: {e}"))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to read document part: {e}"))
            })?;

        Ok(xml)
    }

    fn extract_paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_paragraph = false;
        let mut in_text_run = false;
        let mut table_depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"w:tbl" => table_depth += 1,
                    b"w:p" if table_depth == 0 => {
                        in_paragraph = true;
                        current.clear();
                    }
                    b"w:t" if in_paragraph => in_text_run = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => {
                    // Self-closing <w:p/> is an empty paragraph and keeps
                    // its line.
                    if e.name().as_ref() == b"w:p" && table_depth == 0 {
                        paragraphs.push(String::new());
                    }
                }
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"w:p" if in_paragraph && table_depth == 0 => {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                    b"w:t" => in_text_run = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_text_run => {
                    let text = e.unescape().map_err(|e| {
                        FileLoaderError::ExtractionFailed(format!(
                            "malformed document XML: {e}"
                        ))
                    })?;
                    current.push_str(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(FileLoaderError::ExtractionFailed(format!(
                        "malformed document XML: {e}"
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(paragraphs)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let data_owned = data.to_vec();

        let paragraphs = tokio::task::spawn_blocking(move || {
            let xml = Self::read_document_xml(&data_owned)?;
            Self::extract_paragraphs(&xml)
        })
        .await
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join("\n"))
    }
}
