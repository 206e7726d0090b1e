use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};

use lector::application::ports::{FileLoader, FileLoaderError};
use lector::domain::{Document, DocumentFormat};
use lector::infrastructure::text_processing::PdfAdapter;

fn pdf_bytes(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[tokio::test]
async fn given_valid_pdf_when_extracting_then_returns_page_text() {
    let adapter = PdfAdapter::new();
    let data = pdf_bytes(&["The sky is blue."]);
    let document = Document::new(
        "sky.pdf".to_string(),
        DocumentFormat::Pdf,
        data.len() as u64,
    );

    let result = adapter.extract_text(&data, &document).await.unwrap();

    assert!(result.contains("The sky is blue."));
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_pages_come_out_in_order() {
    let adapter = PdfAdapter::new();
    let data = pdf_bytes(&["Page one text", "Page two text"]);
    let document = Document::new(
        "pages.pdf".to_string(),
        DocumentFormat::Pdf,
        data.len() as u64,
    );

    let result = adapter.extract_text(&data, &document).await.unwrap();

    let first = result.find("Page one text").unwrap();
    let second = result.find("Page two text").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn given_same_pdf_when_extracting_twice_then_results_are_identical() {
    let adapter = PdfAdapter::new();
    let data = pdf_bytes(&["Deterministic content"]);
    let document = Document::new(
        "repeat.pdf".to_string(),
        DocumentFormat::Pdf,
        data.len() as u64,
    );

    let first = adapter.extract_text(&data, &document).await.unwrap();
    let second = adapter.extract_text(&data, &document).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let document = Document::new(
        "corrupt.pdf".to_string(),
        DocumentFormat::Pdf,
        garbage.len() as u64,
    );

    let result = adapter.extract_text(garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_format_when_extracting_pdf_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let document = Document::new("notes.txt".to_string(), DocumentFormat::Txt, 4);

    let result = adapter.extract_text(b"data", &document).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
