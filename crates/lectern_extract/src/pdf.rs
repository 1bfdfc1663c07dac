//! PDF deck extraction.

use lectern_core::ExtractedText;
use lectern_error::{ExtractError, ExtractErrorKind, ExtractResult};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, warn};

/// Extract text from PDF slides.
///
/// Pages are walked in order; pages with non-whitespace text contribute
/// a `--- Page {n} ---` block, blank pages contribute nothing. The unit
/// count is the total page count regardless of text yield, and embedded
/// images are recorded as a diagnostic only.
pub fn extract_pdf(bytes: &[u8]) -> ExtractResult<ExtractedText> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ExtractError::new(ExtractErrorKind::Pdf(e.to_string())))?;

    let pages = doc.get_pages();
    let mut blocks: Vec<String> = Vec::new();
    let mut has_images = false;

    for (&page_num, &page_id) in pages.iter() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                if !page_text.trim().is_empty() {
                    blocks.push(format!("--- Page {} ---\n{}", page_num, page_text));
                }
            }
            Err(e) => {
                warn!(page = page_num, error = %e, "Skipping unreadable page");
            }
        }

        if !has_images && page_has_images(&doc, page_id) {
            has_images = true;
        }
    }

    debug!(pages = pages.len(), has_images, "Extracted text from PDF");

    ExtractedText::builder()
        .text(blocks.join("\n\n"))
        .unit_count(pages.len())
        .has_images(has_images)
        .build()
        .map_err(|e| ExtractError::new(ExtractErrorKind::Pdf(e.to_string())))
}

/// Check the page's resource dictionaries for image XObjects.
fn page_has_images(doc: &Document, page_id: ObjectId) -> bool {
    let Ok((direct, referenced)) = doc.get_page_resources(page_id) else {
        return false;
    };

    let mut dicts: Vec<&Dictionary> = Vec::new();
    if let Some(dict) = direct {
        dicts.push(dict);
    }
    for id in referenced {
        if let Ok(dict) = doc.get_object(id).and_then(Object::as_dict) {
            dicts.push(dict);
        }
    }

    dicts.iter().any(|dict| {
        dict.get(b"XObject")
            .ok()
            .and_then(|x| resolve_dict(doc, x))
            .map(|xobjects| {
                xobjects.iter().any(|(_, value)| {
                    resolve_stream_subtype(doc, value)
                        .map(|subtype| subtype == b"Image")
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
    })
}

fn resolve_dict<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Dictionary(dict) => Some(dict),
        Object::Reference(id) => doc.get_object(*id).ok().and_then(|o| o.as_dict().ok()),
        _ => None,
    }
}

fn resolve_stream_subtype<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a [u8]> {
    let stream = match object {
        Object::Stream(stream) => stream,
        Object::Reference(id) => doc.get_object(*id).ok().and_then(|o| o.as_stream().ok())?,
        _ => return None,
    };
    stream.dict.get(b"Subtype").ok().and_then(|s| s.as_name().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_bytes_yield_extract_error() {
        let err = extract_pdf(b"not a pdf at all").unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::Pdf(_)));
    }

    /// Build a single-page PDF with no content stream.
    fn minimal_pdf() -> Vec<u8> {
        use lopdf::dictionary;

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn empty_but_valid_pdf_yields_empty_text() {
        let extracted = extract_pdf(&minimal_pdf()).unwrap();
        assert!(extracted.is_empty());
        assert_eq!(*extracted.unit_count(), 1);
        assert!(!extracted.has_images());
    }
}
