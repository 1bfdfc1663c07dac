//! PowerPoint slide-deck extraction.
//!
//! A `.pptx` file is a zip archive of XML parts; slide text lives in
//! `a:t` runs under `ppt/slides/slideN.xml` and speaker notes under
//! `ppt/notesSlides/notesSlideN.xml`.

use lectern_core::ExtractedText;
use lectern_error::{ExtractError, ExtractErrorKind, ExtractResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

const SLIDE_PREFIX: &str = "ppt/slides/slide";
const NOTES_PREFIX: &str = "ppt/notesSlides/notesSlide";

/// Extract text from PowerPoint slides.
///
/// Slides are walked in numeric order; within a slide, visible text
/// runs are concatenated in encounter order under a `--- Slide {n} ---`
/// block. Speaker notes are collected separately and never merged into
/// the main text. The unit count is the slide count.
pub fn extract_pptx(bytes: &[u8]) -> ExtractResult<ExtractedText> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::new(ExtractErrorKind::Slides(e.to_string())))?;

    let slide_parts = numbered_parts(&archive, SLIDE_PREFIX);
    let notes_parts = numbered_parts(&archive, NOTES_PREFIX);

    let mut blocks: Vec<String> = Vec::new();
    for (number, name) in &slide_parts {
        let xml = read_part(&mut archive, name)?;
        let slide_text = collect_text_runs(&xml)?;
        if !slide_text.trim().is_empty() {
            blocks.push(format!("--- Slide {} ---\n{}", number, slide_text));
        }
    }

    let mut notes: Vec<String> = Vec::new();
    for (number, name) in &notes_parts {
        let xml = read_part(&mut archive, name)?;
        let note_text = collect_text_runs(&xml)?;
        if !note_text.trim().is_empty() {
            notes.push(format!("Notes for Slide {}: {}", number, note_text));
        }
    }

    debug!(
        slides = slide_parts.len(),
        noted = notes.len(),
        "Extracted text from slide deck"
    );

    ExtractedText::builder()
        .text(blocks.join("\n\n"))
        .unit_count(slide_parts.len())
        .notes(notes.join("\n\n"))
        .build()
        .map_err(|e| ExtractError::new(ExtractErrorKind::Slides(e.to_string())))
}

/// List archive parts matching `{prefix}{N}.xml`, sorted by N.
fn numbered_parts(archive: &ZipArchive<Cursor<&[u8]>>, prefix: &str) -> Vec<(usize, String)> {
    let mut parts: Vec<(usize, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = name
                .strip_prefix(prefix)?
                .strip_suffix(".xml")?
                .parse::<usize>()
                .ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    parts.sort_unstable();
    parts
}

fn read_part(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> ExtractResult<String> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| ExtractError::new(ExtractErrorKind::Slides(e.to_string())))?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| ExtractError::new(ExtractErrorKind::Slides(e.to_string())))?;
    Ok(xml)
}

/// Gather `a:t` run contents in encounter order, one line per `a:p`
/// paragraph.
fn collect_text_runs(xml: &str) -> ExtractResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"a:t" => in_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"a:t" => in_run = false,
                b"a:p" => {
                    if !current.trim().is_empty() {
                        lines.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_run => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| ExtractError::new(ExtractErrorKind::Slides(e.to_string())))?;
                current.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::new(ExtractErrorKind::Slides(e.to_string())));
            }
        }
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_pptx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn slide_xml(paragraphs: &[&str]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", p))
            .collect();
        format!("<p:sld><p:txBody>{}</p:txBody></p:sld>", body)
    }

    #[test]
    fn malformed_bytes_yield_extract_error() {
        let err = extract_pptx(b"definitely not a zip").unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::Slides(_)));
    }

    #[test]
    fn slides_are_labeled_in_numeric_order() {
        // slide10 sorted after slide2, not lexicographically.
        let pptx = build_pptx(&[
            ("ppt/slides/slide10.xml", &slide_xml(&["tenth"])),
            ("ppt/slides/slide2.xml", &slide_xml(&["second"])),
            ("ppt/slides/slide1.xml", &slide_xml(&["first"])),
        ]);
        let extracted = extract_pptx(&pptx).unwrap();
        let text = extracted.text();
        assert!(text.contains("--- Slide 1 ---\nfirst"));
        assert!(text.find("second").unwrap() < text.find("tenth").unwrap());
        assert_eq!(*extracted.unit_count(), 3);
    }

    #[test]
    fn blank_slides_contribute_no_block() {
        let pptx = build_pptx(&[
            ("ppt/slides/slide1.xml", &slide_xml(&[])),
            ("ppt/slides/slide2.xml", &slide_xml(&["visible"])),
        ]);
        let extracted = extract_pptx(&pptx).unwrap();
        assert!(!extracted.text().contains("--- Slide 1 ---"));
        assert!(extracted.text().contains("--- Slide 2 ---"));
        assert_eq!(*extracted.unit_count(), 2);
    }

    #[test]
    fn speaker_notes_stay_out_of_main_text() {
        let pptx = build_pptx(&[
            ("ppt/slides/slide1.xml", &slide_xml(&["headline"])),
            (
                "ppt/notesSlides/notesSlide1.xml",
                &slide_xml(&["remember the demo"]),
            ),
        ]);
        let extracted = extract_pptx(&pptx).unwrap();
        assert!(!extracted.text().contains("remember the demo"));
        assert_eq!(
            extracted.notes(),
            "Notes for Slide 1: remember the demo"
        );
    }

    #[test]
    fn empty_but_valid_deck_yields_empty_text() {
        let pptx = build_pptx(&[("ppt/presentation.xml", "<p:presentation/>")]);
        let extracted = extract_pptx(&pptx).unwrap();
        assert!(extracted.is_empty());
        assert_eq!(*extracted.unit_count(), 0);
    }

    #[test]
    fn entity_escapes_are_decoded() {
        let pptx = build_pptx(&[(
            "ppt/slides/slide1.xml",
            &slide_xml(&["Q&amp;A &lt;session&gt;"]),
        )]);
        let extracted = extract_pptx(&pptx).unwrap();
        assert!(extracted.text().contains("Q&A <session>"));
    }
}
