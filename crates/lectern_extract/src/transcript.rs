//! Transcript extraction: plain text and WebVTT captions.

use lectern_core::ExtractedText;
use lectern_error::{ExtractError, ExtractErrorKind, ExtractResult};

/// Extract a plain-text transcript, passed through unchanged.
pub fn extract_plain(bytes: &[u8]) -> ExtractResult<ExtractedText> {
    let text = decode(bytes)?;
    let lines = text.lines().count();
    ExtractedText::builder()
        .text(text)
        .unit_count(lines)
        .build()
        .map_err(|e| ExtractError::new(ExtractErrorKind::Transcript(e.to_string())))
}

/// Extract a WebVTT caption transcript, stripping cue scaffolding.
pub fn extract_vtt(bytes: &[u8]) -> ExtractResult<ExtractedText> {
    let text = clean_vtt(&decode(bytes)?);
    let lines = text.lines().count();
    ExtractedText::builder()
        .text(text)
        .unit_count(lines)
        .build()
        .map_err(|e| ExtractError::new(ExtractErrorKind::Transcript(e.to_string())))
}

fn decode(bytes: &[u8]) -> ExtractResult<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ExtractError::new(ExtractErrorKind::Transcript(e.to_string())))
}

/// Strip WebVTT scaffolding, keeping only spoken lines in order.
///
/// Removes the `WEBVTT` header line, cue-timing lines (containing the
/// `-->` range marker), bare numeric cue-identifier lines, and
/// annotation blocks (`NOTE`, `STYLE`, `REGION` leaders with their
/// continuation lines). Remaining lines are joined with newlines.
/// Feeding already-cleaned text back through returns it unchanged.
///
/// # Examples
///
/// ```
/// use lectern_extract::clean_vtt;
///
/// let vtt = "WEBVTT\n\n1\n00:00:00.000 --> 00:00:02.000\nHello everyone\n\n2\n00:00:02.000 --> 00:00:04.000\nWelcome to the talk\n";
/// assert_eq!(clean_vtt(vtt), "Hello everyone\nWelcome to the talk");
/// ```
pub fn clean_vtt(input: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_annotation = false;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            in_annotation = false;
            continue;
        }
        if in_annotation {
            continue;
        }
        if trimmed.starts_with("WEBVTT") {
            continue;
        }
        if trimmed.contains("-->") {
            continue;
        }
        if is_annotation_leader(trimmed) {
            in_annotation = true;
            continue;
        }
        if is_cue_identifier(trimmed) {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

/// Leader line of a WebVTT annotation block.
fn is_annotation_leader(line: &str) -> bool {
    ["NOTE", "STYLE", "REGION"]
        .iter()
        .any(|leader| line == *leader || line.starts_with(&format!("{} ", leader)))
}

/// Bare numeric cue-identifier line.
fn is_cue_identifier(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::ContentSource;

    const SAMPLE_VTT: &str = "WEBVTT\n\
\n\
NOTE This file was auto-generated\n\
spanning two lines\n\
\n\
1\n\
00:00:00.000 --> 00:00:02.500\n\
Hello everyone, welcome\n\
\n\
2\n\
00:00:02.500 --> 00:00:05.000\n\
to our session on Rust\n";

    #[test]
    fn strips_header_timings_ids_and_annotations() {
        let cleaned = clean_vtt(SAMPLE_VTT);
        assert_eq!(cleaned, "Hello everyone, welcome\nto our session on Rust");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = clean_vtt(SAMPLE_VTT);
        assert_eq!(clean_vtt(&once), once);
    }

    #[test]
    fn plain_prose_passes_through_cleaner_unchanged() {
        let prose = "First spoken line\nsecond spoken line\nthird line";
        assert_eq!(clean_vtt(prose), prose);
    }

    #[test]
    fn plain_transcript_is_untouched() {
        let source = ContentSource::Transcript {
            bytes: b"line one\n\nline three".to_vec(),
            extension: "txt".to_string(),
        };
        let extracted = crate::extract(&source).unwrap();
        assert_eq!(extracted.text(), "line one\n\nline three");
        assert_eq!(*extracted.unit_count(), 3);
    }

    #[test]
    fn empty_transcripts_yield_empty_text_without_error() {
        for ext in ["txt", "vtt"] {
            let source = ContentSource::Transcript {
                bytes: Vec::new(),
                extension: ext.to_string(),
            };
            let extracted = crate::extract(&source).unwrap();
            assert!(extracted.is_empty());
            assert_eq!(*extracted.unit_count(), 0);
        }
    }

    #[test]
    fn invalid_utf8_is_an_extract_error() {
        let source = ContentSource::Transcript {
            bytes: vec![0xff, 0xfe, 0x00],
            extension: "txt".to_string(),
        };
        let err = crate::extract(&source).unwrap_err();
        assert!(matches!(err.kind, ExtractErrorKind::Transcript(_)));
    }
}
