/// Free-text notes of the reaction table end up as XHTML notes, so they must
/// be well-formed XML content: tags balanced and correctly nested, and every
/// `&` starting one of the five predefined XML entities or a character
/// reference. XHTML named entities such as `&nbsp;` are not accepted.
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9A-Fa-f]+);").unwrap());

#[derive(Debug, Error, PartialEq)]
pub enum NotesError {
    #[error("malformed XML in notes '{text}': {reason}")]
    Malformed { text: String, reason: String },
}

fn malformed(text: &str, reason: impl Into<String>) -> NotesError {
    NotesError::Malformed {
        text: text.to_string(),
        reason: reason.into(),
    }
}

pub fn check_notes(text: &str) -> Result<(), NotesError> {
    for (position, _) in text.match_indices('&') {
        if !REFERENCE.is_match(&text[position..]) {
            return Err(malformed(text, format!("'&' at position {} starts no known reference", position)));
        }
    }

    let mut reader = Reader::from_str(text);
    reader.config_mut().check_end_names = true;
    let mut depth: usize = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(end)) => {
                if depth == 0 {
                    return Err(malformed(
                        text,
                        format!(
                            "closing tag '{}' without opening tag",
                            String::from_utf8_lossy(end.name().as_ref())
                        ),
                    ));
                }
                depth -= 1;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(text, e.to_string())),
        }
    }
    if depth > 0 {
        return Err(malformed(text, format!("{} unclosed tag(s)", depth)));
    }
    Ok(())
}
