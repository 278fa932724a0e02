use quick_xml::Reader;
use quick_xml::events::Event;

/// Check whether `input` is an SVG document: the first element (after any
/// prolog, comments, or doctype) must be `<svg>` and the markup up to that
/// point must parse.
pub fn is_svg_markup(input: &str) -> bool {
    let mut reader = Reader::from_str(input);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return element.local_name().as_ref() == b"svg";
            }
            Ok(Event::Decl(_))
            | Ok(Event::DocType(_))
            | Ok(Event::Comment(_))
            | Ok(Event::PI(_))
            | Ok(Event::Text(_)) => continue,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_svg() {
        assert!(is_svg_markup("<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>"));
        assert!(is_svg_markup("<svg/>"));
    }

    #[test]
    fn accepts_prolog_and_comments() {
        let input = "<?xml version=\"1.0\"?><!-- generated --><svg></svg>";
        assert!(is_svg_markup(input));
    }

    #[test]
    fn rejects_non_svg_roots() {
        assert!(!is_svg_markup("<html><body>nope</body></html>"));
        assert!(!is_svg_markup("just some text"));
        assert!(!is_svg_markup(""));
    }

    #[test]
    fn rejects_broken_markup() {
        assert!(!is_svg_markup("<svg<"));
    }
}
