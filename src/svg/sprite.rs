use std::collections::HashSet;
use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use super::markup::is_svg_markup;
use super::slug::name_to_slug;
use super::{SVG_NS, SvgError};

/// A single icon recovered from, or destined for, a sprite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteIcon {
    /// Display name; doubles as the symbol id when assembling.
    pub name: String,
    /// Standalone SVG markup.
    pub svg: String,
}

/// Root attributes that must not be carried onto generated `<symbol>`
/// elements: sizing belongs to the `<use>` site, namespaces to the sprite
/// root.
const SYMBOL_DROPPED_ATTRS: &[&[u8]] = &[b"width", b"height"];

/// Parse `<symbol>` elements out of an uploaded sprite file and re-wrap
/// each one as a standalone `<svg>` document.
///
/// The symbol's attributes (id, viewBox, …) are carried onto the generated
/// root. Duplicate markup is dropped. A document without any symbols is
/// treated as a single plain icon and returned unchanged.
pub fn extract_symbols(input: &str) -> Result<Vec<SpriteIcon>, SvgError> {
    if !is_svg_markup(input) {
        return Err(SvgError::NotSvg);
    }

    let mut reader = Reader::from_str(input);
    let mut icons: Vec<SpriteIcon> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    loop {
        match reader.read_event().map_err(SvgError::from)? {
            Event::Start(element) if element.local_name().as_ref() == b"symbol" => {
                let icon = wrap_symbol(&mut reader, &element, icons.len())?;
                if seen.insert(icon.svg.clone()) {
                    icons.push(icon);
                }
            }
            Event::Empty(element) if element.local_name().as_ref() == b"symbol" => {
                let icon = empty_symbol(&element, icons.len())?;
                if seen.insert(icon.svg.clone()) {
                    icons.push(icon);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if icons.is_empty() {
        icons.push(SpriteIcon {
            name: "icon-1".to_owned(),
            svg: input.to_owned(),
        });
    }

    Ok(icons)
}

/// Combine standalone icons into one `<svg><defs><symbol …/></defs></svg>`
/// sprite document.
///
/// Each icon's root element is rewritten to a `<symbol>` whose id is the
/// slugified icon name; root sizing attributes are dropped while `viewBox`
/// and friends are kept. Name collisions get a numeric suffix so every
/// symbol id stays addressable.
pub fn assemble_sprite(icons: &[SpriteIcon]) -> Result<String, SvgError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    writer
        .write_event(Event::Start(root))
        .map_err(quick_xml::Error::from)?;
    writer
        .write_event(Event::Start(BytesStart::new("defs")))
        .map_err(quick_xml::Error::from)?;

    let mut used_ids: HashSet<String> = HashSet::new();
    for icon in icons {
        let id = unique_symbol_id(&mut used_ids, &icon.name);
        append_symbol(&mut writer, &id, &icon.svg)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("defs")))
        .map_err(quick_xml::Error::from)?;
    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(quick_xml::Error::from)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(SvgError::Encoding)
}

/// Reserve a unique symbol id derived from `name`.
fn unique_symbol_id(used: &mut HashSet<String>, name: &str) -> String {
    let base = name_to_slug(name);
    if used.insert(base.clone()) {
        return base;
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{base}-{counter}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

/// Copy one icon into the sprite writer, rewriting its root `<svg>` into a
/// `<symbol id="…">`.
fn append_symbol(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    id: &str,
    svg: &str,
) -> Result<(), SvgError> {
    let mut reader = Reader::from_str(svg);

    loop {
        match reader.read_event().map_err(SvgError::from)? {
            Event::Start(element) if element.local_name().as_ref() == b"svg" => {
                writer
                    .write_event(Event::Start(symbol_start(id, &element)?))
                    .map_err(quick_xml::Error::from)?;
                copy_until_root_end(&mut reader, writer)?;
                writer
                    .write_event(Event::End(BytesEnd::new("symbol")))
                    .map_err(quick_xml::Error::from)?;
                return Ok(());
            }
            Event::Empty(element) if element.local_name().as_ref() == b"svg" => {
                writer
                    .write_event(Event::Empty(symbol_start(id, &element)?))
                    .map_err(quick_xml::Error::from)?;
                return Ok(());
            }
            Event::Eof => return Err(SvgError::NotSvg),
            _ => {}
        }
    }
}

/// Build the `<symbol>` start tag from an icon's root `<svg>` element.
fn symbol_start(id: &str, root: &BytesStart<'_>) -> Result<BytesStart<'static>, SvgError> {
    let mut symbol = BytesStart::new("symbol");
    symbol.push_attribute(("id", id));
    for attribute in root.attributes() {
        let attribute = attribute.map_err(SvgError::from)?;
        let key = attribute.key.as_ref();
        if key == b"id" || key.starts_with(b"xmlns") || SYMBOL_DROPPED_ATTRS.contains(&key) {
            continue;
        }
        symbol.push_attribute(attribute);
    }
    Ok(symbol.into_owned())
}

/// Stream the children of the current root element into `writer`, stopping
/// at (and consuming) the matching end tag.
fn copy_until_root_end(
    reader: &mut Reader<&[u8]>,
    writer: &mut Writer<Cursor<Vec<u8>>>,
) -> Result<(), SvgError> {
    let mut depth = 1usize;
    loop {
        match reader.read_event().map_err(SvgError::from)? {
            Event::Start(inner) => {
                if inner.local_name().as_ref() == b"svg" {
                    depth += 1;
                }
                writer
                    .write_event(Event::Start(inner))
                    .map_err(quick_xml::Error::from)?;
            }
            Event::End(end) => {
                if end.local_name().as_ref() == b"svg" {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                writer
                    .write_event(Event::End(end))
                    .map_err(quick_xml::Error::from)?;
            }
            Event::Eof => return Err(SvgError::UnclosedSymbol),
            other => writer
                .write_event(other)
                .map_err(quick_xml::Error::from)?,
        }
    }
}

/// Re-wrap one non-empty `<symbol>` as a standalone `<svg>` document,
/// consuming events up to its end tag.
fn wrap_symbol(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    index: usize,
) -> Result<SpriteIcon, SvgError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Start(svg_root_from_symbol(start)?))
        .map_err(quick_xml::Error::from)?;

    let mut depth = 1usize;
    loop {
        match reader.read_event().map_err(SvgError::from)? {
            Event::Start(inner) => {
                if inner.local_name().as_ref() == b"symbol" {
                    depth += 1;
                }
                writer
                    .write_event(Event::Start(inner))
                    .map_err(quick_xml::Error::from)?;
            }
            Event::End(end) => {
                if end.local_name().as_ref() == b"symbol" {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                writer
                    .write_event(Event::End(end))
                    .map_err(quick_xml::Error::from)?;
            }
            Event::Eof => return Err(SvgError::UnclosedSymbol),
            other => writer
                .write_event(other)
                .map_err(quick_xml::Error::from)?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(quick_xml::Error::from)?;

    Ok(SpriteIcon {
        name: symbol_name(start, index)?,
        svg: String::from_utf8(writer.into_inner().into_inner()).map_err(SvgError::Encoding)?,
    })
}

/// Re-wrap a self-closing `<symbol/>` as an empty `<svg/>` document.
fn empty_symbol(start: &BytesStart<'_>, index: usize) -> Result<SpriteIcon, SvgError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Empty(svg_root_from_symbol(start)?))
        .map_err(quick_xml::Error::from)?;
    Ok(SpriteIcon {
        name: symbol_name(start, index)?,
        svg: String::from_utf8(writer.into_inner().into_inner()).map_err(SvgError::Encoding)?,
    })
}

/// Build the standalone `<svg>` root carrying the symbol's attributes.
fn svg_root_from_symbol(symbol: &BytesStart<'_>) -> Result<BytesStart<'static>, SvgError> {
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    for attribute in symbol.attributes() {
        let attribute = attribute.map_err(SvgError::from)?;
        if attribute.key.as_ref().starts_with(b"xmlns") {
            continue;
        }
        root.push_attribute(attribute);
    }
    Ok(root.into_owned())
}

/// Icon name for an extracted symbol: its id, or a positional fallback.
fn symbol_name(symbol: &BytesStart<'_>, index: usize) -> Result<String, SvgError> {
    for attribute in symbol.attributes() {
        let attribute = attribute.map_err(SvgError::from)?;
        if attribute.key.as_ref() == b"id" {
            return Ok(String::from_utf8_lossy(&attribute.value).into_owned());
        }
    }
    Ok(format!("icon-{}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: &str = concat!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\"><defs>",
        "<symbol id=\"home\" viewBox=\"0 0 24 24\"><path d=\"M3 9l9-7 9 7\"/></symbol>",
        "<symbol id=\"search\" viewBox=\"0 0 24 24\"><circle cx=\"11\" cy=\"11\" r=\"8\"/></symbol>",
        "</defs></svg>",
    );

    #[test]
    fn extracts_every_symbol() {
        let icons = extract_symbols(SPRITE).unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].name, "home");
        assert_eq!(icons[1].name, "search");
        assert!(icons[0].svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(icons[0].svg.contains("viewBox=\"0 0 24 24\""));
        assert!(icons[0].svg.contains("<path d=\"M3 9l9-7 9 7\"/>"));
        assert!(icons[0].svg.ends_with("</svg>"));
    }

    #[test]
    fn plain_icon_passes_through() {
        let input = "<svg viewBox=\"0 0 16 16\"><rect width=\"16\" height=\"16\"/></svg>";
        let icons = extract_symbols(input).unwrap();
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].name, "icon-1");
        assert_eq!(icons[0].svg, input);
    }

    #[test]
    fn duplicate_symbols_are_dropped() {
        let input = concat!(
            "<svg><defs>",
            "<symbol id=\"a\"><path d=\"M0 0\"/></symbol>",
            "<symbol id=\"a\"><path d=\"M0 0\"/></symbol>",
            "</defs></svg>",
        );
        let icons = extract_symbols(input).unwrap();
        assert_eq!(icons.len(), 1);
    }

    #[test]
    fn rejects_non_svg_input() {
        assert!(matches!(
            extract_symbols("<html></html>"),
            Err(SvgError::NotSvg)
        ));
    }

    #[test]
    fn unnamed_symbols_get_positional_names() {
        let input = "<svg><symbol viewBox=\"0 0 8 8\"><path d=\"M1 1\"/></symbol></svg>";
        let icons = extract_symbols(input).unwrap();
        assert_eq!(icons[0].name, "icon-1");
    }

    #[test]
    fn assembles_symbols_with_slug_ids() {
        let icons = vec![
            SpriteIcon {
                name: "Home Filled".into(),
                svg: "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" \
                      viewBox=\"0 0 24 24\"><path d=\"M3 9l9-7 9 7\"/></svg>"
                    .into(),
            },
            SpriteIcon {
                name: "search".into(),
                svg: "<svg viewBox=\"0 0 24 24\"><circle cx=\"11\" cy=\"11\" r=\"8\"/></svg>".into(),
            },
        ];
        let sprite = assemble_sprite(&icons).unwrap();
        assert!(sprite.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\"><defs>"));
        assert!(sprite.contains("<symbol id=\"home-filled\" viewBox=\"0 0 24 24\">"));
        assert!(sprite.contains("<symbol id=\"search\" viewBox=\"0 0 24 24\">"));
        assert!(!sprite.contains("width=\"24\""));
        assert!(sprite.ends_with("</defs></svg>"));
    }

    #[test]
    fn colliding_names_get_suffixes() {
        let icon = |name: &str| SpriteIcon {
            name: name.into(),
            svg: "<svg viewBox=\"0 0 4 4\"><path d=\"M0 0\"/></svg>".into(),
        };
        let sprite = assemble_sprite(&[icon("star"), icon("Star "), icon("star")]).unwrap();
        assert!(sprite.contains("<symbol id=\"star\""));
        assert!(sprite.contains("<symbol id=\"star-2\""));
        assert!(sprite.contains("<symbol id=\"star-3\""));
    }

    #[test]
    fn empty_icon_becomes_empty_symbol() {
        let icons = vec![SpriteIcon {
            name: "blank".into(),
            svg: "<svg viewBox=\"0 0 1 1\"/>".into(),
        }];
        let sprite = assemble_sprite(&icons).unwrap();
        assert!(sprite.contains("<symbol id=\"blank\" viewBox=\"0 0 1 1\"/>"));
    }
}
