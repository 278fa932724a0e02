//! SVG sprite processing: symbol extraction, sprite assembly, and the
//! markup/naming helpers both sides share.

/// Markup validation helpers.
pub mod markup;
/// File and symbol-id slug helpers.
pub mod slug;
/// Sprite assembly and symbol extraction.
pub mod sprite;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// XML namespace stamped on every generated `<svg>` root.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Failures raised while parsing or rewriting SVG markup.
#[derive(Debug, Error)]
pub enum SvgError {
    /// The input is not an SVG document.
    #[error("input is not an SVG document")]
    NotSvg,
    /// The XML structure is broken (unclosed element, stray end tag, …).
    #[error("malformed SVG markup")]
    Malformed(#[source] quick_xml::Error),
    /// An attribute could not be decoded.
    #[error("malformed SVG attribute")]
    Attribute(#[source] AttrError),
    /// A `<symbol>` element is never closed.
    #[error("unclosed <symbol> element")]
    UnclosedSymbol,
    /// The rewritten markup is not valid UTF-8 (never expected for SVG).
    #[error("rewritten markup is not valid UTF-8")]
    Encoding(#[source] std::string::FromUtf8Error),
}

impl From<quick_xml::Error> for SvgError {
    fn from(err: quick_xml::Error) -> Self {
        SvgError::Malformed(err)
    }
}

impl From<AttrError> for SvgError {
    fn from(err: AttrError) -> Self {
        SvgError::Attribute(err)
    }
}
