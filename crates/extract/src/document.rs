//! Decoding and lenient parsing of raw page content.

use std::borrow::Cow;

use encoding_rs::Encoding;
use exn::OptionExt;
use scraper::Html;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// A parsed, read-only inspection results page.
///
/// Parsing follows the HTML5 tree-construction rules (via `html5ever`), so
/// unclosed cells, stray tags and missing `<tbody>` elements are repaired the
/// same way a browser would repair them.
#[derive(Debug)]
pub struct Document {
    html: Html,
}
impl Document {
    /// Decodes `content` under the declared `encoding` and parses it.
    ///
    /// Decoding is strict: bytes that are malformed for the declared encoding
    /// fail with [`ErrorKind::Decode`] instead of being replaced, and no other
    /// encoding is ever tried in its place.
    #[instrument(skip(content), fields(content_size = content.as_ref().len()))]
    pub fn parse(content: impl AsRef<[u8]>, encoding: &str) -> Result<Self> {
        let text = decode(content.as_ref(), encoding)?;
        Ok(Self::from_html(&text))
    }

    /// Parses markup that has already been decoded.
    pub fn from_html(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}
impl From<Html> for Document {
    fn from(html: Html) -> Self {
        Self { html }
    }
}

/// Strictly decodes `content` using the encoding named by `label`.
///
/// Labels are resolved with the WHATWG rules, so `latin1`, `ISO-8859-1` and
/// `windows-1252` all name the same decoder. A byte order mark is only
/// skipped when it agrees with the declared encoding.
pub(crate) fn decode<'a>(content: &'a [u8], label: &str) -> Result<Cow<'a, str>> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_raise(|| ErrorKind::UnknownEncoding(label.to_string()))?;
    let content = match Encoding::for_bom(content) {
        Some((bom_encoding, bom_length)) if bom_encoding == encoding => &content[bom_length..],
        _ => content,
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(content)
        .ok_or_raise(|| ErrorKind::Decode {
            encoding: encoding.name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"<p>plain</p>".as_slice(), "utf-8", "<p>plain</p>")]
    #[case(b"<p>caf\xc3\xa9</p>".as_slice(), "UTF-8", "<p>caf\u{e9}</p>")]
    #[case(b"<p>caf\xe9</p>".as_slice(), "ISO-8859-1", "<p>caf\u{e9}</p>")]
    #[case(b"<p>caf\xe9</p>".as_slice(), " latin1 ", "<p>caf\u{e9}</p>")]
    #[case(b"\xef\xbb\xbf<p>bom</p>".as_slice(), "utf-8", "<p>bom</p>")]
    fn test_decode(#[case] content: &[u8], #[case] label: &str, #[case] expected: &str) {
        assert_eq!(decode(content, label).unwrap(), expected);
    }

    #[test]
    fn test_decode_rejects_malformed_bytes() {
        let err = decode(b"<p>caf\xe9</p>", "utf-8").unwrap_err();
        assert_eq!(*err, ErrorKind::Decode { encoding: "UTF-8" });
    }

    #[test]
    fn test_decode_rejects_unknown_label() {
        let err = decode(b"<p></p>", "klingon").unwrap_err();
        assert_eq!(*err, ErrorKind::UnknownEncoding("klingon".to_string()));
    }

    #[test]
    fn test_parse_repairs_broken_markup() {
        let document = Document::parse(b"<table><tr><td>one<td>two</table>", "utf-8").unwrap();
        let tbody = scraper::Selector::parse("table > tbody > tr > td").unwrap();
        assert_eq!(document.html().select(&tbody).count(), 2);
    }
}
