//! Normalization of table cell text.

use scraper::ElementRef;

/// The lone string inside an element, if there is exactly one.
///
/// An element whose only child is text yields that text; an element whose
/// only child is another element yields whatever that element yields.
/// Anything else (no children, or several) has no single string.
pub fn string<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let mut children = element.children();
    let (Some(only), None) = (children.next(), children.next()) else {
        return None;
    };
    if let Some(text) = only.value().as_text() {
        return Some(&**text);
    }
    ElementRef::wrap(only).and_then(string)
}

/// A cell's text with surrounding whitespace, colons and hyphens removed.
///
/// Cells with no single string (purely decorative cells, or cells mixing
/// text with markup) clean to an empty string.
pub fn clean(cell: ElementRef<'_>) -> String {
    string(cell).map(trim_decoration).unwrap_or_default().to_string()
}

fn trim_decoration(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == ':' || c == '-')
}
