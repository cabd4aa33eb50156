//! Wrapping rendered SVG fragments as self-contained inline HTML

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

/// How a rendered fragment is substituted into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Insert the fragment text as-is
    #[default]
    Raw,
    /// Treat the fragment as SVG and wrap it in an `<img>` tag with a
    /// base64 `data:` URI
    Image,
}

/// Build an HTML `<img>` tag embedding `svg` as a base64 data URI.
///
/// The source markup is HTML-escaped into `alt` and `title` so the
/// original fragment survives in the output document. The XML prolog, if
/// present, is stripped before encoding.
pub fn inline_image(markup: &str, svg: &str) -> String {
    let encoded = STANDARD.encode(strip_xml_prolog(svg).as_bytes());
    let escaped = escape_html(markup).replace('\n', "&#13;&#10;");

    format!(
        r#"<img alt="{escaped}" title="{escaped}" src="data:image/svg+xml;base64,{encoded}">"#
    )
}

fn strip_xml_prolog(svg: &str) -> &str {
    if let Some(rest) = svg.strip_prefix("<?xml") {
        match rest.find("?>") {
            Some(end) => rest[end + 2..].trim_start_matches(['\r', '\n']),
            None => svg,
        }
    } else {
        svg
    }
}

/// Escape special HTML characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"x="1""#), "x=&quot;1&quot;");
    }

    #[test]
    fn test_strip_xml_prolog() {
        let svg = "<?xml version=\"1.0\"?>\n<svg/>";
        assert_eq!(strip_xml_prolog(svg), "<svg/>");
        assert_eq!(strip_xml_prolog("<svg/>"), "<svg/>");
    }

    #[test]
    fn test_inline_image_encodes_svg() {
        let tag = inline_image("\\LaTeX", "<svg/>");
        // base64("<svg/>") == "PHN2Zy8+"
        assert_eq!(
            tag,
            r#"<img alt="\LaTeX" title="\LaTeX" src="data:image/svg+xml;base64,PHN2Zy8+">"#
        );
    }

    #[test]
    fn test_inline_image_escapes_multiline_markup() {
        let tag = inline_image("a < b\nc", "<svg/>");
        assert!(tag.contains("a &lt; b&#13;&#10;c"));
    }

    #[test]
    fn test_wrap_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            wrap: WrapMode,
        }
        let probe: Probe = toml::from_str("wrap = \"image\"").unwrap();
        assert_eq!(probe.wrap, WrapMode::Image);
        assert_eq!(WrapMode::default(), WrapMode::Raw);
    }
}
