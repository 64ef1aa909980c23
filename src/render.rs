//! Markup rendering boundary.
//!
//! Interview prose mixes template expressions, Markdown, and stray HTML.
//! Metrics want plain text, and a rendering hiccup must never take down a
//! lint run, so the worst case here is degraded (possibly empty) output.

use once_cell::sync::Lazy;
use regex::Regex;

static TEMPLATE_EXPR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());
static TEMPLATE_CONTROL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*%.*$").unwrap());
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static MD_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static MD_EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_]{1,3}([^*_]+)[*_]{1,3}").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse template syntax, Markdown, and HTML into plain text.
///
/// Unclosed or malformed constructs simply fail to match and pass through;
/// nothing in here can error.
pub fn render_plain_text(markup: &str) -> String {
    let text = TEMPLATE_CONTROL_RE.replace_all(markup, "");
    let text = TEMPLATE_EXPR_RE.replace_all(&text, "");
    let text = MD_LINK_RE.replace_all(&text, "$1");
    let text = MD_EMPHASIS_RE.replace_all(&text, "$1");
    let text = HTML_TAG_RE.replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text).to_string();
    WHITESPACE_RE.replace_all(text.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_template_expressions_and_control_lines() {
        let markup = "Hello ${ user.name }!\n% if user.minor:\nA guardian must sign.\n% endif\n";
        assert_eq!(render_plain_text(markup), "Hello ! A guardian must sign.");
    }

    #[test]
    fn collapses_markdown_and_html() {
        let markup = "See the **court** <b>form</b> [here](https://example.com) &amp; sign.";
        assert_eq!(render_plain_text(markup), "See the court form here & sign.");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render_plain_text("Do you want help?"), "Do you want help?");
    }
}
