//! Markdown to HTML conversion.
//!
//! The pipeline only depends on the [`Converter`] trait; [`MarkdownConverter`]
//! is the pulldown-cmark implementation used by the binary.

use pulldown_cmark::{Options, Parser, html};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("markdown conversion failed: {0}")]
pub struct ConvertError(pub String);

pub trait Converter {
    fn convert(&self, markdown: &str) -> Result<String, ConvertError>;
}

/// CommonMark plus tables, footnotes, strikethrough and task lists. Raw HTML
/// in the source is passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
    }
}

impl Converter for MarkdownConverter {
    fn convert(&self, markdown: &str) -> Result<String, ConvertError> {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_paragraph() {
        let html = MarkdownConverter.convert("I have some content").unwrap();
        assert_eq!(html, "<p>I have some content</p>\n");
    }

    #[test]
    fn converts_emphasis() {
        let html = MarkdownConverter
            .convert("This is **bold** and *italic*.")
            .unwrap();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn raw_html_passes_through() {
        let html = MarkdownConverter
            .convert("<div class=\"note\">hi</div>\n")
            .unwrap();
        assert!(html.contains("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn tables_enabled() {
        let html = MarkdownConverter
            .convert("| a | b |\n|---|---|\n| 1 | 2 |\n")
            .unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(MarkdownConverter.convert("").unwrap(), "");
    }
}
