//! HTML document backend
//!
//! The first heading becomes the page title (`<h1>`), later ones `<h2>`.

use std::path::Path;

use crate::error::{EstimatorError, EstimatorResult};

use super::builder::DocumentBuilder;

/// Minimal standalone HTML document
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    title: Option<String>,
    body: String,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full HTML page for the content so far
    pub fn render(&self) -> String {
        let title = self.title.as_deref().unwrap_or_default();
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(title),
            self.body
        )
    }
}

impl DocumentBuilder for HtmlDocument {
    fn heading(&mut self, text: &str) {
        let tag = if self.title.is_none() {
            self.title = Some(text.to_string());
            "h1"
        } else {
            "h2"
        };
        self.body
            .push_str(&format!("<{tag}>{}</{tag}>\n", escape_html(text)));
    }

    fn line(&mut self, text: &str) {
        self.body.push_str(&format!("<p>{}</p>\n", escape_html(text)));
    }

    fn save(&mut self, filename: &str) -> EstimatorResult<()> {
        std::fs::write(Path::new(filename), self.render()).map_err(|e| {
            EstimatorError::Export(format!("Failed to write {}: {}", filename, e))
        })
    }
}

/// Escape text for inclusion in HTML
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let mut doc = HtmlDocument::new();
        doc.heading("Project Cost Estimate");
        doc.heading("Expenses");
        doc.line("Server: 1000 DA");

        let html = doc.render();
        assert!(html.contains("<title>Project Cost Estimate</title>"));
        assert!(html.contains("<h1>Project Cost Estimate</h1>"));
        assert!(html.contains("<h2>Expenses</h2>"));
        assert!(html.contains("<p>Server: 1000 DA</p>"));
    }

    #[test]
    fn test_escaping() {
        let mut doc = HtmlDocument::new();
        doc.line("R&D <beta>");
        assert!(doc.render().contains("<p>R&amp;D &lt;beta&gt;</p>"));
    }
}
