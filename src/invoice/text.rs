//! Plain-text document backend

use std::path::Path;

use crate::error::{EstimatorError, EstimatorResult};

use super::builder::DocumentBuilder;

/// Plain-text document written to disk on save
///
/// Headings are underlined; a blank line separates sections.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    contents: String,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text accumulated so far
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl DocumentBuilder for TextDocument {
    fn heading(&mut self, text: &str) {
        if !self.contents.is_empty() {
            self.contents.push('\n');
        }
        self.contents.push_str(text);
        self.contents.push('\n');
        self.contents.push_str(&"=".repeat(text.chars().count()));
        self.contents.push('\n');
    }

    fn line(&mut self, text: &str) {
        self.contents.push_str(text);
        self.contents.push('\n');
    }

    fn save(&mut self, filename: &str) -> EstimatorResult<()> {
        std::fs::write(Path::new(filename), &self.contents).map_err(|e| {
            EstimatorError::Export(format!("Failed to write {}: {}", filename, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout() {
        let mut doc = TextDocument::new();
        doc.heading("Expenses");
        doc.line("Server: 1000 DA");
        doc.heading("Features");

        assert_eq!(
            doc.contents(),
            "Expenses\n========\nServer: 1000 DA\n\nFeatures\n========\n"
        );
    }

    #[test]
    fn test_save_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("estimate.txt");

        let mut doc = TextDocument::new();
        doc.line("Total: 1200 DA");
        doc.save(path.to_str().unwrap()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Total: 1200 DA\n");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("estimate.txt");

        let mut doc = TextDocument::new();
        let err = doc.save(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, EstimatorError::Export(_)));
    }
}
