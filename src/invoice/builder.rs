//! Document-building interface
//!
//! The renderer only knows about headings, lines and saving. Pagination,
//! fonts and coordinates belong to the backend.

use crate::error::EstimatorResult;

/// Sequential document builder
pub trait DocumentBuilder {
    /// Append a heading
    fn heading(&mut self, text: &str);

    /// Append a line of body text
    fn line(&mut self, text: &str);

    /// Finalize the document under the given file name
    fn save(&mut self, filename: &str) -> EstimatorResult<()>;
}

impl<B: DocumentBuilder + ?Sized> DocumentBuilder for &mut B {
    fn heading(&mut self, text: &str) {
        (**self).heading(text)
    }

    fn line(&mut self, text: &str) {
        (**self).line(text)
    }

    fn save(&mut self, filename: &str) -> EstimatorResult<()> {
        (**self).save(filename)
    }
}

impl<B: DocumentBuilder + ?Sized> DocumentBuilder for Box<B> {
    fn heading(&mut self, text: &str) {
        (**self).heading(text)
    }

    fn line(&mut self, text: &str) {
        (**self).line(text)
    }

    fn save(&mut self, filename: &str) -> EstimatorResult<()> {
        (**self).save(filename)
    }
}
