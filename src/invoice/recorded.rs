//! In-memory document
//!
//! Records every block it receives. Used for previews and tests.

use crate::error::EstimatorResult;

use super::builder::DocumentBuilder;

/// A block of document content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Line(String),
}

impl Block {
    /// The block's text
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(text) | Self::Line(text) => text,
        }
    }
}

/// Document kept in memory
#[derive(Debug, Clone, Default)]
pub struct RecordedDocument {
    blocks: Vec<Block>,
    saved_as: Option<String>,
}

impl RecordedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks in the order they were added
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Text of all blocks, one per line
    pub fn lines(&self) -> Vec<&str> {
        self.blocks.iter().map(Block::text).collect()
    }

    /// File name passed to `save`, if it was called
    pub fn saved_as(&self) -> Option<&str> {
        self.saved_as.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl DocumentBuilder for RecordedDocument {
    fn heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading(text.to_string()));
    }

    fn line(&mut self, text: &str) {
        self.blocks.push(Block::Line(text.to_string()));
    }

    fn save(&mut self, filename: &str) -> EstimatorResult<()> {
        self.saved_as = Some(filename.to_string());
        Ok(())
    }
}
