//! Invoice generation
//!
//! The renderer lays out an estimate through the [`DocumentBuilder`] trait;
//! backends decide what the saved file looks like:
//! - `RecordedDocument`: in memory (previews, tests)
//! - `TextDocument`: plain text
//! - `HtmlDocument`: standalone HTML page

pub mod builder;
pub mod html;
pub mod recorded;
pub mod renderer;
pub mod text;

pub use builder::DocumentBuilder;
pub use html::HtmlDocument;
pub use recorded::{Block, RecordedDocument};
pub use renderer::{InvoiceRenderer, DEFAULT_INVOICE_FILENAME, INVOICE_TITLE};
pub use text::TextDocument;
