//! Cost Estimator - project cost estimation and invoice generation
//!
//! This library keeps two ledgers (monthly expenses and feature line items),
//! applies a tax regime and renders the result either as a terminal summary
//! or as an invoice document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, features, tax configuration)
//! - `services`: Ledgers, cost aggregation and the estimate session
//! - `invoice`: Invoice rendering and document backends
//! - `display`: Money formatting and terminal tables
//! - `export`: Estimate sheets (input) and JSON/YAML/CSV export
//! - `cli`: Command handlers for the `estimate` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use cost_estimator::invoice::{InvoiceRenderer, TextDocument};
//! use cost_estimator::models::Complexity;
//! use cost_estimator::services::EstimateSession;
//!
//! let mut session = EstimateSession::new();
//! session.add_expense("Server", 1000.0)?;
//! session.add_feature("Auth", Complexity::Medium, 10.0, 50.0)?;
//!
//! let mut doc = TextDocument::new();
//! session.render_invoice("ACME", &InvoiceRenderer::default(), &mut doc)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod invoice;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{EstimatorError, EstimatorResult};
