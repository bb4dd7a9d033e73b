//! specdoc document and configuration types.
//!
//! This crate provides the in-memory document tree and the run configuration
//! consumed by the specdoc lint system. The document is an arena-backed
//! element tree built programmatically by the build pipeline; HTML parsing
//! and serialization live outside this crate.
//!
//! # Example
//!
//! ```
//! use specdoc_doc::Document;
//!
//! let mut doc = Document::new();
//! let section = doc.create_element("section");
//! let heading = doc.create_element("h2");
//! doc.append_text(heading, "Introduction");
//! doc.append_child(section, heading);
//! doc.append_child(doc.root(), section);
//!
//! assert_eq!(doc.query_all(&["section"]).len(), 1);
//! assert_eq!(doc.text_content(heading), "Introduction");
//! ```
//!
//! # Modules
//!
//! - [`config`]: Run configuration and lint enablement flags
//! - [`document`]: Arena-backed element tree

pub mod config;
pub mod document;

pub use config::{Config, LintConfig, RuleFlag};
pub use document::{Document, NodeId};
