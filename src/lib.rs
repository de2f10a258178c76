//! Svgscribe - a streaming, indentation-aware SVG/XML writer
//!
//! Markup is emitted incrementally to an output stream as the caller nests
//! [`XmlWriter::element`] calls; there is no intermediate tree. On top of
//! the writer sit a small polyline shape model and an SVG document
//! assembler that renders shapes into `<path>` elements.
//!
//! # Example
//!
//! ```rust
//! use svgscribe::{write_document, DocStyle, Path};
//!
//! let mut out = Vec::new();
//! write_document(&mut out, &[Path::example()], &DocStyle::default()).unwrap();
//!
//! let svg = String::from_utf8(out).unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("M10 10 L10 90 L90 10 Z"));
//! ```

pub mod document;
pub mod error;
pub mod server;
pub mod shape;
pub mod writer;

pub use document::{write_document, DocStyle, StyleError, SVG_NS};
pub use error::WriteError;
pub use server::{serve, ServeError};
pub use shape::{Path, Vertex};
pub use writer::XmlWriter;
