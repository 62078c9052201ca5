//! # cvforge
//!
//! Regenerates a resume DOCX from a Markdown source, using an existing
//! document as the style template. Three file-driven steps: analyze the
//! source (formatting audit + style mapping), strip it into a reusable
//! template, then refill the template from Markdown.
//!
//! ## Example
//!
//! ```no_run
//! use cvforge::{CvGenerator, GenerateOptions};
//!
//! let options = GenerateOptions {
//!     markdown: "resume.md".into(),
//!     ..Default::default()
//! };
//!
//! CvGenerator::new(options).generate().unwrap();
//! ```

pub mod analyzer;
pub mod compose;
pub mod error;
pub mod markdown;
pub mod package;
pub mod style_map;
pub mod styles;
pub mod template;

pub use analyzer::{AnalyzeOptions, DocxAnalyzer};
pub use compose::{CvGenerator, GenerateOptions, DEFAULT_SKILLS_HEADING};
pub use error::{Error, Result};
pub use style_map::StyleMap;
pub use template::{TemplateBuilder, TemplateOptions};
