//! Artifact generation.
//!
//! The driver runs in two passes over a [`CompilationRequest`]:
//!
//! ```text
//! register   every top-level message of every file → NamespaceTree
//!     │
//!     ▼
//! generate   for each target file, for each message:
//!              extract_directive → artifact name → ArtifactFormatter
//! ```
//!
//! Files that are not targets still take part in the first pass so their
//! types can be referenced from target files.
//!
//! [`CompilationRequest`]: crate::schema::CompilationRequest

mod config;
mod directive;
mod driver;
mod error;
mod formatter;

pub use config::{ContentKind, GeneratorConfig};
pub use directive::{Directive, extract_directive};
pub use driver::{Generator, artifact_name, generate};
pub use error::GenerateError;
pub use formatter::{
    ArtifactContext, ArtifactFormatter, PLACEHOLDER_CONTENT, PlaceholderFormatter,
    SchemaFormatter,
};
