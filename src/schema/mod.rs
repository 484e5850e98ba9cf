//! Schema — the decoded compilation request and response.
//!
//! The plugin never works on raw descriptors. [`wire`] decodes the
//! `CodeGeneratorRequest` envelope once, including the custom pipe
//! annotation on message options, and everything above this layer works on
//! the plain declarations defined here.
//!
//! ## Key Types
//!
//! - [`CompilationRequest`] — input files plus the set of target file names
//! - [`FileDecl`] — one input file: name, package, top-level messages
//! - [`MessageDecl`] — one message declaration, possibly with nested types
//! - [`CompilationResponse`] — generated artifacts and an optional error

mod model;
pub mod wire;

pub use model::{
    CompilationRequest, CompilationResponse, FieldDecl, FieldKind, FieldLabel, FileDecl,
    MessageDecl, MessageOptions, OutputFile, PipeOptions,
};
pub use wire::PIPE_OPTIONS_EXTENSION;
