//! # pipegen
//!
//! A `protoc` plugin that emits one topic schema per annotated message.
//!
//! Messages opt in through a custom `MessageOptions` annotation carrying a
//! pub/sub topic name. For every such message in a file `protoc` asks us to
//! generate, the plugin writes `<package dirs>/<topic>.schema`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! plugin     → Process boundary: read request, write response
//!   ↓
//! generate   → Directive extraction, formatters, generation driver
//!   ↓
//! namespace  → Package namespace tree, type resolution
//!   ↓
//! schema     → Decoded request/response model, wire envelope
//!   ↓
//! base       → Dotted path primitives
//! ```

// ============================================================================
// MODULES (dependency order: base → schema → namespace → generate → plugin)
// ============================================================================

/// Foundation: dotted path helpers
pub mod base;

/// Schema: decoded declarations, request and response, wire envelope
pub mod schema;

/// Namespace tree and type resolver
pub mod namespace;

/// Artifact generation: directives, formatters, driver
pub mod generate;

/// Process boundary: stdin request → stdout response
pub mod plugin;

// Re-export the types most callers need
pub use generate::{Directive, GenerateError, Generator, GeneratorConfig, extract_directive};
pub use namespace::{NamespaceId, NamespaceTree, ResolveResult, Resolver};
pub use schema::{CompilationRequest, CompilationResponse, FileDecl, MessageDecl, OutputFile};
