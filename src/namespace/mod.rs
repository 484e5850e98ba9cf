//! Package namespace tree and type resolution.
//!
//! Every message declared at the top level of any input file is registered
//! into a [`NamespaceTree`] keyed by its package path. The [`Resolver`] then
//! answers type references the way the host compiler does:
//!
//! - `.a.b.C` is absolute and resolved from the root only
//! - `b.C` is relative and resolved from the current scope outwards, so the
//!   closest enclosing namespace shadows outer ones
//! - `a.Outer.Inner` descends into `Outer`'s nested declarations once a
//!   message is reached
//!
//! The whole tree must be built before the first lookup; resolving against a
//! partially registered tree gives wrong answers, not just missing ones.
mod resolve;
mod tree;

pub use resolve::{ResolveResult, ResolvedType, Resolver};
pub use tree::{Namespace, NamespaceId, NamespaceTree};
