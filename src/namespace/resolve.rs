//! Type resolution against a fully built [`NamespaceTree`].

use tracing::trace;

use super::tree::{NamespaceId, NamespaceTree};
use crate::base::{PACKAGE_SEPARATOR, qualify, split_first, strip_absolute};
use crate::schema::MessageDecl;

/// A successfully resolved type reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedType<'a> {
    /// The resolved declaration, borrowed from the request.
    pub message: &'a MessageDecl,
    /// Fully qualified name in leading-dot form (`.pkg.Outer.Inner`).
    pub qualified_name: String,
}

/// Result of resolving a type reference.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolveResult<'a> {
    /// Successfully resolved to a declaration.
    Found(ResolvedType<'a>),
    /// No declaration matches the reference from the given scope.
    NotFound,
}

impl<'a> ResolveResult<'a> {
    /// Get the resolved declaration, if any.
    pub fn message(&self) -> Option<&'a MessageDecl> {
        match self {
            ResolveResult::Found(resolved) => Some(resolved.message),
            ResolveResult::NotFound => None,
        }
    }

    /// Get the fully qualified name of the resolved declaration, if any.
    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            ResolveResult::Found(resolved) => Some(&resolved.qualified_name),
            ResolveResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }

    pub fn into_resolved(self) -> Option<ResolvedType<'a>> {
        match self {
            ResolveResult::Found(resolved) => Some(resolved),
            ResolveResult::NotFound => None,
        }
    }
}

/// Resolver for type references.
///
/// Resolution is a pure function of the tree and the query: nothing is
/// cached and the tree is never mutated.
pub struct Resolver<'t, 'a> {
    tree: &'t NamespaceTree<'a>,
}

impl<'t, 'a> Resolver<'t, 'a> {
    pub fn new(tree: &'t NamespaceTree<'a>) -> Self {
        Self { tree }
    }

    // ============================================================
    // Primary Resolution API
    // ============================================================

    /// Resolve `reference` as seen from `scope`.
    ///
    /// Absolute references (leading dot) are looked up from the root only.
    /// Relative references are tried at `scope`, then at each enclosing
    /// namespace up to the root; the first match wins.
    pub fn resolve(&self, scope: NamespaceId, reference: &str) -> ResolveResult<'a> {
        if reference.is_empty() {
            trace!("[RESOLVE] empty type reference");
            return ResolveResult::NotFound;
        }

        if let Some(absolute) = strip_absolute(reference) {
            return self.resolve_local(NamespaceId::ROOT, absolute);
        }

        let mut current = Some(scope);
        while let Some(id) = current {
            let result = self.resolve_local(id, reference);
            if result.is_found() {
                return result;
            }
            current = self.tree.parent(id);
        }
        ResolveResult::NotFound
    }

    /// Resolve `reference` as seen from inside `message`.
    ///
    /// `message` is a top-level declaration of `scope` whose fully qualified
    /// name is `qualified_name`. Relative references are tried against the
    /// message's nested types first, then from `scope` outwards as in
    /// [`resolve`](Self::resolve). Absolute references ignore the message.
    pub fn resolve_from_message(
        &self,
        scope: NamespaceId,
        message: &'a MessageDecl,
        qualified_name: &str,
        reference: &str,
    ) -> ResolveResult<'a> {
        if !reference.is_empty() && strip_absolute(reference).is_none() {
            let nested = Self::resolve_nested(message, qualified_name.to_string(), reference);
            if nested.is_found() {
                return nested;
            }
        }
        self.resolve(scope, reference)
    }

    /// Resolve `reference` inside `scope` without falling back to parents.
    ///
    /// Leading segments descend into child namespaces; once a segment names
    /// a message declared in the current namespace, the remaining segments
    /// are looked up among its nested types.
    pub fn resolve_local(&self, scope: NamespaceId, reference: &str) -> ResolveResult<'a> {
        let mut current = scope;
        let mut remaining = reference;
        loop {
            let namespace = self.tree.get(current);
            let (first, rest) = split_first(remaining);
            let Some(rest) = rest else {
                return match namespace.local_type(first) {
                    Some(message) => ResolveResult::Found(ResolvedType {
                        message,
                        qualified_name: qualify(namespace.qualified_name(), first),
                    }),
                    None => ResolveResult::NotFound,
                };
            };

            trace!(
                "[RESOLVE] looking for '{}' in '{}' at '{}'",
                rest,
                first,
                namespace.qualified_name()
            );
            if let Some(child) = namespace.child(first) {
                current = child;
                remaining = rest;
                continue;
            }
            if let Some(message) = namespace.local_type(first) {
                let qualified_name = qualify(namespace.qualified_name(), first);
                return Self::resolve_nested(message, qualified_name, rest);
            }
            trace!(
                "[RESOLVE] no such package nor message '{}' in '{}'",
                first,
                namespace.qualified_name()
            );
            return ResolveResult::NotFound;
        }
    }

    /// Walk `path` through the nested declarations of `message`.
    ///
    /// Every segment must name a direct nested type of the previous one.
    fn resolve_nested(
        message: &'a MessageDecl,
        mut qualified_name: String,
        path: &str,
    ) -> ResolveResult<'a> {
        let mut current = message;
        for segment in path.split(PACKAGE_SEPARATOR) {
            let Some(nested) = current.nested(segment) else {
                trace!(
                    "[RESOLVE] no such nested message '{}' in '{}'",
                    segment,
                    current.name
                );
                return ResolveResult::NotFound;
            };
            qualified_name = qualify(&qualified_name, segment);
            current = nested;
        }
        ResolveResult::Found(ResolvedType {
            message: current,
            qualified_name,
        })
    }
}
