use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{package_segments, qualify};
use crate::schema::MessageDecl;

/// Unique identifier for a namespace in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceId(u32);

impl NamespaceId {
    /// The root namespace, present in every tree.
    pub const ROOT: NamespaceId = NamespaceId(0);

    fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One package scope.
#[derive(Debug)]
pub struct Namespace<'a> {
    /// Dotted path from the root (`.a.b`); empty for the root.
    qualified_name: String,
    /// Enclosing namespace. Lookup-only; the arena owns every node.
    parent: Option<NamespaceId>,
    /// Child namespaces by single path segment.
    children: FxHashMap<&'a str, NamespaceId>,
    /// Messages declared directly in this package, by short name.
    local_types: FxHashMap<&'a str, &'a MessageDecl>,
}

impl<'a> Namespace<'a> {
    fn new(qualified_name: String, parent: Option<NamespaceId>) -> Self {
        Self {
            qualified_name,
            parent,
            children: FxHashMap::default(),
            local_types: FxHashMap::default(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn parent(&self) -> Option<NamespaceId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Get a child namespace by segment name.
    pub fn child(&self, segment: &str) -> Option<NamespaceId> {
        self.children.get(segment).copied()
    }

    /// Get a message declared directly in this namespace.
    pub fn local_type(&self, name: &str) -> Option<&'a MessageDecl> {
        self.local_types.get(name).copied()
    }

    /// Iterate the messages declared directly in this namespace.
    pub fn local_types(&self) -> impl Iterator<Item = &'a MessageDecl> + '_ {
        self.local_types.values().copied()
    }
}

/// Tree of package namespaces rooted at an unnamed sentinel.
///
/// Nodes live in an arena and refer to each other by [`NamespaceId`]; the
/// tree borrows the message declarations from the request it was built from.
#[derive(Debug)]
pub struct NamespaceTree<'a> {
    nodes: Vec<Namespace<'a>>,
}

impl Default for NamespaceTree<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> NamespaceTree<'a> {
    /// Create a tree holding only the root namespace.
    pub fn new() -> Self {
        Self {
            nodes: vec![Namespace::new(String::new(), None)],
        }
    }

    pub fn root(&self) -> NamespaceId {
        NamespaceId::ROOT
    }

    /// Get a namespace by ID.
    ///
    /// IDs are only ever handed out by this tree, so the lookup cannot miss.
    pub fn get(&self, id: NamespaceId) -> &Namespace<'a> {
        &self.nodes[id.index()]
    }

    pub fn parent(&self, id: NamespaceId) -> Option<NamespaceId> {
        self.get(id).parent
    }

    /// Number of namespaces, including the root.
    pub fn namespace_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NamespaceId, &Namespace<'a>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, namespace)| (NamespaceId::new(index), namespace))
    }

    /// Register a top-level message under `package`.
    ///
    /// Missing namespaces along the package path are created on demand. A
    /// message registered twice under the same name in the same package
    /// replaces the earlier registration.
    pub fn register(&mut self, package: Option<&'a str>, message: &'a MessageDecl) {
        debug!(
            "Loading message type {} from package {}",
            message.name,
            package.unwrap_or("<none>")
        );
        let mut current = NamespaceId::ROOT;
        if let Some(package) = package {
            for segment in package_segments(package) {
                current = self.child_or_insert(current, segment);
            }
        }
        self.nodes[current.index()]
            .local_types
            .insert(message.name.as_str(), message);
    }

    fn child_or_insert(&mut self, parent: NamespaceId, segment: &'a str) -> NamespaceId {
        if let Some(child) = self.get(parent).child(segment) {
            return child;
        }
        let id = NamespaceId::new(self.nodes.len());
        let qualified_name = qualify(&self.get(parent).qualified_name, segment);
        self.nodes.push(Namespace::new(qualified_name, Some(parent)));
        self.nodes[parent.index()].children.insert(segment, id);
        id
    }

    /// Find the namespace for a package path.
    ///
    /// Leading dots are tolerated the same way [`register`](Self::register)
    /// tolerates them. Returns `None` if any segment has no namespace.
    pub fn find_namespace(&self, package: &str) -> Option<NamespaceId> {
        package_segments(package).try_fold(NamespaceId::ROOT, |current, segment| {
            self.get(current).child(segment)
        })
    }

    /// Sorted fully qualified names of every namespace-local type.
    pub fn qualified_type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .nodes
            .iter()
            .flat_map(|namespace| {
                namespace
                    .local_types
                    .keys()
                    .map(|name| qualify(&namespace.qualified_name, name))
            })
            .collect();
        names.sort();
        names
    }

    /// Sorted qualified names of every namespace except the root.
    pub fn qualified_namespace_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .nodes
            .iter()
            .filter(|namespace| !namespace.is_root())
            .map(|namespace| namespace.qualified_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
