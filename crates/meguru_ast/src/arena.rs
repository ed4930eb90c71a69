//! Id-indexed arena for AST nodes.
//!
//! Nodes are owned by an [`AstArena`] and addressed by [`NodeId`]. The
//! id doubles as the node's identity: the same id reached through two
//! structural positions is the same node. Replacement and cycle
//! detection both rely on that, so the arena never moves or reclaims a
//! node while it is alive.

use serde::Serialize;

use crate::node::{Node, Slot};

/// Identity of a node within an [`AstArena`].
///
/// Assigned once at allocation and stable for the arena's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the raw index of this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a node sits in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A named attribute holding a single optional child.
    Named(&'static str),
    /// An index into a sequence-valued attribute.
    Indexed(&'static str, usize),
}

/// Owning store for AST nodes.
///
/// All nodes of one tree are allocated in the same arena and freed
/// together when it is dropped. Child links are [`NodeId`]s into the
/// same arena, which keeps nodes mutable in place: a parent's link can
/// be overwritten or spliced without touching the child itself.
///
/// # Example
///
/// ```rust
/// use meguru_ast::{AstArena, Location, Node};
///
/// let mut arena = AstArena::new();
/// let hello = arena.alloc(Node::with_value("Str", "hello"));
///
/// let mut doc = Node::new("Document");
/// doc.set_children("body", vec![Some(hello)]);
/// let doc = arena.alloc(doc);
///
/// assert_eq!(arena.child_at(doc, Location::Indexed("body", 0)), Some(hello));
/// ```
#[derive(Debug, Default)]
pub struct AstArena {
    nodes: Vec<Node>,
}

impl AstArena {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an arena with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a node and returns its id.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena. Use [`get`]
    /// when the id may come from elsewhere.
    ///
    /// [`get`]: AstArena::get
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Returns the node for `id`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns the node for `id`, or `None` for a foreign id.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reads the child currently stored at `location` on `parent`.
    pub fn child_at(&self, parent: NodeId, location: Location) -> Option<NodeId> {
        let node = self.get(parent)?;
        match location {
            Location::Named(key) => node.child(key),
            Location::Indexed(key, index) => node.children(key)?.get(index).copied().flatten(),
        }
    }

    /// Overwrites the child at `location` on `parent`.
    ///
    /// A named attribute is created when absent. An indexed write is
    /// dropped when the sequence or the index no longer exists.
    pub fn set_child(&mut self, parent: NodeId, location: Location, child: NodeId) {
        let Some(node) = self.nodes.get_mut(parent.index()) else {
            return;
        };
        match location {
            Location::Named(key) => node.set_child(key, Some(child)),
            Location::Indexed(key, index) => {
                if let Some(Slot::List(items)) = node.slot_mut(key)
                    && let Some(entry) = items.get_mut(index)
                {
                    *entry = Some(child);
                }
            }
        }
    }

    /// Removes the element at `index` of the sequence attribute `key`
    /// on `parent` and splices `replacement` in at that position, in
    /// order. The position is clamped to the sequence length; a
    /// missing or non-sequence attribute is left untouched.
    pub fn splice(
        &mut self,
        parent: NodeId,
        key: &str,
        index: usize,
        replacement: &[NodeId],
    ) {
        let Some(node) = self.nodes.get_mut(parent.index()) else {
            return;
        };
        let Some(Slot::List(items)) = node.slot_mut(key) else {
            return;
        };
        let at = index.min(items.len());
        let end = (at + 1).min(items.len());
        items.splice(at..end, replacement.iter().map(|id| Some(*id)));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn list_arena() -> (AstArena, NodeId, Vec<NodeId>) {
        let mut arena = AstArena::new();
        let a = arena.alloc(Node::with_value("Ident", "a"));
        let b = arena.alloc(Node::with_value("Ident", "b"));
        let c = arena.alloc(Node::with_value("Ident", "c"));

        let mut block = Node::new("Block");
        block.set_children("body", vec![Some(a), Some(b), Some(c)]);
        let block = arena.alloc(block);

        (arena, block, vec![a, b, c])
    }

    #[test]
    fn test_alloc_assigns_sequential_ids() {
        let mut arena = AstArena::new();
        let first = arena.alloc(Node::new("A"));
        let second = arena.alloc(Node::new("B"));

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(arena.len(), 2);
        assert!(!arena.is_empty());
    }

    #[test]
    fn test_get_rejects_foreign_id() {
        let mut foreign = AstArena::new();
        for _ in 0..5 {
            foreign.alloc(Node::new("X"));
        }
        let stale = foreign.alloc(Node::new("X"));

        let arena = AstArena::new();
        assert!(arena.get(stale).is_none());
    }

    #[test]
    fn test_child_at_named() {
        let mut arena = AstArena::new();
        let inner = arena.alloc(Node::new("Inner"));
        let mut outer = Node::new("Outer");
        outer.set_child("inner", Some(inner));
        let outer = arena.alloc(outer);

        assert_eq!(arena.child_at(outer, Location::Named("inner")), Some(inner));
        assert_eq!(arena.child_at(outer, Location::Named("other")), None);
    }

    #[test]
    fn test_child_at_indexed() {
        let (arena, block, ids) = list_arena();

        assert_eq!(
            arena.child_at(block, Location::Indexed("body", 1)),
            Some(ids[1])
        );
        assert_eq!(arena.child_at(block, Location::Indexed("body", 9)), None);
    }

    #[test]
    fn test_set_child_named_upserts() {
        let mut arena = AstArena::new();
        let parent = arena.alloc(Node::new("Wrap"));
        let child = arena.alloc(Node::new("Inner"));

        // "inner" does not exist yet; the write creates it.
        arena.set_child(parent, Location::Named("inner"), child);
        assert_eq!(arena.child_at(parent, Location::Named("inner")), Some(child));
    }

    #[test]
    fn test_set_child_indexed() {
        let (mut arena, block, ids) = list_arena();
        let new = arena.alloc(Node::with_value("Ident", "z"));

        arena.set_child(block, Location::Indexed("body", 1), new);

        assert_eq!(
            arena.node(block).children("body"),
            Some(&[Some(ids[0]), Some(new), Some(ids[2])][..])
        );
    }

    #[test]
    fn test_set_child_indexed_out_of_bounds_is_dropped() {
        let (mut arena, block, ids) = list_arena();
        let new = arena.alloc(Node::new("Ident"));

        arena.set_child(block, Location::Indexed("body", 10), new);
        arena.set_child(block, Location::Indexed("nope", 0), new);

        assert_eq!(
            arena.node(block).children("body"),
            Some(&[Some(ids[0]), Some(ids[1]), Some(ids[2])][..])
        );
    }

    #[test]
    fn test_splice_replaces_one_with_many() {
        let (mut arena, block, ids) = list_arena();
        let r1 = arena.alloc(Node::with_value("Ident", "r1"));
        let r2 = arena.alloc(Node::with_value("Ident", "r2"));

        arena.splice(block, "body", 1, &[r1, r2]);

        assert_eq!(
            arena.node(block).children("body"),
            Some(&[Some(ids[0]), Some(r1), Some(r2), Some(ids[2])][..])
        );
    }

    #[test]
    fn test_splice_with_empty_replacement_removes() {
        let (mut arena, block, ids) = list_arena();

        arena.splice(block, "body", 1, &[]);

        assert_eq!(
            arena.node(block).children("body"),
            Some(&[Some(ids[0]), Some(ids[2])][..])
        );
    }

    #[rstest]
    #[case(3)]
    #[case(100)]
    fn splice_past_the_end_appends(#[case] index: usize) {
        let (mut arena, block, ids) = list_arena();
        let r = arena.alloc(Node::with_value("Ident", "r"));

        arena.splice(block, "body", index, &[r]);

        assert_eq!(
            arena.node(block).children("body"),
            Some(&[Some(ids[0]), Some(ids[1]), Some(ids[2]), Some(r)][..])
        );
    }

    #[test]
    fn test_splice_on_missing_attribute_is_dropped() {
        let (mut arena, block, ids) = list_arena();
        let r = arena.alloc(Node::new("Ident"));

        arena.splice(block, "nope", 0, &[r]);

        assert_eq!(
            arena.node(block).children("body"),
            Some(&[Some(ids[0]), Some(ids[1]), Some(ids[2])][..])
        );
    }

    #[test]
    fn test_node_id_display() {
        let mut arena = AstArena::new();
        let id = arena.alloc(Node::new("A"));
        assert_eq!(id.to_string(), "#0");
    }
}
