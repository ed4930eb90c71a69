//! Generic AST node representation.
//!
//! A [`Node`] is one element of a host AST: a kind tag, an optional
//! text value, and an ordered list of named slots holding children.
//! Which of those slots a traversal should descend into is decided by
//! the child-key [`Schema`](crate::Schema), not by the node itself.

use serde::Serialize;

use crate::NodeId;

/// A child-holding attribute on a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A single, possibly absent child.
    Node(Option<NodeId>),
    /// An ordered sequence of possibly absent children.
    List(Vec<Option<NodeId>>),
}

/// One AST element.
///
/// The `kind` discriminant identifies the node's concrete type and is
/// the key used to look up its traversable children in a schema. The
/// optional `value` carries leaf payloads (identifier names, literal
/// text). Children are held in named slots, each either a single
/// optional child or an ordered sequence.
///
/// # Example
///
/// ```rust
/// use meguru_ast::{AstArena, Node};
///
/// let mut arena = AstArena::new();
/// let lhs = arena.alloc(Node::with_value("Ident", "x"));
/// let rhs = arena.alloc(Node::with_value("Number", "1"));
///
/// let mut assign = Node::new("Assign");
/// assign.set_child("target", Some(lhs));
/// assign.set_child("value", Some(rhs));
/// let assign = arena.alloc(assign);
///
/// assert_eq!(arena.node(assign).kind(), "Assign");
/// assert_eq!(arena.node(assign).child("target"), Some(lhs));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: &'static str,
    value: Option<String>,
    slots: Vec<(&'static str, Slot)>,
}

impl Node {
    /// Creates a node with no value and no slots.
    #[inline]
    pub const fn new(kind: &'static str) -> Self {
        Self {
            kind,
            value: None,
            slots: Vec::new(),
        }
    }

    /// Creates a node carrying a text value.
    #[inline]
    pub fn with_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            slots: Vec::new(),
        }
    }

    /// Returns the kind discriminant.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the text value, if any.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets or replaces the text value.
    #[inline]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Sets a single-child attribute, replacing any slot already under
    /// `key`.
    pub fn set_child(&mut self, key: &'static str, child: Option<NodeId>) {
        self.put_slot(key, Slot::Node(child));
    }

    /// Sets a sequence attribute, replacing any slot already under
    /// `key`. Entries may be `None` to model absent elements.
    pub fn set_children(&mut self, key: &'static str, children: Vec<Option<NodeId>>) {
        self.put_slot(key, Slot::List(children));
    }

    /// Reads a single-child attribute. Returns `None` when the slot is
    /// missing, holds no child, or holds a sequence.
    pub fn child(&self, key: &str) -> Option<NodeId> {
        match self.slot(key) {
            Some(Slot::Node(child)) => *child,
            _ => None,
        }
    }

    /// Reads a sequence attribute. Returns `None` when the slot is
    /// missing or holds a single child.
    pub fn children(&self, key: &str) -> Option<&[Option<NodeId>]> {
        match self.slot(key) {
            Some(Slot::List(items)) => Some(items),
            _ => None,
        }
    }

    /// Returns the slot stored under `key`.
    pub fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, slot)| slot)
    }

    /// Returns the slot stored under `key`, mutably.
    pub fn slot_mut(&mut self, key: &str) -> Option<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|(name, _)| *name == key)
            .map(|(_, slot)| slot)
    }

    /// Inserts or overwrites the slot under `key`, keeping insertion
    /// order for new keys.
    fn put_slot(&mut self, key: &'static str, slot: Slot) {
        match self.slot_mut(key) {
            Some(existing) => *existing = slot,
            None => self.slots.push((key, slot)),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 1 + self.slots.len();
        if self.value.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("Node", len)?;
        state.serialize_field("kind", self.kind)?;
        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }
        for (key, slot) in &self.slots {
            state.serialize_field(*key, slot)?;
        }
        state.end()
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Slot::Node(child) => child.serialize(serializer),
            Slot::List(items) => items.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::AstArena;

    #[test]
    fn test_new_node() {
        let node = Node::new("Program");
        assert_eq!(node.kind(), "Program");
        assert!(node.value().is_none());
    }

    #[test]
    fn test_with_value() {
        let node = Node::with_value("Ident", "x");
        assert_eq!(node.kind(), "Ident");
        assert_eq!(node.value(), Some("x"));
    }

    #[test]
    fn test_set_value() {
        let mut node = Node::new("Str");
        node.set_value("hello");
        assert_eq!(node.value(), Some("hello"));
    }

    #[test]
    fn test_single_child_slot() {
        let mut arena = AstArena::new();
        let child = arena.alloc(Node::with_value("Ident", "x"));

        let mut node = Node::new("Return");
        node.set_child("argument", Some(child));

        assert_eq!(node.child("argument"), Some(child));
        assert_eq!(node.child("missing"), None);
    }

    #[test]
    fn test_unset_single_child() {
        let mut node = Node::new("Return");
        node.set_child("argument", None);

        assert!(matches!(node.slot("argument"), Some(Slot::Node(None))));
        assert_eq!(node.child("argument"), None);
    }

    #[test]
    fn test_sequence_slot() {
        let mut arena = AstArena::new();
        let a = arena.alloc(Node::with_value("Ident", "a"));
        let b = arena.alloc(Node::with_value("Ident", "b"));

        let mut node = Node::new("Block");
        node.set_children("body", vec![Some(a), None, Some(b)]);

        assert_eq!(node.children("body"), Some(&[Some(a), None, Some(b)][..]));
        assert_eq!(node.children("missing"), None);
    }

    #[test]
    fn test_child_does_not_read_sequences() {
        let mut node = Node::new("Block");
        node.set_children("body", vec![]);

        // A sequence slot is not visible through the single-child getter.
        assert_eq!(node.child("body"), None);
        assert!(node.children("body").is_some());
    }

    #[test]
    fn test_set_child_overwrites_existing_slot() {
        let mut arena = AstArena::new();
        let a = arena.alloc(Node::new("A"));
        let b = arena.alloc(Node::new("B"));

        let mut node = Node::new("Wrap");
        node.set_child("inner", Some(a));
        node.set_child("inner", Some(b));

        assert_eq!(node.child("inner"), Some(b));
    }

    #[test]
    fn test_serialization_includes_every_slot() {
        let mut node = Node::new("If");
        node.set_child("test", None);
        node.set_children("consequent", vec![]);
        node.set_child("alternate", None);

        let json = serde_json::to_value(&node).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj["test"].is_null());
        assert!(obj["consequent"].as_array().unwrap().is_empty());
        assert!(obj["alternate"].is_null());
    }

    #[test]
    fn test_serialization_leaf() {
        let node = Node::with_value("Ident", "x");
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "Ident");
        assert_eq!(json["value"], "x");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_serialization_omits_absent_value() {
        let node = Node::new("Program");
        let json = serde_json::to_value(&node).unwrap();

        assert!(json.get("value").is_none());
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_serialization_slots() {
        let mut arena = AstArena::new();
        let a = arena.alloc(Node::with_value("Ident", "a"));
        let b = arena.alloc(Node::with_value("Ident", "b"));

        let mut node = Node::new("Call");
        node.set_child("callee", Some(a));
        node.set_children("arguments", vec![Some(b), None]);

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "Call");
        assert_eq!(json["callee"], a.index());
        assert_eq!(json["arguments"][0], b.index());
        assert!(json["arguments"][1].is_null());
    }
}
