//! Depth-first traversal with in-place replacement.
//!
//! [`Traverser`] is the whole engine: one recursive procedure that
//! threads the current parent, the node's location within it, and a
//! per-call visited-set through the descent. There are deliberately no
//! path objects or per-node wrappers; every step works directly on
//! arena ids, which keeps the per-node overhead at a schema lookup and
//! a set insertion.

use meguru_ast::{AstArena, Location, NodeId, Schema, Slot};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::visitor::{Replacement, Visitor};

/// Shape of a child attribute, copied out of the node so the arena can
/// be re-borrowed mutably while descending.
enum Shape {
    Missing,
    Single(Option<NodeId>),
    Sequence,
}

/// Depth-first AST traverser.
///
/// Visits a root and every reachable descendant exactly once (by node
/// identity), calling [`Visitor::enter`] before a node's children and
/// [`Visitor::exit`] after them. A visitor can rewrite the tree while
/// it is being walked: replacements are written into the parent
/// immediately and the replacement node is re-entered in the same
/// position, so later siblings and outside observers always see the
/// updated tree.
///
/// The child-key [`Schema`] is injected at construction; the traverser
/// itself holds no tree state, so one instance can walk any number of
/// trees.
///
/// Re-visiting is cut off by identity: once a node has been entered in
/// a traversal, reaching it again (through a replacement cycle or a
/// shared subtree) is a no-op. This bounds recursion even when a
/// visitor wires a node back into its own descendants.
///
/// # Example
///
/// ```rust
/// use meguru_ast::{AstArena, Node, NodeId, Schema};
/// use meguru_traverse::{Replacement, Signals, Traverser, Visitor};
///
/// // Replace every `Var` node with a `Const` node.
/// struct Constifier {
///     signals: Signals,
/// }
///
/// impl Visitor for Constifier {
///     fn enter(
///         &mut self,
///         arena: &mut AstArena,
///         node: NodeId,
///         _parent: Option<NodeId>,
///     ) -> Option<Replacement> {
///         if arena.node(node).kind() == "Var" {
///             let name = arena.node(node).value().unwrap_or_default().to_owned();
///             let constant = arena.alloc(Node::with_value("Const", name));
///             return Some(Replacement::One(constant));
///         }
///         None
///     }
///
///     fn signals(&mut self) -> &mut Signals {
///         &mut self.signals
///     }
/// }
///
/// let schema = Schema::builder().kind("Program", &["body"]).build().unwrap();
/// let mut arena = AstArena::new();
/// let var = arena.alloc(Node::with_value("Var", "x"));
/// let mut program = Node::new("Program");
/// program.set_children("body", vec![Some(var)]);
/// let program = arena.alloc(program);
///
/// let mut visitor = Constifier { signals: Signals::default() };
/// Traverser::new(&schema).traverse(&mut arena, program, &mut visitor);
///
/// let body = arena.node(program).children("body").unwrap();
/// assert_eq!(arena.node(body[0].unwrap()).kind(), "Const");
/// ```
pub struct Traverser<'s> {
    schema: &'s Schema,
}

impl<'s> Traverser<'s> {
    /// Creates a traverser over the given child-key schema.
    #[inline]
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Visits `root` and, transitively, every reachable descendant.
    ///
    /// The visited-set lives for exactly this call; a second call on
    /// the same tree enters every node again.
    pub fn traverse<V: Visitor>(&self, arena: &mut AstArena, root: NodeId, visitor: &mut V) {
        debug!("starting traversal at {}", root);
        let mut visited = FxHashSet::default();
        self.visit(arena, visitor, Some(root), None, None, &mut visited);
    }

    fn visit<V: Visitor>(
        &self,
        arena: &mut AstArena,
        visitor: &mut V,
        node: Option<NodeId>,
        parent: Option<NodeId>,
        location: Option<Location>,
        visited: &mut FxHashSet<NodeId>,
    ) {
        let Some(node) = node else {
            return;
        };
        if arena.get(node).is_none() || !visited.insert(node) {
            return;
        }

        if let Some(replacement) = visitor.enter(arena, node, parent) {
            if let (Some(parent_id), Some(loc)) = (parent, location) {
                match replacement {
                    Replacement::One(new) => {
                        trace!("replacing {} with {} in {}", node, new, parent_id);
                        arena.set_child(parent_id, loc, new);
                        return self.visit(arena, visitor, Some(new), parent, location, visited);
                    }
                    Replacement::Many(nodes) => {
                        if nodes.is_empty() {
                            // Already marked visited, so nothing else in
                            // this traversal will process the node again.
                            trace!("dropping {} from processing", node);
                            return;
                        }
                        if let Location::Indexed(key, index) = loc {
                            trace!(
                                "splicing {} nodes in place of {} at {}[{}]",
                                nodes.len(),
                                node,
                                key,
                                index
                            );
                            arena.splice(parent_id, key, index, &nodes);
                        }
                        let first = nodes[0];
                        return self.visit(arena, visitor, Some(first), parent, location, visited);
                    }
                }
            }
            // A replacement without both a parent and a location (the
            // root, or a caller contract violation) is ignored.
        }

        let signals = visitor.signals();
        if signals.skip {
            signals.skip = false;
            trace!("skipping children of {}", node);
            return;
        }
        if signals.stop {
            return;
        }

        let kind = arena.node(node).kind();
        let Some(keys) = self.schema.child_keys(kind) else {
            return;
        };
        for &key in keys {
            let shape = match arena.node(node).slot(key) {
                None => Shape::Missing,
                Some(Slot::Node(child)) => Shape::Single(*child),
                Some(Slot::List(_)) => Shape::Sequence,
            };
            match shape {
                Shape::Missing => {}
                Shape::Single(child) => {
                    self.visit(
                        arena,
                        visitor,
                        child,
                        Some(node),
                        Some(Location::Named(key)),
                        visited,
                    );
                }
                Shape::Sequence => {
                    // Walk by index, re-reading the sequence every step:
                    // a splice below may have grown or shrunk it.
                    let mut index = 0;
                    loop {
                        let entry = match arena.node(node).slot(key) {
                            Some(Slot::List(items)) => match items.get(index) {
                                Some(child) => *child,
                                None => break,
                            },
                            _ => break,
                        };
                        self.visit(
                            arena,
                            visitor,
                            entry,
                            Some(node),
                            Some(Location::Indexed(key, index)),
                            visited,
                        );
                        if visitor.signals().stop {
                            return;
                        }
                        index += 1;
                    }
                }
            }
            if visitor.signals().stop {
                return;
            }
        }

        visitor.exit(arena, node, parent);
    }
}
