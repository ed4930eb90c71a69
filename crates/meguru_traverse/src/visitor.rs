//! Visitor contract for traversal.
//!
//! A [`Visitor`] is the caller-supplied callback object the traverser
//! drives: `enter` fires when a node is first reached, `exit` after
//! all of its children, and the [`Signals`] flags let the visitor
//! steer the walk from inside a callback.

use meguru_ast::{AstArena, NodeId};

/// Replacement requested by [`Visitor::enter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Replace the visited node with a single node.
    One(NodeId),
    /// Replace the visited node with zero or more siblings.
    ///
    /// Splicing into the parent only happens when the visited node
    /// sits in a sequence attribute; an empty sequence drops the node
    /// from further processing without touching the parent.
    Many(Vec<NodeId>),
}

/// Flags a visitor raises to steer traversal.
///
/// Both default to false. The flags live on the visitor (reachable
/// through [`Visitor::signals`]) rather than in a return value, so a
/// flag raised together with a replacement survives into the
/// replacement's own visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    /// Skip the current node's children and its exit callback.
    ///
    /// One-shot: the traverser clears it at the node where it was
    /// raised. Siblings and ancestors are unaffected.
    pub skip: bool,

    /// Stop the whole traversal.
    ///
    /// Sticky: the traverser re-checks it after every child and never
    /// clears it, so every outstanding frame unwinds. No further
    /// `enter` or `exit` fires once it is set.
    pub stop: bool,
}

/// Callbacks invoked as the traverser walks a tree.
///
/// `enter` is mandatory; `exit` defaults to a no-op. The arena is
/// threaded through both callbacks so a visitor can read node data,
/// mutate payloads, and allocate replacement nodes.
///
/// # Example
///
/// ```rust
/// use meguru_ast::{AstArena, NodeId};
/// use meguru_traverse::{Replacement, Signals, Visitor};
///
/// /// Collects the value of every node it enters.
/// #[derive(Default)]
/// struct ValueCollector {
///     values: Vec<String>,
///     signals: Signals,
/// }
///
/// impl Visitor for ValueCollector {
///     fn enter(
///         &mut self,
///         arena: &mut AstArena,
///         node: NodeId,
///         _parent: Option<NodeId>,
///     ) -> Option<Replacement> {
///         if let Some(value) = arena.node(node).value() {
///             self.values.push(value.to_owned());
///         }
///         None
///     }
///
///     fn signals(&mut self) -> &mut Signals {
///         &mut self.signals
///     }
/// }
/// ```
pub trait Visitor {
    /// Called when a node is first reached, before its children.
    ///
    /// Returning a [`Replacement`] rewrites the node's position in its
    /// parent and re-enters the replacement node in the same position.
    /// Returning `None` keeps the node and descends into its children.
    fn enter(
        &mut self,
        arena: &mut AstArena,
        node: NodeId,
        parent: Option<NodeId>,
    ) -> Option<Replacement>;

    /// Called after all of a node's children have been visited.
    ///
    /// Does not fire for a node that was skipped, replaced, or cut off
    /// by a stop.
    fn exit(&mut self, _arena: &mut AstArena, _node: NodeId, _parent: Option<NodeId>) {}

    /// The skip/stop flags for this visitor.
    ///
    /// The traverser reads the flags after every callback and clears
    /// `skip` when it consumes it; `stop` is left to the caller.
    fn signals(&mut self) -> &mut Signals;
}
