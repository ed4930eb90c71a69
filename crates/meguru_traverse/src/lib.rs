//! # meguru_traverse
//!
//! Fast depth-first AST traversal with in-place replacement.
//!
//! This crate is a minimal traversal primitive: it walks a tree held
//! in a [`meguru_ast::AstArena`], drives a caller-supplied [`Visitor`]
//! at node entry and exit, and lets that visitor rewrite the tree
//! while it is being walked. There are no path objects, no scope
//! tracking, and no per-node wrapper allocations; the cost per node is
//! a child-key schema lookup and one visited-set insertion.
//!
//! ## What a visitor can do
//!
//! - Replace the current node with one node ([`Replacement::One`]) or
//!   with zero or more siblings ([`Replacement::Many`]); the parent is
//!   rewritten immediately and the replacement is re-entered in the
//!   same position, so chained replacements work.
//! - Skip the current node's subtree ([`Signals::skip`], one-shot).
//! - Stop the whole traversal ([`Signals::stop`], sticky).
//!
//! Every node is entered at most once per traversal, by identity: a
//! node reached twice (through a shared subtree or a replacement that
//! wires in an ancestor) is a no-op the second time, which bounds
//! recursion even on cyclic rewrites.
//!
//! ## Example
//!
//! ```rust
//! use meguru_ast::{AstArena, Node, NodeId, Schema};
//! use meguru_traverse::{Replacement, Signals, Traverser, Visitor};
//!
//! struct Counter {
//!     count: usize,
//!     signals: Signals,
//! }
//!
//! impl Visitor for Counter {
//!     fn enter(
//!         &mut self,
//!         _arena: &mut AstArena,
//!         _node: NodeId,
//!         _parent: Option<NodeId>,
//!     ) -> Option<Replacement> {
//!         self.count += 1;
//!         None
//!     }
//!
//!     fn signals(&mut self) -> &mut Signals {
//!         &mut self.signals
//!     }
//! }
//!
//! let schema = Schema::builder().kind("Document", &["body"]).build().unwrap();
//!
//! let mut arena = AstArena::new();
//! let hello = arena.alloc(Node::with_value("Str", "hello"));
//! let world = arena.alloc(Node::with_value("Str", "world"));
//! let mut doc = Node::new("Document");
//! doc.set_children("body", vec![Some(hello), Some(world)]);
//! let doc = arena.alloc(doc);
//!
//! let mut counter = Counter { count: 0, signals: Signals::default() };
//! Traverser::new(&schema).traverse(&mut arena, doc, &mut counter);
//! assert_eq!(counter.count, 3);
//! ```

mod traverse;
mod visitor;

pub use traverse::Traverser;
pub use visitor::{Replacement, Signals, Visitor};
