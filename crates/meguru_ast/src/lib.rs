//! # meguru_ast
//!
//! Generic AST node store and child-key schema for Meguru.
//!
//! This crate provides the tree representation the Meguru traversal
//! engine operates on: an id-indexed [`AstArena`] owning generic
//! [`Node`]s, and the [`Schema`] describing which attributes of each
//! node kind hold children.
//!
//! ## Architecture
//!
//! - All nodes of one tree live in a single arena and are addressed by
//!   [`NodeId`]; the id is the node's identity and stays valid for the
//!   arena's lifetime.
//! - Nodes are generic: a kind tag, an optional text value, and named
//!   slots holding single children or ordered child sequences. Nothing
//!   in this crate interprets kinds; the schema is the only source of
//!   shape information.
//! - Rewrites go through the arena ([`AstArena::set_child`],
//!   [`AstArena::splice`]) addressed by a [`Location`], so a parent's
//!   links can change while every id stays stable.
//!
//! ## Example
//!
//! ```rust
//! use meguru_ast::{AstArena, Node, Schema};
//!
//! let schema = Schema::builder()
//!     .kind("Document", &["body"])
//!     .build()
//!     .unwrap();
//!
//! let mut arena = AstArena::new();
//! let text = arena.alloc(Node::with_value("Str", "hello"));
//! let mut doc = Node::new("Document");
//! doc.set_children("body", vec![Some(text)]);
//! let doc = arena.alloc(doc);
//!
//! assert_eq!(schema.child_keys(arena.node(doc).kind()), Some(&["body"][..]));
//! ```

mod arena;
mod node;
mod schema;

pub use arena::{AstArena, Location, NodeId};
pub use node::{Node, Slot};
pub use schema::{Schema, SchemaBuilder, SchemaError};
