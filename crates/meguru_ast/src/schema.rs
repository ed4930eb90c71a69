//! Child-key schema.
//!
//! The schema is the host AST's description of its own shape: for each
//! node kind, the ordered attribute names that may hold children. The
//! traverser consults it once per node and never hardcodes per-kind
//! knowledge, so the same engine walks any tree the host can describe.
//!
//! A schema is an injected value, not a process-wide table. Build one
//! per host AST (or per test) and pass it to the traverser.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building a [`Schema`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The same kind was registered twice.
    #[error("duplicate child-key entry for kind `{0}`")]
    DuplicateKind(&'static str),
}

/// Read-only mapping from node kind to the ordered attribute names
/// that may hold children.
///
/// A kind with no entry has no traversable children.
///
/// # Example
///
/// ```rust
/// use meguru_ast::Schema;
///
/// let schema = Schema::builder()
///     .kind("Document", &["body"])
///     .kind("Paragraph", &["children"])
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.child_keys("Document"), Some(&["body"][..]));
/// assert_eq!(schema.child_keys("Str"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Schema {
    keys: FxHashMap<&'static str, Box<[&'static str]>>,
}

impl Schema {
    /// Starts building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Returns the ordered child attribute names for `kind`, or `None`
    /// when the kind has no entry.
    #[inline]
    pub fn child_keys(&self, kind: &str) -> Option<&[&'static str]> {
        self.keys.get(kind).map(|keys| &**keys)
    }

    /// Returns true if `kind` has an entry.
    #[inline]
    pub fn contains(&self, kind: &str) -> bool {
        self.keys.contains_key(kind)
    }

    /// Returns the number of registered kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no kinds are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    keys: FxHashMap<&'static str, Box<[&'static str]>>,
    duplicate: Option<&'static str>,
}

impl SchemaBuilder {
    /// Registers the ordered child attribute names for `kind`.
    ///
    /// Registering the same kind twice makes [`build`] fail; a kind
    /// with no children simply stays unregistered.
    ///
    /// [`build`]: SchemaBuilder::build
    pub fn kind(mut self, kind: &'static str, keys: &[&'static str]) -> Self {
        if self.keys.insert(kind, keys.into()).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(kind);
        }
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> Result<Schema, SchemaError> {
        if let Some(kind) = self.duplicate {
            return Err(SchemaError::DuplicateKind(kind));
        }
        Ok(Schema { keys: self.keys })
    }
}
