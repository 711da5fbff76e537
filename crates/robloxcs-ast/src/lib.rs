//! Luau syntax tree for the RobloxCS compiler.
//!
//! `robloxcs-ast` models every construct of the Luau dialect that the
//! lowering passes emit, and provides the traversal machinery the renderer
//! and rewriting passes are built on.
//!
//! # Architecture
//!
//! ```text
//! lowering passes ──> Chunk ──> Visit (render, analyze)
//!                      │   └──> Fold  (rewrite, normalize)
//!                      └─ NodeRef::children() drives both default walks
//! ```
//!
//! # Example
//!
//! ```
//! use robloxcs_ast::{BinaryOperator, Chunk, Expression, Statement, Visit};
//!
//! let chunk = Chunk::new(vec![Statement::local(
//!     "x",
//!     Expression::binary(Expression::number(1), BinaryOperator::Plus, Expression::symbol("y")),
//! )]);
//!
//! struct Symbols(Vec<String>);
//!
//! impl Visit for Symbols {
//!     fn visit_symbol(&mut self, name: &str) {
//!         self.0.push(name.to_string());
//!     }
//! }
//!
//! let mut symbols = Symbols(Vec::new());
//! symbols.visit_chunk(&chunk);
//! assert_eq!(symbols.0, vec!["y"]);
//! ```

pub mod ast;
pub mod fold;
pub mod node;
pub mod structure_eq;
pub mod visit;

// Re-exports: node types
pub use ast::*;

// Re-exports: traversal
pub use fold::Fold;
pub use node::{AsNode, Children, Node, NodeRef};
pub use structure_eq::{StripHints, StructureEq};
pub use visit::Visit;
