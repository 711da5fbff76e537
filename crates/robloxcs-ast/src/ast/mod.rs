//! Luau syntax tree.
//!
//! Every node owns its children outright (`Box`/`Vec`), so `Clone` is a deep
//! copy and no node is ever shared between two parents.

mod expression;
mod function;
mod statement;
mod table;
mod types;

use serde::{Deserialize, Serialize};

pub use expression::*;
pub use function::*;
pub use statement::*;
pub use table::*;
pub use types::*;

/// A complete compiled program unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chunk {
    pub block: Block,
}

impl Chunk {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            block: Block::new(statements),
        }
    }
}

/// Statements in program order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A construct the core has no dedicated node for.
///
/// Lowering passes tag it with `kind` and register a renderer for that tag;
/// rendering an unregistered kind aborts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomNode {
    pub kind: String,
    pub children: Vec<Expression>,
}

impl CustomNode {
    pub fn new(kind: impl Into<String>, children: Vec<Expression>) -> Self {
        Self {
            kind: kind.into(),
            children,
        }
    }
}
