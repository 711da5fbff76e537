//! Structural equality for syntax trees.
//!
//! `structure_eq` compares trees ignoring formatting hints: fields that change
//! how a tree is printed but not what the program does.
//!
//! # Hint Fields (normalized during comparison)
//!
//! - `TableConstructor::padded` - inner spacing of single-line tables
//! - `Statement::Comment` - dropped from every block
//!
//! # Core Fields (must match exactly)
//!
//! - All names, literals, operators
//! - Statement order and control flow structure
//! - Type annotations

use crate::ast::{Block, Chunk, Expression, Statement, TableConstructor};
use crate::fold::{Fold, walk_table_constructor};

/// Trait for structural equality comparison.
///
/// Unlike `PartialEq`, this ignores formatting hints that may differ between
/// two lowerings of the same program.
pub trait StructureEq {
    fn structure_eq(&self, other: &Self) -> bool;
}

/// Fold that resets every formatting hint to its canonical value.
pub struct StripHints;

impl Fold for StripHints {
    fn fold_block(&mut self, node: Block) -> Block {
        Block {
            statements: node
                .statements
                .into_iter()
                .filter(|statement| !matches!(statement, Statement::Comment(_)))
                .map(|statement| self.fold_statement(statement))
                .collect(),
        }
    }

    fn fold_table_constructor(&mut self, node: TableConstructor) -> TableConstructor {
        TableConstructor {
            padded: false,
            ..walk_table_constructor(self, node)
        }
    }
}

macro_rules! structure_eq_via_strip {
    ($($ty:ident => $fold:ident),* $(,)?) => {
        $(
            impl StructureEq for $ty {
                fn structure_eq(&self, other: &Self) -> bool {
                    StripHints.$fold(self.clone()) == StripHints.$fold(other.clone())
                }
            }
        )*
    };
}

structure_eq_via_strip!(
    Chunk => fold_chunk,
    Block => fold_block,
    Statement => fold_statement,
    Expression => fold_expression,
);
