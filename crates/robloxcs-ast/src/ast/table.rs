//! Table constructors.

use serde::{Deserialize, Serialize};

use super::Expression;

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableConstructor {
    pub fields: Vec<TableField>,
    /// Pad a single-line positional table with inner spaces: `{ 1, 2 }`.
    pub padded: bool,
}

impl TableConstructor {
    pub fn new(fields: Vec<TableField>) -> Self {
        Self {
            fields,
            padded: false,
        }
    }

    /// A table of positional values.
    pub fn array(values: Vec<Expression>) -> Self {
        Self::new(values.into_iter().map(TableField::NoKey).collect())
    }

    pub fn padded(mut self) -> Self {
        self.padded = true;
        self
    }

    /// True when no field carries a key.
    pub fn is_positional(&self) -> bool {
        self.fields
            .iter()
            .all(|field| matches!(field, TableField::NoKey(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableField {
    /// `value`
    NoKey(Expression),
    /// `key = value`
    NameKey { key: String, value: Expression },
    /// `[key] = value`
    ExpressionKey { key: Expression, value: Expression },
}

impl TableField {
    pub fn named(key: impl Into<String>, value: Expression) -> Self {
        TableField::NameKey {
            key: key.into(),
            value,
        }
    }

    pub fn computed(key: Expression, value: Expression) -> Self {
        TableField::ExpressionKey { key, value }
    }
}
