//! Parenthesization rules for operator expressions.

use robloxcs_ast::{BinaryOperator, Expression, Literal, UnaryOperator};

/// Which operand of a binary expression a child sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Whether a binary child with operator `child` needs parentheses when it is
/// the `side` operand of `parent`.
///
/// Lower precedence always wraps, higher never does. At equal precedence the
/// operand against the grain of the parent's associativity wraps: the right
/// operand of a left-associative operator, the left operand of a
/// right-associative one.
pub fn binary_child_needs_parens(parent: BinaryOperator, child: BinaryOperator, side: Side) -> bool {
    let (parent_rank, child_rank) = (parent.precedence(), child.precedence());
    if child_rank != parent_rank {
        return child_rank < parent_rank;
    }
    match side {
        Side::Left => parent.is_right_associative(),
        Side::Right => !parent.is_right_associative(),
    }
}

/// Whether `operand` must be wrapped to render as the `side` operand of
/// `parent`.
pub fn operand_needs_parens(parent: BinaryOperator, operand: &Expression, side: Side) -> bool {
    match operand {
        Expression::Binary(child) => binary_child_needs_parens(parent, child.operator, side),
        // `-x ^ 2` parses as `-(x ^ 2)`
        Expression::Unary(_) => parent == BinaryOperator::Caret && side == Side::Left,
        Expression::Literal(Literal::Number(n)) => {
            parent == BinaryOperator::Caret && side == Side::Left && n.is_sign_negative()
        }
        // Both extend as far right as possible.
        Expression::IfExpression(_) | Expression::Function(_) => true,
        _ => false,
    }
}

/// Whether the operand of a unary operator needs parentheses.
pub fn unary_operand_needs_parens(operator: UnaryOperator, operand: &Expression) -> bool {
    match operand {
        Expression::Binary(_) | Expression::IfExpression(_) => true,
        // Avoid emitting `--`, which opens a comment.
        Expression::Unary(inner) => {
            operator == UnaryOperator::Minus && inner.operator == UnaryOperator::Minus
        }
        Expression::Literal(Literal::Number(n)) => {
            operator == UnaryOperator::Minus && n.is_sign_negative()
        }
        _ => false,
    }
}
