//! Expression nodes.

use serde::{Deserialize, Serialize};

use super::{CustomNode, FunctionBody, FunctionCall, TableConstructor, TypeInfo};

/// Precedence of unary operators and primary expressions.
///
/// Binds tighter than every [`BinaryOperator`].
pub const UNARY_PRECEDENCE: u8 = 9;

/// A Luau expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    /// A raw identifier or pre-rendered name path (`x`, `game.Workspace`).
    Symbol(String),
    /// `...`
    VarArgs,
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Call(FunctionCall),
    Function(AnonymousFunction),
    Table(TableConstructor),
    InterpolatedString(InterpolatedString),
    TypeAssertion(TypeAssertion),
    IfExpression(IfExpression),
    Index(IndexExpression),
    Parenthesized(Box<Expression>),
    Custom(CustomNode),
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// `left <op> right`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

/// Binary operators, ordered by precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Concat,
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    Caret,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 16] = [
        BinaryOperator::Or,
        BinaryOperator::And,
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::Less,
        BinaryOperator::LessEqual,
        BinaryOperator::Greater,
        BinaryOperator::GreaterEqual,
        BinaryOperator::Concat,
        BinaryOperator::Plus,
        BinaryOperator::Minus,
        BinaryOperator::Star,
        BinaryOperator::Slash,
        BinaryOperator::DoubleSlash,
        BinaryOperator::Percent,
        BinaryOperator::Caret,
    ];

    /// Source spelling of the operator.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "~=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Concat => "..",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Star => "*",
            BinaryOperator::Slash => "/",
            BinaryOperator::DoubleSlash => "//",
            BinaryOperator::Percent => "%",
            BinaryOperator::Caret => "^",
        }
    }

    /// Precedence rank, 1 (loosest) to 8 (tightest).
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Or => 1,
            BinaryOperator::And => 2,
            BinaryOperator::Equal | BinaryOperator::NotEqual => 3,
            BinaryOperator::Less
            | BinaryOperator::LessEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEqual => 4,
            BinaryOperator::Concat => 5,
            BinaryOperator::Plus | BinaryOperator::Minus => 6,
            BinaryOperator::Star
            | BinaryOperator::Slash
            | BinaryOperator::DoubleSlash
            | BinaryOperator::Percent => 7,
            BinaryOperator::Caret => 8,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, BinaryOperator::Caret | BinaryOperator::Concat)
    }
}

/// `<op> operand`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Minus,
    Length,
}

impl UnaryOperator {
    /// Source spelling, including the trailing space word operators need.
    pub fn token(self) -> &'static str {
        match self {
            UnaryOperator::Not => "not ",
            UnaryOperator::Minus => "-",
            UnaryOperator::Length => "#",
        }
    }
}

/// `function(...) ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousFunction {
    pub body: FunctionBody,
}

/// A backtick-delimited string mixing literal text and expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedString {
    pub segments: Vec<InterpolatedSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InterpolatedSegment {
    Text(String),
    Expression(Expression),
}

/// `expression :: cast_to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertion {
    pub expression: Box<Expression>,
    pub cast_to: TypeInfo,
}

/// `if condition then a elseif c then b else d`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub then_value: Box<Expression>,
    pub else_ifs: Vec<ElseIfExpression>,
    pub else_value: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseIfExpression {
    pub condition: Expression,
    pub value: Expression,
}

/// `target[index]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpression {
    pub target: Box<Expression>,
    pub index: Box<Expression>,
}

impl Expression {
    pub fn nil() -> Self {
        Expression::Literal(Literal::Nil)
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Literal(Literal::Boolean(value))
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Expression::Literal(Literal::Number(value.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol(name.into())
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn not(operand: Expression) -> Self {
        Self::unary(UnaryOperator::Not, operand)
    }

    /// `name(arguments)`
    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Call(FunctionCall::named(name, arguments))
    }

    pub fn function(body: FunctionBody) -> Self {
        Expression::Function(AnonymousFunction { body })
    }

    pub fn table(table: TableConstructor) -> Self {
        Expression::Table(table)
    }

    pub fn index(target: Expression, index: Expression) -> Self {
        Expression::Index(IndexExpression {
            target: Box::new(target),
            index: Box::new(index),
        })
    }

    pub fn type_assertion(expression: Expression, cast_to: TypeInfo) -> Self {
        Expression::TypeAssertion(TypeAssertion {
            expression: Box::new(expression),
            cast_to,
        })
    }

    pub fn if_expression(condition: Expression, then_value: Expression, else_value: Expression) -> Self {
        Expression::IfExpression(IfExpression {
            condition: Box::new(condition),
            then_value: Box::new(then_value),
            else_ifs: Vec::new(),
            else_value: Box::new(else_value),
        })
    }

    pub fn interpolated(segments: Vec<InterpolatedSegment>) -> Self {
        Expression::InterpolatedString(InterpolatedString { segments })
    }

    pub fn parenthesized(inner: Expression) -> Self {
        Expression::Parenthesized(Box::new(inner))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Literal(_) => "Literal",
            Expression::Symbol(_) => "Symbol",
            Expression::VarArgs => "VarArgs",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Call(_) => "FunctionCall",
            Expression::Function(_) => "AnonymousFunction",
            Expression::Table(_) => "TableConstructor",
            Expression::InterpolatedString(_) => "InterpolatedString",
            Expression::TypeAssertion(_) => "TypeAssertion",
            Expression::IfExpression(_) => "IfExpression",
            Expression::Index(_) => "IndexExpression",
            Expression::Parenthesized(_) => "Parenthesized",
            Expression::Custom(_) => "Custom",
        }
    }

    /// The literal number this expression holds, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expression::Literal(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }
}
