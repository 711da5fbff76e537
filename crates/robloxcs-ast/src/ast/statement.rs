//! Statement nodes.

use serde::{Deserialize, Serialize};

use super::{Block, CustomNode, Expression, FunctionBody, FunctionCall, GenericDeclaration, TypeInfo};

/// A Luau statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Assignment(Assignment),
    LocalAssignment(LocalAssignment),
    FunctionDeclaration(FunctionDeclaration),
    If(If),
    While(While),
    NumericFor(NumericFor),
    GenericFor(GenericFor),
    Repeat(Repeat),
    Do(Do),
    Return(Return),
    Break,
    Continue,
    Goto(Goto),
    Label(Label),
    Call(FunctionCall),
    TypeDeclaration(TypeDeclaration),
    Comment(Comment),
    Custom(CustomNode),
}

/// `a, b <op> x, y`
///
/// Target and value counts are expected to match; this is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub targets: Vec<Expression>,
    pub operator: AssignmentOperator,
    pub values: Vec<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    Concat,
}

impl AssignmentOperator {
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Sub => "-=",
            AssignmentOperator::Mul => "*=",
            AssignmentOperator::Div => "/=",
            AssignmentOperator::FloorDiv => "//=",
            AssignmentOperator::Mod => "%=",
            AssignmentOperator::Pow => "^=",
            AssignmentOperator::Concat => "..=",
        }
    }
}

/// `local a: T, b = x, y`
///
/// `types[i]` annotates `names[i]`; a missing entry means no annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAssignment {
    pub names: Vec<String>,
    pub types: Vec<Option<TypeInfo>>,
    pub values: Vec<Expression>,
}

impl LocalAssignment {
    pub fn has_type_annotations(&self) -> bool {
        self.types.iter().any(Option::is_some)
    }
}

/// `function a.b:c(...) ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: FunctionName,
    pub body: FunctionBody,
}

/// Dotted name of a declared function, with an optional method part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionName {
    pub path: Vec<String>,
    pub method: Option<String>,
}

impl FunctionName {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            path: vec![name.into()],
            method: None,
        }
    }

    pub fn method(path: Vec<String>, method: impl Into<String>) -> Self {
        Self {
            path,
            method: Some(method.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub condition: Expression,
    pub then_block: Block,
    pub else_ifs: Vec<ElseIf>,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseIf {
    pub condition: Expression,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub condition: Expression,
    pub body: Block,
}

/// `for variable = start, end[, step] do ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFor {
    pub variable: String,
    pub start: Expression,
    pub end: Expression,
    pub step: Option<Expression>,
    pub body: Block,
}

/// `for a, b in expressions do ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericFor {
    pub names: Vec<String>,
    pub expressions: Vec<Expression>,
    pub body: Block,
}

/// `repeat ... until condition`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeat {
    pub body: Block,
    pub until: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Do {
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    pub values: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goto {
    pub label: String,
}

/// `::name::`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// `[export] type Name<generics> = declare_as`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub exported: bool,
    pub name: String,
    pub generics: Option<GenericDeclaration>,
    pub declare_as: TypeInfo,
}

/// `-- text`, one comment line per line of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

impl Statement {
    /// `local name = value`
    pub fn local(name: impl Into<String>, value: Expression) -> Self {
        Statement::LocalAssignment(LocalAssignment {
            names: vec![name.into()],
            types: Vec::new(),
            values: vec![value],
        })
    }

    /// `local name: type_info = value`
    pub fn typed_local(name: impl Into<String>, type_info: TypeInfo, value: Option<Expression>) -> Self {
        Statement::LocalAssignment(LocalAssignment {
            names: vec![name.into()],
            types: vec![Some(type_info)],
            values: value.into_iter().collect(),
        })
    }

    /// `target = value`
    pub fn assign(target: Expression, value: Expression) -> Self {
        Statement::Assignment(Assignment {
            targets: vec![target],
            operator: AssignmentOperator::Assign,
            values: vec![value],
        })
    }

    pub fn compound_assign(target: Expression, operator: AssignmentOperator, value: Expression) -> Self {
        Statement::Assignment(Assignment {
            targets: vec![target],
            operator,
            values: vec![value],
        })
    }

    pub fn function(name: FunctionName, body: FunctionBody) -> Self {
        Statement::FunctionDeclaration(FunctionDeclaration { name, body })
    }

    pub fn if_stmt(condition: Expression, then_block: Block, else_block: Option<Block>) -> Self {
        Statement::If(If {
            condition,
            then_block,
            else_ifs: Vec::new(),
            else_block,
        })
    }

    pub fn while_loop(condition: Expression, body: Block) -> Self {
        Statement::While(While { condition, body })
    }

    pub fn numeric_for(
        variable: impl Into<String>,
        start: Expression,
        end: Expression,
        step: Option<Expression>,
        body: Block,
    ) -> Self {
        Statement::NumericFor(NumericFor {
            variable: variable.into(),
            start,
            end,
            step,
            body,
        })
    }

    pub fn generic_for(names: Vec<String>, expressions: Vec<Expression>, body: Block) -> Self {
        Statement::GenericFor(GenericFor {
            names,
            expressions,
            body,
        })
    }

    pub fn repeat(body: Block, until: Expression) -> Self {
        Statement::Repeat(Repeat { body, until })
    }

    pub fn do_block(body: Block) -> Self {
        Statement::Do(Do { body })
    }

    pub fn return_stmt(values: Vec<Expression>) -> Self {
        Statement::Return(Return { values })
    }

    pub fn goto(label: impl Into<String>) -> Self {
        Statement::Goto(Goto {
            label: label.into(),
        })
    }

    pub fn label(name: impl Into<String>) -> Self {
        Statement::Label(Label { name: name.into() })
    }

    /// `name(arguments)` as a statement.
    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Statement::Call(FunctionCall::named(name, arguments))
    }

    pub fn type_declaration(name: impl Into<String>, declare_as: TypeInfo) -> Self {
        Statement::TypeDeclaration(TypeDeclaration {
            exported: false,
            name: name.into(),
            generics: None,
            declare_as,
        })
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Statement::Comment(Comment { text: text.into() })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Assignment(_) => "Assignment",
            Statement::LocalAssignment(_) => "LocalAssignment",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::If(_) => "If",
            Statement::While(_) => "While",
            Statement::NumericFor(_) => "NumericFor",
            Statement::GenericFor(_) => "GenericFor",
            Statement::Repeat(_) => "Repeat",
            Statement::Do(_) => "Do",
            Statement::Return(_) => "Return",
            Statement::Break => "Break",
            Statement::Continue => "Continue",
            Statement::Goto(_) => "Goto",
            Statement::Label(_) => "Label",
            Statement::Call(_) => "Call",
            Statement::TypeDeclaration(_) => "TypeDeclaration",
            Statement::Comment(_) => "Comment",
            Statement::Custom(_) => "Custom",
        }
    }
}
