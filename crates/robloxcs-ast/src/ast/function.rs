//! Function bodies, calls and generic declarations.

use serde::{Deserialize, Serialize};

use super::{Block, Expression, TypeInfo};

/// Shared tail of function declarations, local functions and anonymous
/// functions: `<generics>(parameters): return_type ... end`.
///
/// `type_specifiers[i]` annotates `parameters[i]`. The two vectors must have
/// the same length; the renderer aborts on a mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionBody {
    pub generics: Option<GenericDeclaration>,
    pub parameters: Vec<Parameter>,
    pub type_specifiers: Vec<Option<TypeInfo>>,
    pub return_type: Option<TypeInfo>,
    pub body: Block,
}

impl FunctionBody {
    /// An untyped body; one empty type specifier per parameter.
    pub fn new(parameters: Vec<Parameter>, body: Block) -> Self {
        let type_specifiers = vec![None; parameters.len()];
        Self {
            generics: None,
            parameters,
            type_specifiers,
            return_type: None,
            body,
        }
    }

    /// A body whose parameters are all annotated.
    pub fn typed(parameters: Vec<(Parameter, TypeInfo)>, return_type: Option<TypeInfo>, body: Block) -> Self {
        let (parameters, type_specifiers) = parameters
            .into_iter()
            .map(|(parameter, type_info)| (parameter, Some(type_info)))
            .unzip();
        Self {
            generics: None,
            parameters,
            type_specifiers,
            return_type,
            body,
        }
    }

    pub fn with_generics(mut self, generics: GenericDeclaration) -> Self {
        self.generics = Some(generics);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parameter {
    Name(String),
    /// `...`
    Ellipsis,
}

impl Parameter {
    pub fn name(name: impl Into<String>) -> Self {
        Parameter::Name(name.into())
    }
}

/// A call chain: `prefix suffix*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub prefix: Prefix,
    pub suffixes: Vec<Suffix>,
}

impl FunctionCall {
    /// `name(arguments)`
    pub fn named(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            prefix: Prefix::Name(name.into()),
            suffixes: vec![Suffix::Call(FunctionArgs { arguments })],
        }
    }

    /// `object:method(arguments)`
    pub fn method(object: impl Into<String>, method: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            prefix: Prefix::Name(object.into()),
            suffixes: vec![Suffix::MethodCall(MethodCall {
                name: method.into(),
                args: FunctionArgs { arguments },
            })],
        }
    }

    pub fn with_suffix(mut self, suffix: Suffix) -> Self {
        self.suffixes.push(suffix);
        self
    }
}

/// Head of a call chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Prefix {
    Name(String),
    /// `(expression)`
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Suffix {
    /// `(args)`
    Call(FunctionArgs),
    /// `:name(args)`
    MethodCall(MethodCall),
    Index(IndexSuffix),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub name: String,
    pub args: FunctionArgs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndexSuffix {
    /// `.name`
    Dot(String),
    /// `[expression]`
    Brackets(Expression),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionArgs {
    pub arguments: Vec<Expression>,
}

/// `<A, B...>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericDeclaration {
    pub parameters: Vec<GenericParameter>,
}

impl GenericDeclaration {
    pub fn names(names: &[&str]) -> Self {
        Self {
            parameters: names.iter().map(|name| GenericParameter::name(*name)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericParameter {
    pub kind: GenericParameterKind,
    /// Rendered as `extends <constraint>`.
    pub constraint: Option<TypeInfo>,
    /// Rendered as `= <default>`.
    pub default: Option<TypeInfo>,
}

impl GenericParameter {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            kind: GenericParameterKind::Name(name.into()),
            constraint: None,
            default: None,
        }
    }

    pub fn variadic(name: impl Into<String>) -> Self {
        Self {
            kind: GenericParameterKind::Variadic(name.into()),
            constraint: None,
            default: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericParameterKind {
    Name(String),
    /// `Name...`
    Variadic(String),
}
