//! Type annotations.

use serde::{Deserialize, Serialize};

use super::{Expression, GenericDeclaration};

/// A Luau type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeInfo {
    /// `number`, `Instance`, `Module.Type`
    Basic(String),
    BooleanLiteral(bool),
    StringLiteral(String),
    /// `{ T }`
    Array {
        element: Box<TypeInfo>,
        access: Option<AccessModifier>,
    },
    /// `{ name: T, [K]: V }`
    Table { fields: Vec<TypeField> },
    /// `(A, B, ...C)`
    Tuple {
        elements: Vec<TypeInfo>,
        variadic: Option<Box<TypeInfo>>,
    },
    Union(Vec<TypeInfo>),
    Intersection(Vec<TypeInfo>),
    /// `T?`
    Optional(Box<TypeInfo>),
    /// `<G>(a: A, B) -> R`
    Callback {
        generics: Option<GenericDeclaration>,
        arguments: Vec<TypeArgument>,
        return_type: Box<TypeInfo>,
    },
    /// `typeof(expression)`
    Typeof(Box<Expression>),
    /// `...T`
    Variadic(Box<TypeInfo>),
    /// `Base<A, B>`
    Generic {
        base: String,
        arguments: Vec<TypeInfo>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessModifier {
    Read,
    Write,
}

impl AccessModifier {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessModifier::Read => "read",
            AccessModifier::Write => "write",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeField {
    pub access: Option<AccessModifier>,
    pub key: TypeFieldKey,
    pub value: TypeInfo,
}

impl TypeField {
    pub fn named(key: impl Into<String>, value: TypeInfo) -> Self {
        Self {
            access: None,
            key: TypeFieldKey::Name(key.into()),
            value,
        }
    }

    pub fn indexer(key: TypeInfo, value: TypeInfo) -> Self {
        Self {
            access: None,
            key: TypeFieldKey::Computed(key),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeFieldKey {
    Name(String),
    /// `[K]`
    Computed(TypeInfo),
}

/// One argument of a callback type, optionally named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeArgument {
    pub name: Option<String>,
    pub type_info: TypeInfo,
}

impl TypeInfo {
    pub fn basic(name: impl Into<String>) -> Self {
        TypeInfo::Basic(name.into())
    }

    pub fn array(element: TypeInfo) -> Self {
        TypeInfo::Array {
            element: Box::new(element),
            access: None,
        }
    }

    pub fn optional(inner: TypeInfo) -> Self {
        TypeInfo::Optional(Box::new(inner))
    }

    pub fn tuple(elements: Vec<TypeInfo>) -> Self {
        TypeInfo::Tuple {
            elements,
            variadic: None,
        }
    }

    pub fn callback(arguments: Vec<TypeInfo>, return_type: TypeInfo) -> Self {
        TypeInfo::Callback {
            generics: None,
            arguments: arguments
                .into_iter()
                .map(|type_info| TypeArgument {
                    name: None,
                    type_info,
                })
                .collect(),
            return_type: Box::new(return_type),
        }
    }

    pub fn generic(base: impl Into<String>, arguments: Vec<TypeInfo>) -> Self {
        TypeInfo::Generic {
            base: base.into(),
            arguments,
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, TypeInfo::Basic(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeInfo::Basic(_) => "BasicType",
            TypeInfo::BooleanLiteral(_) => "BooleanLiteralType",
            TypeInfo::StringLiteral(_) => "StringLiteralType",
            TypeInfo::Array { .. } => "ArrayType",
            TypeInfo::Table { .. } => "TableType",
            TypeInfo::Tuple { .. } => "TupleType",
            TypeInfo::Union(_) => "UnionType",
            TypeInfo::Intersection(_) => "IntersectionType",
            TypeInfo::Optional(_) => "OptionalType",
            TypeInfo::Callback { .. } => "CallbackType",
            TypeInfo::Typeof(_) => "TypeofType",
            TypeInfo::Variadic(_) => "VariadicType",
            TypeInfo::Generic { .. } => "GenericType",
        }
    }
}
