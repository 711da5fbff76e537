//! Uniform, borrowed access to any node and its immediate children.
//!
//! `children()` is the single source of structural order: the default
//! visitor walk, node counting and any rewriting pass all go through it.
//! Children are yielded in field declaration order, every time.

use crate::ast::*;

/// A borrowed reference to any syntax tree node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Chunk(&'a Chunk),
    Block(&'a Block),
    Statement(&'a Statement),
    ElseIf(&'a ElseIf),
    Expression(&'a Expression),
    ElseIfExpression(&'a ElseIfExpression),
    InterpolatedSegment(&'a InterpolatedSegment),
    TableField(&'a TableField),
    FunctionBody(&'a FunctionBody),
    FunctionCall(&'a FunctionCall),
    FunctionArgs(&'a FunctionArgs),
    Prefix(&'a Prefix),
    Suffix(&'a Suffix),
    Parameter(&'a Parameter),
    GenericDeclaration(&'a GenericDeclaration),
    GenericParameter(&'a GenericParameter),
    TypeInfo(&'a TypeInfo),
    TypeField(&'a TypeField),
    TypeArgument(&'a TypeArgument),
}

impl<'a> NodeRef<'a> {
    /// Name of the concrete node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeRef::Chunk(_) => "Chunk",
            NodeRef::Block(_) => "Block",
            NodeRef::Statement(node) => node.kind_name(),
            NodeRef::ElseIf(_) => "ElseIf",
            NodeRef::Expression(node) => node.kind_name(),
            NodeRef::ElseIfExpression(_) => "ElseIfExpression",
            NodeRef::InterpolatedSegment(_) => "InterpolatedSegment",
            NodeRef::TableField(_) => "TableField",
            NodeRef::FunctionBody(_) => "FunctionBody",
            NodeRef::FunctionCall(_) => "FunctionCall",
            NodeRef::FunctionArgs(_) => "FunctionArgs",
            NodeRef::Prefix(_) => "Prefix",
            NodeRef::Suffix(_) => "Suffix",
            NodeRef::Parameter(_) => "Parameter",
            NodeRef::GenericDeclaration(_) => "GenericDeclaration",
            NodeRef::GenericParameter(_) => "GenericParameter",
            NodeRef::TypeInfo(node) => node.kind_name(),
            NodeRef::TypeField(_) => "TypeField",
            NodeRef::TypeArgument(_) => "TypeArgument",
        }
    }

    pub fn children(&self) -> Children<'a> {
        match *self {
            NodeRef::Chunk(node) => node.children(),
            NodeRef::Block(node) => node.children(),
            NodeRef::Statement(node) => node.children(),
            NodeRef::ElseIf(node) => node.children(),
            NodeRef::Expression(node) => node.children(),
            NodeRef::ElseIfExpression(node) => node.children(),
            NodeRef::InterpolatedSegment(node) => node.children(),
            NodeRef::TableField(node) => node.children(),
            NodeRef::FunctionBody(node) => node.children(),
            NodeRef::FunctionCall(node) => node.children(),
            NodeRef::FunctionArgs(node) => node.children(),
            NodeRef::Prefix(node) => node.children(),
            NodeRef::Suffix(node) => node.children(),
            NodeRef::Parameter(node) => node.children(),
            NodeRef::GenericDeclaration(node) => node.children(),
            NodeRef::GenericParameter(node) => node.children(),
            NodeRef::TypeInfo(node) => node.children(),
            NodeRef::TypeField(node) => node.children(),
            NodeRef::TypeArgument(node) => node.children(),
        }
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children()
            .map(|child| child.subtree_size())
            .sum::<usize>()
    }
}

/// Immediate children of a node, in canonical order.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    inner: std::vec::IntoIter<NodeRef<'a>>,
}

impl<'a> Children<'a> {
    fn empty() -> Self {
        Self::from(Vec::new())
    }
}

impl<'a> From<Vec<NodeRef<'a>>> for Children<'a> {
    fn from(nodes: Vec<NodeRef<'a>>) -> Self {
        Self {
            inner: nodes.into_iter(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}

/// Structural traversal contract shared by every node type.
pub trait Node {
    /// Immediate structural children in field declaration order.
    fn children(&self) -> Children<'_>;
}

/// Nodes that have their own [`NodeRef`] variant.
pub trait AsNode: Node {
    fn as_node(&self) -> NodeRef<'_>;
}

macro_rules! as_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AsNode for $ty {
                fn as_node(&self) -> NodeRef<'_> {
                    NodeRef::$ty(self)
                }
            }
        )*
    };
}

as_node!(
    Chunk,
    Block,
    Statement,
    ElseIf,
    Expression,
    ElseIfExpression,
    InterpolatedSegment,
    TableField,
    FunctionBody,
    FunctionCall,
    FunctionArgs,
    Prefix,
    Suffix,
    Parameter,
    GenericDeclaration,
    GenericParameter,
    TypeInfo,
    TypeField,
    TypeArgument,
);

fn expressions(values: &[Expression]) -> impl Iterator<Item = NodeRef<'_>> {
    values.iter().map(NodeRef::Expression)
}

fn annotations(types: &[Option<TypeInfo>]) -> impl Iterator<Item = NodeRef<'_>> {
    types.iter().flatten().map(NodeRef::TypeInfo)
}

impl Node for Chunk {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::Block(&self.block)].into()
    }
}

impl Node for Block {
    fn children(&self) -> Children<'_> {
        self.statements
            .iter()
            .map(NodeRef::Statement)
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for Statement {
    fn children(&self) -> Children<'_> {
        match self {
            Statement::Assignment(node) => node.children(),
            Statement::LocalAssignment(node) => node.children(),
            Statement::FunctionDeclaration(node) => node.children(),
            Statement::If(node) => node.children(),
            Statement::While(node) => node.children(),
            Statement::NumericFor(node) => node.children(),
            Statement::GenericFor(node) => node.children(),
            Statement::Repeat(node) => node.children(),
            Statement::Do(node) => node.children(),
            Statement::Return(node) => node.children(),
            Statement::Call(node) => vec![NodeRef::FunctionCall(node)].into(),
            Statement::TypeDeclaration(node) => node.children(),
            Statement::Custom(node) => node.children(),
            Statement::Break
            | Statement::Continue
            | Statement::Goto(_)
            | Statement::Label(_)
            | Statement::Comment(_) => Children::empty(),
        }
    }
}

impl Node for Assignment {
    fn children(&self) -> Children<'_> {
        expressions(&self.targets)
            .chain(expressions(&self.values))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for LocalAssignment {
    fn children(&self) -> Children<'_> {
        annotations(&self.types)
            .chain(expressions(&self.values))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for FunctionDeclaration {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::FunctionBody(&self.body)].into()
    }
}

impl Node for If {
    fn children(&self) -> Children<'_> {
        let mut nodes = vec![
            NodeRef::Expression(&self.condition),
            NodeRef::Block(&self.then_block),
        ];
        nodes.extend(self.else_ifs.iter().map(NodeRef::ElseIf));
        nodes.extend(self.else_block.iter().map(NodeRef::Block));
        nodes.into()
    }
}

impl Node for ElseIf {
    fn children(&self) -> Children<'_> {
        vec![
            NodeRef::Expression(&self.condition),
            NodeRef::Block(&self.block),
        ]
        .into()
    }
}

impl Node for While {
    fn children(&self) -> Children<'_> {
        vec![
            NodeRef::Expression(&self.condition),
            NodeRef::Block(&self.body),
        ]
        .into()
    }
}

impl Node for NumericFor {
    fn children(&self) -> Children<'_> {
        let mut nodes = vec![
            NodeRef::Expression(&self.start),
            NodeRef::Expression(&self.end),
        ];
        nodes.extend(self.step.iter().map(NodeRef::Expression));
        nodes.push(NodeRef::Block(&self.body));
        nodes.into()
    }
}

impl Node for GenericFor {
    fn children(&self) -> Children<'_> {
        expressions(&self.expressions)
            .chain(std::iter::once(NodeRef::Block(&self.body)))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for Repeat {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::Block(&self.body), NodeRef::Expression(&self.until)].into()
    }
}

impl Node for Do {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::Block(&self.body)].into()
    }
}

impl Node for Return {
    fn children(&self) -> Children<'_> {
        expressions(&self.values).collect::<Vec<_>>().into()
    }
}

impl Node for TypeDeclaration {
    fn children(&self) -> Children<'_> {
        self.generics
            .iter()
            .map(NodeRef::GenericDeclaration)
            .chain(std::iter::once(NodeRef::TypeInfo(&self.declare_as)))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for CustomNode {
    fn children(&self) -> Children<'_> {
        expressions(&self.children).collect::<Vec<_>>().into()
    }
}

impl Node for Expression {
    fn children(&self) -> Children<'_> {
        match self {
            Expression::Literal(_) | Expression::Symbol(_) | Expression::VarArgs => {
                Children::empty()
            }
            Expression::Binary(node) => node.children(),
            Expression::Unary(node) => node.children(),
            Expression::Call(node) => vec![NodeRef::FunctionCall(node)].into(),
            Expression::Function(node) => node.children(),
            Expression::Table(node) => node.children(),
            Expression::InterpolatedString(node) => node.children(),
            Expression::TypeAssertion(node) => node.children(),
            Expression::IfExpression(node) => node.children(),
            Expression::Index(node) => node.children(),
            Expression::Parenthesized(inner) => vec![NodeRef::Expression(inner)].into(),
            Expression::Custom(node) => node.children(),
        }
    }
}

impl Node for BinaryExpression {
    fn children(&self) -> Children<'_> {
        vec![
            NodeRef::Expression(&self.left),
            NodeRef::Expression(&self.right),
        ]
        .into()
    }
}

impl Node for UnaryExpression {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::Expression(&self.operand)].into()
    }
}

impl Node for AnonymousFunction {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::FunctionBody(&self.body)].into()
    }
}

impl Node for TableConstructor {
    fn children(&self) -> Children<'_> {
        self.fields
            .iter()
            .map(NodeRef::TableField)
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for TableField {
    fn children(&self) -> Children<'_> {
        match self {
            TableField::NoKey(value) | TableField::NameKey { value, .. } => {
                vec![NodeRef::Expression(value)].into()
            }
            TableField::ExpressionKey { key, value } => {
                vec![NodeRef::Expression(key), NodeRef::Expression(value)].into()
            }
        }
    }
}

impl Node for InterpolatedString {
    fn children(&self) -> Children<'_> {
        self.segments
            .iter()
            .map(NodeRef::InterpolatedSegment)
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for InterpolatedSegment {
    fn children(&self) -> Children<'_> {
        match self {
            InterpolatedSegment::Text(_) => Children::empty(),
            InterpolatedSegment::Expression(expression) => {
                vec![NodeRef::Expression(expression)].into()
            }
        }
    }
}

impl Node for TypeAssertion {
    fn children(&self) -> Children<'_> {
        vec![
            NodeRef::Expression(&self.expression),
            NodeRef::TypeInfo(&self.cast_to),
        ]
        .into()
    }
}

impl Node for IfExpression {
    fn children(&self) -> Children<'_> {
        let mut nodes = vec![
            NodeRef::Expression(&self.condition),
            NodeRef::Expression(&self.then_value),
        ];
        nodes.extend(self.else_ifs.iter().map(NodeRef::ElseIfExpression));
        nodes.push(NodeRef::Expression(&self.else_value));
        nodes.into()
    }
}

impl Node for ElseIfExpression {
    fn children(&self) -> Children<'_> {
        vec![
            NodeRef::Expression(&self.condition),
            NodeRef::Expression(&self.value),
        ]
        .into()
    }
}

impl Node for IndexExpression {
    fn children(&self) -> Children<'_> {
        vec![
            NodeRef::Expression(&self.target),
            NodeRef::Expression(&self.index),
        ]
        .into()
    }
}

impl Node for FunctionBody {
    fn children(&self) -> Children<'_> {
        let mut nodes: Vec<_> = self
            .generics
            .iter()
            .map(NodeRef::GenericDeclaration)
            .collect();
        nodes.extend(self.parameters.iter().map(NodeRef::Parameter));
        nodes.extend(annotations(&self.type_specifiers));
        nodes.extend(self.return_type.iter().map(NodeRef::TypeInfo));
        nodes.push(NodeRef::Block(&self.body));
        nodes.into()
    }
}

impl Node for Parameter {
    fn children(&self) -> Children<'_> {
        Children::empty()
    }
}

impl Node for FunctionCall {
    fn children(&self) -> Children<'_> {
        std::iter::once(NodeRef::Prefix(&self.prefix))
            .chain(self.suffixes.iter().map(NodeRef::Suffix))
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for Prefix {
    fn children(&self) -> Children<'_> {
        match self {
            Prefix::Name(_) => Children::empty(),
            Prefix::Expression(expression) => vec![NodeRef::Expression(expression)].into(),
        }
    }
}

impl Node for Suffix {
    fn children(&self) -> Children<'_> {
        match self {
            Suffix::Call(args) => vec![NodeRef::FunctionArgs(args)].into(),
            Suffix::MethodCall(call) => vec![NodeRef::FunctionArgs(&call.args)].into(),
            Suffix::Index(IndexSuffix::Dot(_)) => Children::empty(),
            Suffix::Index(IndexSuffix::Brackets(expression)) => {
                vec![NodeRef::Expression(expression)].into()
            }
        }
    }
}

impl Node for FunctionArgs {
    fn children(&self) -> Children<'_> {
        expressions(&self.arguments).collect::<Vec<_>>().into()
    }
}

impl Node for GenericDeclaration {
    fn children(&self) -> Children<'_> {
        self.parameters
            .iter()
            .map(NodeRef::GenericParameter)
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for GenericParameter {
    fn children(&self) -> Children<'_> {
        self.constraint
            .iter()
            .chain(self.default.iter())
            .map(NodeRef::TypeInfo)
            .collect::<Vec<_>>()
            .into()
    }
}

impl Node for TypeInfo {
    fn children(&self) -> Children<'_> {
        match self {
            TypeInfo::Basic(_) | TypeInfo::BooleanLiteral(_) | TypeInfo::StringLiteral(_) => {
                Children::empty()
            }
            TypeInfo::Array { element, .. } => vec![NodeRef::TypeInfo(element)].into(),
            TypeInfo::Table { fields } => fields
                .iter()
                .map(NodeRef::TypeField)
                .collect::<Vec<_>>()
                .into(),
            TypeInfo::Tuple { elements, variadic } => elements
                .iter()
                .chain(variadic.as_deref())
                .map(NodeRef::TypeInfo)
                .collect::<Vec<_>>()
                .into(),
            TypeInfo::Union(members)
            | TypeInfo::Intersection(members)
            | TypeInfo::Generic {
                arguments: members, ..
            } => members
                .iter()
                .map(NodeRef::TypeInfo)
                .collect::<Vec<_>>()
                .into(),
            TypeInfo::Optional(inner) | TypeInfo::Variadic(inner) => {
                vec![NodeRef::TypeInfo(inner)].into()
            }
            TypeInfo::Callback {
                generics,
                arguments,
                return_type,
            } => {
                let mut nodes: Vec<_> = generics.iter().map(NodeRef::GenericDeclaration).collect();
                nodes.extend(arguments.iter().map(NodeRef::TypeArgument));
                nodes.push(NodeRef::TypeInfo(return_type));
                nodes.into()
            }
            TypeInfo::Typeof(expression) => vec![NodeRef::Expression(expression)].into(),
        }
    }
}

impl Node for TypeField {
    fn children(&self) -> Children<'_> {
        match &self.key {
            TypeFieldKey::Name(_) => vec![NodeRef::TypeInfo(&self.value)].into(),
            TypeFieldKey::Computed(key) => {
                vec![NodeRef::TypeInfo(key), NodeRef::TypeInfo(&self.value)].into()
            }
        }
    }
}

impl Node for TypeArgument {
    fn children(&self) -> Children<'_> {
        vec![NodeRef::TypeInfo(&self.type_info)].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(children: Children<'_>) -> Vec<&'static str> {
        children.map(|child| child.kind_name()).collect()
    }

    #[test]
    fn test_binary_children_are_left_then_right() {
        let expr = Expression::binary(
            Expression::symbol("a"),
            BinaryOperator::Minus,
            Expression::number(1),
        );
        let children: Vec<_> = expr.children().collect();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], NodeRef::Expression(Expression::Symbol(name)) if name == "a"));
        assert!(matches!(
            children[1],
            NodeRef::Expression(Expression::Literal(Literal::Number(n))) if *n == 1.0
        ));
    }

    #[test]
    fn test_numeric_for_children_order() {
        let with_step = Statement::numeric_for(
            "i",
            Expression::number(0),
            Expression::number(10),
            Some(Expression::number(2)),
            Block::empty(),
        );
        assert_eq!(
            kinds(with_step.children()),
            vec!["Literal", "Literal", "Literal", "Block"]
        );

        let without_step =
            Statement::numeric_for("i", Expression::number(0), Expression::number(10), None, Block::empty());
        assert_eq!(kinds(without_step.children()), vec!["Literal", "Literal", "Block"]);
    }

    #[test]
    fn test_if_children_order() {
        let stmt = Statement::If(If {
            condition: Expression::symbol("a"),
            then_block: Block::empty(),
            else_ifs: vec![ElseIf {
                condition: Expression::symbol("b"),
                block: Block::empty(),
            }],
            else_block: Some(Block::empty()),
        });
        assert_eq!(
            kinds(stmt.children()),
            vec!["Symbol", "Block", "ElseIf", "Block"]
        );
    }

    #[test]
    fn test_function_body_children_order() {
        let body = FunctionBody {
            generics: Some(GenericDeclaration::names(&["T"])),
            parameters: vec![Parameter::name("a"), Parameter::Ellipsis],
            type_specifiers: vec![Some(TypeInfo::basic("T")), None],
            return_type: Some(TypeInfo::basic("number")),
            body: Block::empty(),
        };
        assert_eq!(
            kinds(body.children()),
            vec![
                "GenericDeclaration",
                "Parameter",
                "Parameter",
                "BasicType",
                "BasicType",
                "Block"
            ]
        );
    }

    #[test]
    fn test_expression_pairs_children_order() {
        let assertion = Expression::type_assertion(Expression::symbol("x"), TypeInfo::basic("any"));
        assert_eq!(kinds(assertion.children()), vec!["Symbol", "BasicType"]);

        let index = Expression::index(Expression::symbol("t"), Expression::number(1));
        assert_eq!(kinds(index.children()), vec!["Symbol", "Literal"]);

        let field = TableField::computed(Expression::string("k"), Expression::symbol("v"));
        assert_eq!(kinds(field.children()), vec!["Literal", "Symbol"]);
    }

    #[test]
    fn test_generic_parameter_constraint_before_default() {
        let parameter = GenericParameter {
            kind: GenericParameterKind::Name("T".into()),
            constraint: Some(TypeInfo::basic("Instance")),
            default: Some(TypeInfo::optional(TypeInfo::basic("Part"))),
        };
        assert_eq!(kinds(parameter.children()), vec!["BasicType", "OptionalType"]);

        let default_only = GenericParameter {
            default: Some(TypeInfo::basic("Part")),
            ..GenericParameter::name("T")
        };
        assert_eq!(kinds(default_only.children()), vec!["BasicType"]);
    }

    #[test]
    fn test_type_children_order() {
        let computed = TypeField::indexer(
            TypeInfo::basic("string"),
            TypeInfo::array(TypeInfo::basic("number")),
        );
        assert_eq!(kinds(computed.children()), vec!["BasicType", "ArrayType"]);

        let callback = TypeInfo::Callback {
            generics: Some(GenericDeclaration::names(&["T"])),
            arguments: vec![
                TypeArgument {
                    name: Some("value".into()),
                    type_info: TypeInfo::basic("T"),
                },
                TypeArgument {
                    name: None,
                    type_info: TypeInfo::basic("number"),
                },
            ],
            return_type: Box::new(TypeInfo::tuple(vec![])),
        };
        assert_eq!(
            kinds(callback.children()),
            vec!["GenericDeclaration", "TypeArgument", "TypeArgument", "TupleType"]
        );
    }

    #[test]
    fn test_local_assignment_annotations_before_values() {
        let local = Statement::LocalAssignment(LocalAssignment {
            names: vec!["a".into(), "b".into(), "c".into()],
            types: vec![
                Some(TypeInfo::optional(TypeInfo::basic("number"))),
                None,
                Some(TypeInfo::array(TypeInfo::basic("string"))),
            ],
            values: vec![Expression::symbol("x"), Expression::number(1)],
        });
        assert_eq!(
            kinds(local.children()),
            vec!["OptionalType", "ArrayType", "Symbol", "Literal"]
        );
    }

    #[test]
    fn test_children_are_deterministic() {
        let call = Expression::Call(
            FunctionCall::method("obj", "run", vec![Expression::number(1), Expression::symbol("x")])
                .with_suffix(Suffix::Index(IndexSuffix::Brackets(Expression::string("k")))),
        );
        let first = kinds(NodeRef::Expression(&call).children());
        for _ in 0..3 {
            assert_eq!(kinds(call.as_node().children()), first);
        }
    }

    #[test]
    fn test_leaves_have_no_children() {
        assert_eq!(Expression::VarArgs.children().len(), 0);
        assert_eq!(Statement::Break.children().len(), 0);
        assert_eq!(TypeInfo::basic("string").children().len(), 0);
        assert_eq!(Parameter::Ellipsis.children().len(), 0);
    }

    #[test]
    fn test_subtree_size() {
        let chunk = Chunk::new(vec![Statement::local(
            "x",
            Expression::binary(Expression::number(1), BinaryOperator::Plus, Expression::number(2)),
        )]);
        // chunk, block, local, binary, 1, 2
        assert_eq!(chunk.as_node().subtree_size(), 6);
    }
}
