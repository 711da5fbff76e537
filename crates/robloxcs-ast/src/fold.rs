//! Node-transforming traversal.
//!
//! Each `fold_*` method takes a node by value and returns its replacement.
//! The defaults rebuild the node from its folded children, so a fold that
//! overrides nothing returns an equal tree.

use crate::ast::*;

pub trait Fold {
    fn fold_chunk(&mut self, node: Chunk) -> Chunk {
        Chunk {
            block: self.fold_block(node.block),
        }
    }

    fn fold_block(&mut self, node: Block) -> Block {
        Block {
            statements: node
                .statements
                .into_iter()
                .map(|statement| self.fold_statement(statement))
                .collect(),
        }
    }

    fn fold_statement(&mut self, node: Statement) -> Statement {
        walk_statement(self, node)
    }

    fn fold_assignment(&mut self, node: Assignment) -> Assignment {
        walk_assignment(self, node)
    }

    fn fold_local_assignment(&mut self, node: LocalAssignment) -> LocalAssignment {
        walk_local_assignment(self, node)
    }

    fn fold_function_declaration(&mut self, node: FunctionDeclaration) -> FunctionDeclaration {
        walk_function_declaration(self, node)
    }

    fn fold_if(&mut self, node: If) -> If {
        walk_if(self, node)
    }

    fn fold_while(&mut self, node: While) -> While {
        walk_while(self, node)
    }

    fn fold_numeric_for(&mut self, node: NumericFor) -> NumericFor {
        walk_numeric_for(self, node)
    }

    fn fold_generic_for(&mut self, node: GenericFor) -> GenericFor {
        walk_generic_for(self, node)
    }

    fn fold_repeat(&mut self, node: Repeat) -> Repeat {
        walk_repeat(self, node)
    }

    fn fold_do(&mut self, node: Do) -> Do {
        walk_do(self, node)
    }

    fn fold_return(&mut self, node: Return) -> Return {
        walk_return(self, node)
    }

    fn fold_type_declaration(&mut self, node: TypeDeclaration) -> TypeDeclaration {
        walk_type_declaration(self, node)
    }

    fn fold_expression(&mut self, node: Expression) -> Expression {
        walk_expression(self, node)
    }

    fn fold_binary(&mut self, node: BinaryExpression) -> BinaryExpression {
        walk_binary(self, node)
    }

    fn fold_unary(&mut self, node: UnaryExpression) -> UnaryExpression {
        walk_unary(self, node)
    }

    fn fold_anonymous_function(&mut self, node: AnonymousFunction) -> AnonymousFunction {
        walk_anonymous_function(self, node)
    }

    fn fold_interpolated_string(&mut self, node: InterpolatedString) -> InterpolatedString {
        walk_interpolated_string(self, node)
    }

    fn fold_type_assertion(&mut self, node: TypeAssertion) -> TypeAssertion {
        walk_type_assertion(self, node)
    }

    fn fold_if_expression(&mut self, node: IfExpression) -> IfExpression {
        walk_if_expression(self, node)
    }

    fn fold_index(&mut self, node: IndexExpression) -> IndexExpression {
        walk_index(self, node)
    }

    fn fold_type_info(&mut self, node: TypeInfo) -> TypeInfo {
        walk_type_info(self, node)
    }

    fn fold_function_body(&mut self, node: FunctionBody) -> FunctionBody {
        FunctionBody {
            generics: node.generics.map(|generics| self.fold_generic_declaration(generics)),
            parameters: node.parameters,
            type_specifiers: self.fold_annotations(node.type_specifiers),
            return_type: node.return_type.map(|ty| self.fold_type_info(ty)),
            body: self.fold_block(node.body),
        }
    }

    fn fold_function_call(&mut self, node: FunctionCall) -> FunctionCall {
        FunctionCall {
            prefix: match node.prefix {
                Prefix::Expression(expression) => {
                    Prefix::Expression(Box::new(self.fold_expression(*expression)))
                }
                name @ Prefix::Name(_) => name,
            },
            suffixes: node
                .suffixes
                .into_iter()
                .map(|suffix| self.fold_suffix(suffix))
                .collect(),
        }
    }

    fn fold_suffix(&mut self, node: Suffix) -> Suffix {
        match node {
            Suffix::Call(args) => Suffix::Call(self.fold_function_args(args)),
            Suffix::MethodCall(call) => Suffix::MethodCall(MethodCall {
                name: call.name,
                args: self.fold_function_args(call.args),
            }),
            Suffix::Index(IndexSuffix::Brackets(expression)) => {
                Suffix::Index(IndexSuffix::Brackets(self.fold_expression(expression)))
            }
            dot @ Suffix::Index(IndexSuffix::Dot(_)) => dot,
        }
    }

    fn fold_function_args(&mut self, node: FunctionArgs) -> FunctionArgs {
        FunctionArgs {
            arguments: self.fold_expressions(node.arguments),
        }
    }

    fn fold_table_constructor(&mut self, node: TableConstructor) -> TableConstructor {
        walk_table_constructor(self, node)
    }

    fn fold_generic_declaration(&mut self, node: GenericDeclaration) -> GenericDeclaration {
        GenericDeclaration {
            parameters: node
                .parameters
                .into_iter()
                .map(|parameter| GenericParameter {
                    kind: parameter.kind,
                    constraint: parameter.constraint.map(|ty| self.fold_type_info(ty)),
                    default: parameter.default.map(|ty| self.fold_type_info(ty)),
                })
                .collect(),
        }
    }

    fn fold_custom(&mut self, node: CustomNode) -> CustomNode {
        CustomNode {
            kind: node.kind,
            children: self.fold_expressions(node.children),
        }
    }

    fn fold_expressions(&mut self, nodes: Vec<Expression>) -> Vec<Expression> {
        nodes
            .into_iter()
            .map(|expression| self.fold_expression(expression))
            .collect()
    }

    fn fold_annotations(&mut self, nodes: Vec<Option<TypeInfo>>) -> Vec<Option<TypeInfo>> {
        nodes
            .into_iter()
            .map(|ty| ty.map(|ty| self.fold_type_info(ty)))
            .collect()
    }
}

/// Route a statement to its variant's `fold_*` method.
pub fn walk_statement<F: Fold + ?Sized>(folder: &mut F, node: Statement) -> Statement {
    match node {
        Statement::Assignment(node) => Statement::Assignment(folder.fold_assignment(node)),
        Statement::LocalAssignment(node) => {
            Statement::LocalAssignment(folder.fold_local_assignment(node))
        }
        Statement::FunctionDeclaration(node) => {
            Statement::FunctionDeclaration(folder.fold_function_declaration(node))
        }
        Statement::If(node) => Statement::If(folder.fold_if(node)),
        Statement::While(node) => Statement::While(folder.fold_while(node)),
        Statement::NumericFor(node) => Statement::NumericFor(folder.fold_numeric_for(node)),
        Statement::GenericFor(node) => Statement::GenericFor(folder.fold_generic_for(node)),
        Statement::Repeat(node) => Statement::Repeat(folder.fold_repeat(node)),
        Statement::Do(node) => Statement::Do(folder.fold_do(node)),
        Statement::Return(node) => Statement::Return(folder.fold_return(node)),
        Statement::Call(node) => Statement::Call(folder.fold_function_call(node)),
        Statement::TypeDeclaration(node) => {
            Statement::TypeDeclaration(folder.fold_type_declaration(node))
        }
        Statement::Custom(node) => Statement::Custom(folder.fold_custom(node)),
        leaf @ (Statement::Break
        | Statement::Continue
        | Statement::Goto(_)
        | Statement::Label(_)
        | Statement::Comment(_)) => leaf,
    }
}

pub fn walk_assignment<F: Fold + ?Sized>(folder: &mut F, node: Assignment) -> Assignment {
    Assignment {
        targets: folder.fold_expressions(node.targets),
        operator: node.operator,
        values: folder.fold_expressions(node.values),
    }
}

pub fn walk_local_assignment<F: Fold + ?Sized>(
    folder: &mut F,
    node: LocalAssignment,
) -> LocalAssignment {
    LocalAssignment {
        names: node.names,
        types: folder.fold_annotations(node.types),
        values: folder.fold_expressions(node.values),
    }
}

pub fn walk_function_declaration<F: Fold + ?Sized>(
    folder: &mut F,
    node: FunctionDeclaration,
) -> FunctionDeclaration {
    FunctionDeclaration {
        name: node.name,
        body: folder.fold_function_body(node.body),
    }
}

pub fn walk_if<F: Fold + ?Sized>(folder: &mut F, node: If) -> If {
    If {
        condition: folder.fold_expression(node.condition),
        then_block: folder.fold_block(node.then_block),
        else_ifs: node
            .else_ifs
            .into_iter()
            .map(|branch| ElseIf {
                condition: folder.fold_expression(branch.condition),
                block: folder.fold_block(branch.block),
            })
            .collect(),
        else_block: node.else_block.map(|block| folder.fold_block(block)),
    }
}

pub fn walk_while<F: Fold + ?Sized>(folder: &mut F, node: While) -> While {
    While {
        condition: folder.fold_expression(node.condition),
        body: folder.fold_block(node.body),
    }
}

pub fn walk_numeric_for<F: Fold + ?Sized>(folder: &mut F, node: NumericFor) -> NumericFor {
    NumericFor {
        variable: node.variable,
        start: folder.fold_expression(node.start),
        end: folder.fold_expression(node.end),
        step: node.step.map(|step| folder.fold_expression(step)),
        body: folder.fold_block(node.body),
    }
}

pub fn walk_generic_for<F: Fold + ?Sized>(folder: &mut F, node: GenericFor) -> GenericFor {
    GenericFor {
        names: node.names,
        expressions: folder.fold_expressions(node.expressions),
        body: folder.fold_block(node.body),
    }
}

pub fn walk_repeat<F: Fold + ?Sized>(folder: &mut F, node: Repeat) -> Repeat {
    Repeat {
        body: folder.fold_block(node.body),
        until: folder.fold_expression(node.until),
    }
}

pub fn walk_do<F: Fold + ?Sized>(folder: &mut F, node: Do) -> Do {
    Do {
        body: folder.fold_block(node.body),
    }
}

pub fn walk_return<F: Fold + ?Sized>(folder: &mut F, node: Return) -> Return {
    Return {
        values: folder.fold_expressions(node.values),
    }
}

pub fn walk_type_declaration<F: Fold + ?Sized>(
    folder: &mut F,
    node: TypeDeclaration,
) -> TypeDeclaration {
    TypeDeclaration {
        exported: node.exported,
        name: node.name,
        generics: node
            .generics
            .map(|generics| folder.fold_generic_declaration(generics)),
        declare_as: folder.fold_type_info(node.declare_as),
    }
}

/// Route an expression to its variant's `fold_*` method.
pub fn walk_expression<F: Fold + ?Sized>(folder: &mut F, node: Expression) -> Expression {
    match node {
        Expression::Binary(node) => Expression::Binary(folder.fold_binary(node)),
        Expression::Unary(node) => Expression::Unary(folder.fold_unary(node)),
        Expression::Call(node) => Expression::Call(folder.fold_function_call(node)),
        Expression::Function(node) => Expression::Function(folder.fold_anonymous_function(node)),
        Expression::Table(node) => Expression::Table(folder.fold_table_constructor(node)),
        Expression::InterpolatedString(node) => {
            Expression::InterpolatedString(folder.fold_interpolated_string(node))
        }
        Expression::TypeAssertion(node) => {
            Expression::TypeAssertion(folder.fold_type_assertion(node))
        }
        Expression::IfExpression(node) => Expression::IfExpression(folder.fold_if_expression(node)),
        Expression::Index(node) => Expression::Index(folder.fold_index(node)),
        Expression::Parenthesized(inner) => {
            Expression::Parenthesized(Box::new(folder.fold_expression(*inner)))
        }
        Expression::Custom(node) => Expression::Custom(folder.fold_custom(node)),
        leaf @ (Expression::Literal(_) | Expression::Symbol(_) | Expression::VarArgs) => leaf,
    }
}

pub fn walk_binary<F: Fold + ?Sized>(folder: &mut F, node: BinaryExpression) -> BinaryExpression {
    BinaryExpression {
        left: Box::new(folder.fold_expression(*node.left)),
        operator: node.operator,
        right: Box::new(folder.fold_expression(*node.right)),
    }
}

pub fn walk_unary<F: Fold + ?Sized>(folder: &mut F, node: UnaryExpression) -> UnaryExpression {
    UnaryExpression {
        operator: node.operator,
        operand: Box::new(folder.fold_expression(*node.operand)),
    }
}

pub fn walk_anonymous_function<F: Fold + ?Sized>(
    folder: &mut F,
    node: AnonymousFunction,
) -> AnonymousFunction {
    AnonymousFunction {
        body: folder.fold_function_body(node.body),
    }
}

pub fn walk_interpolated_string<F: Fold + ?Sized>(
    folder: &mut F,
    node: InterpolatedString,
) -> InterpolatedString {
    InterpolatedString {
        segments: node
            .segments
            .into_iter()
            .map(|segment| match segment {
                InterpolatedSegment::Expression(expression) => {
                    InterpolatedSegment::Expression(folder.fold_expression(expression))
                }
                text @ InterpolatedSegment::Text(_) => text,
            })
            .collect(),
    }
}

pub fn walk_type_assertion<F: Fold + ?Sized>(folder: &mut F, node: TypeAssertion) -> TypeAssertion {
    TypeAssertion {
        expression: Box::new(folder.fold_expression(*node.expression)),
        cast_to: folder.fold_type_info(node.cast_to),
    }
}

pub fn walk_if_expression<F: Fold + ?Sized>(folder: &mut F, node: IfExpression) -> IfExpression {
    IfExpression {
        condition: Box::new(folder.fold_expression(*node.condition)),
        then_value: Box::new(folder.fold_expression(*node.then_value)),
        else_ifs: node
            .else_ifs
            .into_iter()
            .map(|branch| ElseIfExpression {
                condition: folder.fold_expression(branch.condition),
                value: folder.fold_expression(branch.value),
            })
            .collect(),
        else_value: Box::new(folder.fold_expression(*node.else_value)),
    }
}

pub fn walk_index<F: Fold + ?Sized>(folder: &mut F, node: IndexExpression) -> IndexExpression {
    IndexExpression {
        target: Box::new(folder.fold_expression(*node.target)),
        index: Box::new(folder.fold_expression(*node.index)),
    }
}

/// Rebuild a table constructor from its folded fields.
pub fn walk_table_constructor<F: Fold + ?Sized>(
    folder: &mut F,
    node: TableConstructor,
) -> TableConstructor {
    TableConstructor {
        fields: node
            .fields
            .into_iter()
            .map(|field| match field {
                TableField::NoKey(value) => TableField::NoKey(folder.fold_expression(value)),
                TableField::NameKey { key, value } => TableField::NameKey {
                    key,
                    value: folder.fold_expression(value),
                },
                TableField::ExpressionKey { key, value } => TableField::ExpressionKey {
                    key: folder.fold_expression(key),
                    value: folder.fold_expression(value),
                },
            })
            .collect(),
        padded: node.padded,
    }
}

/// Rebuild a type from its folded children.
pub fn walk_type_info<F: Fold + ?Sized>(folder: &mut F, node: TypeInfo) -> TypeInfo {
    match node {
        TypeInfo::Array { element, access } => TypeInfo::Array {
            element: Box::new(folder.fold_type_info(*element)),
            access,
        },
        TypeInfo::Table { fields } => TypeInfo::Table {
            fields: fields
                .into_iter()
                .map(|field| TypeField {
                    access: field.access,
                    key: match field.key {
                        TypeFieldKey::Computed(key) => {
                            TypeFieldKey::Computed(folder.fold_type_info(key))
                        }
                        name @ TypeFieldKey::Name(_) => name,
                    },
                    value: folder.fold_type_info(field.value),
                })
                .collect(),
        },
        TypeInfo::Tuple { elements, variadic } => TypeInfo::Tuple {
            elements: fold_types(folder, elements),
            variadic: variadic.map(|tail| Box::new(folder.fold_type_info(*tail))),
        },
        TypeInfo::Union(members) => TypeInfo::Union(fold_types(folder, members)),
        TypeInfo::Intersection(members) => TypeInfo::Intersection(fold_types(folder, members)),
        TypeInfo::Optional(inner) => TypeInfo::Optional(Box::new(folder.fold_type_info(*inner))),
        TypeInfo::Callback {
            generics,
            arguments,
            return_type,
        } => TypeInfo::Callback {
            generics: generics.map(|generics| folder.fold_generic_declaration(generics)),
            arguments: arguments
                .into_iter()
                .map(|argument| TypeArgument {
                    name: argument.name,
                    type_info: folder.fold_type_info(argument.type_info),
                })
                .collect(),
            return_type: Box::new(folder.fold_type_info(*return_type)),
        },
        TypeInfo::Typeof(expression) => {
            TypeInfo::Typeof(Box::new(folder.fold_expression(*expression)))
        }
        TypeInfo::Variadic(inner) => TypeInfo::Variadic(Box::new(folder.fold_type_info(*inner))),
        TypeInfo::Generic { base, arguments } => TypeInfo::Generic {
            base,
            arguments: fold_types(folder, arguments),
        },
        leaf @ (TypeInfo::Basic(_) | TypeInfo::BooleanLiteral(_) | TypeInfo::StringLiteral(_)) => {
            leaf
        }
    }
}

fn fold_types<F: Fold + ?Sized>(folder: &mut F, nodes: Vec<TypeInfo>) -> Vec<TypeInfo> {
    nodes
        .into_iter()
        .map(|ty| folder.fold_type_info(ty))
        .collect()
}
