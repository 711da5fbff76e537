//! Side-effecting traversal.
//!
//! Every method has a default that recurses into the node's children through
//! [`Node::children`], so an implementor only overrides the kinds it cares
//! about. The `walk_*` functions expose that default recursion to overrides
//! that still want to descend.

use crate::ast::*;
use crate::node::{Children, Node, NodeRef};

pub trait Visit {
    fn visit_chunk(&mut self, node: &Chunk) {
        walk_children(self, node.children());
    }

    fn visit_block(&mut self, node: &Block) {
        walk_children(self, node.children());
    }

    fn visit_statement(&mut self, node: &Statement) {
        walk_statement(self, node);
    }

    fn visit_assignment(&mut self, node: &Assignment) {
        walk_children(self, node.children());
    }

    fn visit_local_assignment(&mut self, node: &LocalAssignment) {
        walk_children(self, node.children());
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        walk_children(self, node.children());
    }

    fn visit_if(&mut self, node: &If) {
        walk_children(self, node.children());
    }

    fn visit_else_if(&mut self, node: &ElseIf) {
        walk_children(self, node.children());
    }

    fn visit_while(&mut self, node: &While) {
        walk_children(self, node.children());
    }

    fn visit_numeric_for(&mut self, node: &NumericFor) {
        walk_children(self, node.children());
    }

    fn visit_generic_for(&mut self, node: &GenericFor) {
        walk_children(self, node.children());
    }

    fn visit_repeat(&mut self, node: &Repeat) {
        walk_children(self, node.children());
    }

    fn visit_do(&mut self, node: &Do) {
        walk_children(self, node.children());
    }

    fn visit_return(&mut self, node: &Return) {
        walk_children(self, node.children());
    }

    fn visit_break(&mut self) {}

    fn visit_continue(&mut self) {}

    fn visit_goto(&mut self, _node: &Goto) {}

    fn visit_label(&mut self, _node: &Label) {}

    /// A call in statement position. Defaults to [`Visit::visit_function_call`].
    fn visit_call_statement(&mut self, node: &FunctionCall) {
        self.visit_function_call(node);
    }

    fn visit_type_declaration(&mut self, node: &TypeDeclaration) {
        walk_children(self, node.children());
    }

    fn visit_comment(&mut self, _node: &Comment) {}

    fn visit_custom_statement(&mut self, node: &CustomNode) {
        walk_children(self, node.children());
    }

    fn visit_expression(&mut self, node: &Expression) {
        walk_expression(self, node);
    }

    fn visit_literal(&mut self, _node: &Literal) {}

    fn visit_symbol(&mut self, _name: &str) {}

    fn visit_var_args(&mut self) {}

    fn visit_binary(&mut self, node: &BinaryExpression) {
        walk_children(self, node.children());
    }

    fn visit_unary(&mut self, node: &UnaryExpression) {
        walk_children(self, node.children());
    }

    fn visit_function_call(&mut self, node: &FunctionCall) {
        walk_children(self, node.children());
    }

    fn visit_anonymous_function(&mut self, node: &AnonymousFunction) {
        walk_children(self, node.children());
    }

    fn visit_table_constructor(&mut self, node: &TableConstructor) {
        walk_children(self, node.children());
    }

    fn visit_table_field(&mut self, node: &TableField) {
        walk_children(self, node.children());
    }

    fn visit_interpolated_string(&mut self, node: &InterpolatedString) {
        walk_children(self, node.children());
    }

    fn visit_interpolated_segment(&mut self, node: &InterpolatedSegment) {
        walk_children(self, node.children());
    }

    fn visit_type_assertion(&mut self, node: &TypeAssertion) {
        walk_children(self, node.children());
    }

    fn visit_if_expression(&mut self, node: &IfExpression) {
        walk_children(self, node.children());
    }

    fn visit_else_if_expression(&mut self, node: &ElseIfExpression) {
        walk_children(self, node.children());
    }

    fn visit_index(&mut self, node: &IndexExpression) {
        walk_children(self, node.children());
    }

    fn visit_parenthesized(&mut self, inner: &Expression) {
        self.visit_expression(inner);
    }

    fn visit_custom_expression(&mut self, node: &CustomNode) {
        walk_children(self, node.children());
    }

    fn visit_function_body(&mut self, node: &FunctionBody) {
        walk_children(self, node.children());
    }

    fn visit_function_args(&mut self, node: &FunctionArgs) {
        walk_children(self, node.children());
    }

    fn visit_prefix(&mut self, node: &Prefix) {
        walk_children(self, node.children());
    }

    fn visit_suffix(&mut self, node: &Suffix) {
        walk_children(self, node.children());
    }

    fn visit_parameter(&mut self, _node: &Parameter) {}

    fn visit_generic_declaration(&mut self, node: &GenericDeclaration) {
        walk_children(self, node.children());
    }

    fn visit_generic_parameter(&mut self, node: &GenericParameter) {
        walk_children(self, node.children());
    }

    fn visit_type_info(&mut self, node: &TypeInfo) {
        walk_children(self, node.children());
    }

    fn visit_type_field(&mut self, node: &TypeField) {
        walk_children(self, node.children());
    }

    fn visit_type_argument(&mut self, node: &TypeArgument) {
        walk_children(self, node.children());
    }
}

/// Dispatch a borrowed node to the matching `visit_*` method.
pub fn visit_node<V: Visit + ?Sized>(visitor: &mut V, node: NodeRef<'_>) {
    match node {
        NodeRef::Chunk(node) => visitor.visit_chunk(node),
        NodeRef::Block(node) => visitor.visit_block(node),
        NodeRef::Statement(node) => visitor.visit_statement(node),
        NodeRef::ElseIf(node) => visitor.visit_else_if(node),
        NodeRef::Expression(node) => visitor.visit_expression(node),
        NodeRef::ElseIfExpression(node) => visitor.visit_else_if_expression(node),
        NodeRef::InterpolatedSegment(node) => visitor.visit_interpolated_segment(node),
        NodeRef::TableField(node) => visitor.visit_table_field(node),
        NodeRef::FunctionBody(node) => visitor.visit_function_body(node),
        NodeRef::FunctionCall(node) => visitor.visit_function_call(node),
        NodeRef::FunctionArgs(node) => visitor.visit_function_args(node),
        NodeRef::Prefix(node) => visitor.visit_prefix(node),
        NodeRef::Suffix(node) => visitor.visit_suffix(node),
        NodeRef::Parameter(node) => visitor.visit_parameter(node),
        NodeRef::GenericDeclaration(node) => visitor.visit_generic_declaration(node),
        NodeRef::GenericParameter(node) => visitor.visit_generic_parameter(node),
        NodeRef::TypeInfo(node) => visitor.visit_type_info(node),
        NodeRef::TypeField(node) => visitor.visit_type_field(node),
        NodeRef::TypeArgument(node) => visitor.visit_type_argument(node),
    }
}

/// Visit each child in order.
pub fn walk_children<V: Visit + ?Sized>(visitor: &mut V, children: Children<'_>) {
    for child in children {
        visit_node(visitor, child);
    }
}

/// Route a statement to its variant's `visit_*` method.
pub fn walk_statement<V: Visit + ?Sized>(visitor: &mut V, node: &Statement) {
    match node {
        Statement::Assignment(node) => visitor.visit_assignment(node),
        Statement::LocalAssignment(node) => visitor.visit_local_assignment(node),
        Statement::FunctionDeclaration(node) => visitor.visit_function_declaration(node),
        Statement::If(node) => visitor.visit_if(node),
        Statement::While(node) => visitor.visit_while(node),
        Statement::NumericFor(node) => visitor.visit_numeric_for(node),
        Statement::GenericFor(node) => visitor.visit_generic_for(node),
        Statement::Repeat(node) => visitor.visit_repeat(node),
        Statement::Do(node) => visitor.visit_do(node),
        Statement::Return(node) => visitor.visit_return(node),
        Statement::Break => visitor.visit_break(),
        Statement::Continue => visitor.visit_continue(),
        Statement::Goto(node) => visitor.visit_goto(node),
        Statement::Label(node) => visitor.visit_label(node),
        Statement::Call(node) => visitor.visit_call_statement(node),
        Statement::TypeDeclaration(node) => visitor.visit_type_declaration(node),
        Statement::Comment(node) => visitor.visit_comment(node),
        Statement::Custom(node) => visitor.visit_custom_statement(node),
    }
}

/// Route an expression to its variant's `visit_*` method.
pub fn walk_expression<V: Visit + ?Sized>(visitor: &mut V, node: &Expression) {
    match node {
        Expression::Literal(node) => visitor.visit_literal(node),
        Expression::Symbol(name) => visitor.visit_symbol(name),
        Expression::VarArgs => visitor.visit_var_args(),
        Expression::Binary(node) => visitor.visit_binary(node),
        Expression::Unary(node) => visitor.visit_unary(node),
        Expression::Call(node) => visitor.visit_function_call(node),
        Expression::Function(node) => visitor.visit_anonymous_function(node),
        Expression::Table(node) => visitor.visit_table_constructor(node),
        Expression::InterpolatedString(node) => visitor.visit_interpolated_string(node),
        Expression::TypeAssertion(node) => visitor.visit_type_assertion(node),
        Expression::IfExpression(node) => visitor.visit_if_expression(node),
        Expression::Index(node) => visitor.visit_index(node),
        Expression::Parenthesized(inner) => visitor.visit_parenthesized(inner),
        Expression::Custom(node) => visitor.visit_custom_expression(node),
    }
}
