//! The Luau renderer.
//!
//! A [`Visit`] implementation that overrides every node kind and appends its
//! text to a [`RenderState`]. Block constructs bracket their bodies with
//! `push_indent`/`pop_indent`; statements own their leading indentation and
//! trailing newline, expressions never emit either.

use std::collections::HashMap;

use robloxcs_ast::*;

use crate::error::ContractViolation;
use crate::options::RenderOptions;
use crate::precedence::{Side, operand_needs_parens, unary_operand_needs_parens};
use crate::state::RenderState;
use crate::traits::Writer;

/// Static instance of the Luau writer.
pub static LUAU_WRITER: LuauWriter = LuauWriter;

/// Luau writer implementing the [`Writer`] trait with default options.
pub struct LuauWriter;

impl Writer for LuauWriter {
    fn language(&self) -> &'static str {
        "luau"
    }

    fn extension(&self) -> &'static str {
        "luau"
    }

    fn write(&self, chunk: &Chunk) -> String {
        render(chunk)
    }
}

/// Render a chunk with default options.
pub fn render(chunk: &Chunk) -> String {
    Renderer::default().render(chunk)
}

/// Render a chunk with the given options.
pub fn render_with(chunk: &Chunk, options: &RenderOptions) -> String {
    Renderer::new(options.clone()).render(chunk)
}

/// Renders a registered [`CustomNode`] kind.
///
/// For statements the renderer writes the indentation before the call and
/// the newline after it; the function only emits the construct itself.
pub type CustomRenderFn = fn(&mut Renderer, &CustomNode);

/// Serializes syntax trees to Luau source text.
pub struct Renderer {
    state: RenderState,
    options: RenderOptions,
    custom: HashMap<String, CustomRenderFn>,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: RenderState::from_options(&options),
            options,
            custom: HashMap::new(),
        }
    }

    /// Register the renderer for a custom node kind.
    pub fn register_custom(&mut self, kind: impl Into<String>, render: CustomRenderFn) {
        self.custom.insert(kind.into(), render);
    }

    pub fn with_custom(mut self, kind: impl Into<String>, render: CustomRenderFn) -> Self {
        self.register_custom(kind, render);
        self
    }

    /// Render a whole chunk, consuming the renderer.
    pub fn render(mut self, chunk: &Chunk) -> String {
        tracing::debug!(
            statements = chunk.block.statements.len(),
            "rendering chunk"
        );
        self.visit_chunk(chunk);
        let mut output = self.state.finish();
        if !self.options.trailing_newline {
            let trimmed = output.trim_end_matches('\n').len();
            output.truncate(trimmed);
        }
        tracing::debug!(bytes = output.len(), "rendered chunk");
        output
    }

    /// Render a single expression as a fragment.
    pub fn render_expression(mut self, expression: &Expression) -> String {
        self.visit_expression(expression);
        self.state.finish()
    }

    /// Render a single type as a fragment.
    pub fn render_type(mut self, type_info: &TypeInfo) -> String {
        self.visit_type_info(type_info);
        self.state.finish()
    }

    /// Access the state, for custom node renderers.
    pub fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn append(&mut self, text: &str) {
        self.state.append(text);
    }

    fn render_block_body(&mut self, block: &Block) {
        self.state.push_indent();
        self.visit_block(block);
        self.state.pop_indent();
    }

    fn render_separated<T>(&mut self, items: &[T], separator: &str, mut render: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.append(separator);
            }
            render(self, item);
        }
    }

    fn render_expression_list(&mut self, expressions: &[Expression]) {
        self.render_separated(expressions, ", ", |this, expression| {
            this.visit_expression(expression)
        });
    }

    fn render_wrapped(&mut self, wrap: bool, render: impl FnOnce(&mut Self)) {
        if wrap {
            self.append("(");
        }
        render(self);
        if wrap {
            self.append(")");
        }
    }

    fn render_operand(&mut self, parent: BinaryOperator, operand: &Expression, side: Side) {
        let wrap = operand_needs_parens(parent, operand, side);
        self.render_wrapped(wrap, |this| this.visit_expression(operand));
    }

    /// A type annotation, `: T`. Basic types are left to inference.
    fn render_local_annotation(&mut self, type_info: Option<&TypeInfo>) {
        if let Some(type_info) = type_info.filter(|ty| !ty.is_basic()) {
            self.append(": ");
            self.visit_type_info(type_info);
        }
    }

    /// Generic names only; constraints and defaults are a type-declaration
    /// feature.
    fn render_generic_names(&mut self, generics: Option<&GenericDeclaration>) {
        let Some(generics) = generics.filter(|g| !g.parameters.is_empty()) else {
            return;
        };
        self.append("<");
        self.render_separated(&generics.parameters, ", ", |this, parameter| {
            this.render_generic_kind(&parameter.kind)
        });
        self.append(">");
    }

    fn render_generic_kind(&mut self, kind: &GenericParameterKind) {
        match kind {
            GenericParameterKind::Name(name) => self.append(name),
            GenericParameterKind::Variadic(name) => {
                self.append(name);
                self.append("...");
            }
        }
    }

    /// A type in a position that binds tighter than `|`, `&` or `?`.
    fn render_type_member(&mut self, type_info: &TypeInfo, wrap: bool) {
        self.render_wrapped(wrap, |this| this.visit_type_info(type_info));
    }

    fn render_custom(&mut self, node: &CustomNode) {
        let Some(render) = self.custom.get(&node.kind).copied() else {
            ContractViolation::UnhandledNode {
                kind: format!("Custom({})", node.kind),
            }
            .raise();
        };
        tracing::trace!(kind = %node.kind, "rendering custom node");
        render(self, node);
    }

    fn render_local_function(&mut self, name: &str, function: &AnonymousFunction) {
        self.state.append_indented("local function ");
        self.append(name);
        self.visit_function_body(&function.body);
        self.append("\n");
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Visit for Renderer {
    fn visit_chunk(&mut self, node: &Chunk) {
        self.visit_block(&node.block);
    }

    fn visit_block(&mut self, node: &Block) {
        for statement in &node.statements {
            self.visit_statement(statement);
        }
    }

    fn visit_assignment(&mut self, node: &Assignment) {
        self.state.append_indented("");
        if node.targets.first().is_some_and(starts_with_paren) {
            self.append(";");
        }
        self.render_expression_list(&node.targets);
        self.append(" ");
        self.append(node.operator.token());
        self.append(" ");
        self.render_expression_list(&node.values);
        self.append("\n");
    }

    fn visit_local_assignment(&mut self, node: &LocalAssignment) {
        if let ([name], [Expression::Function(function)]) =
            (node.names.as_slice(), node.values.as_slice())
        {
            if !node.has_type_annotations() {
                self.render_local_function(name, function);
                return;
            }
        }

        self.state.append_indented("local ");
        for (i, name) in node.names.iter().enumerate() {
            if i > 0 {
                self.append(", ");
            }
            self.append(name);
            self.render_local_annotation(node.types.get(i).and_then(Option::as_ref));
        }
        if !node.values.is_empty() {
            self.append(" = ");
            self.render_expression_list(&node.values);
        }
        self.append("\n");
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        self.state.append_indented("function ");
        self.append(&node.name.path.join("."));
        if let Some(method) = &node.name.method {
            self.append(":");
            self.append(method);
        }
        self.visit_function_body(&node.body);
        self.append("\n");
    }

    fn visit_if(&mut self, node: &If) {
        self.state.append_indented("if ");
        self.visit_expression(&node.condition);
        self.append(" then\n");
        self.render_block_body(&node.then_block);
        for branch in &node.else_ifs {
            self.visit_else_if(branch);
        }
        if let Some(else_block) = &node.else_block {
            self.state.append_indented_line("else");
            self.render_block_body(else_block);
        }
        self.state.append_indented_line("end");
    }

    fn visit_else_if(&mut self, node: &ElseIf) {
        self.state.append_indented("elseif ");
        self.visit_expression(&node.condition);
        self.append(" then\n");
        self.render_block_body(&node.block);
    }

    fn visit_while(&mut self, node: &While) {
        self.state.append_indented("while ");
        self.visit_expression(&node.condition);
        self.append(" do\n");
        self.render_block_body(&node.body);
        self.state.append_indented_line("end");
    }

    fn visit_numeric_for(&mut self, node: &NumericFor) {
        self.state.append_indented("for ");
        self.append(&node.variable);
        self.append(" = ");
        self.visit_expression(&node.start);
        self.append(", ");
        self.visit_expression(&node.end);
        if let Some(step) = node.step.as_ref().filter(|step| step.as_number() != Some(1.0)) {
            self.append(", ");
            self.visit_expression(step);
        }
        self.append(" do\n");
        self.render_block_body(&node.body);
        self.state.append_indented_line("end");
    }

    fn visit_generic_for(&mut self, node: &GenericFor) {
        self.state.append_indented("for ");
        self.append(&node.names.join(", "));
        self.append(" in ");
        self.render_expression_list(&node.expressions);
        self.append(" do\n");
        self.render_block_body(&node.body);
        self.state.append_indented_line("end");
    }

    fn visit_repeat(&mut self, node: &Repeat) {
        self.state.append_indented_line("repeat");
        self.render_block_body(&node.body);
        self.state.append_indented("until ");
        match &node.until {
            Expression::Unary(negation) if negation.operator == UnaryOperator::Not => {
                match negation.operand.as_ref() {
                    // `not not x` has the truthiness of `x`
                    Expression::Unary(inner) if inner.operator == UnaryOperator::Not => {
                        self.visit_expression(&inner.operand)
                    }
                    operand => {
                        self.append("not ");
                        let wrap = unary_operand_needs_parens(UnaryOperator::Not, operand);
                        self.render_wrapped(wrap, |this| this.visit_expression(operand));
                    }
                }
            }
            condition => self.visit_expression(condition),
        }
        self.append("\n");
    }

    fn visit_do(&mut self, node: &Do) {
        self.state.append_indented_line("do");
        self.render_block_body(&node.body);
        self.state.append_indented_line("end");
    }

    fn visit_return(&mut self, node: &Return) {
        self.state.append_indented("return");
        if !node.values.is_empty() {
            self.append(" ");
            self.render_expression_list(&node.values);
        }
        self.append("\n");
    }

    fn visit_break(&mut self) {
        self.state.append_indented_line("break");
    }

    fn visit_continue(&mut self) {
        self.state.append_indented_line("continue");
    }

    fn visit_goto(&mut self, node: &Goto) {
        self.state.append_indented_line(&format!("goto {}", node.label));
    }

    fn visit_label(&mut self, node: &Label) {
        self.state.append_indented_line(&format!("::{}::", node.name));
    }

    fn visit_call_statement(&mut self, node: &FunctionCall) {
        self.state.append_indented("");
        if matches!(node.prefix, Prefix::Expression(_)) {
            self.append(";");
        }
        self.visit_function_call(node);
        self.append("\n");
    }

    fn visit_type_declaration(&mut self, node: &TypeDeclaration) {
        self.state
            .append_indented(if node.exported { "export type " } else { "type " });
        self.append(&node.name);
        if let Some(generics) = node.generics.as_ref().filter(|g| !g.parameters.is_empty()) {
            self.visit_generic_declaration(generics);
        }
        self.append(" = ");
        self.visit_type_info(&node.declare_as);
        self.append("\n");
    }

    fn visit_comment(&mut self, node: &Comment) {
        for line in node.text.lines() {
            if line.is_empty() {
                self.state.append_indented_line("--");
            } else {
                self.state.append_indented_line(&format!("-- {line}"));
            }
        }
    }

    fn visit_custom_statement(&mut self, node: &CustomNode) {
        self.state.append_indented("");
        self.render_custom(node);
        self.append("\n");
    }

    fn visit_literal(&mut self, node: &Literal) {
        match node {
            Literal::Nil => self.append("nil"),
            Literal::Boolean(value) => self.append(if *value { "true" } else { "false" }),
            Literal::Number(value) => {
                let text = format_number(*value);
                self.append(&text);
            }
            Literal::String(value) => {
                let text = quote_string(value);
                self.append(&text);
            }
        }
    }

    fn visit_symbol(&mut self, name: &str) {
        self.append(name);
    }

    fn visit_var_args(&mut self) {
        self.append("...");
    }

    fn visit_binary(&mut self, node: &BinaryExpression) {
        self.render_operand(node.operator, &node.left, Side::Left);
        self.append(" ");
        self.append(node.operator.token());
        self.append(" ");
        self.render_operand(node.operator, &node.right, Side::Right);
    }

    fn visit_unary(&mut self, node: &UnaryExpression) {
        self.append(node.operator.token());
        let wrap = unary_operand_needs_parens(node.operator, &node.operand);
        self.render_wrapped(wrap, |this| this.visit_expression(&node.operand));
    }

    fn visit_function_call(&mut self, node: &FunctionCall) {
        self.visit_prefix(&node.prefix);
        for suffix in &node.suffixes {
            self.visit_suffix(suffix);
        }
    }

    fn visit_anonymous_function(&mut self, node: &AnonymousFunction) {
        self.append("function");
        self.visit_function_body(&node.body);
    }

    fn visit_table_constructor(&mut self, node: &TableConstructor) {
        if node.fields.is_empty() {
            self.append("{}");
            return;
        }

        if node.is_positional() {
            self.append(if node.padded { "{ " } else { "{" });
            self.render_separated(&node.fields, ", ", |this, field| this.visit_table_field(field));
            self.append(if node.padded { " }" } else { "}" });
            return;
        }

        self.append("{\n");
        self.state.push_indent();
        for field in &node.fields {
            self.state.append_indented("");
            self.visit_table_field(field);
            self.append(",\n");
        }
        self.state.pop_indent();
        self.state.append_indented("}");
    }

    fn visit_table_field(&mut self, node: &TableField) {
        match node {
            TableField::NoKey(value) => self.visit_expression(value),
            TableField::NameKey { key, value } => {
                self.append(key);
                self.append(" = ");
                self.visit_expression(value);
            }
            TableField::ExpressionKey { key, value } => {
                self.append("[");
                self.visit_expression(key);
                self.append("] = ");
                self.visit_expression(value);
            }
        }
    }

    fn visit_interpolated_string(&mut self, node: &InterpolatedString) {
        self.append("`");
        for segment in &node.segments {
            self.visit_interpolated_segment(segment);
        }
        self.append("`");
    }

    fn visit_interpolated_segment(&mut self, node: &InterpolatedSegment) {
        match node {
            InterpolatedSegment::Text(text) => self.append(text),
            InterpolatedSegment::Expression(expression) => {
                self.append("${");
                self.visit_expression(expression);
                self.append("}");
            }
        }
    }

    fn visit_type_assertion(&mut self, node: &TypeAssertion) {
        let wrap = matches!(
            node.expression.as_ref(),
            Expression::Call(_)
                | Expression::Binary(_)
                | Expression::Unary(_)
                | Expression::IfExpression(_)
        );
        self.render_wrapped(wrap, |this| this.visit_expression(&node.expression));
        self.append(" :: ");
        self.visit_type_info(&node.cast_to);
    }

    fn visit_if_expression(&mut self, node: &IfExpression) {
        self.append("if ");
        self.visit_expression(&node.condition);
        self.append(" then ");
        self.visit_expression(&node.then_value);
        for branch in &node.else_ifs {
            self.visit_else_if_expression(branch);
        }
        self.append(" else ");
        self.visit_expression(&node.else_value);
    }

    fn visit_else_if_expression(&mut self, node: &ElseIfExpression) {
        self.append(" elseif ");
        self.visit_expression(&node.condition);
        self.append(" then ");
        self.visit_expression(&node.value);
    }

    fn visit_index(&mut self, node: &IndexExpression) {
        let wrap = !is_prefix_expression(&node.target);
        self.render_wrapped(wrap, |this| this.visit_expression(&node.target));
        self.append("[");
        self.visit_expression(&node.index);
        self.append("]");
    }

    fn visit_parenthesized(&mut self, inner: &Expression) {
        self.append("(");
        self.visit_expression(inner);
        self.append(")");
    }

    fn visit_custom_expression(&mut self, node: &CustomNode) {
        self.render_custom(node);
    }

    fn visit_function_body(&mut self, node: &FunctionBody) {
        if node.parameters.len() != node.type_specifiers.len() {
            ContractViolation::ParameterTypeMismatch {
                parameters: node.parameters.len(),
                type_specifiers: node.type_specifiers.len(),
            }
            .raise();
        }

        self.render_generic_names(node.generics.as_ref());
        self.append("(");
        for (i, (parameter, type_info)) in node
            .parameters
            .iter()
            .zip(&node.type_specifiers)
            .enumerate()
        {
            if i > 0 {
                self.append(", ");
            }
            self.visit_parameter(parameter);
            if let Some(type_info) = type_info {
                self.append(": ");
                self.visit_type_info(type_info);
            }
        }
        self.append(")");
        if let Some(return_type) = &node.return_type {
            self.append(": ");
            self.visit_type_info(return_type);
        }
        self.append("\n");
        self.render_block_body(&node.body);
        self.state.append_indented("end");
    }

    fn visit_function_args(&mut self, node: &FunctionArgs) {
        self.append("(");
        self.render_expression_list(&node.arguments);
        self.append(")");
    }

    fn visit_prefix(&mut self, node: &Prefix) {
        match node {
            Prefix::Name(name) => self.append(name),
            Prefix::Expression(expression) => {
                self.append("(");
                self.visit_expression(expression);
                self.append(")");
            }
        }
    }

    fn visit_suffix(&mut self, node: &Suffix) {
        match node {
            Suffix::Call(args) => self.visit_function_args(args),
            Suffix::MethodCall(call) => {
                self.append(":");
                self.append(&call.name);
                self.visit_function_args(&call.args);
            }
            Suffix::Index(IndexSuffix::Dot(name)) => {
                self.append(".");
                self.append(name);
            }
            Suffix::Index(IndexSuffix::Brackets(expression)) => {
                self.append("[");
                self.visit_expression(expression);
                self.append("]");
            }
        }
    }

    fn visit_parameter(&mut self, node: &Parameter) {
        match node {
            Parameter::Name(name) => self.append(name),
            Parameter::Ellipsis => self.append("..."),
        }
    }

    fn visit_generic_declaration(&mut self, node: &GenericDeclaration) {
        self.append("<");
        self.render_separated(&node.parameters, ", ", |this, parameter| {
            this.visit_generic_parameter(parameter)
        });
        self.append(">");
    }

    fn visit_generic_parameter(&mut self, node: &GenericParameter) {
        self.render_generic_kind(&node.kind);
        if let Some(constraint) = &node.constraint {
            self.append(" extends ");
            self.visit_type_info(constraint);
        }
        if let Some(default) = &node.default {
            self.append(" = ");
            self.visit_type_info(default);
        }
    }

    fn visit_type_info(&mut self, node: &TypeInfo) {
        match node {
            TypeInfo::Basic(name) => self.append(name),
            TypeInfo::BooleanLiteral(value) => self.append(if *value { "true" } else { "false" }),
            TypeInfo::StringLiteral(value) => {
                let text = quote_string(value);
                self.append(&text);
            }
            TypeInfo::Array { element, access } => {
                self.append("{ ");
                if let Some(access) = access {
                    self.append(access.keyword());
                    self.append(" ");
                }
                self.visit_type_info(element);
                self.append(" }");
            }
            TypeInfo::Table { fields } if fields.is_empty() => self.append("{}"),
            TypeInfo::Table { fields } => {
                self.append("{ ");
                self.render_separated(fields, ", ", |this, field| this.visit_type_field(field));
                self.append(" }");
            }
            TypeInfo::Tuple { elements, variadic } => {
                self.append("(");
                self.render_separated(elements, ", ", |this, element| this.visit_type_info(element));
                if let Some(tail) = variadic {
                    if !elements.is_empty() {
                        self.append(", ");
                    }
                    self.append("...");
                    self.visit_type_info(tail);
                }
                self.append(")");
            }
            TypeInfo::Union(members) => {
                self.render_separated(members, " | ", |this, member| {
                    let wrap = matches!(member, TypeInfo::Callback { .. });
                    this.render_type_member(member, wrap)
                });
            }
            TypeInfo::Intersection(members) => {
                self.render_separated(members, " & ", |this, member| {
                    let wrap = matches!(member, TypeInfo::Union(_) | TypeInfo::Callback { .. });
                    this.render_type_member(member, wrap)
                });
            }
            TypeInfo::Optional(inner) => {
                let wrap = matches!(
                    inner.as_ref(),
                    TypeInfo::Union(_)
                        | TypeInfo::Intersection(_)
                        | TypeInfo::Tuple { .. }
                        | TypeInfo::Callback { .. }
                );
                self.render_type_member(inner, wrap);
                self.append("?");
            }
            TypeInfo::Callback {
                generics,
                arguments,
                return_type,
            } => {
                self.render_generic_names(generics.as_ref());
                self.append("(");
                self.render_separated(arguments, ", ", |this, argument| {
                    this.visit_type_argument(argument)
                });
                self.append(") -> ");
                self.visit_type_info(return_type);
            }
            TypeInfo::Typeof(expression) => {
                self.append("typeof(");
                self.visit_expression(expression);
                self.append(")");
            }
            TypeInfo::Variadic(inner) => {
                self.append("...");
                self.visit_type_info(inner);
            }
            TypeInfo::Generic { base, arguments } => {
                self.append(base);
                self.append("<");
                self.render_separated(arguments, ", ", |this, argument| {
                    this.visit_type_info(argument)
                });
                self.append(">");
            }
        }
    }

    fn visit_type_field(&mut self, node: &TypeField) {
        if let Some(access) = node.access {
            self.append(access.keyword());
            self.append(" ");
        }
        match &node.key {
            TypeFieldKey::Name(name) => self.append(name),
            TypeFieldKey::Computed(key) => {
                self.append("[");
                self.visit_type_info(key);
                self.append("]");
            }
        }
        self.append(": ");
        self.visit_type_info(&node.value);
    }

    fn visit_type_argument(&mut self, node: &TypeArgument) {
        if let Some(name) = &node.name {
            self.append(name);
            self.append(": ");
        }
        self.visit_type_info(&node.type_info);
    }
}

/// Expressions that can be indexed or called without parentheses.
fn is_prefix_expression(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Symbol(_)
            | Expression::Call(_)
            | Expression::Index(_)
            | Expression::Parenthesized(_)
    )
}

/// Whether the rendered expression begins with `(`.
///
/// A statement starting with `(` would continue the previous line as a call,
/// so the renderer separates it with `;`.
fn starts_with_paren(expression: &Expression) -> bool {
    match expression {
        Expression::Parenthesized(_) => true,
        Expression::Call(call) => matches!(call.prefix, Prefix::Expression(_)),
        Expression::Index(index) => {
            !is_prefix_expression(&index.target) || starts_with_paren(&index.target)
        }
        Expression::Binary(binary) => {
            operand_needs_parens(binary.operator, &binary.left, Side::Left)
                || starts_with_paren(&binary.left)
        }
        Expression::TypeAssertion(assertion) => {
            matches!(
                assertion.expression.as_ref(),
                Expression::Call(_)
                    | Expression::Binary(_)
                    | Expression::Unary(_)
                    | Expression::IfExpression(_)
            ) || starts_with_paren(&assertion.expression)
        }
        _ => false,
    }
}

/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "(0 / 0)".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "math.huge" } else { "-math.huge" }.into();
    }
    if value == 0.0 && value.is_sign_negative() {
        return "-0".into();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Double-quoted Luau string literal.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\0' => quoted.push_str("\\0"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(expression: &Expression) -> String {
        Renderer::default().render_expression(expression)
    }

    fn ty(type_info: &TypeInfo) -> String {
        Renderer::default().render_type(type_info)
    }

    fn stmt(statement: Statement) -> String {
        Renderer::default().render(&Chunk::new(vec![statement]))
    }

    fn num(n: i32) -> Expression {
        Expression::number(n)
    }

    #[test]
    fn test_writer_metadata() {
        assert_eq!(LUAU_WRITER.language(), "luau");
        assert_eq!(LUAU_WRITER.extension(), "luau");
        let chunk = Chunk::new(vec![Statement::Break]);
        assert_eq!(LUAU_WRITER.write(&chunk), "break\n");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(f64::INFINITY), "math.huge");
        assert_eq!(format_number(f64::NEG_INFINITY), "-math.huge");
        assert_eq!(format_number(f64::NAN), "(0 / 0)");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_negative_zero_keeps_its_sign() {
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(
            stmt(Statement::local("z", Expression::number(-0.0))),
            "local z = -0\n"
        );
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(quote_string("hi"), "\"hi\"");
        assert_eq!(quote_string("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
    }

    #[test]
    fn test_literals() {
        assert_eq!(expr(&Expression::nil()), "nil");
        assert_eq!(expr(&Expression::boolean(true)), "true");
        assert_eq!(expr(&Expression::string("x")), "\"x\"");
        assert_eq!(expr(&Expression::VarArgs), "...");
    }

    #[test]
    fn test_lower_precedence_child_is_wrapped() {
        let e = Expression::binary(
            Expression::binary(num(1), BinaryOperator::Plus, num(2)),
            BinaryOperator::Star,
            num(3),
        );
        assert_eq!(expr(&e), "(1 + 2) * 3");
    }

    #[test]
    fn test_higher_precedence_child_is_bare() {
        let e = Expression::binary(
            Expression::binary(num(1), BinaryOperator::Star, num(2)),
            BinaryOperator::Plus,
            num(3),
        );
        assert_eq!(expr(&e), "1 * 2 + 3");
    }

    #[test]
    fn test_exponent_is_right_associative() {
        let right = Expression::binary(
            num(2),
            BinaryOperator::Caret,
            Expression::binary(num(3), BinaryOperator::Caret, num(4)),
        );
        assert_eq!(expr(&right), "2 ^ 3 ^ 4");

        let left = Expression::binary(
            Expression::binary(num(2), BinaryOperator::Caret, num(3)),
            BinaryOperator::Caret,
            num(4),
        );
        assert_eq!(expr(&left), "(2 ^ 3) ^ 4");
    }

    #[test]
    fn test_left_associative_right_child_is_wrapped() {
        let e = Expression::binary(
            Expression::symbol("a"),
            BinaryOperator::Minus,
            Expression::binary(Expression::symbol("b"), BinaryOperator::Minus, Expression::symbol("c")),
        );
        assert_eq!(expr(&e), "a - (b - c)");

        let e = Expression::binary(
            Expression::binary(Expression::symbol("a"), BinaryOperator::Minus, Expression::symbol("b")),
            BinaryOperator::Minus,
            Expression::symbol("c"),
        );
        assert_eq!(expr(&e), "a - b - c");
    }

    #[test]
    fn test_unary_wraps_binary_operand() {
        let e = Expression::not(Expression::binary(
            Expression::symbol("a"),
            BinaryOperator::Equal,
            Expression::symbol("b"),
        ));
        assert_eq!(expr(&e), "not (a == b)");

        let e = Expression::unary(UnaryOperator::Length, Expression::symbol("t"));
        assert_eq!(expr(&e), "#t");

        let e = Expression::unary(
            UnaryOperator::Minus,
            Expression::unary(UnaryOperator::Minus, Expression::symbol("x")),
        );
        assert_eq!(expr(&e), "-(-x)");
    }

    #[test]
    fn test_type_assertion_wraps_calls() {
        let call = Expression::type_assertion(
            Expression::call("getValue", vec![]),
            TypeInfo::basic("number"),
        );
        assert_eq!(expr(&call), "(getValue()) :: number");

        let symbol = Expression::type_assertion(Expression::symbol("x"), TypeInfo::basic("any"));
        assert_eq!(expr(&symbol), "x :: any");
    }

    #[test]
    fn test_optional_wraps_compound_types() {
        let union = TypeInfo::optional(TypeInfo::Union(vec![
            TypeInfo::basic("string"),
            TypeInfo::basic("number"),
        ]));
        assert_eq!(ty(&union), "(string | number)?");

        let tuple = TypeInfo::optional(TypeInfo::tuple(vec![TypeInfo::basic("a")]));
        assert_eq!(ty(&tuple), "((a))?");

        let basic = TypeInfo::optional(TypeInfo::basic("Instance"));
        assert_eq!(ty(&basic), "Instance?");
    }

    #[test]
    fn test_type_shapes() {
        assert_eq!(ty(&TypeInfo::array(TypeInfo::basic("number"))), "{ number }");
        assert_eq!(
            ty(&TypeInfo::Array {
                element: Box::new(TypeInfo::basic("number")),
                access: Some(AccessModifier::Read),
            }),
            "{ read number }"
        );
        assert_eq!(
            ty(&TypeInfo::Table {
                fields: vec![
                    TypeField::named("name", TypeInfo::basic("string")),
                    TypeField::indexer(TypeInfo::basic("number"), TypeInfo::BooleanLiteral(true)),
                ],
            }),
            "{ name: string, [number]: true }"
        );
        assert_eq!(ty(&TypeInfo::Table { fields: vec![] }), "{}");
        assert_eq!(
            ty(&TypeInfo::Tuple {
                elements: vec![TypeInfo::basic("a")],
                variadic: Some(Box::new(TypeInfo::basic("b"))),
            }),
            "(a, ...b)"
        );
        assert_eq!(
            ty(&TypeInfo::callback(
                vec![TypeInfo::basic("number")],
                TypeInfo::tuple(vec![])
            )),
            "(number) -> ()"
        );
        assert_eq!(
            ty(&TypeInfo::Intersection(vec![
                TypeInfo::basic("A"),
                TypeInfo::Union(vec![TypeInfo::basic("B"), TypeInfo::basic("C")]),
            ])),
            "A & (B | C)"
        );
        assert_eq!(
            ty(&TypeInfo::Typeof(Box::new(Expression::symbol("x")))),
            "typeof(x)"
        );
        assert_eq!(
            ty(&TypeInfo::Variadic(Box::new(TypeInfo::basic("any")))),
            "...any"
        );
        assert_eq!(
            ty(&TypeInfo::generic("Map", vec![TypeInfo::basic("string"), TypeInfo::StringLiteral("v".into())])),
            "Map<string, \"v\">"
        );
    }

    #[test]
    fn test_interpolated_string() {
        let e = Expression::interpolated(vec![
            InterpolatedSegment::Text("Hello, ".into()),
            InterpolatedSegment::Expression(Expression::symbol("name")),
            InterpolatedSegment::Text("!".into()),
        ]);
        assert_eq!(expr(&e), "`Hello, ${name}!`");
    }

    #[test]
    fn test_if_expression() {
        let e = Expression::IfExpression(IfExpression {
            condition: Box::new(Expression::symbol("a")),
            then_value: Box::new(num(1)),
            else_ifs: vec![ElseIfExpression {
                condition: Expression::symbol("b"),
                value: num(2),
            }],
            else_value: Box::new(num(3)),
        });
        assert_eq!(expr(&e), "if a then 1 elseif b then 2 else 3");

        let sum = Expression::binary(
            Expression::if_expression(Expression::symbol("c"), num(1), num(2)),
            BinaryOperator::Plus,
            num(1),
        );
        assert_eq!(expr(&sum), "(if c then 1 else 2) + 1");
    }

    #[test]
    fn test_index_and_call_chains() {
        assert_eq!(
            expr(&Expression::index(Expression::symbol("t"), num(1))),
            "t[1]"
        );
        assert_eq!(
            expr(&Expression::index(Expression::string("abc"), num(1))),
            "(\"abc\")[1]"
        );

        let chain = FunctionCall::method("game", "GetService", vec![Expression::string("Players")])
            .with_suffix(Suffix::Index(IndexSuffix::Dot("LocalPlayer".into())))
            .with_suffix(Suffix::Index(IndexSuffix::Brackets(Expression::string("Name"))));
        assert_eq!(
            expr(&Expression::Call(chain)),
            "game:GetService(\"Players\").LocalPlayer[\"Name\"]"
        );

        let parenthesized = FunctionCall {
            prefix: Prefix::Expression(Box::new(Expression::symbol("f"))),
            suffixes: vec![Suffix::Call(FunctionArgs::default()), Suffix::Call(FunctionArgs::default())],
        };
        assert_eq!(expr(&Expression::Call(parenthesized)), "(f)()()");
    }

    #[test]
    fn test_statement_starting_with_paren_is_separated() {
        let chunk = Chunk::new(vec![
            Statement::local("a", Expression::symbol("b")),
            Statement::Call(FunctionCall {
                prefix: Prefix::Expression(Box::new(Expression::symbol("f"))),
                suffixes: vec![Suffix::Call(FunctionArgs::default())],
            }),
            Statement::assign(
                Expression::index(Expression::parenthesized(Expression::symbol("t")), num(1)),
                num(2),
            ),
            Statement::assign(
                Expression::index(Expression::string("s"), num(1)),
                num(3),
            ),
            Statement::assign(Expression::index(Expression::symbol("t"), num(1)), num(4)),
            Statement::call("print", vec![Expression::symbol("a")]),
        ]);
        assert_eq!(
            Renderer::default().render(&chunk),
            "local a = b\n;(f)()\n;(t)[1] = 2\n;(\"s\")[1] = 3\nt[1] = 4\nprint(a)\n"
        );
    }

    #[test]
    fn test_starts_with_paren() {
        assert!(starts_with_paren(&Expression::parenthesized(Expression::symbol("x"))));
        assert!(starts_with_paren(&Expression::index(
            Expression::index(Expression::parenthesized(Expression::symbol("t")), num(1)),
            num(2),
        )));
        assert!(!starts_with_paren(&Expression::symbol("x")));
        assert!(!starts_with_paren(&Expression::call("f", vec![])));
        assert!(!starts_with_paren(&Expression::index(Expression::symbol("t"), num(1))));
    }

    #[test]
    fn test_numeric_for_step_elision() {
        let body = || Block::new(vec![Statement::call("print", vec![Expression::symbol("i")])]);
        assert_eq!(
            stmt(Statement::numeric_for("i", num(0), num(10), Some(num(1)), body())),
            "for i = 0, 10 do\n  print(i)\nend\n"
        );
        assert_eq!(
            stmt(Statement::numeric_for("i", num(0), num(10), Some(num(2)), body())),
            "for i = 0, 10, 2 do\n  print(i)\nend\n"
        );
        assert_eq!(
            stmt(Statement::numeric_for("i", num(0), num(10), None, body())),
            "for i = 0, 10 do\n  print(i)\nend\n"
        );
    }

    #[test]
    fn test_local_function_sugar() {
        let function = Expression::function(FunctionBody::new(
            vec![Parameter::name("a")],
            Block::new(vec![Statement::return_stmt(vec![Expression::symbol("a")])]),
        ));
        assert_eq!(
            stmt(Statement::local("identity", function.clone())),
            "local function identity(a)\n  return a\nend\n"
        );

        let typed = Statement::typed_local(
            "identity",
            TypeInfo::callback(vec![TypeInfo::basic("any")], TypeInfo::basic("any")),
            Some(function),
        );
        assert_eq!(
            stmt(typed),
            "local identity: (any) -> any = function(a)\n  return a\nend\n"
        );
    }

    #[test]
    fn test_basic_local_annotation_is_omitted() {
        assert_eq!(
            stmt(Statement::typed_local("x", TypeInfo::basic("number"), Some(num(1)))),
            "local x = 1\n"
        );
        assert_eq!(
            stmt(Statement::typed_local(
                "x",
                TypeInfo::optional(TypeInfo::basic("number")),
                None
            )),
            "local x: number?\n"
        );
    }

    #[test]
    fn test_repeat_until_not() {
        let body = || Block::new(vec![Statement::Break]);
        assert_eq!(
            stmt(Statement::repeat(body(), Expression::not(Expression::symbol("done")))),
            "repeat\n  break\nuntil not done\n"
        );
        assert_eq!(
            stmt(Statement::repeat(
                body(),
                Expression::not(Expression::not(Expression::symbol("done")))
            )),
            "repeat\n  break\nuntil done\n"
        );
        assert_eq!(
            stmt(Statement::repeat(
                body(),
                Expression::not(Expression::binary(num(1), BinaryOperator::Less, num(2)))
            )),
            "repeat\n  break\nuntil not (1 < 2)\n"
        );
    }

    #[test]
    fn test_table_shapes() {
        assert_eq!(expr(&Expression::table(TableConstructor::default())), "{}");
        assert_eq!(
            expr(&Expression::table(TableConstructor::array(vec![num(1), num(2), num(3)]))),
            "{1, 2, 3}"
        );
        assert_eq!(
            expr(&Expression::table(
                TableConstructor::array(vec![num(1), num(2), num(3)]).padded()
            )),
            "{ 1, 2, 3 }"
        );
        assert_eq!(
            expr(&Expression::table(TableConstructor::new(vec![
                TableField::named("a", num(1)),
                TableField::NoKey(num(2)),
                TableField::computed(Expression::string("b"), num(3)),
            ]))),
            "{\n  a = 1,\n  2,\n  [\"b\"] = 3,\n}"
        );
    }

    #[test]
    fn test_generic_declaration_on_type() {
        let statement = Statement::TypeDeclaration(TypeDeclaration {
            exported: true,
            name: "Box".into(),
            generics: Some(GenericDeclaration {
                parameters: vec![
                    GenericParameter {
                        kind: GenericParameterKind::Name("T".into()),
                        constraint: Some(TypeInfo::basic("Instance")),
                        default: Some(TypeInfo::basic("Part")),
                    },
                    GenericParameter::variadic("U"),
                ],
            }),
            declare_as: TypeInfo::Table {
                fields: vec![TypeField::named("value", TypeInfo::basic("T"))],
            },
        });
        assert_eq!(
            stmt(statement),
            "export type Box<T extends Instance = Part, U...> = { value: T }\n"
        );
    }

    #[test]
    fn test_function_generics_render_names_only() {
        let body = FunctionBody::typed(
            vec![(Parameter::name("value"), TypeInfo::basic("T"))],
            Some(TypeInfo::basic("T")),
            Block::new(vec![Statement::return_stmt(vec![Expression::symbol("value")])]),
        )
        .with_generics(GenericDeclaration {
            parameters: vec![GenericParameter {
                kind: GenericParameterKind::Name("T".into()),
                constraint: Some(TypeInfo::basic("Instance")),
                default: None,
            }],
        });
        assert_eq!(
            stmt(Statement::function(FunctionName::simple("identity"), body)),
            "function identity<T>(value: T): T\n  return value\nend\n"
        );
    }

    #[test]
    #[should_panic(expected = "function body has 2 parameters but 1 type specifiers")]
    fn test_parameter_type_mismatch_aborts() {
        let body = FunctionBody {
            generics: None,
            parameters: vec![Parameter::name("a"), Parameter::name("b")],
            type_specifiers: vec![None],
            return_type: None,
            body: Block::empty(),
        };
        stmt(Statement::function(FunctionName::simple("f"), body));
    }

    #[test]
    #[should_panic(expected = "no renderer for node kind `Custom(switch)`")]
    fn test_unregistered_custom_node_aborts() {
        stmt(Statement::Custom(CustomNode::new("switch", vec![])));
    }

    #[test]
    fn test_registered_custom_node() {
        fn render_pair(renderer: &mut Renderer, node: &CustomNode) {
            renderer.state_mut().append("pair(");
            for (i, child) in node.children.iter().enumerate() {
                if i > 0 {
                    renderer.state_mut().append(" .. ");
                }
                renderer.visit_expression(child);
            }
            renderer.state_mut().append(")");
        }

        let chunk = Chunk::new(vec![Statement::local(
            "p",
            Expression::Custom(CustomNode::new("pair", vec![num(1), num(2)])),
        )]);
        let output = Renderer::default().with_custom("pair", render_pair).render(&chunk);
        assert_eq!(output, "local p = pair(1 .. 2)\n");
    }
}
