//! Deep-clone independence and serialization of whole trees.

use robloxcs_ast::*;

fn sample() -> Chunk {
    Chunk::new(vec![
        Statement::comment("sample"),
        Statement::local(
            "point",
            Expression::table(TableConstructor::new(vec![
                TableField::named("x", Expression::number(1)),
                TableField::computed(Expression::string("y"), Expression::number(2.5)),
            ])),
        ),
        Statement::function(
            FunctionName::method(vec!["Point".into()], "length"),
            FunctionBody::typed(
                vec![(Parameter::name("self"), TypeInfo::basic("Point"))],
                Some(TypeInfo::basic("number")),
                Block::new(vec![Statement::return_stmt(vec![Expression::binary(
                    Expression::symbol("self.x"),
                    BinaryOperator::Caret,
                    Expression::number(2),
                )])]),
            ),
        ),
        Statement::numeric_for(
            "i",
            Expression::number(1),
            Expression::unary(UnaryOperator::Length, Expression::symbol("list")),
            None,
            Block::new(vec![Statement::Continue]),
        ),
    ])
}

#[test]
fn clone_is_structurally_equal() {
    let original = sample();
    let copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(
        copy.as_node().subtree_size(),
        original.as_node().subtree_size()
    );
}

#[test]
fn mutating_clone_leaves_original_untouched() {
    let original = sample();
    let mut copy = original.clone();

    let Statement::LocalAssignment(local) = &mut copy.block.statements[1] else {
        panic!("expected local assignment");
    };
    let Expression::Table(table) = &mut local.values[0] else {
        panic!("expected table");
    };
    table.fields.push(TableField::NoKey(Expression::boolean(true)));
    table.padded = true;

    let Statement::FunctionDeclaration(function) = &mut copy.block.statements[2] else {
        panic!("expected function declaration");
    };
    function.body.body.statements.clear();

    assert_ne!(copy, original);
    assert_eq!(original, sample());
}

#[test]
fn clone_shares_no_child_allocation() {
    let original = sample();
    let copy = original.clone();

    let left: Vec<*const Statement> = original.block.statements.iter().map(|s| s as *const _).collect();
    let right: Vec<*const Statement> = copy.block.statements.iter().map(|s| s as *const _).collect();
    assert!(left.iter().all(|ptr| !right.contains(ptr)));
}

#[test]
fn chunk_survives_json() {
    let original = sample();
    let json = serde_json::to_string(&original).expect("serialize");
    let parsed: Chunk = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, original);
}

#[test]
fn json_uses_variant_names() {
    let json = serde_json::to_value(Expression::number(1)).expect("serialize");
    assert_eq!(json, serde_json::json!({ "Literal": { "Number": 1.0 } }));
}
