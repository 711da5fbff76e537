//! Synthetic syntax trees shared by the benchmarks.

use robloxcs_ast::*;

/// A chunk of `functions` method declarations, each holding a loop with
/// nested branches, arithmetic and a keyed table.
pub fn synthetic_chunk(functions: usize) -> Chunk {
    let statements = (0..functions).map(method).collect();
    Chunk::new(statements)
}

fn method(index: usize) -> Statement {
    let accumulate = Statement::compound_assign(
        Expression::symbol("total"),
        AssignmentOperator::Add,
        Expression::binary(
            Expression::binary(
                Expression::symbol("i"),
                BinaryOperator::Plus,
                Expression::number(index as f64),
            ),
            BinaryOperator::Star,
            Expression::number(2),
        ),
    );
    let branch = Statement::if_stmt(
        Expression::binary(
            Expression::binary(Expression::symbol("i"), BinaryOperator::Percent, Expression::number(2)),
            BinaryOperator::Equal,
            Expression::number(0),
        ),
        Block::new(vec![accumulate]),
        Some(Block::new(vec![Statement::Continue])),
    );
    let result = Expression::table(TableConstructor::new(vec![
        TableField::named("total", Expression::symbol("total")),
        TableField::named("label", Expression::string(format!("method {index}"))),
    ]));

    Statement::function(
        FunctionName::method(vec!["Module".into()], format!("run{index}")),
        FunctionBody::typed(
            vec![(Parameter::name("count"), TypeInfo::basic("number"))],
            Some(TypeInfo::basic("Result")),
            Block::new(vec![
                Statement::local("total", Expression::number(0)),
                Statement::numeric_for(
                    "i",
                    Expression::number(1),
                    Expression::symbol("count"),
                    None,
                    Block::new(vec![branch]),
                ),
                Statement::return_stmt(vec![result]),
            ]),
        ),
    )
}
