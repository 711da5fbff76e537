//! Luau source rendering for RobloxCS syntax trees.
//!
//! The [`Renderer`] walks a [`Chunk`](robloxcs_ast::Chunk) through the
//! [`Visit`](robloxcs_ast::Visit) trait and appends Luau text to a
//! [`RenderState`]. Operator precedence is recovered from the tree shape:
//! the AST carries no parentheses except explicit
//! [`Expression::Parenthesized`](robloxcs_ast::Expression::Parenthesized)
//! nodes, so the renderer inserts exactly the ones Luau needs.
//!
//! # Example
//!
//! ```
//! use robloxcs_ast::{BinaryOperator, Chunk, Expression, Statement};
//!
//! let chunk = Chunk::new(vec![Statement::local(
//!     "x",
//!     Expression::binary(
//!         Expression::binary(Expression::number(1), BinaryOperator::Plus, Expression::number(2)),
//!         BinaryOperator::Star,
//!         Expression::number(3),
//!     ),
//! )]);
//! assert_eq!(robloxcs_render::render(&chunk), "local x = (1 + 2) * 3\n");
//! ```
//!
//! # Failures
//!
//! Malformed trees are bugs in the pass that produced them. The renderer
//! logs a [`ContractViolation`] and panics rather than emitting invalid code.

pub mod error;
pub mod options;
pub mod precedence;
pub mod renderer;
pub mod state;
pub mod traits;

pub use error::ContractViolation;
pub use options::RenderOptions;
pub use renderer::{
    CustomRenderFn, LUAU_WRITER, LuauWriter, Renderer, format_number, quote_string, render,
    render_with,
};
pub use state::RenderState;
pub use traits::Writer;
