//! Contract violations that abort a render.
//!
//! These signal bugs in the renderer or in the pass that built the tree,
//! never bad user input, so they are raised as panics rather than returned.

/// An internal-consistency failure detected while rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("no renderer for node kind `{kind}`")]
    UnhandledNode { kind: String },

    #[error(
        "function body has {parameters} parameters but {type_specifiers} type specifiers"
    )]
    ParameterTypeMismatch {
        parameters: usize,
        type_specifiers: usize,
    },
}

impl ContractViolation {
    /// Log the violation and abort the render.
    #[track_caller]
    pub fn raise(self) -> ! {
        tracing::error!(violation = %self, "render aborted");
        panic!("{self}")
    }
}
