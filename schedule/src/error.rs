use kestrel_ir::IrNodeTy;
use snafu::Snafu;

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum AnalysisError {
    /// The expression is not the node kind the analysis requires.
    #[snafu(display("invalid argument: the block is not a {expected} (found {found})"))]
    InvalidArgument { expected: IrNodeTy, found: IrNodeTy },

    /// An access index is not a plain variable and the policy rejects it.
    #[snafu(display("index {position} of an access to {tensor} is not a loop variable: {index}"))]
    NonVariableIndex { tensor: String, position: usize, index: String },
}
