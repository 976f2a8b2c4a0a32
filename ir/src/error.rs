use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Load/Store index count does not match the tensor rank.
    #[snafu(display("tensor {tensor} has rank {rank} but was accessed with {indices} indices"))]
    ShapeRankMismatch { tensor: String, rank: usize, indices: usize },

    /// A realize node binds a different number of iter values than the block declares.
    #[snafu(display("block {block} declares {iter_vars} iter vars but the realize binds {iter_values} values"))]
    IterValueCountMismatch { block: String, iter_vars: usize, iter_values: usize },
}
