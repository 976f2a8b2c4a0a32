use snafu::Snafu;

use crate::types::KernelKey;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The kernel exists but deliberately refuses to run.
    #[snafu(display("{message}"))]
    Unimplemented { message: String },

    #[snafu(display("no kernel registered for {key}"))]
    KernelNotFound { key: KernelKey },

    #[snafu(display("kernel already registered for {key}"))]
    DuplicateKernel { key: KernelKey },

    /// A launch argument is missing or has the wrong type.
    #[snafu(display("argument {index} of {kernel}: expected {expected}"))]
    ArgumentMismatch { kernel: String, index: usize, expected: &'static str },
}
