use crate::algebra::SparseFormatError;
use thiserror::Error;

/// Error type returned by problem transforms and solution recovery.
///
/// None of these conditions is retried internally: the transform is a
/// deterministic pure computation, so retrying with the same input cannot
/// change the outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A constraint group names a cone kind outside the primitive set.
    ///
    /// The offending kind must be decomposed into primitives by an earlier
    /// pipeline stage before the linear transform can accept the problem.
    #[error("constraint group {index} uses unsupported cone kind {kind}")]
    UnsupportedConeKind {
        /// position of the offending group in the input problem
        index: usize,
        /// name of the rejected cone kind
        kind: &'static str,
    },

    /// A constraint group's data disagrees with its declared dimensions.
    #[error("constraint group {index}: {context} is {actual}, expected {expected}")]
    DimensionMismatch {
        /// position of the offending group in the input problem
        index: usize,
        /// which quantity was mis-sized
        context: &'static str,
        /// dimension implied by the group's declaration
        expected: usize,
        /// dimension actually supplied
        actual: usize,
    },

    /// A solution vector does not match the dimensions recorded at
    /// transform time, i.e. the solution belongs to a different problem.
    #[error("stale recovery map: {context} has length {actual}, expected {expected}")]
    StaleMap {
        /// which solution vector was mis-sized
        context: &'static str,
        /// length recorded at transform time
        expected: usize,
        /// length actually supplied
        actual: usize,
    },

    /// A constraint group's coefficient block is not valid CSC data.
    #[error("constraint group {index}: {source}")]
    SparseFormat {
        /// position of the offending group in the input problem
        index: usize,
        /// the underlying format defect
        source: SparseFormatError,
    },
}
