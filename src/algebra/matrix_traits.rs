#![allow(non_snake_case)]

use crate::algebra::MatrixConcatenationError;

/// Blockwise matrix concatenation
pub trait BlockConcatenate: Sized {
    /// horizontal matrix concatenation
    ///
    /// ```text
    /// C = [A B]
    /// ```
    /// # Panics
    /// Panics if row dimensions are incompatible
    fn hcat(A: &Self, B: &Self) -> Self;

    /// vertical matrix concatenation
    ///
    /// ```text
    /// C = [ A ]
    ///     [ B ]
    /// ```
    ///
    /// # Panics
    /// Panics if column dimensions are incompatible
    fn vcat(A: &Self, B: &Self) -> Self;

    /// vertical concatenation of an ordered sequence of blocks.
    /// Errors if given data of incompatible dimensions
    fn vstack(mats: &[&Self]) -> Result<Self, MatrixConcatenationError>;
}
