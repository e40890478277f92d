#![allow(non_snake_case)]

use crate::algebra::{BlockConcatenate, CscMatrix, FloatT, VectorMath};
use crate::transform::{
    ConeConstraint, ConicForm, ConicSolution, ObjectiveSense, Problem, ProblemTransform,
    RecoveredSolution, SupportedConeT, TransformError, TransformMap, TransformSettings,
};

/// Transform converting a heterogeneous list of cone constraint groups
/// into the canonical single-product-cone form `Ax + s = b, s ∈ K`.
///
/// Accepts problems whose groups use the primitive cone kinds
/// [`ZeroConeT`](SupportedConeT::ZeroConeT),
/// [`NonnegativeConeT`](SupportedConeT::NonnegativeConeT),
/// [`SecondOrderConeT`](SupportedConeT::SecondOrderConeT) and
/// [`PSDTriangleConeT`](SupportedConeT::PSDTriangleConeT).  Guarantees an
/// output with exactly one product cone, rows partitioned contiguously per
/// original group in original order, and an unchanged variable space.
/// Nonlinear cone kinds must be decomposed into primitives by an earlier
/// stage; they are rejected with
/// [`UnsupportedConeKind`](TransformError::UnsupportedConeKind).
///
/// Group order is preserved, so repeated transforms of structurally
/// identical problems produce byte-identical canonical forms and identical
/// recovery maps.
#[derive(Debug, Clone, Default)]
pub struct LinearConeTransform {
    settings: TransformSettings,
}

impl LinearConeTransform {
    /// Create a transform with the given settings.
    pub fn new(settings: TransformSettings) -> Self {
        Self { settings }
    }

    fn check_group<T: FloatT>(
        &self,
        index: usize,
        group: &ConeConstraint<T>,
        n: usize,
    ) -> Result<(), TransformError> {
        match group.cone {
            SupportedConeT::ZeroConeT(_)
            | SupportedConeT::NonnegativeConeT(_)
            | SupportedConeT::SecondOrderConeT(_)
            | SupportedConeT::PSDTriangleConeT(_) => {}
            ref cone => {
                return Err(TransformError::UnsupportedConeKind {
                    index,
                    kind: cone.variant_name(),
                });
            }
        }

        let dim = group.dim();
        if group.A.nrows() != dim {
            return Err(TransformError::DimensionMismatch {
                index,
                context: "matrix block row count",
                expected: dim,
                actual: group.A.nrows(),
            });
        }
        if group.b.len() != dim {
            return Err(TransformError::DimensionMismatch {
                index,
                context: "offset vector length",
                expected: dim,
                actual: group.b.len(),
            });
        }
        if group.A.ncols() != n {
            return Err(TransformError::DimensionMismatch {
                index,
                context: "matrix block column count",
                expected: n,
                actual: group.A.ncols(),
            });
        }

        if self.settings.check_sparse_format {
            group
                .A
                .check_format()
                .map_err(|source| TransformError::SparseFormat { index, source })?;
        }

        Ok(())
    }
}

impl<T> ProblemTransform<T> for LinearConeTransform
where
    T: FloatT,
{
    fn transform(
        &self,
        problem: &Problem<T>,
    ) -> Result<(ConicForm<T>, TransformMap<T>), TransformError> {
        let n = problem.num_vars();

        // validate every group and record its row range.  Groups are
        // scanned in input order, which fixes the output cone ordering
        let mut cones = Vec::with_capacity(problem.constraints.len());
        let mut rng_cones = Vec::with_capacity(problem.constraints.len());
        let mut m = 0;

        for (index, group) in problem.constraints.iter().enumerate() {
            self.check_group(index, group, n)?;

            let dim = group.dim();
            rng_cones.push(m..m + dim);
            m += dim;
            cones.push(group.cone.clone());
        }

        // stack the coefficient blocks as contiguous row ranges.  The
        // column dimensions were checked above, so concatenation of a
        // nonempty block list cannot fail
        let A = {
            let blocks: Vec<&CscMatrix<T>> =
                problem.constraints.iter().map(|group| &group.A).collect();
            if blocks.is_empty() {
                CscMatrix::zeros((0, n))
            } else {
                CscMatrix::vstack(&blocks).unwrap()
            }
        };

        let mut b = vec![T::zero(); m];
        for (rng, group) in std::iter::zip(&rng_cones, &problem.constraints) {
            b[rng.clone()].copy_from(&group.b);
        }

        // the variable space is untouched.  A maximization is normalized
        // to the canonical minimization by negating the objective
        let mut q = problem.q.clone();
        if problem.sense == ObjectiveSense::Maximize {
            q.negate();
        }

        let conic = ConicForm {
            q,
            A,
            b,
            cones: cones.clone(),
        };
        let map = TransformMap {
            cones,
            rng_cones,
            m,
            n,
            sense: problem.sense,
        };

        Ok((conic, map))
    }

    fn recover(
        &self,
        map: &TransformMap<T>,
        solution: &ConicSolution<T>,
    ) -> Result<RecoveredSolution<T>, TransformError> {
        // the variable space was never reshaped, so recovery is the
        // identity on x and a re-split of s and z
        map.recover(solution)
    }
}
