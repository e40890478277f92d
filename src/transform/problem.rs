#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, FloatT, VectorMath};
use crate::transform::cones::ConeRanges;
use crate::transform::SupportedConeT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of optimization for a modeling-form problem.
///
/// The canonical form is always a minimization; a `Maximize` problem is
/// normalized by negating its objective during the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectiveSense {
    /// minimize the objective
    #[default]
    Minimize,
    /// maximize the objective
    Maximize,
}

/// One constraint group as supplied by the modeling layer.
///
/// The group states `Ax + s = b` with `s` in the given cone, so that a
/// zero cone expresses equality `Ax = b` and a nonnegative cone expresses
/// the inequality `Ax ≤ b`.  The block `A` must have one column per
/// problem variable and one row per cone dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConeConstraint<T = f64> {
    /// coefficient block, `dim x n`
    pub A: CscMatrix<T>,
    /// offset block, length `dim`
    pub b: Vec<T>,
    /// the cone `s` must belong to
    pub cone: SupportedConeT<T>,
}

impl<T> ConeConstraint<T>
where
    T: FloatT,
{
    /// Create a new constraint group.
    pub fn new(A: CscMatrix<T>, b: Vec<T>, cone: SupportedConeT<T>) -> Self {
        Self { A, b, cone }
    }

    /// number of constraint rows declared by the group's cone
    pub fn dim(&self) -> usize {
        self.cone.nvars()
    }
}

/// An optimization problem in modeling form: a linear objective together
/// with an ordered, heterogeneous list of constraint groups.
///
/// A `Problem` is constructed once by a modeling layer and then owned
/// exclusively by whichever transform stage currently holds it.  Transforms
/// never mutate their input, so a problem value can be transformed
/// repeatedly with identical results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem<T = f64> {
    /// direction of optimization
    pub sense: ObjectiveSense,
    /// objective coefficients, one per variable
    pub q: Vec<T>,
    /// ordered constraint groups
    pub constraints: Vec<ConeConstraint<T>>,
}

impl<T> Problem<T>
where
    T: FloatT,
{
    /// Create a minimization problem over the given constraint groups.
    pub fn new(q: Vec<T>, constraints: Vec<ConeConstraint<T>>) -> Self {
        Self {
            sense: ObjectiveSense::Minimize,
            q,
            constraints,
        }
    }

    /// Create a problem with an explicit objective sense.
    pub fn with_sense(sense: ObjectiveSense, q: Vec<T>, constraints: Vec<ConeConstraint<T>>) -> Self {
        Self {
            sense,
            q,
            constraints,
        }
    }

    /// dimension of the variable space
    pub fn num_vars(&self) -> usize {
        self.q.len()
    }

    /// total constraint rows declared across all groups
    pub fn num_constraint_rows(&self) -> usize {
        self.constraints.iter().map(ConeConstraint::dim).sum()
    }
}

/// An optimization problem in standard conic form:
///
/// ```text
/// minimize    q'x
/// subject to  Ax + s = b
///             s ∈ K
/// ```
///
/// where `K` is the ordered Cartesian product of the cones in `cones`.
/// This is the shape a cone solver consumes.  Rows of `A` and `b` are
/// partitioned contiguously per cone, in order, and the cone dimensions
/// sum to the row count of `A`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConicForm<T = f64> {
    /// objective coefficients (always a minimization)
    pub q: Vec<T>,
    /// stacked constraint matrix, `m x n`
    pub A: CscMatrix<T>,
    /// stacked offset vector, length `m`
    pub b: Vec<T>,
    /// ordered product cone partitioning the constraint space
    pub cones: Vec<SupportedConeT<T>>,
}

impl<T> ConicForm<T>
where
    T: FloatT,
{
    /// dimension of the variable space
    pub fn num_vars(&self) -> usize {
        self.A.ncols()
    }

    /// number of constraint rows
    pub fn num_rows(&self) -> usize {
        self.A.nrows()
    }

    /// Objective value `q'x` at the given point.
    ///
    /// # Panics
    /// Panics if `x` does not match the variable dimension.
    pub fn objective_value(&self, x: &[T]) -> T {
        self.q.dot(x)
    }

    /// Slack vector `s = b - Ax` at the given point.
    ///
    /// # Panics
    /// Panics if `x` does not match the variable dimension.
    pub fn compute_slacks(&self, x: &[T]) -> Vec<T> {
        let mut s = self.b.clone();
        self.A.gemv(&mut s, x, -T::one(), T::one());
        s
    }

    /// Re-express the canonical form as a modeling-form [`Problem`], one
    /// constraint group per cone, so that a further transform stage may
    /// consume it.
    pub fn to_problem(&self) -> Problem<T> {
        let mut mask = vec![false; self.num_rows()];

        let constraints = std::iter::zip(&self.cones, self.cones.rng_cones_iter())
            .map(|(cone, rng)| {
                mask.fill(false);
                mask[rng.clone()].fill(true);
                ConeConstraint {
                    A: self.A.select_rows(&mask),
                    b: self.b[rng].to_vec(),
                    cone: cone.clone(),
                }
            })
            .collect();

        Problem::new(self.q.clone(), constraints)
    }
}
