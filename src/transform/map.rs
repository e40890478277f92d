use crate::algebra::FloatT;
use crate::transform::{ObjectiveSense, SupportedConeT, TransformError};
use std::ops::Range;

/// Raw solution triple returned by a cone solver for a canonical
/// [`ConicForm`](crate::transform::ConicForm).
#[derive(Debug, Clone, PartialEq)]
pub struct ConicSolution<T = f64> {
    /// primal solution
    pub x: Vec<T>,
    /// vector of slacks (in the primal cone)
    pub s: Vec<T>,
    /// dual solution (in the dual cone)
    pub z: Vec<T>,
}

/// A canonical solution mapped back onto the original problem's
/// constraint groups.
///
/// The primal `x` is carried through unchanged since the linear transform
/// never reshapes the variable space.  Slacks and duals are re-split into
/// one vector per original constraint group, in original group order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredSolution<T = f64> {
    /// primal solution over the original variables
    pub x: Vec<T>,
    /// per-group slack vectors
    pub s: Vec<Vec<T>>,
    /// per-group dual vectors
    pub z: Vec<Vec<T>>,
}

/// Bookkeeping produced by one transform application, required to map a
/// solution of the output problem back onto the input problem.
///
/// The map records the row range each original constraint group occupies
/// in the canonical form.  It is tied to the transform application that
/// produced it: recovery against a solution of any other problem fails
/// with [`TransformError::StaleMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransformMap<T = f64> {
    // cones of the original groups, in original order
    pub(crate) cones: Vec<SupportedConeT<T>>,
    // row range each group occupies in the canonical form
    pub(crate) rng_cones: Vec<Range<usize>>,
    // canonical row and variable counts at transform time
    pub(crate) m: usize,
    pub(crate) n: usize,
    // sense of the input problem (the canonical form always minimizes)
    pub(crate) sense: ObjectiveSense,
}

impl<T> TransformMap<T>
where
    T: FloatT,
{
    /// number of constraint groups recorded
    pub fn len(&self) -> usize {
        self.rng_cones.len()
    }

    /// true if the map records no constraint groups
    pub fn is_empty(&self) -> bool {
        self.rng_cones.is_empty()
    }

    /// canonical constraint row count at transform time
    pub fn num_rows(&self) -> usize {
        self.m
    }

    /// variable count at transform time
    pub fn num_vars(&self) -> usize {
        self.n
    }

    /// sense of the input problem
    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    /// cones of the original groups, in original order
    pub fn cones(&self) -> &[SupportedConeT<T>] {
        &self.cones
    }

    /// row range each original group occupies in the canonical form
    pub fn rng_cones(&self) -> &[Range<usize>] {
        &self.rng_cones
    }

    /// Split a canonical slack vector into per-group slices.
    pub fn split_slacks<'a>(&self, s: &'a [T]) -> Result<Vec<&'a [T]>, TransformError> {
        self.split(s, "slack solution")
    }

    /// Split a canonical dual vector into per-group slices.
    pub fn split_duals<'a>(&self, z: &'a [T]) -> Result<Vec<&'a [T]>, TransformError> {
        self.split(z, "dual solution")
    }

    /// Map a solver's raw solution back onto the original constraint
    /// groups.
    ///
    /// Dual values are reported for the constraints as stated; sense
    /// normalization of the objective does not alter them.
    pub fn recover(&self, solution: &ConicSolution<T>) -> Result<RecoveredSolution<T>, TransformError> {
        if solution.x.len() != self.n {
            return Err(TransformError::StaleMap {
                context: "primal solution",
                expected: self.n,
                actual: solution.x.len(),
            });
        }

        let s = self.split_slacks(&solution.s)?;
        let z = self.split_duals(&solution.z)?;

        Ok(RecoveredSolution {
            x: solution.x.clone(),
            s: s.into_iter().map(<[T]>::to_vec).collect(),
            z: z.into_iter().map(<[T]>::to_vec).collect(),
        })
    }

    fn split<'a>(&self, v: &'a [T], context: &'static str) -> Result<Vec<&'a [T]>, TransformError> {
        if v.len() != self.m {
            return Err(TransformError::StaleMap {
                context,
                expected: self.m,
                actual: v.len(),
            });
        }
        Ok(self.rng_cones.iter().map(|rng| &v[rng.clone()]).collect())
    }
}
