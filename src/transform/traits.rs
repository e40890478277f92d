use crate::algebra::FloatT;
use crate::transform::{ConicForm, ConicSolution, Problem, RecoveredSolution, TransformError, TransformMap};

/// Interface for problem transforms.
///
/// A transform rewrites a modeling-form [`Problem`] into an equivalent
/// canonical [`ConicForm`] and produces the [`TransformMap`] needed to
/// translate a solution of the output back onto the input.  Transforms are
/// pure with respect to their input: the problem passed in is never
/// mutated, and no references into it are retained after the call returns.
///
/// Transforms compose: [`ConicForm::to_problem`] re-expresses a canonical
/// form in modeling form so that the output of one stage can feed the
/// next.  Each implementation documents the structural invariants it
/// requires on input and guarantees on output.
pub trait ProblemTransform<T>
where
    T: FloatT,
{
    /// Rewrite `problem` into canonical conic form.
    fn transform(
        &self,
        problem: &Problem<T>,
    ) -> Result<(ConicForm<T>, TransformMap<T>), TransformError>;

    /// Map a solver's raw solution of the transformed problem back onto
    /// the input problem's constraint groups, using the map produced by
    /// [`transform`](ProblemTransform::transform).
    fn recover(
        &self,
        map: &TransformMap<T>,
        solution: &ConicSolution<T>,
    ) -> Result<RecoveredSolution<T>, TransformError>;
}
