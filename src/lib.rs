//! __coneform__ canonicalizes convex optimization problems into the standard
//! conic form consumed by numerical cone solvers:
//!
//! ```text
//! minimize    q'x
//! subject to  Ax + s = b
//!             s ∈ K
//! ```
//!
//! with decision variable `x ∈ Rⁿ`, slack `s ∈ Rᵐ` and data `q ∈ Rⁿ`,
//! `A ∈ Rᵐˣⁿ`, `b ∈ Rᵐ`.  The convex set `K` is an ordered Cartesian product
//! of primitive cones.
//!
//! A modeling layer supplies a [`Problem`](crate::transform::Problem) as a
//! heterogeneous list of per-group constraint blocks, each with its own cone.
//! The [`LinearConeTransform`](crate::transform::LinearConeTransform) stacks
//! those groups into a single [`ConicForm`](crate::transform::ConicForm) and
//! returns a [`TransformMap`](crate::transform::TransformMap) that translates
//! the solver's raw solution back to the original constraint groups.
//!
//! The transform is pure and deterministic: structurally identical inputs
//! produce byte-identical canonical forms and identical recovery maps.

pub mod algebra;
pub mod transform;
