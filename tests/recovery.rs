#![allow(non_snake_case)]

use coneform::{algebra::*, transform::*};

fn canonicalized() -> (ConicForm<f64>, TransformMap<f64>) {
    let groups = vec![
        ConeConstraint::new(
            CscMatrix::new_from_triplets(3, 2, vec![0, 1, 2], vec![0, 1, 0], vec![1., 1., -1.]),
            vec![1., 2., 3.],
            NonnegativeConeT(3),
        ),
        ConeConstraint::new(CscMatrix::identity(2), vec![4., 5.], ZeroConeT(2)),
    ];
    let problem = Problem::new(vec![1., 1.], groups);

    LinearConeTransform::default().transform(&problem).unwrap()
}

#[test]
fn test_round_trip_recovery() {
    let (_, map) = canonicalized();

    let solution = ConicSolution {
        x: vec![10., 20.],
        s: vec![1., 2., 3., 4., 5.],
        z: vec![-1., -2., -3., -4., -5.],
    };

    let recovered = LinearConeTransform::default()
        .recover(&map, &solution)
        .unwrap();

    // x is carried through unchanged
    assert_eq!(recovered.x, solution.x);

    // slacks and duals are re-split per original group
    assert_eq!(recovered.s, vec![vec![1., 2., 3.], vec![4., 5.]]);
    assert_eq!(recovered.z, vec![vec![-1., -2., -3.], vec![-4., -5.]]);

    // re-concatenating in recorded row order reconstructs the
    // canonical-length vectors exactly
    let cat_s: Vec<f64> = recovered.s.concat();
    let cat_z: Vec<f64> = recovered.z.concat();
    assert_eq!(cat_s, solution.s);
    assert_eq!(cat_z, solution.z);
}

#[test]
fn test_split_slices() {
    let (_, map) = canonicalized();

    let s = vec![1., 2., 3., 4., 5.];
    let parts = map.split_slacks(&s).unwrap();
    assert_eq!(parts, vec![&s[0..3], &s[3..5]]);

    let z = vec![5., 4., 3., 2., 1.];
    let parts = map.split_duals(&z).unwrap();
    assert_eq!(parts, vec![&z[0..3], &z[3..5]]);
}

#[test]
fn test_stale_map() {
    let (_, map) = canonicalized();

    // slack vector from some other problem
    let err = map.split_slacks(&[1., 2.]).unwrap_err();
    assert_eq!(
        err,
        TransformError::StaleMap {
            context: "slack solution",
            expected: 5,
            actual: 2
        }
    );

    // mis-sized primal
    let solution = ConicSolution {
        x: vec![10.],
        s: vec![0.; 5],
        z: vec![0.; 5],
    };
    let err = map.recover(&solution).unwrap_err();
    assert_eq!(
        err,
        TransformError::StaleMap {
            context: "primal solution",
            expected: 2,
            actual: 1
        }
    );

    // mis-sized dual
    let solution = ConicSolution {
        x: vec![10., 20.],
        s: vec![0.; 5],
        z: vec![0.; 4],
    };
    let err = map.recover(&solution).unwrap_err();
    assert_eq!(
        err,
        TransformError::StaleMap {
            context: "dual solution",
            expected: 5,
            actual: 4
        }
    );
}

#[test]
fn test_slacks_and_objective() {
    let (conic, _) = canonicalized();

    let x = vec![1., -1.];
    assert_eq!(conic.objective_value(&x), 0.);

    // s = b - Ax
    let s = conic.compute_slacks(&x);
    assert_eq!(s, vec![0., 3., 4., 3., 6.]);
}
