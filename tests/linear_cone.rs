#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]

use coneform::{algebra::*, transform::*};

// the two-group fixture used across several tests: a nonnegative group
// of dimension 3 followed by a zero (equality) group of dimension 2,
// over 2 variables

fn two_group_problem() -> Problem<f64> {
    // A0 = [1. 0.]      b0 = [1. 2. 3.]'
    //      [0. 1.]
    //      [1. 1.]
    let A0 = CscMatrix::new_from_triplets(
        3,
        2,
        vec![0, 1, 2, 2],
        vec![0, 1, 0, 1],
        vec![1., 1., 1., 1.],
    );
    let b0 = vec![1., 2., 3.];

    let A1 = CscMatrix::identity(2);
    let b1 = vec![4., 5.];

    let groups = vec![
        ConeConstraint::new(A0, b0, NonnegativeConeT(3)),
        ConeConstraint::new(A1, b1, ZeroConeT(2)),
    ];

    Problem::new(vec![3., -2.], groups)
}

#[test]
fn test_row_accounting_and_ranges() {
    let problem = two_group_problem();
    let (conic, map) = LinearConeTransform::default().transform(&problem).unwrap();

    assert_eq!(conic.num_rows(), 5);
    assert_eq!(conic.num_rows(), problem.num_constraint_rows());
    assert_eq!(conic.b.len(), 5);
    assert_eq!(map.num_rows(), 5);

    // group 0 occupies rows [0,3), group 1 rows [3,5)
    assert_eq!(map.rng_cones(), &[0..3, 3..5]);
}

#[test]
fn test_order_preservation() {
    let problem = two_group_problem();
    let (conic, map) = LinearConeTransform::default().transform(&problem).unwrap();

    assert_eq!(conic.cones, vec![NonnegativeConeT(3), ZeroConeT(2)]);
    assert_eq!(map.cones(), &[NonnegativeConeT(3), ZeroConeT(2)]);
}

#[test]
fn test_stacked_blocks() {
    let problem = two_group_problem();
    let (conic, _) = LinearConeTransform::default().transform(&problem).unwrap();

    // the stacked matrix is the groups' blocks as contiguous row ranges
    let expected = CscMatrix::vcat(&problem.constraints[0].A, &problem.constraints[1].A);
    assert_eq!(conic.A, expected);
    assert_eq!(conic.b, vec![1., 2., 3., 4., 5.]);

    assert_eq!(conic.A.get_entry((2, 0)).unwrap(), 1.);
    assert_eq!(conic.A.get_entry((3, 0)).unwrap(), 1.);
    assert_eq!(conic.A.get_entry((4, 1)).unwrap(), 1.);
    assert!(conic.A.get_entry((3, 1)).is_none());
}

#[test]
fn test_objective_invariance() {
    let problem = two_group_problem();
    let (conic, _) = LinearConeTransform::default().transform(&problem).unwrap();

    assert_eq!(conic.q, problem.q);
    assert_eq!(conic.num_vars(), problem.num_vars());
}

#[test]
fn test_maximize_negates_objective() {
    let mut problem = two_group_problem();
    problem.sense = ObjectiveSense::Maximize;

    let (conic, map) = LinearConeTransform::default().transform(&problem).unwrap();

    assert_eq!(conic.q, vec![-3., 2.]);
    assert_eq!(map.sense(), ObjectiveSense::Maximize);
}

#[test]
fn test_determinism() {
    let problem = two_group_problem();
    let transform = LinearConeTransform::default();

    let (conic1, map1) = transform.transform(&problem).unwrap();
    let (conic2, map2) = transform.transform(&problem).unwrap();

    assert_eq!(conic1, conic2);
    assert_eq!(map1, map2);
}

#[test]
fn test_mixed_cone_kinds() {
    let n = 3;
    let soc_dim = 3;
    let psd_side = 2; // occupies 3 triangular rows

    let groups = vec![
        ConeConstraint::new(CscMatrix::identity(3), vec![0.; 3], SecondOrderConeT(soc_dim)),
        ConeConstraint::new(
            CscMatrix::new_from_triplets(3, 3, vec![0, 1, 2], vec![0, 1, 2], vec![1., 1., 1.]),
            vec![1., 0., 1.],
            PSDTriangleConeT(psd_side),
        ),
        ConeConstraint::new(CscMatrix::zeros((1, 3)), vec![1.], NonnegativeConeT(1)),
    ];
    let problem = Problem::new(vec![0.; n], groups);

    let (conic, map) = LinearConeTransform::default().transform(&problem).unwrap();

    assert_eq!(conic.num_rows(), 7);
    assert_eq!(
        conic.cones,
        vec![
            SecondOrderConeT(3),
            PSDTriangleConeT(2),
            NonnegativeConeT(1)
        ]
    );
    assert_eq!(map.rng_cones(), &[0..3, 3..6, 6..7]);
}

#[test]
fn test_unsupported_cone_kinds() {
    let exp_group = ConeConstraint::new(
        CscMatrix::identity(3),
        vec![0.; 3],
        SupportedConeT::ExponentialConeT(),
    );
    let problem = Problem::new(vec![0.; 3], vec![exp_group]);

    let err = LinearConeTransform::default()
        .transform(&problem)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::UnsupportedConeKind {
            index: 0,
            kind: "ExponentialConeT"
        }
    );

    let eq_group = ConeConstraint::new(CscMatrix::identity(3), vec![0.; 3], ZeroConeT(3));
    let pow_group = ConeConstraint::new(CscMatrix::identity(3), vec![0.; 3], PowerConeT(0.5));
    let problem = Problem::new(vec![0.; 3], vec![eq_group, pow_group]);

    let err = LinearConeTransform::default()
        .transform(&problem)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::UnsupportedConeKind {
            index: 1,
            kind: "PowerConeT"
        }
    );
}

#[test]
fn test_pipeline_composability() {
    // a canonical form can be re-expressed in modeling form and fed
    // through the transform again without change
    let problem = two_group_problem();
    let transform = LinearConeTransform::default();

    let (conic1, map1) = transform.transform(&problem).unwrap();
    let (conic2, map2) = transform.transform(&conic1.to_problem()).unwrap();

    assert_eq!(conic1, conic2);
    assert_eq!(map1, map2);
}
