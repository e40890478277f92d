#![allow(non_snake_case)]

use coneform::{algebra::*, transform::*};

// a collection of tests to ensure that constraint groups of
// incompatible dimension won't be accepted

fn dim_check_problem() -> Problem<f64> {
    let groups = vec![
        ConeConstraint::new(CscMatrix::zeros((1, 4)), vec![0.], ZeroConeT(1)),
        ConeConstraint::new(CscMatrix::zeros((2, 4)), vec![0.; 2], NonnegativeConeT(2)),
        ConeConstraint::new(CscMatrix::zeros((3, 4)), vec![0.; 3], NonnegativeConeT(3)),
    ];
    Problem::new(vec![0.; 4], groups)
}

#[test]
fn dim_check_working() {
    // This example should work because dimensions are all compatible.
    // All following checks vary one of these sizes
    let problem = dim_check_problem();
    assert!(LinearConeTransform::default().transform(&problem).is_ok());
}

#[test]
fn dim_check_bad_block_rows() {
    // a group declaring cone dimension 4 but supplying a 3 row block
    let mut problem = dim_check_problem();
    problem.constraints[2].cone = NonnegativeConeT(4);

    let err = LinearConeTransform::default()
        .transform(&problem)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::DimensionMismatch {
            index: 2,
            context: "matrix block row count",
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn dim_check_bad_offset_length() {
    let mut problem = dim_check_problem();
    problem.constraints[1].b = vec![0.; 3];

    let err = LinearConeTransform::default()
        .transform(&problem)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::DimensionMismatch {
            index: 1,
            context: "offset vector length",
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn dim_check_bad_block_cols() {
    let mut problem = dim_check_problem();
    problem.constraints[0].A = CscMatrix::zeros((1, 3));

    let err = LinearConeTransform::default()
        .transform(&problem)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::DimensionMismatch {
            index: 0,
            context: "matrix block column count",
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn dim_check_bad_sparse_format() {
    let mut problem = dim_check_problem();

    // out of bounds row index in group 1
    let mut A = CscMatrix::identity(2);
    A.rowval[1] = 2;
    A.m = 2;
    A.n = 4;
    A.colptr = vec![0, 1, 2, 2, 2];
    problem.constraints[1].A = A;

    let err = LinearConeTransform::default()
        .transform(&problem)
        .unwrap_err();
    assert_eq!(
        err,
        TransformError::SparseFormat {
            index: 1,
            source: SparseFormatError::BadRowval
        }
    );
}

#[test]
fn dim_check_sparse_format_disabled() {
    // the same defective block passes when structural validation is off
    let mut problem = dim_check_problem();

    let mut A = CscMatrix::identity(2);
    A.rowval[1] = 2;
    A.m = 2;
    A.n = 4;
    A.colptr = vec![0, 1, 2, 2, 2];
    problem.constraints[1].A = A;

    let settings = TransformSettingsBuilder::default()
        .check_sparse_format(false)
        .build()
        .unwrap();
    assert!(LinearConeTransform::new(settings)
        .transform(&problem)
        .is_ok());
}
