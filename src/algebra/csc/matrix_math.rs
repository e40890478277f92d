#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, FloatT, VectorMath};

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Computes `y = αAx + βy` without intermediate allocation.
    ///
    /// # Panics
    /// Panics if `x` or `y` dimensions are incompatible with the matrix.
    pub fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        assert_eq!(x.len(), self.n);
        assert_eq!(y.len(), self.m);

        y.scale(b);

        for (col, &xcol) in x.iter().enumerate() {
            let first = self.colptr[col];
            let last = self.colptr[col + 1];
            for ptr in first..last {
                y[self.rowval[ptr]] += a * self.nzval[ptr] * xcol;
            }
        }
    }
}

#[test]
fn test_gemv() {
    // A = [1. 0.]
    //     [2. 3.]
    let A: CscMatrix = CscMatrix::new(2, 2, vec![0, 2, 3], vec![0, 1, 1], vec![1., 2., 3.]);

    let x = vec![1., -1.];
    let mut y = vec![1., 1.];

    // y = 2Ax + y
    A.gemv(&mut y, &x, 2., 1.);
    assert_eq!(y, vec![3., -1.]);
}
