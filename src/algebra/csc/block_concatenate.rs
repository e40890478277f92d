#![allow(non_snake_case)]

use crate::algebra::{BlockConcatenate, CscMatrix, FloatT, MatrixConcatenationError};

impl<T> BlockConcatenate for CscMatrix<T>
where
    T: FloatT,
{
    fn hcat(A: &Self, B: &Self) -> Self {
        //first check for compatible row dimensions
        assert_eq!(A.m, B.m);

        //dimensions for C = [A B];
        let nnz = A.nnz() + B.nnz();
        let m = A.m; //rows C
        let n = A.n + B.n; //cols C
        let mut C = CscMatrix::spalloc((m, n), nnz);
        C.colptr.fill(0);

        //compute column counts and fill
        C.colcount_block(A, 0);
        C.colcount_block(B, A.n);
        C.colcount_to_colptr();

        C.fill_block(A, 0, 0);
        C.fill_block(B, 0, A.n);
        C.backshift_colptrs();

        C
    }

    fn vcat(A: &Self, B: &Self) -> Self {
        //first check for compatible column dimensions
        assert_eq!(A.n, B.n);

        Self::vstack(&[A, B]).unwrap()
    }

    fn vstack(mats: &[&Self]) -> Result<Self, MatrixConcatenationError> {
        if mats.is_empty() {
            return Err(MatrixConcatenationError::IncompatibleDimension);
        }

        let n = mats[0].ncols();
        if mats.iter().any(|mat| mat.ncols() != n) {
            return Err(MatrixConcatenationError::IncompatibleDimension);
        }

        let mut nrows = 0;
        let mut nnzM = 0;
        for mat in mats {
            nrows += mat.nrows();
            nnzM += mat.nnz();
        }
        let mut M = CscMatrix::<T>::spalloc((nrows, n), nnzM);

        // assemble the column counts
        M.colptr.fill(0);
        for mat in mats {
            M.colcount_block(mat, 0);
        }
        M.colcount_to_colptr();

        // fill in data and rebuild colptr.  Blocks are placed top
        // to bottom, so entries within each column stay row ordered
        let mut nextrow = 0;
        for mat in mats {
            M.fill_block(mat, nextrow, 0);
            nextrow += mat.nrows();
        }
        M.backshift_colptrs();

        Ok(M)
    }
}
