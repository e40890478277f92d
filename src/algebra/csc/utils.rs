//---------------------------------------------------------
// low-level internal utilities for counting / filling entries
// in block partitioned sparse matrices.
//---------------------------------------------------------

use crate::algebra::{CscMatrix, FloatT};
use std::iter::zip;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    // increment the self.colptr by the number of nonzeros
    // in each column of M, placing M's columns at initcol
    pub(crate) fn colcount_block(&mut self, M: &CscMatrix<T>, initcol: usize) {
        for i in 0..M.n {
            self.colptr[initcol + i] += M.colptr[i + 1] - M.colptr[i];
        }
    }

    // populate values from M using the self.colptr entries as indicators of
    // the next fill location in each column.
    pub(crate) fn fill_block(&mut self, M: &CscMatrix<T>, initrow: usize, initcol: usize) {
        for i in 0..M.n {
            let z = zip(&M.rowval, &M.nzval);
            let start = M.colptr[i];
            let stop = M.colptr[i + 1];

            for (&Mrow, &Mval) in z.take(stop).skip(start) {
                let col = i + initcol;
                let dest = self.colptr[col];
                self.rowval[dest] = Mrow + initrow;
                self.nzval[dest] = Mval;
                self.colptr[col] += 1;
            }
        }
    }

    pub(crate) fn colcount_to_colptr(&mut self) {
        let mut currentptr = 0;
        for p in &mut self.colptr {
            let count = *p;
            *p = currentptr;
            currentptr += count;
        }
    }

    pub(crate) fn backshift_colptrs(&mut self) {
        self.colptr.rotate_right(1);
        self.colptr[0] = 0;
    }
}
