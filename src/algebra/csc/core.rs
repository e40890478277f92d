#![allow(non_snake_case)]

use crate::algebra::{FloatT, SparseFormatError};
use itertools::izip;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use coneform::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that row indices are
    /// all in bounds or that data is arranged such that entries within each
    /// column appear in order of increasing row index.   Responsibility for
    /// ensuring these conditions hold is left to the caller.
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    pub fn spalloc(size: (usize, usize), nnz: usize) -> Self {
        let (m, n) = size;
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// A matrix of zeros of the given size
    pub fn zeros(size: (usize, usize)) -> Self {
        Self::spalloc(size, 0)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// Assemble a matrix from `(row, col, value)` triplet data.
    ///
    /// Entries may be supplied in any order and are sorted into place
    /// within each column.  Duplicate coordinates are not combined and
    /// will be rejected by a subsequent [`check_format`](CscMatrix::check_format).
    ///
    /// # Panics
    /// Panics if the triplet vectors have mismatched lengths or contain
    /// indices out of bounds.
    pub fn new_from_triplets(
        m: usize,
        n: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
        vals: Vec<T>,
    ) -> Self {
        assert_eq!(rows.len(), vals.len());
        assert_eq!(cols.len(), vals.len());
        assert!(rows.iter().all(|&r| r < m));
        assert!(cols.iter().all(|&c| c < n));

        let mut A = Self::spalloc((m, n), vals.len());

        // count entries per column, then convert to column pointers
        A.colptr.fill(0);
        for &c in &cols {
            A.colptr[c] += 1;
        }
        A.colcount_to_colptr();

        for (&r, &c, &v) in izip!(&rows, &cols, &vals) {
            let dest = A.colptr[c];
            A.rowval[dest] = r;
            A.nzval[dest] = v;
            A.colptr[c] += 1;
        }
        A.backshift_colptrs();

        // restore row ordering within each column
        for col in 0..n {
            let rng = A.colptr[col]..A.colptr[col + 1];
            let mut pairs: Vec<(usize, T)> = zip(&A.rowval[rng.clone()], &A.nzval[rng.clone()])
                .map(|(&r, &v)| (r, v))
                .collect();
            pairs.sort_unstable_by_key(|&(r, _)| r);
            for (idx, (r, v)) in zip(rng, pairs) {
                A.rowval[idx] = r;
                A.nzval[idx] = v;
            }
        }

        A
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.m
    }

    /// number of columns
    pub fn ncols(&self) -> usize {
        self.n
    }

    /// size as an `(m,n)` tuple
    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowval);
            }
        }
        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        Ok(())
    }

    /// Select a subset of the rows of a sparse matrix
    ///
    /// # Panics
    /// Panics if row dimensions are incompatible
    pub fn select_rows(&self, rowidx: &[bool]) -> Self {
        //first check for compatible row dimensions
        assert_eq!(rowidx.len(), self.m);

        //count the number of rows in the reduced matrix and build an
        //index from the logical rowidx to the reduced row number
        let mut rridx = vec![0; self.m];
        let mut mred = 0;
        for (r, is_used) in zip(&mut rridx, rowidx) {
            if *is_used {
                *r = mred;
                mred += 1;
            }
        }

        // count the nonzeros in the reduced matrix
        let nzred = self.rowval.iter().filter(|&r| rowidx[*r]).count();

        // Allocate a reduced size A
        let mut Ared = CscMatrix::spalloc((mred, self.n), nzred);

        //populate new matrix
        let mut ptrred = 0;
        for col in 0..self.n {
            Ared.colptr[col] = ptrred;
            for ptr in self.colptr[col]..self.colptr[col + 1] {
                let thisrow = self.rowval[ptr];
                if rowidx[thisrow] {
                    Ared.rowval[ptrred] = rridx[thisrow];
                    Ared.nzval[ptrred] = self.nzval[ptr];
                    ptrred += 1;
                }
            }
            Ared.colptr[Ared.n] = ptrred;
        }

        Ared
    }

    /// Returns the value at the given `(row,col)` index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        let rows_in_this_column = &self.rowval[first..last];
        match rows_in_this_column.binary_search(&row) {
            Ok(idx) => Some(self.nzval[first + idx]),
            Err(_) => None,
        }
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅  ]
    //[1.0  5.0    ⋅  ]
    //[ ⋅   6.0  10.0 ]
    //[2.0  7.0    ⋅  ]
    //[3.0  8.0  11.0 ]

    let A = CscMatrix::new(
        5,                                             // m
        3,                                             // n
        vec![0, 3, 8, 10],                             // colptr
        vec![1, 3, 4, 0, 1, 2, 3, 4, 2, 4],            // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 10., 11.], // nzval
    );

    assert!(A.check_format().is_ok());
    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((4, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((2, 2)).unwrap(), 10.);
    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((2, 0)).is_none());
    assert!(A.get_entry((3, 2)).is_none());
}

#[test]
fn test_csc_from_triplets() {
    // entries supplied out of order
    let A: CscMatrix = CscMatrix::new_from_triplets(
        3,
        2,
        vec![2, 0, 1, 0],
        vec![1, 0, 1, 1],
        vec![5., 1., 4., 3.],
    );

    assert!(A.check_format().is_ok());
    assert_eq!(A.nnz(), 4);
    assert_eq!(A.get_entry((0, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 3.);
    assert_eq!(A.get_entry((1, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((2, 1)).unwrap(), 5.);
}

#[test]
fn test_csc_check_format() {
    let mut A: CscMatrix = CscMatrix::identity(3);
    assert!(A.check_format().is_ok());

    // row index out of bounds
    A.rowval[2] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadRowval));

    // defective column pointers
    let mut B: CscMatrix = CscMatrix::identity(3);
    B.colptr[1] = 2;
    assert_eq!(B.check_format(), Err(SparseFormatError::BadColptr));
}

#[test]
fn test_csc_select_rows() {
    let A: CscMatrix = CscMatrix::new(
        3,
        2,
        vec![0, 2, 4],
        vec![0, 2, 1, 2],
        vec![1., 2., 3., 4.],
    );
    let Ared = A.select_rows(&[true, false, true]);

    assert_eq!(Ared.size(), (2, 2));
    assert_eq!(Ared.get_entry((0, 0)).unwrap(), 1.);
    assert_eq!(Ared.get_entry((1, 0)).unwrap(), 2.);
    assert_eq!(Ared.get_entry((1, 1)).unwrap(), 4.);
    assert!(Ared.get_entry((0, 1)).is_none());
}
