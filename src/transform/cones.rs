use crate::algebra::triangular_number;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// API type describing the supported cone types and their dimensions.
///
/// Dimensions are counts of constraint rows, except for the PSD triangle
/// cone, whose dimension is the side length of the matrix variable.  The
/// generic parameter carries the exponent of the power cone and is unused
/// by the other variants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupportedConeT<T> {
    /// The zero cone `{0}ᵈ`.
    ///
    /// The parameter indicates the cone's dimension.
    ZeroConeT(usize),
    /// The nonnegative orthant.
    ///
    /// The parameter indicates the cone's dimension.
    NonnegativeConeT(usize),
    /// The second order cone.
    ///
    /// The parameter indicates the cone's dimension.
    SecondOrderConeT(usize),
    /// The positive semidefinite cone in scaled triangular form.
    ///
    /// The parameter indicates the matrix dimension, i.e. size = n
    /// means that the variable is the upper triangle of an nxn matrix.
    PSDTriangleConeT(usize),
    /// The exponential cone in R³.
    ///
    /// This cone takes no parameters.
    ExponentialConeT(),
    /// The power cone in R³.
    ///
    /// The parameter indicates the power.
    PowerConeT(T),
}

impl<T> SupportedConeT<T> {
    /// number of constraint rows spanned by the cone
    pub fn nvars(&self) -> usize {
        match self {
            SupportedConeT::ZeroConeT(dim) => *dim,
            SupportedConeT::NonnegativeConeT(dim) => *dim,
            SupportedConeT::SecondOrderConeT(dim) => *dim,
            SupportedConeT::PSDTriangleConeT(dim) => triangular_number(*dim),
            SupportedConeT::ExponentialConeT() => 3,
            SupportedConeT::PowerConeT(_) => 3,
        }
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            SupportedConeT::ZeroConeT(_) => "ZeroConeT",
            SupportedConeT::NonnegativeConeT(_) => "NonnegativeConeT",
            SupportedConeT::SecondOrderConeT(_) => "SecondOrderConeT",
            SupportedConeT::PSDTriangleConeT(_) => "PSDTriangleConeT",
            SupportedConeT::ExponentialConeT() => "ExponentialConeT",
            SupportedConeT::PowerConeT(_) => "PowerConeT",
        }
    }
}

// iterator over the row ranges of an ordered cone sequence

pub(crate) trait ConeRanges<T> {
    fn rng_cones_iter(&self) -> RangeConesIterator<'_, T>;
}

impl<T> ConeRanges<T> for [SupportedConeT<T>] {
    fn rng_cones_iter(&self) -> RangeConesIterator<'_, T> {
        RangeConesIterator {
            cones: self.iter(),
            start: 0,
        }
    }
}

pub(crate) struct RangeConesIterator<'a, T> {
    cones: std::slice::Iter<'a, SupportedConeT<T>>,
    start: usize,
}

impl<T> Iterator for RangeConesIterator<'_, T> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let cone = self.cones.next()?;
        let stop = self.start + cone.nvars();
        let rng = self.start..stop;
        self.start = stop;
        Some(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nvars() {
        assert_eq!(SupportedConeT::<f64>::ZeroConeT(2).nvars(), 2);
        assert_eq!(SupportedConeT::<f64>::NonnegativeConeT(0).nvars(), 0);
        assert_eq!(SupportedConeT::<f64>::SecondOrderConeT(4).nvars(), 4);
        // PSD dimension is a side length
        assert_eq!(SupportedConeT::<f64>::PSDTriangleConeT(3).nvars(), 6);
        assert_eq!(SupportedConeT::<f64>::ExponentialConeT().nvars(), 3);
        assert_eq!(SupportedConeT::<f64>::PowerConeT(0.5).nvars(), 3);
    }

    #[test]
    fn test_rng_cones_iter() {
        let cones: Vec<SupportedConeT<f64>> = vec![
            SupportedConeT::NonnegativeConeT(3),
            SupportedConeT::ZeroConeT(0),
            SupportedConeT::ZeroConeT(2),
        ];
        let rngs: Vec<_> = cones.rng_cones_iter().collect();
        assert_eq!(rngs, vec![0..3, 3..3, 3..5]);
    }
}
