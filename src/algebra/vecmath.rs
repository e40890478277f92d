use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn dist(&self, y: &Self) -> T {
        assert_eq!(self.len(), y.len());
        let dist2 = zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + T::powi(x - y, 2));
        T::sqrt(dist2)
    }

    fn norm(&self) -> T {
        T::sqrt(self.dot(self))
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            out = if v > out { v } else { out };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_negate() {
        let mut x = vec![1., -2., 3.];
        x.scale(2.);
        assert_eq!(x, vec![2., -4., 6.]);
        x.negate();
        assert_eq!(x, vec![-2., 4., -6.]);
    }

    #[test]
    fn test_norms() {
        let x = vec![3., -4.];
        assert_eq!(x.norm(), 5.);
        assert_eq!(x.norm_inf(), 4.);
        assert_eq!(x.dot(&[2., 1.]), 2.);
        assert_eq!(x.dist(&[3., -1.]), 3.);
    }

    #[test]
    fn test_copy_from() {
        let mut x = vec![0.; 3];
        x.copy_from(&[1., 2., 3.]);
        assert_eq!(x, vec![1., 2., 3.]);
    }
}
