//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn invert(&self) -> impl Iterator<Item = f64> + '_;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Divides every element by the slice's sum, so that the elements add up to `target`.
    /// Returns the original sum.
    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        for element in &mut *self {
            *element = *element / sum * target;
        }
        sum
    }

    fn invert(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|element| 1.0 / element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_slice_f64_near, assert_slice_f64_relative};
    use assert_float_eq::*;

    #[test]
    fn sum() {
        let data = [0.0, 0.1, 0.2];
        assert_f64_near!(0.3, data.sum(), 1);
    }

    #[test]
    fn normalise() {
        let mut data = [0.05, 0.1, 0.15, 0.2];
        let sum = data.normalise(1.0);
        assert_f64_near!(0.5, sum, 1);
        assert_slice_f64_near(&[0.1, 0.2, 0.3, 0.4], &data, 1);
    }

    #[test]
    fn invert() {
        let prices = [2.0, 4.0, 5.0];
        let probs: Vec<_> = prices.invert().collect();
        assert_slice_f64_relative(&[0.5, 0.25, 0.2], &probs, 1e-12);
    }
}
