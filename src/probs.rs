//! Utilities for working with probability vectors.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
    fn invert(&self) -> Vec<f64>;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Scales the slice so that it sums to `target`, returning the sum prior to scaling.
    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    fn invert(&self) -> Vec<f64> {
        self.iter().map(|element| 1.0 / element).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_slice_f64_relative;
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
        assert_slice_f64_relative(&[0.1, 0.2, 0.3, 0.4], &data, 0.001);
    }

    #[test]
    fn normalise_to_other_target() {
        let mut data = [0.2, 0.6];
        data.normalise(2.0);
        assert_slice_f64_relative(&[0.5, 1.5], &data, 0.001);
    }

    #[test]
    fn scale() {
        let mut data = [0.5, 1.0, 1.5];
        data.scale(2.0);
        assert_slice_f64_relative(&[1.0, 2.0, 3.0], &data, 0.001);
    }

    #[test]
    fn invert() {
        let data = [2.0, 4.0, 5.0];
        assert_slice_f64_relative(&[0.5, 0.25, 0.2], &data.invert(), 0.001);
    }
}
