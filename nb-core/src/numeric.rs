/// Complex number as a concrete (re, im) pair.
/// A little more granular than num's complex type, because we're only
/// interested in certain ops; the Newton update itself works on the
/// components directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub re: f64,
    pub im: f64,
}

impl Point {
    pub fn new(re: f64, im: f64) -> Self {
        Point { re, im }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Comparing squared distances leaves any argmin unchanged, and we can
    /// skip the square root.
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dre = self.re - other.re;
        let dim = self.im - other.im;
        dre * dre + dim * dim
    }
}
