//! Library code for the Newton basin visualizer.
//!
//! Classifies points of the complex plane by which cube root of unity the
//! Newton-Raphson iteration for z^3 - 1 carries them to, and renders the
//! resulting basins as a scatter figure.

pub mod figure;
pub mod grid;
pub mod newton;
mod numeric;

pub use numeric::Point;

use std::ops::Range;

/// A pair of integer (width, height) dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// Index into the root set; identifies the basin a point belongs to.
pub type RootIndex = usize;

/// Classification of every grid point, in outer-x / inner-y order.
pub type BasinVector = Vec<RootIndex>;

/// Default number of samples along each grid axis.
pub const GRID_SAMPLES: usize = 100;

/// Parameters for a basin evaluation over a square sample grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    /// Axis range; both axes share it.
    pub domain: Range<f64>,
    /// Number of samples along each axis.
    pub samples: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            domain: -2.0..2.0,
            samples: GRID_SAMPLES,
        }
    }
}
