//! Basin classification for the Newton-Raphson iteration on z^3 - 1.

use rayon::prelude::*;

use crate::grid::linspace;
use crate::{BasinVector, GridParams, Point, RootIndex};

/// Number of Newton steps applied to every sample point.
pub const MAX_ITERATIONS: usize = 100;

/// The three cube roots of unity, the attractors of the iteration.
///
/// Order fixes the color-index contract: index 0 is the real root, then the
/// upper and lower half-plane roots.
pub fn roots() -> [Point; 3] {
    let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
    [
        Point::new(1.0, 0.0),
        Point::new(-0.5, half_sqrt3),
        Point::new(-0.5, -half_sqrt3),
    ]
}

/// One Newton step for f(z) = z^3 - 1, on real components.
///
/// This is z <- z - (z^3 - 1) / (3 z^2), hand-expanded: dividing by 3 z^2 is
/// the rotation-scaling matrix
///
/// ```text
/// [[diag, off], [-off, diag]] / (3 |z|^4)
/// ```
///
/// with diag = a^2 - b^2 and off = 2ab applied to f(z)'s components.
///
/// At the origin the scale factor divides by zero; the NaNs that produces
/// are carried through undetected. Deliberately left as-is.
#[inline]
fn newton_step(a: f64, b: f64) -> (f64, f64) {
    let diag = a * a - b * b;
    let off = 2.0 * a * b;
    let p_re = a * a * a - 3.0 * a * b * b - 1.0;
    let p_im = (3.0 * a * a - b * b) * b;
    let mut frac = a * a + b * b;
    frac *= frac;
    frac = 1.0 / (3.0 * frac);
    (
        a - frac * (diag * p_re + off * p_im),
        b - frac * (diag * p_im - off * p_re),
    )
}

/// Run the fixed-length iteration from (x, y) and name the basin it lands in.
///
/// No convergence check and no early exit: exactly [`MAX_ITERATIONS`] steps,
/// then nearest-root classification. Pure; identical inputs give identical
/// output. A start at the origin propagates NaN through every step, and every
/// `NaN < d` comparison in the final scan is false, so that point lands on
/// index 0.
pub fn classify(x: f64, y: f64) -> RootIndex {
    find_basin(x, y, MAX_ITERATIONS)
}

#[inline]
fn find_basin(x: f64, y: f64, limit: usize) -> RootIndex {
    let (mut a, mut b) = (x, y);
    for _ in 0..limit {
        (a, b) = newton_step(a, b);
    }
    nearest_root(Point::new(a, b))
}

/// Index of the root nearest to `w`; the first index wins ties.
fn nearest_root(w: Point) -> RootIndex {
    let roots = roots();
    let mut best = 0;
    let mut best_distance = w.distance_squared(roots[0]);
    for (index, root) in roots.iter().enumerate().skip(1) {
        let d = w.distance_squared(*root);
        if d < best_distance {
            best = index;
            best_distance = d;
        }
    }
    best
}

/// Classify every grid point, sequentially.
///
/// Outer loop over x, inner loop over y; this is the order the scatter
/// figure receives its points in.
pub fn evaluate(params: &GridParams, iterations: usize) -> BasinVector {
    let span = tracing::info_span!("evaluate");
    let _guard = span.enter();

    let xs = linspace(&params.domain, params.samples);
    let ys = xs.clone();
    let mut output: BasinVector = Vec::with_capacity(params.samples * params.samples);
    for x in &xs {
        for y in &ys {
            output.push(find_basin(*x, *y, iterations));
        }
    }
    tracing::debug!(points = output.len(), "basins-computed");
    output
}

/// Parallel variant of [`evaluate`]; same output.
///
/// Each classification is pure, so grid columns fan out across the rayon
/// pool with no shared state.
pub fn evaluate_parallel(params: &GridParams, iterations: usize) -> BasinVector {
    let span = tracing::info_span!("evaluate-parallel");
    let _guard = span.enter();

    let xs = linspace(&params.domain, params.samples);
    let ys = xs.clone();
    let mut output: BasinVector = vec![0; params.samples * params.samples];

    let out_columns = output.chunks_mut(params.samples);
    xs.into_iter()
        .zip(out_columns)
        .par_bridge()
        .for_each(|(x, column_out)| {
            ys.iter().zip(column_out).for_each(|(y, out)| {
                *out = find_basin(x, *y, iterations);
            })
        });
    tracing::debug!(points = output.len(), "basins-computed");
    output
}
