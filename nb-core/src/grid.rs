//! Sample-grid construction.

use std::ops::Range;

/// Evenly spaced values across `range`, endpoints included.
///
/// Linspace semantics: step = (end - start) / (steps - 1), with the final
/// value pinned to the exact endpoint so accumulated rounding can't push it
/// past the range.
pub fn linspace(range: &Range<f64>, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![range.start; steps];
    }
    let step = (range.end - range.start) / (steps - 1) as f64;
    let mut values: Vec<f64> = (0..steps)
        .map(|i| range.start + i as f64 * step)
        .collect();
    values[steps - 1] = range.end;
    values
}
