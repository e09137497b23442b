//! Scatter-figure assembly and rendering for basin classifications.

use std::ops::Range;

use crate::grid::linspace;
use crate::{BasinVector, GridParams, Point, RootIndex, Size};

/// Figure title; the polynomial whose basins are drawn.
pub const FIGURE_TITLE: &str = "z³ − 1 = 0";
/// Horizontal axis label: the real part.
pub const X_LABEL: &str = "Re";
/// Vertical axis label: the imaginary part.
pub const Y_LABEL: &str = "Im";

/// Color assigned to each basin, by root index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BasinColor {
    Blue,
    Green,
    Red,
}

impl BasinColor {
    pub fn from_root(index: RootIndex) -> Self {
        match index % 3 {
            0 => BasinColor::Blue,
            1 => BasinColor::Green,
            _ => BasinColor::Red,
        }
    }

    /// The color name handed to the figure.
    pub fn name(&self) -> &'static str {
        match self {
            BasinColor::Blue => "blue",
            BasinColor::Green => "green",
            BasinColor::Red => "red",
        }
    }

    pub fn rgb(&self) -> image::Rgb<u8> {
        match self {
            BasinColor::Blue => image::Rgb([0, 0, 255]),
            BasinColor::Green => image::Rgb([0, 128, 0]),
            BasinColor::Red => image::Rgb([255, 0, 0]),
        }
    }
}

/// An accumulating scatter figure.
///
/// Mirrors the shape of a plotting surface: a title, axis labels, an axes
/// domain, and points added one at a time in draw order. [`Figure::render`]
/// rasterizes the accumulated points into an image.
pub struct Figure {
    title: String,
    x_label: String,
    y_label: String,
    domain: Range<f64>,
    points: Vec<(Point, BasinColor)>,
}

impl Figure {
    pub fn new(title: &str, x_label: &str, y_label: &str, domain: Range<f64>) -> Self {
        Figure {
            title: title.to_owned(),
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            domain,
            points: Vec::new(),
        }
    }

    /// Add one point to the figure.
    pub fn scatter(&mut self, point: Point, color: BasinColor) {
        self.points.push((point, color));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Number of points added so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rasterize the figure onto a white background.
    ///
    /// Each point maps from the axes domain to its pixel; points are drawn
    /// in insertion order, so later points overwrite earlier ones.
    pub fn render(&self, size: Size) -> Result<image::DynamicImage, String> {
        if size.width == 0 || size.height == 0 {
            return Err(format!(
                "error: empty raster: {} x {}",
                size.width, size.height
            ));
        }
        let span = self.domain.end - self.domain.start;
        if !(span > 0.0) {
            return Err(format!("error: empty axes domain: {:?}", self.domain));
        }

        tracing::debug!(
            title = self.title.as_str(),
            points = self.points.len(),
            "rendering figure"
        );

        let mut img = image::ImageBuffer::<image::Rgb<u8>, _>::from_pixel(
            size.width as u32,
            size.height as u32,
            image::Rgb([255, 255, 255]),
        );
        for (point, color) in &self.points {
            let column = to_pixel(point.re, self.domain.start, span, size.width as u32);
            // Pixel rows increase going down, but the imaginary part
            // increases going up.
            let row = size.height as u32
                - 1
                - to_pixel(point.im, self.domain.start, span, size.height as u32);
            img.put_pixel(column, row, color.rgb());
        }

        Ok(img.into())
    }
}

/// Map a coordinate within [start, start + span] onto a raster edge.
///
/// Clamps to the raster; a NaN coordinate lands on pixel 0.
fn to_pixel(value: f64, start: f64, span: f64, edge: u32) -> u32 {
    if edge <= 1 {
        return 0;
    }
    let unit = (value - start) / span;
    let scaled = (unit * (edge - 1) as f64).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, (edge - 1) as f64) as u32
}

/// Assemble the standard basin figure: every grid point scattered exactly
/// once, in evaluation order (outer x, inner y).
pub fn basin_figure(params: &GridParams, basins: &BasinVector) -> Result<Figure, String> {
    if basins.len() != params.samples * params.samples {
        return Err(format!(
            "error: basin count != samples^2: {} != {}^2",
            basins.len(),
            params.samples
        ));
    }

    let xs = linspace(&params.domain, params.samples);
    let ys = xs.clone();
    let mut figure = Figure::new(FIGURE_TITLE, X_LABEL, Y_LABEL, params.domain.clone());
    for (i, x) in xs.iter().enumerate() {
        for (j, y) in ys.iter().enumerate() {
            let basin = basins[i * params.samples + j];
            figure.scatter(Point::new(*x, *y), BasinColor::from_root(basin));
        }
    }
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newton;

    #[test]
    fn color_names_match_root_indices() {
        assert_eq!(BasinColor::from_root(0).name(), "blue");
        assert_eq!(BasinColor::from_root(1).name(), "green");
        assert_eq!(BasinColor::from_root(2).name(), "red");
    }

    #[test]
    fn renders_points_at_their_pixels() {
        let mut figure = Figure::new(FIGURE_TITLE, X_LABEL, Y_LABEL, -2.0..2.0);
        figure.scatter(Point::new(-2.0, -2.0), BasinColor::Red);
        figure.scatter(Point::new(2.0, 2.0), BasinColor::Green);
        figure.scatter(Point::new(0.0, 0.0), BasinColor::Blue);

        let size = Size {
            width: 5,
            height: 5,
        };
        let img = figure.render(size).unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (5, 5));
        // Bottom-left corner of the domain is the bottom row of the raster.
        assert_eq!(*img.get_pixel(0, 4), BasinColor::Red.rgb());
        assert_eq!(*img.get_pixel(4, 0), BasinColor::Green.rgb());
        assert_eq!(*img.get_pixel(2, 2), BasinColor::Blue.rgb());
        // Untouched pixels stay white.
        assert_eq!(*img.get_pixel(1, 1), image::Rgb([255, 255, 255]));
    }

    #[test]
    fn rejects_empty_raster_and_domain() {
        let figure = Figure::new(FIGURE_TITLE, X_LABEL, Y_LABEL, -2.0..2.0);
        assert!(figure
            .render(Size {
                width: 0,
                height: 5
            })
            .is_err());

        let backwards = Figure::new(FIGURE_TITLE, X_LABEL, Y_LABEL, 2.0..-2.0);
        assert!(backwards
            .render(Size {
                width: 5,
                height: 5
            })
            .is_err());
    }

    #[test]
    fn basin_figure_scatters_every_grid_point_once() {
        let params = GridParams {
            domain: -2.0..2.0,
            samples: 10,
        };
        let basins = newton::evaluate(&params, newton::MAX_ITERATIONS);
        let figure = basin_figure(&params, &basins).unwrap();
        assert_eq!(figure.len(), 100);
        assert_eq!(figure.title(), "z³ − 1 = 0");
        assert_eq!(figure.x_label(), "Re");
        assert_eq!(figure.y_label(), "Im");
    }

    #[test]
    fn basin_figure_rejects_mismatched_input() {
        let params = GridParams {
            domain: -2.0..2.0,
            samples: 10,
        };
        let basins = vec![0; 99];
        assert!(basin_figure(&params, &basins).is_err());
    }

    #[test]
    fn real_root_neighborhood_renders_blue() {
        let params = GridParams {
            domain: -2.0..2.0,
            samples: 21,
        };
        let basins = newton::evaluate(&params, newton::MAX_ITERATIONS);
        let figure = basin_figure(&params, &basins).unwrap();
        let img = figure
            .render(Size {
                width: 21,
                height: 21,
            })
            .unwrap()
            .into_rgb8();
        // x = 1.0, y = 0.0 is sample (15, 10): column 15, middle row.
        assert_eq!(*img.get_pixel(15, 10), BasinColor::Blue.rgb());
    }
}
