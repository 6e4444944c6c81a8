//! Scatter figure

use crate::style::Style;
use crate::PlotError;

/// A data series drawn as markers
#[derive(Debug, Clone)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: String,
    pub style: Style,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>, label: &str, style: Style) -> Result<Self, PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::InvalidData(format!(
                "series '{}' has {} x values and {} y values",
                label,
                x.len(),
                y.len()
            )));
        }
        Ok(Self {
            x,
            y,
            label: label.to_string(),
            style,
        })
    }

    /// Finite (x, y) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Scatter figure. Series are drawn in insertion order, so later series sit on top.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub legend: bool,
    pub grid: bool,
}

impl Figure {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            width: 800.0,
            height: 600.0,
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            series: Vec::new(),
            legend: true,
            grid: true,
        }
    }

    /// Set axis labels
    pub fn labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.legend = show;
        self
    }

    /// Add a scatter series
    pub fn scatter(
        &mut self,
        x: &[f64],
        y: &[f64],
        label: &str,
        style: Style,
    ) -> Result<&mut Self, PlotError> {
        self.series
            .push(Series::new(x.to_vec(), y.to_vec(), label, style)?);
        Ok(self)
    }

    /// Data bounds over every finite point, `(min_x, max_x, min_y, max_y)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.series.iter().flat_map(Series::points).peekable();
        points.peek()?;
        Some(points.fold(
            (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
            |(min_x, max_x, min_y, max_y), (x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        ))
    }

    /// Save to SVG file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PlotError> {
        crate::export::save_svg(self, path)
    }

    /// Convert to SVG string
    pub fn to_svg(&self) -> String {
        crate::export::to_svg(self)
    }
}
