//! Plotting
//!
//! Scatter figures exported to SVG, used to show where a queried point sits
//! in a scan's point cloud.
//!
//! ## Quick Start
//!
//! ```rust
//! use scanstitch_plot::{Color, Figure, Style};
//!
//! let mut fig = Figure::new("Scan");
//! fig.scatter(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], "points", Style::new(Color::grey()))
//!     .unwrap();
//! let svg = fig.to_svg();
//! assert!(svg.contains("<circle"));
//! ```

pub mod chart;
pub mod export;
pub mod style;

pub use chart::{Figure, Series};
pub use export::{save_svg, to_svg};
pub use style::{Color, Style};

/// Plotting error types
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
