//! SVG export

use crate::chart::Figure;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Render the figure as an SVG document.
pub fn to_svg(figure: &Figure) -> String {
    let mut svg = String::new();

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">
  <style>
    .title {{ font-family: Arial, sans-serif; font-size: 16px; font-weight: bold; fill: #333; }}
    .label {{ font-family: Arial, sans-serif; font-size: 12px; fill: #666; }}
    .legend {{ font-family: Arial, sans-serif; font-size: 11px; fill: #333; }}
    .grid {{ stroke: #e0e0e0; stroke-width: 0.5; }}
  </style>
  <rect width="100%" height="100%" fill="white"/>
"#,
        figure.width, figure.height
    );

    let plot_width = figure.width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = figure.height - MARGIN_TOP - MARGIN_BOTTOM;

    if !figure.title.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" class="title" text-anchor="middle">{}</text>"#,
            figure.width / 2.0,
            MARGIN_TOP / 2.0 + 8.0,
            escape(&figure.title)
        );
    }

    let (mut min_x, mut max_x, mut min_y, mut max_y) =
        figure.bounds().unwrap_or((0.0, 1.0, 0.0, 1.0));

    // Pad so edge markers are not clipped by the axes
    let x_pad = (max_x - min_x).max(1.0) * 0.1;
    let y_pad = (max_y - min_y).max(1.0) * 0.1;
    min_x -= x_pad;
    max_x += x_pad;
    min_y -= y_pad;
    max_y += y_pad;

    if figure.grid {
        let lines = 5;
        for i in 0..=lines {
            let x = MARGIN_LEFT + (i as f64 / lines as f64) * plot_width;
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.1}" y1="{}" x2="{:.1}" y2="{}" class="grid"/>"#,
                x,
                MARGIN_TOP,
                x,
                figure.height - MARGIN_BOTTOM
            );
            let y = MARGIN_TOP + (i as f64 / lines as f64) * plot_height;
            let _ = writeln!(
                svg,
                r#"  <line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="grid"/>"#,
                MARGIN_LEFT,
                y,
                figure.width - MARGIN_RIGHT,
                y
            );
        }
    }

    let _ = writeln!(
        svg,
        r#"  <line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black" stroke-width="1"/>
  <line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black" stroke-width="1"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = figure.height - MARGIN_BOTTOM,
        r = figure.width - MARGIN_RIGHT
    );

    for series in &figure.series {
        let color = series.style.color.to_hex();
        for (x, y) in series.points() {
            let px = MARGIN_LEFT + (x - min_x) / (max_x - min_x) * plot_width;
            let py = figure.height - MARGIN_BOTTOM - (y - min_y) / (max_y - min_y) * plot_height;
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="{}"/>"#,
                px,
                py,
                series.style.marker_size / 2.0,
                color,
                series.style.fill_alpha
            );
        }
    }

    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        figure.width / 2.0,
        figure.height - 10.0,
        escape(&figure.x_label)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="15" y="{y}" class="label" text-anchor="middle" transform="rotate(-90, 15, {y})">{}</text>"#,
        escape(&figure.y_label),
        y = figure.height / 2.0
    );

    if figure.legend {
        let legend_x = figure.width - MARGIN_RIGHT - 120.0;
        let legend_y = MARGIN_TOP + 10.0;
        for (i, series) in figure.series.iter().enumerate() {
            let y = legend_y + i as f64 * 15.0;
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="12" height="12" fill="{}"/>
  <text x="{}" y="{}" class="legend">{}</text>"#,
                legend_x,
                y,
                series.style.color.to_hex(),
                legend_x + 18.0,
                y + 10.0,
                escape(&series.label)
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Save figure to SVG file
pub fn save_svg<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<(), crate::PlotError> {
    let path = path.as_ref();
    let svg = to_svg(figure);
    let mut file = File::create(path)?;
    file.write_all(svg.as_bytes())?;
    tracing::info!("Saved plot '{}' to {}", figure.title, path.display());
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
