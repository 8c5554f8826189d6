//! SVG rendering of bar layouts with plotters

use std::fmt::Write as _;
use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::charts::layout::{BarLayout, Rgb};
use crate::error::{Result, SynthError};

/// Gap between the x axis and the top of a category label, in pixels
const TICK_LABEL_GAP: i32 = 6;
const TICK_LABEL_FONT_SIZE: u32 = 12;

fn chart_error(error: impl std::fmt::Display) -> SynthError {
    SynthError::Chart(error.to_string())
}

impl From<Rgb> for RGBColor {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        RGBColor(r, g, b)
    }
}

/// Draw `layout` as an SVG file of `size` pixels at `path`
pub fn render_bar_chart(layout: &BarLayout, path: &Path, size: (u32, u32)) -> Result<()> {
    let svg = render_bar_chart_svg(layout, size)?;
    std::fs::write(path, svg)?;
    info!("Rendered '{}' to {}", layout.title, path.display());
    Ok(())
}

/// Draw `layout` and return the SVG document
pub fn render_bar_chart_svg(layout: &BarLayout, size: (u32, u32)) -> Result<String> {
    let mut svg = String::new();
    let anchors = draw_bars(layout, &mut svg, size)?;

    // plotters only turns text by quarter turns, so the category labels are
    // appended by hand with an arbitrary rotation.
    let mut labels = String::new();
    for (tick, anchor) in layout.ticks.iter().zip(anchors) {
        labels.push_str(&tick_label_element(&tick.label, anchor, layout.label_rotation));
    }
    let close = svg
        .rfind("</svg>")
        .ok_or_else(|| SynthError::Chart("SVG document has no closing tag".to_string()))?;
    svg.insert_str(close, &labels);
    Ok(svg)
}

/// Draw everything but the category labels into `buffer`, returning the
/// pixel anchor of each tick label
fn draw_bars(layout: &BarLayout, buffer: &mut String, size: (u32, u32)) -> Result<Vec<(i32, i32)>> {
    let root = SVGBackend::with_string(buffer, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let (x_min, x_max) = layout.x_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0f64..layout.y_max)
        .map_err(chart_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh().x_labels(0);
    if let Some(y_label) = &layout.y_label {
        mesh.y_desc(y_label.as_str());
    }
    mesh.draw().map_err(chart_error)?;

    for series in &layout.series {
        let color = RGBColor::from(series.color);
        let drawn = chart
            .draw_series(series.bars.iter().map(|bar| {
                Rectangle::new([(bar.left, 0.0), (bar.right, bar.height)], color.filled())
            }))
            .map_err(chart_error)?;
        if let Some(label) = &series.label {
            drawn
                .label(label.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        }
    }

    // Gridlines go over the bars
    let grid_style = BLACK.mix(0.3).stroke_width(1);
    for &y in &layout.grid_lines {
        chart
            .draw_series(DashedLineSeries::new(
                vec![(x_min, y), (x_max, y)],
                6,
                4,
                grid_style,
            ))
            .map_err(chart_error)?;
    }

    if layout.has_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(chart_error)?;
    }

    let anchors = layout
        .ticks
        .iter()
        .map(|tick| {
            let (px, py) = chart.backend_coord(&(tick.position, 0.0));
            (px, py + TICK_LABEL_GAP)
        })
        .collect();

    root.present().map_err(chart_error)?;
    Ok(anchors)
}

/// `<text>` element centred on `(x, y)`, turned counterclockwise by `rotation` degrees
fn tick_label_element(label: &str, (x, y): (i32, i32), rotation: f64) -> String {
    let mut element = format!(
        r##"<text x="{x}" y="{y}" dy="0.76em" text-anchor="middle" font-family="sans-serif" font-size="{TICK_LABEL_FONT_SIZE}" fill="#000000""##
    );
    if rotation != 0.0 {
        // SVG angles run clockwise since y points down
        let _ = write!(element, r#" transform="rotate({}, {x}, {y})""#, -rotation);
    }
    let _ = writeln!(element, ">{}</text>", escape_xml(label));
    element
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
