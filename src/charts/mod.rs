//! Comparison charts
//!
//! Two bar charts built from fixed reference tables and written as SVG files.

pub mod layout;
pub mod render;
pub mod tables;

use std::path::PathBuf;

use crate::config::ChartConfig;
use crate::error::Result;

pub use layout::{BarLayout, confidence_layout, success_rate_layout};
pub use render::{render_bar_chart, render_bar_chart_svg};
pub use tables::{CONFIDENCE_TABLE, SUCCESS_RATE_TABLE};

/// Render both comparison charts and return their paths, success rate chart first
pub fn render_comparison_charts(config: &ChartConfig) -> Result<Vec<PathBuf>> {
    let size = (config.width, config.height);
    let charts = [
        (success_rate_layout(&SUCCESS_RATE_TABLE), config.success_rate_path()),
        (confidence_layout(&CONFIDENCE_TABLE), config.confidence_path()),
    ];

    let mut paths = Vec::with_capacity(charts.len());
    for (layout, path) in charts {
        render_bar_chart(&layout, &path, size)?;
        paths.push(path);
    }
    Ok(paths)
}
