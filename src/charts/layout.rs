//! Bar chart geometry
//!
//! Layouts are plain data: bar extents in data coordinates, colours, tick
//! labels and gridline positions. Rendering only has to draw what is here.

use crate::charts::tables::{ConfidenceRow, SuccessRateRow};

/// Width of a bar in a single-series chart
pub const SINGLE_BAR_WIDTH: f64 = 0.8;

/// Width of each bar in a grouped chart; the second bar is offset by this much
pub const GROUPED_BAR_WIDTH: f64 = 0.35;

/// Colours of the success rate bars, one per table row
pub const SUCCESS_RATE_PALETTE: [Rgb; 3] = [
    Rgb(0x4C, 0xAF, 0x50),
    Rgb(0x21, 0x96, 0xF3),
    Rgb(0xFF, 0xC1, 0x07),
];

/// Colour of the confidence bars
pub const CONFIDENCE_COLOR: Rgb = Rgb(0x21, 0x96, 0xF3);

/// Colour of the explanation score bars
pub const EXPLANATION_COLOR: Rgb = Rgb(0xFF, 0x98, 0x00);

/// Tilt of the category labels under the grouped chart, in degrees
pub const GROUPED_LABEL_ROTATION: f64 = 10.0;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` form
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// One bar, in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub left: f64,
    pub right: f64,
    pub height: f64,
}

impl Bar {
    /// Bar of `width` centred on `center`
    #[must_use]
    pub fn centered(center: f64, width: f64, height: f64) -> Self {
        Self {
            left: center - width / 2.0,
            right: center + width / 2.0,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Bars sharing a colour and legend entry
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend label, `None` keeps the series out of the legend
    pub label: Option<String>,
    pub color: Rgb,
    pub bars: Vec<Bar>,
}

/// Category label under the x axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Everything needed to draw one bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub title: String,
    pub y_label: Option<String>,
    pub series: Vec<BarSeries>,
    pub ticks: Vec<Tick>,
    /// Visible x range
    pub x_range: (f64, f64),
    /// Top of the y axis; the axis starts at zero
    pub y_max: f64,
    /// Heights of the dashed horizontal gridlines
    pub grid_lines: Vec<f64>,
    /// Counterclockwise rotation of the tick labels, in degrees
    pub label_rotation: f64,
}

impl BarLayout {
    /// Whether any series has a legend label
    #[must_use]
    pub fn has_legend(&self) -> bool {
        self.series.iter().any(|s| s.label.is_some())
    }

    fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.series.iter().flat_map(|s| s.bars.iter())
    }

    /// Fill in x range, y range and gridlines from the bars
    fn with_bounds(mut self) -> Self {
        let (min_x, max_x) = self.bars().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| {
            (lo.min(b.left), hi.max(b.right))
        });
        let max_height = self.bars().map(|b| b.height).fold(0.0, f64::max);

        // Same relative padding on both sides of the outermost bars
        let pad = if min_x.is_finite() { (max_x - min_x) * 0.05 } else { 0.5 };
        self.x_range = if min_x.is_finite() {
            (min_x - pad, max_x + pad)
        } else {
            (-pad, pad)
        };

        self.y_max = if max_height > 0.0 { max_height * 1.05 } else { 1.0 };
        self.grid_lines = grid_lines(self.y_max);
        self
    }
}

/// Step between gridlines: 1, 2 or 5 times a power of ten, giving at most 8 lines
#[must_use]
pub fn grid_step(y_max: f64) -> f64 {
    let rough = y_max / 8.0;
    let magnitude = 10f64.powf(rough.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= rough)
        .unwrap_or(10.0 * magnitude)
}

/// Gridline heights from zero up to `y_max`, zero excluded
#[must_use]
pub fn grid_lines(y_max: f64) -> Vec<f64> {
    if !(y_max.is_finite() && y_max > 0.0) {
        return Vec::new();
    }
    let step = grid_step(y_max);
    (1..)
        .map(|i: i32| f64::from(i) * step)
        .take_while(|y| *y <= y_max)
        .collect()
}

/// One coloured bar per row, height = success rate
#[must_use]
pub fn success_rate_layout(rows: &[SuccessRateRow]) -> BarLayout {
    let series = rows
        .iter()
        .enumerate()
        .map(|(i, row)| BarSeries {
            label: None,
            color: SUCCESS_RATE_PALETTE[i % SUCCESS_RATE_PALETTE.len()],
            bars: vec![Bar::centered(i as f64, SINGLE_BAR_WIDTH, row.success_rate)],
        })
        .collect();

    let ticks = rows
        .iter()
        .enumerate()
        .map(|(i, row)| Tick {
            position: i as f64,
            label: row.model_type.to_string(),
        })
        .collect();

    BarLayout {
        title: "Model Success Rate Comparison".to_string(),
        y_label: Some("Success Rate (%)".to_string()),
        series,
        ticks,
        x_range: (0.0, 0.0),
        y_max: 0.0,
        grid_lines: Vec::new(),
        label_rotation: 0.0,
    }
    .with_bounds()
}

/// Two bars per row: confidence at `x`, explanation score at `x + 0.35`
#[must_use]
pub fn confidence_layout(rows: &[ConfidenceRow]) -> BarLayout {
    let confidence = BarSeries {
        label: Some("Confidence".to_string()),
        color: CONFIDENCE_COLOR,
        bars: rows
            .iter()
            .enumerate()
            .map(|(i, row)| Bar::centered(i as f64, GROUPED_BAR_WIDTH, row.model_confidence))
            .collect(),
    };
    let explanation = BarSeries {
        label: Some("Explanation".to_string()),
        color: EXPLANATION_COLOR,
        bars: rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Bar::centered(
                    i as f64 + GROUPED_BAR_WIDTH,
                    GROUPED_BAR_WIDTH,
                    row.explanation_score,
                )
            })
            .collect(),
    };

    let ticks = rows
        .iter()
        .enumerate()
        .map(|(i, row)| Tick {
            position: i as f64 + GROUPED_BAR_WIDTH / 2.0,
            label: row.model_type.to_string(),
        })
        .collect();

    BarLayout {
        title: "Model Confidence vs Explanation Score".to_string(),
        y_label: None,
        series: vec![confidence, explanation],
        ticks,
        x_range: (0.0, 0.0),
        y_max: 0.0,
        grid_lines: Vec::new(),
        label_rotation: GROUPED_LABEL_ROTATION,
    }
    .with_bounds()
}
