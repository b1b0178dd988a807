//! Backend-independent chart descriptions

/// Direction bars grow in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One named series of a grouped bar chart, one value per group
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// Chart primitive and its data
#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Bar {
        labels: Vec<String>,
        values: Vec<f64>,
        orientation: Orientation,
        /// Print each bar's value above it
        value_labels: bool,
        /// Highlighted note drawn over the bars
        annotation: Option<String>,
    },
    GroupedBar {
        groups: Vec<String>,
        series: Vec<Series>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    Scatter {
        points: Vec<(f64, f64)>,
    },
}

/// A chart ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// File-name stem of the rendered image
    pub slug: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
}

impl Chart {
    pub fn new(slug: &str, title: &str, kind: ChartKind) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            kind,
        }
    }

    #[must_use]
    pub fn x_label(mut self, label: &str) -> Self {
        self.x_label = label.to_string();
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: &str) -> Self {
        self.y_label = label.to_string();
        self
    }

    /// Largest value plotted on the value axis, `0.0` when there is none
    #[must_use]
    pub fn max_value(&self) -> f64 {
        let values: Box<dyn Iterator<Item = f64> + '_> = match &self.kind {
            ChartKind::Bar { values, .. } | ChartKind::Pie { values, .. } => {
                Box::new(values.iter().copied())
            }
            ChartKind::GroupedBar { series, .. } => {
                Box::new(series.iter().flat_map(|s| s.values.iter().copied()))
            }
            ChartKind::Scatter { points } => Box::new(points.iter().map(|p| p.1)),
        };
        values.filter(|v| v.is_finite()).fold(0.0, f64::max)
    }
}

/// Format a number with thousands separators, e.g. `2,000,000`
#[must_use]
pub fn format_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount of money, e.g. `$2,000,000`
#[must_use]
pub fn format_money(amount: f64) -> String {
    let grouped = format_thousands(amount);
    match grouped.strip_prefix('-') {
        Some(positive) => format!("-${positive}"),
        None => format!("${grouped}"),
    }
}
