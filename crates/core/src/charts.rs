//! Static chart series for the back-office dashboard and the geometry used to draw
//! them on a canvas.

use std::f64::consts::PI;

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jun", "Jul", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

pub const GRID_COLOR: &str = "rgba(0, 0, 0, 0.05)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    /// Line color, or bar fill.
    pub color: &'static str,
    /// Area fill under a line.
    pub fill: Option<&'static str>,
    /// Per-slice colors for doughnuts.
    pub slice_colors: Vec<&'static str>,
    pub tension: f64,
}

impl Dataset {
    fn series(label: &'static str, data: &[f64], color: &'static str) -> Self {
        Self {
            label,
            data: data.to_vec(),
            color,
            fill: None,
            slice_colors: Vec::new(),
            tension: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Id of the `<canvas>` element.
    pub canvas_id: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
    pub legend: LegendPosition,
}

impl ChartSpec {
    /// Largest value across datasets, rounded up to a readable axis maximum.
    pub fn y_axis_max(&self) -> f64 {
        let max = self
            .datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0_f64, f64::max);
        nice_ceiling(max)
    }

    /// `(label, color)` pairs shown in the legend.
    pub fn legend_items(&self) -> Vec<(&'static str, &'static str)> {
        match self.kind {
            ChartKind::Doughnut => {
                let Some(ds) = self.datasets.first() else {
                    return Vec::new();
                };
                self.labels
                    .iter()
                    .copied()
                    .zip(ds.slice_colors.iter().copied())
                    .collect()
            }
            ChartKind::Line | ChartKind::Bar => {
                self.datasets.iter().map(|d| (d.label, d.color)).collect()
            }
        }
    }
}

/// Created vs. completed projects per month.
pub fn projects_chart() -> ChartSpec {
    let mut created = Dataset::series(
        "Projets créés",
        &[12.0, 19.0, 15.0, 25.0, 22.0, 30.0, 28.0, 35.0, 32.0, 40.0, 38.0, 45.0],
        "#1e3a8a",
    );
    created.fill = Some("rgba(30, 58, 138, 0.1)");
    created.tension = 0.4;

    let mut done = Dataset::series(
        "Projets terminés",
        &[8.0, 12.0, 10.0, 18.0, 15.0, 22.0, 20.0, 25.0, 23.0, 30.0, 28.0, 35.0],
        "#16a34a",
    );
    done.fill = Some("rgba(22, 163, 74, 0.1)");
    done.tension = 0.4;

    ChartSpec {
        canvas_id: "projectsChart",
        kind: ChartKind::Line,
        labels: MONTHS.to_vec(),
        datasets: vec![created, done],
        legend: LegendPosition::Top,
    }
}

/// Project distribution by category.
pub fn categories_chart() -> ChartSpec {
    let mut ds = Dataset::series("", &[30.0, 25.0, 25.0, 20.0], "#1e3a8a");
    ds.slice_colors = vec!["#1e3a8a", "#16a34a", "#3b82f6", "#f59e0b"];
    ChartSpec {
        canvas_id: "categoriesChart",
        kind: ChartKind::Doughnut,
        labels: vec!["Éducation", "Communauté", "Durabilité", "Humanitaire"],
        datasets: vec![ds],
        legend: LegendPosition::Bottom,
    }
}

/// Users, projects and testimonials per month (first half-year).
pub fn monthly_stats_chart() -> ChartSpec {
    ChartSpec {
        canvas_id: "monthlyStatsChart",
        kind: ChartKind::Bar,
        labels: MONTHS[..6].to_vec(),
        datasets: vec![
            Dataset::series(
                "Utilisateurs",
                &[120.0, 190.0, 150.0, 250.0, 220.0, 300.0],
                "#1e3a8a",
            ),
            Dataset::series("Projets", &[12.0, 19.0, 15.0, 25.0, 22.0, 30.0], "#16a34a"),
            Dataset::series("Témoignages", &[8.0, 12.0, 10.0, 18.0, 15.0, 22.0], "#3b82f6"),
        ],
        legend: LegendPosition::Top,
    }
}

pub fn dashboard_charts() -> Vec<ChartSpec> {
    vec![projects_chart(), categories_chart(), monthly_stats_chart()]
}

/// Round `v` up to 1, 1.2, 1.5, 2, 2.5, 3, 4, 5, 6, 8 or 10 times a power of ten.
pub fn nice_ceiling(v: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(v.log10().floor());
    let fraction = v / magnitude;
    let step = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0]
        .into_iter()
        .find(|&s| fraction <= s + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// Plot rectangle inside the canvas, after legend and axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub const LEGEND_HEIGHT: f64 = 28.0;
    const AXIS_LEFT: f64 = 40.0;
    const AXIS_BOTTOM: f64 = 22.0;
    const PAD: f64 = 8.0;

    pub fn for_chart(kind: ChartKind, legend: LegendPosition, width: f64, height: f64) -> Self {
        let (mut top, mut bottom) = (Self::PAD, height - Self::PAD);
        match legend {
            LegendPosition::Top => top += Self::LEGEND_HEIGHT,
            LegendPosition::Bottom => bottom -= Self::LEGEND_HEIGHT,
        }
        let (left, right) = match kind {
            ChartKind::Doughnut => (Self::PAD, width - Self::PAD),
            ChartKind::Line | ChartKind::Bar => {
                bottom -= Self::AXIS_BOTTOM;
                (Self::AXIS_LEFT, width - Self::PAD)
            }
        };
        Self {
            left,
            top,
            right: right.max(left),
            bottom: bottom.max(top),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Canvas y for a value on an axis starting at zero.
    pub fn y_for(&self, value: f64, y_max: f64) -> f64 {
        let norm = (value / y_max.max(f64::EPSILON)).clamp(0.0, 1.0);
        self.bottom - norm * self.height()
    }

    /// Center x of category `i` out of `n`.
    pub fn x_for(&self, i: usize, n: usize) -> f64 {
        let slot = self.width() / n.max(1) as f64;
        self.left + slot * (i as f64 + 0.5)
    }
}

/// Bezier control points `(before, after)` for a point of a smoothed line.
///
/// The neighbours are weighted by distance so short segments get short handles;
/// `tension == 0` yields straight segments.
pub fn control_points(
    prev: (f64, f64),
    cur: (f64, f64),
    next: (f64, f64),
    tension: f64,
) -> ((f64, f64), (f64, f64)) {
    let d01 = ((cur.0 - prev.0).powi(2) + (cur.1 - prev.1).powi(2)).sqrt();
    let d12 = ((next.0 - cur.0).powi(2) + (next.1 - cur.1).powi(2)).sqrt();
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    (
        (cur.0 - fa * dx, cur.1 - fa * dy),
        (cur.0 + fb * dx, cur.1 + fb * dy),
    )
}

/// Start/end angles (radians) of each doughnut slice, clockwise from 12 o'clock.
pub fn doughnut_arcs(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -PI / 2.0;
    values
        .iter()
        .map(|&v| {
            let sweep = v.max(0.0) / total * 2.0 * PI;
            let arc = (angle, angle + sweep);
            angle += sweep;
            arc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_has_three_charts_with_consistent_series() {
        let charts = dashboard_charts();
        let kinds: Vec<_> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChartKind::Line, ChartKind::Doughnut, ChartKind::Bar]);
        for c in &charts {
            for d in &c.datasets {
                assert_eq!(d.data.len(), c.labels.len(), "{}", c.canvas_id);
            }
        }
        assert_eq!(charts[1].legend, LegendPosition::Bottom);
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(45.0), 50.0);
        assert_eq!(nice_ceiling(300.0), 300.0);
        assert_eq!(nice_ceiling(30.0), 30.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert!((nice_ceiling(110.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn doughnut_arcs_cover_the_circle() {
        let arcs = doughnut_arcs(&categories_chart().datasets[0].data);
        assert_eq!(arcs.len(), 4);
        assert!((arcs[0].0 + PI / 2.0).abs() < 1e-12);
        for w in arcs.windows(2) {
            assert!((w[0].1 - w[1].0).abs() < 1e-12);
        }
        let last = arcs.last().unwrap();
        assert!((last.1 - (1.5 * PI)).abs() < 1e-9);
        assert!(doughnut_arcs(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn zero_tension_keeps_handles_on_the_point() {
        let (a, b) = control_points((0.0, 0.0), (1.0, 1.0), (2.0, 0.0), 0.0);
        assert_eq!(a, (1.0, 1.0));
        assert_eq!(b, (1.0, 1.0));
        let (a, b) = control_points((0.0, 0.0), (1.0, 1.0), (2.0, 0.0), 0.4);
        assert!(a.0 < 1.0 && b.0 > 1.0);
    }

    #[test]
    fn plot_area_reserves_legend_space() {
        let top = PlotArea::for_chart(ChartKind::Line, LegendPosition::Top, 400.0, 300.0);
        assert!(top.top >= PlotArea::LEGEND_HEIGHT);
        assert_eq!(top.y_for(0.0, 50.0), top.bottom);
        assert_eq!(top.y_for(50.0, 50.0), top.top);

        let bottom = PlotArea::for_chart(ChartKind::Doughnut, LegendPosition::Bottom, 400.0, 300.0);
        assert!(bottom.bottom <= 300.0 - PlotArea::LEGEND_HEIGHT);
    }

    #[test]
    fn legends_follow_chart_kind() {
        assert_eq!(categories_chart().legend_items().len(), 4);
        assert_eq!(monthly_stats_chart().legend_items()[2], ("Témoignages", "#3b82f6"));
    }
}
