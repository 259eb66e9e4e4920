//! Chart Plotter Module
//! Draws figure models as interactive egui_plot charts.

use crate::charts::figure::{ErrorPoint, Figure, Mark, Series};
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, PlotUi};

/// Series colors, restarted for every figure.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

const LINE_WIDTH: f32 = 1.5;
const DASH_WIDTH: f32 = 2.5;

/// A line segment in plot coordinates.
pub type Segment = [[f64; 2]; 2];

/// Draws figures with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for the n-th series of a figure.
    pub fn get_series_color(series_index: usize) -> Color32 {
        PALETTE[series_index % PALETTE.len()]
    }

    /// Vertical bar plus bottom and top caps.
    pub fn error_bar_segments(point: &ErrorPoint, cap_half_width: f64) -> [Segment; 3] {
        let low = point.y - point.err;
        let high = point.y + point.err;
        [
            [[point.x, low], [point.x, high]],
            [[point.x - cap_half_width, low], [point.x + cap_half_width, low]],
            [[point.x - cap_half_width, high], [point.x + cap_half_width, high]],
        ]
    }

    /// Horizontal dash centred on the point.
    pub fn dash_segment(point: &ErrorPoint, half_width: f64) -> Segment {
        [
            [point.x - half_width, point.y],
            [point.x + half_width, point.y],
        ]
    }

    /// Draw one figure filling `size` (in points).
    /// `cap_half_width` is in screen points so caps keep their size when zooming.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure, size: [f32; 2], cap_half_width: f32) {
        let mut plot = Plot::new(format!("figure_{}", figure.title))
            .width(size[0])
            .height(size[1])
            .legend(Legend::default())
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone());
        for &x in &figure.include_x {
            plot = plot.include_x(x);
        }

        plot.show(ui, |plot_ui| {
            let [dx_per_point, _] = plot_ui.transform().dvalue_dpos();
            let cap = f64::from(cap_half_width) * dx_per_point.abs();

            for (idx, series) in figure.series.iter().enumerate() {
                Self::draw_series(plot_ui, series, Self::get_series_color(idx), cap);
            }
        });
    }

    /// Whether the series is drawn as a polyline through its points.
    pub fn connects_points(mark: Mark) -> bool {
        matches!(mark, Mark::Line | Mark::LineWithErrors)
    }

    /// Dash markers and error bars of a series, with their stroke widths.
    /// Points whose value or error is not finite get no dash or bar.
    pub fn marker_segments(series: &Series, cap: f64) -> Vec<(Segment, f32)> {
        let mut segments = Vec::new();

        for point in series.points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            if series.mark == Mark::PointWithError {
                segments.push((Self::dash_segment(point, cap), DASH_WIDTH));
            }
            if series.mark.has_error_bars() && point.err.is_finite() {
                segments.extend(
                    Self::error_bar_segments(point, cap)
                        .into_iter()
                        .map(|segment| (segment, LINE_WIDTH)),
                );
            }
        }

        segments
    }

    fn draw_series(plot_ui: &mut PlotUi, series: &Series, color: Color32, cap: f64) {
        if Self::connects_points(series.mark) {
            let points: PlotPoints = series.points.iter().map(|p| [p.x, p.y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(color)
                    .width(LINE_WIDTH)
                    .name(&series.name),
            );
        }

        for (segment, width) in Self::marker_segments(series, cap) {
            Self::draw_segment(plot_ui, segment, color, width, &series.name);
        }
    }

    /// Segments share the series name so the legend toggles them together.
    fn draw_segment(plot_ui: &mut PlotUi, segment: Segment, color: Color32, width: f32, name: &str) {
        plot_ui.line(
            Line::new(PlotPoints::from_iter(segment.iter().copied()))
                .color(color)
                .width(width)
                .name(name),
        );
    }
}
