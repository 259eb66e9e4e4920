//! Figure Viewer
//! Shows every figure in its own movable, closable window inside the main
//! viewport, sized from the figure's inch size.

use crate::charts::{ChartPlotter, Figure};
use crate::config::AppConfig;
use egui::{pos2, Pos2, RichText};
use log::{debug, warn};

/// Layout of the floating figure windows
const MARGIN: f32 = 16.0;
const COLUMN_GAP: f32 = 24.0;
const CASCADE_STEP: f32 = 150.0;
/// Horizontal space egui adds around a window's content
const WINDOW_FRAME: f32 = 16.0;
/// Narrow figures still need room for their legend
const MIN_PLOT_WIDTH: f32 = 220.0;

struct FigureWindow {
    figure: Figure,
    /// Plot size in points
    size: [f32; 2],
    position: Pos2,
    open: bool,
}

pub struct FigureViewer {
    windows: Vec<FigureWindow>,
    cap_half_width: f32,
}

impl FigureViewer {
    /// Narrow figures go in a left column, wide ones cascade to their right.
    pub fn new(figures: Vec<Figure>, config: &AppConfig) -> Self {
        let sizes: Vec<[f32; 2]> = figures
            .iter()
            .map(|figure| {
                let [w, h] = figure.size.to_pixels(config.dpi);
                [w.max(MIN_PLOT_WIDTH), h]
            })
            .collect();

        let narrow_column_width = figures
            .iter()
            .zip(&sizes)
            .filter(|(figure, _)| figure.size.width_in < figure.size.height_in)
            .map(|(_, size)| size[0])
            .fold(0.0_f32, f32::max);

        let mut narrow_y = MARGIN;
        let mut wide_y = MARGIN;
        let wide_x = if narrow_column_width > 0.0 {
            MARGIN + narrow_column_width + COLUMN_GAP
        } else {
            MARGIN
        };

        let windows = figures
            .into_iter()
            .zip(sizes)
            .map(|(figure, size)| {
                let position = if figure.size.width_in < figure.size.height_in {
                    let p = pos2(MARGIN, narrow_y);
                    narrow_y += size[1] + CASCADE_STEP;
                    p
                } else {
                    let p = pos2(wide_x, wide_y);
                    wide_y += CASCADE_STEP;
                    p
                };
                FigureWindow {
                    figure,
                    size,
                    position,
                    open: true,
                }
            })
            .collect::<Vec<FigureWindow>>();

        let right_edge = windows
            .iter()
            .map(|w| w.position.x + w.size[0] + WINDOW_FRAME + MARGIN)
            .fold(0.0_f32, f32::max);
        if right_edge > config.window_size[0] {
            warn!(
                "Figures need {} points but the viewer is {} wide",
                right_edge, config.window_size[0]
            );
        }

        Self {
            windows,
            cap_half_width: config.cap_half_width,
        }
    }

    /// Number of figure windows still open
    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|w| w.open).count()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.windows.iter().map(|w| w.figure.title.as_str()).collect()
    }

    /// Draw all open figure windows
    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.open_count() == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Figures").size(20.0));
            });
            return;
        }

        let cap_half_width = self.cap_half_width;
        for (idx, window) in self.windows.iter_mut().enumerate() {
            let FigureWindow {
                figure,
                size,
                position,
                open,
            } = window;
            if !*open {
                continue;
            }

            egui::Window::new(figure.title.as_str())
                .id(egui::Id::new(("figure", idx)))
                .open(&mut *open)
                .default_pos(*position)
                .resizable(false)
                .collapsible(false)
                .show(ctx, |ui| {
                    ChartPlotter::draw_figure(ui, figure, *size, cap_half_width);
                });

            if !*open {
                debug!("Closed figure \"{}\"", figure.title);
            }
        }
    }
}
