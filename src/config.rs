//! Built-in application settings.
//! There is no external configuration surface; everything here is fixed at
//! compile time and only overridden by tests.

use std::path::PathBuf;

/// Input file holding one row per timing sample.
pub const SERIAL_VS_PARALLEL_CSV: &str = "serialvsparallel.csv";
/// Input file holding one row per core-count configuration.
pub const SPEEDUP_CSV: &str = "speedup.csv";

/// Pixels per inch used to turn figure sizes into window sizes.
pub const DEFAULT_DPI: f32 = 100.0;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Size in pixels at the given DPI.
    pub fn to_pixels(self, dpi: f32) -> [f32; 2] {
        [self.width_in * dpi, self.height_in * dpi]
    }
}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub serial_csv: PathBuf,
    pub speedup_csv: PathBuf,
    pub dpi: f32,
    /// Size of the average-time figure (narrow)
    pub narrow_figure: FigureSize,
    /// Size of the absolute, speedup and efficiency figures (wide)
    pub wide_figure: FigureSize,
    /// Error bar cap half-width, in screen points
    pub cap_half_width: f32,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            serial_csv: PathBuf::from(SERIAL_VS_PARALLEL_CSV),
            speedup_csv: PathBuf::from(SPEEDUP_CSV),
            dpi: DEFAULT_DPI,
            narrow_figure: FigureSize::new(1.0, 4.0),
            wide_figure: FigureSize::new(12.0, 4.0),
            cap_half_width: 3.0,
            window_size: [1520.0, 900.0],
        }
    }
}

impl AppConfig {
    /// Config reading both input files from `dir` instead of the working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            serial_csv: dir.join(SERIAL_VS_PARALLEL_CSV),
            speedup_csv: dir.join(SPEEDUP_CSV),
            ..Self::default()
        }
    }
}
