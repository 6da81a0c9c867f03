// THEORY:
// The `pipeline` module is the top-level API of the crate. It wires the core
// modules into the single pass the tool performs:
//
//   decode → for every pixel: average_contrast_ratio → to_gray → store → encode
//
// Pixels are independent, so visiting order has no effect on the output; the
// loop walks column by column. The first failing pixel aborts the whole run and
// nothing is written, since a half-computed contrast map is worse than none.
//
// `ContrastPipeline` owns the `ContrastEngine` and with it both luminance
// caches, so caches stay warm across every pixel of a run and a new pipeline
// always starts cold.

use crate::core_modules::contrast::contrast::ContrastEngine;
use crate::core_modules::gray_mapper::gray_mapper::to_gray;
use crate::core_modules::grid::grid::{GrayGrid, PixelGrid};
use crate::core_modules::neighborhood::neighborhood::Radius;
use crate::core_modules::utils::image_helper::image_helper::{load_pixel_grid, save_gray};
use crate::error::{ContrastError, Result};
use log::{debug, info, trace};
use std::path::{Path, PathBuf};

// Re-export key data structures for the public API.
pub use crate::core_modules::contrast::contrast::ContrastRatio;
pub use crate::core_modules::grid::grid::Gray;
pub use crate::core_modules::pixel::pixel::Pixel;

pub const DEFAULT_RADIUS: Radius = 1;
pub const DEFAULT_OUTPUT_PREFIX: &str = "contrast-ratio-";

/// Configuration for the ContrastPipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastConfig {
    /// Half-width of the square neighborhood compared against each pixel.
    pub radius: Radius,
    /// Prepended to the input file name to name the output file.
    pub output_prefix: String,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }
}

/// Sibling of `input` whose file name carries `prefix`.
pub fn derive_output_path(input: &Path, prefix: &str) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| ContrastError::InvalidPath {
        path: input.to_path_buf(),
    })?;
    let mut output_name = std::ffi::OsString::from(prefix);
    output_name.push(file_name);
    Ok(input.with_file_name(output_name))
}

pub struct ContrastPipeline {
    config: ContrastConfig,
    engine: ContrastEngine,
}

impl ContrastPipeline {
    pub fn new(config: ContrastConfig) -> Self {
        Self {
            config,
            engine: ContrastEngine::new(),
        }
    }

    pub fn engine(&self) -> &ContrastEngine {
        &self.engine
    }

    /// Maps every pixel of `grid` to its local-contrast gray value.
    ///
    /// `progress` receives the completed fraction in [0, 1] after each column.
    pub fn process(
        &mut self,
        grid: &PixelGrid,
        mut progress: Option<&mut dyn FnMut(f32)>,
    ) -> Result<GrayGrid> {
        info!(
            "computing contrast map for {}x{} grid (radius {})",
            grid.width(),
            grid.height(),
            self.config.radius
        );
        let (width, height) = (grid.width(), grid.height());
        let mut output = GrayGrid::new(width, height);

        for x in 0..width {
            for y in 0..height {
                let ratio = self
                    .engine
                    .average_contrast_ratio(self.config.radius, grid, (x, y))?;
                output.set(x, y, to_gray(ratio)?)?;
            }
            trace!("column {}/{} done", x + 1, width);
            if let Some(ref mut cb) = progress {
                cb((x + 1) as f32 / width as f32);
            }
        }

        debug!(
            "cache sizes: {} colors, {} channel samples",
            self.engine.calculator().cached_len(),
            self.engine.calculator().engine().cached_len()
        );
        Ok(output)
    }

    /// Loads `input`, processes it and writes the result next to it.
    /// Returns the path written.
    pub fn run(
        &mut self,
        input: &Path,
        progress: Option<&mut dyn FnMut(f32)>,
    ) -> Result<PathBuf> {
        let output_path = derive_output_path(input, &self.config.output_prefix)?;
        let grid = load_pixel_grid(input)?;
        let gray = self.process(&grid, progress)?;
        save_gray(&output_path, &gray)?;
        info!(
            "contrast map of {} pixels written to {}",
            grid.len(),
            output_path.display()
        );
        Ok(output_path)
    }
}
