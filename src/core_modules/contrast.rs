// THEORY:
// The `ContrastEngine` is the comparative layer of the pipeline. A single color
// has no contrast on its own; the engine only ever answers questions about two
// colors, or about a pixel and the averaged ring around it.
//
// It owns a `RelativeLuminanceCalculator` (and through it the channel cache),
// which is why its methods take `&mut self`: every comparison may warm a cache.
// Two lenses are provided:
// - `contrast_ratio`: the WCAG ratio between two colors.
// - `average_contrast_ratio`: the ratio between a pixel and the truncated mean
//   color of its in-bounds neighborhood. An empty neighborhood compares the
//   pixel with itself and yields exactly 1.

pub mod contrast {
    use crate::core_modules::grid::grid::PixelGrid;
    use crate::core_modules::neighborhood::neighborhood::{Neighborhood, Point, Radius};
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::core_modules::relative_luminance::relative_luminance::RelativeLuminanceCalculator;
    use crate::error::Result;

    pub type ContrastRatio = f64;

    pub const MIN_CONTRAST_RATIO: ContrastRatio = 1.0;
    pub const MAX_CONTRAST_RATIO: ContrastRatio = 21.0;
    /// Flare term added to both luminances.
    const FLARE: f64 = 0.05;

    #[derive(Debug, Default, Clone)]
    pub struct ContrastEngine {
        calculator: RelativeLuminanceCalculator,
    }

    impl ContrastEngine {
        pub fn new() -> Self {
            Self::default()
        }

        /// Symmetric WCAG contrast ratio, in [1, 21].
        pub fn contrast_ratio(&mut self, first: &Pixel, second: &Pixel) -> ContrastRatio {
            let l1 = self.calculator.relative_luminance(first);
            let l2 = self.calculator.relative_luminance(second);
            let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
            (lighter + FLARE) / (darker + FLARE)
        }

        /// Contrast between the pixel at `point` and the average of its ring.
        pub fn average_contrast_ratio(
            &mut self,
            radius: Radius,
            grid: &PixelGrid,
            point: Point,
        ) -> Result<ContrastRatio> {
            let center = *grid.pixel(point.0, point.1)?;
            let ring = Neighborhood::new(grid, point, radius);
            match ring.average_pixel(grid) {
                Some(average) => Ok(self.contrast_ratio(&center, &average)),
                None => Ok(MIN_CONTRAST_RATIO),
            }
        }

        pub fn calculator(&self) -> &RelativeLuminanceCalculator {
            &self.calculator
        }
    }
}
