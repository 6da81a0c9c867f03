// THEORY:
// The `RelativeLuminanceCalculator` turns a whole color into the single WCAG
// relative luminance number the contrast formula needs. It owns the
// `LuminanceEngine` it delegates channel linearization to, so one calculator
// carries both caches and a fresh calculator starts fully cold.
//
// Results are memoized per exact RGB triple. The key ignores alpha because alpha
// does not appear in the weighted sum. With 8-bit channels the key space is at
// most 2^24 colors; the cache is unbounded for the lifetime of the calculator.

pub mod relative_luminance {
    use crate::core_modules::luminance::luminance::LuminanceEngine;
    use crate::core_modules::pixel::pixel::{Pixel, RgbKey};
    use std::collections::HashMap;

    pub type RelativeLuminance = f64;

    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;

    #[derive(Debug, Default, Clone)]
    pub struct RelativeLuminanceCalculator {
        engine: LuminanceEngine,
        cache: HashMap<RgbKey, RelativeLuminance>,
    }

    impl RelativeLuminanceCalculator {
        pub fn new() -> Self {
            Self::default()
        }

        /// WCAG relative luminance of `color`, in [0, 1].
        pub fn relative_luminance(&mut self, color: &Pixel) -> RelativeLuminance {
            let key = color.rgb_key();
            if let Some(&cached) = self.cache.get(&key) {
                return cached;
            }

            let (red, green, blue) = color.normalized();
            let red = self.engine.luminance(red);
            let green = self.engine.luminance(green);
            let blue = self.engine.luminance(blue);
            let value = RED_WEIGHT * red + GREEN_WEIGHT * green + BLUE_WEIGHT * blue;

            self.cache.insert(key, value);
            value
        }

        pub fn cached(&self, color: &Pixel) -> Option<RelativeLuminance> {
            self.cache.get(&color.rgb_key()).copied()
        }

        pub fn cached_len(&self) -> usize {
            self.cache.len()
        }

        pub fn engine(&self) -> &LuminanceEngine {
            &self.engine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::relative_luminance::*;
    use crate::core_modules::pixel::pixel::Pixel;
    use approx::assert_relative_eq;

    #[test]
    fn black_and_white_are_the_extremes() {
        let mut calculator = RelativeLuminanceCalculator::new();
        assert_eq!(calculator.relative_luminance(&Pixel::BLACK), 0.0);
        assert_eq!(calculator.relative_luminance(&Pixel::WHITE), 1.0);
    }

    #[test]
    fn primaries_take_their_weight() {
        let mut calculator = RelativeLuminanceCalculator::new();
        assert_eq!(calculator.relative_luminance(&Pixel::rgb(255, 0, 0)), RED_WEIGHT);
        assert_eq!(calculator.relative_luminance(&Pixel::rgb(0, 255, 0)), GREEN_WEIGHT);
        assert_eq!(calculator.relative_luminance(&Pixel::rgb(0, 0, 255)), BLUE_WEIGHT);
    }

    #[test]
    fn mid_gray() {
        let mut calculator = RelativeLuminanceCalculator::new();
        assert_relative_eq!(
            calculator.relative_luminance(&Pixel::rgb(128, 128, 128)),
            0.2158605,
            epsilon = 1e-6
        );
    }

    #[test]
    fn monotonic_in_each_channel() {
        let mut calculator = RelativeLuminanceCalculator::new();
        for fixed in [0u8, 77, 200] {
            let mut previous = [0.0f64; 3];
            for value in 0..=255u8 {
                let current = [
                    calculator.relative_luminance(&Pixel::rgb(value, fixed, fixed)),
                    calculator.relative_luminance(&Pixel::rgb(fixed, value, fixed)),
                    calculator.relative_luminance(&Pixel::rgb(fixed, fixed, value)),
                ];
                if value > 0 {
                    for channel in 0..3 {
                        assert!(
                            current[channel] >= previous[channel],
                            "channel {channel} decreased at {value} (others {fixed})"
                        );
                    }
                }
                previous = current;
            }
        }
    }

    #[test]
    fn repeated_lookups_are_bit_identical_and_cached() {
        let mut calculator = RelativeLuminanceCalculator::new();
        let color = Pixel::rgb(12, 200, 99);
        assert_eq!(calculator.cached(&color), None);

        let first = calculator.relative_luminance(&color);
        let second = calculator.relative_luminance(&color);
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(calculator.cached(&color), Some(first));
        assert_eq!(calculator.cached_len(), 1);
        assert_eq!(calculator.engine().cached_len(), 3);
    }

    #[test]
    fn alpha_shares_the_cache_entry() {
        let mut calculator = RelativeLuminanceCalculator::new();
        let opaque = calculator.relative_luminance(&Pixel::new(40, 50, 60, 255));
        let clear = calculator.relative_luminance(&Pixel::new(40, 50, 60, 0));
        assert_eq!(opaque.to_bits(), clear.to_bits());
        assert_eq!(calculator.cached_len(), 1);
    }
}
