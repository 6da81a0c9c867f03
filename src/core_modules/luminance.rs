// THEORY:
// The `LuminanceEngine` converts one gamma-encoded channel sample into its WCAG
// linear-light contribution. It is the bottom of the contrast stack and the only
// place the sRGB transfer curve lives.
//
// The conversion is pure, so its results are memoized in a cache owned by the
// engine. Samples come from 8-bit sources, which bounds the key space to 256
// entries in practice; the cache is therefore unbounded and never evicted.
// Keys are the exact bit pattern of the `f64` sample, so two samples share an
// entry only if they are bit-identical.

pub mod luminance {
    use std::collections::HashMap;

    pub type Sample = f64;
    pub type LinearLuminance = f64;

    /// WCAG 2.0 threshold between the linear toe and the power segment.
    pub const LINEAR_THRESHOLD: Sample = 0.03928;
    const LINEAR_SLOPE: f64 = 12.92;
    const GAMMA_OFFSET: f64 = 0.055;
    const GAMMA_SCALE: f64 = 1.055;
    const GAMMA_EXPONENT: f64 = 2.4;

    /// Memoizing sRGB → linear converter.
    #[derive(Debug, Default, Clone)]
    pub struct LuminanceEngine {
        cache: HashMap<u64, LinearLuminance>,
    }

    impl LuminanceEngine {
        pub fn new() -> Self {
            Self::default()
        }

        /// Linearized contribution of `sample`. Out-of-range input is not
        /// validated; it runs through the same formula.
        pub fn luminance(&mut self, sample: Sample) -> LinearLuminance {
            *self
                .cache
                .entry(sample.to_bits())
                .or_insert_with(|| Self::linearize(sample))
        }

        /// Cached value for `sample`, if it has been computed before.
        pub fn cached(&self, sample: Sample) -> Option<LinearLuminance> {
            self.cache.get(&sample.to_bits()).copied()
        }

        pub fn cached_len(&self) -> usize {
            self.cache.len()
        }

        #[inline]
        fn linearize(sample: Sample) -> LinearLuminance {
            if sample <= LINEAR_THRESHOLD {
                sample / LINEAR_SLOPE
            } else {
                ((sample + GAMMA_OFFSET) / GAMMA_SCALE).powf(GAMMA_EXPONENT)
            }
        }
    }
}
