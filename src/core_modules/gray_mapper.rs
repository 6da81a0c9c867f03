// THEORY:
// Maps a contrast ratio onto the 8-bit gray ramp of the output image. The ratio
// is rescaled to [0, 1] and pushed through a fourth-root curve, which spends most
// of the gray levels on the low ratios where readability actually changes.
//
// The mapper validates instead of clamping. A ratio outside [1, 21] can only come
// from a defect upstream, and a clamped value would hide it inside a plausible
// looking pixel.

pub mod gray_mapper {
    use crate::core_modules::contrast::contrast::{
        ContrastRatio, MAX_CONTRAST_RATIO, MIN_CONTRAST_RATIO,
    };
    use crate::core_modules::grid::grid::Gray;
    use crate::error::{ContrastError, Result};

    const CURVE_EXPONENT: f64 = 1.0 / 4.0;

    /// `floor(((ratio - 1) / 20)^(1/4) * 255)`.
    pub fn to_gray(ratio: ContrastRatio) -> Result<Gray> {
        // `contains` is false for NaN as well.
        if !(MIN_CONTRAST_RATIO..=MAX_CONTRAST_RATIO).contains(&ratio) {
            return Err(ContrastError::RatioOutOfRange { ratio });
        }
        let span = MAX_CONTRAST_RATIO - MIN_CONTRAST_RATIO;
        let scaled = ((ratio - MIN_CONTRAST_RATIO) / span).powf(CURVE_EXPONENT);
        Ok((scaled * Gray::MAX as f64) as Gray)
    }
}
