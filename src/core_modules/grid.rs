// THEORY:
// The grid module owns the two 2D rasters the pipeline moves between: the
// `PixelGrid` of source colors and the `GrayGrid` of output intensities. Both
// are flattened row-major vectors addressed by (x, y) in [0,width)×[0,height).
//
// The grids are deliberately passive. Neighborhood logic lives in
// `neighborhood`, contrast math in `contrast`; the grids only convert decoded
// images into pixels, answer bounds queries and store values.

pub mod grid {
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::error::{ContrastError, Result};

    pub type Gray = u8;

    /// Source raster of RGBA pixels.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PixelGrid {
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    }

    impl PixelGrid {
        /// A `width`×`height` grid where every pixel is `fill`.
        pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
            Self {
                width,
                height,
                pixels: vec![fill; width as usize * height as usize],
            }
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        pub fn len(&self) -> usize {
            self.pixels.len()
        }

        pub fn is_empty(&self) -> bool {
            self.pixels.is_empty()
        }

        /// Signed bounds check, so callers can test offsets left of / above the origin.
        pub fn contains(&self, x: i64, y: i64) -> bool {
            x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
        }

        pub fn get(&self, x: u32, y: u32) -> Option<&Pixel> {
            if x < self.width && y < self.height {
                self.pixels.get(self.offset(x, y))
            } else {
                None
            }
        }

        /// Like `get`, but reports the miss as an error.
        pub fn pixel(&self, x: u32, y: u32) -> Result<&Pixel> {
            self.get(x, y).ok_or(ContrastError::PointOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }

        pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
            self.pixel(x, y)?;
            let index = self.offset(x, y);
            self.pixels[index] = pixel;
            Ok(())
        }

        #[inline]
        fn offset(&self, x: u32, y: u32) -> usize {
            y as usize * self.width as usize + x as usize
        }
    }

    /// Unchecked access for coordinates already known to be in bounds.
    /// Panics like slice indexing otherwise.
    impl std::ops::Index<(u32, u32)> for PixelGrid {
        type Output = Pixel;

        fn index(&self, (x, y): (u32, u32)) -> &Pixel {
            assert!(
                x < self.width && y < self.height,
                "({x}, {y}) outside {}x{} grid",
                self.width,
                self.height
            );
            &self.pixels[self.offset(x, y)]
        }
    }

    impl From<&image::RgbaImage> for PixelGrid {
        fn from(image: &image::RgbaImage) -> Self {
            Self {
                width: image.width(),
                height: image.height(),
                pixels: image.pixels().map(|rgba| Pixel::from(*rgba)).collect(),
            }
        }
    }

    /// Output raster of 8-bit gray intensities, zero-initialised.
    #[derive(Debug, Clone, PartialEq)]
    pub struct GrayGrid {
        width: u32,
        height: u32,
        values: Vec<Gray>,
    }

    impl GrayGrid {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                values: vec![0; width as usize * height as usize],
            }
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        pub fn get(&self, x: u32, y: u32) -> Option<Gray> {
            if x < self.width && y < self.height {
                Some(self.values[y as usize * self.width as usize + x as usize])
            } else {
                None
            }
        }

        pub fn set(&mut self, x: u32, y: u32, value: Gray) -> Result<()> {
            if x >= self.width || y >= self.height {
                return Err(ContrastError::PointOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
            self.values[y as usize * self.width as usize + x as usize] = value;
            Ok(())
        }

        /// Row-major intensities, one byte per pixel.
        pub fn as_bytes(&self) -> &[Gray] {
            &self.values
        }
    }
}
