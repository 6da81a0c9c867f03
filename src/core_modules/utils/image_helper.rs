pub mod image_helper {
    use crate::core_modules::grid::grid::{GrayGrid, PixelGrid};
    use crate::error::Result;
    use image::{ExtendedColorType, ImageEncoder, ImageReader};
    use log::info;
    use std::path::Path;

    /// Decodes any format the `image` crate understands into an RGBA grid.
    /// The decoder is chosen from the file contents, not its name.
    pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let rgba = decoded.to_rgba8();
        info!(
            "loaded {} ({}x{}, {:?})",
            path.display(),
            rgba.width(),
            rgba.height(),
            decoded.color()
        );
        Ok(PixelGrid::from(&rgba))
    }

    /// Writes the grid as a single-channel 8-bit PNG, whatever `path` is named.
    pub fn save_gray(path: &Path, gray: &GrayGrid) -> Result<()> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(std::io::BufWriter::new(output));
        encoder.write_image(
            gray.as_bytes(),
            gray.width(),
            gray.height(),
            ExtendedColorType::L8,
        )?;

        info!("wrote {} ({}x{})", path.display(), gray.width(), gray.height());
        Ok(())
    }
}
