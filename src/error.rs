//! Error types for the contrast_visualizer library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for contrast_visualizer operations
pub type Result<T> = std::result::Result<T, ContrastError>;

/// Everything that can stop a contrast run.
///
/// All variants are terminal: the pipeline aborts on the first one and never
/// writes a partial output image.
#[derive(Error, Debug)]
pub enum ContrastError {
    /// A contrast ratio fell outside the WCAG range [1, 21].
    #[error("Contrast ratio {ratio} is outside the range [1, 21]")]
    RatioOutOfRange { ratio: f64 },

    /// A coordinate addressed a pixel outside the grid.
    #[error("Point ({x}, {y}) is outside the {width}x{height} grid")]
    PointOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The input path has no file name to derive an output path from.
    #[error("Cannot derive an output path from {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// Image decoding or encoding failed
    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// File could not be opened or created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_ratio() {
        let err = ContrastError::RatioOutOfRange { ratio: 21.5 };
        assert_eq!(err.to_string(), "Contrast ratio 21.5 is outside the range [1, 21]");
    }

    #[test]
    fn io_errors_convert_from_std() {
        let err: ContrastError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ContrastError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn invalid_path_names_the_path() {
        let err = ContrastError::InvalidPath { path: PathBuf::from("/") };
        assert_eq!(err.to_string(), "Cannot derive an output path from /");
    }
}
