use std::fmt;

/// Failure while producing or writing a raster.
#[derive(Debug)]
pub enum RasterError {
    /// Canvas has zero width or height.
    EmptyCanvas,
    Image(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyCanvas => f.write_str("canvas has zero area"),
            RasterError::Image(e) => write!(f, "image encoding failed: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::EmptyCanvas => None,
            RasterError::Image(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Image(e)
    }
}
