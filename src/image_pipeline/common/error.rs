use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmpError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Invalid BMP header: {0}")]
    FormatError(String),

    #[error("Unsupported BMP format: {0}")]
    UnsupportedFormat(String),

    #[error("Truncated pixel data: expected {expected} bytes at offset {offset}, found {actual}")]
    TruncatedData {
        offset: u64,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Crop region at ({x}, {y}) of size {width}x{height} exceeds image bounds {image_width}x{image_height}"
    )]
    BoundsError {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        image_width: usize,
        image_height: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid image dimensions: width={width}, height={height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Failed to encode BMP image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BmpError>;
