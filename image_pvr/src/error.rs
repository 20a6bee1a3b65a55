use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvrError {
    #[error("PVR header is corrupt or invalid")]
    CorruptHeader(#[from] HeaderError),

    #[error("Image type currently not supported ({0})")]
    UnsupportedPixelType(&'static str),

    #[error("unknown compression format {0:?}, expected PVRTC2, PVRTC4, or ETC1")]
    UnknownFormat(String),

    #[error("{dimension} needs to be a power of 2 but found {value}")]
    InvalidDimensions { dimension: Dimension, value: u32 },

    #[error("row stride {stride} is not supported for an image with width {width}")]
    UnsupportedStride { width: u32, stride: u32 },

    #[error("texture codec failed: {0}")]
    CodecFailure(String),

    #[error("loading was aborted")]
    LoadAborted,

    #[error("error reading or writing PVR data")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("expected the header to have at least {expected} bytes but found {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    #[error("expected magic 0x21525650 (PVR!) but found 0x{0:08x}")]
    InvalidMagic(u32),
}

/// The dimension reported by [PvrError::InvalidDimensions].
#[derive(Debug, PartialEq, Eq, Clone, Copy, strum::Display)]
pub enum Dimension {
    Width,
    Height,
}
