use crate::{PixelType, PvrError};

/// The compressed formats that can be requested when saving.
///
/// The names used for parsing match the option values for the `format` save option.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompressedFormat {
    /// PVRTC with 2 bits per pixel.
    #[strum(serialize = "PVRTC2")]
    Pvrtc2,
    /// PVRTC with 4 bits per pixel.
    #[strum(serialize = "PVRTC4")]
    Pvrtc4,
    /// ETC1 RGB with 4 bits per pixel.
    #[default]
    #[strum(serialize = "ETC1")]
    Etc1,
}

impl CompressedFormat {
    /// PVRTC hardware only supports power of two dimensions.
    pub fn requires_power_of_two(&self) -> bool {
        match self {
            CompressedFormat::Pvrtc2 => true,
            CompressedFormat::Pvrtc4 => true,
            CompressedFormat::Etc1 => false,
        }
    }

    /// The pixel type stored in the header of files with this format.
    pub fn pixel_type(&self) -> PixelType {
        match self {
            CompressedFormat::Pvrtc2 => PixelType::OglPvrtc2,
            CompressedFormat::Pvrtc4 => PixelType::OglPvrtc4,
            CompressedFormat::Etc1 => PixelType::EtcRgb4bpp,
        }
    }

    pub fn bits_per_pixel(&self) -> u32 {
        match self {
            CompressedFormat::Pvrtc2 => 2,
            CompressedFormat::Pvrtc4 => 4,
            CompressedFormat::Etc1 => 4,
        }
    }

    /// The option value for this format like `"PVRTC4"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The requestable format for a compressed `pixel_type` if any.
    pub fn from_pixel_type(pixel_type: PixelType) -> Option<Self> {
        match pixel_type {
            PixelType::MglPvrtc2 | PixelType::OglPvrtc2 => Some(CompressedFormat::Pvrtc2),
            PixelType::MglPvrtc4 | PixelType::OglPvrtc4 => Some(CompressedFormat::Pvrtc4),
            PixelType::EtcRgb4bpp => Some(CompressedFormat::Etc1),
            _ => None,
        }
    }
}

/// Parse a requested compression format like `"PVRTC2"`, `"PVRTC4"`, or `"ETC1"`.
///
/// Names are case sensitive.
/// Callers that want the default can use `unwrap_or_default()`.
pub fn parse_requested_format(name: &str) -> Result<CompressedFormat, PvrError> {
    name.parse()
        .map_err(|_| PvrError::UnknownFormat(name.to_string()))
}

/// A human readable name for the standard working formats used in error messages.
pub fn standard_type_name(pixel_type: PixelType) -> &'static str {
    match pixel_type {
        PixelType::INT8_STANDARD => "R8G8B8A8",
        PixelType::INT16_STANDARD => "A16B16G16R16",
        PixelType::INT32_STANDARD => "R32G32B32A32",
        PixelType::FLOAT_STANDARD => "R32G32B32A32 (float)",
        _ => "Other",
    }
}
