use crate::{Header, PixelType};

/// A PVR texture with a [Header] and the data for its single surface.
///
/// The data is compressed or uncompressed depending on the header's pixel type.
/// Uncompressed textures can borrow the pixels with `T = &[u8]` to avoid copies.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Texture<T> {
    pub header: Header,
    /// The bytes following the header without additional padding.
    pub data: T,
}

impl<T: AsRef<[u8]>> Texture<T> {
    pub fn new(header: Header, data: T) -> Self {
        Self { header, data }
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// The pixel type or [None] if the header's code is not recognized.
    pub fn pixel_type(&self) -> Option<PixelType> {
        self.header.pixel_type()
    }

    pub fn has_alpha(&self) -> bool {
        self.header.has_alpha()
    }

    pub fn is_flipped(&self) -> bool {
        self.header.is_flipped()
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// A texture borrowing the data of `self`.
    pub fn as_slice(&self) -> Texture<&[u8]> {
        Texture {
            header: self.header,
            data: self.data.as_ref(),
        }
    }

    /// The header followed by the data as a single file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let data = self.data.as_ref();
        let mut bytes = Vec::with_capacity(Header::SIZE + data.len());
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.extend_from_slice(data);
        bytes
    }
}

impl<'a> Texture<&'a [u8]> {
    /// Split a complete file into its header and the remaining bytes.
    ///
    /// The data is not validated against the header.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, crate::PvrError> {
        let header = Header::parse(bytes)?;
        Ok(Self {
            header,
            data: &bytes[Header::SIZE..],
        })
    }
}
