use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

use crate::{HeaderError, PixelType, PvrError};

/// The `magic` value identifying a PVR file, the characters `PVR!`.
pub const PVR_MAGIC: u32 = u32::from_le_bytes(*b"PVR!");

/// The size in bytes of the legacy version 1 header.
/// This is only used to identify old files.
pub const V1_HEADER_SIZE: u32 = 44;

bitflags! {
    /// The texture flags stored in bits 8 to 16 of [Header::flags].
    ///
    /// The low byte of the flags stores the pixel type instead.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u32 {
        /// The texture has mip map levels.
        const MIPMAP = 1 << 8;
        /// The data is twiddled.
        const TWIDDLE = 1 << 9;
        /// The texture stores normals for a bump map.
        const BUMPMAP = 1 << 10;
        /// The texture is bordered for tiling.
        const TILING = 1 << 11;
        /// The texture is a cube map.
        const CUBEMAP = 1 << 12;
        /// The mip levels are false colored.
        const FALSE_MIP_COLOR = 1 << 13;
        /// The texture is a volume texture.
        const VOLUME = 1 << 14;
        /// The texture has transparency information.
        const ALPHA = 1 << 15;
        /// The rows of the texture are stored bottom to top.
        const VERTICAL_FLIP = 1 << 16;
    }
}

const PIXEL_TYPE_MASK: u32 = 0xff;

/// The fixed size header at the start of every PVR file.
///
/// Fields are stored in the platform's native byte order without padding.
#[repr(C)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Pod, Zeroable)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The size of the header in bytes.
    pub header_size: u32,
    pub height: u32,
    pub width: u32,
    pub mipmap_count: u32,
    /// The [HeaderFlags] combined with the pixel type code in the low byte.
    pub flags: u32,
    /// The size of the data following the header in bytes.
    pub data_size: u32,
    pub bit_count: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    /// Should always be [PVR_MAGIC].
    pub magic: u32,
    pub surface_count: u32,
}

impl Header {
    /// The size of the serialized header in bytes.
    pub const SIZE: usize = std::mem::size_of::<Header>();

    /// Read the header from the start of `bytes`.
    ///
    /// Only the length and magic are validated.
    /// Other fields are returned as is.
    pub fn parse(bytes: &[u8]) -> Result<Self, PvrError> {
        let header_bytes = bytes
            .get(..Self::SIZE)
            .ok_or(PvrError::CorruptHeader(HeaderError::NotEnoughData {
                expected: Self::SIZE,
                actual: bytes.len(),
            }))?;

        // The input is not guaranteed to be aligned for u32.
        let header: Header = bytemuck::pod_read_unaligned(header_bytes);
        if header.magic != PVR_MAGIC {
            return Err(PvrError::CorruptHeader(HeaderError::InvalidMagic(
                header.magic,
            )));
        }

        Ok(header)
    }

    /// The serialized bytes of the header.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(bytemuck::bytes_of(self));
        bytes
    }

    /// Write the serialized header to `writer`.
    pub fn write<W: std::io::Write>(&self, writer: &mut W) -> Result<(), PvrError> {
        writer.write_all(bytemuck::bytes_of(self))?;
        Ok(())
    }

    /// A header describing a single tightly packed RGBA8 surface without mipmaps.
    pub fn uncompressed_rgba8(width: u32, height: u32) -> Self {
        Self {
            header_size: Self::SIZE as u32,
            height,
            width,
            mipmap_count: 0,
            flags: HeaderFlags::ALPHA.bits() | PixelType::INT8_STANDARD as u32,
            data_size: width.saturating_mul(height).saturating_mul(4),
            bit_count: 32,
            red_mask: 0x000000ff,
            green_mask: 0x0000ff00,
            blue_mask: 0x00ff0000,
            alpha_mask: 0xff000000,
            magic: PVR_MAGIC,
            surface_count: 1,
        }
    }

    /// The flags without the pixel type.
    pub fn header_flags(&self) -> HeaderFlags {
        HeaderFlags::from_bits_truncate(self.flags)
    }

    /// The raw pixel type code stored in the low byte of the flags.
    pub fn pixel_type_code(&self) -> u8 {
        (self.flags & PIXEL_TYPE_MASK) as u8
    }

    /// The pixel type or [None] if the code is not in the table.
    pub fn pixel_type(&self) -> Option<PixelType> {
        PixelType::from_repr(self.pixel_type_code())
    }

    /// Replace the pixel type while keeping the remaining flags.
    pub fn set_pixel_type(&mut self, pixel_type: PixelType) {
        self.flags = (self.flags & !PIXEL_TYPE_MASK) | pixel_type as u32;
    }

    pub fn has_alpha(&self) -> bool {
        self.header_flags().contains(HeaderFlags::ALPHA)
    }

    pub fn is_flipped(&self) -> bool {
        self.header_flags().contains(HeaderFlags::VERTICAL_FLIP)
    }

    /// Returns `true` if the header predates the current layout.
    pub fn is_v1(&self) -> bool {
        self.header_size == V1_HEADER_SIZE
    }
}
