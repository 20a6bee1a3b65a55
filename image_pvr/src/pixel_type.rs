/// The pixel type codes stored in the low byte of [Header::flags](crate::Header::flags).
///
/// Only a few of these are supported by the default codec.
/// The table is kept complete so headers from other tools report a known type.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, strum::FromRepr, strum::EnumIter)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelType {
    MglArgb4444 = 0x00,
    MglArgb1555,
    MglRgb565,
    MglRgb555,
    MglRgb888,
    MglArgb8888,
    MglArgb8332,
    MglI8,
    MglAi88,
    Mgl1Bpp,
    MglVy1uy0,
    MglY1vy0u,
    MglPvrtc2,
    MglPvrtc4,

    OglRgba4444 = 0x10,
    OglRgba5551,
    OglRgba8888,
    OglRgb565,
    OglRgb555,
    OglRgb888,
    OglI8,
    OglAi88,
    OglPvrtc2,
    OglPvrtc4,
    OglBgra8888,
    OglA8,
    OglPvrtcII4,
    OglPvrtcII2,

    D3dDxt1 = 0x20,
    D3dDxt2,
    D3dDxt3,
    D3dDxt4,
    D3dDxt5,
    D3dRgb332,
    D3dAl44,
    D3dLvu655,
    D3dXlvu8888,
    D3dQwvu8888,
    D3dAbgr2101010,
    D3dArgb2101010,
    D3dAwvu2101010,
    D3dGr1616,
    D3dVu1616,
    D3dAbgr16161616,
    D3dR16f,
    D3dGr1616f,
    D3dAbgr16161616f,
    D3dR32f,
    D3dGr3232f,
    D3dAbgr32323232f,
    EtcRgb4bpp,
    EtcRgbaExplicit,
    EtcRgbaInterpolated,

    D3dA8 = 0x40,
    D3dV8u8,
    D3dL16,
    D3dL8,
    D3dAl88,
    D3dUyvy,
    D3dYuy2,

    Dx10R32G32B32A32Float = 0x50,
    Dx10R32G32B32A32Uint,
    Dx10R32G32B32A32Sint,
    Dx10R32G32B32Float,
    Dx10R32G32B32Uint,
    Dx10R32G32B32Sint,
    Dx10R16G16B16A16Float,
    Dx10R16G16B16A16Unorm,
    Dx10R16G16B16A16Uint,
    Dx10R16G16B16A16Snorm,
    Dx10R16G16B16A16Sint,
    Dx10R32G32Float,
    Dx10R32G32Uint,
    Dx10R32G32Sint,
    Dx10R10G10B10A2Unorm,
    Dx10R10G10B10A2Uint,
    Dx10R11G11B10Float,
    Dx10R8G8B8A8Unorm,
    Dx10R8G8B8A8UnormSrgb,
    Dx10R8G8B8A8Uint,
    Dx10R8G8B8A8Snorm,
    Dx10R8G8B8A8Sint,
    Dx10R16G16Float,
    Dx10R16G16Unorm,
    Dx10R16G16Uint,
    Dx10R16G16Snorm,
    Dx10R16G16Sint,
    Dx10R32Float,
    Dx10R32Uint,
    Dx10R32Sint,
    Dx10R8G8Unorm,
    Dx10R8G8Uint,
    Dx10R8G8Snorm,
    Dx10R8G8Sint,
    Dx10R16Float,
    Dx10R16Unorm,
    Dx10R16Uint,
    Dx10R16Snorm,
    Dx10R16Sint,
    Dx10R8Unorm,
    Dx10R8Uint,
    Dx10R8Snorm,
    Dx10R8Sint,
    Dx10A8Unorm,
    Dx10R1Unorm,
    Dx10R9G9B9E5SharedExp,
    Dx10R8G8B8G8Unorm,
    Dx10G8R8G8B8Unorm,
    Dx10Bc1Unorm,
    Dx10Bc1UnormSrgb,
    Dx10Bc2Unorm,
    Dx10Bc2UnormSrgb,
    Dx10Bc3Unorm,
    Dx10Bc3UnormSrgb,
    Dx10Bc4Unorm,
    Dx10Bc4Snorm,
    Dx10Bc5Unorm,
    Dx10Bc5Snorm,

    // RGB{A,X} channel ordering
    VgSrgbx8888 = 0x90,
    VgSrgba8888,
    VgSrgba8888Pre,
    VgSrgb565,
    VgSrgba5551,
    VgSrgba4444,
    VgSl8,
    VgLrgbx8888,
    VgLrgba8888,
    VgLrgba8888Pre,
    VgLl8,
    VgA8,
    VgBw1,

    // {A,X}RGB channel ordering
    VgSxrgb8888,
    VgSargb8888,
    VgSargb8888Pre,
    VgSargb1555,
    VgSargb4444,
    VgLxrgb8888,
    VgLargb8888,
    VgLargb8888Pre,

    // BGR{A,X} channel ordering
    VgSbgrx8888,
    VgSbgra8888,
    VgSbgra8888Pre,
    VgSbgr565,
    VgSbgra5551,
    VgSbgra4444,
    VgLbgrx8888,
    VgLbgra8888,
    VgLbgra8888Pre,

    // {A,X}BGR channel ordering
    VgSxbgr8888,
    VgSabgr8888,
    VgSabgr8888Pre,
    VgSabgr1555,
    VgSabgr4444,
    VgLxbgr8888,
    VgLabgr8888,
    VgLabgr8888Pre,
}

impl PixelType {
    /// The working format for 8-bit RGBA data.
    pub const INT8_STANDARD: PixelType = PixelType::Dx10R8G8B8A8Unorm;
    /// The working format for 16-bit RGBA data.
    pub const INT16_STANDARD: PixelType = PixelType::Dx10R16G16B16A16Unorm;
    /// The working format for 32-bit integer RGBA data.
    pub const INT32_STANDARD: PixelType = PixelType::Dx10R32G32B32A32Uint;
    /// The working format for 32-bit floating point RGBA data.
    pub const FLOAT_STANDARD: PixelType = PixelType::Dx10R32G32B32A32Float;

    /// The minimum width and height in pixels of a surface with this type.
    ///
    /// Smaller surfaces are still stored using a full tile.
    pub fn min_dimensions(&self) -> (u32, u32) {
        match self {
            PixelType::MglPvrtc2 | PixelType::OglPvrtc2 | PixelType::OglPvrtcII2 => (16, 8),
            PixelType::MglPvrtc4 | PixelType::OglPvrtc4 | PixelType::OglPvrtcII4 => (8, 8),
            PixelType::EtcRgb4bpp
            | PixelType::EtcRgbaExplicit
            | PixelType::EtcRgbaInterpolated => (4, 4),
            PixelType::D3dDxt1
            | PixelType::D3dDxt2
            | PixelType::D3dDxt3
            | PixelType::D3dDxt4
            | PixelType::D3dDxt5
            | PixelType::Dx10Bc1Unorm
            | PixelType::Dx10Bc1UnormSrgb
            | PixelType::Dx10Bc2Unorm
            | PixelType::Dx10Bc2UnormSrgb
            | PixelType::Dx10Bc3Unorm
            | PixelType::Dx10Bc3UnormSrgb
            | PixelType::Dx10Bc4Unorm
            | PixelType::Dx10Bc4Snorm
            | PixelType::Dx10Bc5Unorm
            | PixelType::Dx10Bc5Snorm => (4, 4),
            _ => (1, 1),
        }
    }

    /// Returns `true` for PVRTC encoded data.
    pub fn is_pvrtc(&self) -> bool {
        matches!(
            self,
            PixelType::MglPvrtc2
                | PixelType::MglPvrtc4
                | PixelType::OglPvrtc2
                | PixelType::OglPvrtc4
                | PixelType::OglPvrtcII2
                | PixelType::OglPvrtcII4
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn group_start_codes() {
        assert_eq!(0x0c, PixelType::MglPvrtc2 as u8);
        assert_eq!(0x0d, PixelType::MglPvrtc4 as u8);
        assert_eq!(0x18, PixelType::OglPvrtc2 as u8);
        assert_eq!(0x19, PixelType::OglPvrtc4 as u8);
        assert_eq!(0x36, PixelType::EtcRgb4bpp as u8);
        assert_eq!(0x46, PixelType::D3dYuy2 as u8);
        assert_eq!(0x89, PixelType::Dx10Bc5Snorm as u8);
        assert_eq!(0x90, PixelType::VgSrgbx8888 as u8);
        assert_eq!(0xb5, PixelType::VgLabgr8888Pre as u8);
    }

    #[test]
    fn standard_type_codes() {
        assert_eq!(0x61, PixelType::INT8_STANDARD as u8);
        assert_eq!(0x57, PixelType::INT16_STANDARD as u8);
        assert_eq!(0x51, PixelType::INT32_STANDARD as u8);
        assert_eq!(0x50, PixelType::FLOAT_STANDARD as u8);
    }

    #[test]
    fn from_repr_all_types() {
        for pixel_type in PixelType::iter() {
            assert_eq!(Some(pixel_type), PixelType::from_repr(pixel_type as u8));
        }
    }

    #[test]
    fn from_repr_gaps() {
        assert_eq!(None, PixelType::from_repr(0x0e));
        assert_eq!(None, PixelType::from_repr(0x39));
        assert_eq!(None, PixelType::from_repr(0x8a));
        assert_eq!(None, PixelType::from_repr(0xb6));
        assert_eq!(None, PixelType::from_repr(0xff));
    }

    #[test]
    fn min_dimensions_tiles() {
        assert_eq!((16, 8), PixelType::OglPvrtc2.min_dimensions());
        assert_eq!((8, 8), PixelType::OglPvrtc4.min_dimensions());
        assert_eq!((4, 4), PixelType::EtcRgb4bpp.min_dimensions());
        assert_eq!((4, 4), PixelType::D3dDxt1.min_dimensions());
        assert_eq!((1, 1), PixelType::OglRgba8888.min_dimensions());
    }
}
