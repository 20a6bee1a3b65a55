use thiserror::Error;

use crate::{CompressedFormat, Header, PixelType, Texture, TextureCompressor};

/// ETC1 compresses 4x4 pixel blocks.
#[cfg(feature = "encode")]
const ETC1_BLOCK_SIZE: u32 = 4;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("compressing data to format {format} is not supported")]
    UnsupportedEncodeFormat { format: CompressedFormat },

    #[error("decompressing data with pixel type 0x{code:02x} is not supported")]
    UnsupportedDecodePixelType { code: u8 },

    #[error("texture dimensions {width} x {height} are not divisible by the block dimensions {block_width} x {block_height}")]
    NonIntegralDimensionsInBlocks {
        width: u32,
        height: u32,
        block_width: u32,
        block_height: u32,
    },

    #[error("expected texture to have at least {expected} bytes but found {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    #[error("texture dimensions {width} x {height} would overflow")]
    PixelCountWouldOverflow { width: u32, height: u32 },

    #[error("error decoding texture: {0}")]
    Decode(&'static str),
}

/// The default texture compressor.
///
/// Encoding ETC1 uses [intel_tex_2] and requires the `"encode"` feature.
/// Decoding PVRTC and ETC1 uses [texture2ddecoder] and requires the `"decode"` feature.
/// Encoding PVRTC is not supported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCodec;

impl TextureCompressor for DefaultCodec {
    type Error = BackendError;

    #[cfg_attr(not(feature = "encode"), allow(unused_variables))]
    fn compress(
        &self,
        uncompressed: &Texture<&[u8]>,
        format: CompressedFormat,
    ) -> Result<Vec<u8>, Self::Error> {
        match format {
            #[cfg(feature = "encode")]
            CompressedFormat::Etc1 => compress_etc1(uncompressed),
            // TODO: Find a maintained PVRTC encoder.
            _ => Err(BackendError::UnsupportedEncodeFormat { format }),
        }
    }

    fn decompress(&self, compressed: &Texture<&[u8]>) -> Result<Texture<Vec<u8>>, Self::Error> {
        let width = compressed.width();
        let height = compressed.height();
        let pixel_count = pixel_count(width, height)?;
        let code = compressed.header.pixel_type_code();

        let rgba8 = match compressed.pixel_type() {
            Some(PixelType::OglRgba8888) | Some(PixelType::INT8_STANDARD) => {
                let data = compressed.data();
                data.get(..pixel_count * 4)
                    .ok_or(BackendError::NotEnoughData {
                        expected: pixel_count * 4,
                        actual: data.len(),
                    })?
                    .to_vec()
            }
            Some(PixelType::OglBgra8888) => {
                let data = compressed.data();
                let bgra = data.get(..pixel_count * 4).ok_or(BackendError::NotEnoughData {
                    expected: pixel_count * 4,
                    actual: data.len(),
                })?;
                bgra.chunks_exact(4)
                    .flat_map(|p| [p[2], p[1], p[0], p[3]])
                    .collect()
            }
            #[cfg(feature = "decode")]
            Some(
                pixel_type @ (PixelType::MglPvrtc2
                | PixelType::OglPvrtc2
                | PixelType::MglPvrtc4
                | PixelType::OglPvrtc4
                | PixelType::EtcRgb4bpp),
            ) => decompress_blocks(compressed, pixel_type, pixel_count)?,
            _ => return Err(BackendError::UnsupportedDecodePixelType { code }),
        };

        let mut header = Header::uncompressed_rgba8(width, height);
        // Keep the source flags like alpha and vertical flip.
        header.flags = compressed.header.flags;
        header.set_pixel_type(PixelType::INT8_STANDARD);
        header.mipmap_count = 0;

        Ok(Texture::new(header, rgba8))
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize, BackendError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|n| n.checked_mul(4).is_some())
        .ok_or(BackendError::PixelCountWouldOverflow { width, height })
}

#[cfg(feature = "encode")]
fn compress_etc1(uncompressed: &Texture<&[u8]>) -> Result<Vec<u8>, BackendError> {
    let width = uncompressed.width();
    let height = uncompressed.height();

    // The encoder reads whole blocks.
    if width % ETC1_BLOCK_SIZE != 0 || height % ETC1_BLOCK_SIZE != 0 {
        return Err(BackendError::NonIntegralDimensionsInBlocks {
            width,
            height,
            block_width: ETC1_BLOCK_SIZE,
            block_height: ETC1_BLOCK_SIZE,
        });
    }

    let expected = pixel_count(width, height)? * 4;
    let data = uncompressed.data();
    if data.len() < expected {
        return Err(BackendError::NotEnoughData {
            expected,
            actual: data.len(),
        });
    }

    // RGBA with 4 bytes per pixel.
    let surface = intel_tex_2::RgbaSurface {
        width,
        height,
        stride: width * 4,
        data: &data[..expected],
    };

    Ok(intel_tex_2::etc1::compress_blocks(
        intel_tex_2::etc1::slow_settings(),
        &surface,
    ))
}

#[cfg(feature = "decode")]
fn decompress_blocks(
    compressed: &Texture<&[u8]>,
    pixel_type: PixelType,
    pixel_count: usize,
) -> Result<Vec<u8>, BackendError> {
    let width = compressed.width() as usize;
    let height = compressed.height() as usize;
    let data = compressed.data();

    // Check the size before allocating the output for the header's dimensions.
    let expected = compressed_size(pixel_type, width, height);
    if data.len() < expected {
        return Err(BackendError::NotEnoughData {
            expected,
            actual: data.len(),
        });
    }

    let mut bgra = vec![0u32; pixel_count];
    match pixel_type {
        PixelType::MglPvrtc2 | PixelType::OglPvrtc2 => {
            texture2ddecoder::decode_pvrtc_2bpp(data, width, height, &mut bgra)
        }
        PixelType::MglPvrtc4 | PixelType::OglPvrtc4 => {
            texture2ddecoder::decode_pvrtc_4bpp(data, width, height, &mut bgra)
        }
        _ => texture2ddecoder::decode_etc1(data, width, height, &mut bgra),
    }
    .map_err(BackendError::Decode)?;

    Ok(rgba8_from_bgra_u32(&bgra))
}

/// The size in bytes of the compressed data including padding to whole tiles.
#[cfg(feature = "decode")]
fn compressed_size(pixel_type: PixelType, width: usize, height: usize) -> usize {
    let (min_width, min_height) = pixel_type.min_dimensions();
    let bits_per_pixel = match pixel_type {
        PixelType::MglPvrtc2 | PixelType::OglPvrtc2 => 2,
        _ => 4,
    };
    // ETC1 stores partial blocks at the edges as whole blocks.
    let width = width.next_multiple_of(4).max(min_width as usize);
    let height = height.next_multiple_of(4).max(min_height as usize);
    width.saturating_mul(height).saturating_mul(bits_per_pixel) / 8
}

/// The decoder packs pixels as `0xAARRGGBB`.
#[cfg(feature = "decode")]
fn rgba8_from_bgra_u32(pixels: &[u32]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|p| {
            let [b, g, r, a] = p.to_le_bytes();
            [r, g, b, a]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, encode, HeaderFlags, PvrError, RawImage};

    fn texture(width: u32, height: u32, pixel_type: PixelType, data: &[u8]) -> Texture<&[u8]> {
        let mut header = Header::uncompressed_rgba8(width, height);
        header.set_pixel_type(pixel_type);
        Texture::new(header, data)
    }

    #[test]
    fn decompress_rgba8888_passthrough() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let result = DefaultCodec
            .decompress(&texture(2, 1, PixelType::OglRgba8888, &data))
            .unwrap();
        assert_eq!(Some(PixelType::INT8_STANDARD), result.pixel_type());
        assert_eq!(data.to_vec(), result.data);
    }

    #[test]
    fn decompress_bgra8888() {
        let data = [1u8, 2, 3, 4];
        let result = DefaultCodec
            .decompress(&texture(1, 1, PixelType::OglBgra8888, &data))
            .unwrap();
        assert_eq!(vec![3, 2, 1, 4], result.data);
    }

    #[test]
    fn decompress_keeps_flags() {
        let data = [0u8; 4];
        let mut compressed = texture(1, 1, PixelType::OglRgba8888, &data);
        compressed.header.flags |= HeaderFlags::VERTICAL_FLIP.bits();
        let result = DefaultCodec.decompress(&compressed).unwrap();
        assert!(result.is_flipped());
        assert!(result.has_alpha());
    }

    #[test]
    fn decompress_not_enough_data() {
        let result = DefaultCodec.decompress(&texture(2, 2, PixelType::OglRgba8888, &[0u8; 4]));
        assert!(matches!(
            result,
            Err(BackendError::NotEnoughData {
                expected: 16,
                actual: 4
            })
        ));
    }

    #[test]
    fn decompress_unsupported_pixel_type() {
        let result = DefaultCodec.decompress(&texture(4, 4, PixelType::D3dDxt1, &[0u8; 8]));
        assert!(matches!(
            result,
            Err(BackendError::UnsupportedDecodePixelType { code: 0x20 })
        ));
    }

    #[test]
    fn compress_pvrtc_unsupported() {
        let data = [0u8; 8 * 8 * 4];
        let result = DefaultCodec.compress(
            &texture(8, 8, PixelType::INT8_STANDARD, &data),
            CompressedFormat::Pvrtc4,
        );
        assert!(matches!(
            result,
            Err(BackendError::UnsupportedEncodeFormat {
                format: CompressedFormat::Pvrtc4
            })
        ));
    }

    #[test]
    fn save_pvrtc_with_default_codec() {
        let module = crate::PvrModule::new(DefaultCodec);
        let image = RawImage::from_rgba8(8, 8, vec![0u8; 8 * 8 * 4]);
        for format in ["PVRTC2", "PVRTC4"] {
            let mut writer = Vec::new();
            let result = module.save(&mut writer, &image, &["format"], &[format]);
            assert!(matches!(result, Err(PvrError::CodecFailure(_))));
            assert!(writer.is_empty());
        }
    }

    #[test]
    fn decode_uncompressed_file() {
        let bytes = Texture::new(Header::uncompressed_rgba8(1, 1), vec![1u8, 2, 3, 4]).to_bytes();
        let image = decode(&DefaultCodec, &bytes).unwrap();
        assert_eq!(RawImage::from_rgba8(1, 1, vec![1, 2, 3, 4]), image);
    }

    #[cfg(feature = "encode")]
    #[test]
    fn compress_etc1_size() {
        let data = [128u8; 8 * 4 * 4];
        let result = DefaultCodec
            .compress(
                &texture(8, 4, PixelType::INT8_STANDARD, &data),
                CompressedFormat::Etc1,
            )
            .unwrap();
        // 8 bytes for each 4x4 block.
        assert_eq!(2 * 8, result.len());
    }

    #[cfg(feature = "encode")]
    #[test]
    fn compress_etc1_non_integral_dimensions() {
        let data = [0u8; 6 * 4 * 4];
        let result = DefaultCodec.compress(
            &texture(6, 4, PixelType::INT8_STANDARD, &data),
            CompressedFormat::Etc1,
        );
        assert!(matches!(
            result,
            Err(BackendError::NonIntegralDimensionsInBlocks {
                width: 6,
                height: 4,
                block_width: 4,
                block_height: 4
            })
        ));
    }

    #[cfg(feature = "encode")]
    #[test]
    fn encode_etc1_backend_failure() {
        let image = RawImage::from_rgba8(6, 4, vec![0u8; 6 * 4 * 4]);
        assert!(matches!(
            encode(&DefaultCodec, &image, CompressedFormat::Etc1),
            Err(PvrError::CodecFailure(_))
        ));
    }

    #[cfg(all(feature = "encode", feature = "decode"))]
    #[test]
    fn etc1_non_square_round_trip() {
        let image = RawImage::from_rgba8(4, 8, [10u8, 20, 30, 255].repeat(4 * 8));
        let bytes = encode(&DefaultCodec, &image, CompressedFormat::Etc1).unwrap();
        assert_eq!(Header::SIZE + 2 * 8, bytes.len());

        let decoded = decode(&DefaultCodec, &bytes).unwrap();
        assert_eq!(4, decoded.width);
        assert_eq!(8, decoded.height);
        for (expected, actual) in image.data.iter().zip(decoded.data.iter()) {
            assert!(expected.abs_diff(*actual) <= 8);
        }
    }

    #[cfg(all(feature = "encode", feature = "decode"))]
    #[test]
    fn etc1_solid_color() {
        // Solid colors are represented almost exactly.
        let image = RawImage::from_rgba8(8, 8, [200u8, 100, 50, 255].repeat(8 * 8));
        let bytes = encode(&DefaultCodec, &image, CompressedFormat::Etc1).unwrap();
        assert_eq!(Header::SIZE + 4 * 8, bytes.len());

        let decoded = decode(&DefaultCodec, &bytes).unwrap();
        assert_eq!(8, decoded.width);
        assert_eq!(8, decoded.height);
        for (expected, actual) in image.data.iter().zip(decoded.data.iter()) {
            assert!(expected.abs_diff(*actual) <= 8);
        }
    }

    #[cfg(feature = "decode")]
    #[test]
    fn decode_pvrtc4_size() {
        // 4 bits per pixel for the 8x8 minimum size.
        let mut header = Header::uncompressed_rgba8(8, 8);
        header.set_pixel_type(PixelType::OglPvrtc4);
        header.data_size = 32;
        let bytes = Texture::new(header, vec![0u8; 32]).to_bytes();

        let image = decode(&DefaultCodec, &bytes).unwrap();
        assert_eq!(8 * 8 * 4, image.data.len());
    }

    #[cfg(feature = "decode")]
    #[test]
    fn decode_pvrtc_not_enough_data() {
        let mut header = Header::uncompressed_rgba8(1 << 15, 1 << 15);
        header.set_pixel_type(PixelType::OglPvrtc4);
        let bytes = Texture::new(header, vec![0u8; 32]).to_bytes();
        assert!(matches!(
            decode(&DefaultCodec, &bytes),
            Err(PvrError::CodecFailure(_))
        ));
    }

    #[cfg(feature = "decode")]
    #[test]
    fn compressed_sizes() {
        assert_eq!(32, compressed_size(PixelType::OglPvrtc4, 8, 8));
        assert_eq!(32, compressed_size(PixelType::OglPvrtc4, 1, 1));
        assert_eq!(32, compressed_size(PixelType::OglPvrtc2, 8, 8));
        assert_eq!(64, compressed_size(PixelType::OglPvrtc2, 16, 16));
        assert_eq!(8, compressed_size(PixelType::EtcRgb4bpp, 1, 1));
        assert_eq!(16, compressed_size(PixelType::EtcRgb4bpp, 6, 4));
    }

    #[cfg(feature = "decode")]
    #[test]
    fn rgba8_from_bgra() {
        assert_eq!(
            vec![0x22, 0x33, 0x44, 0x11],
            rgba8_from_bgra_u32(&[0x11223344])
        );
    }
}
