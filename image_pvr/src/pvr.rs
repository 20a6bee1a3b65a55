use crate::{decode, encode, CompressedFormat, PvrError, RawImage, TextureCompressor};

/// Decode a complete PVR file to an RGBA8 image.
pub fn image_from_pvr<C: TextureCompressor + ?Sized>(
    codec: &C,
    bytes: &[u8],
) -> Result<image::RgbaImage, PvrError> {
    let image = decode(codec, bytes)?;
    let (width, height) = (image.width, image.height);
    image::RgbaImage::from_raw(width, height, image.into_data()).ok_or_else(|| {
        PvrError::CodecFailure(format!(
            "decoded data is not valid for a {width}x{height} image"
        ))
    })
}

/// Encode `image` to a complete PVR file with the given compressed `format`.
///
/// RGB images are encoded with opaque alpha.
/// Other images are converted to RGBA8 first.
pub fn pvr_from_image<C: TextureCompressor + ?Sized>(
    codec: &C,
    image: &image::DynamicImage,
    format: CompressedFormat,
) -> Result<Vec<u8>, PvrError> {
    match image {
        image::DynamicImage::ImageRgb8(rgb) => encode(
            codec,
            &RawImage {
                width: rgb.width(),
                height: rgb.height(),
                stride: rgb.width() * 3,
                has_alpha: false,
                data: rgb.as_raw(),
            },
            format,
        ),
        _ => {
            let rgba = image.to_rgba8();
            encode(
                codec,
                &RawImage {
                    width: rgba.width(),
                    height: rgba.height(),
                    stride: rgba.width() * 4,
                    has_alpha: true,
                    data: rgba.as_raw(),
                },
                format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_codec::*;

    #[test]
    fn rgba_image_round_trip() {
        let codec = TestCompressor::default();
        let image = image::RgbaImage::from_raw(4, 4, rgba_4x4()).unwrap();
        let bytes = pvr_from_image(
            &codec,
            &image::DynamicImage::ImageRgba8(image.clone()),
            CompressedFormat::Pvrtc4,
        )
        .unwrap();
        assert_eq!(image, image_from_pvr(&codec, &bytes).unwrap());
    }

    #[test]
    fn rgb_image_has_opaque_alpha() {
        let codec = TestCompressor::default();
        let image = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
        let bytes = pvr_from_image(
            &codec,
            &image::DynamicImage::ImageRgb8(image),
            CompressedFormat::Etc1,
        )
        .unwrap();

        let decoded = image_from_pvr(&codec, &bytes).unwrap();
        assert!(decoded.pixels().all(|p| p.0 == [1, 2, 3, 255]));
    }

    #[test]
    fn luma_image_converted() {
        let codec = TestCompressor::default();
        let image = image::GrayImage::from_pixel(2, 2, image::Luma([7]));
        let bytes = pvr_from_image(
            &codec,
            &image::DynamicImage::ImageLuma8(image),
            CompressedFormat::Etc1,
        )
        .unwrap();

        let decoded = image_from_pvr(&codec, &bytes).unwrap();
        assert!(decoded.pixels().all(|p| p.0 == [7, 7, 7, 255]));
    }

    #[test]
    fn pvrtc_non_power_of_two() {
        let codec = TestCompressor::default();
        let image = image::RgbaImage::new(3, 4);
        let result = pvr_from_image(
            &codec,
            &image::DynamicImage::ImageRgba8(image),
            CompressedFormat::Pvrtc2,
        );
        assert!(matches!(result, Err(PvrError::InvalidDimensions { .. })));
    }
}
