use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{
    standard_type_name, CompressedFormat, Dimension, Header, HeaderFlags, PixelType, PvrError,
    RawImage, Texture,
};

/// A texture compression engine that converts between uncompressed and compressed textures.
///
/// Implementations only need to handle complete buffers.
/// Errors and panics are both reported as [PvrError::CodecFailure] by [decode] and [encode].
pub trait TextureCompressor {
    type Error: std::error::Error;

    /// Compress a tightly packed RGBA8 texture with pixel type [PixelType::INT8_STANDARD].
    ///
    /// The result should contain only the compressed data without a header.
    fn compress(
        &self,
        uncompressed: &Texture<&[u8]>,
        format: CompressedFormat,
    ) -> Result<Vec<u8>, Self::Error>;

    /// Decompress a texture to one of the standard pixel types.
    fn decompress(&self, compressed: &Texture<&[u8]>) -> Result<Texture<Vec<u8>>, Self::Error>;
}

impl<C: TextureCompressor + ?Sized> TextureCompressor for &C {
    type Error = C::Error;

    fn compress(
        &self,
        uncompressed: &Texture<&[u8]>,
        format: CompressedFormat,
    ) -> Result<Vec<u8>, Self::Error> {
        (**self).compress(uncompressed, format)
    }

    fn decompress(&self, compressed: &Texture<&[u8]>) -> Result<Texture<Vec<u8>>, Self::Error> {
        (**self).decompress(compressed)
    }
}

/// Decode a complete PVR file to an RGBA8 image.
///
/// The returned image always has an alpha channel and tightly packed rows.
/// Textures with [HeaderFlags::VERTICAL_FLIP] are flipped to top to bottom row order.
pub fn decode<C: TextureCompressor + ?Sized>(
    codec: &C,
    bytes: &[u8],
) -> Result<RawImage<Vec<u8>>, PvrError> {
    let compressed = Texture::from_bytes(bytes)?;

    let decompressed = run_codec(|| codec.decompress(&compressed))?;

    // Only 8-bit channels can be represented by the output image.
    let pixel_type = decompressed.header.pixel_type();
    if pixel_type != Some(PixelType::INT8_STANDARD) {
        let name = pixel_type.map(standard_type_name).unwrap_or("Other");
        return Err(PvrError::UnsupportedPixelType(name));
    }

    let width = decompressed.width();
    let height = decompressed.height();
    let size = rgba8_size(width, height)?;
    let mut data = decompressed.data;
    if data.len() < size {
        return Err(PvrError::CodecFailure(format!(
            "expected decompressed data to have at least {size} bytes but found {}",
            data.len()
        )));
    }
    data.truncate(size);

    let mut image = RawImage::from_rgba8(width, height, data);
    // The decompressed header may not preserve the flags.
    if compressed.is_flipped() {
        image.flip_vertical();
    }

    Ok(image)
}

/// Encode `image` to a complete PVR file with the given compressed `format`.
///
/// Images without alpha are converted to RGBA with opaque alpha first.
/// The caller's image is never modified.
pub fn encode<C: TextureCompressor + ?Sized, T: AsRef<[u8]>>(
    codec: &C,
    image: &RawImage<T>,
    format: CompressedFormat,
) -> Result<Vec<u8>, PvrError> {
    if format.requires_power_of_two() {
        check_power_of_two(image.width, image.height)?;
    }

    // Overlapping rows can't be converted.
    if image.stride < image.packed_stride() {
        return Err(PvrError::UnsupportedStride {
            width: image.width,
            stride: image.stride,
        });
    }

    // Keep the copy alive for as long as the uncompressed texture borrows it.
    let rgba;
    let image = if image.has_alpha {
        RawImage {
            width: image.width,
            height: image.height,
            stride: image.stride,
            has_alpha: true,
            data: image.data.as_ref(),
        }
    } else {
        rgba = image.with_alpha();
        RawImage {
            width: rgba.width,
            height: rgba.height,
            stride: rgba.stride,
            has_alpha: true,
            data: rgba.data.as_slice(),
        }
    };

    image.validate_stride()?;

    let size = rgba8_size(image.width, image.height)?;
    let data = image.data.get(..size).ok_or_else(|| {
        PvrError::CodecFailure(format!(
            "expected image to have at least {size} bytes but found {}",
            image.data.len()
        ))
    })?;

    let uncompressed = Texture::new(Header::uncompressed_rgba8(image.width, image.height), data);

    let payload = run_codec(|| codec.compress(&uncompressed, format))?;

    let header = compressed_header(&uncompressed.header, format, payload.len())?;

    let mut bytes = Vec::with_capacity(Header::SIZE + payload.len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

fn check_power_of_two(width: u32, height: u32) -> Result<(), PvrError> {
    if !width.is_power_of_two() {
        return Err(PvrError::InvalidDimensions {
            dimension: Dimension::Width,
            value: width,
        });
    }
    if !height.is_power_of_two() {
        return Err(PvrError::InvalidDimensions {
            dimension: Dimension::Height,
            value: height,
        });
    }
    Ok(())
}

fn compressed_header(
    uncompressed: &Header,
    format: CompressedFormat,
    data_size: usize,
) -> Result<Header, PvrError> {
    let data_size = u32::try_from(data_size).map_err(|_| {
        PvrError::CodecFailure(format!(
            "compressed data size {data_size} does not fit in the header"
        ))
    })?;

    let mut header = Header {
        flags: uncompressed.flags & HeaderFlags::ALPHA.bits(),
        data_size,
        bit_count: format.bits_per_pixel(),
        red_mask: 0,
        green_mask: 0,
        blue_mask: 0,
        alpha_mask: 0,
        ..*uncompressed
    };
    header.set_pixel_type(format.pixel_type());
    Ok(header)
}

fn rgba8_size(width: u32, height: u32) -> Result<usize, PvrError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            PvrError::CodecFailure(format!("image size {width}x{height} would overflow"))
        })
}

/// Call into the compressor and convert both errors and panics to [PvrError::CodecFailure].
fn run_codec<T, E, F>(f: F) -> Result<T, PvrError>
where
    E: std::error::Error,
    F: FnOnce() -> Result<T, E>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(|e| PvrError::CodecFailure(e.to_string())),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "texture codec panicked".to_string());
            Err(PvrError::CodecFailure(message))
        }
    }
}
