use crate::PvrError;

/// An uncompressed 8-bit image with 3 or 4 channels.
///
/// Rows are [stride](#structfield.stride) bytes apart.
/// Only tightly packed rows can be encoded.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawImage<T> {
    /// The width of the image in pixels.
    pub width: u32,
    /// The height of the image in pixels.
    pub height: u32,
    /// The number of bytes between the start of consecutive rows.
    pub stride: u32,
    /// RGBA with 4 bytes per pixel if `true` and RGB with 3 bytes per pixel otherwise.
    pub has_alpha: bool,
    /// The pixel rows from top to bottom.
    pub data: T,
}

impl<T: AsRef<[u8]>> RawImage<T> {
    pub fn channels(&self) -> u32 {
        if self.has_alpha {
            4
        } else {
            3
        }
    }

    /// The number of bytes for a tightly packed row.
    pub fn packed_stride(&self) -> u32 {
        self.width.saturating_mul(self.channels())
    }

    /// The row `y` without any row padding or [None] if out of bounds.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let start = y as usize * self.stride as usize;
        let end = start + self.packed_stride() as usize;
        if y < self.height {
            self.data.as_ref().get(start..end)
        } else {
            None
        }
    }

    /// Check that the rows are tightly packed.
    pub(crate) fn validate_stride(&self) -> Result<(), PvrError> {
        if self.stride != self.packed_stride() {
            return Err(PvrError::UnsupportedStride {
                width: self.width,
                stride: self.stride,
            });
        }
        Ok(())
    }

    /// An RGBA copy of the image with opaque alpha for images without an alpha channel.
    ///
    /// Images that already have alpha are copied unchanged.
    pub fn with_alpha(&self) -> RawImage<Vec<u8>> {
        // Size the output from the available data in case the dimensions are too large.
        let pixels = self.data.as_ref().len() / self.channels() as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        // Rows past the end of the data are skipped.
        let rows = match self.stride as usize {
            0 => 0,
            stride => self.data.as_ref().len().div_ceil(stride),
        };
        for y in 0..self.height.min(rows.try_into().unwrap_or(u32::MAX)) {
            let Some(row) = self.row(y) else { break };
            if self.has_alpha {
                data.extend_from_slice(row);
            } else {
                for rgb in row.chunks_exact(3) {
                    data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255u8]);
                }
            }
        }

        RawImage {
            width: self.width,
            height: self.height,
            stride: self.width.saturating_mul(4),
            has_alpha: true,
            data,
        }
    }
}

impl RawImage<Vec<u8>> {
    /// A tightly packed RGBA image.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width.saturating_mul(4),
            has_alpha: true,
            data,
        }
    }

    /// Reverse the order of rows in place.
    pub fn flip_vertical(&mut self) {
        let stride = self.stride as usize;
        if stride == 0 {
            return;
        }
        let height = (self.height as usize).min(self.data.len() / stride);
        for y in 0..height / 2 {
            let (top, bottom) = self.data.split_at_mut((height - 1 - y) * stride);
            top[y * stride..(y + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
