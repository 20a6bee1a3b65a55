use log::{debug, trace};

use crate::{decode, Header, PvrError, RawImage, TextureCompressor};

/// Enough space for a 1024x1024 texture with 4 bits per pixel and its header.
const INITIAL_CAPACITY: usize = 1024 * 1024 / 2 + Header::SIZE;

/// Notifications sent to the host while loading incrementally.
///
/// All methods have default implementations that accept the image as is.
pub trait LoadCallbacks {
    /// Called once the header is known with the texture's dimensions.
    ///
    /// Returning a zero width or height aborts the load.
    fn size_prepared(&mut self, width: u32, height: u32) -> (u32, u32) {
        (width, height)
    }

    /// Called once the image has been decoded.
    fn area_prepared(&mut self, _image: &RawImage<Vec<u8>>) {}

    /// Called after [LoadCallbacks::area_prepared] with the region of the image that changed.
    fn area_updated(
        &mut self,
        _image: &RawImage<Vec<u8>>,
        _x: u32,
        _y: u32,
        _width: u32,
        _height: u32,
    ) {
    }
}

impl LoadCallbacks for () {}

impl<L: LoadCallbacks + ?Sized> LoadCallbacks for &mut L {
    fn size_prepared(&mut self, width: u32, height: u32) -> (u32, u32) {
        (**self).size_prepared(width, height)
    }

    fn area_prepared(&mut self, image: &RawImage<Vec<u8>>) {
        (**self).area_prepared(image)
    }

    fn area_updated(&mut self, image: &RawImage<Vec<u8>>, x: u32, y: u32, width: u32, height: u32) {
        (**self).area_updated(image, x, y, width, height)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadState {
    /// Fewer than [Header::SIZE] bytes have been received.
    Accumulating,
    /// The header has been parsed and accepted.
    HeaderKnown(Header),
    /// The load failed or was rejected by [LoadCallbacks::size_prepared].
    Aborted,
}

/// A loader that accepts a PVR file in chunks of any size.
///
/// The codec only works with complete buffers,
/// so decoding happens once in [IncrementalLoad::finish].
/// Dropping the loader before finishing cancels the load.
pub struct IncrementalLoad<'a, C: ?Sized, L> {
    codec: &'a C,
    callbacks: L,
    buffer: Vec<u8>,
    state: LoadState,
}

impl<'a, C: TextureCompressor + ?Sized, L: LoadCallbacks> IncrementalLoad<'a, C, L> {
    pub fn new(codec: &'a C, callbacks: L) -> Self {
        Self {
            codec,
            callbacks,
            buffer: Vec::with_capacity(INITIAL_CAPACITY),
            state: LoadState::Accumulating,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The number of bytes received so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append the next `chunk` of the file.
    ///
    /// The header is parsed as soon as enough bytes are available.
    /// Errors leave the load aborted, and later calls return [PvrError::LoadAborted].
    pub fn load_increment(&mut self, chunk: &[u8]) -> Result<(), PvrError> {
        if self.state == LoadState::Aborted {
            return Err(PvrError::LoadAborted);
        }

        trace!("received {} bytes", chunk.len());
        self.buffer.extend_from_slice(chunk);

        if self.state == LoadState::Accumulating && self.buffer.len() >= Header::SIZE {
            let header = match Header::parse(&self.buffer) {
                Ok(header) => header,
                Err(e) => {
                    debug!("aborting load with invalid header: {e}");
                    self.abort();
                    return Err(e);
                }
            };

            debug!(
                "header known for {}x{} texture with pixel type 0x{:02x}",
                header.width,
                header.height,
                header.pixel_type_code()
            );

            let (width, height) = self.callbacks.size_prepared(header.width, header.height);
            if width == 0 || height == 0 {
                debug!("aborting load after size {width}x{height} was rejected");
                self.abort();
                return Err(PvrError::LoadAborted);
            }

            self.state = LoadState::HeaderKnown(header);
        }

        Ok(())
    }

    /// Decode the received bytes and notify the host.
    pub fn finish(mut self) -> Result<RawImage<Vec<u8>>, PvrError> {
        if self.state == LoadState::Aborted {
            return Err(PvrError::LoadAborted);
        }

        let image = decode(self.codec, &self.buffer)?;

        self.callbacks.area_prepared(&image);
        self.callbacks
            .area_updated(&image, 0, 0, image.width, image.height);

        Ok(image)
    }

    fn abort(&mut self) {
        self.state = LoadState::Aborted;
        self.buffer = Vec::new();
    }
}
