//! Load and save PVR textures with PVRTC or ETC1 compressed data.
//!
//! The block compression is handled by a [TextureCompressor].
//! [DefaultCodec] encodes ETC1 and decodes PVRTC and ETC1.
//!
//! Only files with a single surface and no mipmaps are supported.
//! Decoded images are always RGBA8 with tightly packed rows.
//!
//! # Examples
//! ```rust no_run
//! # fn main() -> Result<(), image_pvr::PvrError> {
//! use image_pvr::{decode, encode, CompressedFormat, DefaultCodec, RawImage};
//!
//! let image = RawImage::from_rgba8(4, 4, vec![255u8; 4 * 4 * 4]);
//! let bytes = encode(&DefaultCodec, &image, CompressedFormat::Etc1)?;
//! let decoded = decode(&DefaultCodec, &bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! Files can also be loaded in chunks as they arrive.
//! ```rust no_run
//! # fn main() -> Result<(), image_pvr::PvrError> {
//! use image_pvr::{DefaultCodec, PvrModule};
//!
//! # let bytes: Vec<u8> = Vec::new();
//! let module = PvrModule::new(DefaultCodec);
//! let mut loader = module.begin_load(());
//! for chunk in bytes.chunks(4096) {
//!     loader.load_increment(chunk)?;
//! }
//! let image = loader.finish()?;
//! # Ok(())
//! # }
//! ```
mod backend;
mod codec;
mod error;
mod format;
mod header;
mod incremental;
mod module;
mod pixel_type;
mod surface;
mod texture;

#[cfg(feature = "image")]
mod pvr;

pub use backend::{BackendError, DefaultCodec};
pub use codec::{decode, encode, TextureCompressor};
pub use error::{Dimension, HeaderError, PvrError};
pub use format::{parse_requested_format, standard_type_name, CompressedFormat};
pub use header::{Header, HeaderFlags, PVR_MAGIC, V1_HEADER_SIZE};
pub use incremental::{IncrementalLoad, LoadCallbacks, LoadState};
pub use module::{FormatFlags, FormatInfo, PvrModule, SaveOptions, PVR_FORMAT};
pub use pixel_type::PixelType;
pub use surface::RawImage;
pub use texture::Texture;

#[cfg(feature = "image")]
pub use pvr::{image_from_pvr, pvr_from_image};
