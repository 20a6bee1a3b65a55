use std::io::{Read, Write};

use bitflags::bitflags;
use log::warn;

use crate::{
    decode, encode, parse_requested_format, CompressedFormat, IncrementalLoad, LoadCallbacks,
    PvrError, RawImage, TextureCompressor,
};

bitflags! {
    /// Capabilities advertised by [FormatInfo].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u32 {
        /// Images can be saved in this format.
        const WRITABLE = 1 << 0;
    }
}

/// A description of an image format for registering with an image loading host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub mime_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
    /// Byte patterns identifying the start of a file.
    /// Files are only detected by extension if this is empty.
    pub signatures: &'static [&'static [u8]],
    pub flags: FormatFlags,
    pub license: &'static str,
}

impl FormatInfo {
    pub fn is_writable(&self) -> bool {
        self.flags.contains(FormatFlags::WRITABLE)
    }

    /// Returns `true` if `extension` is one of the [extensions](#structfield.extensions) ignoring case.
    pub fn has_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}

/// The format information for PVR files.
pub static PVR_FORMAT: FormatInfo = FormatInfo {
    name: "pvr",
    description: "PVR image",
    mime_types: &["image/x-pvr"],
    extensions: &["pvr"],
    signatures: &[],
    flags: FormatFlags::WRITABLE,
    license: "LGPL",
};

/// Options for saving a PVR file.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveOptions {
    /// The compressed format for the saved data.
    pub format: CompressedFormat,
}

impl SaveOptions {
    /// Parse the options from parallel lists of `keys` and `values`.
    ///
    /// The only recognized key is `"format"`.
    /// Unknown keys are ignored, and keys without a value are skipped.
    pub fn from_pairs<K: AsRef<str>, V: AsRef<str>>(
        keys: &[K],
        values: &[V],
    ) -> Result<Self, PvrError> {
        let mut options = Self::default();
        for (key, value) in keys.iter().zip(values) {
            match key.as_ref() {
                "format" => options.format = parse_requested_format(value.as_ref())?,
                key => warn!("ignoring unrecognized PVR save option {key:?}"),
            }
        }
        Ok(options)
    }
}

/// The entry points for loading and saving PVR files with a texture compressor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PvrModule<C> {
    codec: C,
}

impl<C: TextureCompressor> PvrModule<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn format_info(&self) -> &'static FormatInfo {
        &PVR_FORMAT
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Read and decode a complete file from `reader`.
    pub fn load<R: Read>(&self, mut reader: R) -> Result<RawImage<Vec<u8>>, PvrError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        decode(&self.codec, &bytes)
    }

    /// Encode `image` and write the file to `writer`.
    ///
    /// The `keys` and `values` are parsed with [SaveOptions::from_pairs].
    /// Nothing is written if the options or encoding fail.
    pub fn save<W: Write, T: AsRef<[u8]>, K: AsRef<str>, V: AsRef<str>>(
        &self,
        writer: W,
        image: &RawImage<T>,
        keys: &[K],
        values: &[V],
    ) -> Result<(), PvrError> {
        let options = SaveOptions::from_pairs(keys, values)?;
        self.save_with_options(writer, image, &options)
    }

    pub fn save_with_options<W: Write, T: AsRef<[u8]>>(
        &self,
        mut writer: W,
        image: &RawImage<T>,
        options: &SaveOptions,
    ) -> Result<(), PvrError> {
        let bytes = encode(&self.codec, image, options.format)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Start loading a file in chunks.
    ///
    /// Stop the load with [IncrementalLoad::finish] or by dropping the loader.
    pub fn begin_load<L: LoadCallbacks>(&self, callbacks: L) -> IncrementalLoad<'_, C, L> {
        IncrementalLoad::new(&self.codec, callbacks)
    }
}
