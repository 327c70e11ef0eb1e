// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Logo processor: load any raster image as RGBA, clear its near-white
// background, and write the result as PNG.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::{debug, info, instrument};
use whiteout_core::error::WhiteoutError;
use whiteout_core::{ConversionReport, Threshold};

use super::transparency::clear_near_white;

/// Transparency pipeline operating on a single in-memory RGBA image.
///
/// Methods that transform the image consume `self` and return a new
/// `LogoProcessor`, enabling method chaining.
///
/// ```ignore
/// let report = LogoProcessor::open("logo.png")?
///     .clear_background(Threshold::DEFAULT)
///     .save_png("logo.png")?;
/// ```
///
/// The image is always fully decoded on construction, so saving over the
/// file it was opened from is safe.
pub struct LogoProcessor {
    /// The working image, always RGBA8.
    image: RgbaImage,
    /// Pixels rewritten by `clear_background` so far.
    cleared: u64,
}

impl LogoProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path and convert it to RGBA.
    ///
    /// The format is sniffed from the file contents; the extension is only
    /// used when sniffing fails.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WhiteoutError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| WhiteoutError::InputPath {
            path: path.to_path_buf(),
            source,
        })?;
        let image = decode(&data, ImageFormat::from_path(path).ok()).map_err(|detail| {
            WhiteoutError::Decode {
                path: path.to_path_buf(),
                detail,
            }
        })?;
        info!(
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "Image loaded"
        );
        Ok(Self::from_dynamic(image))
    }

    /// Create a processor from raw encoded bytes (PNG, JPEG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, WhiteoutError> {
        let image = decode(data, None).map_err(|detail| WhiteoutError::Decode {
            path: "<memory>".into(),
            detail,
        })?;
        debug!(
            width = image.width(),
            height = image.height(),
            "Image decoded from bytes"
        );
        Ok(Self::from_dynamic(image))
    }

    /// Wrap an already-decoded image, converting it to RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgba8(),
            cleared: 0,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the working RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the processor and return the RGBA buffer.
    pub fn into_rgba(self) -> RgbaImage {
        self.image
    }

    /// Pixels cleared by every `clear_background` call on this processor.
    pub fn cleared_pixels(&self) -> u64 {
        self.cleared
    }

    /// Summary of the work done so far.
    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            width: self.width(),
            height: self.height(),
            total_pixels: u64::from(self.width()) * u64::from(self.height()),
            cleared_pixels: self.cleared,
        }
    }

    // -- Transformations ------------------------------------------------------

    /// Replace every near-white pixel with transparent white.
    #[instrument(skip(self), fields(threshold = threshold.value()))]
    pub fn clear_background(self, threshold: Threshold) -> Self {
        let (image, cleared) = clear_near_white(&self.image, threshold);
        debug!(cleared, "Background cleared");
        Self {
            image,
            cleared: self.cleared + cleared,
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, WhiteoutError> {
        let mut buffer = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|err| WhiteoutError::Encode(err.to_string()))?;
        Ok(buffer)
    }

    /// Write the image to `path` as PNG, whatever the extension says.
    ///
    /// The PNG is fully encoded in memory before the file is touched.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<ConversionReport, WhiteoutError> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        std::fs::write(path, &bytes).map_err(|source| WhiteoutError::OutputPath {
            path: path.to_path_buf(),
            source,
        })?;
        info!(bytes = bytes.len(), "PNG written");
        Ok(self.report())
    }
}

/// Decode `data`, sniffing the format and falling back to `hint`.
fn decode(data: &[u8], hint: Option<ImageFormat>) -> Result<DynamicImage, String> {
    let mut reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|err| err.to_string())?;
    if reader.format().is_none() {
        if let Some(format) = hint {
            reader.set_format(format);
        }
    }
    reader.decode().map_err(|err| err.to_string())
}
