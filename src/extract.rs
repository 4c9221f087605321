//! Interface for extracting the font embedded in an EOT file

use std::io::Cursor;

use four_cc::FourCC;
use thiserror::Error;

use crate::{
    buffer_util::BufExt,
    eot::header::{EotHeader, EotHeaderError},
    magic_numbers::{
        EOT_MIN_HEADER_SIZE, MIN_SFNT_SIZE, TTF_APPLE_TRUE_TYPE_FLAVOR, TTF_CFF_FLAVOR,
        TTF_COLLECTION_FLAVOR, TTF_TRUE_TYPE_FLAVOR,
    },
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("EOT file is too small to contain a valid header ({0} bytes)")]
    TooSmall(usize),
    #[error("EOT size mismatch: header says {declared}, file is {actual}")]
    SizeMismatch { declared: u32, actual: usize },
    #[error("Font data size {font_data_size} exceeds EOT size {eot_size}")]
    FontDataTooLarge { font_data_size: u32, eot_size: u32 },
    #[error("Unsupported EOT version {0:#010x}")]
    UnsupportedVersion(u32),
    #[error("Flags {0:#010x} indicate compression or other unsupported features")]
    UnsupportedFeatures(u32),
    #[error("Header size {0} is too small for a valid EOT header")]
    HeaderTooSmall(u32),
    #[error("Header size {header_size} exceeds EOT size {eot_size}")]
    HeaderTooLarge { header_size: u32, eot_size: u32 },
    #[error(
        "Header size {header_size} plus font data size {font_data_size} exceeds EOT size {eot_size}"
    )]
    PayloadOverflow {
        header_size: u32,
        font_data_size: u32,
        eot_size: u32,
    },
    #[error("Extracted font data size {actual} does not match expected {expected}")]
    TruncatedPayload { actual: usize, expected: u32 },
    #[error("Extracted font data is too small to be a valid font ({0} bytes)")]
    PayloadTooSmall(usize),
    #[error("Invalid EOT header structure")]
    MalformedStructure,
}

impl From<EotHeaderError> for ExtractError {
    fn from(e: EotHeaderError) -> Self {
        match e {
            EotHeaderError::TooSmall(len) => ExtractError::TooSmall(len),
            EotHeaderError::SizeMismatch { declared, actual } => {
                ExtractError::SizeMismatch { declared, actual }
            }
            EotHeaderError::FontDataTooLarge {
                font_data_size,
                eot_size,
            } => ExtractError::FontDataTooLarge {
                font_data_size,
                eot_size,
            },
            EotHeaderError::UnsupportedVersion(version) => {
                ExtractError::UnsupportedVersion(version)
            }
            EotHeaderError::UnsupportedFeatures(flags) => ExtractError::UnsupportedFeatures(flags),
            EotHeaderError::Truncated => ExtractError::MalformedStructure,
        }
    }
}

/// A font located inside an EOT file, borrowing the file's bytes.
#[derive(Debug)]
pub struct EmbeddedFont<'a> {
    pub header: EotHeader,
    /// Offset of `font_data` in the EOT file.
    pub header_size: u32,
    pub font_data: &'a [u8],
}

impl<'a> EmbeddedFont<'a> {
    /// Parses the EOT header in `eot` and locates the font payload.
    ///
    /// On success `header_size + font_data.len() == eot.len()`.
    pub fn parse(eot: &'a [u8]) -> Result<Self, ExtractError> {
        let header = EotHeader::from_buf(&mut Cursor::new(eot))?;
        log::debug!(
            "EOT {:?}: {} bytes, font data {} bytes",
            header.version,
            header.eot_size,
            header.font_data_size
        );

        let header_size = header.header_size();
        if (header_size as usize) < EOT_MIN_HEADER_SIZE {
            return Err(ExtractError::HeaderTooSmall(header_size));
        }
        if header_size > header.eot_size {
            return Err(ExtractError::HeaderTooLarge {
                header_size,
                eot_size: header.eot_size,
            });
        }
        let payload_end = u64::from(header_size) + u64::from(header.font_data_size);
        if payload_end > u64::from(header.eot_size) {
            return Err(ExtractError::PayloadOverflow {
                header_size,
                font_data_size: header.font_data_size,
                eot_size: header.eot_size,
            });
        }

        let start = (header_size as usize).min(eot.len());
        let end = (payload_end as usize).min(eot.len());
        let font_data = &eot[start..end];
        if font_data.len() != header.font_data_size as usize {
            return Err(ExtractError::TruncatedPayload {
                actual: font_data.len(),
                expected: header.font_data_size,
            });
        }
        if font_data.len() < MIN_SFNT_SIZE {
            return Err(ExtractError::PayloadTooSmall(font_data.len()));
        }

        Ok(Self {
            header,
            header_size,
            font_data,
        })
    }

    /// The sfnt version tag the payload starts with.
    pub fn flavor(&self) -> FourCC {
        // parse guarantees at least MIN_SFNT_SIZE bytes
        Cursor::new(self.font_data).get_four_cc()
    }
}

/// Extracts the TTF/OpenType font wrapped by the EOT file in `input_buffer`.
///
/// Only uncompressed files (`Flags == 0`) are supported. The header is read in lenient-header
/// mode, see [`EotHeader::header_size`].
pub fn convert_eot_to_ttf(input_buffer: &[u8]) -> Result<Vec<u8>, ExtractError> {
    let font = EmbeddedFont::parse(input_buffer)?;

    let flavor = font.flavor();
    if !matches!(
        flavor,
        TTF_TRUE_TYPE_FLAVOR | TTF_CFF_FLAVOR | TTF_APPLE_TRUE_TYPE_FLAVOR | TTF_COLLECTION_FLAVOR
    ) {
        log::warn!("Embedded font has unknown sfnt version {:?}", flavor.0);
    }

    Ok(font.font_data.to_vec())
}
