//! The EOT header

use bytes::Buf;
use thiserror::Error;

use crate::{
    buffer_util::{BufExt, SafeBuf, TruncatedError},
    magic_numbers::{
        EOT_FIXED_HEADER_SIZE, EOT_FLAGS_NONE, EOT_MIN_HEADER_SIZE, NAME_SIZE_FIELD_LEN,
    },
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EotHeaderError {
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
    #[error("Truncated header")]
    Truncated,
}

impl From<TruncatedError> for EotHeaderError {
    fn from(TruncatedError: TruncatedError) -> Self {
        EotHeaderError::Truncated
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum EotVersion {
    V1 = 0x0001_0000,
    V2 = 0x0002_0000,
    /// Adds the `RootString` block after the name fields.
    V2_1 = 0x0002_0001,
}

impl EotVersion {
    pub fn has_root_string(self) -> bool {
        matches!(self, EotVersion::V2_1)
    }
}

impl TryFrom<u32> for EotVersion {
    type Error = EotHeaderError;
    fn try_from(value: u32) -> Result<Self, EotHeaderError> {
        match value {
            value if value == Self::V1 as u32 => Ok(Self::V1),
            value if value == Self::V2 as u32 => Ok(Self::V2),
            value if value == Self::V2_1 as u32 => Ok(Self::V2_1),
            _ => Err(EotHeaderError::UnsupportedVersion(value)),
        }
    }
}

/// Declared byte lengths of the four name blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameFieldSizes {
    pub family: u16,
    pub style: u16,
    pub version_name: u16,
    pub full_name: u16,
}

impl NameFieldSizes {
    fn iter(&self) -> impl Iterator<Item = u16> {
        [self.family, self.style, self.version_name, self.full_name].into_iter()
    }
}

/// The parts of an EOT header needed to locate the embedded font.
///
/// Bytes 16..54 (PANOSE, charset, weight, ranges, checksum adjustment and so on) are never
/// interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EotHeader {
    pub eot_size: u32,
    pub font_data_size: u32,
    pub version: EotVersion,
    pub flags: u32,
    pub name_field_sizes: NameFieldSizes,
    pub root_string_size: Option<u16>,
}

impl EotHeader {
    /// Reads the header from the start of an EOT file.
    ///
    /// `buffer` must hold the whole file: its remaining length is checked against `EOTSize`.
    pub fn from_buf(buffer: &mut impl Buf) -> Result<Self, EotHeaderError> {
        let file_len = buffer.remaining();
        if file_len < EOT_MIN_HEADER_SIZE {
            return Err(EotHeaderError::TooSmall(file_len));
        }

        let eot_size = buffer.try_get_u32_le()?;
        let font_data_size = buffer.try_get_u32_le()?;
        let version = buffer.try_get_u32_le()?;
        let flags = buffer.try_get_u32_le()?;

        if usize::try_from(eot_size).map_or(true, |size| size != file_len) {
            return Err(EotHeaderError::SizeMismatch {
                declared: eot_size,
                actual: file_len,
            });
        }
        if font_data_size > eot_size {
            return Err(EotHeaderError::FontDataTooLarge {
                font_data_size,
                eot_size,
            });
        }
        let version = EotVersion::try_from(version)?;
        if flags != EOT_FLAGS_NONE {
            return Err(EotHeaderError::UnsupportedFeatures(flags));
        }

        buffer.try_skip(EOT_FIXED_HEADER_SIZE as usize - 16)?;
        let name_field_sizes = NameFieldSizes {
            family: buffer.try_get_u16_le()?,
            style: buffer.try_get_u16_le()?,
            version_name: buffer.try_get_u16_le()?,
            full_name: buffer.try_get_u16_le()?,
        };
        let root_string_size = if version.has_root_string() {
            Some(buffer.try_get_u16_le()?)
        } else {
            None
        };

        Ok(Self {
            eot_size,
            font_data_size,
            version,
            flags,
            name_field_sizes,
            root_string_size,
        })
    }

    /// Header length implied by the name block sizes.
    pub fn declared_header_size(&self) -> u32 {
        let names: u32 = self
            .name_field_sizes
            .iter()
            .map(|size| NAME_SIZE_FIELD_LEN + u32::from(size))
            .sum();
        let root_string = self
            .root_string_size
            .map_or(0, |size| NAME_SIZE_FIELD_LEN + u32::from(size));
        EOT_FIXED_HEADER_SIZE + names + root_string
    }

    /// Header length implied by `EOTSize - FontDataSize`.
    ///
    /// `from_buf` guarantees `font_data_size <= eot_size`.
    pub fn expected_header_size(&self) -> u32 {
        self.eot_size.saturating_sub(self.font_data_size)
    }

    /// Offset of the font payload.
    ///
    /// Lenient-header mode: the name block sizes are advisory. When they disagree with the
    /// size arithmetic, `EOTSize - FontDataSize` wins.
    pub fn header_size(&self) -> u32 {
        let declared = self.declared_header_size();
        let expected = self.expected_header_size();
        if declared != expected {
            log::debug!(
                "Name fields declare a {} byte header, using {} from the size fields",
                declared,
                expected
            );
        }
        expected
    }
}
