//! Interface for wrapping a font in an existing EOT header

use std::io::Cursor;

use thiserror::Error;

use crate::{
    buffer_util::{put_u32_le_at, BufExt, SafeBuf, TruncatedError},
    magic_numbers::EOT_SIZE_FIELDS_LEN,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RebuildError {
    #[error("Malformed template: {0}")]
    MalformedTemplate(String),
    #[error("Font of {0} bytes does not fit in an EOT file")]
    FontTooLarge(usize),
}

impl From<TruncatedError> for RebuildError {
    fn from(TruncatedError: TruncatedError) -> Self {
        RebuildError::MalformedTemplate("missing EOTSize and FontDataSize".to_string())
    }
}

/// Wraps `font` in the header of the EOT file `template`.
///
/// The template's header region (`EOTSize - FontDataSize` bytes) is copied verbatim and only
/// its `EOTSize` and `FontDataSize` fields are rewritten for the new font.
///
/// Unlike [`convert_eot_to_ttf`](crate::convert_eot_to_ttf), the template is trusted: its
/// version, flags and name fields are not checked, and neither is `font`. Names, PANOSE,
/// weight and checksum adjustment are carried over from the template even when they describe
/// a different font.
pub fn convert_ttf_to_eot(template: &[u8], font: &[u8]) -> Result<Vec<u8>, RebuildError> {
    let mut buffer = Cursor::new(template);
    let eot_size = buffer.try_get_u32_le()?;
    let font_data_size = buffer.try_get_u32_le()?;

    let header_len = eot_size.checked_sub(font_data_size).ok_or_else(|| {
        RebuildError::MalformedTemplate(format!(
            "font data size {} exceeds EOT size {}",
            font_data_size, eot_size
        ))
    })? as usize;
    if header_len < EOT_SIZE_FIELDS_LEN {
        return Err(RebuildError::MalformedTemplate(format!(
            "header region of {} bytes cannot hold its own size fields",
            header_len
        )));
    }

    let new_font_size =
        u32::try_from(font.len()).map_err(|_| RebuildError::FontTooLarge(font.len()))?;
    let new_eot_size = u32::try_from(header_len)
        .ok()
        .and_then(|len| len.checked_add(new_font_size))
        .ok_or(RebuildError::FontTooLarge(font.len()))?;

    let mut out_buffer = Vec::with_capacity(header_len + font.len());
    Cursor::new(template)
        .try_copy_to_buf(&mut out_buffer, header_len)
        .map_err(|TruncatedError| {
            RebuildError::MalformedTemplate(format!(
                "{} bytes is shorter than the {} byte header region",
                template.len(),
                header_len
            ))
        })?;
    put_u32_le_at(&mut out_buffer, 0, new_eot_size);
    put_u32_le_at(&mut out_buffer, 4, new_font_size);
    out_buffer.extend_from_slice(font);

    log::debug!(
        "Rebuilt EOT with {} byte header and {} byte font",
        header_len,
        new_font_size
    );
    Ok(out_buffer)
}
