//! Synthesized EOT files for the unit tests.

use bytes::BufMut;

pub const VERSION_1: u32 = 0x0001_0000;
pub const VERSION_2: u32 = 0x0002_0000;
pub const VERSION_2_1: u32 = 0x0002_0001;

/// A TrueType-flavored payload of `len` bytes; the bytes after the sfnt version count upwards.
pub fn sample_font(len: usize) -> Vec<u8> {
    let mut font: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
    let flavor = [0, 1, 0, 0];
    let prefix = len.min(flavor.len());
    font[..prefix].copy_from_slice(&flavor[..prefix]);
    font
}

/// Builds EOT buffers with a chosen header layout.
///
/// Bytes 16..54 are filled with a recognizable pattern so pass-through can be checked.
pub struct EotBuilder {
    pub version: u32,
    pub flags: u32,
    pub name_sizes: [u16; 4],
    pub root_string_size: Option<u16>,
    /// Length of the header region; defaults to the length the name sizes declare.
    pub header_len: Option<usize>,
}

impl Default for EotBuilder {
    fn default() -> Self {
        Self {
            version: VERSION_2,
            flags: 0,
            name_sizes: [4, 4, 4, 4],
            root_string_size: None,
            header_len: None,
        }
    }
}

impl EotBuilder {
    pub fn declared_header_len(&self) -> usize {
        let names: usize = self.name_sizes.iter().map(|&size| 2 + size as usize).sum();
        let root = self.root_string_size.map_or(0, |size| 2 + size as usize);
        54 + names + root
    }

    pub fn build(&self, font: &[u8]) -> Vec<u8> {
        let header_len = self.header_len.unwrap_or_else(|| self.declared_header_len());
        let mut eot = Vec::with_capacity(header_len + font.len());
        eot.put_u32_le((header_len + font.len()) as u32);
        eot.put_u32_le(font.len() as u32);
        eot.put_u32_le(self.version);
        eot.put_u32_le(self.flags);
        eot.extend((16u8..54).map(|b| b ^ 0xA5));
        for size in self.name_sizes {
            eot.put_u16_le(size);
        }
        if let Some(size) = self.root_string_size {
            eot.put_u16_le(size);
        }
        // a shorter header region cuts into the size fields
        eot.resize(header_len, 0);
        eot.extend_from_slice(font);
        eot
    }
}
