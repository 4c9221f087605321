use four_cc::FourCC;

pub const TTF_COLLECTION_FLAVOR: FourCC = FourCC(*b"ttcf");
pub const TTF_TRUE_TYPE_FLAVOR: FourCC = FourCC([0, 1, 0, 0]);
pub const TTF_APPLE_TRUE_TYPE_FLAVOR: FourCC = FourCC(*b"true");
pub const TTF_CFF_FLAVOR: FourCC = FourCC(*b"OTTO");

/// Bytes preceding the first name-size field (`FamilyNameSize`).
pub const EOT_FIXED_HEADER_SIZE: u32 = 54;
/// Smallest header region a usable EOT file can have.
pub const EOT_MIN_HEADER_SIZE: usize = 66;
/// Length of each `u16` size prefix in the variable part of the header.
pub const NAME_SIZE_FIELD_LEN: u32 = 2;
/// `EOTSize` and `FontDataSize`.
pub const EOT_SIZE_FIELDS_LEN: usize = 8;
pub const EOT_FLAGS_NONE: u32 = 0;

/// sfnt version (4 bytes) plus the four `u16` fields of the table directory header.
pub const MIN_SFNT_SIZE: usize = 12;
