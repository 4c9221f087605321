//! Types representing the Embedded OpenType header.

pub mod header;
