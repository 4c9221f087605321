#![doc = include_str!("../readme.md")]
pub mod eot;
pub mod extract;
pub mod rebuild;

#[cfg(feature = "cli")]
pub mod cli;

mod buffer_util;
mod magic_numbers;

#[cfg(test)]
mod test_resources;

pub use extract::{convert_eot_to_ttf, EmbeddedFont, ExtractError};
pub use rebuild::{convert_ttf_to_eot, RebuildError};
