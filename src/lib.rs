//! Converts a YAML document into JSON written next to the original file.

pub mod convert;
pub mod decode;
pub mod error;
pub mod transcode;

pub use convert::{convert, convert_with, output_path};
pub use decode::{default_decoder, Decoder, DocumentValue, PortableDecoder};
#[cfg(feature = "accelerated")]
pub use decode::AcceleratedDecoder;
pub use error::{DecodeError, Error};
