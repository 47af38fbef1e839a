//! Extracts DefineBinaryData payloads from SWF files by character id.

pub mod binary_data;
pub mod cursor;
pub mod error;
pub mod find;
pub mod header;
pub mod inflate;
pub mod tag;

pub use error::{Error, ErrorKind, Result};
pub use find::{binary_assets, find, find_in_reader, AssetInfo};
