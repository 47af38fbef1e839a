use std::io::Read;

use log::debug;

use crate::{
    binary_data::{parse_binary_tag, BINARY_TYPE},
    cursor::Src,
    error::{Error, Result, ResultExt},
    header::{parse_header, Compression},
    inflate::inflate,
    tag::Tags,
};

/// Summary of one DefineBinaryData tag, as listed by [`binary_assets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetInfo {
    pub id: u16,
    pub data_len: usize,
    pub tag_len: usize,
}

/// Reads the whole stream into memory and looks up binary data `id` in it.
pub fn find_in_reader<R: Read>(reader: &mut R, id: u16) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(Error::Read)?;

    find(&input, id)
}

/// Returns the payload of the first DefineBinaryData tag whose id is `id`.
pub fn find(input: &[u8], id: u16) -> Result<Vec<u8>> {
    with_body(input, |body| {
        for tag in Tags::new(body) {
            let tag = tag?;
            if tag.tag_type != BINARY_TYPE {
                continue;
            }

            let binary = parse_binary_tag(&tag).context("parse binary tag")?;
            if binary.id == id {
                debug!("found binary data {}: {} bytes", id, binary.data.len());
                return Ok(binary.data.to_vec());
            }
        }

        Err(Error::NotFound { id })
    })
}

/// Lists every DefineBinaryData tag in stream order.
pub fn binary_assets(input: &[u8]) -> Result<Vec<AssetInfo>> {
    with_body(input, |body| {
        let mut assets = Vec::new();

        for tag in Tags::new(body) {
            let tag = tag?;
            if tag.tag_type != BINARY_TYPE {
                continue;
            }

            let binary = parse_binary_tag(&tag).context("parse binary tag")?;
            assets.push(AssetInfo {
                id: binary.id,
                data_len: binary.data.len(),
                tag_len: binary.length,
            });
        }

        Ok(assets)
    })
}

/// Parses the header and hands `f` a cursor over the tag stream, inflating
/// it first when the file is compressed. The inflated body only lives for
/// the duration of `f`.
fn with_body<T>(input: &[u8], f: impl FnOnce(Src<'_>) -> Result<T>) -> Result<T> {
    let mut src = Src::new(input);
    let compression = parse_header(&mut src).context("parse header")?;
    debug!("compression: {:?}", compression);

    match compression {
        Compression::Zlib => {
            let body = inflate(src.rest()).context("inflate body")?;
            debug!("inflated {} bytes into {}", src.remaining(), body.len());
            f(Src::new(&body))
        }
        Compression::Uncompressed => f(src),
        Compression::Unknown(sig) => Err(Error::UnknownCompression(sig)),
    }
}
