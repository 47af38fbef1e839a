use crate::{
    cursor::Src,
    error::{Error, Result, ResultExt},
};

pub const SIG_UNCOMPRESSED: u8 = 0x46; // 'F'
pub const SIG_ZLIB: u8 = 0x43; // 'C'

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Uncompressed,
    Zlib,
    Unknown(u8),
}

impl From<u8> for Compression {
    fn from(signature: u8) -> Self {
        match signature {
            SIG_UNCOMPRESSED => Compression::Uncompressed,
            SIG_ZLIB => Compression::Zlib,
            other => Compression::Unknown(other),
        }
    }
}

/// Reads the signature, version and file length, leaving `src` at the first
/// byte after the fixed header.
pub fn parse_header(src: &mut Src) -> Result<Compression> {
    let sig1 = src.read_ui8().context("read signature")?;

    let compression = Compression::from(sig1);
    if let Compression::Unknown(sig) = compression {
        return Err(Error::UnsupportedSignature(sig));
    }

    src.seek_ui8().context("seek signature")?;
    src.seek_ui8().context("seek signature")?;
    src.seek_ui8().context("seek version")?;
    src.seek_ui32().context("seek file length")?;

    Ok(compression)
}

/// Skips the frame size, frame rate and frame count that follow the fixed
/// header in the (decompressed) body.
pub fn skip_frame_header(src: &mut Src) -> Result<()> {
    src.seek_rect().context("seek frame size")?;
    src.seek_ui16().context("seek frame rate")?;
    src.seek_ui16().context("seek frame count")?;

    Ok(())
}
