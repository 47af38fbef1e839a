use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Forward-only read cursor over a byte slice. All reads are little-endian.
///
/// A read or skip that does not fit in the remaining bytes fails with
/// [`Error::Overflow`] and leaves the position where it was.
#[derive(Clone)]
pub struct Src<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Src<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.pos)
    }

    /// Everything from the current position to the end, without advancing.
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos.min(self.input.len())..]
    }

    pub fn seek_ui8(&mut self) -> Result<()> {
        self.skip(1)
    }

    pub fn seek_ui16(&mut self) -> Result<()> {
        self.skip(2)
    }

    pub fn seek_ui32(&mut self) -> Result<()> {
        self.skip(4)
    }

    /// Skip a packed RECT: a 5-bit field width `n` in the top bits of the
    /// first byte, followed by four `n`-bit fields.
    pub fn seek_rect(&mut self) -> Result<()> {
        self.ensure(1)?;

        let nbits = (self.input[self.pos] >> 3) as usize;
        let sum_bits = 5 + nbits * 4;
        let seek_bytes = sum_bits.div_ceil(8);

        self.skip(seek_bytes)
    }

    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let bytes = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_ui8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let byte = self.input[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_ui16(&mut self) -> Result<u16> {
        self.read(2).map(LittleEndian::read_u16)
    }

    pub fn read_ui32(&mut self) -> Result<u32> {
        self.read(4).map(LittleEndian::read_u32)
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(Error::Overflow {
                offset: self.pos,
                need: n,
                have: self.remaining(),
            });
        }
        Ok(())
    }
}
