use log::trace;

use crate::{
    cursor::Src,
    error::{Result, ResultExt},
};

/// Length value in the short header that announces a 32-bit length.
pub const LONG_TAG_LENGTH: u16 = 0x3F;

/// One record of the tag stream. `content` borrows from the body being iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub tag_type: u16,
    pub content: &'a [u8],
}

pub fn parse_tag<'a>(src: &mut Src<'a>) -> Result<Tag<'a>> {
    // work on a copy so a truncated tag leaves `src` untouched
    let mut tag_src = src.clone();
    let start = tag_src.position();

    let tag_code_and_length = tag_src.read_ui16().context("read tag code and length")?;

    // upper 10 bits are the tag code, lower 6 bits the length
    let tag_type = tag_code_and_length >> 6;
    let mut length = (tag_code_and_length & LONG_TAG_LENGTH) as usize;

    if length == LONG_TAG_LENGTH as usize {
        length = tag_src.read_ui32().context("read long tag length")? as usize;
    }

    let content = tag_src.read(length).context("read tag content")?;

    trace!("tag {} at {:#x}, {} bytes", tag_type, start, length);

    *src = tag_src;
    Ok(Tag { tag_type, content })
}

/// Iterates the tags of a body in stream order.
///
/// At least one tag is always attempted, so an empty body yields a single
/// overflow error. After a tag is read the iterator stops once the body is
/// exhausted, and it yields nothing more after the first error.
pub struct Tags<'a> {
    src: Src<'a>,
    done: bool,
}

impl<'a> Tags<'a> {
    pub fn new(src: Src<'a>) -> Self {
        Self { src, done: false }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Result<Tag<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let tag = parse_tag(&mut self.src).context("parse tag");
        if tag.is_err() || self.src.eof() {
            self.done = true;
        }

        Some(tag)
    }
}
