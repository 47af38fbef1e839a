use crate::{
    cursor::Src,
    error::{Result, ResultExt},
    tag::Tag,
};

/// Tag type of DefineBinaryData.
pub const BINARY_TYPE: u16 = 87;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefineBinaryDataTag<'a> {
    pub tag_type: u16,
    /// Length of the whole tag content, header fields included.
    pub length: usize,
    pub id: u16,
    pub data: &'a [u8],
}

/// Decodes the content of a DefineBinaryData tag: a u16 character id, a
/// reserved u32 and the payload, which runs to the end of the tag.
pub fn parse_binary_tag<'a>(tag: &Tag<'a>) -> Result<DefineBinaryDataTag<'a>> {
    let mut src = Src::new(tag.content);

    let id = src.read_ui16().context("read character id")?;
    src.seek_ui32().context("seek reserved field")?;

    Ok(DefineBinaryDataTag {
        tag_type: tag.tag_type,
        length: tag.content.len(),
        id,
        data: src.rest(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary_tag() {
        let content = [0x2A, 0x00, 0xDE, 0xAD, 0xBE, 0xEF, b'h', b'i'];
        let tag = Tag {
            tag_type: BINARY_TYPE,
            content: &content,
        };

        let binary = parse_binary_tag(&tag).unwrap();
        assert_eq!(binary.tag_type, BINARY_TYPE);
        assert_eq!(binary.length, 8);
        assert_eq!(binary.id, 42);
        assert_eq!(binary.data, b"hi");
    }

    #[test]
    fn test_empty_payload() {
        let content = [0x01, 0x01, 0x00, 0x00, 0x00, 0x00];
        let tag = Tag {
            tag_type: BINARY_TYPE,
            content: &content,
        };

        let binary = parse_binary_tag(&tag).unwrap();
        assert_eq!(binary.id, 0x0101);
        assert!(binary.data.is_empty());
    }

    #[test]
    fn test_short_content() {
        let content = [0x01];
        let tag = Tag {
            tag_type: BINARY_TYPE,
            content: &content,
        };
        let err = parse_binary_tag(&tag).unwrap_err();
        assert!(err.is_overflow());
        assert!(err.to_string().starts_with("failed to read character id"));

        let content = [0x01, 0x00, 0x00, 0x00, 0x00];
        let tag = Tag {
            tag_type: BINARY_TYPE,
            content: &content,
        };
        let err = parse_binary_tag(&tag).unwrap_err();
        assert!(err.to_string().starts_with("failed to seek reserved field"));
    }
}
