use std::io::Read;
use encoding_rs::ISO_8859_2;
use encoding_rs_io::DecodeReaderBytesBuilder;
use crate::ircore::error::ExtractError;
use super::TextExtractor;

/// Plain text files: UTF-8 (with or without BOM), falling back to
/// ISO-8859-2 for anything that is not valid UTF-8. A UTF-16 BOM wins over
/// the fallback.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    fn read_to_string_non_utf8_encoding(content: &[u8]) -> Result<String, ExtractError> {
        let mut dest = String::new();
        let mut decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(ISO_8859_2))
            .bom_override(true)
            .build(content);
        decoder.read_to_string(&mut dest)?;
        Ok(dest)
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, content: &[u8]) -> Result<String, ExtractError> {
        let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);
        match std::str::from_utf8(content) {
            Ok(text) => Ok(text.to_owned()),
            Err(_) => {
                log::debug!("content is not utf-8, decoding as ISO-8859-2");
                Self::read_to_string_non_utf8_encoding(content)
            }
        }
    }
}
