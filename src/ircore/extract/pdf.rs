use crate::ircore::error::ExtractError;
use super::TextExtractor;

const PDF_MAGIC: &[u8] = b"%PDF-";
// readers accept junk before the header as long as it starts in the first 1K
const HEADER_WINDOW: usize = 1024;

fn has_pdf_header(content: &[u8]) -> bool {
    content
        .windows(PDF_MAGIC.len())
        .take(HEADER_WINDOW)
        .any(|window| window == PDF_MAGIC)
}

/// PDF text through `pdf-extract`. Pages come out in page order, separated
/// by whitespace.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, content: &[u8]) -> Result<String, ExtractError> {
        if !has_pdf_header(content) {
            return Err(ExtractError::Backend("not a PDF document (missing %PDF header)".to_string()));
        }
        // extract_text_from_mem glues the last word of a page to the first of the next
        let pages = pdf_extract::extract_text_from_mem_by_pages(content)
            .map_err(|e| ExtractError::Backend(e.to_string()))?;
        Ok(pages.join(" ").trim().to_string())
    }
}
