pub mod cfg;
pub mod dir;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "text")]
    PlainText,
}

impl DocumentFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_string_lossy().to_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "txt" | "text" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::PlainText => "plain text",
        }
    }
}

impl Default for DocumentFormat {
    fn default() -> Self {
        DocumentFormat::Pdf
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An uploaded document: its file name and raw bytes.
#[derive(PartialEq, Debug, Clone)]
pub struct SourceDocument {
    name: String,
    content: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        SourceDocument {
            name: name.into(),
            content,
        }
    }
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read(path)?;
        let name = match path.file_name() {
            Some(file_name) => file_name.to_string_lossy().to_string(),
            None => path.to_string_lossy().to_string(),
        };
        Ok(Self::new(name, content))
    }
    pub fn get_name(&self) -> &str {
        &self.name
    }
    pub fn get_content(&self) -> &[u8] {
        &self.content
    }
    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_name(&self.name)
    }
    pub(crate) fn into_parts(self) -> (String, Vec<u8>) {
        (self.name, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_document() {
        let doc = SourceDocument::new("Jane Doe.PDF", b"%PDF-1.4".to_vec());
        assert_eq!(doc.get_name(), "Jane Doe.PDF");
        assert_eq!(doc.get_content(), b"%PDF-1.4");
        assert_eq!(doc.format(), Some(DocumentFormat::Pdf));
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(DocumentFormat::from_name("cv.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_name("notes.txt"), Some(DocumentFormat::PlainText));
        assert_eq!(DocumentFormat::from_name("cv.docx"), None);
        assert_eq!(DocumentFormat::from_name("pdf"), None);
        assert_eq!(DocumentFormat::from_name(""), None);
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"rust engineer").unwrap();
        let doc = SourceDocument::load(&path).unwrap();
        assert_eq!(doc.get_name(), "resume.txt");
        assert_eq!(doc.get_content(), b"rust engineer");
        assert!(SourceDocument::load(&dir.path().join("missing.pdf")).is_err());
    }
}
