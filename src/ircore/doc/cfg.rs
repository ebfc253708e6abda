use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::ircore::common::DEFAULT_KEYWORD_COUNT;
use super::DocumentFormat;

pub const CFG_NAME: &str = ".rrankcfg";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct RankCfg {
    // the one format a request accepts
    file_type: DocumentFormat,
    keyword_count: usize,
}

impl Default for RankCfg {
    fn default() -> Self {
        RankCfg {
            file_type: DocumentFormat::default(),
            keyword_count: DEFAULT_KEYWORD_COUNT,
        }
    }
}

impl RankCfg {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_str(cfg_str: &str) -> Self {
        match serde_yaml::from_str(cfg_str) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("invalid config, using defaults: {}", e);
                Self::new()
            }
        }
    }
    /// Reads `path`; a missing or unreadable file yields the defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(cfg_str) => Self::from_str(&cfg_str),
            Err(e) => {
                log::debug!("{}: {}, using default config", path.display(), e);
                Self::new()
            }
        }
    }
    pub fn with_file_type(mut self, file_type: DocumentFormat) -> Self {
        self.file_type = file_type;
        self
    }
    pub fn with_keyword_count(mut self, keyword_count: usize) -> Self {
        self.keyword_count = keyword_count;
        self
    }
    pub fn get_file_type(&self) -> DocumentFormat {
        self.file_type
    }
    pub fn get_keyword_count(&self) -> usize {
        self.keyword_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_syntax() {
        let cfg_str =
"file_type: text
keyword_count: 5
";
        let cfg = RankCfg::from_str(cfg_str);
        assert_eq!(cfg, RankCfg::new()
            .with_file_type(DocumentFormat::PlainText)
            .with_keyword_count(5));
    }

    #[test]
    fn test_defaults() {
        let cfg = RankCfg::from_str("keyword_count: 3\n");
        assert_eq!(cfg.get_file_type(), DocumentFormat::Pdf);
        assert_eq!(cfg.get_keyword_count(), 3);
        assert_eq!(RankCfg::from_str("file_type: docx\n"), RankCfg::new());
        assert_eq!(RankCfg::from_str(""), RankCfg::new());
        assert_eq!(RankCfg::new().get_keyword_count(), 10);
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CFG_NAME);
        assert_eq!(RankCfg::load(&path), RankCfg::new());
        fs::write(&path, "file_type: pdf\nkeyword_count: 7\n").unwrap();
        assert_eq!(RankCfg::load(&path).get_keyword_count(), 7);
    }
}
