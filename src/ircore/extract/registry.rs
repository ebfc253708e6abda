use std::collections::HashMap;
use std::sync::{Arc, Once, PoisonError, RwLock};
use once_cell::sync::Lazy;
use crate::ircore::doc::DocumentFormat;
use super::pdf::PdfExtractor;
use super::text::PlainTextExtractor;
use super::TextExtractor;

/// Format -> backend map. Readiness of a format means a backend is
/// registered for it.
#[derive(Default)]
pub struct ExtractorRegistry {
    handlers: RwLock<HashMap<DocumentFormat, Arc<dyn TextExtractor>>>,
}

static GLOBAL: Lazy<Arc<ExtractorRegistry>> = Lazy::new(|| Arc::new(ExtractorRegistry::new()));

static INIT: Once = Once::new();

/// The process-wide registry. Empty until [`init`] runs.
pub fn global() -> Arc<ExtractorRegistry> {
    Arc::clone(&GLOBAL)
}

/// Registers the built-in backends in the process-wide registry. Runs once.
pub fn init() {
    INIT.call_once(|| {
        let registry = global();
        registry.register(DocumentFormat::Pdf, Arc::new(PdfExtractor));
        registry.register(DocumentFormat::PlainText, Arc::new(PlainTextExtractor));
        log::debug!("text extraction backends registered");
    });
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, format: DocumentFormat, handler: Arc<dyn TextExtractor>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.insert(format, handler);
    }

    pub fn get(&self, format: DocumentFormat) -> Option<Arc<dyn TextExtractor>> {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers.get(&format).cloned()
    }

    pub fn is_ready(&self, format: DocumentFormat) -> bool {
        self.get(format).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register() {
        let registry = ExtractorRegistry::new();
        assert!(!registry.is_ready(DocumentFormat::Pdf));
        assert!(registry.get(DocumentFormat::PlainText).is_none());
        registry.register(DocumentFormat::PlainText, Arc::new(PlainTextExtractor));
        assert!(registry.is_ready(DocumentFormat::PlainText));
        assert!(!registry.is_ready(DocumentFormat::Pdf));
        let handler = registry.get(DocumentFormat::PlainText).unwrap();
        assert_eq!(handler.extract(b"hello").unwrap(), "hello");
    }

    #[test]
    fn test_global_init() {
        init();
        init();
        assert!(global().is_ready(DocumentFormat::Pdf));
        assert!(global().is_ready(DocumentFormat::PlainText));
    }
}
