use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::task::JoinSet;
use crate::ircore::common::Term;
use crate::ircore::doc::cfg::RankCfg;
use crate::ircore::doc::SourceDocument;
use crate::ircore::error::{ExtractError, RankError};
use crate::ircore::extract::{self, ExtractorRegistry, TextExtractor};
use crate::ircore::keywords::top_keywords;
use crate::ircore::ranking::{RankedResult, VectorSpaceModel};
use crate::ircore::tfidf::build_vectors;
use crate::ircore::token::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Processing,
}

/// Runs ranking requests. Keeps only its status and the message of the last
/// failure; every request starts from an empty result set.
pub struct Ranker {
    registry: Arc<ExtractorRegistry>,
    cfg: RankCfg,
    status: Status,
    error: Option<String>,
}

fn validate(document_count: usize, query: &str) -> Result<(), RankError> {
    if document_count == 0 {
        return Err(RankError::Validation("Please upload at least one resume.".to_string()));
    }
    if query.trim().is_empty() {
        return Err(RankError::Validation("Please enter a job description.".to_string()));
    }
    Ok(())
}

/// Tokenizes already extracted texts and ranks them against `query`.
/// `named_texts` holds (document name, text) pairs in submission order.
pub fn rank_texts(
    named_texts: Vec<(String, String)>,
    query: &str,
    keyword_count: usize,
) -> Result<Vec<RankedResult>, RankError> {
    validate(named_texts.len(), query)?;
    let query_terms = tokenize(query);
    let (names, documents): (Vec<String>, Vec<Vec<Term>>) = named_texts
        .into_iter()
        .map(|(name, text)| (name, tokenize(&text)))
        .unzip();

    let space = build_vectors(&documents, &query_terms)?;
    let scores = space.rank_cosine(100.0)?;
    let results = scores
        .into_iter()
        .map(|doc_score| RankedResult {
            name: names[doc_score.index].clone(),
            score: doc_score.score,
            keywords: top_keywords(&documents[doc_score.index], &query_terms, keyword_count),
        })
        .collect();
    Ok(results)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// One blocking task per document. The first failure returns at once: tasks
// not yet started are cancelled, running ones finish and their text is dropped.
async fn extract_all(
    extractor: Arc<dyn TextExtractor>,
    documents: Vec<SourceDocument>,
) -> Result<Vec<(String, String)>, RankError> {
    let count = documents.len();
    let mut tasks = JoinSet::new();
    for (index, doc) in documents.into_iter().enumerate() {
        let extractor = Arc::clone(&extractor);
        let (name, content) = doc.into_parts();
        tasks.spawn_blocking(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(&content)))
                .unwrap_or_else(|payload| Err(ExtractError::Panicked(panic_message(&*payload))));
            (index, name, result)
        });
    }

    let mut texts: Vec<Option<(String, String)>> = vec![None; count];
    while let Some(joined) = tasks.join_next().await {
        let (index, name, result) = joined
            .map_err(|e| RankError::Computation(format!("extraction task failed: {}", e)))?;
        match result {
            Ok(text) => {
                log::debug!("{}: extracted {} bytes of text", name, text.len());
                texts[index] = Some((name, text));
            }
            Err(cause) => {
                tasks.abort_all();
                return Err(RankError::Extraction { name, cause });
            }
        }
    }
    texts
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| RankError::Computation("missing extraction result".to_string()))
}

impl Ranker {
    /// A ranker over the process-wide extractor registry.
    pub fn new(cfg: RankCfg) -> Self {
        Self::with_registry(cfg, extract::global())
    }

    pub fn with_registry(cfg: RankCfg, registry: Arc<ExtractorRegistry>) -> Self {
        Ranker {
            registry,
            cfg,
            status: Status::Idle,
            error: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.registry.is_ready(self.cfg.get_file_type())
    }

    pub fn get_config(&self) -> &RankCfg {
        &self.cfg
    }

    // checks run in order: input presence, file formats, backend readiness
    fn check(
        &self,
        documents: &[SourceDocument],
        query: &str,
    ) -> Result<Arc<dyn TextExtractor>, RankError> {
        validate(documents.len(), query)?;
        let format = self.cfg.get_file_type();
        let unsupported: Vec<String> = documents
            .iter()
            .filter(|doc| doc.format() != Some(format))
            .map(|doc| doc.get_name().to_string())
            .collect();
        if !unsupported.is_empty() {
            return Err(RankError::UnsupportedFormat { format, files: unsupported });
        }
        self.registry
            .get(format)
            .ok_or(RankError::DependencyUnavailable { format })
    }

    fn fail(&mut self, e: RankError) -> RankError {
        log::error!("{}", e);
        self.error = Some(e.to_string());
        e
    }

    /// Ranks `documents` against the job description `query`, best match
    /// first. Any failure fails the whole request.
    pub async fn rank(
        &mut self,
        documents: Vec<SourceDocument>,
        query: &str,
    ) -> Result<Vec<RankedResult>, RankError> {
        self.error = None;
        let extractor = match self.check(&documents, query) {
            Ok(extractor) => extractor,
            Err(e) => return Err(self.fail(e)),
        };

        self.status = Status::Processing;
        log::info!("ranking {} documents", documents.len());
        let result = match extract_all(extractor, documents).await {
            Ok(named_texts) => rank_texts(named_texts, query, self.cfg.get_keyword_count()),
            Err(e) => Err(e),
        };
        self.status = Status::Idle;
        result.map_err(|e| self.fail(e))
    }
}
