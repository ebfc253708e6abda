use indexmap::IndexMap;
use crate::ircore::common::{count_terms, Term, TermFrequencyMap};
use crate::ircore::error::RankError;
use crate::ircore::utils::sparse_vector::SparseVector;

// stands in for a zero document frequency of query-only terms
const MIN_DOCUMENT_FREQUENCY: f64 = 0.01;

/// TF-IDF weights of one ranking request. Nothing here outlives the request.
#[derive(Debug, Clone)]
pub struct TfIdfSpace {
    // term -> number of documents containing it
    document_frequency: IndexMap<Term, u32>,
    // term universe (documents, then query) -> idf
    idf: IndexMap<Term, f64>,
    documents: Vec<SparseVector>,
    query: SparseVector,
}

impl TfIdfSpace {
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
    pub fn document_vectors(&self) -> &[SparseVector] {
        &self.documents
    }
    pub fn query_vector(&self) -> &SparseVector {
        &self.query
    }
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }
    pub fn universe(&self) -> impl Iterator<Item = &Term> {
        self.idf.keys()
    }
}

fn weigh(term_freq: &TermFrequencyMap, idf: &IndexMap<Term, f64>) -> SparseVector {
    let mut vector = SparseVector::with_capacity(term_freq.len());
    for (term, &tf) in term_freq {
        let weight = idf.get(term).copied().unwrap_or(0.0);
        vector.insert(term.clone(), tf as f64 * weight);
    }
    vector
}

/// Builds one TF-IDF space over `documents` plus `query`.
///
/// `idf(t) = ln(1 + N / max(df(t), 0.01))` with N the number of documents;
/// the query does not count towards document frequency.
pub fn build_vectors(documents: &[Vec<Term>], query: &[Term]) -> Result<TfIdfSpace, RankError> {
    if documents.is_empty() {
        return Err(RankError::Computation("cannot vectorize an empty corpus".to_string()));
    }
    let document_term_freqs: Vec<TermFrequencyMap> =
        documents.iter().map(|doc| count_terms(doc)).collect();
    let query_term_freq = count_terms(query);

    let mut document_frequency: IndexMap<Term, u32> = IndexMap::new();
    for term_freq in &document_term_freqs {
        for term in term_freq.keys() {
            *document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
    }

    let total_docs = documents.len() as f64;
    let mut idf: IndexMap<Term, f64> = IndexMap::with_capacity(document_frequency.len());
    let universe = document_frequency.keys().chain(query_term_freq.keys());
    for term in universe {
        if idf.contains_key(term) {
            continue;
        }
        let df = document_frequency.get(term).map_or(0.0, |&n| n as f64);
        idf.insert(term.clone(), (1.0 + total_docs / df.max(MIN_DOCUMENT_FREQUENCY)).ln());
    }

    let document_vectors = document_term_freqs.iter().map(|tf| weigh(tf, &idf)).collect();
    let query_vector = weigh(&query_term_freq, &idf);
    log::debug!("tf-idf space: {} documents, {} terms", documents.len(), idf.len());

    Ok(TfIdfSpace {
        document_frequency,
        idf,
        documents: document_vectors,
        query: query_vector,
    })
}
