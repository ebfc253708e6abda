use crate::ircore::error::RankError;
use crate::ircore::tfidf::TfIdfSpace;
use crate::ircore::utils::sparse_vector::SparseVectorOp;
use super::{sort_scores, DocScore};

pub trait VectorSpaceModel {
    // cosine similarity times `scale`, sorted best first
    fn rank_cosine(&self, scale: f64) -> Result<Vec<DocScore>, RankError>;
}

impl VectorSpaceModel for TfIdfSpace {
    // every document gets a score, including those sharing no term with
    // the query
    fn rank_cosine(&self, scale: f64) -> Result<Vec<DocScore>, RankError> {
        let query = self.query_vector();
        let mut scores: Vec<DocScore> = self
            .document_vectors()
            .iter()
            .enumerate()
            .map(|(index, doc)| DocScore { index, score: doc.vec_cosine(query) * scale })
            .collect();
        sort_scores(&mut scores)?;
        Ok(scores)
    }
}
