pub mod vsm;

use serde::{Serialize, Deserialize};
use crate::ircore::common::Term;
use crate::ircore::error::RankError;

pub use vsm::VectorSpaceModel;

/// Similarity of one document (by submission index) to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocScore {
    pub index: usize,
    pub score: f64,
}

/// One row of the ranking presented to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    // percentage, 0..=100
    pub score: f64,
    pub keywords: Vec<Term>,
}

impl RankedResult {
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Sorts descending by score. The sort is stable, so documents with equal
/// scores keep their submission order.
pub fn sort_scores(scores: &mut [DocScore]) -> Result<(), RankError> {
    if let Some(bad) = scores.iter().find(|s| !s.score.is_finite()) {
        return Err(RankError::Computation(format!(
            "non-finite similarity for document #{}", bad.index + 1)));
    }
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(())
}
