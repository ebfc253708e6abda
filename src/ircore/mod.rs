pub mod common;
pub mod doc;
pub mod engine;
pub mod error;
pub mod export;
pub mod extract;
pub mod keywords;
pub mod ranking;
pub mod tfidf;
pub mod token;
pub mod utils;

pub use engine::{rank_texts, Ranker, Status};
pub use error::{ExtractError, RankError};
pub use ranking::RankedResult;
