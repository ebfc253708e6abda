//! Ranks resumes against a job description.
//!
//! Each document's text is extracted, tokenized and weighted with TF-IDF over
//! the batch; documents are then ordered by cosine similarity to the job
//! description and annotated with the keywords they share with it.

pub mod ircore;
