use crate::ircore::common::Term;
use indexmap::IndexMap;

// absent terms have weight 0
pub type SparseVector = IndexMap<Term, f64>;

pub trait SparseVectorOp {
    fn vec_len(&self) -> f64;
    fn vec_set(&mut self, term: &str, value: f64) -> f64;
    fn vec_get(&self, term: &str) -> f64;
    fn vec_dot(&self, other: &SparseVector) -> f64;
    fn vec_cosine(&self, other: &SparseVector) -> f64;
}

impl SparseVectorOp for SparseVector {
    fn vec_len(&self) -> f64 {
        let mut length = 0.0f64;
        for v in self.values() {
            length += v * v;
        }
        length.sqrt()
    }
    fn vec_set(&mut self, term: &str, value: f64) -> f64 {
        *self.entry(term.to_owned()).or_insert(value)
    }
    fn vec_get(&self, term: &str) -> f64 {
        match self.get(term) {
            Some(value) => *value,
            None => f64::default(),
        }
    }
    fn vec_dot(&self, other: &SparseVector) -> f64 {
        let (sv1, sv2) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = 0.0f64;
        for (term, sv1_value) in sv1.iter() {
            if let Some(sv2_value) = sv2.get(term) {
                result += sv1_value * sv2_value;
            }
        }
        result
    }
    fn vec_cosine(&self, other: &SparseVector) -> f64 {
        let magnitude1 = self.vec_len();
        let magnitude2 = other.vec_len();
        if magnitude1 == 0.0 || magnitude2 == 0.0 {
            return 0.0;
        }
        self.vec_dot(other) / (magnitude1 * magnitude2)
    }
}
