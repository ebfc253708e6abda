use indexmap::IndexMap;

pub type Term = String;
// term -> occurrences, iterated in first-seen order
pub type TermFrequencyMap = IndexMap<Term, u32>;

pub const DEFAULT_KEYWORD_COUNT: usize = 10;

pub fn count_terms(terms: &[Term]) -> TermFrequencyMap {
    let mut term_freq = TermFrequencyMap::new();
    for term in terms {
        *term_freq.entry(term.clone()).or_insert(0) += 1;
    }
    term_freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_terms() {
        let terms: Vec<Term> = ["sir", "quarrel", "sir", "no"].iter().map(|s| s.to_string()).collect();
        let term_freq = count_terms(&terms);
        assert_eq!(term_freq.len(), 3);
        assert_eq!(term_freq.get("sir"), Some(&2));
        assert_eq!(term_freq.get("quarrel"), Some(&1));
        let order: Vec<&str> = term_freq.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["sir", "quarrel", "no"]);
        assert!(count_terms(&[]).is_empty());
    }
}
