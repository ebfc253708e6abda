use crate::ircore::common::{count_terms, Term};

/// Terms shared by a document and the query, most salient first.
///
/// Salience is `query_freq * document_freq`; equal weights keep the order in
/// which the terms first appear in the document. At most `count` terms are
/// returned.
pub fn top_keywords(document_terms: &[Term], query_terms: &[Term], count: usize) -> Vec<Term> {
    let document_freq = count_terms(document_terms);
    let query_freq = count_terms(query_terms);

    let mut common: Vec<(&Term, u64)> = document_freq
        .iter()
        .filter_map(|(term, &df)| {
            query_freq
                .get(term)
                .map(|&qf| (term, u64::from(qf) * u64::from(df)))
        })
        .collect();
    common.sort_by(|a, b| b.1.cmp(&a.1));

    common
        .into_iter()
        .take(count)
        .map(|(term, _)| term.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::common::DEFAULT_KEYWORD_COUNT;
    use crate::ircore::token::tokenize;

    #[test]
    fn test_shared_terms_by_weight() {
        let resume = tokenize("python python data scientist chef python data");
        let job = tokenize("senior python data scientist role data");
        // python 3*1, data 2*2, scientist 1*1
        assert_eq!(top_keywords(&resume, &job, DEFAULT_KEYWORD_COUNT),
            vec!["data", "python", "scientist"]);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let resume = tokenize("kubernetes golang docker");
        let job = tokenize("docker golang kubernetes");
        assert_eq!(top_keywords(&resume, &job, 10), vec!["kubernetes", "golang", "docker"]);
    }

    #[test]
    fn test_count_cap() {
        let resume = tokenize("aa bb cc dd ee ff gg hh ii jj kk ll");
        let job = tokenize("ll kk jj ii hh gg ff ee dd cc bb aa");
        let keywords = top_keywords(&resume, &job, DEFAULT_KEYWORD_COUNT);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords.first().map(|s| s.as_str()), Some("aa"));
        assert_eq!(top_keywords(&resume, &job, 3).len(), 3);
        assert!(top_keywords(&resume, &job, 0).is_empty());
        for keyword in keywords {
            assert!(resume.contains(&keyword));
            assert!(job.contains(&keyword));
        }
    }

    #[test]
    fn test_nothing_shared() {
        let resume = tokenize("chef baking pastry");
        let job = tokenize("senior python data scientist role");
        assert!(top_keywords(&resume, &job, 10).is_empty());
        assert!(top_keywords(&[], &job, 10).is_empty());
        assert!(top_keywords(&resume, &[], 10).is_empty());
    }
}
