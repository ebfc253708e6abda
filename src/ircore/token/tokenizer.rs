use std::collections::HashSet;
use once_cell::sync::Lazy;
use crate::ircore::common::Term;
use super::stopwords::STOPWORDS;

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    STOPWORDS.iter().copied().collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

// word characters are ASCII letters, digits and '_'; anything else
// that is not whitespace becomes a separator
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercases `text`, turns punctuation into spaces and collapses runs of
/// whitespace into single spaces.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        if is_word_char(c) {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.push(c);
        } else {
            pending_space = true;
        }
    }
    normalized
}

pub fn parse_tokens(normalized: &str) -> Vec<Term> {
    normalized
        .split(' ')
        .filter(|word| word.len() > 1 && !is_stopword(word))
        .map(|word| word.to_owned())
        .collect()
}

pub fn tokenize(text: &str) -> Vec<Term> {
    parse_tokens(&normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("!!! ?? ...").is_empty());
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(tokenize("The Quick, Quick fox!"), vec!["quick", "quick", "fox"]);
        assert_eq!(tokenize("Do you quarrel, sir?"), vec!["quarrel", "sir"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello,   WORLD!  "), "hello world");
        assert_eq!(normalize("snake_case stays"), "snake_case stays");
        assert_eq!(normalize("tab\tand\nnewline"), "tab and newline");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_punctuation_splits_words() {
        assert_eq!(tokenize("C++ and C# developer"), vec!["developer"]);
        assert_eq!(tokenize("co-operate"), vec!["co", "operate"]);
        assert_eq!(tokenize("jane.doe@mail.com"), vec!["jane", "doe", "mail", "com"]);
        assert_eq!(tokenize("Python 3.10"), vec!["python", "10"]);
    }

    #[test]
    fn test_stopwords_and_short_terms() {
        assert!(is_stopword("the"));
        assert!(is_stopword("yourselves"));
        assert!(!is_stopword("python"));
        // "it's" splits into "it" (stopword) and "s" (too short)
        assert!(tokenize("It's a I").is_empty());
        assert_eq!(tokenize("x y zz"), vec!["zz"]);
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        assert_eq!(tokenize("café résumé"), vec!["caf", "sum"]);
        assert_eq!(tokenize("滚滚长江"), Vec::<Term>::new());
    }
}
