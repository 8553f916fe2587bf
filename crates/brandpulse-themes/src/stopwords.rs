//! Stopwords removed before counting themes.

use std::collections::HashSet;

/// NLTK English stopword list.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Social-post noise on top of the English list.
const SUPPLEMENTARY: &[&str] = &["rt", "via", "…", "...", "that's", "’", "‘", "“", "”"];

const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// English stopwords, the supplementary social set and every ASCII
/// punctuation character.
#[must_use]
pub fn stopwords() -> HashSet<String> {
    ENGLISH
        .iter()
        .chain(SUPPLEMENTARY)
        .map(ToString::to_string)
        .chain(PUNCTUATION.chars().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_english_supplementary_and_punctuation() {
        let words = stopwords();
        assert!(words.contains("the"));
        assert!(words.contains("wouldn't"));
        assert!(words.contains("rt"));
        assert!(words.contains("…"));
        assert!(words.contains("“"));
        assert!(words.contains("!"));
        assert!(words.contains("~"));
        assert!(!words.contains("yogurt"));
    }

    #[test]
    fn english_list_is_complete() {
        assert_eq!(ENGLISH.len(), 179);
        assert_eq!(PUNCTUATION.len(), 32);
    }
}
