//! TF-IDF vectorization over an article batch
//!
//! Tokenizes combined article text, builds a vocabulary with smoothed
//! inverse-document-frequency weights, and produces L2-normalized weight
//! rows so cosine similarity reduces to a dot product.

use std::collections::{HashMap, HashSet};

use ndarray::Array2;

/// Maximum vocabulary size; the most frequent terms are retained when the
/// batch produces more
pub const MAX_FEATURES: usize = 5000;

/// English stop words excluded from the vocabulary
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "upon", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Term-weight model built over one batch
///
/// Callers build it, transform the same batch, and drop it; nothing is
/// retained across recommendation calls.
pub struct TfidfVectorizer {
    /// term -> column index
    vocabulary: HashMap<String, usize>,
    /// smoothed IDF weight per column
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Build vocabulary and IDF weights from a batch of documents
    ///
    /// Returns `None` when no term survives tokenization (empty batch, or
    /// every token is a stop word). No model can be built then, and callers
    /// treat that as the degenerate empty-recommendation case.
    pub fn fit(documents: &[String], max_features: usize) -> Option<Self> {
        if documents.is_empty() || max_features == 0 {
            return None;
        }

        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Corpus-wide counts drive the vocabulary cap; document frequency
        // drives the IDF weights.
        let mut corpus_count: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                *corpus_count.entry(token.as_str()).or_insert(0) += 1;
            }
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if corpus_count.is_empty() {
            return None;
        }

        // Cap the vocabulary by descending corpus frequency; ties break
        // lexicographically so repeated fits of one batch agree.
        let mut terms: Vec<(&str, usize)> = corpus_count.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(max_features);
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let n_docs = documents.len() as f32;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, _)) in terms.iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            let df = doc_freq[term] as f32;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
        }

        Some(Self { vocabulary, idf })
    }

    /// Number of terms in the vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// TF-IDF weight matrix with one L2-normalized row per document
    ///
    /// Documents with no in-vocabulary term get an all-zero row.
    pub fn transform(&self, documents: &[String]) -> Array2<f32> {
        let mut matrix = Array2::<f32>::zeros((documents.len(), self.vocabulary.len()));

        for (row, document) in documents.iter().enumerate() {
            let mut tf: HashMap<&str, f32> = HashMap::new();
            let tokens = tokenize(document);
            for token in &tokens {
                *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
            }

            for (term, count) in tf {
                if let Some(&column) = self.vocabulary.get(term) {
                    matrix[(row, column)] = count * self.idf[column];
                }
            }

            let norm: f32 = matrix.row(row).dot(&matrix.row(row)).sqrt();
            if norm > 0.0 {
                matrix.row_mut(row).mapv_inplace(|w| w / norm);
            }
        }

        matrix
    }

    /// Fit on a batch and transform it in one step
    pub fn fit_transform(
        documents: &[String],
        max_features: usize,
    ) -> Option<(Self, Array2<f32>)> {
        let vectorizer = Self::fit(documents, max_features)?;
        let matrix = vectorizer.transform(documents);
        Some((vectorizer, matrix))
    }
}

/// Tokenize text: lowercase, split on non-alphanumeric boundaries, keep
/// tokens of two or more characters, drop stop words
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .filter(|t| !ENGLISH_STOP_WORDS.contains(t))
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn tokenize_lowercases_and_filters() {
        let tokens = tokenize("The Cats and dogs, at home!");
        assert_eq!(tokens, vec!["cats", "dogs", "home"]);
    }

    #[test]
    fn tokenize_drops_single_characters() {
        let tokens = tokenize("a b cd");
        assert_eq!(tokens, vec!["cd"]);
    }

    #[test]
    fn fit_empty_batch_yields_no_model() {
        assert!(TfidfVectorizer::fit(&[], MAX_FEATURES).is_none());
        assert!(TfidfVectorizer::fit(&docs(&["", "   "]), MAX_FEATURES).is_none());
        assert!(TfidfVectorizer::fit(&docs(&["the and of", "to be or"]), MAX_FEATURES).is_none());
    }

    #[test]
    fn rare_terms_weigh_more_than_common_ones() {
        let corpus = docs(&[
            "market news update",
            "market news report",
            "market earthquake",
        ]);
        let (vectorizer, _) = TfidfVectorizer::fit_transform(&corpus, MAX_FEATURES).unwrap();
        let idf_of = |term: &str| vectorizer.idf[vectorizer.vocabulary[term]];
        assert!(idf_of("earthquake") > idf_of("news"));
        assert!(idf_of("news") > idf_of("market"));
    }

    #[test]
    fn max_features_keeps_most_frequent_terms() {
        let corpus = docs(&["apple apple apple banana banana cherry"]);
        let vectorizer = TfidfVectorizer::fit(&corpus, 2).unwrap();
        assert_eq!(vectorizer.vocabulary_len(), 2);
        assert!(vectorizer.vocabulary.contains_key("apple"));
        assert!(vectorizer.vocabulary.contains_key("banana"));
        assert!(!vectorizer.vocabulary.contains_key("cherry"));
    }

    #[test]
    fn rows_are_unit_length_or_zero() {
        let corpus = docs(&["dogs pets home", "stock finance", ""]);
        let (_, matrix) = TfidfVectorizer::fit_transform(&corpus, MAX_FEATURES).unwrap();

        let norm0 = matrix.row(0).dot(&matrix.row(0)).sqrt();
        assert!((norm0 - 1.0).abs() < 1e-5);

        let norm2 = matrix.row(2).dot(&matrix.row(2)).sqrt();
        assert!(norm2.abs() < 1e-6, "empty document should get a zero row");
    }

    #[test]
    fn out_of_vocabulary_terms_are_ignored() {
        let corpus = docs(&["dogs pets"]);
        let vectorizer = TfidfVectorizer::fit(&corpus, MAX_FEATURES).unwrap();
        let matrix = vectorizer.transform(&docs(&["xyzzy quantum"]));
        assert!(matrix.row(0).iter().all(|w| *w == 0.0));
    }
}
