//! Top-K similar-article ranking

use ndarray::Array2;
use newsdeck_core::Article;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::cosine_similarity;
use crate::vectorizer::{TfidfVectorizer, MAX_FEATURES};

/// Default number of recommendations to return
pub const DEFAULT_K: usize = 5;

/// An article paired with its similarity to the selected one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedArticle {
    /// The recommended article
    pub article: Article,
    /// Cosine similarity score (0.0 - 1.0)
    pub score: f64,
}

/// Recommend the `k` articles most similar to the selected one
///
/// Builds a fresh TF-IDF model over the batch, ranks every other article by
/// cosine similarity to the article titled `selected_title` (first match in
/// batch order), and returns the top `k` in descending-similarity order.
/// Ties keep batch order. The selected article itself is never returned.
///
/// Degenerate inputs all produce an empty result rather than an error: an
/// unmatched title, a batch shorter than two, `k` of zero, or a batch whose
/// text is entirely empty or stop-worded.
pub fn recommend(batch: &[Article], selected_title: &str, k: usize) -> Vec<Article> {
    recommend_scored(batch, selected_title, k)
        .into_iter()
        .map(|ranked| ranked.article)
        .collect()
}

/// Like [`recommend`], keeping each article's similarity score
pub fn recommend_scored(batch: &[Article], selected_title: &str, k: usize) -> Vec<RankedArticle> {
    if batch.len() < 2 || k == 0 {
        return Vec::new();
    }

    let Some(selected) = batch.iter().position(|a| a.title == selected_title) else {
        debug!("No article titled {:?} in batch of {}", selected_title, batch.len());
        return Vec::new();
    };

    let texts: Vec<String> = batch.iter().map(|a| a.combined_text()).collect();
    let Some((vectorizer, matrix)) = TfidfVectorizer::fit_transform(&texts, MAX_FEATURES) else {
        debug!("Batch of {} has no usable text, nothing to rank", batch.len());
        return Vec::new();
    };

    debug!(
        "Ranking {} candidates against {:?} over a {}-term vocabulary",
        batch.len() - 1,
        selected_title,
        vectorizer.vocabulary_len()
    );

    rank(&matrix, selected, k)
        .into_iter()
        .map(|(index, score)| RankedArticle {
            article: batch[index].clone(),
            score,
        })
        .collect()
}

/// Rank every row but `selected` by similarity to it, descending
///
/// The sort is stable, so equal scores keep row (batch) order.
fn rank(matrix: &Array2<f32>, selected: usize, k: usize) -> Vec<(usize, f64)> {
    let mut scored: Vec<(usize, f64)> = (0..matrix.nrows())
        .filter(|&index| index != selected)
        .map(|index| {
            (
                index,
                cosine_similarity(matrix.row(selected), matrix.row(index)),
            )
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}
