//! Cosine similarity calculations

use ndarray::ArrayView1;

/// Calculate cosine similarity between two weight vectors
///
/// Returns a value between 0.0 (no shared terms) and 1.0 (identical).
///
/// Formula: cos(θ) = (A · B) / (||A|| ||B||)
///
/// Defined as 0.0 when either vector has zero magnitude, e.g. an article
/// whose combined text is empty.
pub fn cosine_similarity(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f64 {
    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn identical_vectors() {
        let a = array![1.0_f32, 2.0, 3.0];
        let sim = cosine_similarity(a.view(), a.view());
        assert!((sim - 1.0).abs() < 1e-6, "identical vectors should have similarity ~1.0");
    }

    #[test]
    fn orthogonal_vectors() {
        let a = array![1.0_f32, 0.0, 0.0];
        let b = array![0.0_f32, 1.0, 0.0];
        let sim = cosine_similarity(a.view(), b.view());
        assert!(sim.abs() < 1e-6, "orthogonal vectors should have similarity ~0.0");
    }

    #[test]
    fn zero_vector_is_zero_not_nan() {
        let a = array![0.0_f32, 0.0, 0.0];
        let b = array![1.0_f32, 2.0, 3.0];
        assert_eq!(cosine_similarity(a.view(), b.view()), 0.0);
        assert_eq!(cosine_similarity(a.view(), a.view()), 0.0);
    }
}
