//! Softmax over action scores with inverse temperature `lambda`.

use explore_core::validate::ensure_non_empty;
use explore_core::{ExploreResult, Probability};
use tracing::trace;

/// Fill `pdf` with `softmax(lambda * scores)`.
///
/// When the lengths differ only the first `min(scores.len(), pdf.len())`
/// slots are scored and the rest of `pdf` is set to zero. Scores are shifted
/// by their maximum before exponentiation.
pub fn generate_softmax<T: Probability>(
    lambda: T,
    scores: &[T],
    pdf: &mut [T],
) -> ExploreResult<()> {
    let len = scores.len().min(pdf.len());
    ensure_non_empty(len)?;

    let (head, tail) = pdf.split_at_mut(len);
    tail.fill(T::zero());

    let scores = &scores[..len];
    let mut max_score = scores[0];
    for &s in &scores[1..] {
        if s > max_score {
            max_score = s;
        }
    }

    let mut norm = T::zero();
    for (d, &s) in head.iter_mut().zip(scores) {
        let prob = (lambda * (s - max_score)).exp();
        norm += prob;
        *d = prob;
    }

    for d in head.iter_mut() {
        *d /= norm;
    }

    trace!(num_actions = len, zero_filled = tail.len(), "softmax pdf generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_core::ExploreError;

    #[test]
    fn test_known_values() {
        let mut pdf = [0.0f32; 3];
        generate_softmax(1.0, &[1.0, 2.0, 3.0], &mut pdf).unwrap();
        let expected = [0.0900f32, 0.2447, 0.6652];
        for (a, e) in pdf.iter().zip(expected) {
            assert!((a - e).abs() < 1e-4, "{pdf:?}");
        }
    }

    #[test]
    fn test_lambda_zero_is_uniform() {
        let mut pdf = [0.0f64; 4];
        generate_softmax(0.0, &[5.0, -3.0, 0.0, 100.0], &mut pdf).unwrap();
        for p in pdf {
            assert!((p - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_large_scores_do_not_overflow() {
        let mut pdf = [0.0f32; 2];
        generate_softmax(1.0, &[1000.0, 1000.0], &mut pdf).unwrap();
        assert!((pdf[0] - 0.5).abs() < 1e-6);
        assert!((pdf[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_lambda_prefers_low_scores() {
        let mut pdf = [0.0f64; 3];
        generate_softmax(-1.0, &[1.0, 2.0, 3.0], &mut pdf).unwrap();
        assert!(pdf[0] > pdf[1] && pdf[1] > pdf[2]);
    }

    #[test]
    fn test_pdf_longer_than_scores_zero_fills_tail() {
        let mut pdf = [0.7f64; 5];
        generate_softmax(1.0, &[0.0, 0.0], &mut pdf).unwrap();
        assert_eq!(&pdf[2..], &[0.0, 0.0, 0.0]);
        assert!((pdf[0] - 0.5).abs() < 1e-12);
        assert!((pdf[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scores_longer_than_pdf_truncates() {
        let mut pdf = [0.0f64; 2];
        generate_softmax(1.0, &[1.0, 1.0, 50.0], &mut pdf).unwrap();
        assert!((pdf[0] - 0.5).abs() < 1e-12);
        assert!((pdf[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_scores_leave_pdf_untouched() {
        let mut pdf = [0.3f32; 3];
        assert_eq!(
            generate_softmax(1.0, &[], &mut pdf),
            Err(ExploreError::EmptyDistribution)
        );
        assert_eq!(pdf, [0.3; 3]);
    }

    #[test]
    fn test_empty_pdf() {
        let mut pdf: [f32; 0] = [];
        assert_eq!(
            generate_softmax(1.0, &[1.0], &mut pdf),
            Err(ExploreError::EmptyDistribution)
        );
    }
}
