//! Entry points addressed by `begin..end` spans over caller buffers.
//!
//! Every span is checked against its buffer before any write; a span whose
//! end precedes its begin, or runs past the buffer, is `BadRange`.

use std::ops::Range;

use explore_core::validate::{checked_slice, checked_slice_mut};
use explore_core::{ExploreResult, Probability, Thresholds};

use crate::{bag, epsilon_greedy, min_prob, softmax};

pub fn generate_epsilon_greedy<T: Probability>(
    epsilon: T,
    top_action: usize,
    pdf: &mut [T],
    pdf_range: Range<usize>,
) -> ExploreResult<()> {
    let pdf = checked_slice_mut(pdf, pdf_range)?;
    epsilon_greedy::generate_epsilon_greedy(epsilon, top_action, pdf)
}

pub fn generate_softmax<T: Probability>(
    lambda: T,
    scores: &[T],
    scores_range: Range<usize>,
    pdf: &mut [T],
    pdf_range: Range<usize>,
) -> ExploreResult<()> {
    let scores = checked_slice(scores, scores_range)?;
    let pdf = checked_slice_mut(pdf, pdf_range)?;
    softmax::generate_softmax(lambda, scores, pdf)
}

pub fn generate_bag<T: Probability>(
    vote_counts: &[u32],
    votes_range: Range<usize>,
    pdf: &mut [T],
    pdf_range: Range<usize>,
) -> ExploreResult<()> {
    let vote_counts = checked_slice(vote_counts, votes_range)?;
    let pdf = checked_slice_mut(pdf, pdf_range)?;
    bag::generate_bag(vote_counts, pdf)
}

pub fn enforce_minimum_probability<T: Probability>(
    min_prob: T,
    update_zero_elements: bool,
    pdf: &mut [T],
    pdf_range: Range<usize>,
) -> ExploreResult<()> {
    enforce_minimum_probability_with(
        &Thresholds::default(),
        min_prob,
        update_zero_elements,
        pdf,
        pdf_range,
    )
}

pub fn enforce_minimum_probability_with<T: Probability>(
    thresholds: &Thresholds,
    min_prob: T,
    update_zero_elements: bool,
    pdf: &mut [T],
    pdf_range: Range<usize>,
) -> ExploreResult<()> {
    let pdf = checked_slice_mut(pdf, pdf_range)?;
    min_prob::enforce_minimum_probability_with(thresholds, min_prob, update_zero_elements, pdf)
}

#[cfg(test)]
#[allow(clippy::reversed_empty_ranges)]
mod tests {
    use super::*;
    use explore_core::ExploreError;

    #[test]
    fn test_epsilon_greedy_writes_only_the_span() {
        let mut buf = [-1.0f64; 5];
        generate_epsilon_greedy(0.0, 0, &mut buf, 1..3).unwrap();
        assert_eq!(buf, [-1.0, 1.0, 0.0, -1.0, -1.0]);
    }

    #[test]
    fn test_reversed_span_is_bad_range() {
        let mut buf = [0.5f32; 4];
        let err = generate_epsilon_greedy(0.1, 0, &mut buf, 3..1).unwrap_err();
        assert_eq!(
            err,
            ExploreError::BadRange {
                begin: 3,
                end: 1,
                len: 4
            }
        );
        assert_eq!(buf, [0.5; 4]);
    }

    #[test]
    fn test_span_past_end_is_bad_range() {
        let mut buf = [0.5f32; 4];
        assert!(matches!(
            enforce_minimum_probability(0.1, true, &mut buf, 0..6),
            Err(ExploreError::BadRange { .. })
        ));
        assert_eq!(buf, [0.5; 4]);
    }

    #[test]
    fn test_empty_span_is_empty_distribution() {
        let mut buf = [0.5f64; 4];
        assert_eq!(
            enforce_minimum_probability(0.1, true, &mut buf, 2..2),
            Err(ExploreError::EmptyDistribution)
        );
        assert_eq!(
            generate_epsilon_greedy(0.1, 0, &mut buf, 4..4),
            Err(ExploreError::EmptyDistribution)
        );
        assert_eq!(buf, [0.5; 4]);
    }

    #[test]
    fn test_softmax_bad_scores_span_leaves_pdf_untouched() {
        let scores = [1.0f64, 2.0, 3.0];
        let mut pdf = [0.25f64; 4];
        assert!(matches!(
            generate_softmax(1.0, &scores, 2..0, &mut pdf, 0..4),
            Err(ExploreError::BadRange { .. })
        ));
        assert_eq!(pdf, [0.25; 4]);
    }

    #[test]
    fn test_softmax_over_spans() {
        let scores = [0.0f64, 1.0, 2.0, 3.0];
        let mut pdf = [9.0f64; 5];
        generate_softmax(1.0, &scores, 1..4, &mut pdf, 1..5).unwrap();
        assert_eq!(pdf[0], 9.0);
        assert_eq!(pdf[4], 0.0);
        assert!((pdf[1] - 0.0900).abs() < 1e-4);
        assert!((pdf[3] - 0.6652).abs() < 1e-4);
    }

    #[test]
    fn test_bag_bad_votes_span() {
        let votes = [1u32, 2, 3];
        let mut pdf = [0.0f32; 3];
        assert!(matches!(
            generate_bag(&votes, 1..7, &mut pdf, 0..3),
            Err(ExploreError::BadRange { .. })
        ));
        assert_eq!(pdf, [0.0; 3]);
    }

    #[test]
    fn test_bag_over_spans() {
        let votes = [5u32, 1, 3];
        let mut pdf = [0.0f64; 3];
        generate_bag(&votes, 1..3, &mut pdf, 0..2).unwrap();
        assert_eq!(pdf, [0.25, 0.75, 0.0]);
    }
}
