//! Bagging: turn ensemble vote counts into a distribution.

use explore_core::validate::ensure_non_empty;
use explore_core::{ExploreResult, Probability};
use tracing::trace;

/// Fill `pdf` with `count / total` for each paired slot.
///
/// With no votes at all the first action gets probability one and every
/// other slot is zeroed. Otherwise pairing stops at the shorter of the two
/// sequences; slots of `pdf` past the end of `vote_counts` are not written.
pub fn generate_bag<T: Probability>(vote_counts: &[u32], pdf: &mut [T]) -> ExploreResult<()> {
    ensure_non_empty(pdf.len())?;

    let num_models: u64 = vote_counts.iter().map(|&c| u64::from(c)).sum();
    if num_models == 0 {
        pdf.fill(T::zero());
        pdf[0] = T::one();
        trace!(num_actions = pdf.len(), "bag pdf fell back to first action");
        return Ok(());
    }

    // divide only once the full total is known
    let total = T::from_u64(num_models);
    for (d, &count) in pdf.iter_mut().zip(vote_counts) {
        *d = T::from_u64(u64::from(count)) / total;
    }

    trace!(num_actions = pdf.len(), num_models, "bag pdf generated");
    Ok(())
}
