//! Epsilon-greedy: `1 - epsilon` on the preferred action, `epsilon` spread
//! uniformly over every action.

use explore_core::validate::ensure_non_empty;
use explore_core::{ExploreResult, Probability};
use tracing::trace;

/// Fill `pdf` with an epsilon-greedy distribution favoring `top_action`.
///
/// `top_action` past the end is clamped to the last action. `epsilon` is
/// not clamped to `[0, 1]`; the result sums to one regardless.
pub fn generate_epsilon_greedy<T: Probability>(
    epsilon: T,
    top_action: usize,
    pdf: &mut [T],
) -> ExploreResult<()> {
    let num_actions = pdf.len();
    ensure_non_empty(num_actions)?;

    let top_action = top_action.min(num_actions - 1);
    let prob = epsilon / T::from_usize(num_actions);

    pdf.fill(prob);
    pdf[top_action] += T::one() - epsilon;

    trace!(num_actions, top_action, "epsilon-greedy pdf generated");
    Ok(())
}
