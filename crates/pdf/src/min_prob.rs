//! Minimum-probability enforcement over an existing distribution.
//!
//! `min_prob` is the total floor mass; each eligible action is guaranteed
//! `min_prob / N`. Actions at zero are eligible only when
//! `update_zero_elements` is set.

use explore_core::validate::ensure_non_empty;
use explore_core::{ExploreResult, Probability, Thresholds};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Parameters of one enforcement pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumProbability {
    pub min_prob: f64,
    #[serde(default)]
    pub update_zero_elements: bool,
}

impl MinimumProbability {
    pub fn new(min_prob: f64, update_zero_elements: bool) -> Self {
        Self {
            min_prob,
            update_zero_elements,
        }
    }

    pub fn apply<T: Probability>(&self, thresholds: &Thresholds, pdf: &mut [T]) -> ExploreResult<()> {
        enforce_minimum_probability_with(
            thresholds,
            T::from_f64(self.min_prob),
            self.update_zero_elements,
            pdf,
        )
    }
}

/// Enforce a probability floor using the default thresholds.
pub fn enforce_minimum_probability<T: Probability>(
    min_prob: T,
    update_zero_elements: bool,
    pdf: &mut [T],
) -> ExploreResult<()> {
    enforce_minimum_probability_with(&Thresholds::default(), min_prob, update_zero_elements, pdf)
}

/// Enforce a probability floor of `min_prob / N` on every eligible action,
/// rescaling the remaining actions so the distribution still sums to one.
pub fn enforce_minimum_probability_with<T: Probability>(
    thresholds: &Thresholds,
    min_prob: T,
    update_zero_elements: bool,
    pdf: &mut [T],
) -> ExploreResult<()> {
    let num_actions = pdf.len();
    ensure_non_empty(num_actions)?;

    let eligible = |p: T| p > T::zero() || (update_zero_elements && p == T::zero());

    if min_prob > T::from_f64(thresholds.uniform) {
        let support = pdf.iter().filter(|&&p| eligible(p)).count();
        if support == 0 {
            debug!(num_actions, "uniform exploration requested over empty support");
            return Ok(());
        }
        let prob = T::one() / T::from_usize(support);
        for d in pdf.iter_mut().filter(|d| eligible(**d)) {
            *d = prob;
        }
        trace!(num_actions, support, "uniform exploration applied");
        return Ok(());
    }

    let floor = min_prob / T::from_usize(num_actions);
    let mut touched = 0usize;
    let mut untouched_mass = T::zero();

    for d in pdf.iter_mut() {
        if eligible(*d) && *d <= floor {
            *d = floor;
            touched += 1;
        } else {
            untouched_mass += *d;
        }
    }

    let touched_mass = floor * T::from_usize(touched);
    if touched == 0 || touched_mass <= T::zero() {
        return Ok(());
    }

    if touched_mass > T::from_f64(thresholds.saturation) {
        // Touched entries sit exactly at `floor`; untouched ones are either
        // strictly above it or ineligible, so equality identifies the set.
        let refloor = (T::one() - untouched_mass) / T::from_usize(touched);
        for d in pdf.iter_mut().filter(|d| **d == floor) {
            *d = refloor;
        }
        debug!(
            num_actions,
            touched,
            touched_mass = touched_mass.to_f64(),
            floor = refloor.to_f64(),
            "floor saturated, re-derived from untouched mass"
        );
    } else if untouched_mass > T::zero() {
        let ratio = (T::one() - touched_mass) / untouched_mass;
        for d in pdf.iter_mut().filter(|d| **d > floor) {
            *d *= ratio;
        }
        trace!(
            num_actions,
            touched,
            touched_mass = touched_mass.to_f64(),
            ratio = ratio.to_f64(),
            "minimum probability enforced"
        );
    }

    Ok(())
}
