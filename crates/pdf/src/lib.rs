//! Exploration distributions over a finite set of actions — epsilon-greedy,
//! softmax, ensemble bagging, and minimum-probability enforcement.
//!
//! Every operation writes into a caller-owned buffer and returns
//! `ExploreResult<()>`; on error the buffer is left untouched.

pub mod bag;
pub mod epsilon_greedy;
pub mod min_prob;
pub mod range;
pub mod softmax;
pub mod strategy;

pub use bag::generate_bag;
pub use epsilon_greedy::generate_epsilon_greedy;
pub use min_prob::{
    enforce_minimum_probability, enforce_minimum_probability_with, MinimumProbability,
};
pub use softmax::generate_softmax;
pub use strategy::{ExplorationRequest, ExplorationStrategy};

pub use explore_core::{ExploreError, ExploreResult, Probability, Status, Thresholds};
