//! Serializable description of which generator to run, optionally followed
//! by a minimum-probability pass.

use explore_core::validate::is_normalized;
use explore_core::{ExploreResult, Probability, Thresholds};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::min_prob::MinimumProbability;
use crate::{generate_bag, generate_epsilon_greedy, generate_softmax};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExplorationStrategy {
    EpsilonGreedy { epsilon: f64, top_action: usize },
    Softmax { lambda: f64, scores: Vec<f64> },
    Bag { vote_counts: Vec<u32> },
}

impl ExplorationStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ExplorationStrategy::EpsilonGreedy { .. } => "epsilon_greedy",
            ExplorationStrategy::Softmax { .. } => "softmax",
            ExplorationStrategy::Bag { .. } => "bag",
        }
    }

    /// Write the strategy's distribution into `pdf`.
    pub fn generate<T: Probability>(&self, pdf: &mut [T]) -> ExploreResult<()> {
        match self {
            ExplorationStrategy::EpsilonGreedy {
                epsilon,
                top_action,
            } => generate_epsilon_greedy(T::from_f64(*epsilon), *top_action, pdf),
            ExplorationStrategy::Softmax { lambda, scores } => {
                let scores: Vec<T> = scores.iter().map(|&s| T::from_f64(s)).collect();
                generate_softmax(T::from_f64(*lambda), &scores, pdf)
            }
            ExplorationStrategy::Bag { vote_counts } => generate_bag(vote_counts, pdf),
        }
    }
}

/// A strategy plus the buffer length it should fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationRequest {
    pub strategy: ExplorationStrategy,
    pub num_actions: usize,
    #[serde(default)]
    pub min_probability: Option<MinimumProbability>,
}

impl ExplorationRequest {
    /// Allocate a buffer of `num_actions`, generate into it, then apply the
    /// optional floor.
    pub fn run(&self, thresholds: &Thresholds) -> ExploreResult<Vec<f64>> {
        let mut pdf = vec![0.0f64; self.num_actions];
        self.strategy.generate(&mut pdf)?;
        if let Some(floor) = &self.min_probability {
            floor.apply(thresholds, &mut pdf)?;
        }
        debug!(
            strategy = self.strategy.name(),
            num_actions = self.num_actions,
            normalized = is_normalized(&pdf, thresholds.sum_tolerance),
            "exploration request completed"
        );
        Ok(pdf)
    }
}
