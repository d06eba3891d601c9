pub mod config;
pub mod error;
pub mod numeric;
pub mod validate;

pub use crate::config::{ExploreConfig, Thresholds};
pub use error::{ExploreError, ExploreResult, Status};
pub use numeric::Probability;
