use crate::Policy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BATCH_SEED: u64 = 0x5EED;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Seed of the first game; game `i` plays with `seed + i`.
    pub seed: u64,
    pub games: u32,
    /// Safety cap per game; a policy that stalls gets cut off here.
    pub max_steps: u32,
    pub policy: Policy,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_BATCH_SEED,
            games: 100,
            max_steps: 500,
            policy: Policy::Greedy,
        }
    }
}
