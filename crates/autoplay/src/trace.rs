use crate::AutoplayError;
use scoundrel_core::Action;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    StepCap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    pub step: u32,
    pub action: Action,
    pub health_after: i32,
    pub deck_after: usize,
    pub room_after: u32,
    pub best_after: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub outcome: GameOutcome,
    pub steps: u32,
    pub rooms_entered: u32,
    pub final_health: i32,
    pub best: usize,
    #[serde(default)]
    pub trace: Vec<StepRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub step_capped: u32,
    pub win_rate: f64,
    pub average_best: f64,
    pub best_overall: usize,
    pub average_rooms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub games: Vec<GameRecord>,
}

pub fn write_report(path: &Path, report: &BatchReport) -> Result<(), AutoplayError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
