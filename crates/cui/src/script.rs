use anyhow::{Context, Result};
use scoundrel_core::Action;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Startup script: optional seed plus a list of core actions to replay
/// before the first frame. Handy for reproducing a reported position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoScript {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

pub fn load_script(path: &Path) -> Result<AutoScript> {
    let raw = fs::read_to_string(path).context("read script file")?;
    serde_json::from_str(&raw).context("parse script json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_and_actions() {
        let raw = r#"{
            "seed": 7,
            "actions": ["StartOrDraw", {"PlaySlot": {"index": 2}}, "ToggleWeaponEquip"]
        }"#;
        let script: AutoScript = serde_json::from_str(raw).expect("parse");
        assert_eq!(script.seed, Some(7));
        assert_eq!(
            script.actions,
            vec![
                Action::StartOrDraw,
                Action::PlaySlot { index: 2 },
                Action::ToggleWeaponEquip
            ]
        );
    }

    #[test]
    fn missing_fields_default() {
        let script: AutoScript = serde_json::from_str("{}").expect("parse");
        assert_eq!(script.seed, None);
        assert!(script.actions.is_empty());
    }
}
