//! The finalized submission record handed to the delivery boundary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{AlertType, Channel, Severity, TargetGroup};

/// When an alert should go out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    /// Send as soon as the payload is accepted.
    Immediate,
    /// Send at the operator-entered time, carried verbatim.
    At(String),
}

/// The immutable, submission-ready form of an alert.
///
/// Built once from a valid draft; this is the hand-off artifact for the
/// downstream delivery subsystem. `messages` maps each targeted group
/// tag to its personalized text, or holds a single `general` entry when
/// no groups were selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPayload {
    pub alert_type: AlertType,
    pub severity: Severity,
    pub title: String,
    pub body: String,
    pub action_advice: String,
    pub regions: Vec<String>,
    pub target_groups: Vec<TargetGroup>,
    pub channels: Vec<Channel>,
    pub messages: IndexMap<String, String>,
    pub estimated_reach: u64,
    pub schedule: Schedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_serialization() {
        let now = serde_json::to_string(&Schedule::Immediate).unwrap();
        assert_eq!(now, "\"immediate\"");

        let later = serde_json::to_string(&Schedule::At("2026-06-01T14:00".to_string())).unwrap();
        assert_eq!(later, "{\"at\":\"2026-06-01T14:00\"}");
    }
}
