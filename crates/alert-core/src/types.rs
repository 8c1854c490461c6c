//! Fixed catalogs used across the composition pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hazard category of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Heat,
    Flood,
    Wind,
    General,
}

impl AlertType {
    /// Stable tag used in payloads and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Heat => "heat",
            AlertType::Flood => "flood",
            AlertType::Wind => "wind",
            AlertType::General => "general",
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            AlertType::Heat => "Alerte Canicule",
            AlertType::Flood => "Alerte Inondation",
            AlertType::Wind => "Alerte Vent Fort",
            AlertType::General => "Alerte Générale",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for severity levels outside the 1-5 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("severity level out of range: {0} (expected 1-5)")]
pub struct InvalidSeverity(pub u8);

/// Alert severity, level 1 (information) through level 5 (absolute
/// emergency). Serialized as the bare integer level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    #[default]
    Information,
    Vigilance,
    Alert,
    HighAlert,
    Emergency,
}

impl Severity {
    /// The numeric level, 1 through 5.
    pub fn level(&self) -> u8 {
        match self {
            Severity::Information => 1,
            Severity::Vigilance => 2,
            Severity::Alert => 3,
            Severity::HighAlert => 4,
            Severity::Emergency => 5,
        }
    }

    /// Look up a severity by numeric level.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Severity::Information),
            2 => Some(Severity::Vigilance),
            3 => Some(Severity::Alert),
            4 => Some(Severity::HighAlert),
            5 => Some(Severity::Emergency),
            _ => None,
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Information => "Niveau 1 - Information",
            Severity::Vigilance => "Niveau 2 - Vigilance",
            Severity::Alert => "Niveau 3 - Alerte",
            Severity::HighAlert => "Niveau 4 - Alerte Renforcée",
            Severity::Emergency => "Niveau 5 - Urgence Absolue",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Severity::from_level(level).ok_or(InvalidSeverity(level))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named demographic segment used to scope and personalize alerts.
///
/// `All` means the whole population and suppresses per-tag weighting
/// in reach estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGroup {
    Pregnant,
    Elderly,
    Children,
    Workers,
    Chronic,
    All,
}

impl TargetGroup {
    /// Every group, in the order the operator UI lists them.
    pub const CATALOG: [TargetGroup; 6] = [
        TargetGroup::Pregnant,
        TargetGroup::Elderly,
        TargetGroup::Children,
        TargetGroup::Workers,
        TargetGroup::Chronic,
        TargetGroup::All,
    ];

    /// Stable tag used in payloads and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetGroup::Pregnant => "pregnant",
            TargetGroup::Elderly => "elderly",
            TargetGroup::Children => "children",
            TargetGroup::Workers => "workers",
            TargetGroup::Chronic => "chronic",
            TargetGroup::All => "all",
        }
    }

    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            TargetGroup::Pregnant => "Femmes enceintes",
            TargetGroup::Elderly => "Personnes âgées (65+)",
            TargetGroup::Children => "Enfants (0-12 ans)",
            TargetGroup::Workers => "Travailleurs extérieurs",
            TargetGroup::Chronic => "Personnes à risque médical",
            TargetGroup::All => "Toute la population",
        }
    }
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A delivery channel, each independently toggled on a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Push,
    Voice,
    Email,
}

impl Channel {
    /// Every channel, in the order the operator UI lists them.
    pub const CATALOG: [Channel; 4] = [Channel::Sms, Channel::Push, Channel::Voice, Channel::Email];

    /// Stable tag used in payloads and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Push => "push",
            Channel::Voice => "voice",
            Channel::Email => "email",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels_round_trip() {
        for level in 1..=5u8 {
            let severity = Severity::from_level(level).unwrap();
            assert_eq!(severity.level(), level);
        }
        assert_eq!(Severity::from_level(0), None);
        assert_eq!(Severity::from_level(6), None);
    }

    #[test]
    fn test_severity_serialized_as_integer() {
        let encoded = serde_json::to_string(&Severity::HighAlert).unwrap();
        assert_eq!(encoded, "4");

        let decoded: Severity = serde_json::from_str("2").unwrap();
        assert_eq!(decoded, Severity::Vigilance);

        let out_of_range = serde_json::from_str::<Severity>("7");
        assert!(out_of_range.is_err());
    }

    #[test]
    fn test_severity_default_is_information() {
        assert_eq!(Severity::default(), Severity::Information);
    }

    #[test]
    fn test_catalog_tags() {
        assert_eq!(AlertType::Heat.as_str(), "heat");
        assert_eq!(TargetGroup::All.as_str(), "all");
        assert_eq!(Channel::Push.as_str(), "push");

        let encoded = serde_json::to_string(&TargetGroup::Pregnant).unwrap();
        assert_eq!(encoded, "\"pregnant\"");
    }

    #[test]
    fn test_unknown_group_tag_rejected() {
        let decoded = serde_json::from_str::<TargetGroup>("\"tourists\"");
        assert!(decoded.is_err());
    }
}
