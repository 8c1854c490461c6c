//! Per-audience message personalization.

use alert_core::TargetGroup;

use crate::tables::TargetingTables;

/// Advice used when the operator left the free-form field empty.
pub const FALLBACK_ADVICE: &str = "Suivez les consignes de sécurité.";

impl TargetingTables {
    /// Build the personalized text for one audience group.
    ///
    /// The operator's action advice (or [`FALLBACK_ADVICE`] when it is
    /// empty) followed by the group's advisory suffix. Groups without a
    /// suffix entry get the base advice unchanged.
    pub fn personalize(&self, action_advice: &str, group: TargetGroup) -> String {
        let base = if action_advice.is_empty() {
            FALLBACK_ADVICE
        } else {
            action_advice
        };

        match self.suffix_of(group) {
            Some(suffix) => format!("{} {}", base, suffix),
            None => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_advice_uses_fallback_with_suffix() {
        let tables = TargetingTables::senegal();
        let message = tables.personalize("", TargetGroup::Pregnant);
        assert_eq!(
            message,
            "Suivez les consignes de sécurité. Hydratez-vous régulièrement et évitez les \
             efforts physiques intenses. Consultez votre médecin en cas de malaise."
        );
    }

    #[test]
    fn test_operator_advice_keeps_group_suffix() {
        let tables = TargetingTables::senegal();
        let message = tables.personalize("Évitez les sorties entre 12h et 16h.", TargetGroup::Elderly);
        assert!(message.starts_with("Évitez les sorties entre 12h et 16h. "));
        assert!(message.ends_with("(12h-16h)."));
    }

    #[test]
    fn test_group_without_suffix_passes_base_through() {
        let tables = TargetingTables::senegal();
        assert_eq!(tables.personalize("Restez informés.", TargetGroup::All), "Restez informés.");
        assert_eq!(tables.personalize("", TargetGroup::All), FALLBACK_ADVICE);
    }
}
