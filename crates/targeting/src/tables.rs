//! Injected demographic lookup tables.

use alert_core::TargetGroup;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fixed region catalog the operator UI enumerates.
pub const SENEGAL_REGIONS: [&str; 14] = [
    "Dakar",
    "Thiès",
    "Saint-Louis",
    "Kaolack",
    "Ziguinchor",
    "Diourbel",
    "Fatick",
    "Kolda",
    "Louga",
    "Matam",
    "Sédhiou",
    "Tambacounda",
    "Kaffrine",
    "Kédougou",
];

/// Population assumed for regions absent from the table.
pub const DEFAULT_FALLBACK_POPULATION: u64 = 500_000;

/// Share of a region's population reachable on mobile channels.
pub const DEFAULT_COVERAGE_RATE: f64 = 0.8;

/// Read-only demographic tables behind reach estimation and message
/// personalization.
///
/// The tables are injected rather than hard-coded at call sites so a
/// deployment can swap in its own regions and factors; they are never
/// mutated once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetingTables {
    /// Region name to resident population.
    pub populations: IndexMap<String, u64>,
    /// Audience tag to its estimated share of a region's population.
    /// `all` is deliberately absent: it suppresses per-tag weighting.
    pub audience_factors: IndexMap<TargetGroup, f64>,
    /// Audience tag to the safety suffix appended to the action advice.
    pub advisory_suffixes: IndexMap<TargetGroup, String>,
    /// Population used for regions missing from `populations`.
    #[serde(default = "default_fallback_population")]
    pub fallback_population: u64,
    /// Mobile coverage rate applied to every estimate.
    #[serde(default = "default_coverage_rate")]
    pub coverage_rate: f64,
}

fn default_fallback_population() -> u64 {
    DEFAULT_FALLBACK_POPULATION
}

fn default_coverage_rate() -> f64 {
    DEFAULT_COVERAGE_RATE
}

impl TargetingTables {
    /// The built-in dataset for Senegal's 14 administrative regions.
    pub fn senegal() -> Self {
        let populations = IndexMap::from([
            ("Dakar".to_string(), 3_732_000),
            ("Thiès".to_string(), 1_788_000),
            ("Saint-Louis".to_string(), 1_040_000),
            ("Kaolack".to_string(), 960_000),
            ("Ziguinchor".to_string(), 549_000),
            ("Diourbel".to_string(), 1_497_000),
            ("Fatick".to_string(), 714_000),
            ("Kolda".to_string(), 662_000),
            ("Louga".to_string(), 874_000),
            ("Matam".to_string(), 562_000),
            ("Sédhiou".to_string(), 452_000),
            ("Tambacounda".to_string(), 678_000),
            ("Kaffrine".to_string(), 566_000),
            ("Kédougou".to_string(), 151_000),
        ]);

        let audience_factors = IndexMap::from([
            (TargetGroup::Pregnant, 0.04),
            (TargetGroup::Elderly, 0.08),
            (TargetGroup::Children, 0.25),
            (TargetGroup::Workers, 0.30),
            (TargetGroup::Chronic, 0.15),
        ]);

        let advisory_suffixes = IndexMap::from([
            (
                TargetGroup::Pregnant,
                "Hydratez-vous régulièrement et évitez les efforts physiques intenses. \
                 Consultez votre médecin en cas de malaise."
                    .to_string(),
            ),
            (
                TargetGroup::Elderly,
                "Restez dans des lieux frais, hydratez-vous fréquemment et ne sortez pas \
                 aux heures les plus chaudes (12h-16h)."
                    .to_string(),
            ),
            (
                TargetGroup::Children,
                "Surveillez vos enfants, assurez-vous qu'ils boivent régulièrement et \
                 évitez les activités extérieures prolongées."
                    .to_string(),
            ),
            (
                TargetGroup::Workers,
                "Aménagez des pauses fréquentes, buvez de l'eau toutes les 15-20 minutes \
                 et portez des vêtements de protection adaptés."
                    .to_string(),
            ),
            (
                TargetGroup::Chronic,
                "Suivez scrupuleusement votre traitement médical, contactez votre médecin \
                 en cas de symptômes et évitez toute exposition aux risques."
                    .to_string(),
            ),
        ]);

        Self {
            populations,
            audience_factors,
            advisory_suffixes,
            fallback_population: DEFAULT_FALLBACK_POPULATION,
            coverage_rate: DEFAULT_COVERAGE_RATE,
        }
    }

    /// Population of a region, falling back for unknown names.
    pub fn population_of(&self, region: &str) -> u64 {
        self.populations.get(region).copied().unwrap_or(self.fallback_population)
    }

    /// Audience factor for a group; groups without an entry contribute
    /// nothing to targeting.
    pub fn factor_of(&self, group: TargetGroup) -> f64 {
        self.audience_factors.get(&group).copied().unwrap_or(0.0)
    }

    /// Advisory suffix for a group, if one is defined.
    pub fn suffix_of(&self, group: TargetGroup) -> Option<&str> {
        self.advisory_suffixes.get(&group).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senegal_covers_the_region_catalog() {
        let tables = TargetingTables::senegal();
        assert_eq!(tables.populations.len(), SENEGAL_REGIONS.len());
        for region in SENEGAL_REGIONS {
            assert!(tables.populations.contains_key(region), "missing {}", region);
        }
        assert_eq!(tables.population_of("Dakar"), 3_732_000);
        assert_eq!(tables.population_of("Kédougou"), 151_000);
    }

    #[test]
    fn test_unknown_region_uses_fallback_population() {
        let tables = TargetingTables::senegal();
        assert_eq!(tables.population_of("Atlantis"), DEFAULT_FALLBACK_POPULATION);
    }

    #[test]
    fn test_all_group_has_no_factor_or_suffix() {
        let tables = TargetingTables::senegal();
        assert_eq!(tables.factor_of(TargetGroup::All), 0.0);
        assert_eq!(tables.suffix_of(TargetGroup::All), None);
        assert_eq!(tables.factor_of(TargetGroup::Elderly), 0.08);
    }

    #[test]
    fn test_tables_deserialize_with_defaults() {
        let tables: TargetingTables = serde_json::from_str(
            r#"{
                "populations": {"Testville": 1000},
                "audience_factors": {"elderly": 0.5},
                "advisory_suffixes": {}
            }"#,
        )
        .unwrap();

        assert_eq!(tables.fallback_population, DEFAULT_FALLBACK_POPULATION);
        assert_eq!(tables.coverage_rate, DEFAULT_COVERAGE_RATE);
        assert_eq!(tables.population_of("Testville"), 1000);
    }
}
