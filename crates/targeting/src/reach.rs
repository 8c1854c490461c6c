//! Population-weighted reach estimation.

use alert_core::TargetGroup;
use indexmap::IndexSet;
use tracing::debug;

use crate::tables::TargetingTables;

impl TargetingTables {
    /// Audience weighting for a group selection.
    ///
    /// 1.0 when the selection is empty or includes `all`; otherwise the
    /// sum of the selected groups' factors, with factor-less groups
    /// contributing zero. Sums above 1.0 are left uncapped: the factors
    /// are independent population shares and the model accepts the
    /// overcount as a known approximation.
    pub fn target_factor(&self, groups: &IndexSet<TargetGroup>) -> f64 {
        if groups.is_empty() || groups.contains(&TargetGroup::All) {
            return 1.0;
        }
        groups.iter().map(|group| self.factor_of(*group)).sum()
    }

    /// Estimate how many people an alert over `regions` would receive.
    ///
    /// Per region: population (fallback for unknown names) times the
    /// target factor times the mobile coverage rate, floored. The
    /// per-region counts are summed, so the estimate never decreases
    /// when a region is added.
    pub fn estimate_reach<'a, I>(&self, regions: I, groups: &IndexSet<TargetGroup>) -> u64
    where
        I: IntoIterator<Item = &'a str>,
    {
        let factor = self.target_factor(groups);

        let mut total = 0u64;
        for region in regions {
            let population = self.population_of(region);
            total += (population as f64 * factor * self.coverage_rate).floor() as u64;
        }

        debug!(factor, total, "Estimated alert reach");
        total
    }
}
