//! Alert composition for ClimAlert.
//!
//! [`AlertComposer`] is the stateless transform from an operator's
//! [`AlertDraft`] to a submission-ready [`AlertPayload`]: it checks the
//! sendable invariant, estimates reach over the injected targeting
//! tables, personalizes the message per audience group, and assembles
//! the payload for the dispatch boundary.
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertDraft, AlertType};
//! use composer::AlertComposer;
//!
//! let composer = AlertComposer::senegal();
//! let draft = AlertDraft::new()
//!     .with_alert_type(AlertType::Heat)
//!     .with_title("Alerte canicule")
//!     .with_body("Températures extrêmes attendues.")
//!     .toggle_region("Dakar");
//!
//! let payload = composer.build_payload(&draft).unwrap();
//! assert_eq!(payload.estimated_reach, 2_985_600);
//! ```

use alert_core::{
    AlertDraft, AlertPayload, ComposeError, MissingField, Schedule, TargetGroup, ValidationReport,
};
use indexmap::IndexMap;
use targeting::TargetingTables;
use tracing::info;

/// Stateless transform from alert draft to submission payload.
#[derive(Debug, Clone)]
pub struct AlertComposer {
    tables: TargetingTables,
}

impl AlertComposer {
    /// Create a composer over injected targeting tables.
    pub fn new(tables: TargetingTables) -> Self {
        Self { tables }
    }

    /// Composer over the built-in Senegal tables.
    pub fn senegal() -> Self {
        Self::new(TargetingTables::senegal())
    }

    /// The tables this composer consults.
    pub fn tables(&self) -> &TargetingTables {
        &self.tables
    }

    /// Check the draft against the sendable invariant.
    ///
    /// Required: an alert type, a non-empty title and body, and at
    /// least one region. Channels are not required; a draft with zero
    /// channels is still sendable.
    pub fn validate(&self, draft: &AlertDraft) -> ValidationReport {
        let mut missing = Vec::new();
        if draft.alert_type.is_none() {
            missing.push(MissingField::AlertType);
        }
        if draft.title.is_empty() {
            missing.push(MissingField::Title);
        }
        if draft.body.is_empty() {
            missing.push(MissingField::Body);
        }
        if draft.regions.is_empty() {
            missing.push(MissingField::Regions);
        }
        ValidationReport { missing }
    }

    /// Estimated number of people who would receive the draft's alert.
    pub fn estimate_reach(&self, draft: &AlertDraft) -> u64 {
        self.tables
            .estimate_reach(draft.regions.iter().map(String::as_str), &draft.target_groups)
    }

    /// Personalized message text for one audience group.
    pub fn personalize(&self, draft: &AlertDraft, group: TargetGroup) -> String {
        self.tables.personalize(&draft.action_advice, group)
    }

    /// Assemble the immutable submission record for a draft.
    ///
    /// Fails with [`ComposeError::Invalid`] when the draft does not
    /// meet the sendable invariant. The draft itself is never mutated;
    /// callers drop it after submission.
    pub fn build_payload(&self, draft: &AlertDraft) -> Result<AlertPayload, ComposeError> {
        let report = self.validate(draft);
        let alert_type = match draft.alert_type {
            Some(alert_type) if report.is_valid() => alert_type,
            _ => return Err(ComposeError::Invalid(report)),
        };

        let mut messages = IndexMap::new();
        if draft.target_groups.is_empty() {
            messages.insert("general".to_string(), draft.body.clone());
        } else {
            for group in &draft.target_groups {
                messages.insert(group.as_str().to_string(), self.personalize(draft, *group));
            }
        }

        let schedule = match &draft.scheduled_at {
            Some(at) => Schedule::At(at.clone()),
            None => Schedule::Immediate,
        };

        let estimated_reach = self.estimate_reach(draft);

        info!(
            alert_type = alert_type.as_str(),
            severity = draft.severity.level(),
            regions = draft.regions.len(),
            estimated_reach,
            "Alert payload built"
        );

        Ok(AlertPayload {
            alert_type,
            severity: draft.severity,
            title: draft.title.clone(),
            body: draft.body.clone(),
            action_advice: draft.action_advice.clone(),
            regions: draft.regions.iter().cloned().collect(),
            target_groups: draft.target_groups.iter().copied().collect(),
            channels: draft.channels.iter().copied().collect(),
            messages,
            estimated_reach,
            schedule,
        })
    }
}

impl Default for AlertComposer {
    fn default() -> Self {
        Self::senegal()
    }
}
