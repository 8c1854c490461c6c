//! The in-progress alert draft and its transition functions.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::types::{AlertType, Channel, Severity, TargetGroup};

/// An unsent alert being composed by an operator.
///
/// The draft exists only in the composing session and is discarded
/// after submission. Transitions consume and return the value, so every
/// intermediate state is an ordinary value that can be inspected or
/// compared. Selection sets keep insertion order.
///
/// Region names are free-form strings: unknown regions are accepted
/// here and fall back to a default population during reach estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDraft {
    /// Hazard category; required before the draft is sendable.
    #[serde(default)]
    pub alert_type: Option<AlertType>,
    /// Severity level, 1 through 5.
    #[serde(default)]
    pub severity: Severity,
    /// Selected administrative regions.
    #[serde(default)]
    pub regions: IndexSet<String>,
    /// Selected audience groups; empty means the whole population.
    #[serde(default)]
    pub target_groups: IndexSet<TargetGroup>,
    /// Alert title; required before the draft is sendable.
    #[serde(default)]
    pub title: String,
    /// Main alert message; required before the draft is sendable.
    #[serde(default)]
    pub body: String,
    /// Free-form recommended actions; may be empty.
    #[serde(default)]
    pub action_advice: String,
    /// Delivery channels. A draft with zero channels is still sendable.
    #[serde(default)]
    pub channels: IndexSet<Channel>,
    /// Operator-entered send time; `None` means send immediately.
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

impl AlertDraft {
    /// A fresh draft matching the composer form's initial state:
    /// severity level 1, SMS and push preselected, everything else
    /// empty.
    pub fn new() -> Self {
        let mut channels = IndexSet::new();
        channels.insert(Channel::Sms);
        channels.insert(Channel::Push);

        Self {
            alert_type: None,
            severity: Severity::Information,
            regions: IndexSet::new(),
            target_groups: IndexSet::new(),
            title: String::new(),
            body: String::new(),
            action_advice: String::new(),
            channels,
            scheduled_at: None,
        }
    }

    /// Set the hazard category.
    pub fn with_alert_type(mut self, alert_type: AlertType) -> Self {
        self.alert_type = Some(alert_type);
        self
    }

    /// Set the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the alert title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the main alert message.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the free-form action advice.
    pub fn with_action_advice(mut self, advice: impl Into<String>) -> Self {
        self.action_advice = advice.into();
        self
    }

    /// Schedule the alert for a later send time.
    pub fn with_schedule(mut self, at: impl Into<String>) -> Self {
        self.scheduled_at = Some(at.into());
        self
    }

    /// Clear any schedule; the alert goes out on submission.
    pub fn send_immediately(mut self) -> Self {
        self.scheduled_at = None;
        self
    }

    /// Add the region if absent, remove it if present.
    pub fn toggle_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        if !self.regions.shift_remove(&region) {
            self.regions.insert(region);
        }
        self
    }

    /// Add the group if absent, remove it if present.
    pub fn toggle_target_group(mut self, group: TargetGroup) -> Self {
        if !self.target_groups.shift_remove(&group) {
            self.target_groups.insert(group);
        }
        self
    }

    /// Add the channel if absent, remove it if present.
    pub fn toggle_channel(mut self, channel: Channel) -> Self {
        if !self.channels.shift_remove(&channel) {
            self.channels.insert(channel);
        }
        self
    }

    /// Replace the selection with every region in the catalog.
    pub fn with_all_regions<I, S>(mut self, catalog: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = catalog.into_iter().map(Into::into).collect();
        self
    }

    /// Clear the region selection.
    pub fn clear_regions(mut self) -> Self {
        self.regions.clear();
        self
    }
}

impl Default for AlertDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_initial_state() {
        let draft = AlertDraft::new();

        assert_eq!(draft.alert_type, None);
        assert_eq!(draft.severity, Severity::Information);
        assert!(draft.regions.is_empty());
        assert!(draft.target_groups.is_empty());
        assert!(draft.channels.contains(&Channel::Sms));
        assert!(draft.channels.contains(&Channel::Push));
        assert_eq!(draft.channels.len(), 2);
        assert_eq!(draft.scheduled_at, None);
    }

    #[test]
    fn test_toggle_region_twice_restores_selection() {
        let original = AlertDraft::new().toggle_region("Dakar").toggle_region("Thiès");
        let toggled = original.clone().toggle_region("Kaolack").toggle_region("Kaolack");
        assert_eq!(toggled, original);
    }

    #[test]
    fn test_toggle_region_adds_then_removes() {
        let draft = AlertDraft::new().toggle_region("Dakar");
        assert!(draft.regions.contains("Dakar"));

        let draft = draft.toggle_region("Dakar");
        assert!(!draft.regions.contains("Dakar"));
    }

    #[test]
    fn test_toggle_target_group_and_channel() {
        let draft = AlertDraft::new()
            .toggle_target_group(TargetGroup::Elderly)
            .toggle_channel(Channel::Sms);

        assert!(draft.target_groups.contains(&TargetGroup::Elderly));
        // SMS was preselected, so the toggle removes it.
        assert!(!draft.channels.contains(&Channel::Sms));
        assert!(draft.channels.contains(&Channel::Push));
    }

    #[test]
    fn test_with_all_regions_replaces_selection() {
        let catalog = ["Dakar", "Thiès", "Saint-Louis"];
        let draft = AlertDraft::new().toggle_region("Kolda").with_all_regions(catalog);

        assert_eq!(draft.regions.len(), 3);
        assert!(!draft.regions.contains("Kolda"));

        let draft = draft.clear_regions();
        assert!(draft.regions.is_empty());
    }

    #[test]
    fn test_draft_deserializes_with_defaults() {
        let draft: AlertDraft = serde_json::from_str(r#"{"title": "Test"}"#).unwrap();
        assert_eq!(draft.title, "Test");
        assert_eq!(draft.severity, Severity::Information);
        assert!(draft.regions.is_empty());
        // Channel defaults apply only to fresh drafts, not parsed ones.
        assert!(draft.channels.is_empty());
    }
}
