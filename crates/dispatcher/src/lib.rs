//! Dispatch boundary for ClimAlert.
//!
//! This crate is the seam between alert composition and the (not yet
//! built) delivery subsystem. Nothing is transmitted anywhere: the
//! shipped [`LogDispatcher`] writes the payload to the operational log
//! and hands back a [`DispatchReceipt`] with the operator-facing
//! confirmation line.
//!
//! # Example
//!
//! ```no_run
//! use dispatcher::{Dispatch, LogDispatcher};
//! # fn example(payload: alert_core::AlertPayload) -> Result<(), dispatcher::DispatchError> {
//! let dispatcher = LogDispatcher::new();
//! let receipt = dispatcher.dispatch(&payload)?;
//! println!("{}", receipt.confirmation);
//! # Ok(())
//! # }
//! ```

use alert_core::AlertPayload;
use chrono::Utc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during dispatch operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Payload could not be serialized for the operational log.
    #[error("payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Receipt returned once a payload has been accepted for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    /// Human-readable confirmation for the operator.
    pub confirmation: String,
    /// RFC 3339 timestamp of when the payload was accepted.
    pub dispatched_at: String,
}

/// A sink for finalized alert payloads.
///
/// A real SMS/push/voice/email delivery subsystem would implement this
/// trait; the composition side only depends on the seam.
pub trait Dispatch {
    /// Accept a payload for delivery.
    fn dispatch(&self, payload: &AlertPayload) -> Result<DispatchReceipt, DispatchError>;
}

/// Dispatcher that writes payloads to the operational log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

impl LogDispatcher {
    /// Create a logging dispatcher.
    pub fn new() -> Self {
        Self
    }
}

impl Dispatch for LogDispatcher {
    fn dispatch(&self, payload: &AlertPayload) -> Result<DispatchReceipt, DispatchError> {
        let encoded = serde_json::to_string(payload)?;

        info!(
            alert_type = payload.alert_type.as_str(),
            severity = payload.severity.level(),
            regions = payload.regions.len(),
            estimated_reach = payload.estimated_reach,
            payload = %encoded,
            "Alert dispatched"
        );

        Ok(DispatchReceipt {
            confirmation: confirmation_line(payload),
            dispatched_at: Utc::now().to_rfc3339(),
        })
    }
}

/// Render the operator-facing confirmation line for a payload.
pub fn confirmation_line(payload: &AlertPayload) -> String {
    format!(
        "Alert level {} sent to {} region(s) — Estimated reach: {} people",
        payload.severity.level(),
        payload.regions.len(),
        payload.estimated_reach
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_core::{AlertType, Schedule, Severity};
    use indexmap::IndexMap;

    fn sample_payload() -> AlertPayload {
        AlertPayload {
            alert_type: AlertType::Heat,
            severity: Severity::HighAlert,
            title: "Alerte canicule".to_string(),
            body: "Températures extrêmes attendues.".to_string(),
            action_advice: String::new(),
            regions: vec!["Dakar".to_string(), "Thiès".to_string()],
            target_groups: Vec::new(),
            channels: Vec::new(),
            messages: IndexMap::from([(
                "general".to_string(),
                "Températures extrêmes attendues.".to_string(),
            )]),
            estimated_reach: 4_416_000,
            schedule: Schedule::Immediate,
        }
    }

    #[test]
    fn test_confirmation_line_format() {
        let payload = sample_payload();
        assert_eq!(
            confirmation_line(&payload),
            "Alert level 4 sent to 2 region(s) — Estimated reach: 4416000 people"
        );
    }

    #[test]
    fn test_log_dispatch_returns_receipt() {
        let receipt = LogDispatcher::new().dispatch(&sample_payload()).unwrap();
        assert_eq!(receipt.confirmation, confirmation_line(&sample_payload()));
        assert!(!receipt.dispatched_at.is_empty());
    }
}
