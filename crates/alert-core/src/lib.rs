//! Shared types for ClimAlert alert composition.
//!
//! This crate provides the common vocabulary for the ClimAlert
//! composition pipeline. It defines:
//!
//! - [`AlertDraft`] - the in-progress alert an operator is composing
//! - [`AlertPayload`] / [`Schedule`] - the finalized submission record
//! - [`AlertType`], [`Severity`], [`TargetGroup`], [`Channel`] - the fixed catalogs
//! - [`ValidationReport`] / [`ComposeError`] - the sendable-invariant check
//!
//! # Example
//!
//! ```rust
//! use alert_core::{AlertDraft, AlertType, Severity, TargetGroup};
//!
//! let draft = AlertDraft::new()
//!     .with_alert_type(AlertType::Heat)
//!     .with_severity(Severity::HighAlert)
//!     .with_title("Alerte canicule - Niveau 4")
//!     .with_body("Températures extrêmes attendues cette semaine.")
//!     .toggle_region("Dakar")
//!     .toggle_target_group(TargetGroup::Elderly);
//!
//! assert!(draft.regions.contains("Dakar"));
//! ```

mod draft;
mod error;
mod payload;
mod types;

pub use draft::AlertDraft;
pub use error::{ComposeError, MissingField, ValidationReport};
pub use payload::{AlertPayload, Schedule};
pub use types::{AlertType, Channel, InvalidSeverity, Severity, TargetGroup};
