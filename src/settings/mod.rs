//! Configuration data model for the simulated trail camera
//!
//! - **domains**: closed value domains, field identifiers, validated values
//! - **record**: the `CameraSettings` snapshot and its persisted layout

pub mod domains;
pub mod record;

// Re-export commonly used types
pub use domains::{ClosedDomain, FieldId, FieldValue};
pub use record::{CameraSettings, CaptureTimer};
