//! Event types for the consumer loop that owns the settings record
//!
//! Operator requests and clock ticks arrive on one channel and are applied
//! strictly in order; no two events ever touch the record concurrently.

use crate::settings::FieldId;

/// Requests arriving from the operator surface
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorRequest {
    /// Change one settings field to the given raw menu value
    SetField { field: FieldId, value: String },

    /// Operator-confirmed absolute clock correction
    ConfirmTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    /// Restore the factory default snapshot
    ResetDefaults,

    /// Wipe the simulated SD card; the settings record is untouched
    DeleteAll,

    /// Firmware upgrade check (always already current in this simulation)
    FirmwareUpgrade,
}

/// Everything the consumer loop can be woken by
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    Operator(OperatorRequest),

    /// One simulated-second advance from the clock simulator
    Tick,

    /// End of session; the loop drains nothing further
    Shutdown,
}
