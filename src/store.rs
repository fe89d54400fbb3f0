//! Owner of the live settings record
//!
//! All mutation funnels through here: operator changes via the validated
//! write path, clock advances via `tick`, corrections via `confirm_time`.
//! Each committed change replaces the record with a new snapshot and pushes
//! it to the injected gateway; a failed validation leaves the record
//! untouched and hands the reason back.

use chrono::TimeDelta;
use tracing::{error, info, trace, warn};

use crate::constraints;
use crate::error::SettingsError;
use crate::persistence::{SettingsGateway, load_or_default};
use crate::settings::{CameraSettings, FieldId};

pub struct SettingsStore {
    settings: CameraSettings,
    gateway: Box<dyn SettingsGateway>,
}

impl SettingsStore {
    /// Store over an explicit starting snapshot.
    pub fn new(settings: CameraSettings, gateway: Box<dyn SettingsGateway>) -> Self {
        Self { settings, gateway }
    }

    /// Store restored from the gateway's document, or factory defaults.
    pub fn open(gateway: Box<dyn SettingsGateway>) -> Self {
        let settings = load_or_default(&*gateway);
        Self::new(settings, gateway)
    }

    /// The present snapshot. Read-only; callers never mutate in place.
    pub fn current(&self) -> &CameraSettings {
        &self.settings
    }

    /// Validate and commit one field change.
    pub fn apply(&mut self, field: FieldId, raw: &str) -> Result<CameraSettings, SettingsError> {
        let value = constraints::validate(field, raw)?;
        info!(field = %field, value = %raw, "setting changed");
        Ok(self.commit(self.settings.with_value(value)))
    }

    /// Operator-confirmed absolute clock correction. The only path that may
    /// move the device clock backward.
    pub fn confirm_time(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<CameraSettings, SettingsError> {
        let instant = constraints::validate_clock(year, month, day, hour, minute)?;
        info!(instant = %instant, "device clock corrected");
        Ok(self.commit(self.settings.with_device_time(instant)))
    }

    /// Replace the whole record with the factory default snapshot.
    pub fn reset_to_default(&mut self) -> CameraSettings {
        warn!("restoring factory default settings");
        self.commit(CameraSettings::default())
    }

    /// Advance the device clock by exactly one simulated second. Called only
    /// from the clock simulator's event, never from operator paths.
    pub fn tick(&mut self) -> CameraSettings {
        let advanced = self.settings.current_device_time + TimeDelta::seconds(1);
        trace!(device_time = %advanced, "tick");
        self.commit(self.settings.with_device_time(advanced))
    }

    fn commit(&mut self, next: CameraSettings) -> CameraSettings {
        self.settings = next;
        // Persistence is fire-and-forget: a committed change never fails
        // for storage reasons
        if let Err(e) = self.gateway.save(&self.settings) {
            error!(error = %e, "failed to push settings snapshot to storage");
        }
        self.settings.clone()
    }
}
