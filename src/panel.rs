//! Operator boundary: the control panel the external UI talks to
//!
//! Owns the store plus the session counters and dispatches every event the
//! consumer loop receives. Rejections are reported back (and logged for the
//! operator display); they never tear anything down.

use tracing::{info, warn};

use crate::constraints;
use crate::dashboard::{self, DisplayModel};
use crate::error::SettingsError;
use crate::events::{DeviceEvent, OperatorRequest};
use crate::session::SessionCounters;
use crate::settings::{CameraSettings, FieldId};
use crate::store::SettingsStore;

pub struct ControlPanel {
    store: SettingsStore,
    counters: SessionCounters,
}

impl ControlPanel {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            counters: SessionCounters::new(),
        }
    }

    /// Current dashboard contents, re-derived from the live snapshot.
    pub fn display_model(&self) -> DisplayModel {
        let settings = self.store.current();
        dashboard::project(settings, &constraints::applicability(settings), &self.counters)
    }

    pub fn propose_field_change(
        &mut self,
        field: FieldId,
        value: &str,
    ) -> Result<CameraSettings, SettingsError> {
        self.store.apply(field, value)
    }

    pub fn confirm_time(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<CameraSettings, SettingsError> {
        self.store.confirm_time(year, month, day, hour, minute)
    }

    pub fn reset_to_default(&mut self) -> CameraSettings {
        self.store.reset_to_default()
    }

    /// Format the simulated card. No-op for the settings record.
    pub fn delete_all(&mut self) -> &'static str {
        self.counters.wipe_card();
        "All images deleted, SD card formatted"
    }

    /// Firmware check. Always current in this simulation.
    pub fn firmware_upgrade(&self) -> &'static str {
        "Firmware is already up to date"
    }

    /// Apply one event from the consumer loop. Mutations and ticks are
    /// strictly ordered by the caller; each runs to completion here.
    pub fn handle_event(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Tick => {
                self.store.tick();
            }
            DeviceEvent::Operator(request) => match request {
                OperatorRequest::SetField { field, value } => {
                    if let Err(rejection) = self.propose_field_change(field, &value) {
                        warn!(field = %field, error = %rejection, "field change rejected");
                    }
                }
                OperatorRequest::ConfirmTime {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                } => {
                    if let Err(rejection) = self.confirm_time(year, month, day, hour, minute) {
                        warn!(error = %rejection, "time correction rejected");
                    }
                }
                OperatorRequest::ResetDefaults => {
                    self.reset_to_default();
                }
                OperatorRequest::DeleteAll => {
                    let status = self.delete_all();
                    info!(status = status, "delete all");
                }
                OperatorRequest::FirmwareUpgrade => {
                    info!(status = self.firmware_upgrade(), "firmware upgrade");
                }
            },
            // Teardown is the loop's decision; nothing to apply here
            DeviceEvent::Shutdown => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::domains::CameraMode;
    use anyhow::Result;
    use chrono::Timelike;
    use crate::persistence::SettingsGateway;

    struct NullGateway;

    impl SettingsGateway for NullGateway {
        fn load(&self) -> Result<Option<CameraSettings>> {
            Ok(None)
        }

        fn save(&self, _settings: &CameraSettings) -> Result<()> {
            Ok(())
        }
    }

    fn panel() -> ControlPanel {
        ControlPanel::new(SettingsStore::new(CameraSettings::default(), Box::new(NullGateway)))
    }

    #[test]
    fn test_tick_event_advances_the_displayed_clock() {
        let mut panel = panel();
        for _ in 0..90 {
            panel.handle_event(DeviceEvent::Tick);
        }

        let model = panel.display_model();
        assert_eq!(model.clock, "12:01 AM");
        assert_eq!(model.date, "1970/01/01");
    }

    #[test]
    fn test_rejected_set_field_event_changes_nothing() {
        let mut panel = panel();
        let before = panel.display_model();

        panel.handle_event(DeviceEvent::Operator(OperatorRequest::SetField {
            field: FieldId::Mode,
            value: "PANORAMA".to_string(),
        }));

        assert_eq!(panel.display_model(), before);
    }

    #[test]
    fn test_set_field_event_commits() {
        let mut panel = panel();
        panel.handle_event(DeviceEvent::Operator(OperatorRequest::SetField {
            field: FieldId::Mode,
            value: "VIDEO".to_string(),
        }));

        let snapshot = panel
            .propose_field_change(FieldId::VideoLength, "2min")
            .unwrap();
        assert_eq!(snapshot.mode, CameraMode::Video);

        let model = panel.display_model();
        let video_length = model
            .fields
            .iter()
            .find(|f| f.field == FieldId::VideoLength)
            .unwrap();
        assert!(video_length.applicable);
        assert_eq!(video_length.value, "2min");
    }

    #[test]
    fn test_delete_all_wipes_the_card_but_not_the_record() {
        let mut panel = panel();
        panel
            .propose_field_change(FieldId::CameraName, "NORTH RIDGE")
            .unwrap();

        panel.handle_event(DeviceEvent::Operator(OperatorRequest::DeleteAll));

        let model = panel.display_model();
        assert_eq!(model.card_usage, "0000/1550");
        let name = model
            .fields
            .iter()
            .find(|f| f.field == FieldId::CameraName)
            .unwrap();
        assert_eq!(name.value, "NORTH RIDGE");
    }

    #[test]
    fn test_confirm_time_event_sets_the_clock() {
        let mut panel = panel();
        panel.handle_event(DeviceEvent::Operator(OperatorRequest::ConfirmTime {
            year: 2027,
            month: 3,
            day: 14,
            hour: 15,
            minute: 9,
        }));

        let model = panel.display_model();
        assert_eq!(model.date, "2027/03/14");
        assert_eq!(model.clock, "3:09 PM");

        // Cadence-independent: the correction itself added no ticks
        let clock = panel.confirm_time(2027, 3, 14, 15, 9).unwrap();
        assert_eq!(clock.current_device_time.second(), 0);
    }

    #[test]
    fn test_firmware_upgrade_is_a_pure_no_op() {
        let mut panel = panel();
        let before = panel.display_model();
        panel.handle_event(DeviceEvent::Operator(OperatorRequest::FirmwareUpgrade));
        assert_eq!(panel.display_model(), before);
        assert_eq!(panel.firmware_upgrade(), "Firmware is already up to date");
    }
}
