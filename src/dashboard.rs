//! Read-only dashboard projection (the "LCD" view)
//!
//! Derives a flat display model from a settings snapshot and its
//! applicability map. Pure formatting: every validity decision was already
//! made upstream by the constraint engine.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::session::SessionCounters;
use crate::settings::domains::ClosedDomain;
use crate::settings::{CameraSettings, FieldId};

/// One dashboard row: a field's label and current value, flagged with
/// whether the value is meaningful under the current mode and toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayField {
    pub field: FieldId,
    pub label: &'static str,
    pub value: String,
    pub applicable: bool,
}

/// Everything the LCD shows, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// Calendar date of the simulated clock, `YYYY/MM/DD`
    pub date: String,
    /// 12-hour clock with AM/PM
    pub clock: String,
    /// Simulated card occupancy, `used/capacity`
    pub card_usage: String,
    /// Simulated battery level
    pub battery: String,
    pub fields: Vec<DisplayField>,
}

/// Derive the display model for one snapshot.
pub fn project(
    settings: &CameraSettings,
    applicability: &BTreeMap<FieldId, bool>,
    counters: &SessionCounters,
) -> DisplayModel {
    let fields = FieldId::ALL
        .iter()
        .map(|&field| DisplayField {
            field,
            label: field.label(),
            value: display_value(settings, field),
            applicable: applicability.get(&field).copied().unwrap_or(true),
        })
        .collect();

    DisplayModel {
        date: format_date(settings.current_device_time),
        clock: format_clock(settings.current_device_time),
        card_usage: counters.card_usage(),
        battery: counters.battery(),
        fields,
    }
}

/// Current value of `field`, formatted the way the LCD renders it.
fn display_value(settings: &CameraSettings, field: FieldId) -> String {
    match field {
        FieldId::Mode => settings.mode.label().to_string(),
        FieldId::PhotoResolution => settings.photo_resolution.label().to_string(),
        FieldId::VideoResolution => settings.video_resolution.label().to_string(),
        FieldId::VideoLength => settings.video_length.label().to_string(),
        FieldId::PhotoDelay => settings.photo_delay.label().to_string(),
        FieldId::MultiShotMode => settings.multi_shot_mode.label().to_string(),
        FieldId::TempUnits => settings.temp_units.label().to_string(),
        FieldId::MotionDetection => settings.motion_detection.label().to_string(),
        FieldId::TriggerSpeed => settings.trigger_speed.label().to_string(),
        FieldId::BatteryType => settings.battery_type.label().to_string(),
        FieldId::IrFlashRange => settings.ir_flash_range.label().to_string(),
        FieldId::TimeLapseFrequency => settings.time_lapse_freq.label().to_string(),
        FieldId::TimeLapsePeriod => settings.time_lapse_period.label().to_string(),
        FieldId::Language => settings.language.label().to_string(),
        FieldId::CameraName => settings.camera_name.clone(),
        FieldId::ImageDataStrip => on_off(settings.image_data_strip),
        FieldId::MotionTest => on_off(settings.motion_test),
        FieldId::SmartIrVideo => on_off(settings.smart_ir_video),
        FieldId::SdManagement => on_off(settings.sd_management),
        FieldId::TimeLapseEnabled => on_off(settings.time_lapse_enabled),
        FieldId::CaptureTimerEnabled => on_off(settings.capture_timer.enabled),
        FieldId::Hdr => on_off(settings.hdr),
        FieldId::CaptureTimerStart => settings.capture_timer.start_time.format("%H:%M").to_string(),
        FieldId::CaptureTimerStop => settings.capture_timer.stop_time.format("%H:%M").to_string(),
    }
}

fn on_off(value: bool) -> String {
    if value { "ON" } else { "OFF" }.to_string()
}

fn format_date(instant: NaiveDateTime) -> String {
    format!("{:04}/{:02}/{:02}", instant.year(), instant.month(), instant.day())
}

/// 12-hour clock; hour 0 renders as 12.
fn format_clock(instant: NaiveDateTime) -> String {
    let hour = instant.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, instant.minute(), meridiem)
}
