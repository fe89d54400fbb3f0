//! The constraint engine: what is a legal configuration
//!
//! Pure and stateless. Applicability decides which fields are semantically
//! meaningful given the current mode and feature toggles; validation decides
//! whether a proposed mutation is legal. Nothing here mutates state, and
//! every outcome is an explicit value.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::SettingsError;
use crate::settings::domains::{
    BatteryType, CameraMode, ClosedDomain, IrFlashRange, Language, MotionDetectionRange,
    MultiShotMode, PhotoDelay, PhotoResolution, TempUnits, TimeLapseFrequency, TimeLapsePeriod,
    TriggerSpeed, VideoLength, VideoResolution,
};
use crate::settings::{CameraSettings, FieldId, FieldValue};

/// Whether `field`'s current value is meaningful given the rest of the record.
///
/// Video fields are tied to the VIDEO mode exactly; the photo-quality field
/// to every other mode. Timelapse and capture-timer detail fields follow
/// their enable toggles. Everything else is always applicable.
pub fn is_applicable(settings: &CameraSettings, field: FieldId) -> bool {
    match field {
        FieldId::VideoResolution | FieldId::VideoLength => settings.mode == CameraMode::Video,
        FieldId::PhotoResolution => settings.mode != CameraMode::Video,
        FieldId::TimeLapseFrequency | FieldId::TimeLapsePeriod => settings.time_lapse_enabled,
        FieldId::CaptureTimerStart | FieldId::CaptureTimerStop => settings.capture_timer.enabled,
        _ => true,
    }
}

/// Applicability of every field, keyed by field id.
pub fn applicability(settings: &CameraSettings) -> BTreeMap<FieldId, bool> {
    FieldId::ALL
        .iter()
        .map(|&field| (field, is_applicable(settings, field)))
        .collect()
}

/// Check a proposed raw value against `field`'s closed domain.
///
/// Raw text arrives from the operator surface; membership is decided against
/// the exact menu labels. Boolean toggles accept only `"true"`/`"false"`
/// (the values the operator menus submit). The camera name is the one
/// free-text field and must be non-empty.
pub fn validate(field: FieldId, raw: &str) -> Result<FieldValue, SettingsError> {
    fn member<D: ClosedDomain>(field: FieldId, raw: &str) -> Result<D, SettingsError> {
        D::parse(raw).ok_or_else(|| SettingsError::InvalidEnumValue {
            field,
            value: raw.to_string(),
        })
    }

    let value = match field {
        FieldId::Mode => FieldValue::Mode(member::<CameraMode>(field, raw)?),
        FieldId::PhotoResolution => {
            FieldValue::PhotoResolution(member::<PhotoResolution>(field, raw)?)
        }
        FieldId::VideoResolution => {
            FieldValue::VideoResolution(member::<VideoResolution>(field, raw)?)
        }
        FieldId::VideoLength => FieldValue::VideoLength(member::<VideoLength>(field, raw)?),
        FieldId::PhotoDelay => FieldValue::PhotoDelay(member::<PhotoDelay>(field, raw)?),
        FieldId::MultiShotMode => FieldValue::MultiShotMode(member::<MultiShotMode>(field, raw)?),
        FieldId::TempUnits => FieldValue::TempUnits(member::<TempUnits>(field, raw)?),
        FieldId::MotionDetection => {
            FieldValue::MotionDetection(member::<MotionDetectionRange>(field, raw)?)
        }
        FieldId::TriggerSpeed => FieldValue::TriggerSpeed(member::<TriggerSpeed>(field, raw)?),
        FieldId::BatteryType => FieldValue::BatteryType(member::<BatteryType>(field, raw)?),
        FieldId::IrFlashRange => FieldValue::IrFlashRange(member::<IrFlashRange>(field, raw)?),
        FieldId::TimeLapseFrequency => {
            FieldValue::TimeLapseFrequency(member::<TimeLapseFrequency>(field, raw)?)
        }
        FieldId::TimeLapsePeriod => {
            FieldValue::TimeLapsePeriod(member::<TimeLapsePeriod>(field, raw)?)
        }
        FieldId::Language => FieldValue::Language(member::<Language>(field, raw)?),

        FieldId::CameraName => {
            if raw.trim().is_empty() {
                return Err(SettingsError::EmptyName);
            }
            FieldValue::CameraName(raw.to_string())
        }

        FieldId::ImageDataStrip => FieldValue::ImageDataStrip(toggle(field, raw)?),
        FieldId::MotionTest => FieldValue::MotionTest(toggle(field, raw)?),
        FieldId::SmartIrVideo => FieldValue::SmartIrVideo(toggle(field, raw)?),
        FieldId::SdManagement => FieldValue::SdManagement(toggle(field, raw)?),
        FieldId::TimeLapseEnabled => FieldValue::TimeLapseEnabled(toggle(field, raw)?),
        FieldId::CaptureTimerEnabled => FieldValue::CaptureTimerEnabled(toggle(field, raw)?),
        FieldId::Hdr => FieldValue::Hdr(toggle(field, raw)?),

        FieldId::CaptureTimerStart | FieldId::CaptureTimerStop => {
            return Err(SettingsError::FixedField { field });
        }
    };
    Ok(value)
}

fn toggle(field: FieldId, raw: &str) -> Result<bool, SettingsError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SettingsError::InvalidEnumValue {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Check an operator-confirmed clock correction against the real calendar.
///
/// Rejects day-of-month values past the month's length (including Feb 29
/// outside leap years) and out-of-range hour/minute values.
pub fn validate_clock(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<NaiveDateTime, SettingsError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(SettingsError::InvalidDate {
            year,
            month,
            day,
            hour,
            minute,
        })
}
