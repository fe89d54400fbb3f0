//! The authoritative settings snapshot
//!
//! `CameraSettings` is a value object: every field always holds a legal
//! value, and mutation happens by constructing a new snapshot rather than
//! editing in place. The serde layout here is the persisted document
//! layout (snake_case keys, ISO-8601 clock string, `"HH:MM"` timer times).

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::capture_timer;
use crate::settings::domains::{
    BatteryType, CameraMode, FieldValue, IrFlashRange, Language, MotionDetectionRange,
    MultiShotMode, PhotoDelay, PhotoResolution, TempUnits, TimeLapseFrequency, TimeLapsePeriod,
    TriggerSpeed, VideoLength, VideoResolution,
};

/// Nightly capture window. Start/stop are fixed constants in this
/// simulation; the operator may only toggle `enabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureTimer {
    pub enabled: bool,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub stop_time: NaiveTime,
}

impl Default for CaptureTimer {
    fn default() -> Self {
        let (start_h, start_m) = capture_timer::START;
        let (stop_h, stop_m) = capture_timer::STOP;
        Self {
            enabled: false,
            start_time: NaiveTime::from_hms_opt(start_h, start_m, 0)
                .expect("fixed timer window constant"),
            stop_time: NaiveTime::from_hms_opt(stop_h, stop_m, 0)
                .expect("fixed timer window constant"),
        }
    }
}

/// The full configuration record. One instance exists per device; it is
/// replaced wholesale on every committed change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub mode: CameraMode,
    pub photo_resolution: PhotoResolution,
    pub video_resolution: VideoResolution,
    pub video_length: VideoLength,
    pub photo_delay: PhotoDelay,
    pub multi_shot_mode: MultiShotMode,
    pub temp_units: TempUnits,
    pub camera_name: String,
    pub image_data_strip: bool,
    pub motion_test: bool,
    pub motion_detection: MotionDetectionRange,
    pub trigger_speed: TriggerSpeed,
    pub battery_type: BatteryType,
    pub time_lapse_enabled: bool,
    pub time_lapse_freq: TimeLapseFrequency,
    pub time_lapse_period: TimeLapsePeriod,
    pub smart_ir_video: bool,
    pub ir_flash_range: IrFlashRange,
    pub sd_management: bool,
    pub language: Language,
    pub capture_timer: CaptureTimer,
    pub hdr: bool,
    /// Simulated device clock. Advanced by ticks, moved only by confirmed
    /// operator corrections.
    #[serde(with = "iso_datetime")]
    pub current_device_time: NaiveDateTime,
}

impl Default for CameraSettings {
    /// The factory default snapshot. The device clock starts at the fixed
    /// simulated epoch, 1970-01-01 00:00:00.
    fn default() -> Self {
        Self {
            mode: CameraMode::TrailCam,
            photo_resolution: PhotoResolution::Mp12,
            video_resolution: VideoResolution::Fhd30,
            video_length: VideoLength::S30,
            photo_delay: PhotoDelay::S1,
            multi_shot_mode: MultiShotMode::Single,
            temp_units: TempUnits::Fahrenheit,
            camera_name: "BROWNING CAM".to_string(),
            image_data_strip: true,
            motion_test: false,
            motion_detection: MotionDetectionRange::Normal,
            trigger_speed: TriggerSpeed::Normal,
            battery_type: BatteryType::Alkaline,
            time_lapse_enabled: false,
            time_lapse_freq: TimeLapseFrequency::S5,
            time_lapse_period: TimeLapsePeriod::AllDay,
            smart_ir_video: false,
            ir_flash_range: IrFlashRange::Economy,
            sd_management: false,
            language: Language::English,
            capture_timer: CaptureTimer::default(),
            hdr: false,
            current_device_time: NaiveDateTime::default(),
        }
    }
}

impl CameraSettings {
    /// Build a new snapshot differing only in the targeted field.
    ///
    /// The capture-timer toggle replaces the nested sub-entity; its fixed
    /// start/stop times are carried over untouched.
    pub fn with_value(&self, value: FieldValue) -> CameraSettings {
        let mut next = self.clone();
        match value {
            FieldValue::Mode(v) => next.mode = v,
            FieldValue::PhotoResolution(v) => next.photo_resolution = v,
            FieldValue::VideoResolution(v) => next.video_resolution = v,
            FieldValue::VideoLength(v) => next.video_length = v,
            FieldValue::PhotoDelay(v) => next.photo_delay = v,
            FieldValue::MultiShotMode(v) => next.multi_shot_mode = v,
            FieldValue::TempUnits(v) => next.temp_units = v,
            FieldValue::CameraName(v) => next.camera_name = v,
            FieldValue::ImageDataStrip(v) => next.image_data_strip = v,
            FieldValue::MotionTest(v) => next.motion_test = v,
            FieldValue::MotionDetection(v) => next.motion_detection = v,
            FieldValue::TriggerSpeed(v) => next.trigger_speed = v,
            FieldValue::BatteryType(v) => next.battery_type = v,
            FieldValue::IrFlashRange(v) => next.ir_flash_range = v,
            FieldValue::SmartIrVideo(v) => next.smart_ir_video = v,
            FieldValue::SdManagement(v) => next.sd_management = v,
            FieldValue::TimeLapseEnabled(v) => next.time_lapse_enabled = v,
            FieldValue::TimeLapseFrequency(v) => next.time_lapse_freq = v,
            FieldValue::TimeLapsePeriod(v) => next.time_lapse_period = v,
            FieldValue::Language(v) => next.language = v,
            FieldValue::CaptureTimerEnabled(v) => {
                next.capture_timer = CaptureTimer {
                    enabled: v,
                    ..next.capture_timer
                };
            }
            FieldValue::Hdr(v) => next.hdr = v,
        }
        next
    }

    /// Build a new snapshot with the device clock at `instant`.
    pub fn with_device_time(&self, instant: NaiveDateTime) -> CameraSettings {
        let mut next = self.clone();
        next.current_device_time = instant;
        next
    }
}

/// `"HH:MM"` 24-hour serialization for the fixed timer times
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// ISO-8601 `YYYY-MM-DDTHH:MM:SS` serialization for the device clock
mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_default_snapshot_matches_factory_values() {
        let settings = CameraSettings::default();

        assert_eq!(settings.mode, CameraMode::TrailCam);
        assert_eq!(settings.photo_resolution, PhotoResolution::Mp12);
        assert_eq!(settings.video_resolution, VideoResolution::Fhd30);
        assert_eq!(settings.video_length, VideoLength::S30);
        assert_eq!(settings.photo_delay, PhotoDelay::S1);
        assert_eq!(settings.multi_shot_mode, MultiShotMode::Single);
        assert_eq!(settings.temp_units, TempUnits::Fahrenheit);
        assert_eq!(settings.camera_name, "BROWNING CAM");
        assert!(settings.image_data_strip);
        assert!(!settings.motion_test);
        assert_eq!(settings.motion_detection, MotionDetectionRange::Normal);
        assert_eq!(settings.trigger_speed, TriggerSpeed::Normal);
        assert_eq!(settings.battery_type, BatteryType::Alkaline);
        assert!(!settings.time_lapse_enabled);
        assert_eq!(settings.time_lapse_freq, TimeLapseFrequency::S5);
        assert_eq!(settings.time_lapse_period, TimeLapsePeriod::AllDay);
        assert!(!settings.smart_ir_video);
        assert_eq!(settings.ir_flash_range, IrFlashRange::Economy);
        assert!(!settings.sd_management);
        assert_eq!(settings.language, Language::English);
        assert!(!settings.hdr);

        assert!(!settings.capture_timer.enabled);
        assert_eq!(settings.capture_timer.start_time.hour(), 19);
        assert_eq!(settings.capture_timer.stop_time.hour(), 5);

        let epoch = settings.current_device_time;
        assert_eq!((epoch.year(), epoch.month(), epoch.day()), (1970, 1, 1));
        assert_eq!((epoch.hour(), epoch.minute(), epoch.second()), (0, 0, 0));
    }

    #[test]
    fn test_with_value_changes_only_the_targeted_field() {
        let before = CameraSettings::default();
        let after = before.with_value(FieldValue::BatteryType(BatteryType::Lithium));

        assert_eq!(after.battery_type, BatteryType::Lithium);

        // Everything else is untouched
        let reverted = after.with_value(FieldValue::BatteryType(BatteryType::Alkaline));
        assert_eq!(reverted, before);
    }

    #[test]
    fn test_capture_timer_toggle_keeps_fixed_window() {
        let before = CameraSettings::default();
        let after = before.with_value(FieldValue::CaptureTimerEnabled(true));

        assert!(after.capture_timer.enabled);
        assert_eq!(after.capture_timer.start_time, before.capture_timer.start_time);
        assert_eq!(after.capture_timer.stop_time, before.capture_timer.stop_time);
    }

    #[test]
    fn test_with_device_time_replaces_only_the_clock() {
        let before = CameraSettings::default();
        let instant = NaiveDateTime::parse_from_str("2024-06-15T08:30:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let after = before.with_device_time(instant);

        assert_eq!(after.current_device_time, instant);
        assert_eq!(after.with_device_time(before.current_device_time), before);
    }

    #[test]
    fn test_document_layout() {
        let json = serde_json::to_value(CameraSettings::default()).unwrap();

        assert_eq!(json["mode"], "TRAIL CAM");
        assert_eq!(json["photo_resolution"], "12MP");
        assert_eq!(json["current_device_time"], "1970-01-01T00:00:00");
        assert_eq!(json["capture_timer"]["enabled"], false);
        assert_eq!(json["capture_timer"]["start_time"], "19:00");
        assert_eq!(json["capture_timer"]["stop_time"], "05:00");
    }

    #[test]
    fn test_document_roundtrip_preserves_every_field() {
        let mut original = CameraSettings::default();
        original.mode = CameraMode::Video;
        original.video_length = VideoLength::Min2;
        original.time_lapse_enabled = true;
        original.capture_timer.enabled = true;
        original.current_device_time =
            NaiveDateTime::parse_from_str("2031-12-31T23:59:59", "%Y-%m-%dT%H:%M:%S").unwrap();

        let json = serde_json::to_string(&original).unwrap();
        let restored: CameraSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
