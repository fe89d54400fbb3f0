//! Closed value domains for every enumerated camera setting
//!
//! Each field's domain is a sum type: an out-of-range value is not
//! representable inside the record. Raw text only exists at the operator
//! boundary, where `ClosedDomain::parse` decides membership against the
//! exact menu labels the device uses (which are also the strings written
//! to the persisted document).

use serde::{Deserialize, Serialize};

/// A field domain with a fixed, finite set of legal values.
pub trait ClosedDomain: Copy + Sized + 'static {
    /// Every legal member, in menu order.
    const MEMBERS: &'static [Self];

    /// The exact label the operator menus and the persisted document use.
    fn label(self) -> &'static str;

    /// Parse an operator-supplied label; `None` when it is not a member.
    fn parse(raw: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.label() == raw)
    }
}

macro_rules! closed_domain {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant, )+
        }

        impl ClosedDomain for $name {
            const MEMBERS: &'static [Self] = &[ $(Self::$variant),+ ];

            fn label(self) -> &'static str {
                match self { $(Self::$variant => $label),+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

closed_domain! {
    /// Operating mode of the camera
    CameraMode {
        TrailCam => "TRAIL CAM",
        TimelapsePlus => "TIMELAPSE PLUS",
        Video => "VIDEO",
    }
}

closed_domain! {
    /// Still-image quality
    PhotoResolution {
        Mp4 => "4MP",
        Mp8 => "8MP",
        Mp12 => "12MP",
        Mp24 => "24MP",
    }
}

closed_domain! {
    VideoResolution {
        Fhd30 => "1920x1080 30fps",
        Fhd60 => "1920x1080 60fps",
    }
}

closed_domain! {
    VideoLength {
        S5 => "5s",
        S10 => "10s",
        S20 => "20s",
        S30 => "30s",
        Min1 => "1min",
        Min2 => "2min",
    }
}

closed_domain! {
    /// Delay between triggered captures
    PhotoDelay {
        S1 => "1s",
        S5 => "5s",
        S10 => "10s",
        S20 => "20s",
        S30 => "30s",
        Min1 => "1min",
        Min5 => "5min",
        Min10 => "10min",
        Min30 => "30min",
        Min60 => "60min",
    }
}

closed_domain! {
    MultiShotMode {
        Single => "SINGLE",
        MultiShot => "MULTI SHOT (2-8 shots)",
        RapidFire => "RAPID FIRE (2-8 shots)",
    }
}

closed_domain! {
    TempUnits {
        Fahrenheit => "Fahrenheit",
        Celsius => "Celsius",
    }
}

closed_domain! {
    MotionDetectionRange {
        Normal => "NORMAL RANGE (60ft)",
        Long => "LONG RANGE (100ft)",
    }
}

closed_domain! {
    TriggerSpeed {
        Normal => "NORMAL (0.7s)",
        Fast => "FAST (0.1s)",
    }
}

closed_domain! {
    BatteryType {
        Alkaline => "Alkaline",
        Lithium => "Lithium",
        Rechargeable => "Rechargeable",
    }
}

closed_domain! {
    /// Interval between timelapse frames
    TimeLapseFrequency {
        S5 => "5s",
        S10 => "10s",
        S20 => "20s",
        S30 => "30s",
        Min1 => "1min",
        Min2 => "2min",
        Min5 => "5min",
        Min10 => "10min",
        Min30 => "30min",
        Min60 => "60min",
    }
}

closed_domain! {
    /// Daily window the timelapse schedule covers
    TimeLapsePeriod {
        AllDay => "ALL DAY",
        Hours1 => "1 HOUR",
        Hours2 => "2 HOUR",
        Hours3 => "3 HOUR",
        Hours4 => "4 HOUR",
    }
}

closed_domain! {
    IrFlashRange {
        Economy => "Economy",
        LongRange => "Long Range",
        FastMotion => "Fast Motion",
    }
}

closed_domain! {
    Language {
        English => "English",
    }
}

/// Identifier for every field the dashboard can show and the operator
/// can (attempt to) change. `Ord` so applicability maps iterate in a
/// stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Mode,
    VideoResolution,
    VideoLength,
    PhotoResolution,
    MultiShotMode,
    PhotoDelay,
    MotionDetection,
    TriggerSpeed,
    TempUnits,
    SdManagement,
    ImageDataStrip,
    BatteryType,
    IrFlashRange,
    SmartIrVideo,
    Hdr,
    Language,
    CameraName,
    MotionTest,
    TimeLapseEnabled,
    TimeLapseFrequency,
    TimeLapsePeriod,
    CaptureTimerEnabled,
    CaptureTimerStart,
    CaptureTimerStop,
}

impl FieldId {
    /// Every field, in dashboard order.
    pub const ALL: &'static [FieldId] = &[
        FieldId::Mode,
        FieldId::VideoResolution,
        FieldId::VideoLength,
        FieldId::PhotoResolution,
        FieldId::MultiShotMode,
        FieldId::PhotoDelay,
        FieldId::MotionDetection,
        FieldId::TriggerSpeed,
        FieldId::TempUnits,
        FieldId::SdManagement,
        FieldId::ImageDataStrip,
        FieldId::BatteryType,
        FieldId::IrFlashRange,
        FieldId::SmartIrVideo,
        FieldId::Hdr,
        FieldId::Language,
        FieldId::CameraName,
        FieldId::MotionTest,
        FieldId::TimeLapseEnabled,
        FieldId::TimeLapseFrequency,
        FieldId::TimeLapsePeriod,
        FieldId::CaptureTimerEnabled,
        FieldId::CaptureTimerStart,
        FieldId::CaptureTimerStop,
    ];

    /// Human-readable label, matching the device's menu wording.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Mode => "Operation Mode",
            FieldId::VideoResolution => "Video Resolution",
            FieldId::VideoLength => "Video Length",
            FieldId::PhotoResolution => "Photo Quality",
            FieldId::MultiShotMode => "Multi Shot Mode",
            FieldId::PhotoDelay => "Photo Delay",
            FieldId::MotionDetection => "Motion Detection",
            FieldId::TriggerSpeed => "Trigger Speed",
            FieldId::TempUnits => "Temp Units",
            FieldId::SdManagement => "SD Management",
            FieldId::ImageDataStrip => "Image Data Strip",
            FieldId::BatteryType => "Battery Type",
            FieldId::IrFlashRange => "IR Flash Range",
            FieldId::SmartIrVideo => "Smart IR Video",
            FieldId::Hdr => "HDR",
            FieldId::Language => "Language",
            FieldId::CameraName => "Camera Name",
            FieldId::MotionTest => "Motion Test",
            FieldId::TimeLapseEnabled => "Timelapse",
            FieldId::TimeLapseFrequency => "Timelapse Frequency",
            FieldId::TimeLapsePeriod => "Timelapse Period",
            FieldId::CaptureTimerEnabled => "Capture Timer",
            FieldId::CaptureTimerStart => "Capture Timer Start",
            FieldId::CaptureTimerStop => "Capture Timer Stop",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated value for one mutable field, ready to commit.
///
/// Produced only by the validation layer; carrying the domain type means a
/// committed value can never be outside its field's domain.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Mode(CameraMode),
    PhotoResolution(PhotoResolution),
    VideoResolution(VideoResolution),
    VideoLength(VideoLength),
    PhotoDelay(PhotoDelay),
    MultiShotMode(MultiShotMode),
    TempUnits(TempUnits),
    CameraName(String),
    ImageDataStrip(bool),
    MotionTest(bool),
    MotionDetection(MotionDetectionRange),
    TriggerSpeed(TriggerSpeed),
    BatteryType(BatteryType),
    IrFlashRange(IrFlashRange),
    SmartIrVideo(bool),
    SdManagement(bool),
    TimeLapseEnabled(bool),
    TimeLapseFrequency(TimeLapseFrequency),
    TimeLapsePeriod(TimeLapsePeriod),
    Language(Language),
    CaptureTimerEnabled(bool),
    Hdr(bool),
}
