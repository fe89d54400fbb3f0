//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the simulator, providing a single source of truth for constant values.

/// Settings document location
pub mod storage {
    /// Directory under the platform data dir holding the settings document
    pub const APP_DIR: &str = "trailcam-sim";

    /// Fixed identifier for the single persisted settings document
    pub const SETTINGS_FILE: &str = "camera_settings.json";
}

/// Simulated onboard clock
pub mod clock {
    /// Wall-clock milliseconds per simulated second
    pub const TICK_INTERVAL_MS: u64 = 1000;
}

/// Simulated SD card occupancy (display only; no images are ever written)
pub mod sd_card {
    /// Number of images "on the card" at power-on
    pub const INITIAL_IMAGES: u32 = 123;

    /// Card capacity in images
    pub const CAPACITY: u32 = 1550;
}

/// Simulated battery gauge
pub mod battery {
    /// Battery level shown on the dashboard (fixed in this simulation)
    pub const LEVEL_PERCENT: u8 = 100;
}

/// Capture-timer window (fixed, non-editable in this simulation)
pub mod capture_timer {
    /// Start of the nightly capture window, 24-hour clock
    pub const START: (u32, u32) = (19, 0);

    /// End of the nightly capture window, 24-hour clock
    pub const STOP: (u32, u32) = (5, 0);
}
