//! Session-only simulated counters
//!
//! SD-card occupancy and battery level shown on the dashboard. These live
//! outside the settings record and are never persisted: every session starts
//! from the same simulated card contents.

use tracing::info;

use crate::constants::{battery, sd_card};

pub struct SessionCounters {
    /// Simulated number of images on the card
    pub images_stored: u32,
    pub card_capacity: u32,
    pub battery_percent: u8,
}

impl Default for SessionCounters {
    fn default() -> Self {
        Self {
            images_stored: sd_card::INITIAL_IMAGES,
            card_capacity: sd_card::CAPACITY,
            battery_percent: battery::LEVEL_PERCENT,
        }
    }
}

impl SessionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// "Delete all": format the simulated card. The settings record is not
    /// touched by this operation.
    pub fn wipe_card(&mut self) {
        info!(deleted = self.images_stored, "simulated SD card formatted");
        self.images_stored = 0;
    }

    /// Occupancy string in the dashboard's `used/capacity` form.
    pub fn card_usage(&self) -> String {
        format!("{:04}/{:04}", self.images_stored, self.card_capacity)
    }

    pub fn battery(&self) -> String {
        format!("{}%", self.battery_percent)
    }
}
