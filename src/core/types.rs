//! Session snapshot data model
//!
//! Mirrors the `output.json` document written by the telemetry recorder.
//! Every lap field that the recorder may leave out is an `Option`; absent
//! and `null` deserialize to the same `None`.

use serde::{Deserialize, Serialize};

/// Root of one render cycle's input
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) drivers: Vec<Driver>,
}

/// One competitor and their lap history
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub(crate) struct Driver {
    #[serde(rename = "driver", alias = "name")]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) best_lap_time: Option<f64>,
    /// Chronological completion order; the last entry may be in progress
    #[serde(default)]
    pub(crate) laps: Vec<Lap>,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub(crate) struct Lap {
    pub(crate) lap_number: u32,
    /// `None` while the lap is still being driven
    #[serde(default)]
    pub(crate) lap_time: Option<f64>,
    #[serde(default)]
    pub(crate) sector_1: Option<f64>,
    #[serde(default)]
    pub(crate) sector_2: Option<f64>,
    #[serde(default)]
    pub(crate) sector_3: Option<f64>,
    #[serde(default)]
    pub(crate) position: Option<u32>,
}

impl Lap {
    pub(crate) fn is_complete(&self) -> bool {
        self.lap_time.is_some()
    }

    pub(crate) fn sector(&self, sector: Sector) -> Option<f64> {
        match sector {
            Sector::One => self.sector_1,
            Sector::Two => self.sector_2,
            Sector::Three => self.sector_3,
        }
    }
}

impl Driver {
    /// Most recent lap, if any
    pub(crate) fn last_lap(&self) -> Option<&Lap> {
        self.laps.last()
    }

    /// Lap before the most recent one, if any
    pub(crate) fn previous_lap(&self) -> Option<&Lap> {
        self.laps.len().checked_sub(2).map(|i| &self.laps[i])
    }
}

/// One of the three fixed timing segments of a lap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sector {
    One,
    Two,
    Three,
}

impl Sector {
    pub(crate) const ALL: [Sector; 3] = [Sector::One, Sector::Two, Sector::Three];
}

/// One ranked display row; field order is the output column order
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub(crate) struct TimingRow {
    #[serde(rename = "driver")]
    pub(crate) driver_name: String,
    pub(crate) best_lap: String,
    pub(crate) sector_1: String,
    pub(crate) sector_2: String,
    pub(crate) sector_3: String,
    #[serde(rename = "lap")]
    pub(crate) current_lap: String,
}

impl TimingRow {
    /// Display fields in fixed column order
    pub(crate) fn fields(&self) -> [&str; 6] {
        [
            &self.driver_name,
            &self.best_lap,
            &self.sector_1,
            &self.sector_2,
            &self.sector_3,
            &self.current_lap,
        ]
    }
}
