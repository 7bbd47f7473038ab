//! Per-driver display row derivation
//!
//! Missing timing data never fails a render: every field degrades to an
//! empty string instead.

use super::ranking::rank_drivers;
use super::time::format_time;
use super::types::{Driver, Sector, Snapshot, TimingRow};

pub(crate) fn best_lap_display(driver: &Driver) -> String {
    driver.best_lap_time.map(format_time).unwrap_or_default()
}

/// Sector time from the most recent lap, or the lap before it when the
/// current lap has not crossed that sector yet.
pub(crate) fn sector_display(driver: &Driver, sector: Sector) -> String {
    driver
        .last_lap()
        .and_then(|lap| lap.sector(sector))
        .or_else(|| driver.previous_lap().and_then(|lap| lap.sector(sector)))
        .map(format_time)
        .unwrap_or_default()
}

/// Number of the last completed lap.
///
/// An in-progress lap counts as one less; a driver still on lap 1 shows
/// nothing rather than zero.
pub(crate) fn current_lap_display(driver: &Driver) -> String {
    let Some(lap) = driver.last_lap() else {
        return String::new();
    };
    if lap.is_complete() {
        return lap.lap_number.to_string();
    }
    match lap.lap_number.checked_sub(1) {
        Some(n) if n > 0 => n.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn build_row(driver: &Driver) -> TimingRow {
    let [sector_1, sector_2, sector_3] = Sector::ALL.map(|s| sector_display(driver, s));
    TimingRow {
        driver_name: driver.name.clone(),
        best_lap: best_lap_display(driver),
        sector_1,
        sector_2,
        sector_3,
        current_lap: current_lap_display(driver),
    }
}

/// Rank the snapshot's drivers and derive one row each, leader first
pub(crate) fn build_table(snapshot: &Snapshot) -> Vec<TimingRow> {
    rank_drivers(&snapshot.drivers)
        .into_iter()
        .map(|driver| {
            if driver.laps.is_empty() {
                log::debug!("{}: no laps recorded, rendering empty fields", driver.name);
            }
            build_row(driver)
        })
        .collect()
}
