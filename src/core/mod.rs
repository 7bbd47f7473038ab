//! Core module - snapshot types, ranking and row derivation

mod ranking;
mod rows;
mod time;
mod types;

pub(crate) use rows::build_table;
pub(crate) use types::{Snapshot, TimingRow};
