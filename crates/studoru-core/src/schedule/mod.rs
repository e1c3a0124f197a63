//! Named schedule presets.
//!
//! A preset pairs a work duration with a break duration under a
//! user-chosen name. Presets are a thin keyed list; the interesting
//! behavior is [`apply`], which feeds a preset back into the live
//! configuration and reseeds the countdown.

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::storage::TimerConfig;
use crate::timer::PhaseClock;

/// One named (work, break) preset, in minutes.
///
/// Names are not required to be unique; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub name: String,
    #[serde(rename = "work")]
    pub work_min: u32,
    #[serde(rename = "break")]
    pub break_min: u32,
}

impl ScheduleEntry {
    pub fn new(name: impl Into<String>, work_min: u32, break_min: u32) -> Self {
        Self {
            name: name.into(),
            work_min,
            break_min,
        }
    }
}

/// Copy a preset's durations into the config and reseed the clock to an
/// idle work phase. The timer is not started.
///
/// The preset's numbers land in the config's duration fields as-is, so
/// they are interpreted in the config's active display unit.
pub fn apply(entry: &ScheduleEntry, config: &mut TimerConfig, clock: &mut PhaseClock) -> Event {
    config.work_duration = entry.work_min;
    config.break_duration = entry.break_min;
    clock.reset(config)
}
