mod clock;
mod engine;

pub use clock::{Phase, PhaseClock, DEFAULT_BREAK_SECS, DEFAULT_WORK_SECS};
pub use engine::TimerEngine;
