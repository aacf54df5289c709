use serde::Serialize;

use crate::ordering::error::SlotError;
use crate::types::time_of_day::TimeOfDay;

/// Recurring delivery window plus the ordering cutoff that precedes it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TimeSlot {
    start_time: TimeOfDay,

    /// Exclusive. An end at or before the start means the slot runs past midnight.
    end_time: TimeOfDay,

    /// Hours before `start_time` at which ordering closes.
    cutoff_hours_before: f64,
}

impl TimeSlot {
    pub fn new(
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        cutoff_hours_before: f64,
    ) -> Result<Self, SlotError> {
        if !cutoff_hours_before.is_finite() || cutoff_hours_before < 0.0 {
            return Err(SlotError::InvalidCutoff {
                hours: cutoff_hours_before,
            });
        }

        Ok(Self {
            start_time,
            end_time,
            cutoff_hours_before,
        })
    }

    pub fn parse(start_time: &str, end_time: &str, cutoff_hours_before: f64) -> Result<Self, SlotError> {
        Self::new(start_time.parse()?, end_time.parse()?, cutoff_hours_before)
    }

    pub fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    pub fn end_time(&self) -> TimeOfDay {
        self.end_time
    }

    pub fn cutoff_hours_before(&self) -> f64 {
        self.cutoff_hours_before
    }

    /// Cutoff lead time rounded to whole minutes.
    pub fn cutoff_minutes_before(&self) -> i32 {
        (self.cutoff_hours_before * 60.0).round() as i32
    }

    pub fn spans_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    pub fn contains(&self, now: TimeOfDay) -> bool {
        if self.spans_midnight() {
            now >= self.start_time || now < self.end_time
        } else {
            now >= self.start_time && now < self.end_time
        }
    }
}
