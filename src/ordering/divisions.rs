use serde::{Deserialize, Serialize};

use crate::ordering::error::SlotError;
use crate::ordering::window::{EvaluationResult, OrderingStatus, TimeRemaining, evaluate};
use crate::types::time_of_day::TimeOfDay;
use crate::types::time_slot::TimeSlot;

/// Slot row as handed over by the data layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlotRecord {
    pub id: String,
    pub name: String,

    /// Free-form grouping such as `breakfast` or `dinner`.
    #[serde(default)]
    pub slot_type: String,

    pub start_time: String,
    pub end_time: String,
    pub cutoff_hours_before: f64,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub display_order: i32,
}

fn default_active() -> bool {
    true
}

impl SlotRecord {
    pub fn time_slot(&self) -> Result<TimeSlot, SlotError> {
        TimeSlot::parse(&self.start_time, &self.end_time, self.cutoff_hours_before)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveDivision {
    pub id: String,
    pub name: String,
    pub slot_type: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub cutoff_hours_before: f64,
    pub is_ordering_open: bool,
    pub time_until_cutoff: Option<TimeRemaining>,
    pub status_label: OrderingStatus,
}

impl ActiveDivision {
    pub fn evaluate(record: &SlotRecord, now: TimeOfDay) -> Result<Self, SlotError> {
        let slot = record.time_slot()?;
        let EvaluationResult {
            is_open,
            remaining,
            status,
        } = evaluate(&slot, now);

        Ok(Self {
            id: record.id.clone(),
            name: record.name.clone(),
            slot_type: record.slot_type.clone(),
            start_time: slot.start_time(),
            end_time: slot.end_time(),
            cutoff_hours_before: slot.cutoff_hours_before(),
            is_ordering_open: is_open,
            time_until_cutoff: remaining,
            status_label: status,
        })
    }
}

/// Active divisions in display order, each evaluated against the same `now`.
/// Records with an unusable slot definition are left out so no bogus
/// countdown reaches the caller.
pub fn list_active_divisions(records: &[SlotRecord], now: TimeOfDay) -> Vec<ActiveDivision> {
    let mut active: Vec<&SlotRecord> = records.iter().filter(|record| record.is_active).collect();
    active.sort_by_key(|record| record.display_order);

    active
        .into_iter()
        .filter_map(|record| match ActiveDivision::evaluate(record, now) {
            Ok(division) => Some(division),
            Err(error) => {
                tracing::warn!(division = %record.id, %error, "skipping division with invalid slot");
                None
            }
        })
        .collect()
}
