use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("invalid time of day \"{value}\", expected HH:MM")]
    InvalidTime { value: String },

    #[error("invalid cutoff of {hours} hours, must be a finite non-negative number")]
    InvalidCutoff { hours: f64 },
}
