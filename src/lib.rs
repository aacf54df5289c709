//! Ordering-window and price-split engines for a cloud kitchen storefront.
//!
//! Both engines are pure: callers capture the current time once and pass
//! it in, and pricing works on plain numbers.

pub mod admission;
pub mod config;
pub mod ordering;
pub mod pricing;
pub mod types;

pub use ordering::divisions::{ActiveDivision, SlotRecord, list_active_divisions};
pub use ordering::error::SlotError;
pub use ordering::window::{EvaluationResult, OrderingStatus, TimeRemaining, evaluate};
pub use pricing::splitter::{
    PricingInput, PricingRecord, PricingResult, cook_share, customer_price, margin,
    platform_revenue,
};
pub use types::time_of_day::TimeOfDay;
pub use types::time_slot::TimeSlot;
