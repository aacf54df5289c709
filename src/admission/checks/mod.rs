pub mod item_availability;
pub mod minimum_sets;
pub mod ordering_window;
