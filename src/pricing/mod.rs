pub mod delivery;
pub mod quote;
pub mod splitter;
