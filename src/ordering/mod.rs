pub mod divisions;
pub mod error;
pub mod window;
