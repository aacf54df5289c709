pub mod divisions;
pub mod pricing;
