use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginKind {
    Percent,
    Fixed,
}

impl fmt::Display for MarginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent => write!(f, "percent"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

/// Platform markup layered on top of a cook's base price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MarginPolicy {
    /// Percentage of the base price.
    Percent(f64),
    /// Absolute amount per unit, independent of the base price.
    Fixed(f64),
}

impl MarginPolicy {
    pub fn new(kind: MarginKind, value: f64) -> Self {
        match kind {
            MarginKind::Percent => Self::Percent(value),
            MarginKind::Fixed => Self::Fixed(value),
        }
    }
}

impl fmt::Display for MarginPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(value) => write!(f, "{value}%"),
            Self::Fixed(value) => write!(f, "+{value:.2}"),
        }
    }
}
