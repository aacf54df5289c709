use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    CloudKitchen,
    Homemade,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudKitchen => write!(f, "cloud_kitchen"),
            Self::Homemade => write!(f, "homemade"),
        }
    }
}
