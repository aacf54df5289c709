use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::types::price::Price;
use crate::types::service_type::ServiceType;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryRule {
    pub service_type: ServiceType,
    pub rule_name: String,

    /// Floor for any charged delivery.
    pub min_delivery_charge: f64,

    /// Order subtotal at or above which delivery is free.
    #[serde(default)]
    pub free_delivery_above: Option<f64>,

    #[serde(default)]
    pub per_km_charge: Option<f64>,

    /// Ceiling for any charged delivery.
    #[serde(default)]
    pub max_delivery_charge: Option<f64>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl DeliveryRule {
    pub fn charge(&self, subtotal: Price, distance_km: Option<f64>) -> Price {
        if let Some(threshold) = self.free_delivery_above {
            if subtotal.as_f64() >= threshold {
                return Price::ZERO;
            }
        }

        let distance_charge = match (self.per_km_charge, distance_km) {
            (Some(per_km), Some(distance)) => per_km * distance,
            _ => 0.0,
        };

        let mut charge = self.min_delivery_charge.max(distance_charge);
        if let Some(ceiling) = self.max_delivery_charge {
            charge = charge.min(ceiling);
        }

        Price::new(charge)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rule_name.trim().is_empty() {
            bail!("rule_name must not be empty");
        }
        if self.min_delivery_charge < 0.0 {
            bail!("min_delivery_charge must be >= 0");
        }
        for (field, value) in [
            ("free_delivery_above", self.free_delivery_above),
            ("per_km_charge", self.per_km_charge),
            ("max_delivery_charge", self.max_delivery_charge),
        ] {
            if value.is_some_and(|value| value < 0.0) {
                bail!("{field} must be >= 0");
            }
        }
        if let Some(ceiling) = self.max_delivery_charge {
            if ceiling < self.min_delivery_charge {
                bail!("max_delivery_charge must be >= min_delivery_charge");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryRules {
    rules: Vec<DeliveryRule>,
}

impl DeliveryRules {
    pub fn new(rules: Vec<DeliveryRule>) -> Self {
        Self { rules }
    }

    /// First active rule configured for the service.
    pub fn for_service(&self, service: ServiceType) -> Option<&DeliveryRule> {
        self.rules
            .iter()
            .find(|rule| rule.is_active && rule.service_type == service)
    }
}
