use serde::{Deserialize, Serialize};

use crate::types::discount::Discount;
use crate::types::margin::{MarginKind, MarginPolicy};
use crate::types::price::Price;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingInput {
    /// Amount attributable to the cook, before any platform markup.
    pub base_price: f64,
    pub margin: MarginPolicy,
    pub discount: Option<Discount>,
}

impl PricingInput {
    pub fn new(base_price: f64, margin: MarginPolicy) -> Self {
        Self {
            base_price,
            margin,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }
}

/// Item pricing columns as stored, with both discount fields optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingRecord {
    pub base_price: f64,
    pub margin_type: MarginKind,
    pub margin_value: f64,

    #[serde(default)]
    pub discount_percent: Option<f64>,

    #[serde(default)]
    pub discount_amount: Option<f64>,
}

impl From<&PricingRecord> for PricingInput {
    fn from(record: &PricingRecord) -> Self {
        Self {
            base_price: record.base_price,
            margin: MarginPolicy::new(record.margin_type, record.margin_value),
            discount: Discount::from_fields(record.discount_percent, record.discount_amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub customer_price: Price,
    pub cook_share: Price,
    pub platform_revenue: Price,
}

/// Per-unit platform markup. Never discount-adjusted.
pub fn margin(base_price: f64, policy: MarginPolicy) -> f64 {
    match policy {
        MarginPolicy::Percent(percent) => base_price * (percent / 100.0),
        MarginPolicy::Fixed(amount) => amount,
    }
}

/// What the buyer pays for one unit: base plus margin, less the discount.
pub fn customer_price(input: &PricingInput) -> Price {
    let total = input.base_price + margin(input.base_price, input.margin);

    let discounted = match input.discount {
        Some(Discount::Percent(percent)) if percent > 0.0 => total * (1.0 - percent / 100.0),
        Some(Discount::Amount(amount)) if amount > 0.0 => total - amount,
        _ => total,
    };

    Price::new(discounted)
}

/// What the cook receives for one unit. The margin is never part of it;
/// a percentage discount is absorbed at the same rate, an absolute one in
/// proportion to the cook's stake in the pre-discount total.
pub fn cook_share(input: &PricingInput) -> Price {
    let base = input.base_price;

    let cook_price = match input.discount {
        Some(Discount::Percent(percent)) if percent > 0.0 => base * (1.0 - percent / 100.0),
        Some(Discount::Amount(amount)) if amount > 0.0 => base - amount * cook_ratio(input),
        _ => base,
    };

    Price::new(cook_price)
}

/// Cook's fraction of the pre-discount unit total, zero when that total is zero.
pub fn cook_ratio(input: &PricingInput) -> f64 {
    let total = input.base_price + margin(input.base_price, input.margin);
    if total == 0.0 {
        return 0.0;
    }

    input.base_price / total
}

pub fn platform_revenue(base_price: f64, quantity: u32, policy: MarginPolicy) -> Price {
    Price::new(margin(base_price, policy) * f64::from(quantity))
}

pub fn split(input: &PricingInput, quantity: u32) -> PricingResult {
    PricingResult {
        customer_price: customer_price(input),
        cook_share: cook_share(input),
        platform_revenue: platform_revenue(input.base_price, quantity, input.margin),
    }
}
