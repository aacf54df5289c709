use serde::Serialize;

use crate::pricing::delivery::DeliveryRule;
use crate::pricing::splitter::{PricingInput, split};
use crate::types::price::Price;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteLine {
    pub pricing: PricingInput,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineTotals {
    pub unit_price: Price,
    pub customer_total: Price,
    pub cook_total: Price,
    pub platform_revenue: Price,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderQuote {
    pub lines: Vec<LineTotals>,
    pub subtotal: Price,
    pub cook_payout: Price,
    pub platform_revenue: Price,
    pub delivery_charge: Price,
    pub total: Price,
}

impl OrderQuote {
    pub fn build(lines: &[QuoteLine], delivery: Option<(&DeliveryRule, Option<f64>)>) -> Self {
        let lines: Vec<LineTotals> = lines
            .iter()
            .map(|line| {
                let result = split(&line.pricing, line.quantity);

                LineTotals {
                    unit_price: result.customer_price,
                    customer_total: result.customer_price * line.quantity,
                    cook_total: result.cook_share * line.quantity,
                    platform_revenue: result.platform_revenue,
                }
            })
            .collect();

        let subtotal: Price = lines.iter().map(|line| line.customer_total).sum();
        let cook_payout: Price = lines.iter().map(|line| line.cook_total).sum();
        let platform_revenue: Price = lines.iter().map(|line| line.platform_revenue).sum();

        let delivery_charge = delivery
            .map(|(rule, distance_km)| rule.charge(subtotal, distance_km))
            .unwrap_or(Price::ZERO);

        Self {
            lines,
            subtotal,
            cook_payout,
            platform_revenue,
            delivery_charge,
            total: subtotal + delivery_charge,
        }
    }
}
