use anyhow::{Result, anyhow};
use serde::Serialize;

use cloud_kitchen::config::KitchenConfig;
use cloud_kitchen::pricing::splitter::{PricingInput, PricingResult, split};
use cloud_kitchen::types::price::Price;
use cloud_kitchen::types::service_type::ServiceType;

#[derive(Debug, Serialize)]
struct PriceReport {
    input: PricingInput,
    quantity: u32,
    margin_per_unit: Price,
    #[serde(flatten)]
    result: PricingResult,
}

pub fn print_price(input: PricingInput, quantity: u32, json: bool) -> Result<()> {
    let report = PriceReport {
        input,
        quantity,
        margin_per_unit: Price::new(cloud_kitchen::margin(input.base_price, input.margin)),
        result: split(&input, quantity),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("base price        {:.2}", input.base_price);
    println!("margin            {} ({})", input.margin, report.margin_per_unit);
    println!("customer price    {}", report.result.customer_price);
    println!("cook share        {}", report.result.cook_share);
    println!("platform revenue  {} (x{quantity})", report.result.platform_revenue);

    Ok(())
}

pub fn print_delivery(
    config: &KitchenConfig,
    service: ServiceType,
    subtotal: f64,
    distance_km: Option<f64>,
) -> Result<()> {
    let rules = config.delivery_rules();
    let rule = rules
        .for_service(service)
        .ok_or_else(|| anyhow!("no active delivery rule for {service}"))?;

    let charge = rule.charge(Price::new(subtotal), distance_km);
    println!("{} ({service}): delivery {charge}", rule.rule_name);

    Ok(())
}
