mod commands;

use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cloud_kitchen::config::KitchenConfig;
use cloud_kitchen::pricing::splitter::PricingInput;
use cloud_kitchen::types::discount::Discount;
use cloud_kitchen::types::margin::{MarginKind, MarginPolicy};
use cloud_kitchen::types::service_type::ServiceType;
use cloud_kitchen::types::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Kitchen config file; defaults to $KITCHEN_CONFIG or kitchen.yml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Ordering status of every active division.
    Divisions {
        #[arg(long)]
        at: Option<TimeOfDay>,

        #[arg(long)]
        json: bool,
    },

    /// Re-evaluate divisions on a fixed cadence.
    Watch {
        #[arg(long, default_value_t = 60)]
        refresh_secs: u64,
    },

    /// Split one item's price into customer, cook and platform amounts.
    Price {
        #[arg(long)]
        base: f64,

        #[arg(long, value_enum, default_value = "percent")]
        margin_type: MarginKind,

        #[arg(long, default_value_t = 0.0)]
        margin_value: f64,

        #[arg(long)]
        discount_percent: Option<f64>,

        #[arg(long)]
        discount_amount: Option<f64>,

        #[arg(long, default_value_t = 1)]
        quantity: u32,

        #[arg(long)]
        json: bool,
    },

    /// Delivery charge for an order subtotal.
    Delivery {
        #[arg(long, value_enum, default_value = "cloud-kitchen")]
        service: ServiceType,

        #[arg(long)]
        subtotal: f64,

        #[arg(long)]
        distance_km: Option<f64>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Cow<'static, KitchenConfig>> {
    match path {
        Some(path) => Ok(Cow::Owned(KitchenConfig::from_path(path)?)),
        None => Ok(Cow::Borrowed(KitchenConfig::load()?)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("cloud_kitchen=info".parse()?),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Divisions { at, json } => {
            let config = load_config(args.config.as_ref())?;
            let now = at.unwrap_or_else(commands::divisions::current_time);
            commands::divisions::print_divisions(&config, now, json)?;
        }
        Command::Watch { refresh_secs } => {
            let config = load_config(args.config.as_ref())?;
            info!(divisions = config.divisions.len(), "loaded kitchen config");
            commands::divisions::watch(&config, Duration::from_secs(refresh_secs.max(1))).await?;
        }
        Command::Price {
            base,
            margin_type,
            margin_value,
            discount_percent,
            discount_amount,
            quantity,
            json,
        } => {
            let mut input = PricingInput::new(base, MarginPolicy::new(margin_type, margin_value));
            if let Some(discount) = Discount::from_fields(discount_percent, discount_amount) {
                input = input.with_discount(discount);
            }
            commands::pricing::print_price(input, quantity, json)?;
        }
        Command::Delivery {
            service,
            subtotal,
            distance_km,
        } => {
            let config = load_config(args.config.as_ref())?;
            commands::pricing::print_delivery(&config, service, subtotal, distance_km)?;
        }
    }

    Ok(())
}
