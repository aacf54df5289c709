use std::time::Duration;

use anyhow::Result;
use tracing::info;

use cloud_kitchen::config::KitchenConfig;
use cloud_kitchen::ordering::divisions::{ActiveDivision, list_active_divisions};
use cloud_kitchen::types::time_of_day::TimeOfDay;

pub fn current_time() -> TimeOfDay {
    TimeOfDay::of(&chrono::Local::now())
}

pub fn print_divisions(config: &KitchenConfig, now: TimeOfDay, json: bool) -> Result<()> {
    let divisions = list_active_divisions(&config.divisions, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&divisions)?);
        return Ok(());
    }

    println!("divisions at {now}");
    for division in &divisions {
        println!("  {}", describe(division));
    }

    Ok(())
}

pub async fn watch(config: &KitchenConfig, refresh: Duration) -> Result<()> {
    let mut interval = tokio::time::interval(refresh);
    info!(refresh_secs = refresh.as_secs(), "watching divisions");

    loop {
        interval.tick().await;
        let now = current_time();

        for division in list_active_divisions(&config.divisions, now) {
            info!(
                division = %division.name,
                status = ?division.status_label,
                remaining = ?division.time_until_cutoff,
                %now,
                "division status"
            );
        }
    }
}

fn describe(division: &ActiveDivision) -> String {
    let window = format!(
        "{:<16} {}-{} cutoff {}h",
        division.name, division.start_time, division.end_time, division.cutoff_hours_before
    );

    match division.time_until_cutoff {
        Some(remaining) => format!(
            "{window}  {:?}, {}h {:02}m left",
            division.status_label, remaining.hours, remaining.minutes
        ),
        None => format!("{window}  {:?}", division.status_label),
    }
}
