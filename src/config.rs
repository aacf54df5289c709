use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::ordering::divisions::SlotRecord;
use crate::pricing::delivery::{DeliveryRule, DeliveryRules};
use crate::types::menu_item::MenuItem;

#[derive(Debug, Clone, Deserialize)]
pub struct KitchenConfig {
    pub divisions: Vec<SlotRecord>,

    #[serde(default)]
    pub items: Vec<MenuItem>,

    #[serde(default)]
    pub delivery_rules: Vec<DeliveryRule>,
}

static CONFIG: OnceCell<KitchenConfig> = OnceCell::new();

impl KitchenConfig {
    pub const DEFAULT_FILE_NAME: &'static str = "kitchen.yml";
    pub const PATH_ENV: &'static str = "KITCHEN_CONFIG";

    /// Process-wide configuration from `$KITCHEN_CONFIG`, or `kitchen.yml`.
    pub fn load() -> Result<&'static KitchenConfig> {
        CONFIG.get_or_try_init(|| {
            let path = env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::DEFAULT_FILE_NAME.to_string());
            Self::from_path(&path)
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<KitchenConfig> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read kitchen config {}", path.display()))?;

        Self::from_yaml(&raw).with_context(|| format!("invalid kitchen config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<KitchenConfig> {
        let config: KitchenConfig =
            serde_yaml::from_str(raw).context("failed to parse kitchen config")?;

        config
            .validate()
            .context("kitchen config validation failed")?;

        Ok(config)
    }

    pub fn delivery_rules(&self) -> DeliveryRules {
        DeliveryRules::new(self.delivery_rules.clone())
    }

    pub fn items_for_division<'a>(&'a self, division_id: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.items
            .iter()
            .filter(move |item| item.division_id.as_deref() == Some(division_id))
    }

    fn validate(&self) -> Result<()> {
        if self.divisions.is_empty() {
            bail!("divisions must not be empty");
        }

        let mut seen = HashSet::new();
        for division in &self.divisions {
            if division.id.trim().is_empty() {
                bail!("division id must not be empty");
            }
            if !seen.insert(division.id.as_str()) {
                bail!("duplicate division id {}", division.id);
            }
            division
                .time_slot()
                .with_context(|| format!("invalid slot for division {}", division.id))?;
        }

        for item in &self.items {
            if item.price < 0.0 {
                bail!("item {} price must be >= 0", item.id);
            }
            if item.set_size == 0 {
                bail!("item {} set_size must be > 0", item.id);
            }
            if let Some(division_id) = &item.division_id {
                if !seen.contains(division_id.as_str()) {
                    bail!("item {} references unknown division {division_id}", item.id);
                }
            }
        }

        for rule in &self.delivery_rules {
            rule.validate()
                .with_context(|| format!("invalid delivery rule {}", rule.rule_name))?;
        }

        Ok(())
    }
}
