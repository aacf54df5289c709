use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Customer-facing price of one set.
    pub price: f64,

    #[serde(default)]
    pub is_vegetarian: bool,

    /// Pieces in one orderable set.
    #[serde(default = "one")]
    pub set_size: u32,

    #[serde(default = "one")]
    pub min_order_sets: u32,

    /// Division this item is served in.
    #[serde(default)]
    pub division_id: Option<String>,

    #[serde(default = "available")]
    pub is_available: bool,
}

fn one() -> u32 {
    1
}

fn available() -> bool {
    true
}

impl MenuItem {
    pub fn units_for_sets(&self, sets: u32) -> u32 {
        sets.saturating_mul(self.set_size)
    }
}
