use std::fmt;

use crate::admission::checks::{
    item_availability::ItemAvailabilityCheck, minimum_sets::MinimumSetsCheck,
    ordering_window::OrderingWindowCheck,
};
use crate::admission::context::OrderContext;
use crate::admission::decision::{OrderDecision, OrderRejection, RejectReason};

pub trait OrderCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, context: &OrderContext) -> Result<(), Vec<RejectReason>>;
}

pub struct OrderGate {
    checks: Vec<Box<dyn OrderCheck>>,
}

impl OrderGate {
    pub fn new(checks: Vec<Box<dyn OrderCheck>>) -> Self {
        Self { checks }
    }

    /// Window, availability and minimum-set checks, in that order.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(OrderingWindowCheck),
            Box::new(ItemAvailabilityCheck),
            Box::new(MinimumSetsCheck),
        ])
    }

    pub fn evaluate(&self, context: &OrderContext) -> OrderDecision {
        let mut reasons: Vec<RejectReason> = Vec::new();

        for check in &self.checks {
            if let Err(mut check_reasons) = check.evaluate(context) {
                tracing::debug!(check = check.name(), reasons = ?check_reasons, "order check failed");
                reasons.append(&mut check_reasons);
            }
        }

        if reasons.is_empty() {
            return OrderDecision::Accepted;
        }

        OrderDecision::Rejected(OrderRejection { reasons })
    }
}

impl fmt::Debug for OrderGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderGate")
            .field("checks_count", &self.checks.len())
            .finish()
    }
}
