use crate::admission::context::OrderContext;
use crate::admission::decision::RejectReason;
use crate::admission::engine::OrderCheck;

#[derive(Debug, Clone, Copy)]
pub struct ItemAvailabilityCheck;

impl OrderCheck for ItemAvailabilityCheck {
    fn name(&self) -> &'static str {
        "ItemAvailabilityCheck"
    }

    fn evaluate(&self, context: &OrderContext) -> Result<(), Vec<RejectReason>> {
        let item = context.item;
        let mut reasons = Vec::new();

        if !item.is_available {
            reasons.push(RejectReason::ItemUnavailable {
                item: item.id.clone(),
            });
        }

        if item.division_id.as_deref() != Some(context.division.id.as_str()) {
            reasons.push(RejectReason::ItemNotInDivision {
                item: item.id.clone(),
                division: context.division.id.clone(),
            });
        }

        if reasons.is_empty() { Ok(()) } else { Err(reasons) }
    }
}
