use crate::admission::context::OrderContext;
use crate::admission::decision::RejectReason;
use crate::admission::engine::OrderCheck;

#[derive(Debug, Clone, Copy)]
pub struct MinimumSetsCheck;

impl OrderCheck for MinimumSetsCheck {
    fn name(&self) -> &'static str {
        "MinimumSetsCheck"
    }

    fn evaluate(&self, context: &OrderContext) -> Result<(), Vec<RejectReason>> {
        let minimum = context.item.min_order_sets.max(1);

        if context.sets < minimum {
            return Err(vec![RejectReason::BelowMinimumSets {
                requested: context.sets,
                minimum,
            }]);
        }
        Ok(())
    }
}
