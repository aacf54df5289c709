use crate::admission::context::OrderContext;
use crate::admission::decision::RejectReason;
use crate::admission::engine::OrderCheck;

#[derive(Debug, Clone, Copy)]
pub struct OrderingWindowCheck;

impl OrderCheck for OrderingWindowCheck {
    fn name(&self) -> &'static str {
        "OrderingWindowCheck"
    }

    fn evaluate(&self, context: &OrderContext) -> Result<(), Vec<RejectReason>> {
        if !context.division.is_ordering_open {
            return Err(vec![RejectReason::OrderingClosed {
                division: context.division.id.clone(),
            }]);
        }
        Ok(())
    }
}
