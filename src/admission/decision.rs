use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OrderDecision {
    Accepted,
    Rejected(OrderRejection),
}

impl OrderDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRejection {
    pub reasons: Vec<RejectReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RejectReason {
    OrderingClosed { division: String },
    ItemUnavailable { item: String },
    ItemNotInDivision { item: String, division: String },
    BelowMinimumSets { requested: u32, minimum: u32 },
}
