use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage off, shared uniformly by cook and platform.
    Percent(f64),
    /// Absolute amount off the line, apportioned by each party's stake.
    Amount(f64),
}

impl Discount {
    /// Resolves the two optional discount columns into the one that applies.
    /// A positive percentage wins over any amount; non-positive values are
    /// treated as absent.
    pub fn from_fields(percent: Option<f64>, amount: Option<f64>) -> Option<Self> {
        match (percent, amount) {
            (Some(percent), _) if percent > 0.0 => Some(Self::Percent(percent)),
            (_, Some(amount)) if amount > 0.0 => Some(Self::Amount(amount)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_takes_precedence() {
        assert_eq!(
            Discount::from_fields(Some(10.0), Some(24.0)),
            Some(Discount::Percent(10.0))
        );
    }

    #[test]
    fn zero_percent_falls_through_to_amount() {
        assert_eq!(
            Discount::from_fields(Some(0.0), Some(24.0)),
            Some(Discount::Amount(24.0))
        );
    }

    #[test]
    fn non_positive_fields_mean_no_discount() {
        assert_eq!(Discount::from_fields(None, None), None);
        assert_eq!(Discount::from_fields(Some(-5.0), Some(0.0)), None);
    }
}
