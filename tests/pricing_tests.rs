use cloud_kitchen::pricing::quote::{OrderQuote, QuoteLine};
use cloud_kitchen::types::discount::Discount;
use cloud_kitchen::types::margin::{MarginKind, MarginPolicy};
use cloud_kitchen::{PricingInput, PricingRecord, cook_share, customer_price, margin, platform_revenue};

fn approx(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "expected {expected}, got {actual}");
}

#[test]
fn percent_margin_example() {
    let policy = MarginPolicy::Percent(20.0);
    let input = PricingInput::new(100.0, policy);

    approx(margin(100.0, policy), 20.0);
    approx(customer_price(&input).as_f64(), 120.0);
    approx(cook_share(&input).as_f64(), 100.0);
    approx(platform_revenue(100.0, 3, policy).as_f64(), 60.0);
}

#[test]
fn amount_discount_is_shared_by_stake() {
    let input = PricingInput::new(100.0, MarginPolicy::Percent(20.0)).with_discount(Discount::Amount(24.0));

    approx(customer_price(&input).as_f64(), 96.0);
    approx(cook_share(&input).as_f64(), 80.0);
}

#[test]
fn percent_discount_is_shared_uniformly() {
    let input = PricingInput::new(100.0, MarginPolicy::Fixed(20.0)).with_discount(Discount::Percent(10.0));

    approx(customer_price(&input).as_f64(), 108.0);
    approx(cook_share(&input).as_f64(), 90.0);
}

#[test]
fn outputs_never_go_negative() {
    let bases = [0.0, 1.0, 55.5, 100.0, -20.0];
    let margins = [
        MarginPolicy::Percent(0.0),
        MarginPolicy::Percent(35.0),
        MarginPolicy::Fixed(0.0),
        MarginPolicy::Fixed(12.0),
        MarginPolicy::Fixed(-8.0),
    ];
    let discounts = [
        None,
        Some(Discount::Percent(100.0)),
        Some(Discount::Percent(250.0)),
        Some(Discount::Amount(1_000.0)),
        Some(Discount::Amount(0.5)),
    ];

    for base in bases {
        for policy in margins {
            for discount in discounts {
                let input = PricingInput {
                    base_price: base,
                    margin: policy,
                    discount,
                };
                assert!(customer_price(&input).as_f64() >= 0.0, "{input:?}");
                assert!(cook_share(&input).as_f64() >= 0.0, "{input:?}");
                assert!(platform_revenue(base, 4, policy).as_f64() >= 0.0, "{input:?}");
            }
        }
    }
}

#[test]
fn record_from_json_prefers_percent_discount() {
    let record: PricingRecord = serde_json::from_str(
        r#"{
            "base_price": 100,
            "margin_type": "percent",
            "margin_value": 20,
            "discount_percent": 10,
            "discount_amount": 24
        }"#,
    )
    .unwrap();
    assert_eq!(record.margin_type, MarginKind::Percent);

    let input = PricingInput::from(&record);
    approx(customer_price(&input).as_f64(), 108.0);
    approx(cook_share(&input).as_f64(), 90.0);
}

#[test]
fn quote_totals_follow_line_splits() {
    let lines = [QuoteLine {
        pricing: PricingInput::new(100.0, MarginPolicy::Percent(20.0)).with_discount(Discount::Amount(24.0)),
        quantity: 2,
    }];

    let quote = OrderQuote::build(&lines, None);
    approx(quote.subtotal.as_f64(), 192.0);
    approx(quote.cook_payout.as_f64(), 160.0);
    approx(quote.platform_revenue.as_f64(), 40.0);
    approx(quote.total.as_f64(), 192.0);
}
