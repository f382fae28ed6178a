//! Integration tests for folio-portfolio.
//!
//! These tests exercise valuation and profit end to end through the public API.

use approx::assert_relative_eq;
use folio_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn ts(y: i32, m: u32, d: u32) -> Timestamp {
    Timestamp::from_ymd(y, m, d).unwrap()
}

/// "AAA": 10 units priced 100 at the start of 2020 and 150 a year later.
fn create_aaa() -> Holding {
    let mut holding = Holding::new("AAA", 10);
    holding
        .extend_prices([(ts(2020, 1, 1), 100.0), (ts(2021, 1, 1), 150.0)])
        .unwrap();
    holding
}

/// "BBB": 4 units priced 25 then 20, with an extra mid-year price.
fn create_bbb() -> Holding {
    let mut holding = Holding::new("BBB", 4);
    holding
        .extend_prices([
            (ts(2020, 1, 1), 25.0),
            (ts(2020, 7, 1), 30.0),
            (ts(2021, 1, 1), 20.0),
        ])
        .unwrap();
    holding
}

fn create_single_holding_portfolio() -> Portfolio {
    let mut portfolio = Portfolio::named("Single");
    portfolio.add_holding(create_aaa());
    portfolio
}

fn create_two_holding_portfolio() -> Portfolio {
    Portfolio::builder()
        .name("Pair")
        .add_holding(create_aaa())
        .add_holding(create_bbb())
        .build()
        .unwrap()
}

// =============================================================================
// SINGLE HOLDING
// =============================================================================

#[test]
fn test_single_holding_values() {
    let portfolio = create_single_holding_portfolio();

    assert_eq!(portfolio.get_value(ts(2020, 1, 1)), 1000.0);
    assert_eq!(portfolio.get_value(ts(2021, 1, 1)), 1500.0);
}

#[test]
fn test_single_holding_raw_profit() {
    let portfolio = create_single_holding_portfolio();

    let profit = portfolio.profit(ts(2020, 1, 1), ts(2021, 1, 1), false).unwrap();
    assert_eq!(profit, 500.0);
}

#[test]
fn test_single_holding_annualized_over_leap_year() {
    let portfolio = create_single_holding_portfolio();
    let (start, end) = (ts(2020, 1, 1), ts(2021, 1, 1));

    assert_eq!(start.whole_days_between(&end), 366);
    assert_relative_eq!(portfolio.total_return(start, end).unwrap(), 0.5);

    let annual = portfolio.profit(start, end, true).unwrap();
    assert_relative_eq!(annual, 1.5_f64.powf(365.0 / 366.0) - 1.0, epsilon = 1e-12);
    assert_relative_eq!(annual, 0.4986, epsilon = 1e-4);
}

#[test]
fn test_unpriced_dates_value_at_zero() {
    let portfolio = create_single_holding_portfolio();

    assert_eq!(portfolio.get_value(ts(2020, 1, 2)), 0.0);
    assert_eq!(portfolio.get_value(ts(2020, 12, 31)), 0.0);
}

// =============================================================================
// ERRORS AND EDGE CASES
// =============================================================================

#[test]
fn test_equal_dates_rejected() {
    let portfolio = create_single_holding_portfolio();
    let date = ts(2020, 1, 1);

    let err = portfolio.profit(date, date, false).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::InvalidRange { start, end } if start == date && end == date
    ));
}

#[test]
fn test_reversed_dates_rejected() {
    let portfolio = create_single_holding_portfolio();

    let err = portfolio.profit(ts(2021, 1, 1), ts(2020, 1, 1), true).unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidRange { .. }));
}

#[test]
fn test_empty_portfolio_profit() {
    let portfolio = Portfolio::new();
    let (start, end) = (ts(2020, 1, 1), ts(2021, 1, 1));

    assert_eq!(portfolio.profit(start, end, false).unwrap(), 0.0);
    assert!(matches!(
        portfolio.profit(start, end, true),
        Err(PortfolioError::DegenerateValuation { date }) if date == start
    ));
}

#[test]
fn test_zero_start_valuation_checked_before_day_count() {
    // Sub-day window with nothing priced at the start: the zero valuation
    // is reported even though the window has no whole days.
    let start = Timestamp::from_ymd_hms(2020, 1, 1, 9, 0, 0).unwrap();
    let end = Timestamp::from_ymd_hms(2020, 1, 1, 10, 0, 0).unwrap();
    let mut portfolio = Portfolio::new();
    portfolio.add_holding(Holding::new("AAA", 1).with_price(end, 5.0).unwrap());

    assert!(matches!(
        portfolio.profit(start, end, true),
        Err(PortfolioError::DegenerateValuation { .. })
    ));
}

#[test]
fn test_less_than_one_day_across_midnight() {
    let start = Timestamp::from_ymd_hms(2020, 1, 1, 20, 0, 0).unwrap();
    let end = Timestamp::from_ymd_hms(2020, 1, 2, 8, 0, 0).unwrap();
    let mut portfolio = Portfolio::new();
    portfolio.add_holding(
        Holding::new("AAA", 10)
            .with_price(start, 100.0)
            .unwrap()
            .with_price(end, 120.0)
            .unwrap(),
    );

    assert_eq!(start.whole_days_between(&end), 0);
    assert_eq!(portfolio.profit(start, end, false).unwrap(), 200.0);
    assert_eq!(portfolio.profit(start, end, true).unwrap(), 0.0);
}

#[test]
fn test_total_loss_annualizes_to_minus_one() {
    let mut holding = Holding::new("GONE", 3);
    holding.insert_price(ts(2020, 1, 1), 10.0).unwrap();
    holding.insert_price(ts(2020, 3, 1), 0.0).unwrap();
    let portfolio: Portfolio = std::iter::once(holding).collect();

    let annual = portfolio.profit(ts(2020, 1, 1), ts(2020, 3, 1), true).unwrap();
    assert_relative_eq!(annual, -1.0);
}

// =============================================================================
// MULTIPLE HOLDINGS
// =============================================================================

#[test]
fn test_two_holding_value_is_sum_of_contributions() {
    let portfolio = create_two_holding_portfolio();
    let date = ts(2020, 1, 1);

    // AAA: 10 x 100, BBB: 4 x 25
    assert_eq!(portfolio.get_value(date), 1100.0);

    let mut without_bbb = portfolio.clone();
    let bbb = without_bbb.remove_holding("BBB").unwrap();
    assert_eq!(
        portfolio.get_value(date) - without_bbb.get_value(date),
        bbb.price(date) * bbb.quantity() as f64
    );

    let mut without_aaa = portfolio.clone();
    let aaa = without_aaa.remove_holding("AAA").unwrap();
    assert_eq!(
        portfolio.get_value(date) - without_aaa.get_value(date),
        aaa.market_value(date)
    );
}

#[test]
fn test_partially_priced_date() {
    let portfolio = create_two_holding_portfolio();

    // Only BBB is priced mid-year
    assert_eq!(portfolio.get_value(ts(2020, 7, 1)), 120.0);
    assert_eq!(
        portfolio.value_breakdown(ts(2020, 7, 1)),
        vec![("AAA", 0.0), ("BBB", 120.0)]
    );
}

#[test]
fn test_two_holding_profit() {
    let portfolio = create_two_holding_portfolio();
    let (start, end) = (ts(2020, 1, 1), ts(2021, 1, 1));

    // 1100 -> 1580
    let raw = portfolio.profit(start, end, false).unwrap();
    assert_eq!(raw, 480.0);

    let expected = (1580.0_f64 / 1100.0).powf(365.0 / 366.0) - 1.0;
    assert_relative_eq!(portfolio.profit(start, end, true).unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn test_replacing_holding_replaces_contribution() {
    let mut portfolio = create_two_holding_portfolio();
    let date = ts(2021, 1, 1);
    assert_eq!(portfolio.get_value(date), 1580.0);

    let replacement = Holding::new("BBB", 1).with_price(date, 20.0).unwrap();
    let old = portfolio.add_holding(replacement).unwrap();
    assert_eq!(old.quantity(), 4);

    assert_eq!(portfolio.holding_count(), 2);
    assert_eq!(portfolio.get_value(date), 1520.0);
}

#[test]
fn test_ingest_prices_after_adding() {
    let mut portfolio = create_two_holding_portfolio();
    let date = ts(2020, 7, 1);

    portfolio
        .holding_mut("AAA")
        .unwrap()
        .insert_price(date, 130.0)
        .unwrap();
    assert_eq!(portfolio.get_value(date), 1420.0);

    let err = portfolio
        .holding_mut("AAA")
        .unwrap()
        .insert_price(date, -5.0)
        .unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidPrice { ref symbol, .. } if symbol == "AAA"));
    assert_eq!(portfolio.get_value(date), 1420.0);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_portfolio_from_json() {
    let json = r#"{
        "name": "From JSON",
        "return_config": { "days_per_year": 366 },
        "holdings": {
            "AAA": {
                "symbol": "AAA",
                "quantity": 10,
                "prices": {
                    "2020-01-01T00:00:00": 100.0,
                    "2021-01-01T00:00:00": 150.0
                }
            }
        }
    }"#;
    let portfolio: Portfolio = serde_json::from_str(json).unwrap();

    assert_eq!(portfolio.name(), Some("From JSON"));
    assert_eq!(portfolio.get_value(ts(2020, 1, 1)), 1000.0);
    let annual = portfolio.profit(ts(2020, 1, 1), ts(2021, 1, 1), true).unwrap();
    assert_relative_eq!(annual, 0.5, epsilon = 1e-12);
}

#[test]
fn test_json_holding_keys_must_match_symbols() {
    let json = r#"{
        "holdings": {
            "AAA": { "symbol": "BBB", "quantity": 10, "prices": { "2020-01-01T00:00:00": 100.0 } }
        }
    }"#;
    let err = serde_json::from_str::<Portfolio>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid holding 'BBB'"));
}

#[test]
fn test_json_portfolio_replaces_by_symbol() {
    let json = r#"{
        "holdings": {
            "BBB": { "symbol": "BBB", "quantity": 10, "prices": { "2020-01-01T00:00:00": 100.0 } }
        }
    }"#;
    let mut portfolio: Portfolio = serde_json::from_str(json).unwrap();
    let replacement = Holding::new("BBB", 1).with_price(ts(2020, 1, 1), 100.0).unwrap();

    assert!(portfolio.add_holding(replacement).is_some());
    assert_eq!(portfolio.symbols().collect::<Vec<_>>(), vec!["BBB"]);
    assert_eq!(portfolio.get_value(ts(2020, 1, 1)), 100.0);
}

#[test]
fn test_json_negative_price_rejected() {
    let json = r#"{
        "holdings": {
            "AAA": { "symbol": "AAA", "quantity": 1, "prices": { "2020-01-01T00:00:00": -5.0 } }
        }
    }"#;
    let err = serde_json::from_str::<Portfolio>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid price for 'AAA'"));
}

#[test]
fn test_json_zero_days_per_year_rejected() {
    let json = r#"{ "return_config": { "days_per_year": 0 } }"#;
    let err = serde_json::from_str::<Portfolio>(json).unwrap_err();
    assert!(err.to_string().contains("days_per_year must be positive"));
}

#[test]
fn test_builder_with_return_config() {
    let portfolio = Portfolio::builder()
        .return_config(ReturnConfig::new().with_days_per_year(732))
        .add_holding(create_aaa())
        .build()
        .unwrap();

    // Two years at 50% each: 1.5^2 - 1
    let annual = portfolio.profit(ts(2020, 1, 1), ts(2021, 1, 1), true).unwrap();
    assert_relative_eq!(annual, 1.25, epsilon = 1e-12);
}
