//! Integration tests: configuration + snapshot in, JSON report out.

use lphedge_bot::{AppConfig, AppError, HedgeReport, PositionSnapshot, Rebalancer};
use lphedge_sizer::HedgeOutcome;
use rust_decimal_macros::dec;

fn bundled(name: &str) -> String {
    format!("{}/../../config/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn rebalancer() -> Rebalancer {
    Rebalancer::new(AppConfig::from_file(&bundled("default.toml")).expect("load config"))
}

fn example_snapshot() -> PositionSnapshot {
    PositionSnapshot::from_file(&bundled("snapshot.example.toml")).expect("load snapshot")
}

#[test]
fn test_example_snapshot_sells_exposure() {
    let (outcome, report) = rebalancer().rebalance(&example_snapshot(), None).unwrap();

    let result = outcome.result().expect("hedge result");
    assert_eq!(
        result.exposure.to_string(),
        "166666666666666666666667"
    );
    // 18 -> 4 decimals truncates
    assert_eq!(result.scaled_exposure.to_string(), "1666666666");
    assert_eq!(result.target.to_string(), "-1666666666");
    assert_eq!(result.target_decimal().unwrap(), dec!(-166666.6666));

    let HedgeReport::Hedge(report) = report else {
        panic!("expected hedge report");
    };
    let order = report.order.expect("order");
    assert_eq!(order.side, "sell");
    assert!(!order.is_increasing);
    assert_eq!(order.size, "1666666666");
    assert_eq!(order.size_decimal, Some(dec!(166666.6666)));
    assert_eq!(order.limit_price, "2238750");
    assert!(report.target_changed);
    assert_eq!(report.ranges.len(), 1);
    assert_eq!(report.ranges[0].state, "within");
}

#[test]
fn test_sequence_override_changes_only_request_id() {
    let rebalancer = rebalancer();
    let snapshot = example_snapshot();
    let (a, _) = rebalancer.rebalance(&snapshot, None).unwrap();
    let (b, _) = rebalancer.rebalance(&snapshot, Some(2)).unwrap();

    let (a, b) = (a.result().unwrap(), b.result().unwrap());
    assert_eq!(a.target, b.target);
    assert_eq!(a.delta, b.delta);
    assert_ne!(
        a.order.unwrap().request_id,
        b.order.unwrap().request_id
    );
}

#[test]
fn test_no_participants_reports_no_action() {
    let mut snapshot = example_snapshot();
    snapshot.participation.enabled_count = 0;
    let (outcome, report) = rebalancer().rebalance(&snapshot, None).unwrap();
    assert_eq!(outcome, HedgeOutcome::NoAction);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"], "no_action");
    assert_eq!(json["sequence"], 1);
}

#[test]
fn test_on_target_reports_no_order() {
    let mut snapshot = example_snapshot();
    snapshot.current_position = "-1666666666".to_string();
    snapshot.previous_target = Some("-1666666666".to_string());
    let (_, report) = rebalancer().rebalance(&snapshot, None).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"], "hedge");
    assert_eq!(json["delta"], "0");
    assert_eq!(json["target_changed"], false);
    assert!(json["order"].is_null());
}

#[test]
fn test_report_json_shape() {
    let (_, report) = rebalancer().rebalance(&example_snapshot(), None).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["outcome"], "hedge");
    assert_eq!(json["target_decimal"], "-166666.6666");
    assert_eq!(json["order"]["side"], "sell");
    let cloid = json["order"]["cloid"].as_str().unwrap();
    assert!(cloid.starts_with("0x"));
    assert_eq!(cloid.len(), 34);
    let request_id = json["order"]["request_id"].as_str().unwrap();
    assert_eq!(request_id.len(), 66);
}

#[test]
fn test_inverted_range_aborts() {
    let mut snapshot = example_snapshot();
    let range = &mut snapshot.ranges[0];
    std::mem::swap(&mut range.sqrt_price_lower, &mut range.sqrt_price_upper);
    assert!(matches!(
        rebalancer().rebalance(&snapshot, None),
        Err(AppError::Core(_))
    ));
}

#[test]
fn test_result_beyond_decimal_range_still_reports() {
    let config = AppConfig::from_toml(
        r#"
        caller = "0x00000000000000000000000000000000000000bb"

        [instrument]
        size_decimals = 18
        base_decimals = 18
        "#,
    )
    .unwrap();
    let mut snapshot = example_snapshot();
    snapshot.sqrt_price_x96 = snapshot.ranges[0].sqrt_price_lower.clone();
    snapshot.ranges[0].liquidity = "1000000000000000000000000000000".to_string();

    let (outcome, report) = Rebalancer::new(config).rebalance(&snapshot, None).unwrap();
    let result = outcome.result().expect("hedge result");
    // 1e30 / 2 at the lower bound, past Decimal's mantissa
    assert_eq!(result.target.to_string(), "-500000000000000000000000000000");
    assert!(result.target_decimal().is_err());

    let HedgeReport::Hedge(report) = report else {
        panic!("expected hedge report");
    };
    assert_eq!(report.target, "-500000000000000000000000000000");
    assert_eq!(report.target_decimal, None);
    let order = report.order.as_ref().expect("order");
    assert_eq!(order.size, "500000000000000000000000000000");
    assert_eq!(order.size_decimal, None);
    assert_eq!(report.ranges[0].state, "below");

    let json = serde_json::to_value(&HedgeReport::Hedge(report)).unwrap();
    assert!(json["target_decimal"].is_null());
}
