//! Integration tests for the readiness analysis.
//!
//! These tests drive the public API end to end on generated frames and on
//! the CSV fixtures.

use ml_readiness::reporting::ValueCount;
use ml_readiness::{
    AnalysisConfig, Confidence, Grade, ImbalanceSeverity, Pipeline, ProblemType, ReadinessError,
    ReportGenerator, analyze_dataset, compute_viability_score, loader,
};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// 1000 rows: sequential id, continuous amount, 950/50 binary label.
fn id_amount_label_frame() -> DataFrame {
    let ids: Vec<i64> = (0..1000).collect();
    let amounts: Vec<f64> = (0..1000).map(|i| i as f64 * 1.37 + 0.5).collect();
    let labels: Vec<i64> = (0..1000).map(|i| if i < 950 { 0 } else { 1 }).collect();

    df![
        "id" => ids,
        "amount" => amounts,
        "label" => labels,
    ]
    .unwrap()
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_identifier_and_extreme_imbalance_scenario() {
    let df = id_amount_label_frame();

    let analysis = analyze_dataset(&df).unwrap();
    let summary = &analysis.summary;

    assert_eq!(summary.target, "label");
    assert_eq!(summary.target_reason, "matches target hint ('label')");
    assert_eq!(summary.target_confidence, Confidence::High);
    assert_eq!(summary.problem_type, ProblemType::Classification);
    assert_eq!(summary.n_rows, 1000);
    assert_eq!(summary.n_cols, 3);
    assert_eq!(summary.n_id_like_cols, 1);
    assert_eq!(summary.n_leak_name_cols, 0);
    assert_eq!(summary.n_constant_cols, 0);
    assert_eq!(summary.n_cols_over_20pct_null, 0);
    assert_eq!(summary.imbalance_severity, Some(ImbalanceSeverity::Extreme));
    assert_eq!(
        summary.imbalance_detail.as_deref(),
        Some("2 classes | minority 5.00% | ideal 50.00% | ratio vs ideal 0.10")
    );

    assert_eq!(
        analysis.issues,
        vec![
            "Column 'id' looks like an identifier (unique values: 100.0%).".to_string(),
            "Target is imbalanced (extreme). 2 classes | minority 5.00% | ideal 50.00% | ratio vs ideal 0.10"
                .to_string(),
        ]
    );

    let score = compute_viability_score(summary);
    assert_eq!(score.score, 63);
    assert_eq!(score.grade, Grade::C);
}

#[test]
fn test_column_named_target_always_wins() {
    let values: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();
    let groups: Vec<i64> = (0..200).map(|i| i % 3).collect();
    let df = df![
        "target" => values,
        "group" => groups,
    ]
    .unwrap();

    let analysis = analyze_dataset(&df).unwrap();

    assert_eq!(analysis.summary.target, "target");
    assert_eq!(analysis.summary.target_confidence, Confidence::High);
    assert_eq!(analysis.summary.problem_type, ProblemType::Regression);
    assert!(analysis.summary.imbalance_severity.is_none());
}

#[test]
fn test_forty_percent_nulls_count_as_severe() {
    let df = df![
        "sparse" => [Some(1.0), None, Some(3.0), None, Some(5.0), None, Some(7.0), None, Some(9.0), Some(10.0)],
        "label" => [0i64, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    ]
    .unwrap();

    let analysis = analyze_dataset(&df).unwrap();

    assert_eq!(analysis.summary.n_cols_over_40pct_null, 1);
    assert_eq!(analysis.summary.n_cols_over_20pct_null, 1);
    assert_eq!(analysis.issues[0], "Column 'sparse' has 40.0% null values.");

    let score = compute_viability_score(&analysis.summary);
    assert_eq!(score.score, 85);
    assert_eq!(score.grade, Grade::A);
}

#[test]
fn test_balanced_binary_target() {
    let features: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let labels: Vec<i64> = (0..100).map(|i| i % 2).collect();
    let df = df!["feature" => features, "label" => labels].unwrap();

    let analysis = analyze_dataset(&df).unwrap();

    assert_eq!(analysis.summary.imbalance_severity, Some(ImbalanceSeverity::Balanced));
    assert!(
        analysis
            .recommendations
            .iter()
            .any(|r| r.starts_with("The target is reasonably balanced."))
    );
    assert!(analysis.issues.is_empty());
    assert_eq!(compute_viability_score(&analysis.summary).score, 100);
}

// ============================================================================
// Degenerate datasets
// ============================================================================

#[test]
fn test_zero_rows_does_not_fail() {
    let df = df![
        "a" => Vec::<i64>::new(),
        "b" => Vec::<String>::new(),
    ]
    .unwrap();

    let analysis = analyze_dataset(&df).unwrap();
    let summary = &analysis.summary;

    assert_eq!(summary.n_rows, 0);
    assert_eq!(summary.target, "b");
    assert_eq!(summary.target_confidence, Confidence::Low);
    assert_eq!(summary.n_constant_cols, 2);
    assert_eq!(summary.n_id_like_cols, 0);
    assert_eq!(summary.imbalance_severity, Some(ImbalanceSeverity::Unclassifiable));
    assert_eq!(summary.imbalance_detail.as_deref(), Some("Only 0 class in the target."));

    let score = compute_viability_score(summary);
    assert_eq!(score.score, 90);
}

#[test]
fn test_all_constant_columns_fall_back_to_last() {
    let df = df![
        "a" => [1i64, 1, 1, 1, 1],
        "b" => ["x", "x", "x", "x", "x"],
    ]
    .unwrap();

    let analysis = analyze_dataset(&df).unwrap();

    assert_eq!(analysis.summary.target, "b");
    assert_eq!(
        analysis.summary.target_reason,
        "fallback: last column (no valid candidates)"
    );
    assert_eq!(analysis.summary.target_confidence, Confidence::Low);
    assert_eq!(
        analysis.summary.imbalance_severity,
        Some(ImbalanceSeverity::Unclassifiable)
    );
}

#[test]
fn test_zero_columns_is_an_error() {
    let err = analyze_dataset(&DataFrame::empty()).unwrap_err();
    assert!(matches!(err, ReadinessError::EmptyDataset));
    assert_eq!(err.error_code(), "EMPTY_DATASET");
}

#[test]
fn test_analysis_is_idempotent() {
    let df = id_amount_label_frame();

    let first = analyze_dataset(&df).unwrap();
    let second = analyze_dataset(&df).unwrap();

    assert_eq!(first, second);
    assert_eq!(df.shape(), (1000, 3));
}

// ============================================================================
// Fixture-based tests
// ============================================================================

#[test]
fn test_customers_fixture_end_to_end() {
    let df = loader::load_csv(fixtures_path().join("customers.csv")).unwrap();

    let analysis = analyze_dataset(&df).unwrap();
    let summary = &analysis.summary;

    assert_eq!(summary.target, "Outcome");
    assert_eq!(summary.target_reason, "matches target hint ('outcome')");
    assert_eq!(summary.n_cols_over_20pct_null, 1);
    assert_eq!(summary.n_cols_over_40pct_null, 0);
    assert_eq!(summary.n_constant_cols, 1);
    assert_eq!(summary.n_id_like_cols, 1);
    assert_eq!(summary.n_leak_name_cols, 1);
    assert_eq!(summary.imbalance_severity, Some(ImbalanceSeverity::Slight));

    assert_eq!(
        analysis.issues,
        vec![
            "Column 'age' has 25.0% null values (moderate).".to_string(),
            "Column 'region' is constant (nunique=1).".to_string(),
            "Column 'customer_id' looks like an identifier (unique values: 100.0%).".to_string(),
            "Column 'score_final' may leak the target because of its name (review it).".to_string(),
            "Target is imbalanced (slight). 2 classes | minority 30.00% | ideal 50.00% | ratio vs ideal 0.60"
                .to_string(),
        ]
    );

    let score = compute_viability_score(summary);
    assert_eq!(score.score, 71);
    assert_eq!(score.grade, Grade::B);
}

#[test]
fn test_customers_fixture_report_charts() {
    let df = loader::load_csv(fixtures_path().join("customers.csv")).unwrap();
    let analysis = analyze_dataset(&df).unwrap();
    let score = compute_viability_score(&analysis.summary);

    let report = ReportGenerator::build_report("customers.csv", &df, &analysis, score).unwrap();

    assert_eq!(report.final_score.score, 71);
    assert_eq!(report.charts.missing_values_top10.len(), 1);
    assert_eq!(report.charts.missing_values_top10[0].column, "age");
    assert_eq!(report.charts.missing_values_top10[0].missing_percent, 25.0);
    assert_eq!(
        report.charts.target_distribution,
        Some(vec![
            ValueCount { value: "0".to_string(), count: 14 },
            ValueCount { value: "1".to_string(), count: 6 },
        ])
    );

    // no "Amount" column, so the first numeric column is plotted
    let histogram = report.charts.histogram.unwrap();
    assert_eq!(histogram.column, "customer_id");
    assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<usize>(), 20);
}

#[test]
fn test_missing_override_falls_back_to_discovery() {
    let df = loader::load_csv(fixtures_path().join("customers.csv")).unwrap();
    let config = AnalysisConfig::builder().target_column("not_a_column").build().unwrap();

    let analysis = Pipeline::builder()
        .config(config)
        .build()
        .unwrap()
        .analyze(&df)
        .unwrap();

    assert_eq!(analysis.summary.target, "Outcome");
}

#[test]
fn test_override_changes_leakage_and_imbalance() {
    let df = loader::load_csv(fixtures_path().join("customers.csv")).unwrap();
    let config = AnalysisConfig::builder().target_column("region").build().unwrap();

    let analysis = Pipeline::builder()
        .config(config)
        .build()
        .unwrap()
        .analyze(&df)
        .unwrap();

    assert_eq!(analysis.summary.target, "region");
    assert_eq!(analysis.summary.target_reason, "user-specified");
    // "Outcome" now leaks by name alongside "score_final"
    assert_eq!(analysis.summary.n_leak_name_cols, 2);
    assert_eq!(
        analysis.summary.imbalance_severity,
        Some(ImbalanceSeverity::Unclassifiable)
    );
}

#[test]
fn test_loader_rejects_non_csv() {
    let err = loader::load_csv(fixtures_path().join("customers.json")).unwrap_err();
    assert!(err.is_input_error());
}
