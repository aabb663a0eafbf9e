//! Integration tests for case files, presets, reports, and CSV export.

mod common;

use std::fs;

use gasifier_balance::config::CaseConfig;
use gasifier_balance::io::export::{export_csv, write_csv};
use gasifier_balance::report::CaseReport;

#[test]
fn case_file_round_trips_to_report() {
    let path = std::env::temp_dir().join("gasifier_balance_trial_7.toml");
    fs::write(
        &path,
        r#"
[fuel]
mass_flow_kg_h = 6.4
lhv_mj_kg = 15.8

[syngas]
flow_nm3_h = 15.3
temp_out_c = 320
temp_ref_c = 25

[composition]
co_pct = 19.2
h2_pct = 14.1
ch4_pct = 2.1
"#,
    )
    .unwrap();

    let cfg = CaseConfig::from_toml_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(cfg.display_name(), "gasifier_balance_trial_7");
    assert_eq!(cfg.inputs(), common::reference_inputs());

    let report = CaseReport::from_config(&cfg);
    let text = report.to_string();
    assert!(text.contains("gasifier_balance_trial_7"));
    assert!(text.contains("Efficiency is good (71.1%)."));
}

#[test]
fn missing_case_file_is_an_error() {
    let path = std::env::temp_dir().join("gasifier_balance_does_not_exist.toml");
    let err = CaseConfig::from_toml_file(&path).unwrap_err();
    assert_eq!(err.field, "case");
    assert!(err.message.contains("cannot read"));
}

#[test]
fn presets_cover_both_judgments() {
    let lean = CaseReport::from_config(&CaseConfig::lean_gas());
    let reference = CaseReport::from_config(&CaseConfig::reference());
    let hot = CaseReport::from_config(&CaseConfig::hot_outlet());

    assert_eq!(lean.advisory.gas_quality.label(), "low");
    assert_eq!(reference.advisory.gas_quality.label(), "good");
    assert!(hot.balance.e_sens > reference.balance.e_sens);
}

#[test]
fn overrides_apply_before_compute() {
    let mut cfg = CaseConfig::reference();
    cfg.apply_override("fuel.mass_flow_kg_h=0").unwrap();
    let report = CaseReport::from_config(&cfg);
    assert_eq!(report.balance.e_in, 0.0);
    assert_eq!(report.balance.cge, 0.0);
    assert!(report.to_string().contains("Efficiency is low (0.0%)"));
}

#[test]
fn csv_export_writes_file() {
    let reports: Vec<CaseReport> = CaseConfig::PRESETS
        .iter()
        .map(|name| CaseReport::from_config(&CaseConfig::from_preset(name).unwrap()))
        .collect();

    let path = std::env::temp_dir().join("gasifier_balance_export_test.csv");
    export_csv(&reports, &path).unwrap();
    let written = fs::read(&path).unwrap();
    fs::remove_file(&path).ok();

    let mut buf = Vec::new();
    write_csv(&reports, &mut buf).unwrap();
    assert_eq!(written, buf);
    assert_eq!(
        String::from_utf8(written).unwrap().lines().count(),
        1 + CaseConfig::PRESETS.len()
    );
}
