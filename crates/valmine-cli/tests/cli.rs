//! End-to-end smoke tests over pre-extracted text reports.

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_REPORT: &str = "\
Our Ref: NWR/417/VAL/2025/03
REPORT AND VALUATION OF L.R. NO. 12715/225
The property is situated at Ondiri within Kikuyu Township in Kiambu County.
Current Market Value: KShs. 8,500,000/=
Yours faithfully,
Grace Wanjiru Kamau
Registered & Practicing Valuer
Date: 11th March 2025
";

#[test]
fn test_process_text_report_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.txt");
    std::fs::write(&report, SAMPLE_REPORT).unwrap();

    let mut cmd = Command::cargo_bin("valmine").unwrap();
    cmd.arg("process").arg(&report);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""MARKET_VALUE": "8500000""#))
        .stdout(predicate::str::contains(r#""VALUATION_DATE": "2025-03-11""#))
        .stdout(predicate::str::contains(r#""COUNTY": "Kiambu County""#));
}

#[test]
fn test_process_reports_unsupported_format() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.docx");
    std::fs::write(&report, "not a supported format").unwrap();

    let mut cmd = Command::cargo_bin("valmine").unwrap();
    cmd.arg("process").arg(&report);
    cmd.assert().failure();
}

#[test]
fn test_batch_writes_consolidated_csv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), SAMPLE_REPORT).unwrap();
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("valmine").unwrap();
    cmd.arg("batch")
        .arg(dir.path().join("*.txt"))
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let csv = std::fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("FileName,REF_ID,VALUATION_DATE"));
    assert!(lines.next().unwrap().contains("8500000"));
}
