use std::collections::BTreeSet;

use clinical_synth::{AppConfig, ModelType, Outcome, run};

use crate::utils::scratch_dir;

#[test]
fn test_reruns_write_identical_csv() {
    let first_dir = scratch_dir("rerun_a");
    let second_dir = scratch_dir("rerun_b");

    let first = run(&AppConfig::in_directory(&first_dir), &mut std::io::sink()).unwrap();
    let second = run(&AppConfig::in_directory(&second_dir), &mut std::io::sink()).unwrap();

    let first_bytes = std::fs::read(&first.csv_path).unwrap();
    let second_bytes = std::fs::read(&second.csv_path).unwrap();
    assert!(!first_bytes.is_empty());
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn test_console_report() {
    let dir = scratch_dir("console");
    let mut out = Vec::new();
    let report = run(&AppConfig::in_directory(&dir), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "✅ Dataset saved as 'Hybrid_Model.csv'");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "📊 Model Performance Summary");
    assert_eq!(lines[3], "");
    assert!(lines[4].trim_start().starts_with("model_type"));
    assert_eq!(lines.len(), 5 + report.summary.len());

    for (line, row) in lines[5..].iter().zip(&report.summary.rows) {
        assert!(line.trim_start().starts_with(row.model_type.as_str()));
    }
}

#[test]
fn test_summary_matches_recomputed_statistics() {
    let dir = scratch_dir("summary");
    let report = run(&AppConfig::in_directory(&dir), &mut std::io::sink()).unwrap();

    let present: BTreeSet<ModelType> = report.records.iter().map(|r| r.model_type).collect();
    let summarized: Vec<ModelType> = report.summary.rows.iter().map(|r| r.model_type).collect();
    assert_eq!(summarized, present.into_iter().collect::<Vec<_>>());

    for row in &report.summary.rows {
        let group: Vec<_> = report
            .records
            .iter()
            .filter(|r| r.model_type == row.model_type)
            .collect();
        let n = group.len() as f64;
        let explanation = group.iter().map(|r| r.explanation_score).sum::<f64>() / n;
        let confidence = group.iter().map(|r| r.model_confidence).sum::<f64>() / n;
        let improved = group.iter().filter(|r| r.outcome == Outcome::Improved).count() as f64
            / n
            * 100.0;

        assert!((row.avg_explanation_score - explanation).abs() <= 0.005 + 1e-9);
        assert!((row.avg_model_confidence - confidence).abs() <= 0.005 + 1e-9);
        assert!((row.improved_rate - improved).abs() <= 0.005 + 1e-9);
    }
}

#[test]
fn test_charts_are_written() {
    let dir = scratch_dir("charts");
    let report = run(&AppConfig::in_directory(&dir), &mut std::io::sink()).unwrap();

    assert_eq!(
        report.chart_paths,
        vec![
            dir.join("model_success_rate.svg"),
            dir.join("model_confidence_vs_explanation.svg"),
        ]
    );
    let grouped = std::fs::read_to_string(&report.chart_paths[1]).unwrap();
    assert!(grouped.contains("Model Confidence vs Explanation Score"));
    assert!(grouped.contains("Confidence"));
    assert!(grouped.contains("Explanation"));
}
