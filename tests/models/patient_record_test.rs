use std::collections::HashSet;

use clinical_synth::models::patient::validate_table;
use clinical_synth::models::{Gender, ModelType, Outcome};
use clinical_synth::utils::round_to;
use clinical_synth::{
    GeneratorConfig, PredictedAction, RecordGenerator, generate_records, predict_action,
};
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn uniform(rng: &mut StdRng, (low, high): (f64, f64), decimals: i32, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| round_to(rng.random_range(low..high), decimals))
        .collect()
}

fn choice<T: Copy>(rng: &mut StdRng, categories: [T; 3], weights: [f64; 3], n: usize) -> Vec<T> {
    let dist = WeightedIndex::new(weights).unwrap();
    (0..n).map(|_| categories[dist.sample(rng)]).collect()
}

#[test]
fn test_ids_are_unique_and_sequential() {
    let records = generate_records(&GeneratorConfig::default()).unwrap();
    assert_eq!(records.len(), 100);

    let ids: HashSet<&str> = records.iter().map(|r| r.patient_id.as_str()).collect();
    assert_eq!(ids.len(), 100);
    assert_eq!(records[0].patient_id, "P001");
    assert_eq!(records[9].patient_id, "P010");
    assert_eq!(records[99].patient_id, "P100");
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.patient_id, format!("P{:03}", i + 1));
    }
}

#[test]
fn test_ranges_hold_across_seeds() {
    for seed in [0, 1, 42, 1234, u64::MAX] {
        let records = RecordGenerator::new(seed).generate(300).unwrap();
        validate_table(&records).unwrap();
        for r in &records {
            assert!((20..90).contains(&r.age));
            assert!((0.0..=10.0).contains(&r.symptom_score));
            assert!((0.0..=1.0).contains(&r.disease_risk));
            assert!((-1.0..=1.0).contains(&r.expected_utility));
            assert!((0.3..=0.7).contains(&r.decision_threshold));
            assert!((0.5..=1.0).contains(&r.explanation_score));
            assert!((0.6..=1.0).contains(&r.model_confidence));
        }
    }
}

#[test]
fn test_predicted_action_follows_rule() {
    let records = RecordGenerator::new(99).generate(500).unwrap();
    for r in &records {
        let expected = if r.disease_risk > r.decision_threshold + 0.1 {
            PredictedAction::Treat
        } else if (r.disease_risk - r.decision_threshold).abs() < 0.1 {
            PredictedAction::Monitor
        } else {
            PredictedAction::Discharge
        };
        assert_eq!(r.predicted_action, expected, "{}", r.patient_id);
    }

    // Boundary: a difference of exactly 0.1 is Discharge
    assert_eq!(predict_action(0.225, 0.125), PredictedAction::Discharge);
}

#[test]
fn test_generation_is_reproducible() {
    let config = GeneratorConfig::default();
    assert_eq!(
        generate_records(&config).unwrap(),
        generate_records(&config).unwrap()
    );
    assert_ne!(
        generate_records(&config).unwrap(),
        generate_records(&config.with_seed(43)).unwrap()
    );
}

#[test]
fn test_columns_follow_fixed_draw_order() {
    let n = 100;
    let records = generate_records(&GeneratorConfig::default()).unwrap();

    // Redraw every column from a fresh stream in file order; the derived
    // predicted_action column consumes no draws.
    let mut rng = StdRng::seed_from_u64(42);
    let ages: Vec<i64> = (0..n).map(|_| rng.random_range(20..90)).collect();
    let genders = choice(
        &mut rng,
        [Gender::Male, Gender::Female, Gender::Other],
        [0.45, 0.45, 0.10],
        n,
    );
    let symptom_scores = uniform(&mut rng, (0.0, 10.0), 2, n);
    let disease_risks = uniform(&mut rng, (0.0, 1.0), 3, n);
    let expected_utilities = uniform(&mut rng, (-1.0, 1.0), 3, n);
    let thresholds = uniform(&mut rng, (0.3, 0.7), 2, n);
    let explanation_scores = uniform(&mut rng, (0.5, 1.0), 3, n);
    let confidences = uniform(&mut rng, (0.6, 1.0), 3, n);
    let outcomes = choice(
        &mut rng,
        [Outcome::Improved, Outcome::NoChange, Outcome::Worsened],
        [0.5, 0.3, 0.2],
        n,
    );
    let model_types = choice(
        &mut rng,
        [ModelType::DecisionTheory, ModelType::Xai, ModelType::Hybrid],
        [0.3, 0.3, 0.4],
        n,
    );

    let column = |f: fn(&clinical_synth::PatientRecord) -> f64| -> Vec<f64> {
        records.iter().map(f).collect()
    };
    assert_eq!(records.iter().map(|r| r.age).collect::<Vec<_>>(), ages);
    assert_eq!(records.iter().map(|r| r.gender).collect::<Vec<_>>(), genders);
    assert_eq!(column(|r| r.symptom_score), symptom_scores);
    assert_eq!(column(|r| r.disease_risk), disease_risks);
    assert_eq!(column(|r| r.expected_utility), expected_utilities);
    assert_eq!(column(|r| r.decision_threshold), thresholds);
    assert_eq!(column(|r| r.explanation_score), explanation_scores);
    assert_eq!(column(|r| r.model_confidence), confidences);
    assert_eq!(records.iter().map(|r| r.outcome).collect::<Vec<_>>(), outcomes);
    assert_eq!(records.iter().map(|r| r.model_type).collect::<Vec<_>>(), model_types);
}
