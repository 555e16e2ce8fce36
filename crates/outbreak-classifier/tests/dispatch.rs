use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use outbreak_classifier::error::{ClassifierError, SubmitError};
use outbreak_classifier::{Classifier, ModelRegistry, Predictor};
use outbreak_core::{Domain, InputVector, Label};

/// Records every vector it is asked to classify.
struct Recording {
    n_features: usize,
    label: Label,
    calls: AtomicUsize,
    last: Mutex<Vec<f64>>,
}

impl Recording {
    fn new(n_features: usize, label: Label) -> Arc<Self> {
        Arc::new(Self {
            n_features,
            label,
            calls: AtomicUsize::new(0),
            last: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for Recording {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = features.to_vec();
        Ok(self.label)
    }
}

struct Fixture {
    predictor: Predictor,
    diabetes: Arc<Recording>,
    heart: Arc<Recording>,
    parkinsons: Arc<Recording>,
}

fn fixture() -> Fixture {
    let diabetes = Recording::new(8, Label::Positive);
    let heart = Recording::new(13, Label::Negative);
    let parkinsons = Recording::new(22, Label::Positive);
    let registry =
        ModelRegistry::from_classifiers(diabetes.clone(), heart.clone(), parkinsons.clone())
            .unwrap();
    Fixture {
        predictor: Predictor::new(Arc::new(registry)),
        diabetes,
        heart,
        parkinsons,
    }
}

#[test]
fn complete_diabetes_submission_calls_classifier_once_with_exact_vector() {
    let f = fixture();
    let v = vec![2.0, 130.0, 70.0, 25.0, 80.0, 28.5, 0.45, 35.0];
    let input =
        InputVector::from_values(Domain::Diabetes, v.iter().copied().map(Some).collect()).unwrap();

    let diagnosis = f.predictor.submit(&input).unwrap();

    assert_eq!(f.diabetes.calls(), 1);
    assert_eq!(*f.diabetes.last.lock().unwrap(), v);
    assert_eq!(diagnosis.label, Label::Positive);
    assert_eq!(diagnosis.message, "The person is diabetic");
    assert_eq!(f.heart.calls(), 0);
    assert_eq!(f.parkinsons.calls(), 0);
}

#[test]
fn incomplete_submission_never_reaches_classifier() {
    let f = fixture();
    let mut values: Vec<Option<f64>> = [2.0, 130.0, 70.0, 25.0, 80.0, 28.5, 0.45]
        .into_iter()
        .map(Some)
        .collect();
    values.push(None);
    let input = InputVector::from_values(Domain::Diabetes, values).unwrap();

    match f.predictor.submit(&input) {
        Err(SubmitError::Incomplete { missing }) => assert_eq!(missing, ["age"]),
        other => panic!("expected incomplete, got {other:?}"),
    }
    assert_eq!(f.diabetes.calls(), 0);
}

#[test]
fn empty_page_reports_every_field_missing_in_schema_order() {
    let f = fixture();
    let err = f
        .predictor
        .submit(&InputVector::new(Domain::HeartDisease))
        .unwrap_err();

    assert_eq!(err.to_string(), "Please fill in all fields before proceeding!");
    match err {
        SubmitError::Incomplete { missing } => {
            let expected: Vec<&str> = Domain::HeartDisease.schema().ids().collect();
            assert_eq!(missing, expected);
        }
        other => panic!("expected incomplete, got {other:?}"),
    }
    assert_eq!(f.heart.calls(), 0);
}

#[test]
fn heart_disease_zero_vector_is_dispatched_in_schema_order() {
    let f = fixture();
    let input = InputVector::from_values(Domain::HeartDisease, vec![Some(0.0); 13]).unwrap();

    let diagnosis = f.predictor.submit(&input).unwrap();

    assert_eq!(f.heart.calls(), 1);
    assert_eq!(*f.heart.last.lock().unwrap(), vec![0.0; 13]);
    assert_eq!(diagnosis.message, "The person does not have any heart disease");
}

#[test]
fn parkinsons_submission_renders_positive_sentence() {
    let f = fixture();
    let mut input = InputVector::new(Domain::Parkinsons);
    for (i, id) in Domain::Parkinsons.schema().ids().enumerate() {
        input.set(id, Some(i as f64)).unwrap();
    }

    let diagnosis = f.predictor.submit(&input).unwrap();

    assert_eq!(f.parkinsons.calls(), 1);
    let expected: Vec<f64> = (0..22).map(f64::from).collect();
    assert_eq!(*f.parkinsons.last.lock().unwrap(), expected);
    assert_eq!(diagnosis.message, "The person has Parkinson's disease");
}

#[test]
fn each_submission_is_independent() {
    let f = fixture();
    let input = InputVector::from_values(Domain::HeartDisease, vec![Some(1.0); 13]).unwrap();

    f.predictor.submit(&input).unwrap();
    f.predictor.submit(&InputVector::new(Domain::HeartDisease)).unwrap_err();
    f.predictor.submit(&input).unwrap();

    assert_eq!(f.heart.calls(), 2);
}

#[test]
fn registry_rejects_mismatched_injected_classifier() {
    let err = ModelRegistry::from_classifiers(
        Recording::new(8, Label::Negative),
        Recording::new(13, Label::Negative),
        Recording::new(21, Label::Negative),
    )
    .unwrap_err();
    assert!(matches!(err, ClassifierError::SchemaMismatch { .. }));
}
