use outbreak_core::Domain;

#[test]
fn field_counts_match_each_page() {
    assert_eq!(Domain::Diabetes.schema().len(), 8);
    assert_eq!(Domain::HeartDisease.schema().len(), 13);
    assert_eq!(Domain::Parkinsons.schema().len(), 22);
}

#[test]
fn diabetes_fields_are_in_training_order() {
    let ids: Vec<&str> = Domain::Diabetes.schema().ids().collect();
    assert_eq!(
        ids,
        [
            "pregnancies",
            "glucose",
            "blood_pressure",
            "skin_thickness",
            "insulin",
            "bmi",
            "diabetes_pedigree_function",
            "age",
        ]
    );
}

#[test]
fn heart_disease_fields_are_in_training_order() {
    let ids: Vec<&str> = Domain::HeartDisease.schema().ids().collect();
    assert_eq!(
        ids,
        [
            "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang",
            "oldpeak", "slope", "ca", "thal",
        ]
    );
}

#[test]
fn parkinsons_schema_starts_and_ends_with_expected_measures() {
    let schema = Domain::Parkinsons.schema();
    let ids: Vec<&str> = schema.ids().collect();
    assert_eq!(ids.first(), Some(&"fo"));
    assert_eq!(ids.last(), Some(&"ppe"));
    assert_eq!(schema.position("shimmer_db"), Some(9));
    assert_eq!(schema.position("hnr"), Some(15));
}

#[test]
fn field_ids_are_unique_within_a_domain() {
    for domain in Domain::ALL {
        let mut ids: Vec<&str> = domain.schema().ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), domain.schema().len(), "{domain}");
    }
}

#[test]
fn diabetes_fields_reject_negative_values_only() {
    for field in Domain::Diabetes.schema().fields() {
        assert!(field.accepts(0.0));
        assert!(field.accepts(1_000_000.0));
        assert!(!field.accepts(-0.5));
    }
}

#[test]
fn heart_disease_fields_have_no_minimum() {
    for field in Domain::HeartDisease.schema().fields() {
        assert!(field.accepts(-42.0));
    }
}

#[test]
fn non_finite_values_are_never_accepted() {
    let field = &Domain::Parkinsons.schema().fields()[0];
    assert!(!field.accepts(f64::NAN));
    assert!(!field.accepts(f64::INFINITY));
}

#[test]
fn domain_ids_round_trip_through_from_str() {
    for domain in Domain::ALL {
        assert_eq!(domain.id().parse::<Domain>().unwrap(), domain);
    }
    assert!("kidney".parse::<Domain>().is_err());
}

#[test]
fn model_files_use_fixed_names() {
    assert_eq!(Domain::Diabetes.model_file(), "diabetes_model.sav");
    assert_eq!(Domain::HeartDisease.model_file(), "heart_model.sav");
    assert_eq!(Domain::Parkinsons.model_file(), "parkinsons_model.sav");
}

#[test]
fn page_headings_match_each_domain() {
    assert_eq!(Domain::Diabetes.heading(), "Diabetes Prediction using ML");
    assert_eq!(Domain::HeartDisease.heading(), "Heart Disease Prediction using ML");
    assert_eq!(
        Domain::Parkinsons.heading(),
        "Parkinson's Disease Prediction using ML"
    );
}
