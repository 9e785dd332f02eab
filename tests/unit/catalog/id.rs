use super::*;

#[test]
fn accepts_plain_ids() {
    let id = ExerciseId::new("side-plank").unwrap();
    assert_eq!(id.as_str(), "side-plank");
    assert_eq!(id.to_string(), "side-plank");
}

#[test]
fn rejects_empty_and_path_like_ids() {
    assert!(ExerciseId::new("").is_err());
    assert!(ExerciseId::new("   ").is_err());
    assert!(ExerciseId::new("..").is_err());
    assert!(ExerciseId::new("a/b").is_err());
    assert!(ExerciseId::new("a\\b").is_err());
}

#[test]
fn deserialization_goes_through_validation() {
    let ok: ExerciseId = serde_json::from_str("\"plank\"").unwrap();
    assert_eq!(ok.as_str(), "plank");
    assert!(serde_json::from_str::<ExerciseId>("\"../etc\"").is_err());
}
