//! Tests for profile construction, export, and draft persistence

mod common;

use common::{personalized_draft, quick_draft, write_temp_draft};
use questline::onboarding::flow::field;
use questline::profile::{
    default_profile_path, load_draft, save_draft, write_profile, LearnerProfile,
};
use questline::wizard::FieldValue;
use tempfile::TempDir;

#[test]
fn test_profile_json_round_trip() {
    let profile = LearnerProfile::from_draft(&personalized_draft()).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("profile.json");
    write_profile(&profile, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let back: LearnerProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn test_profile_json_omits_absent_optionals() {
    let mut draft = quick_draft();
    draft.remove(field::LAST_NAME);
    let profile = LearnerProfile::from_draft(&draft).unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    assert!(!json.contains("last_name"));
    assert!(!json.contains("personalization"));
}

#[test]
fn test_draft_save_load_round_trip() {
    let draft = personalized_draft();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("draft.json");

    save_draft(&draft, &path).unwrap();
    let back = load_draft(&path).unwrap();
    assert_eq!(back, draft);
}

#[test]
fn test_load_draft_missing_file_gives_context() {
    let err = load_draft(std::path::Path::new("/nonexistent/draft.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read draft file"));
}

#[test]
fn test_load_draft_rejects_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("draft.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = load_draft(&path).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn test_saved_draft_resumes_into_profile() {
    // Save, reload, and build the profile from the reloaded draft - the
    // full resume cycle minus the TUI
    let (_tmp, path) = write_temp_draft(&quick_draft());
    let draft = load_draft(&path).unwrap();
    let profile = LearnerProfile::from_draft(&draft).unwrap();
    assert_eq!(profile.display_name(), "Ada Lovelace");
    assert_eq!(profile.weekly_hours, 8);
}

#[test]
fn test_default_profile_path_lands_next_to_draft() {
    let (_tmp, draft_path) = write_temp_draft(&quick_draft());
    let out = default_profile_path(Some(&draft_path));
    assert_eq!(out.parent(), draft_path.parent());
    assert_eq!(
        out.file_name().unwrap().to_str().unwrap(),
        "questline_profile.json"
    );
}

#[test]
fn test_flag_false_survives_round_trip_as_flag() {
    // Untagged serde must not turn a false flag into anything else
    let mut draft = quick_draft();
    draft.insert(field::CERTIFICATIONS.into(), FieldValue::from(false));
    let (_tmp, path) = write_temp_draft(&draft);
    let back = load_draft(&path).unwrap();
    assert_eq!(
        back.get(field::CERTIFICATIONS),
        Some(&FieldValue::Flag(false))
    );
}
