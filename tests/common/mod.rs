//! Shared test utilities and fixture drafts

use std::path::PathBuf;

use tempfile::TempDir;

use questline::onboarding::flow::field;
use questline::wizard::{Draft, FieldKind, FieldSpec, FieldValue, StepDefinition};

/// The two-step schema used by the navigation contract tests:
/// step A requires `x`, step B requires `y`.
pub fn two_step_schema() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            "a",
            "Step A",
            vec![FieldSpec::required("x", "X", FieldKind::Text)],
        ),
        StepDefinition::new(
            "b",
            "Step B",
            vec![FieldSpec::required("y", "Y", FieldKind::Text)],
        ),
    ]
}

/// A three-step schema with a multi-select in the middle, for jump and
/// toggle tests.
pub fn three_step_schema() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            "a",
            "Step A",
            vec![FieldSpec::required("x", "X", FieldKind::Text)],
        ),
        StepDefinition::new(
            "b",
            "Step B",
            vec![FieldSpec::required(
                "tags",
                "Tags",
                FieldKind::multi_select(&["a", "b", "c"]),
            )],
        ),
        StepDefinition::new("c", "Step C", vec![]),
    ]
}

/// A draft answering every required step of the quick track.
pub fn quick_draft() -> Draft {
    let mut draft = Draft::new();
    draft.insert(field::FIRST_NAME.into(), FieldValue::from("Ada"));
    draft.insert(field::LAST_NAME.into(), FieldValue::from("Lovelace"));
    draft.insert(
        field::DOMAINS.into(),
        FieldValue::Tags(vec!["DSA".into(), "Machine Learning".into()]),
    );
    draft.insert(field::WEEKLY_HOURS.into(), FieldValue::from("8"));
    draft.insert(
        field::METHODS.into(),
        FieldValue::Tags(vec!["Books".into(), "Documentation".into()]),
    );
    draft.insert(field::PROFICIENCY.into(), FieldValue::from("Intermediate"));
    draft
}

/// A draft answering every step of the personalized track.
pub fn personalized_draft() -> Draft {
    let mut draft = quick_draft();
    draft.insert(field::PERSONALIZE.into(), FieldValue::from(true));
    draft.insert(
        field::MOTIVATION.into(),
        FieldValue::from("Personal project"),
    );
    draft.insert(field::TIMELINE.into(), FieldValue::from("1 month"));
    draft.insert(field::CERTIFICATIONS.into(), FieldValue::from(false));
    draft.insert(
        field::SOURCES.into(),
        FieldValue::Tags(vec!["Research Papers".into()]),
    );
    draft
}

/// Write a draft to a temp directory and return both handles.
pub fn write_temp_draft(draft: &Draft) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let draft_path = temp_dir.path().join("draft.json");
    std::fs::write(&draft_path, serde_json::to_string_pretty(draft).unwrap()).unwrap();
    (temp_dir, draft_path)
}
