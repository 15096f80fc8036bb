//! Tests for the onboarding step catalog and the personalization branch

mod common;

use common::{personalized_draft, quick_draft};
use questline::onboarding::flow::{
    self, field, step_id, FULL_TRACK_LEN, QUICK_TRACK_LEN,
};
use questline::wizard::{Draft, FieldValue, WizardController, WizardOptions};

// ============================================================================
// Step sequencing
// ============================================================================

#[test]
fn test_quick_track_step_sequencing() {
    let steps = flow::build_steps(false);
    assert_eq!(steps.len(), QUICK_TRACK_LEN);

    let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            step_id::PROFILE,
            step_id::DOMAINS,
            step_id::WEEKLY_TIME,
            step_id::METHODS,
            step_id::PROFICIENCY,
            step_id::PERSONALIZE,
            step_id::SUMMARY,
        ]
    );
}

#[test]
fn test_personalized_track_splices_steps_before_summary() {
    let steps = flow::build_steps(true);
    assert_eq!(steps.len(), FULL_TRACK_LEN);

    let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids[5], step_id::PERSONALIZE);
    assert_eq!(
        &ids[6..],
        &[
            step_id::MOTIVATION,
            step_id::TIMELINE,
            step_id::CERTIFICATIONS,
            step_id::SOURCES,
            step_id::SUMMARY,
        ]
    );
}

#[test]
fn test_summary_is_always_last_and_fieldless() {
    for personalize in [false, true] {
        let steps = flow::build_steps(personalize);
        let last = steps.last().unwrap();
        assert_eq!(last.id, step_id::SUMMARY);
        assert!(last.fields.is_empty());
    }
}

#[test]
fn test_both_tracks_share_the_base_prefix() {
    let quick = flow::build_steps(false);
    let full = flow::build_steps(true);
    // Everything before Summary on the quick track is identical on the
    // full track
    assert_eq!(quick[..QUICK_TRACK_LEN - 1], full[..QUICK_TRACK_LEN - 1]);
}

// ============================================================================
// Branch detection
// ============================================================================

#[test]
fn test_personalize_requested() {
    assert!(!flow::personalize_requested(&Draft::new()));
    assert!(!flow::personalize_requested(&quick_draft()));
    assert!(flow::personalize_requested(&personalized_draft()));

    let mut declined = quick_draft();
    declined.insert(field::PERSONALIZE.into(), FieldValue::from(false));
    assert!(!flow::personalize_requested(&declined));
}

// ============================================================================
// Whole-track validation against fixture drafts
// ============================================================================

#[test]
fn test_quick_draft_walks_the_quick_track() {
    let mut controller = WizardController::with_options(
        flow::build_steps(false),
        WizardOptions {
            initial_step_index: 0,
            initial_draft: quick_draft(),
        },
    );

    for _ in 0..QUICK_TRACK_LEN - 1 {
        assert!(controller.next_step(), "every step should validate");
    }
    assert!(controller.is_last_step());

    let mut calls = 0;
    controller.submit(|_| calls += 1).unwrap();
    assert_eq!(calls, 1);
}

#[test]
fn test_personalized_draft_walks_the_full_track() {
    let mut controller = WizardController::with_options(
        flow::build_steps(true),
        WizardOptions {
            initial_step_index: 0,
            initial_draft: personalized_draft(),
        },
    );

    let last = controller.step_count() - 1;
    controller.jump_to(last).unwrap();
    assert!(controller.is_last_step());
}

#[test]
fn test_branch_rebuild_preserves_draft_and_position() {
    // Walk the quick track to the personalization step, opt in, then
    // rebuild the controller over the full track the way the TUI does
    let mut controller = WizardController::new(flow::build_steps(false));
    let seeded = quick_draft();
    for (name, value) in &seeded {
        controller.set_field(name, value.clone());
    }
    let personalize_index = flow::build_steps(false)
        .iter()
        .position(|s| s.id == step_id::PERSONALIZE)
        .unwrap();
    controller.jump_to(personalize_index).unwrap();
    controller.set_field(field::PERSONALIZE, FieldValue::from(true));

    let rebuilt = WizardController::with_options(
        flow::build_steps(true),
        WizardOptions {
            initial_step_index: controller.current_index(),
            initial_draft: controller.draft().clone(),
        },
    );

    assert_eq!(rebuilt.current_index(), personalize_index);
    assert_eq!(rebuilt.step_count(), FULL_TRACK_LEN);
    assert_eq!(rebuilt.draft(), controller.draft());
}

// ============================================================================
// Field constraints carried from the source flow
// ============================================================================

#[test]
fn test_weekly_hours_range_enforced() {
    let mut draft = quick_draft();
    draft.insert(field::WEEKLY_HOURS.into(), FieldValue::from("120"));
    let controller = WizardController::with_options(
        flow::build_steps(false),
        WizardOptions {
            initial_step_index: 0,
            initial_draft: draft,
        },
    );
    let weekly_index = 2;
    let errors = controller.validate_step(weekly_index);
    assert!(errors
        .get(field::WEEKLY_HOURS)
        .unwrap()
        .contains("between 0 and 100"));
}

#[test]
fn test_unknown_domain_rejected() {
    let mut draft = quick_draft();
    draft.insert(
        field::DOMAINS.into(),
        FieldValue::Tags(vec!["Astrology".into()]),
    );
    let controller = WizardController::with_options(
        flow::build_steps(false),
        WizardOptions {
            initial_step_index: 0,
            initial_draft: draft,
        },
    );
    let errors = controller.validate_step(1);
    assert!(errors
        .get(field::DOMAINS)
        .unwrap()
        .contains("unknown selection"));
}

#[test]
fn test_last_name_is_optional() {
    let mut draft = quick_draft();
    draft.remove(field::LAST_NAME);
    let controller = WizardController::with_options(
        flow::build_steps(false),
        WizardOptions {
            initial_step_index: 0,
            initial_draft: draft,
        },
    );
    assert!(controller.validate_step(0).is_empty());
}
