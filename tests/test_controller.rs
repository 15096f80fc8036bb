//! Unit tests for the wizard controller state machine
//!
//! These verify the controller's pure logic: navigation clamps, per-step
//! validation, multi-select toggling, guarded jumps, and single-shot
//! submission. TUI rendering and terminal handling are not tested here.

mod common;

use common::{three_step_schema, two_step_schema};
use questline::wizard::{
    Draft, FieldValue, WizardController, WizardError, WizardOptions,
};

// ============================================================================
// Navigation boundaries
// ============================================================================

#[test]
fn test_new_controller_starts_at_first_step() {
    let controller = WizardController::new(two_step_schema());
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.step_count(), 2);
    assert!(controller.draft().is_empty());
    assert!(controller.validation_errors().is_empty());
}

#[test]
fn test_next_step_on_last_step_never_moves() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    controller.set_field("y", FieldValue::from("w"));
    assert!(controller.next_step());
    assert!(controller.is_last_step());

    // Valid last step: success reported, index clamped in place
    assert!(controller.next_step());
    assert_eq!(
        controller.current_index(),
        1,
        "next_step on the last step must not change the index"
    );
}

#[test]
fn test_prev_step_clamps_at_first() {
    let mut controller = WizardController::new(two_step_schema());
    controller.prev_step();
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn test_prev_step_never_mutates_draft_or_errors() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    assert!(controller.next_step());

    // Queue an error on step B
    assert!(!controller.next_step());
    let errors_before = controller.validation_errors().clone();
    let draft_before = controller.draft().clone();
    assert!(!errors_before.is_empty());

    controller.prev_step();
    assert_eq!(controller.draft(), &draft_before);
    assert_eq!(controller.validation_errors(), &errors_before);
}

// ============================================================================
// Validation gating
// ============================================================================

#[test]
fn test_next_step_advances_when_required_field_present() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    assert!(controller.next_step());
    assert_eq!(controller.current_index(), 1);
    assert!(controller.validation_errors().is_empty());
}

#[test]
fn test_next_step_blocks_on_empty_draft() {
    let mut controller = WizardController::new(two_step_schema());
    assert!(!controller.next_step());
    assert_eq!(controller.current_index(), 0);
    assert!(
        controller.validation_errors().contains_key("x"),
        "the missing field must be reported by name"
    );
}

#[test]
fn test_set_field_clears_queued_error_for_that_field_only() {
    let mut controller = WizardController::new(vec![two_step_schema().remove(0)]);
    assert!(!controller.next_step());
    assert!(controller.validation_errors().contains_key("x"));

    controller.set_field("x", FieldValue::from("v"));
    assert!(
        !controller.validation_errors().contains_key("x"),
        "writing a field clears its queued error"
    );
}

#[test]
fn test_blank_text_does_not_satisfy_required_field() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("   "));
    assert!(!controller.next_step());
    assert_eq!(controller.current_index(), 0);
}

// ============================================================================
// Multi-select toggling
// ============================================================================

#[test]
fn test_multi_select_toggle_adds_then_removes() {
    let mut controller = WizardController::new(three_step_schema());
    controller.set_field("tags", FieldValue::from("a"));
    assert_eq!(
        controller.draft().get("tags"),
        Some(&FieldValue::Tags(vec!["a".to_string()]))
    );

    // Toggling the same value again removes it
    controller.set_field("tags", FieldValue::from("a"));
    assert_eq!(
        controller.draft().get("tags"),
        Some(&FieldValue::Tags(vec![]))
    );
}

#[test]
fn test_multi_select_preserves_selection_order() {
    let mut controller = WizardController::new(three_step_schema());
    controller.set_field("tags", FieldValue::from("c"));
    controller.set_field("tags", FieldValue::from("a"));
    controller.set_field("tags", FieldValue::from("b"));
    controller.set_field("tags", FieldValue::from("a"));
    assert_eq!(
        controller.draft().get("tags"),
        Some(&FieldValue::Tags(vec!["c".to_string(), "b".to_string()]))
    );
}

#[test]
fn test_tags_value_overwrites_wholesale() {
    let mut controller = WizardController::new(three_step_schema());
    controller.set_field("tags", FieldValue::from("a"));
    controller.set_field(
        "tags",
        FieldValue::Tags(vec!["b".to_string(), "c".to_string()]),
    );
    assert_eq!(
        controller.draft().get("tags"),
        Some(&FieldValue::Tags(vec!["b".to_string(), "c".to_string()]))
    );
}

#[test]
fn test_set_field_on_undeclared_name_overwrites() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("scratch", FieldValue::from("one"));
    controller.set_field("scratch", FieldValue::from("two"));
    assert_eq!(
        controller.draft().get("scratch"),
        Some(&FieldValue::from("two"))
    );
}

// ============================================================================
// Guarded jumps
// ============================================================================

#[test]
fn test_jump_to_blocked_by_invalid_earlier_step() {
    let mut controller = WizardController::new(three_step_schema());
    let err = controller.jump_to(2).unwrap_err();
    assert!(matches!(err, WizardError::NavigationBlocked { .. }));
    assert_eq!(controller.current_index(), 0, "state unchanged on block");
}

#[test]
fn test_jump_to_allowed_when_earlier_steps_validate() {
    let mut controller = WizardController::new(three_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    controller.set_field("tags", FieldValue::from("a"));
    controller.jump_to(2).unwrap();
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn test_jump_to_backward_only_checks_steps_before_target() {
    let mut controller = WizardController::new(three_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    assert!(controller.next_step());
    // Step B (tags) is unanswered, but jumping back to 0 checks nothing
    controller.jump_to(0).unwrap();
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn test_jump_to_out_of_range_is_blocked() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    let err = controller.jump_to(99).unwrap_err();
    assert!(matches!(err, WizardError::NavigationBlocked { .. }));
    assert_eq!(controller.current_index(), 0);
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_invokes_sink_exactly_once_with_accumulated_draft() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    assert!(controller.next_step());
    controller.set_field("y", FieldValue::from("w"));

    let mut calls = 0;
    let mut received = Draft::new();
    controller
        .submit(|draft| {
            calls += 1;
            received = draft.clone();
        })
        .unwrap();

    assert_eq!(calls, 1);
    assert_eq!(received.get("x"), Some(&FieldValue::from("v")));
    assert_eq!(received.get("y"), Some(&FieldValue::from("w")));
    // The controller does not reset itself
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.draft(), &received);
}

#[test]
fn test_submit_off_last_step_is_blocked_without_invoking_sink() {
    let mut controller = WizardController::new(two_step_schema());
    let mut calls = 0;
    let err = controller.submit(|_| calls += 1).unwrap_err();
    assert!(matches!(err, WizardError::NavigationBlocked { .. }));
    assert_eq!(calls, 0);
}

#[test]
fn test_submit_with_invalid_last_step_reports_fields() {
    let mut controller = WizardController::new(two_step_schema());
    controller.set_field("x", FieldValue::from("v"));
    assert!(controller.next_step());

    let mut calls = 0;
    let err = controller.submit(|_| calls += 1).unwrap_err();
    match err {
        WizardError::ValidationFailure { errors } => {
            assert!(errors.contains_key("y"));
        }
        other => panic!("expected ValidationFailure, got {:?}", other),
    }
    assert_eq!(calls, 0);
    // Messages are also queued for inline rendering
    assert!(controller.validation_errors().contains_key("y"));
}

// ============================================================================
// Resume options
// ============================================================================

#[test]
fn test_with_options_seeds_draft_and_index() {
    let mut draft = Draft::new();
    draft.insert("x".to_string(), FieldValue::from("v"));
    let controller = WizardController::with_options(
        two_step_schema(),
        WizardOptions {
            initial_step_index: 1,
            initial_draft: draft,
        },
    );
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.draft().get("x"), Some(&FieldValue::from("v")));
}

#[test]
fn test_with_options_clamps_out_of_range_resume_index() {
    let controller = WizardController::with_options(
        two_step_schema(),
        WizardOptions {
            initial_step_index: 42,
            initial_draft: Draft::new(),
        },
    );
    assert_eq!(controller.current_index(), 1);
}
