//! Step catalog for the learner onboarding flow
//!
//! The flow has two tracks. The quick track collects the profile basics;
//! opting into personalization splices four extra steps in before the
//! summary. Step sequences are immutable once built, so switching tracks
//! means rebuilding the controller over the other sequence with the same
//! draft (the TUI layer owns that swap).

use crate::wizard::field::Draft;
use crate::wizard::schema::{FieldKind, FieldSpec, StepDefinition};

/// Stable step identifiers, used for renderer dispatch and reports.
pub mod step_id {
    pub const PROFILE: &str = "profile";
    pub const DOMAINS: &str = "domains";
    pub const WEEKLY_TIME: &str = "weekly_time";
    pub const METHODS: &str = "methods";
    pub const PROFICIENCY: &str = "proficiency";
    pub const PERSONALIZE: &str = "personalize";
    pub const MOTIVATION: &str = "motivation";
    pub const TIMELINE: &str = "timeline";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const SOURCES: &str = "sources";
    pub const SUMMARY: &str = "summary";
}

/// Draft keys.
pub mod field {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const DOMAINS: &str = "domains";
    pub const WEEKLY_HOURS: &str = "weekly_hours";
    pub const METHODS: &str = "methods";
    pub const PROFICIENCY: &str = "proficiency";
    pub const PERSONALIZE: &str = "personalize";
    pub const MOTIVATION: &str = "motivation";
    pub const TIMELINE: &str = "timeline";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const SOURCES: &str = "sources";
}

pub const DOMAIN_OPTIONS: &[&str] = &[
    "Computer Vision",
    "Artificial Intelligence",
    "Machine Learning",
    "Deep Learning",
    "Web Development",
    "DSA",
];

pub const METHOD_OPTIONS: &[&str] = &["Videos", "Articles", "Books", "Documentation"];

pub const PROFICIENCY_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

pub const MOTIVATION_OPTIONS: &[&str] = &[
    "Career advancement",
    "Personal project",
    "Academic requirement",
    "Curiosity",
];

pub const TIMELINE_OPTIONS: &[&str] = &["1 week", "1 month", "3 months", "6+ months"];

pub const SOURCE_OPTIONS: &[&str] = &[
    "Research Papers",
    "Conference Proceedings",
    "Technical Documentation",
    "Industry Reports",
];

/// Weekly learning time is capped at this many hours.
pub const WEEKLY_HOURS_MAX: u32 = 100;

/// Step count of the quick track.
pub const QUICK_TRACK_LEN: usize = 7;

/// Step count with the personalization branch taken.
pub const FULL_TRACK_LEN: usize = 11;

/// Build the step sequence for one track.
pub fn build_steps(personalize: bool) -> Vec<StepDefinition> {
    let mut steps = vec![
        StepDefinition::new(
            step_id::PROFILE,
            "Your Profile",
            vec![
                FieldSpec::required(field::FIRST_NAME, "First name", FieldKind::Text),
                FieldSpec::optional(field::LAST_NAME, "Last name", FieldKind::Text),
            ],
        ),
        StepDefinition::new(
            step_id::DOMAINS,
            "Interest Domains",
            vec![FieldSpec::required(
                field::DOMAINS,
                "Interest domains",
                FieldKind::multi_select(DOMAIN_OPTIONS),
            )],
        ),
        StepDefinition::new(
            step_id::WEEKLY_TIME,
            "Weekly Learning Time",
            vec![FieldSpec::required(
                field::WEEKLY_HOURS,
                "Weekly hours",
                FieldKind::Number {
                    min: 0,
                    max: WEEKLY_HOURS_MAX,
                },
            )],
        ),
        StepDefinition::new(
            step_id::METHODS,
            "Learning Methods",
            vec![FieldSpec::required(
                field::METHODS,
                "Learning methods",
                FieldKind::multi_select(METHOD_OPTIONS),
            )],
        ),
        StepDefinition::new(
            step_id::PROFICIENCY,
            "Proficiency Level",
            vec![FieldSpec::required(
                field::PROFICIENCY,
                "Proficiency level",
                FieldKind::choice(PROFICIENCY_LEVELS),
            )],
        ),
        StepDefinition::new(
            step_id::PERSONALIZE,
            "Personalization",
            vec![FieldSpec::optional(
                field::PERSONALIZE,
                "Personalize my plan",
                FieldKind::Flag,
            )],
        ),
    ];

    if personalize {
        steps.push(StepDefinition::new(
            step_id::MOTIVATION,
            "Motivation",
            vec![FieldSpec::required(
                field::MOTIVATION,
                "Motivation",
                FieldKind::choice(MOTIVATION_OPTIONS),
            )],
        ));
        steps.push(StepDefinition::new(
            step_id::TIMELINE,
            "Timeline",
            vec![FieldSpec::required(
                field::TIMELINE,
                "Timeline",
                FieldKind::choice(TIMELINE_OPTIONS),
            )],
        ));
        steps.push(StepDefinition::new(
            step_id::CERTIFICATIONS,
            "Certifications",
            vec![FieldSpec::optional(
                field::CERTIFICATIONS,
                "Interested in certifications",
                FieldKind::Flag,
            )],
        ));
        steps.push(StepDefinition::new(
            step_id::SOURCES,
            "Preferred Sources",
            vec![FieldSpec::optional(
                field::SOURCES,
                "Preferred sources",
                FieldKind::multi_select(SOURCE_OPTIONS),
            )],
        ));
    }

    steps.push(StepDefinition::new(step_id::SUMMARY, "Summary", vec![]));
    steps
}

/// Whether a draft has opted into the personalization branch.
pub fn personalize_requested(draft: &Draft) -> bool {
    draft
        .get(field::PERSONALIZE)
        .and_then(|v| v.as_flag())
        .unwrap_or(false)
}
