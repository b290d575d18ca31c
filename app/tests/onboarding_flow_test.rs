//! Integration tests for the onboarding flow

mod common;

use common::TestApp;
use fittracker_app::controller::ViewSnapshot;
use fittracker_app::onboarding::{OnboardingStep, NAME_REQUIRED_ALERT};
use fittracker_app::{Intent, ViewKind};
use fittracker_shared::{ActivityLevel, FieldChange, PrimaryGoal, Units};

#[test]
fn test_alex_completes_onboarding_with_defaults() {
    let mut app = TestApp::new();

    app.edit_onboarding(FieldChange::Name("Alex".into()));
    app.send(Intent::OnboardingNext);
    // About You: skip every body metric
    app.send(Intent::OnboardingNext);
    app.edit_onboarding(FieldChange::PrimaryGoal(Some(PrimaryGoal::LoseWeight)));
    app.edit_onboarding(FieldChange::WeeklyWorkouts(4));
    app.send(Intent::OnboardingNext);
    app.send(Intent::OnboardingNext);

    let snapshot = app.controller.snapshot();
    match &snapshot.view {
        ViewSnapshot::Onboarding { step, summary, .. } => {
            assert_eq!(*step, OnboardingStep::Complete);
            let summary = summary.as_ref().unwrap();
            assert_eq!(summary.goal, "LOSE WEIGHT");
            assert_eq!(summary.weekly_target, "4 workouts");
        }
        other => panic!("expected onboarding, got {:?}", other),
    }
    assert!(!snapshot.user.is_onboarded);

    app.send(Intent::GetStarted);

    let state = app.controller.state();
    assert!(state.is_onboarded);
    assert_eq!(state.profile.name.as_deref(), Some("Alex"));
    assert_eq!(state.profile.height, Some(170.0));
    assert_eq!(state.profile.weight, Some(70.0));
    assert_eq!(state.profile.age, Some(30));
    assert_eq!(state.profile.activity_level, ActivityLevel::LightlyActive);
    assert_eq!(state.goals.primary_goal, Some(PrimaryGoal::LoseWeight));
    assert_eq!(state.goals.weekly_workouts, 4);
    assert_eq!(state.preferences.units, Units::Metric);
    assert_eq!(state.preferences.default_rest_time, 90);
    assert_eq!(app.controller.view().kind(), ViewKind::Dashboard);
}

#[test]
fn test_entered_metrics_survive_completion() {
    let mut app = TestApp::new();
    app.edit_onboarding(FieldChange::Name("Priya".into()));
    app.edit_onboarding(FieldChange::Height(Some(182.0)));
    app.edit_onboarding(FieldChange::Age(Some(41)));
    app.edit_onboarding(FieldChange::Units(Units::Imperial));
    for _ in 0..4 {
        app.send(Intent::OnboardingNext);
    }
    app.send(Intent::GetStarted);

    let profile = &app.controller.state().profile;
    assert_eq!(profile.height, Some(182.0));
    assert_eq!(profile.age, Some(41));
    assert_eq!(profile.weight, Some(70.0));
    assert_eq!(app.controller.state().preferences.units, Units::Imperial);
}

#[test]
fn test_welcome_step_blocks_without_name() {
    let mut app = TestApp::new();

    app.send(Intent::OnboardingNext);
    app.edit_onboarding(FieldChange::Name("  ".into()));
    app.send(Intent::OnboardingNext);

    assert_eq!(app.prompt.alerts, vec![NAME_REQUIRED_ALERT, NAME_REQUIRED_ALERT]);
    let snapshot = app.controller.snapshot();
    match snapshot.view {
        ViewSnapshot::Onboarding {
            step,
            progress_percent,
            ..
        } => {
            assert_eq!(step, OnboardingStep::Welcome);
            assert_eq!(progress_percent, 20);
        }
        other => panic!("expected onboarding, got {:?}", other),
    }
}

#[test]
fn test_get_started_before_last_step_is_ignored() {
    let mut app = TestApp::new();
    app.edit_onboarding(FieldChange::Name("Alex".into()));
    app.send(Intent::OnboardingNext);

    let revision = app.controller.store().revision();
    app.send(Intent::GetStarted);

    assert_eq!(app.controller.store().revision(), revision);
    assert!(!app.controller.state().is_onboarded);
    assert_eq!(app.controller.view().kind(), ViewKind::Onboarding);
}

#[test]
fn test_get_started_requires_name_cleared_after_welcome() {
    let mut app = TestApp::new();
    app.walk_to_complete("Alex");
    app.edit_onboarding(FieldChange::Name("".into()));

    let revision = app.controller.store().revision();
    app.send(Intent::GetStarted);

    let state = app.controller.state();
    assert!(!state.is_onboarded);
    assert_eq!(state.profile.name, None);
    assert_eq!(app.controller.store().revision(), revision);
    assert_eq!(app.prompt.alerts, vec![NAME_REQUIRED_ALERT]);
    match app.controller.snapshot().view {
        ViewSnapshot::Onboarding { step, .. } => assert_eq!(step, OnboardingStep::Welcome),
        other => panic!("expected onboarding, got {:?}", other),
    }

    app.edit_onboarding(FieldChange::Name("Alex".into()));
    for _ in 0..4 {
        app.send(Intent::OnboardingNext);
    }
    app.send(Intent::GetStarted);

    let snapshot = app.controller.snapshot();
    assert!(snapshot.user.is_onboarded);
    match snapshot.view {
        ViewSnapshot::Dashboard { dashboard } => {
            assert_eq!(dashboard.greeting, "Welcome back, Alex!");
            assert_eq!(dashboard.dropdown.display_name, "Alex");
        }
        other => panic!("expected dashboard, got {:?}", other),
    }
}

#[test]
fn test_previous_keeps_draft() {
    let mut app = TestApp::new();
    app.edit_onboarding(FieldChange::Name("Alex".into()));
    app.send(Intent::OnboardingNext);
    app.edit_onboarding(FieldChange::Weight(Some(82.5)));
    app.send(Intent::OnboardingPrevious);
    app.send(Intent::OnboardingPrevious);

    match app.controller.snapshot().view {
        ViewSnapshot::Onboarding { step, draft, .. } => {
            assert_eq!(step, OnboardingStep::Welcome);
            assert_eq!(draft.name, "Alex");
            assert_eq!(draft.weight, Some(82.5));
        }
        other => panic!("expected onboarding, got {:?}", other),
    }
}

#[test]
fn test_random_names_complete_onboarding() {
    for _ in 0..10 {
        let name = common::fake_full_name();
        let mut app = TestApp::new();
        app.walk_to_complete(&name);
        app.send(Intent::GetStarted);

        assert!(app.controller.state().is_onboarded);
        assert_eq!(app.controller.state().profile.name.as_deref(), Some(name.as_str()));
        assert!(app.prompt.alerts.is_empty());
    }
}
