//! Common test utilities for integration tests
//!
//! Builders for controllers in a known state and a few scripted helpers.

#![allow(dead_code)]

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use fittracker_app::config::AppConfig;
use fittracker_app::{AppController, Effect, Intent, RecordingPrompt};
use fittracker_shared::{FieldChange, UserAction, UserStore};

/// Controller plus the prompt it talks to
pub struct TestApp {
    pub controller: AppController,
    pub prompt: RecordingPrompt,
}

impl TestApp {
    /// Fresh user on the first onboarding step
    pub fn new() -> Self {
        Self::with_store(UserStore::new())
    }

    /// Returning user landing on the dashboard
    pub fn onboarded(name: &str) -> Self {
        let mut store = UserStore::new();
        store.dispatch(UserAction::SetProfile(fittracker_shared::ProfilePatch {
            name: Some(Some(name.to_string())),
            ..Default::default()
        }));
        store.dispatch(UserAction::CompleteOnboarding);
        Self::with_store(store)
    }

    pub fn with_store(store: UserStore) -> Self {
        Self {
            controller: AppController::new(store, &test_config()),
            prompt: RecordingPrompt::answering(true),
        }
    }

    pub fn send(&mut self, intent: Intent) -> Effect {
        self.controller.handle(intent, &mut self.prompt)
    }

    pub fn edit_onboarding(&mut self, change: FieldChange) -> Effect {
        self.send(Intent::EditOnboarding { change })
    }

    pub fn edit_settings(&mut self, change: FieldChange) -> Effect {
        self.send(Intent::EditSettings { change })
    }

    /// Walk the wizard from the first step to the last with the given name
    pub fn walk_to_complete(&mut self, name: &str) {
        self.edit_onboarding(FieldChange::Name(name.to_string()));
        for _ in 0..4 {
            self.send(Intent::OnboardingNext);
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::default()
}

/// A random full name, e.g. "Ada Lovelace"
pub fn fake_full_name() -> String {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    format!("{} {}", first, last)
}
