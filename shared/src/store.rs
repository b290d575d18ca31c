//! User state container
//!
//! Mutations are expressed as [`UserAction`] values and applied through a
//! single reducing function, [`UserState::reduce`]. The [`UserStore`] owns
//! the one canonical [`UserState`] and hands out read-only views of it.

use serde::{Deserialize, Serialize};

use crate::models::{GoalsPatch, PreferencesPatch, ProfilePatch, UserState};

/// A named, serializable mutation of the user state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UserAction {
    SetProfile(ProfilePatch),
    SetGoals(GoalsPatch),
    SetPreferences(PreferencesPatch),
    /// Mark onboarding done and fill in skipped body metrics
    CompleteOnboarding,
    /// Return to the onboarding flow. Profile, goals and preferences are kept.
    ResetOnboarding,
    SetLoading(bool),
    SetError(Option<String>),
}

impl UserAction {
    /// Short action name for logs
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::SetProfile(_) => "set_profile",
            UserAction::SetGoals(_) => "set_goals",
            UserAction::SetPreferences(_) => "set_preferences",
            UserAction::CompleteOnboarding => "complete_onboarding",
            UserAction::ResetOnboarding => "reset_onboarding",
            UserAction::SetLoading(_) => "set_loading",
            UserAction::SetError(_) => "set_error",
        }
    }
}

impl UserState {
    /// Apply one action. No action fails; callers validate beforehand.
    pub fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::SetProfile(patch) => self.profile.merge(patch),
            UserAction::SetGoals(patch) => self.goals.merge(patch),
            UserAction::SetPreferences(patch) => self.preferences.merge(patch),
            UserAction::CompleteOnboarding => {
                self.is_onboarded = true;
                self.profile.fill_defaults();
            }
            UserAction::ResetOnboarding => {
                self.is_onboarded = false;
            }
            UserAction::SetLoading(loading) => self.loading = loading,
            UserAction::SetError(error) => self.error = error,
        }
    }
}

/// Owner of the canonical user state
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    state: UserState,
    revision: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state, e.g. a returning user
    pub fn with_state(state: UserState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    /// Bumped once per applied action
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_onboarded(&self) -> bool {
        self.state.is_onboarded
    }

    pub fn dispatch(&mut self, action: UserAction) {
        self.state.reduce(action);
        self.revision += 1;
    }

    /// Apply several actions back to back
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = UserAction>) {
        for action in actions {
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrimaryGoal, Units, UserGoals};

    #[test]
    fn test_complete_onboarding_fills_defaults() {
        let mut store = UserStore::new();
        store.dispatch(UserAction::SetProfile(ProfilePatch {
            name: Some(Some("Alex".to_string())),
            ..Default::default()
        }));
        store.dispatch(UserAction::CompleteOnboarding);

        let profile = &store.state().profile;
        assert!(store.is_onboarded());
        assert_eq!(profile.height, Some(170.0));
        assert_eq!(profile.weight, Some(70.0));
        assert_eq!(profile.age, Some(30));
    }

    #[test]
    fn test_complete_onboarding_is_idempotent_for_filled_fields() {
        let mut store = UserStore::new();
        store.dispatch(UserAction::SetProfile(ProfilePatch {
            height: Some(Some(185.0)),
            age: Some(Some(52)),
            ..Default::default()
        }));
        store.dispatch(UserAction::CompleteOnboarding);
        store.dispatch(UserAction::SetProfile(ProfilePatch {
            weight: Some(Some(91.5)),
            ..Default::default()
        }));
        store.dispatch(UserAction::CompleteOnboarding);

        let profile = &store.state().profile;
        assert_eq!(profile.height, Some(185.0));
        assert_eq!(profile.age, Some(52));
        assert_eq!(profile.weight, Some(91.5));
    }

    #[test]
    fn test_reset_onboarding_keeps_user_data() {
        let mut store = UserStore::new();
        store.dispatch_all([
            UserAction::SetProfile(ProfilePatch {
                name: Some(Some("Riley".to_string())),
                ..Default::default()
            }),
            UserAction::SetGoals(GoalsPatch {
                primary_goal: Some(Some(PrimaryGoal::GainMuscle)),
                ..Default::default()
            }),
            UserAction::SetPreferences(PreferencesPatch {
                units: Some(Units::Imperial),
                ..Default::default()
            }),
            UserAction::CompleteOnboarding,
        ]);
        let before = store.state().clone();

        store.dispatch(UserAction::ResetOnboarding);

        let after = store.state();
        assert!(!after.is_onboarded);
        assert_eq!(after.profile, before.profile);
        assert_eq!(after.goals, before.goals);
        assert_eq!(after.preferences, before.preferences);
    }

    #[test]
    fn test_goal_reset_restores_defaults_only_for_goals() {
        let mut store = UserStore::new();
        store.dispatch(UserAction::SetGoals(GoalsPatch {
            primary_goal: Some(Some(PrimaryGoal::LoseWeight)),
            weekly_workouts: Some(5),
            ..Default::default()
        }));
        store.dispatch(UserAction::SetPreferences(PreferencesPatch {
            default_rest_time: Some(120),
            ..Default::default()
        }));

        store.dispatch(UserAction::SetGoals(GoalsPatch::defaults()));

        assert_eq!(store.state().goals, UserGoals::default());
        assert_eq!(store.state().preferences.default_rest_time, 120);
    }

    #[test]
    fn test_revision_tracks_dispatches() {
        let mut store = UserStore::new();
        assert_eq!(store.revision(), 0);
        store.dispatch(UserAction::SetLoading(true));
        store.dispatch(UserAction::SetError(Some("offline".to_string())));
        assert_eq!(store.revision(), 2);
        assert!(store.state().loading);
        assert_eq!(store.state().error.as_deref(), Some("offline"));
    }

    #[test]
    fn test_action_serialization() {
        let action = UserAction::SetGoals(GoalsPatch {
            weekly_workouts: Some(4),
            ..Default::default()
        });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "set_goals");
        assert_eq!(json["payload"]["weeklyWorkouts"], 4);

        let parsed: UserAction =
            serde_json::from_str(r#"{"type":"complete_onboarding"}"#).unwrap();
        assert_eq!(parsed, UserAction::CompleteOnboarding);
    }
}
