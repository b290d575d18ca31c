//! Local form drafts
//!
//! Both the onboarding wizard and the settings editor edit a [`FormDraft`]
//! before anything reaches the canonical state. Edits arrive as typed
//! [`FieldChange`] values; blank numeric inputs are `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ModelError;
use crate::models::{
    ActivityLevel, Gender, GoalsPatch, PreferencesPatch, PrimaryGoal, ProfilePatch, Timeframe,
    Units, UserGoals, UserPreferences, UserProfile, UserState,
};

/// Every editable field, named as the rendering layer names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Age,
    Height,
    Weight,
    Gender,
    ActivityLevel,
    PrimaryGoal,
    TargetWeight,
    WeeklyWorkouts,
    Timeframe,
    Units,
    DefaultRestTime,
    WorkoutReminders,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        FormField::Name,
        FormField::Age,
        FormField::Height,
        FormField::Weight,
        FormField::Gender,
        FormField::ActivityLevel,
        FormField::PrimaryGoal,
        FormField::TargetWeight,
        FormField::WeeklyWorkouts,
        FormField::Timeframe,
        FormField::Units,
        FormField::DefaultRestTime,
        FormField::WorkoutReminders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Height => "height",
            FormField::Weight => "weight",
            FormField::Gender => "gender",
            FormField::ActivityLevel => "activityLevel",
            FormField::PrimaryGoal => "primaryGoal",
            FormField::TargetWeight => "targetWeight",
            FormField::WeeklyWorkouts => "weeklyWorkouts",
            FormField::Timeframe => "timeframe",
            FormField::Units => "units",
            FormField::DefaultRestTime => "defaultRestTime",
            FormField::WorkoutReminders => "workoutReminders",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

/// One edit to one draft field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Name(String),
    Age(Option<u32>),
    Height(Option<f64>),
    Weight(Option<f64>),
    Gender(Option<Gender>),
    ActivityLevel(ActivityLevel),
    PrimaryGoal(Option<PrimaryGoal>),
    TargetWeight(Option<f64>),
    WeeklyWorkouts(u8),
    Timeframe(Timeframe),
    Units(Units),
    DefaultRestTime(u16),
    WorkoutReminders(bool),
}

impl FieldChange {
    pub fn field(&self) -> FormField {
        match self {
            FieldChange::Name(_) => FormField::Name,
            FieldChange::Age(_) => FormField::Age,
            FieldChange::Height(_) => FormField::Height,
            FieldChange::Weight(_) => FormField::Weight,
            FieldChange::Gender(_) => FormField::Gender,
            FieldChange::ActivityLevel(_) => FormField::ActivityLevel,
            FieldChange::PrimaryGoal(_) => FormField::PrimaryGoal,
            FieldChange::TargetWeight(_) => FormField::TargetWeight,
            FieldChange::WeeklyWorkouts(_) => FormField::WeeklyWorkouts,
            FieldChange::Timeframe(_) => FormField::Timeframe,
            FieldChange::Units(_) => FormField::Units,
            FieldChange::DefaultRestTime(_) => FormField::DefaultRestTime,
            FieldChange::WorkoutReminders(_) => FormField::WorkoutReminders,
        }
    }
}

/// Editable copy of every user-facing field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    // Profile
    pub name: String,
    pub age: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: ActivityLevel,
    // Goals
    pub primary_goal: Option<PrimaryGoal>,
    pub target_weight: Option<f64>,
    pub weekly_workouts: u8,
    pub timeframe: Timeframe,
    // Preferences
    pub units: Units,
    pub default_rest_time: u16,
    pub workout_reminders: bool,
}

impl Default for FormDraft {
    fn default() -> Self {
        let goals = UserGoals::default();
        let preferences = UserPreferences::default();
        Self {
            name: String::new(),
            age: None,
            height: None,
            weight: None,
            gender: None,
            activity_level: ActivityLevel::default(),
            primary_goal: goals.primary_goal,
            target_weight: goals.target_weight,
            weekly_workouts: goals.weekly_workouts,
            timeframe: goals.timeframe,
            units: preferences.units,
            default_rest_time: preferences.default_rest_time,
            workout_reminders: preferences.workout_reminders,
        }
    }
}

impl FormDraft {
    /// Prefill from the canonical state, as the settings editor does
    pub fn from_state(state: &UserState) -> Self {
        let UserProfile {
            name,
            age,
            height,
            weight,
            gender,
            activity_level,
        } = &state.profile;
        let UserGoals {
            primary_goal,
            target_weight,
            weekly_workouts,
            timeframe,
        } = &state.goals;
        let prefs = &state.preferences;

        Self {
            name: name.clone().unwrap_or_default(),
            age: *age,
            height: *height,
            weight: *weight,
            gender: *gender,
            activity_level: *activity_level,
            primary_goal: *primary_goal,
            target_weight: *target_weight,
            weekly_workouts: *weekly_workouts,
            timeframe: *timeframe,
            units: prefs.units,
            default_rest_time: prefs.default_rest_time,
            workout_reminders: prefs.workout_reminders,
        }
    }

    /// Apply an edit and report which field it touched
    pub fn apply(&mut self, change: FieldChange) -> FormField {
        let field = change.field();
        match change {
            FieldChange::Name(v) => self.name = v,
            FieldChange::Age(v) => self.age = v,
            FieldChange::Height(v) => self.height = v,
            FieldChange::Weight(v) => self.weight = v,
            FieldChange::Gender(v) => self.gender = v,
            FieldChange::ActivityLevel(v) => self.activity_level = v,
            FieldChange::PrimaryGoal(v) => self.primary_goal = v,
            FieldChange::TargetWeight(v) => self.target_weight = v,
            FieldChange::WeeklyWorkouts(v) => self.weekly_workouts = v,
            FieldChange::Timeframe(v) => self.timeframe = v,
            FieldChange::Units(v) => self.units = v,
            FieldChange::DefaultRestTime(v) => self.default_rest_time = v,
            FieldChange::WorkoutReminders(v) => self.workout_reminders = v,
        }
        field
    }

    /// Whether the name has something other than whitespace
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Every profile field. Skipped optional fields are cleared.
    pub fn profile_patch(&self) -> ProfilePatch {
        ProfilePatch {
            name: Some(Some(self.name.clone())),
            age: Some(self.age),
            height: Some(self.height),
            weight: Some(self.weight),
            gender: Some(self.gender),
            activity_level: Some(self.activity_level),
        }
    }

    pub fn goals_patch(&self) -> GoalsPatch {
        GoalsPatch {
            primary_goal: Some(self.primary_goal),
            target_weight: Some(self.target_weight),
            weekly_workouts: Some(self.weekly_workouts),
            timeframe: Some(self.timeframe),
        }
    }

    /// Theme is not on any form, so it is left out and keeps its stored value
    pub fn preferences_patch(&self) -> PreferencesPatch {
        PreferencesPatch {
            units: Some(self.units),
            theme: None,
            default_rest_time: Some(self.default_rest_time),
            workout_reminders: Some(self.workout_reminders),
        }
    }

    /// Put the goal fields back to their defaults
    pub fn reset_goals(&mut self) {
        let goals = UserGoals::default();
        self.primary_goal = goals.primary_goal;
        self.target_weight = goals.target_weight;
        self.weekly_workouts = goals.weekly_workouts;
        self.timeframe = goals.timeframe;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Theme, UserPreferences};

    #[test]
    fn test_field_change_json_shape() {
        let change: FieldChange =
            serde_json::from_str(r#"{"field":"targetWeight","value":72.5}"#).unwrap();
        assert_eq!(change, FieldChange::TargetWeight(Some(72.5)));

        let cleared: FieldChange = serde_json::from_str(r#"{"field":"age","value":null}"#).unwrap();
        assert_eq!(cleared, FieldChange::Age(None));

        let goal: FieldChange =
            serde_json::from_str(r#"{"field":"primaryGoal","value":"gain_muscle"}"#).unwrap();
        assert_eq!(goal.field(), FormField::PrimaryGoal);
    }

    #[test]
    fn test_apply_reports_field() {
        let mut draft = FormDraft::default();
        assert_eq!(draft.apply(FieldChange::Name("Jo".into())), FormField::Name);
        assert_eq!(draft.apply(FieldChange::DefaultRestTime(120)), FormField::DefaultRestTime);
        assert_eq!(draft.name, "Jo");
        assert_eq!(draft.default_rest_time, 120);
    }

    #[test]
    fn test_form_field_names_round_trip_through_from_str() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
        assert!("email".parse::<FormField>().is_err());
    }

    #[test]
    fn test_from_state_prefills_every_group() {
        let mut state = UserState::default();
        state.profile.name = Some("Dana".into());
        state.profile.height = Some(165.0);
        state.goals.weekly_workouts = 5;
        state.preferences.workout_reminders = false;

        let draft = FormDraft::from_state(&state);
        assert_eq!(draft.name, "Dana");
        assert_eq!(draft.height, Some(165.0));
        assert_eq!(draft.weekly_workouts, 5);
        assert!(!draft.workout_reminders);
    }

    #[test]
    fn test_preferences_patch_keeps_theme() {
        let mut prefs = UserPreferences {
            theme: Theme::Dark,
            ..Default::default()
        };
        prefs.merge(FormDraft::default().preferences_patch());
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_has_name_ignores_whitespace() {
        let mut draft = FormDraft::default();
        assert!(!draft.has_name());
        draft.name = "   ".into();
        assert!(!draft.has_name());
        draft.name = " Kim ".into();
        assert!(draft.has_name());
    }
}
