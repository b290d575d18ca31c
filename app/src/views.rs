//! Read-only view models derived from the user state
//!
//! Everything here is a pure function of [`UserState`]; nothing is cached.

use serde::{Deserialize, Serialize};

use fittracker_shared::{
    bmi_reading, format_height, format_weight, humanize, initials, BmiReading, LabelCase,
    UserState, DEFAULT_WEEKLY_WORKOUTS,
};

const NOT_SET: &str = "Not set";

/// The stored name, unless it is blank
fn display_name(state: &UserState) -> Option<&str> {
    state
        .profile
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
}

fn weekly_target(state: &UserState) -> u8 {
    match state.goals.weekly_workouts {
        0 => DEFAULT_WEEKLY_WORKOUTS,
        n => n,
    }
}

/// Avatar menu in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDropdown {
    pub initials: String,
    pub display_name: String,
    pub goal: String,
}

impl ProfileDropdown {
    pub fn from_state(state: &UserState) -> Self {
        let name = display_name(state);
        Self {
            initials: initials(name),
            display_name: name.unwrap_or("User").to_string(),
            goal: state
                .goals
                .primary_goal
                .map(|g| humanize(g.as_str(), LabelCase::AsIs))
                .unwrap_or_else(|| "No goal set".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugRow {
    pub label: String,
    pub value: String,
}

fn or_not_set<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_SET.to_string())
}

/// Raw state dump for development builds
fn debug_rows(state: &UserState) -> Vec<DebugRow> {
    let row = |label: &str, value| DebugRow {
        label: label.to_string(),
        value,
    };
    vec![
        row("Name", state.profile.name.clone().unwrap_or_default()),
        row("Age", or_not_set(state.profile.age)),
        row("Height", format!("{} cm", or_not_set(state.profile.height))),
        row("Weight", format!("{} kg", or_not_set(state.profile.weight))),
        row("Goal", or_not_set(state.goals.primary_goal)),
        row("Units", state.preferences.units.to_string()),
        row(
            "Rest Time",
            format!("{}s", state.preferences.default_rest_time),
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub greeting: String,
    pub goal_line: String,
    pub weekly_target: u8,
    pub dropdown: ProfileDropdown,
    /// Present only when the build enables the debug panel
    pub debug_panel: Option<Vec<DebugRow>>,
}

impl DashboardView {
    pub fn from_state(state: &UserState, debug_panel: bool) -> Self {
        let name = display_name(state).unwrap_or("There");
        let goal_line = match state.goals.primary_goal {
            Some(goal) => format!("Goal: {}", humanize(goal.as_str(), LabelCase::AsIs)),
            None => "Track your fitness journey".to_string(),
        };

        Self {
            greeting: format!("Welcome back, {}!", name),
            goal_line,
            weekly_target: weekly_target(state),
            dropdown: ProfileDropdown::from_state(state),
            debug_panel: debug_panel.then(|| debug_rows(state)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub initials: String,
    pub name: String,
    pub goal_line: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub activity_level: String,
    pub height: String,
    pub weight: String,
    pub bmi: Option<BmiReading>,
    pub goal: String,
    pub target_weight: String,
    pub weekly_workouts: String,
    pub timeframe: String,
    pub units: String,
    pub rest_time: String,
    pub reminders: String,
}

impl ProfileView {
    /// Measurements are shown in the preferred units
    pub fn from_state(state: &UserState) -> Self {
        let profile = &state.profile;
        let goals = &state.goals;
        let prefs = &state.preferences;
        let units = prefs.units;

        Self {
            initials: initials(display_name(state)),
            name: display_name(state).unwrap_or("User").to_string(),
            goal_line: goals
                .primary_goal
                .map(|g| humanize(g.as_str(), LabelCase::Lower))
                .unwrap_or_else(|| "No specific goal".to_string()),
            age: profile.age.map(|age| format!("{} years", age)),
            gender: profile.gender.map(|g| g.label().to_string()),
            activity_level: humanize(profile.activity_level.as_str(), LabelCase::AsIs),
            height: or_not_set(profile.height.map(|cm| format_height(cm, units))),
            weight: or_not_set(profile.weight.map(|kg| format_weight(kg, units))),
            bmi: bmi_reading(profile.weight, profile.height),
            goal: or_not_set(
                goals
                    .primary_goal
                    .map(|g| humanize(g.as_str(), LabelCase::Title)),
            ),
            target_weight: or_not_set(goals.target_weight.map(|kg| format_weight(kg, units))),
            weekly_workouts: format!("{} per week", weekly_target(state)),
            timeframe: humanize(goals.timeframe.as_str(), LabelCase::Title),
            units: humanize(units.as_str(), LabelCase::Title),
            rest_time: format!("{}s", prefs.default_rest_time),
            reminders: if prefs.workout_reminders {
                "Enabled"
            } else {
                "Disabled"
            }
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittracker_shared::{ActivityLevel, Gender, PrimaryGoal, Units};

    fn filled_state() -> UserState {
        let mut state = UserState::default();
        state.profile.name = Some("Alex Morgan".into());
        state.profile.age = Some(30);
        state.profile.height = Some(170.0);
        state.profile.weight = Some(70.0);
        state.profile.gender = Some(Gender::Female);
        state.profile.activity_level = ActivityLevel::VeryActive;
        state.goals.primary_goal = Some(PrimaryGoal::LoseWeight);
        state.goals.weekly_workouts = 4;
        state.is_onboarded = true;
        state
    }

    #[test]
    fn test_dashboard_fallbacks() {
        let view = DashboardView::from_state(&UserState::default(), false);
        assert_eq!(view.greeting, "Welcome back, There!");
        assert_eq!(view.goal_line, "Track your fitness journey");
        assert_eq!(view.dropdown.display_name, "User");
        assert_eq!(view.dropdown.initials, "U");
        assert_eq!(view.dropdown.goal, "No goal set");
        assert!(view.debug_panel.is_none());
    }

    #[test]
    fn test_dashboard_weekly_target_falls_back_when_zero() {
        let mut state = UserState::default();
        state.goals.weekly_workouts = 0;
        assert_eq!(DashboardView::from_state(&state, false).weekly_target, 3);
    }

    #[test]
    fn test_dashboard_with_data() {
        let view = DashboardView::from_state(&filled_state(), true);
        assert_eq!(view.greeting, "Welcome back, Alex Morgan!");
        assert_eq!(view.goal_line, "Goal: lose weight");
        assert_eq!(view.weekly_target, 4);
        assert_eq!(view.dropdown.initials, "AM");

        let rows = view.debug_panel.unwrap();
        assert_eq!(rows[0].value, "Alex Morgan");
        assert_eq!(rows[2].value, "170 cm");
        assert_eq!(rows[6].value, "90s");
    }

    #[test]
    fn test_debug_rows_mark_missing_values() {
        let rows = debug_rows(&UserState::default());
        assert_eq!(rows[1].value, "Not set");
        assert_eq!(rows[3].value, "Not set kg");
        assert_eq!(rows[4].value, "Not set");
    }

    #[test]
    fn test_profile_view_metric() {
        let view = ProfileView::from_state(&filled_state());
        assert_eq!(view.goal_line, "lose weight");
        assert_eq!(view.age.as_deref(), Some("30 years"));
        assert_eq!(view.gender.as_deref(), Some("Female"));
        assert_eq!(view.activity_level, "very active");
        assert_eq!(view.height, "170 cm");
        assert_eq!(view.weight, "70 kg");
        assert_eq!(view.bmi.as_ref().map(|b| b.value), Some(24.2));
        assert_eq!(view.target_weight, "Not set");
        assert_eq!(view.weekly_workouts, "4 per week");
        assert_eq!(view.goal, "Lose Weight");
        assert_eq!(view.timeframe, "3 Months");
        assert_eq!(view.units, "Metric");
        assert_eq!(view.rest_time, "90s");
        assert_eq!(view.reminders, "Enabled");
    }

    #[test]
    fn test_profile_view_imperial() {
        let mut state = filled_state();
        state.preferences.units = Units::Imperial;
        state.preferences.workout_reminders = false;
        let view = ProfileView::from_state(&state);
        assert_eq!(view.height, "5'7\"");
        assert_eq!(view.weight, "154.3 lbs");
        assert_eq!(view.units, "Imperial");
        assert_eq!(view.reminders, "Disabled");
    }

    #[test]
    fn test_blank_name_uses_fallbacks() {
        let mut state = filled_state();
        state.profile.name = Some("  ".into());

        let dashboard = DashboardView::from_state(&state, false);
        assert_eq!(dashboard.greeting, "Welcome back, There!");
        assert_eq!(dashboard.dropdown.display_name, "User");
        assert_eq!(dashboard.dropdown.initials, "U");
        assert_eq!(ProfileView::from_state(&state).name, "User");
    }

    #[test]
    fn test_profile_view_empty() {
        let view = ProfileView::from_state(&UserState::default());
        assert_eq!(view.name, "User");
        assert_eq!(view.goal_line, "No specific goal");
        assert_eq!(view.age, None);
        assert_eq!(view.height, "Not set");
        assert_eq!(view.weight, "Not set");
        assert!(view.bmi.is_none());
        assert_eq!(view.goal, "Not set");
    }
}
